//! Gray levels for 4-level grayscale e-paper panels
//!
//! This module defines the [`Gray`] enum for the four levels the panel can
//! show, and how each level is stored and transmitted.
//!
//! ## Gray Representation
//!
//! The pixel buffer holds 2 bits per pixel. At refresh time every pixel is
//! split into one bit in the "previous frame" plane and one bit in the
//! "current frame" plane:
//!
//! | Gray      | Code | Old plane | New plane | Fill byte |
//! |-----------|------|-----------|-----------|-----------|
//! | White     | 11   | 1         | 1         | 0xFF      |
//! | Black     | 00   | 0         | 0         | 0x00      |
//! | DarkGray  | 10   | 0         | 1         | 0xAA      |
//! | LightGray | 01   | 1         | 0         | 0x55      |
//!
//! ## Example
//!
//! ```
//! use il0398::Gray;
//!
//! assert_eq!(Gray::DarkGray.code(), 0b10);
//! assert_eq!(Gray::DarkGray.planes(), (false, true));
//! assert_eq!(Gray::from_planes(false, true), Gray::DarkGray);
//! ```

/// Gray levels supported in 4-gray mode
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Gray {
    /// White pixels
    #[default]
    White,
    /// Black pixels
    Black,
    /// Dark gray pixels
    DarkGray,
    /// Light gray pixels
    LightGray,
}

#[cfg(feature = "graphics")]
impl embedded_graphics_core::prelude::PixelColor for Gray {
    type Raw = embedded_graphics_core::pixelcolor::raw::RawU2;
}

impl Gray {
    /// All four levels, darkest first
    pub const ALL: [Gray; 4] = [Gray::Black, Gray::DarkGray, Gray::LightGray, Gray::White];

    /// 2-bit storage code of this level
    pub fn code(self) -> u8 {
        match self {
            Self::White => 0b11,
            Self::Black => 0b00,
            Self::DarkGray => 0b10,
            Self::LightGray => 0b01,
        }
    }

    /// Level for a 2-bit storage code (upper bits are ignored)
    pub fn from_code(code: u8) -> Self {
        match code & 0b11 {
            0b11 => Self::White,
            0b00 => Self::Black,
            0b10 => Self::DarkGray,
            _ => Self::LightGray,
        }
    }

    /// Byte that fills four consecutive pixels with this level
    ///
    /// ```
    /// use il0398::Gray;
    ///
    /// assert_eq!(Gray::White.fill_byte(), 0xFF);
    /// assert_eq!(Gray::Black.fill_byte(), 0x00);
    /// assert_eq!(Gray::DarkGray.fill_byte(), 0xAA);
    /// assert_eq!(Gray::LightGray.fill_byte(), 0x55);
    /// ```
    pub fn fill_byte(self) -> u8 {
        self.code() * 0x55
    }

    /// Bits this level contributes to the (old, new) bitplanes
    pub fn planes(self) -> (bool, bool) {
        match self {
            Self::White => (true, true),
            Self::Black => (false, false),
            Self::DarkGray => (false, true),
            Self::LightGray => (true, false),
        }
    }

    /// Reconstruct a level from its (old, new) bitplane bits
    pub fn from_planes(old: bool, new: bool) -> Self {
        match (old, new) {
            (true, true) => Self::White,
            (false, false) => Self::Black,
            (false, true) => Self::DarkGray,
            (true, false) => Self::LightGray,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for gray in Gray::ALL {
            assert_eq!(Gray::from_code(gray.code()), gray);
        }
    }

    #[test]
    fn test_plane_pairs_are_distinct() {
        for (i, a) in Gray::ALL.iter().enumerate() {
            for b in &Gray::ALL[i + 1..] {
                assert_ne!(a.planes(), b.planes());
            }
        }
    }

    #[test]
    fn test_from_planes_inverts_planes() {
        for gray in Gray::ALL {
            let (old, new) = gray.planes();
            assert_eq!(Gray::from_planes(old, new), gray);
        }
    }

    #[test]
    fn test_fill_byte_repeats_code() {
        for gray in Gray::ALL {
            let byte = gray.fill_byte();
            for shift in [0, 2, 4, 6] {
                assert_eq!((byte >> shift) & 0b11, gray.code());
            }
        }
    }

    #[test]
    fn test_default_is_white() {
        assert_eq!(Gray::default(), Gray::White);
    }
}
