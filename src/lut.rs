//! Waveform Look-Up Tables for 4-level grayscale refresh
//!
//! Each table is 7 groups of 6 bytes. In every group the first byte selects
//! the voltage level of four phases, the next four bytes are the phase
//! durations in frames, and the last byte is the repeat count. Unused groups
//! are zero.
//!
//! The controller compares each pixel's "previous frame" bit with its
//! "current frame" bit and picks the waveform register for that transition,
//! so the pair of bitplanes written before a refresh selects one of four
//! waveforms per pixel, and with it one of four gray levels.

use crate::command::{
    LUT_BLACK_TO_BLACK, LUT_BLACK_TO_WHITE, LUT_FOR_VCOM, LUT_WHITE_TO_BLACK, LUT_WHITE_TO_WHITE,
    LUT_WHITE_TO_WHITE_2,
};

/// Size of every waveform table in bytes
pub const LUT_SIZE: usize = 42;

/// A waveform table
pub type Lut = [u8; LUT_SIZE];

/// VCOM waveform
#[rustfmt::skip]
pub const LUT_VCOM: Lut = [
    0x00, 0x0A, 0x00, 0x00, 0x00, 0x01,
    0x60, 0x14, 0x14, 0x00, 0x00, 0x01,
    0x00, 0x14, 0x00, 0x00, 0x00, 0x01,
    0x00, 0x13, 0x0A, 0x01, 0x00, 0x01,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// White-to-white waveform (old=1, new=1: white)
#[rustfmt::skip]
pub const LUT_WW: Lut = [
    0x40, 0x0A, 0x00, 0x00, 0x00, 0x01,
    0x90, 0x14, 0x14, 0x00, 0x00, 0x01,
    0x10, 0x14, 0x0A, 0x00, 0x00, 0x01,
    0xA0, 0x13, 0x01, 0x00, 0x00, 0x01,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Black-to-white waveform (old=0, new=1: dark gray)
#[rustfmt::skip]
pub const LUT_BW: Lut = [
    0x40, 0x0A, 0x00, 0x00, 0x00, 0x01,
    0x90, 0x14, 0x14, 0x00, 0x00, 0x01,
    0x00, 0x14, 0x0A, 0x00, 0x00, 0x01,
    0x99, 0x0C, 0x01, 0x03, 0x04, 0x01,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// White-to-black waveform (old=1, new=0: light gray)
#[rustfmt::skip]
pub const LUT_WB: Lut = [
    0x40, 0x0A, 0x00, 0x00, 0x00, 0x01,
    0x90, 0x14, 0x14, 0x00, 0x00, 0x01,
    0x00, 0x14, 0x0A, 0x00, 0x00, 0x01,
    0x99, 0x0B, 0x04, 0x04, 0x01, 0x01,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Black-to-black waveform (old=0, new=0: black)
#[rustfmt::skip]
pub const LUT_BB: Lut = [
    0x80, 0x0A, 0x00, 0x00, 0x00, 0x01,
    0x90, 0x14, 0x14, 0x00, 0x00, 0x01,
    0x20, 0x14, 0x0A, 0x00, 0x00, 0x01,
    0x50, 0x13, 0x01, 0x00, 0x00, 0x01,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Waveform register writes issued before every grayscale refresh, in order
///
/// The white-to-white table goes to two registers.
pub const WAVEFORM_UPLOADS: [(u8, &Lut); 6] = [
    (LUT_FOR_VCOM, &LUT_VCOM),
    (LUT_WHITE_TO_WHITE, &LUT_WW),
    (LUT_BLACK_TO_WHITE, &LUT_BW),
    (LUT_WHITE_TO_BLACK, &LUT_WB),
    (LUT_BLACK_TO_BLACK, &LUT_BB),
    (LUT_WHITE_TO_WHITE_2, &LUT_WW),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_registers_are_distinct() {
        for (i, (a, _)) in WAVEFORM_UPLOADS.iter().enumerate() {
            for (b, _) in &WAVEFORM_UPLOADS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_white_to_white_uploaded_twice() {
        let ww: alloc::vec::Vec<u8> = WAVEFORM_UPLOADS
            .iter()
            .filter(|(_, lut)| **lut == LUT_WW)
            .map(|(reg, _)| *reg)
            .collect();
        assert_eq!(ww, [LUT_WHITE_TO_WHITE, LUT_WHITE_TO_WHITE_2]);
    }

    #[test]
    fn test_unused_groups_are_zero() {
        for (_, lut) in WAVEFORM_UPLOADS {
            assert!(lut[24..].iter().all(|b| *b == 0));
        }
    }
}
