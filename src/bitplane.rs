//! Bitplane encoding for 4-level grayscale
//!
//! The controller has no 2-bit pixel format. Four gray levels are produced by
//! writing two 1-bit frames, the "previous" ([`Plane::Old`]) and the "current"
//! ([`Plane::New`]) frame, and letting the waveform tables pick a transition
//! per pixel (see [`crate::lut`]).
//!
//! ## Buffer layouts
//!
//! Both layouts are row-major with pixel `n = y * width + x`.
//!
//! - Image buffer: 2 bits per pixel, pixel `n` at byte `n / 4`, bits
//!   `2 * (n % 4)` and up. The first pixel of a byte is in the low bits.
//! - Bitplane: 1 bit per pixel, pixel `n` at byte `n / 8`, bit `7 - n % 8`.
//!   The first pixel of a byte is the MSB.
//!
//! Every 2 image bytes become exactly 1 byte in each plane.
//!
//! ## Example
//!
//! ```
//! use il0398::bitplane::{plane_bytes, Plane};
//!
//! // 8 pixels: White, Black, DarkGray, LightGray, then four White
//! let image = [0b01_10_00_11, 0xFF];
//! assert!(plane_bytes(&image, Plane::Old).eq([0b1001_1111]));
//! assert!(plane_bytes(&image, Plane::New).eq([0b1010_1111]));
//! ```

use core::iter::FusedIterator;

use crate::color::Gray;

/// Pixels stored in one image buffer byte
pub const PIXELS_PER_BUFFER_BYTE: usize = 4;
/// Pixels stored in one bitplane byte
pub const PIXELS_PER_PLANE_BYTE: usize = 8;

/// One of the two frames written before a grayscale refresh
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Plane {
    /// Previous frame, written with `DATA_START_TRANSMISSION_1`
    Old,
    /// Current frame, written with `DATA_START_TRANSMISSION_2`
    New,
}

impl Plane {
    /// Bit this plane holds for a pixel of the given level
    pub fn bit(self, gray: Gray) -> bool {
        let (old, new) = gray.planes();
        match self {
            Self::Old => old,
            Self::New => new,
        }
    }
}

/// Read pixel `n` from a 2-bit-per-pixel image buffer
///
/// # Panics
///
/// Panics if `n` is not below `buffer.len() * 4`.
pub fn pixel(buffer: &[u8], n: usize) -> Gray {
    let shift = 2 * (n % PIXELS_PER_BUFFER_BYTE);
    Gray::from_code(buffer[n / PIXELS_PER_BUFFER_BYTE] >> shift)
}

/// Write pixel `n` of a 2-bit-per-pixel image buffer
///
/// # Panics
///
/// Panics if `n` is not below `buffer.len() * 4`.
pub fn set_pixel(buffer: &mut [u8], n: usize, gray: Gray) {
    let shift = 2 * (n % PIXELS_PER_BUFFER_BYTE);
    let byte = &mut buffer[n / PIXELS_PER_BUFFER_BYTE];
    *byte = (*byte & !(0b11 << shift)) | (gray.code() << shift);
}

/// Compute byte `index` of a plane from the image buffer
///
/// Byte `index` covers pixels `8 * index .. 8 * index + 8`, which live in
/// image bytes `2 * index` and `2 * index + 1`.
///
/// # Panics
///
/// Panics if `index` is not below `buffer.len() / 2`.
pub fn plane_byte(buffer: &[u8], plane: Plane, index: usize) -> u8 {
    let first = index * PIXELS_PER_PLANE_BYTE;
    (0..PIXELS_PER_PLANE_BYTE).fold(0, |byte, i| {
        let bit = u8::from(plane.bit(pixel(buffer, first + i)));
        byte | (bit << (7 - i))
    })
}

/// Iterator over the bytes of one plane, in transmission order
///
/// Created by [`plane_bytes`]. Reads the image buffer lazily so a full plane
/// never has to be held in memory.
#[derive(Clone, Debug)]
pub struct PlaneBytes<'a> {
    buffer: &'a [u8],
    plane: Plane,
    next: usize,
    len: usize,
}

/// Iterate over the bytes of `plane` for the given image buffer
///
/// Yields `buffer.len() / 2` bytes; a trailing odd byte is ignored.
pub fn plane_bytes(buffer: &[u8], plane: Plane) -> PlaneBytes<'_> {
    PlaneBytes {
        buffer,
        plane,
        next: 0,
        len: buffer.len() / 2,
    }
}

impl Iterator for PlaneBytes<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.next >= self.len {
            return None;
        }
        let byte = plane_byte(self.buffer, self.plane, self.next);
        self.next += 1;
        Some(byte)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PlaneBytes<'_> {}

impl FusedIterator for PlaneBytes<'_> {}

/// Encode an image buffer into both planes at once
///
/// Writes as many plane bytes as the shortest of `old`, `new` and
/// `buffer.len() / 2` allows.
pub fn encode_into(buffer: &[u8], old: &mut [u8], new: &mut [u8]) {
    let old_bytes = plane_bytes(buffer, Plane::Old);
    let new_bytes = plane_bytes(buffer, Plane::New);
    for ((o, n), (old_byte, new_byte)) in old
        .iter_mut()
        .zip(new.iter_mut())
        .zip(old_bytes.zip(new_bytes))
    {
        *o = old_byte;
        *n = new_byte;
    }
}

/// Rebuild an image buffer from its two planes
///
/// Inverse of [`encode_into`]: `buffer` receives `2 * min(old.len(), new.len())`
/// bytes at most.
pub fn decode_into(old: &[u8], new: &[u8], buffer: &mut [u8]) {
    let pixels = old.len().min(new.len()) * PIXELS_PER_PLANE_BYTE;
    let pixels = pixels.min(buffer.len() * PIXELS_PER_BUFFER_BYTE);
    for n in 0..pixels {
        let mask = 0x80 >> (n % PIXELS_PER_PLANE_BYTE);
        let index = n / PIXELS_PER_PLANE_BYTE;
        let gray = Gray::from_planes(old[index] & mask != 0, new[index] & mask != 0);
        set_pixel(buffer, n, gray);
    }
}
