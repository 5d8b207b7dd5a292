//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! ## Example
//!
//! ```
//! use il0398::{BuilderError, Dimensions};
//!
//! // Width must be a multiple of 8
//! let result = Dimensions::new(401, 300);
//! assert!(matches!(result, Err(BuilderError::InvalidDimensions { .. })));
//! ```

use crate::interface::DisplayInterface;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`] implementation.
    Interface(I::Error),
    /// Pixel buffer is too small for the display
    ///
    /// The buffer must be at least `dimensions.buffer_size()` bytes.
    BufferTooSmall {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
    /// The panel stayed busy past the configured timeout
    ///
    /// Only returned when [`Config::busy_timeout_ms`](crate::Config::busy_timeout_ms)
    /// is non-zero.
    BusyTimeout {
        /// Time spent polling in milliseconds
        waited_ms: u32,
    },
    /// The panel is in deep sleep
    ///
    /// Only [`Display::reset`](crate::Display::reset) may be called after
    /// [`Display::sleep`](crate::Display::sleep).
    Asleep,
    /// The panel has not been reset and initialized yet
    ///
    /// Call [`Display::reset`](crate::Display::reset) first.
    NotInitialized,
    /// A refresh was left unfinished after a busy timeout
    ///
    /// Call [`Display::wait_until_idle`](crate::Display::wait_until_idle)
    /// or [`Display::reset`](crate::Display::reset) first.
    Busy,
}

// Manual impl so `I` itself need not be `Debug`
impl<I: DisplayInterface> core::fmt::Debug for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => f.debug_tuple("Interface").field(e).finish(),
            Self::BufferTooSmall { required, provided } => f
                .debug_struct("BufferTooSmall")
                .field("required", required)
                .field("provided", provided)
                .finish(),
            Self::BusyTimeout { waited_ms } => f
                .debug_struct("BusyTimeout")
                .field("waited_ms", waited_ms)
                .finish(),
            Self::Asleep => f.write_str("Asleep"),
            Self::NotInitialized => f.write_str("NotInitialized"),
            Self::Busy => f.write_str("Busy"),
        }
    }
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
            Self::BufferTooSmall { required, provided } => {
                write!(
                    f,
                    "Buffer too small: required {required} bytes, provided {provided}"
                )
            }
            Self::BusyTimeout { waited_ms } => {
                write!(f, "Display still busy after {waited_ms} ms")
            }
            Self::Asleep => write!(f, "Display is in deep sleep, reset required"),
            Self::NotInitialized => write!(f, "Display not initialized, reset required"),
            Self::Busy => write!(f, "Display refresh still in progress"),
        }
    }
}

impl<I: DisplayInterface> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
#[derive(Debug, PartialEq, Eq)]
pub enum BuilderError {
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Width in pixels requested
        width: u16,
        /// Height in pixels requested
        height: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (sides must be non-zero, width a multiple of 8)"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}
