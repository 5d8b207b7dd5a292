//! IL0398 4-Gray E-Paper Display Driver
//!
//! A driver for 400x300 e-paper panels built on the IL0398 controller,
//! showing four gray levels from a 2-bit-per-pixel image.
//!
//! ## Features
//!
//! - `no_std` compatible, no allocation
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Full-panel 4-gray refresh and full-panel clear
//! - Deep sleep with lifecycle tracking
//!
//! ## How grayscale works
//!
//! The controller only accepts 1-bit frames. Each redraw splits the image into
//! a "previous" and a "current" bitplane ([`bitplane`]), then loads waveform
//! tables ([`lut`]) that drive each pixel according to its pair of bits.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::{InputPin, OutputPin};
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use il0398::{Builder, Display, Gray, Interface};
//!
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # impl InputPin for MockPin {
//! #     fn is_high(&mut self) -> Result<bool, Self::Error> { Ok(true) }
//! #     fn is_low(&mut self) -> Result<bool, Self::Error> { Ok(false) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let spi = MockSpi;
//! # let dc = MockPin;
//! # let rst = MockPin;
//! # let busy = MockPin;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(spi, dc, rst, busy);
//! let config = match Builder::new().busy_timeout_ms(30_000).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(interface, config);
//! let _ = display.reset(&mut delay);
//! let _ = display.clear(&mut delay);
//!
//! let image = [Gray::DarkGray.fill_byte(); 400 * 300 / 4];
//! let _ = display.redraw(&image, &mut delay);
//! let _ = display.sleep();
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// Bitplane encoding of 2-bit images
pub mod bitplane;
/// Gray levels for 4-gray panels
pub mod color;
/// IL0398 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Hardware interface abstraction
pub mod interface;
/// Look-Up Tables for 4-gray refresh
pub mod lut;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use color::Gray;
pub use config::{Builder, Config, DEFAULT_HEIGHT, DEFAULT_WIDTH, Dimensions};
pub use display::{Display, PanelState, REFRESH_SETTLE_MS};
pub use error::{BuilderError, Error};
pub use interface::InterfaceError;
pub use interface::{DisplayInterface, Interface};

#[cfg(feature = "graphics")]
pub use graphics::GraphicDisplay;
