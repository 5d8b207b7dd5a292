//! Graphics support via embedded-graphics
//!
//! This module provides the [`GraphicDisplay`] struct which wraps [`Display`]
//! together with a 2-bit-per-pixel image buffer and implements the
//! [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget) trait from
//! the embedded-graphics ecosystem, so lines, rectangles, ellipses and text
//! can be drawn in any of the four [`Gray`] levels.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     mono_font::{ascii::FONT_6X10, MonoTextStyle},
//!     prelude::*,
//!     primitives::{Ellipse, PrimitiveStyle, Rectangle},
//!     text::Text,
//! };
//! use il0398::{Gray, GraphicDisplay};
//! # use core::convert::Infallible;
//! # use embedded_hal::delay::DelayNs;
//! # use embedded_hal::digital::{InputPin, OutputPin};
//! # use embedded_hal::spi::{Operation, SpiDevice};
//! # use il0398::{Config, Display, Interface};
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
//! # let interface = Interface::new(MockSpi, MockPin, MockPin, MockPin);
//! # let mut driver = Display::new(interface, Config::default());
//! # let mut delay = MockDelay;
//! let _ = driver.reset(&mut delay);
//! let buffer = vec![0u8; driver.dimensions().buffer_size()];
//! let mut display = GraphicDisplay::new(driver, buffer);
//!
//! display.clear(Gray::White);
//!
//! let _ = Rectangle::new(Point::new(0, 0), Size::new(400, 30))
//!     .into_styled(PrimitiveStyle::with_fill(Gray::Black))
//!     .draw(&mut display);
//!
//! let _ = Ellipse::new(Point::new(100, 80), Size::new(120, 60))
//!     .into_styled(PrimitiveStyle::with_fill(Gray::DarkGray))
//!     .draw(&mut display);
//!
//! let _ = Text::new(
//!     "Hello, grayscale!",
//!     Point::new(4, 20),
//!     MonoTextStyle::new(&FONT_6X10, Gray::White),
//! )
//! .draw(&mut display);
//!
//! // Update physical display
//! let _ = display.update(&mut delay);
//! let _ = display.display_mut().sleep();
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    prelude::Pixel,
};
use embedded_hal::delay::DelayNs;

use crate::bitplane::set_pixel;
use crate::color::Gray;
use crate::display::Display;
use crate::error::Error;
use crate::interface::DisplayInterface;

/// Display with a grayscale image buffer
///
/// ## Type Parameters
///
/// * `I` - Interface type implementing [`DisplayInterface`]
/// * `B` - Buffer type implementing `AsMut<[u8]>` for the 2-bit image
pub struct GraphicDisplay<I, B>
where
    I: DisplayInterface,
    B: AsMut<[u8]>,
{
    /// The underlying display driver
    display: Display<I>,
    /// 2-bit-per-pixel image buffer
    buffer: B,
}

type GraphicsResult<I> = core::result::Result<(), Error<I>>;
type GraphicsNewResult<I, T> = core::result::Result<T, Error<I>>;

impl<I, B> GraphicDisplay<I, B>
where
    I: DisplayInterface,
    B: AsMut<[u8]>,
{
    /// Create a new GraphicDisplay
    ///
    /// # Panics
    ///
    /// Panics if the buffer is smaller than `dimensions.buffer_size()` bytes.
    /// Use [`try_new`](Self::try_new) to get an error instead.
    pub fn new(display: Display<I>, mut buffer: B) -> Self {
        let required = display.dimensions().buffer_size();
        assert!(
            buffer.as_mut().len() >= required,
            "buffer too small: required {} bytes, got {}",
            required,
            buffer.as_mut().len()
        );
        Self { display, buffer }
    }

    /// Try to create a new GraphicDisplay, returning an error if the buffer is too small
    ///
    /// # Errors
    ///
    /// Returns `Error::BufferTooSmall` if the buffer is smaller than
    /// `dimensions.buffer_size()` bytes.
    pub fn try_new(display: Display<I>, mut buffer: B) -> GraphicsNewResult<I, Self> {
        let required = display.dimensions().buffer_size();
        if buffer.as_mut().len() < required {
            return Err(Error::BufferTooSmall {
                required,
                provided: buffer.as_mut().len(),
            });
        }
        Ok(Self { display, buffer })
    }

    /// Fill the whole buffer with one gray level
    ///
    /// Only the buffer changes; call [`update`](Self::update) to show it.
    pub fn clear(&mut self, gray: Gray) {
        self.buffer.as_mut().fill(gray.fill_byte());
    }

    /// Send the buffer to the panel and refresh
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interface`] if there's a communication error,
    /// [`Error::NotInitialized`] if the panel was never reset, or
    /// [`Error::Asleep`] if the panel was put to sleep.
    pub fn update<D: DelayNs>(&mut self, delay: &mut D) -> GraphicsResult<I> {
        self.display.redraw(self.buffer.as_mut(), delay)
    }

    /// Get a reference to the underlying display driver
    pub fn display(&self) -> &Display<I> {
        &self.display
    }

    /// Get a mutable reference to the underlying display driver
    pub fn display_mut(&mut self) -> &mut Display<I> {
        &mut self.display
    }

    /// Mutable access to the raw image buffer
    pub fn buffer_mut(&mut self) -> &mut [u8] {
        self.buffer.as_mut()
    }

    /// Split back into the driver and the buffer
    pub fn release(self) -> (Display<I>, B) {
        (self.display, self.buffer)
    }

    fn set_pixel(&mut self, x: u32, y: u32, gray: Gray) {
        let dims = self.display.dimensions();
        let width = dims.width as usize;
        let n = y as usize * width + x as usize;
        if n >= dims.pixel_count() {
            return;
        }
        set_pixel(self.buffer.as_mut(), n, gray);
    }
}

impl<I, B> DrawTarget for GraphicDisplay<I, B>
where
    I: DisplayInterface,
    B: AsMut<[u8]>,
{
    type Color = Gray;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let sz = self.size();

        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 {
                continue;
            }

            let x = x as u32;
            let y = y as u32;

            if x >= sz.width || y >= sz.height {
                continue;
            }

            self.set_pixel(x, y, color);
        }

        Ok(())
    }
}

impl<I, B> OriginDimensions for GraphicDisplay<I, B>
where
    I: DisplayInterface,
    B: AsMut<[u8]>,
{
    fn size(&self) -> Size {
        let dims = self.display.dimensions();
        Size::new(dims.width as u32, dims.height as u32)
    }
}
