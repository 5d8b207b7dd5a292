//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for communicating with the IL0398 controller over SPI.
//!
//! ## Hardware Requirements
//!
//! The IL0398 requires:
//! - SPI bus (MOSI + SCK) with chip select, handed over as an
//!   [`SpiDevice`] so that every write is framed by one CS assert/deassert
//! - 3 GPIO pins:
//!   - **DC**: Data/Command select (output)
//!   - **RST**: Reset (output, active low)
//!   - **BUSY**: Busy status (input, active low, pull-up)
//!
//! The controller latches one byte per chip-select cycle, so [`Interface`]
//! never batches: sending N bytes performs N SPI transactions.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::{InputPin, OutputPin};
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use il0398::{DisplayInterface, Interface};
//! # use core::convert::Infallible;
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
//! # let mut delay = MockDelay;
//! // Create interface with SPI and GPIO pins
//! let mut interface = Interface::new(MockSpi, MockPin, MockPin, MockPin);
//!
//! // Hardware reset pulse train
//! let _ = interface.reset(&mut delay);
//!
//! // PLL setting: 100 Hz
//! let _ = interface.send_command(0x30);
//! let _ = interface.send_data(0x3C);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::spi::SpiDevice;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Number of high/low pulses in the hardware reset sequence
pub const RESET_PULSES: usize = 3;
/// Time RST is held high in each pulse, and after the last one
pub const RESET_HIGH_MS: u32 = 20;
/// Time RST is held low in each pulse
pub const RESET_LOW_MS: u32 = 2;

/// Trait for hardware interface to the IL0398 controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// SPI + GPIO implementation that satisfies embedded-hal traits, and letting
/// tests stand in for the panel.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. If you need
/// custom behavior (e.g., manual CS control, inverted pins), implement this
/// trait on your own type.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send a command byte to the controller
    ///
    /// The implementation must:
    /// 1. Set DC pin low (command mode)
    /// 2. Send the byte in its own chip-select cycle
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Send one data byte to the controller
    ///
    /// The implementation must:
    /// 1. Set DC pin high (data mode)
    /// 2. Send the byte in its own chip-select cycle
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn send_data(&mut self, data: u8) -> InterfaceResult<(), Self::Error>;

    /// Send a run of data bytes, one chip-select cycle each
    fn send_data_bytes(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        for &byte in data {
            self.send_data(byte)?;
        }
        Ok(())
    }

    /// Perform the hardware reset pulse train
    ///
    /// The implementation must, [`RESET_PULSES`] times:
    /// 1. Set RST pin high and wait [`RESET_HIGH_MS`]
    /// 2. Set RST pin low and wait [`RESET_LOW_MS`]
    ///
    /// and then set RST high and wait [`RESET_HIGH_MS`] once more.
    ///
    /// # Arguments
    ///
    /// * `delay` - Delay implementation for timing
    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error>;

    /// Hold the controller in reset (RST low)
    ///
    /// Used when releasing the panel at the end of a session.
    fn hold_reset(&mut self) -> InterfaceResult<(), Self::Error>;

    /// Sample the BUSY line
    ///
    /// Returns `true` while the controller is still processing.
    fn is_busy(&mut self) -> InterfaceResult<bool, Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// Hardware interface implementation for IL0398
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 SPI and GPIO traits.
///
/// ## Type Parameters
///
/// * `SPI` - SPI device implementing [`SpiDevice`] (owns the CS line)
/// * `DC` - Data/Command pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`]
/// * `BUSY` - Busy pin implementing [`InputPin`]
///
/// ## Example
///
/// ```rust,no_run
/// use il0398::{Config, Display, Interface};
/// # use core::convert::Infallible;
/// # use embedded_hal::digital::{InputPin, OutputPin};
/// # use embedded_hal::spi::{Operation, SpiDevice};
/// # struct MockSpi;
/// # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
/// # impl SpiDevice for MockSpi {
/// #     fn transaction(
/// #         &mut self,
/// #         _operations: &mut [Operation<'_, u8>],
/// #     ) -> Result<(), Self::Error> {
/// #         Ok(())
/// #     }
/// # }
/// # struct MockPin;
/// # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
/// # impl OutputPin for MockPin {
/// #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// # }
/// # impl InputPin for MockPin {
/// #     fn is_high(&mut self) -> Result<bool, Self::Error> { Ok(true) }
/// #     fn is_low(&mut self) -> Result<bool, Self::Error> { Ok(false) }
/// # }
/// let interface = Interface::new(
///     MockSpi,  // SpiDevice
///     MockPin,  // OutputPin
///     MockPin,  // OutputPin
///     MockPin,  // InputPin
/// );
///
/// let _display = Display::new(interface, Config::default());
/// ```
pub struct Interface<SPI, DC, RST, BUSY> {
    /// SPI device for communication
    spi: SPI,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Reset pin (active low)
    rst: RST,
    /// Busy pin (active low)
    busy: BUSY,
    /// Busy pin polarity (true = active low, false = active high)
    busy_active_low: bool,
}

impl<SPI, DC, RST, BUSY> Interface<SPI, DC, RST, BUSY>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    BUSY: InputPin,
{
    /// Create a new Interface
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI device (must implement [`SpiDevice`])
    /// * `dc` - Data/Command pin (output, low=command, high=data)
    /// * `rst` - Reset pin (output, active low)
    /// * `busy` - Busy pin (input, active low)
    pub fn new(spi: SPI, dc: DC, rst: RST, busy: BUSY) -> Self {
        Self {
            spi,
            dc,
            rst,
            busy,
            busy_active_low: true,
        }
    }

    /// Set busy pin polarity
    ///
    /// Default is active-low. Set to false for boards that invert BUSY.
    pub fn set_busy_active_low(&mut self, active_low: bool) -> &mut Self {
        self.busy_active_low = active_low;
        self
    }

    /// Get busy pin polarity (true = active low)
    pub fn busy_active_low(&self) -> bool {
        self.busy_active_low
    }

    /// Release the SPI device and pins
    pub fn release(self) -> (SPI, DC, RST, BUSY) {
        (self.spi, self.dc, self.rst, self.busy)
    }
}

impl<SPI, DC, RST, BUSY, PinErr> DisplayInterface for Interface<SPI, DC, RST, BUSY>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    BUSY: InputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.spi.write(&[command]).map_err(InterfaceError::Spi)
    }

    fn send_data(&mut self, data: u8) -> InterfaceResult<(), Self::Error> {
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        self.spi.write(&[data]).map_err(InterfaceError::Spi)
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        for _ in 0..RESET_PULSES {
            self.rst.set_high().map_err(InterfaceError::Pin)?;
            delay.delay_ms(RESET_HIGH_MS);
            self.rst.set_low().map_err(InterfaceError::Pin)?;
            delay.delay_ms(RESET_LOW_MS);
        }
        self.rst.set_high().map_err(InterfaceError::Pin)?;
        delay.delay_ms(RESET_HIGH_MS);
        Ok(())
    }

    fn hold_reset(&mut self) -> InterfaceResult<(), Self::Error> {
        self.rst.set_low().map_err(InterfaceError::Pin)
    }

    fn is_busy(&mut self) -> InterfaceResult<bool, Self::Error> {
        let busy = if self.busy_active_low {
            self.busy.is_low()
        } else {
            self.busy.is_high()
        };
        busy.map_err(InterfaceError::Pin)
    }
}
