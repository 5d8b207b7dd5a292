//! IL0398 command definitions
//!
//! This module defines the command bytes used to drive the IL0398 e-paper
//! controller in 4-level grayscale mode. Commands are sent over SPI with the
//! DC pin low; their parameters follow with the DC pin high.
//!
//! ## Command Structure
//!
//! Every byte is framed on its own:
//! 1. Set DC low (command) or high (data)
//! 2. Assert CS
//! 3. Clock out one byte
//! 4. Deassert CS
//!
//! A command with N parameter bytes therefore takes N + 1 chip-select cycles.
//!
//! ## Example
//!
//! ```rust,no_run
//! use il0398::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::{InputPin, OutputPin};
//! # use embedded_hal::spi::{Operation, SpiDevice};
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
//! # let mut interface = Interface::new(MockSpi, MockPin, MockPin, MockPin);
//! // VCOM-DC setting
//! let _ = interface.send_command(command::VCM_DC_SETTING);
//! let _ = interface.send_data(0x12);
//! ```

// Power and panel setup

/// Power setting command (0x01)
///
/// Configures the internal gate/source voltage supplies.
/// Requires 5 bytes (VDS/VDG enable, VCOM_HV/VGHL level, VDH, VDL, VDHR).
pub const POWER_SETTING: u8 = 0x01;

/// Booster soft-start command (0x06)
///
/// Sets the soft-start timing of booster phases A, B and C.
/// Requires 3 bytes.
pub const BOOSTER_SOFT_START: u8 = 0x06;

/// Power on command (0x04)
///
/// Turns on the booster and regulators. BUSY is held low until power is stable.
pub const POWER_ON: u8 = 0x04;

/// Panel setting command (0x00)
///
/// Selects resolution, LUT source, scan direction and booster mode.
/// Requires 1 byte. 0x3F selects register LUTs in black/white mode.
pub const PANEL_SETTING: u8 = 0x00;

/// PLL control command (0x30)
///
/// Sets the frame rate. Requires 1 byte: 0x3C = 100 Hz.
pub const PLL_CONTROL: u8 = 0x30;

/// Resolution setting command (0x61)
///
/// Requires 4 bytes: [width_MSB, width_LSB, height_MSB, height_LSB]
pub const RESOLUTION_SETTING: u8 = 0x61;

/// VCOM-DC setting command (0x82)
///
/// Sets the common electrode DC level. Requires 1 byte.
pub const VCM_DC_SETTING: u8 = 0x82;

/// VCOM and data interval setting command (0x50)
///
/// Sets border output and the interval between VCOM and data.
/// Requires 1 byte.
pub const VCOM_AND_DATA_INTERVAL_SETTING: u8 = 0x50;

// Frame data

/// Data start transmission 1 (0x10)
///
/// Writes the "previous frame" bitplane (one bit per pixel, MSB first).
pub const DATA_START_TRANSMISSION_1: u8 = 0x10;

/// Data start transmission 2 (0x13)
///
/// Writes the "current frame" bitplane (one bit per pixel, MSB first).
pub const DATA_START_TRANSMISSION_2: u8 = 0x13;

/// Display refresh command (0x12)
///
/// Drives the waveform across the whole panel. BUSY is held low while refreshing.
pub const DISPLAY_REFRESH: u8 = 0x12;

// Waveform registers (42 bytes each)

/// VCOM waveform register (0x20)
pub const LUT_FOR_VCOM: u8 = 0x20;

/// White-to-white waveform register (0x21)
pub const LUT_WHITE_TO_WHITE: u8 = 0x21;

/// Black-to-white waveform register (0x22)
pub const LUT_BLACK_TO_WHITE: u8 = 0x22;

/// White-to-black waveform register (0x23)
pub const LUT_WHITE_TO_BLACK: u8 = 0x23;

/// Black-to-black waveform register (0x24)
pub const LUT_BLACK_TO_BLACK: u8 = 0x24;

/// Fifth transition waveform register (0x25)
///
/// Loaded with the white-to-white table in 4-gray mode.
pub const LUT_WHITE_TO_WHITE_2: u8 = 0x25;

// Status and power management

/// Get status command (0x71)
///
/// Issued on every busy poll while waiting for the panel.
pub const GET_STATUS: u8 = 0x71;

/// Deep sleep command (0x07)
///
/// Requires 1 byte, which must be [`DEEP_SLEEP_CHECK_CODE`]. Only a hardware
/// reset wakes the controller afterwards.
pub const DEEP_SLEEP: u8 = 0x07;

/// Check code accompanying [`DEEP_SLEEP`] (0xA5)
///
/// Any other value is ignored by the controller.
pub const DEEP_SLEEP_CHECK_CODE: u8 = 0xA5;
