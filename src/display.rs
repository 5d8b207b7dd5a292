//! Core display operations

use core::iter;

use embedded_hal::delay::DelayNs;

use crate::bitplane::{Plane, plane_bytes};
use crate::command::{
    BOOSTER_SOFT_START, DATA_START_TRANSMISSION_1, DATA_START_TRANSMISSION_2, DEEP_SLEEP,
    DEEP_SLEEP_CHECK_CODE, DISPLAY_REFRESH, GET_STATUS, PANEL_SETTING, PLL_CONTROL, POWER_ON,
    POWER_SETTING, RESOLUTION_SETTING, VCM_DC_SETTING, VCOM_AND_DATA_INTERVAL_SETTING,
};
use crate::config::{Config, Dimensions};
use crate::error::Error;
use crate::interface::DisplayInterface;
use crate::lut::WAVEFORM_UPLOADS;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Time between issuing a refresh and the first busy poll
pub const REFRESH_SETTLE_MS: u32 = 100;

/// Lifecycle of the panel within one power-on session
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelState {
    /// Not reset since the driver was created
    #[default]
    Uninitialized,
    /// Reset pulse train or register setup in progress
    Resetting,
    /// Registers configured, nothing refreshed yet
    Initialized,
    /// A refresh is running
    Busy,
    /// Last refresh finished
    Idle,
    /// Deep sleep; only a hardware reset leaves this state
    Asleep,
}

/// Core display driver for the IL0398 in 4-gray mode
///
/// Owns the hardware interface for the whole session. For embedded-graphics
/// support, use `GraphicDisplay` (requires `graphics` feature).
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Where the panel is in its lifecycle
    state: PanelState,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// Nothing is sent to the panel until [`reset`](Self::reset).
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            config,
            state: PanelState::Uninitialized,
        }
    }

    /// Perform hardware reset and register initialization
    ///
    /// This is the only operation allowed after [`sleep`](Self::sleep).
    pub fn reset<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        log::debug!("hardware reset");
        self.state = PanelState::Resetting;
        self.interface.reset(delay).map_err(Error::Interface)?;
        self.init(delay)
    }

    /// Write the register setup, in the order the controller expects
    fn init<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        let config = self.config.clone();

        self.send_command(POWER_SETTING)?;
        self.send_data(&config.power_setting)?;

        self.send_command(BOOSTER_SOFT_START)?;
        self.send_data(&config.booster_soft_start)?;

        self.send_command(POWER_ON)?;
        self.busy_gate(delay)?;

        self.send_command(PANEL_SETTING)?;
        self.send_data(&[config.panel_setting])?;

        self.send_command(PLL_CONTROL)?;
        self.send_data(&[config.pll])?;

        self.send_command(RESOLUTION_SETTING)?;
        self.send_data(&config.dimensions.resolution_bytes())?;

        self.send_command(VCM_DC_SETTING)?;
        self.send_data(&[config.vcm_dc])?;

        self.send_command(VCOM_AND_DATA_INTERVAL_SETTING)?;
        self.send_data(&[config.vcom_data_interval])?;

        self.state = PanelState::Initialized;
        log::debug!(
            "initialized {}x{}",
            config.dimensions.width,
            config.dimensions.height
        );
        Ok(())
    }

    /// Block until the panel reports ready
    ///
    /// While BUSY is asserted, issues a status query and waits
    /// `busy_poll_interval_ms` before sampling again. With the default
    /// `busy_timeout_ms` of 0 this never gives up.
    ///
    /// Finishes a refresh left in [`PanelState::Busy`] by an earlier timeout.
    ///
    /// # Errors
    ///
    /// Returns `Error::BusyTimeout` once a non-zero `busy_timeout_ms` has
    /// elapsed with the panel still busy, `Error::NotInitialized` before
    /// [`reset`](Self::reset) and `Error::Asleep` after [`sleep`](Self::sleep).
    pub fn wait_until_idle<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        match self.state {
            PanelState::Initialized | PanelState::Idle => self.busy_gate(delay),
            PanelState::Busy => {
                self.busy_gate(delay)?;
                self.state = PanelState::Idle;
                Ok(())
            }
            PanelState::Asleep => Err(Error::Asleep),
            PanelState::Uninitialized | PanelState::Resetting => Err(Error::NotInitialized),
        }
    }

    fn busy_gate<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        let interval = self.config.busy_poll_interval_ms;
        let timeout = self.config.busy_timeout_ms;
        let mut waited_ms: u32 = 0;

        log::debug!("e-paper busy");
        while self.interface.is_busy().map_err(Error::Interface)? {
            if timeout > 0 && waited_ms >= timeout {
                log::warn!("e-paper still busy after {waited_ms} ms, giving up");
                return Err(Error::BusyTimeout { waited_ms });
            }
            self.send_command(GET_STATUS)?;
            delay.delay_ms(interval);
            waited_ms = waited_ms.saturating_add(interval.max(1));
            log::trace!("busy poll, {waited_ms} ms elapsed");
        }
        log::debug!("e-paper busy release");

        Ok(())
    }

    /// Fill both frames with white and refresh
    ///
    /// # Errors
    ///
    /// Returns `Error::NotInitialized` before [`reset`](Self::reset) and
    /// `Error::Asleep` after [`sleep`](Self::sleep).
    pub fn clear<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.ensure_ready()?;
        log::debug!("clear");

        let plane_size = self.config.dimensions.plane_size();
        self.write_plane(DATA_START_TRANSMISSION_1, iter::repeat_n(0xFF, plane_size))?;
        self.write_plane(DATA_START_TRANSMISSION_2, iter::repeat_n(0xFF, plane_size))?;

        self.refresh(delay)
    }

    /// Show a 2-bit-per-pixel image (full refresh)
    ///
    /// Encodes `buffer` into the previous/current frame planes, sends both,
    /// uploads the grayscale waveforms and refreshes. The buffer is only
    /// borrowed for the duration of the call.
    ///
    /// # Arguments
    ///
    /// * `buffer` - Image in the layout described in [`crate::bitplane`];
    ///   bytes past `dimensions.buffer_size()` are ignored
    /// * `delay` - Delay implementation for busy-waiting
    ///
    /// # Errors
    ///
    /// Returns `Error::BufferTooSmall` before sending anything if the buffer
    /// is shorter than `dimensions.buffer_size()`, and `Error::NotInitialized`
    /// if the panel was never reset.
    pub fn redraw<D: DelayNs>(&mut self, buffer: &[u8], delay: &mut D) -> DisplayResult<I> {
        self.ensure_ready()?;

        let required = self.config.dimensions.buffer_size();
        if buffer.len() < required {
            return Err(Error::BufferTooSmall {
                required,
                provided: buffer.len(),
            });
        }
        let image = &buffer[..required];
        log::debug!("redraw, {required} byte image");

        self.write_plane(DATA_START_TRANSMISSION_1, plane_bytes(image, Plane::Old))?;
        self.write_plane(DATA_START_TRANSMISSION_2, plane_bytes(image, Plane::New))?;

        // Waveforms go in after the frame data
        self.upload_waveforms()?;

        self.refresh(delay)
    }

    /// Load the five grayscale waveform tables into their six registers
    pub fn upload_waveforms(&mut self) -> DisplayResult<I> {
        self.ensure_ready()?;
        for (register, lut) in WAVEFORM_UPLOADS {
            self.send_command(register)?;
            self.send_data(lut)?;
        }
        Ok(())
    }

    /// Enter deep sleep
    ///
    /// After this call every operation except [`reset`](Self::reset) returns
    /// `Error::Asleep`. Calling it again while asleep does nothing.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotInitialized` if the panel was never reset.
    pub fn sleep(&mut self) -> DisplayResult<I> {
        match self.state {
            PanelState::Asleep => return Ok(()),
            PanelState::Uninitialized | PanelState::Resetting => {
                return Err(Error::NotInitialized);
            }
            _ => {}
        }
        log::debug!("deep sleep");
        self.send_command(DEEP_SLEEP)?;
        self.send_data(&[DEEP_SLEEP_CHECK_CODE])?;
        self.state = PanelState::Asleep;
        Ok(())
    }

    /// Hold the panel in reset and hand back the interface
    pub fn release(mut self) -> core::result::Result<I, Error<I>> {
        self.interface.hold_reset().map_err(Error::Interface)?;
        Ok(self.interface)
    }

    /// Get display dimensions
    pub fn dimensions(&self) -> &Dimensions {
        &self.config.dimensions
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current lifecycle state
    pub fn state(&self) -> PanelState {
        self.state
    }

    fn refresh<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.send_command(DISPLAY_REFRESH)?;
        self.state = PanelState::Busy;
        delay.delay_ms(REFRESH_SETTLE_MS);
        self.busy_gate(delay)?;
        self.state = PanelState::Idle;
        Ok(())
    }

    fn write_plane(&mut self, command: u8, bytes: impl Iterator<Item = u8>) -> DisplayResult<I> {
        self.send_command(command)?;
        for byte in bytes {
            self.interface.send_data(byte).map_err(Error::Interface)?;
        }
        Ok(())
    }

    /// Frame writes need an initialized, idle panel
    fn ensure_ready(&self) -> DisplayResult<I> {
        match self.state {
            PanelState::Initialized | PanelState::Idle => Ok(()),
            PanelState::Asleep => Err(Error::Asleep),
            PanelState::Busy => Err(Error::Busy),
            PanelState::Uninitialized | PanelState::Resetting => Err(Error::NotInitialized),
        }
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Send data to the display controller
    fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.interface.send_data_bytes(data).map_err(Error::Interface)
    }
}
