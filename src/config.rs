//! Display configuration types and builder

pub use crate::error::BuilderError;

/// Native panel width in pixels
pub const DEFAULT_WIDTH: u16 = 400;
/// Native panel height in pixels
pub const DEFAULT_HEIGHT: u16 = 300;

/// Display dimensions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Width in pixels (source outputs)
    pub width: u16,
    /// Height in pixels (gate outputs)
    pub height: u16,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if either side is zero or the
    /// width is not a multiple of 8 (bitplanes are byte-packed per row).
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || height == 0 || width % 8 != 0 {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of pixels on the panel
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Size of the 2-bit-per-pixel image buffer in bytes
    pub fn buffer_size(&self) -> usize {
        self.pixel_count() / 4
    }

    /// Size of one 1-bit-per-pixel bitplane in bytes
    pub fn plane_size(&self) -> usize {
        self.pixel_count() / 8
    }

    /// Resolution setting payload: width then height, high byte first
    pub fn resolution_bytes(&self) -> [u8; 4] {
        let [w_hi, w_lo] = self.width.to_be_bytes();
        let [h_hi, h_lo] = self.height.to_be_bytes();
        [w_hi, w_lo, h_hi, h_lo]
    }
}

/// Display configuration
///
/// This struct holds the register values written during initialization and
/// the busy-wait timing. Use `Builder` to create a Config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Display dimensions
    pub dimensions: Dimensions,
    /// Power setting payload (command 0x01)
    pub power_setting: [u8; 5],
    /// Booster soft-start payload (command 0x06)
    pub booster_soft_start: [u8; 3],
    /// Panel setting (command 0x00)
    pub panel_setting: u8,
    /// PLL / frame rate (command 0x30)
    pub pll: u8,
    /// VCOM-DC level (command 0x82)
    pub vcm_dc: u8,
    /// VCOM and data interval (command 0x50)
    pub vcom_data_interval: u8,
    /// Delay between busy polls in milliseconds
    pub busy_poll_interval_ms: u32,
    /// Give up waiting for the panel after this many milliseconds (0 = never)
    pub busy_timeout_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Builder::new().into_config()
    }
}

/// Builder for constructing display configuration
///
/// Every value defaults to the 400x300 4-gray setup, so `Builder::new().build()`
/// is enough for the stock panel.
///
/// # Example
///
/// ```rust,no_run
/// use il0398::{Builder, Dimensions};
///
/// let dims = match Dimensions::new(400, 300) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new().dimensions(dims).busy_timeout_ms(10_000).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
pub struct Builder {
    dimensions: Dimensions,
    power_setting: [u8; 5],
    booster_soft_start: [u8; 3],
    panel_setting: u8,
    pll: u8,
    vcm_dc: u8,
    vcom_data_interval: u8,
    busy_poll_interval_ms: u32,
    busy_timeout_ms: u32,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: Dimensions::default(),
            // VGH=20V, VGL=-20V, VDH=15V, VDL=-15V
            power_setting: [0x03, 0x00, 0x2B, 0x2B, 0x13],
            booster_soft_start: [0x17, 0x17, 0x17],
            // Register LUTs, black/white mode
            panel_setting: 0x3F,
            // 100 Hz
            pll: 0x3C,
            vcm_dc: 0x12,
            vcom_data_interval: 0x97,
            busy_poll_interval_ms: 100,
            // Wait for the panel indefinitely
            busy_timeout_ms: 0,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display dimensions
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = dims;
        self
    }

    /// Set the power setting payload
    pub fn power_setting(mut self, values: [u8; 5]) -> Self {
        self.power_setting = values;
        self
    }

    /// Set booster soft-start parameters
    pub fn booster_soft_start(mut self, values: [u8; 3]) -> Self {
        self.booster_soft_start = values;
        self
    }

    /// Set the panel setting byte
    pub fn panel_setting(mut self, value: u8) -> Self {
        self.panel_setting = value;
        self
    }

    /// Set the PLL (frame rate) byte
    pub fn pll(mut self, value: u8) -> Self {
        self.pll = value;
        self
    }

    /// Set the VCOM-DC level
    pub fn vcm_dc(mut self, value: u8) -> Self {
        self.vcm_dc = value;
        self
    }

    /// Set the VCOM and data interval byte
    pub fn vcom_data_interval(mut self, value: u8) -> Self {
        self.vcom_data_interval = value;
        self
    }

    /// Set the delay between busy polls
    pub fn busy_poll_interval_ms(mut self, value: u32) -> Self {
        self.busy_poll_interval_ms = value;
        self
    }

    /// Set the busy-wait timeout
    ///
    /// Default is 0, which waits for the panel forever.
    pub fn busy_timeout_ms(mut self, value: u32) -> Self {
        self.busy_timeout_ms = value;
        self
    }

    fn into_config(self) -> Config {
        Config {
            dimensions: self.dimensions,
            power_setting: self.power_setting,
            booster_soft_start: self.booster_soft_start,
            panel_setting: self.panel_setting,
            pll: self.pll,
            vcm_dc: self.vcm_dc,
            vcom_data_interval: self.vcom_data_interval,
            busy_poll_interval_ms: self.busy_poll_interval_ms,
            busy_timeout_ms: self.busy_timeout_ms,
        }
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if the dimensions do not
    /// satisfy [`Dimensions::new`] (e.g. a struct literal with a zero side).
    pub fn build(self) -> Result<Config, BuilderError> {
        let Dimensions { width, height } = self.dimensions;
        Dimensions::new(width, height)?;
        Ok(self.into_config())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dimensions() {
        let dims = Dimensions::default();
        assert_eq!((dims.width, dims.height), (400, 300));
        assert_eq!(dims.buffer_size(), 30_000);
        assert_eq!(dims.plane_size(), 15_000);
    }

    #[test]
    fn test_resolution_bytes_high_byte_first() {
        assert_eq!(Dimensions::default().resolution_bytes(), [0x01, 0x90, 0x01, 0x2C]);
    }

    #[test]
    fn test_width_must_be_byte_aligned() {
        assert!(matches!(
            Dimensions::new(401, 300),
            Err(BuilderError::InvalidDimensions {
                width: 401,
                height: 300
            })
        ));
    }

    #[test]
    fn test_zero_height_rejected() {
        assert!(Dimensions::new(8, 0).is_err());
    }

    #[test]
    fn test_build_rejects_unvalidated_literal() {
        let result = Builder::new()
            .dimensions(Dimensions {
                width: 0,
                height: 10,
            })
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_defaults() {
        let config = Builder::new().build().unwrap();
        assert_eq!(config.power_setting, [0x03, 0x00, 0x2B, 0x2B, 0x13]);
        assert_eq!(config.booster_soft_start, [0x17, 0x17, 0x17]);
        assert_eq!(config.panel_setting, 0x3F);
        assert_eq!(config.pll, 0x3C);
        assert_eq!(config.vcm_dc, 0x12);
        assert_eq!(config.vcom_data_interval, 0x97);
        assert_eq!(config.busy_poll_interval_ms, 100);
        assert_eq!(config.busy_timeout_ms, 0);
    }

    #[test]
    fn test_builder_overrides() {
        let config = Builder::new()
            .vcm_dc(0x08)
            .busy_timeout_ms(5_000)
            .build()
            .unwrap();
        assert_eq!(config.vcm_dc, 0x08);
        assert_eq!(config.busy_timeout_ms, 5_000);
    }
}
