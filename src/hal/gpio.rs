//! Reference-board pin assignment.
//!
//! Plain data; actual pin drivers are constructed in `main` from the
//! ESP-IDF peripherals singleton. The numbers here document the board
//! wiring and feed the raw-pin I2S driver.

/// Button pin configuration.
#[derive(Clone, Copy, Debug)]
pub struct ButtonConfig {
    pub pin: i32,
    pub active_low: bool,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        // BOOT button
        Self {
            pin: 34,
            active_low: true,
        }
    }
}

/// Status indicator pin configuration.
#[derive(Clone, Copy, Debug)]
pub struct IndicatorConfig {
    pub pin: i32,
    pub active_high: bool,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            pin: 2,
            active_high: true,
        }
    }
}

/// Tone output pin configuration.
#[derive(Clone, Copy, Debug)]
pub struct ToneConfig {
    pub pin: i32,
}

impl Default for ToneConfig {
    fn default() -> Self {
        // Speaker data pin doubles as the beep output
        Self { pin: 23 }
    }
}

/// Display I2C bus configuration.
#[derive(Clone, Copy, Debug)]
pub struct DisplayI2cConfig {
    pub scl: i32,
    pub sda: i32,
    pub frequency_hz: u32,
}

impl Default for DisplayI2cConfig {
    fn default() -> Self {
        Self {
            scl: 22,
            sda: 21,
            frequency_hz: 400_000,
        }
    }
}
