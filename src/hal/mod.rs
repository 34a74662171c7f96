//! Hardware Abstraction Layer for RustVoiceRecorder.
//!
//! Thin wrappers around ESP-IDF peripherals.
//! Business logic stays in core modules, HAL is just I/O.

pub mod gpio;
pub mod i2s;

pub use gpio::{ButtonConfig, DisplayI2cConfig, IndicatorConfig, ToneConfig};
pub use i2s::I2sMicrophone;
