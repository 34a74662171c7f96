//! Module: config
//!
//! Purpose: Build-time timing and audio constants for the recorder,
//! plus the `RecorderConfig` value that parameterizes buffer sizing.
//!
//! All cadences are approximate by design: the outer loop and the
//! per-state handlers pace themselves with blocking waits, not hardware
//! timers.

/// Audio sample rate in Hz.
pub const SAMPLE_RATE_HZ: u32 = 16_000;

/// Bits per captured sample.
pub const BITS_PER_SAMPLE: u32 = 16;

/// Maximum recording duration in seconds.
pub const MAX_RECORD_SECS: u32 = 10;

/// Outer-loop poll interval in milliseconds.
pub const POLL_INTERVAL_MS: u32 = 50;

/// Nominal duration of one recording tick (fast-blink on + off).
pub const RECORD_TICK_MS: u32 = 400;

/// Nominal duration of one playback tick.
pub const PLAY_TICK_MS: u32 = 100;

/// Indicator on-time while idle (slow duty cycle).
pub const IDLE_BLINK_ON_MS: u32 = 100;

/// Indicator off-time while idle (slow duty cycle).
pub const IDLE_BLINK_OFF_MS: u32 = 1_900;

/// Indicator half-period while recording (fast duty cycle).
pub const RECORD_BLINK_MS: u32 = 200;

/// Length of one processing acknowledgment pulse (on or off phase).
pub const PROCESSING_PULSE_MS: u32 = 100;

/// Number of processing acknowledgment pulses.
pub const PROCESSING_PULSES: u32 = 3;

/// Debounce settle delay applied between the two button reads.
pub const DEBOUNCE_SETTLE_MS: u32 = 50;

/// Poll interval while waiting for the button to be released.
pub const RELEASE_POLL_MS: u32 = 10;

/// Samples requested from the codec per recording tick.
pub const READ_CHUNK: usize = 256;

/// Codec read timeout per recording tick, in milliseconds.
pub const READ_TIMEOUT_MS: u32 = 100;

/// Press-acknowledgment beep frequency in Hz.
pub const BEEP_FREQ_HZ: u32 = 1_000;

/// Press-acknowledgment beep duration in milliseconds.
pub const BEEP_DURATION_MS: u32 = 100;

/// Recorder configuration.
///
/// The defaults reproduce the reference appliance (16 kHz, 10 s).
/// Tests shrink these to keep sample storage small.
#[derive(Clone, Copy, Debug)]
pub struct RecorderConfig {
    /// Sample rate in Hz.
    pub sample_rate: u32,

    /// Maximum recording duration in seconds.
    pub max_record_secs: u32,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            sample_rate: SAMPLE_RATE_HZ,
            max_record_secs: MAX_RECORD_SECS,
        }
    }
}

impl RecorderConfig {
    /// Create a config with explicit rate and recording limit.
    pub fn new(sample_rate: u32, max_record_secs: u32) -> Self {
        Self {
            sample_rate,
            max_record_secs,
        }
    }

    /// Required sample-buffer capacity: `sample_rate × max_record_secs`.
    #[inline]
    pub fn buffer_capacity(&self) -> usize {
        (self.sample_rate * self.max_record_secs) as usize
    }

    /// Nominal recording tick duration in seconds.
    #[inline]
    pub fn record_tick_secs(&self) -> f64 {
        RECORD_TICK_MS as f64 / 1_000.0
    }

    /// Nominal playback tick duration in seconds.
    #[inline]
    pub fn play_tick_secs(&self) -> f64 {
        PLAY_TICK_MS as f64 / 1_000.0
    }

    /// Samples nominally consumed per playback tick.
    #[inline]
    pub fn samples_per_play_tick(&self) -> usize {
        (self.sample_rate * PLAY_TICK_MS / 1_000) as usize
    }
}
