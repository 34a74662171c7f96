//! Audio codec boundary.
//!
//! The core drives the microphone codec through this trait and never
//! looks inside it: sample acquisition hardware, DMA, and clocking are
//! the driver's problem. See `hal::i2s` for the ESP-IDF implementation.

/// I2S pin assignment for the codec.
#[derive(Clone, Copy, Debug)]
pub struct CodecPins {
    /// Serial data in (microphone DOUT).
    pub data_in: i32,
    /// Word select / LR clock.
    pub word_select: i32,
    /// Bit clock.
    pub bit_clock: i32,
}

impl Default for CodecPins {
    fn default() -> Self {
        // INMP441 wiring on the reference board
        Self {
            data_in: 27,
            word_select: 26,
            bit_clock: 25,
        }
    }
}

/// Codec configuration.
#[derive(Clone, Copy, Debug)]
pub struct CodecConfig {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample delivered to the core.
    pub bits_per_sample: u32,
    /// Pin assignment.
    pub pins: CodecPins,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            sample_rate: crate::config::SAMPLE_RATE_HZ,
            bits_per_sample: crate::config::BITS_PER_SAMPLE,
            pins: CodecPins::default(),
        }
    }
}

/// Codec driver error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CodecError {
    /// Configuration rejected by the driver.
    InvalidConfig,
    /// Bus or DMA transfer error.
    Bus,
    /// Driver not initialized, or the device stopped responding.
    NotReady,
    /// Read deadline expired before any data arrived.
    Timeout,
}

impl CodecError {
    /// Transient errors cost one tick's samples and nothing else;
    /// the rest permanently degrade capture for the session.
    #[inline]
    pub fn is_transient(self) -> bool {
        matches!(self, CodecError::Timeout | CodecError::Bus)
    }
}

/// Microphone codec contract required by the state machine.
pub trait AudioCodec {
    /// Bring the codec up. On failure the core runs degraded: recording
    /// is permanently disabled for the session and the user is told once.
    fn initialize(&mut self, config: &CodecConfig) -> Result<(), CodecError>;

    /// Read up to `out.len()` samples, waiting at most `timeout_ms`.
    ///
    /// Returning fewer samples than requested, zero samples, or a
    /// transient error all mean the same thing to the caller: nothing to
    /// append this tick.
    fn read_samples(&mut self, out: &mut [i16], timeout_ms: u32) -> Result<usize, CodecError>;

    /// Tear the codec down. Idempotent.
    fn deinitialize(&mut self) -> Result<(), CodecError>;
}
