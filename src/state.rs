//! Recorder state machine.
//!
//! Owns everything that matters: the system state, the sample buffer,
//! the timing accumulators, codec health, the status LED, and the event
//! log. One instance exists; collaborators are plugged in through their
//! traits so the whole machine runs against host doubles in tests.
//!
//! # Scheduling model
//!
//! Single thread, cooperative, no interrupts. The outer loop polls the
//! button, dispatches a press, then invokes the handler for the current
//! state; handlers pace themselves with blocking waits (the LED duty
//! cycles double as the tick timing). A wait always runs to completion;
//! cancellation only ever happens between ticks, as a state transition.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::buffer::SampleBuffer;
use crate::codec::{AudioCodec, CodecConfig, CodecError};
use crate::config::{
    RecorderConfig, IDLE_BLINK_OFF_MS, IDLE_BLINK_ON_MS, PROCESSING_PULSES, PROCESSING_PULSE_MS,
    READ_CHUNK, READ_TIMEOUT_MS, RECORD_BLINK_MS,
};
use crate::display::Display;
use crate::fault::CodecHealth;
use crate::logging::{format_to_buffer, EventLog, MAX_MSG_LEN};
use crate::{log_debug, log_error, log_info};

/// System state. Exactly one value is active at any instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SystemState {
    /// Waiting for input; slow indicator blink.
    Idle,
    /// Capturing samples; fast indicator blink.
    Recording,
    /// Replaying the capture; indicator steady on.
    Playing,
    /// Post-recording acknowledgment; auto-exits to `Idle`.
    Processing,
}

/// The orchestrator: consumes press events and codec samples, drives the
/// indicator and display, and owns all timing and transition logic.
pub struct Recorder<'a, C, D, L, W> {
    config: RecorderConfig,
    state: SystemState,
    buffer: SampleBuffer<'a>,

    // Tick counts are authoritative; the accumulators are derived from
    // them so tick-boundary comparisons are exact.
    record_ticks: u32,
    play_ticks: u32,
    recording_elapsed: f64,
    playing_elapsed: f64,

    health: CodecHealth,
    log: EventLog,

    codec: C,
    display: D,
    led: L,
    delay: W,
    deinitialized: bool,
}

impl<'a, C, D, L, W> Recorder<'a, C, D, L, W>
where
    C: AudioCodec,
    D: Display,
    L: OutputPin,
    W: DelayNs,
{
    /// Build the recorder over caller-owned sample storage.
    ///
    /// `storage` should hold `config.buffer_capacity()` samples; a
    /// shorter slice simply records less.
    pub fn new(
        config: RecorderConfig,
        storage: &'a mut [i16],
        codec: C,
        display: D,
        led: L,
        delay: W,
    ) -> Self {
        Self {
            config,
            state: SystemState::Idle,
            buffer: SampleBuffer::new(storage),
            record_ticks: 0,
            play_ticks: 0,
            recording_elapsed: 0.0,
            playing_elapsed: 0.0,
            health: CodecHealth::new(),
            log: EventLog::new(),
            codec,
            display,
            led,
            delay,
            deinitialized: false,
        }
    }

    /// Bring the codec up and show the boot banner.
    ///
    /// A failed initialization leaves the appliance in degraded mode:
    /// the button, indicator, and display keep working but recording is
    /// refused for the session, and the user is told exactly once.
    pub fn init(&mut self) {
        let codec_config = CodecConfig {
            sample_rate: self.config.sample_rate,
            ..CodecConfig::default()
        };

        match self.codec.initialize(&codec_config) {
            Ok(()) => {
                self.health.mark_ready();
                log_info!(self.log, "codec ready at {} Hz", self.config.sample_rate);
            }
            Err(err) => {
                log_error!(self.log, "codec init failed: {:?}", err);
                self.degrade(err);
            }
        }

        self.led_off();
        self.display.show_message("ESP32", "Audio System Ready");
        self.report_degraded_once();
    }

    /// Shut the codec down. Safe to call more than once; the codec is
    /// deinitialized at most once.
    pub fn shutdown(&mut self) {
        if self.deinitialized {
            return;
        }
        self.deinitialized = true;
        if self.codec.deinitialize().is_err() {
            log_error!(self.log, "codec deinit failed");
        }
    }

    // --- Button dispatch ---

    /// Handle a debounced press event. The action depends solely on the
    /// current state.
    pub fn handle_press(&mut self) {
        match self.state {
            SystemState::Idle => self.start_recording(),
            SystemState::Recording => self.stop_recording(),
            SystemState::Playing => self.stop_playing(),
            SystemState::Processing => self.cancel_processing(),
        }
    }

    // --- Transitions ---

    /// Enter `Recording` from `Idle`.
    ///
    /// No-op without a ready codec: no transition, no indicator change,
    /// no message.
    pub fn start_recording(&mut self) {
        if !self.health.is_ready() {
            return;
        }

        self.state = SystemState::Recording;
        self.record_ticks = 0;
        self.recording_elapsed = 0.0;
        self.buffer.reset();
        self.led_on();
        self.display
            .show_recording_status(0.0, self.config.max_record_secs);
        log_info!(self.log, "recording started");
    }

    /// Leave `Recording` for `Processing`. No-op in any other state.
    pub fn stop_recording(&mut self) {
        if self.state != SystemState::Recording {
            return;
        }

        self.state = SystemState::Processing;
        self.led_off();

        let mut buf = [0u8; MAX_MSG_LEN];
        let len = format_to_buffer(
            &mut buf,
            format_args!("{:.1}s Press to play", self.recording_elapsed),
        );
        let body = core::str::from_utf8(&buf[..len]).unwrap_or("Press to play");
        self.display.show_message("Recording Done", body);

        log_info!(
            self.log,
            "recording stopped: {:.1}s, {} samples",
            self.recording_elapsed,
            self.buffer.write_count()
        );
    }

    /// Enter `Playing`.
    ///
    /// Bound to no input: pressing the button while `Idle` always starts
    /// recording. How playback gets triggered (second input, long-press)
    /// is a product decision this core does not take.
    pub fn start_playing(&mut self) {
        if self.buffer.is_empty() {
            self.display.show_message("Error", "No recording");
            return;
        }

        self.state = SystemState::Playing;
        self.play_ticks = 0;
        self.playing_elapsed = 0.0;
        self.buffer.rewind();
        self.led_on();
        let total = self.buffer.total_duration(self.config.sample_rate);
        self.display.show_playing_status(0.0, total, 0.0);
        log_info!(self.log, "playback started: {:.1}s", total);
    }

    /// Leave `Playing` for `Idle`. No-op in any other state.
    pub fn stop_playing(&mut self) {
        if self.state != SystemState::Playing {
            return;
        }

        self.state = SystemState::Idle;
        self.led_off();
        self.display.show_message("Playback Stop", "Press to replay");
        log_info!(self.log, "playback stopped");
    }

    fn cancel_processing(&mut self) {
        self.state = SystemState::Idle;
        self.led_off();
        self.display.show_message("System", "Cancelled");
        log_info!(self.log, "processing cancelled");
    }

    // --- Per-tick handlers ---

    /// Run the handler for the current state. Call once per outer-loop
    /// iteration.
    pub fn tick(&mut self) {
        match self.state {
            SystemState::Idle => self.tick_idle(),
            SystemState::Recording => self.tick_recording(),
            SystemState::Playing => self.tick_playing(),
            SystemState::Processing => self.tick_processing(),
        }
    }

    /// Slow indicator blink, ready message.
    fn tick_idle(&mut self) {
        self.led_on();
        self.delay.delay_ms(IDLE_BLINK_ON_MS);
        self.led_off();
        self.delay.delay_ms(IDLE_BLINK_OFF_MS);

        if self.buffer.is_empty() {
            self.display.show_message("Ready", "Press to record");
        } else {
            self.display.show_message("Ready", "Press to play");
        }
    }

    /// Fast indicator blink, bounded codec read, stop checks.
    fn tick_recording(&mut self) {
        self.led_on();
        self.delay.delay_ms(RECORD_BLINK_MS);
        self.led_off();
        self.delay.delay_ms(RECORD_BLINK_MS);

        self.record_ticks += 1;
        self.recording_elapsed = self.record_ticks as f64 * self.config.record_tick_secs();

        // Whatever the codec delivers this tick is appended up to
        // remaining capacity; a short, empty, or failed read only skips
        // the append, it never aborts the recording.
        let mut chunk = [0i16; READ_CHUNK];
        match self.codec.read_samples(&mut chunk, READ_TIMEOUT_MS) {
            Ok(n) if n > 0 => {
                self.buffer.append(&chunk[..n.min(READ_CHUNK)]);
            }
            Ok(_) => {}
            Err(err) if err.is_transient() => {
                self.health.note_transient();
                log_debug!(self.log, "read skipped: {:?}", err);
            }
            Err(err) => {
                log_error!(self.log, "codec failed mid-recording: {:?}", err);
                self.degrade(err);
                self.report_degraded_once();
            }
        }

        self.display
            .show_recording_status(self.recording_elapsed, self.config.max_record_secs);

        if self.recording_elapsed >= self.config.max_record_secs as f64 || self.buffer.is_full() {
            self.stop_recording();
        }
    }

    /// Indicator steady on, cursor advance, progress, stop check.
    fn tick_playing(&mut self) {
        self.led_on();

        self.play_ticks += 1;
        self.playing_elapsed = self.play_ticks as f64 * self.config.play_tick_secs();
        self.buffer
            .advance_read(self.config.samples_per_play_tick());

        let total = self.buffer.total_duration(self.config.sample_rate);
        let progress = if total > 0.0 {
            (self.playing_elapsed / total).min(1.0)
        } else {
            1.0
        };
        self.display
            .show_playing_status(self.playing_elapsed, total, progress);

        if self.playing_elapsed >= total {
            self.stop_playing();
        }
    }

    /// Three acknowledgment pulses, then back to `Idle` unconditionally.
    fn tick_processing(&mut self) {
        for _ in 0..PROCESSING_PULSES {
            self.led_on();
            self.delay.delay_ms(PROCESSING_PULSE_MS);
            self.led_off();
            self.delay.delay_ms(PROCESSING_PULSE_MS);
        }

        self.state = SystemState::Idle;
    }

    // --- Degraded mode ---

    fn degrade(&mut self, err: CodecError) {
        self.health.mark_fatal(err);
    }

    fn report_degraded_once(&mut self) {
        if self.health.should_report() {
            self.display.show_message("Audio", "Mic unavailable");
        }
    }

    // --- Indicator ---

    // Indicator writes are fire-and-forget; a failed pin write costs one
    // blink phase, nothing else.

    fn led_on(&mut self) {
        let _ = self.led.set_high();
    }

    fn led_off(&mut self) {
        let _ = self.led.set_low();
    }

    // --- Accessors ---

    /// Current state.
    #[inline]
    pub fn state(&self) -> SystemState {
        self.state
    }

    /// The sample buffer.
    #[inline]
    pub fn buffer(&self) -> &SampleBuffer<'a> {
        &self.buffer
    }

    /// Seconds spent in the current (or last) recording.
    #[inline]
    pub fn recording_elapsed(&self) -> f64 {
        self.recording_elapsed
    }

    /// Seconds spent in the current (or last) playback.
    #[inline]
    pub fn playing_elapsed(&self) -> f64 {
        self.playing_elapsed
    }

    /// Codec health, including readiness and failure counters.
    #[inline]
    pub fn codec_health(&self) -> &CodecHealth {
        &self.health
    }

    /// Active configuration.
    #[inline]
    pub fn config(&self) -> &RecorderConfig {
        &self.config
    }

    /// Drain the oldest pending log entry.
    pub fn drain_log(&mut self) -> Option<crate::logging::LogEntry> {
        self.log.drain()
    }
}
