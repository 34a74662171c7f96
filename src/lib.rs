//! # RustVoiceRecorder
//!
//! Control core of a single-button voice recorder/player appliance.
//!
//! ## Architecture
//!
//! A cooperative, single-threaded polling loop owns everything. The
//! [`Recorder`] state machine sequences capture, playback, and
//! cancellation; blocking waits are the only suspension mechanism, so
//! every mutation of state and buffer happens strictly sequentially:
//!
//! ```text
//! loop (50ms) ──▶ ButtonMonitor ──▶ Recorder::handle_press
//!            └──▶ Recorder::tick ──▶ codec read / buffer / display / LED
//! ```
//!
//! Hardware enters through trait seams (`AudioCodec`, `Display`,
//! `embedded-hal` pins and delays), so the whole core runs against host
//! doubles in tests.

#![cfg_attr(not(test), no_std)]

pub mod beep;
pub mod buffer;
pub mod button;
pub mod codec;
pub mod config;
pub mod display;
pub mod fault;
pub mod hal;
pub mod logging;
pub mod state;

pub use beep::BeepGen;
pub use buffer::SampleBuffer;
pub use button::ButtonMonitor;
pub use codec::{AudioCodec, CodecConfig, CodecError, CodecPins};
pub use config::RecorderConfig;
pub use display::{Display, NullDisplay};
pub use fault::CodecHealth;
pub use logging::{EventLog, LogEntry, LogLevel};
pub use state::{Recorder, SystemState};
