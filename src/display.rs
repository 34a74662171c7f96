//! Display boundary.
//!
//! The core pushes status to the display and never reads anything back;
//! rendering (fonts, progress bar pixels, I2C transfers) lives behind
//! this trait. Implementations must not block longer than a frame
//! refresh, since every call happens inside a tick handler.

/// Status surface driven by the state machine. Fire-and-forget.
pub trait Display {
    /// Two-line message, e.g. `("Ready", "Press to record")`.
    fn show_message(&mut self, title: &str, body: &str);

    /// Recording screen: elapsed time against the limit.
    fn show_recording_status(&mut self, elapsed_secs: f64, max_secs: u32);

    /// Playback screen: elapsed against total, plus a 0.0..=1.0 progress
    /// fraction for the bar.
    fn show_playing_status(&mut self, elapsed_secs: f64, total_secs: f64, progress: f64);
}

/// Display that renders nothing.
///
/// Stands in when the panel failed to initialize or is absent; the
/// appliance stays fully operable without feedback text.
pub struct NullDisplay;

impl Display for NullDisplay {
    fn show_message(&mut self, _title: &str, _body: &str) {}

    fn show_recording_status(&mut self, _elapsed_secs: f64, _max_secs: u32) {}

    fn show_playing_status(&mut self, _elapsed_secs: f64, _total_secs: f64, _progress: f64) {}
}
