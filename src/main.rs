//! RustVoiceRecorder - Firmware entry point
//!
//! Brings up the pins, codec, and display, then runs the outer polling
//! loop: button → beep + dispatch → current-state tick → log drain.

#![cfg_attr(target_os = "espidf", no_std)]
#![cfg_attr(target_os = "espidf", no_main)]

#[cfg(target_os = "espidf")]
mod firmware {
    use esp_idf_svc::hal::delay::FreeRtos;
    use esp_idf_svc::hal::gpio::PinDriver;
    use esp_idf_svc::hal::peripherals::Peripherals;
    use esp_idf_svc::sys as esp_idf_sys;

    use rust_voice_recorder::config::{
        BEEP_DURATION_MS, BEEP_FREQ_HZ, MAX_RECORD_SECS, POLL_INTERVAL_MS, SAMPLE_RATE_HZ,
    };
    use rust_voice_recorder::hal::I2sMicrophone;
    use rust_voice_recorder::logging::LogEntry;
    use rust_voice_recorder::{BeepGen, ButtonMonitor, NullDisplay, Recorder, RecorderConfig};

    /// Sample storage: sample_rate × max_record_secs.
    const BUFFER_CAPACITY: usize = (SAMPLE_RATE_HZ * MAX_RECORD_SECS) as usize;

    // In production this belongs in PSRAM; internal RAM is tight at the
    // full ten-second capacity.
    static mut AUDIO_STORAGE: [i16; BUFFER_CAPACITY] = [0; BUFFER_CAPACITY];

    /// Write one drained log entry to the ESP-IDF console.
    fn print_entry(entry: &LogEntry) {
        let level = entry.level.as_str();
        // SAFETY: printf with bounded %.*s fields; buffers outlive the call.
        unsafe {
            esp_idf_sys::printf(
                b"[%.*s] %.*s\n\0".as_ptr() as *const core::ffi::c_char,
                level.len() as i32,
                level.as_ptr(),
                entry.len as i32,
                entry.msg.as_ptr(),
            );
        }
    }

    #[no_mangle]
    fn main() {
        esp_idf_sys::link_patches();

        let peripherals = Peripherals::take().expect("peripherals already taken");

        // Reference board wiring: LED GPIO2, BOOT button GPIO34 (active
        // low), tone output GPIO23, I2S microphone on GPIO25/26/27.
        let led = PinDriver::output(peripherals.pins.gpio2).expect("LED pin");
        let button_pin = PinDriver::input(peripherals.pins.gpio34).expect("button pin");
        let tone_pin = PinDriver::output(peripherals.pins.gpio23).expect("tone pin");

        let mut button = ButtonMonitor::new(button_pin, FreeRtos);
        let mut beeper = BeepGen::new(tone_pin, FreeRtos);

        // SAFETY: single thread of control; this is the only reference
        // ever taken to the storage.
        let storage: &'static mut [i16] =
            unsafe { &mut *core::ptr::addr_of_mut!(AUDIO_STORAGE) };

        // TODO: wire the SSD1306 driver on GPIO21/22 behind the Display
        // trait; the appliance runs headless until then.
        let mut recorder = Recorder::new(
            RecorderConfig::default(),
            storage,
            I2sMicrophone::new(),
            NullDisplay,
            led,
            FreeRtos,
        );

        recorder.init();
        while let Some(entry) = recorder.drain_log() {
            print_entry(&entry);
        }

        // Let the boot banner sit before the idle screen takes over
        FreeRtos::delay_ms(2_000);

        loop {
            if button.poll_pressed() {
                // Acknowledge the press before acting on it
                beeper.tone(BEEP_FREQ_HZ, BEEP_DURATION_MS);
                recorder.handle_press();
            }

            recorder.tick();

            while let Some(entry) = recorder.drain_log() {
                print_entry(&entry);
            }

            FreeRtos::delay_ms(POLL_INTERVAL_MS);
        }
    }
}

#[cfg(not(target_os = "espidf"))]
fn main() {
    eprintln!("recorder: firmware entry point only runs on the ESP32 target");
}
