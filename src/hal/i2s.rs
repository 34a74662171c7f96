//! I2S microphone codec driver.
//!
//! INMP441-class MEMS microphone on the ESP-IDF I2S peripheral. The
//! device ships 32-bit frames; the driver narrows them to the 16-bit
//! samples the core stores. Host builds get an inert stub (initializes,
//! reads nothing) so the core and its tests run anywhere.

use crate::codec::{AudioCodec, CodecConfig, CodecError};

/// DMA buffer count handed to the I2S driver.
#[cfg(target_os = "espidf")]
const DMA_BUF_COUNT: i32 = 4;

/// Length of each DMA buffer in frames.
#[cfg(target_os = "espidf")]
const DMA_BUF_LEN: i32 = 1024;

/// Microphone codec on I2S port 0.
pub struct I2sMicrophone {
    initialized: bool,
}

impl I2sMicrophone {
    /// Create the driver; nothing touches hardware until `initialize`.
    pub fn new() -> Self {
        Self { initialized: false }
    }

    fn check_config(config: &CodecConfig) -> Result<(), CodecError> {
        if config.sample_rate == 0 {
            return Err(CodecError::InvalidConfig);
        }
        if config.bits_per_sample != 16 && config.bits_per_sample != 32 {
            return Err(CodecError::InvalidConfig);
        }
        Ok(())
    }
}

impl Default for I2sMicrophone {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_os = "espidf"))]
impl AudioCodec for I2sMicrophone {
    fn initialize(&mut self, config: &CodecConfig) -> Result<(), CodecError> {
        Self::check_config(config)?;
        self.initialized = true;
        Ok(())
    }

    fn read_samples(&mut self, _out: &mut [i16], _timeout_ms: u32) -> Result<usize, CodecError> {
        if !self.initialized {
            return Err(CodecError::NotReady);
        }
        // No microphone on the host
        Ok(0)
    }

    fn deinitialize(&mut self) -> Result<(), CodecError> {
        self.initialized = false;
        Ok(())
    }
}

#[cfg(target_os = "espidf")]
impl AudioCodec for I2sMicrophone {
    fn initialize(&mut self, config: &CodecConfig) -> Result<(), CodecError> {
        use esp_idf_svc::sys::{
            i2s_bits_per_sample_t_I2S_BITS_PER_SAMPLE_32BIT,
            i2s_channel_fmt_t_I2S_CHANNEL_FMT_ONLY_LEFT,
            i2s_comm_format_t_I2S_COMM_FORMAT_STAND_I2S, i2s_config_t, i2s_driver_install,
            i2s_mode_t_I2S_MODE_MASTER, i2s_mode_t_I2S_MODE_RX, i2s_pin_config_t,
            i2s_port_t_I2S_NUM_0, i2s_set_pin, ESP_OK, I2S_PIN_NO_CHANGE,
        };

        Self::check_config(config)?;
        if self.initialized {
            return Ok(());
        }

        let i2s_config = i2s_config_t {
            mode: i2s_mode_t_I2S_MODE_MASTER | i2s_mode_t_I2S_MODE_RX,
            sample_rate: config.sample_rate,
            // The microphone always clocks out 32-bit frames
            bits_per_sample: i2s_bits_per_sample_t_I2S_BITS_PER_SAMPLE_32BIT,
            channel_format: i2s_channel_fmt_t_I2S_CHANNEL_FMT_ONLY_LEFT,
            communication_format: i2s_comm_format_t_I2S_COMM_FORMAT_STAND_I2S,
            intr_alloc_flags: 0,
            dma_buf_count: DMA_BUF_COUNT,
            dma_buf_len: DMA_BUF_LEN,
            use_apll: false,
            tx_desc_auto_clear: false,
            fixed_mclk: 0,
            ..Default::default()
        };

        // SAFETY: FFI into the I2S driver; config structs outlive the calls.
        unsafe {
            if i2s_driver_install(i2s_port_t_I2S_NUM_0, &i2s_config, 0, core::ptr::null_mut())
                != ESP_OK
            {
                return Err(CodecError::Bus);
            }

            let pins = i2s_pin_config_t {
                mck_io_num: I2S_PIN_NO_CHANGE,
                bck_io_num: config.pins.bit_clock,
                ws_io_num: config.pins.word_select,
                data_out_num: I2S_PIN_NO_CHANGE,
                data_in_num: config.pins.data_in,
            };
            if i2s_set_pin(i2s_port_t_I2S_NUM_0, &pins) != ESP_OK {
                return Err(CodecError::InvalidConfig);
            }
        }

        self.initialized = true;
        Ok(())
    }

    fn read_samples(&mut self, out: &mut [i16], timeout_ms: u32) -> Result<usize, CodecError> {
        use esp_idf_svc::sys::{i2s_port_t_I2S_NUM_0, i2s_read, ESP_OK};

        if !self.initialized {
            return Err(CodecError::NotReady);
        }
        if out.is_empty() {
            return Ok(0);
        }

        let mut frames = [0i32; crate::config::READ_CHUNK];
        let wanted = out.len().min(frames.len());
        let mut bytes_read: usize = 0;

        // sdkconfig runs FreeRTOS at a 1 kHz tick, so ms map to ticks
        let status = unsafe {
            i2s_read(
                i2s_port_t_I2S_NUM_0,
                frames.as_mut_ptr() as *mut core::ffi::c_void,
                wanted * core::mem::size_of::<i32>(),
                &mut bytes_read,
                timeout_ms,
            )
        };
        if status != ESP_OK {
            return Err(CodecError::Bus);
        }

        let frames_read = bytes_read / core::mem::size_of::<i32>();
        if frames_read == 0 {
            return Err(CodecError::Timeout);
        }

        for (dst, src) in out[..frames_read].iter_mut().zip(frames.iter()) {
            // Top 16 bits carry the sample
            *dst = (*src >> 16) as i16;
        }
        Ok(frames_read)
    }

    fn deinitialize(&mut self) -> Result<(), CodecError> {
        use esp_idf_svc::sys::{i2s_driver_uninstall, i2s_port_t_I2S_NUM_0, ESP_OK};

        if !self.initialized {
            return Ok(());
        }
        self.initialized = false;

        // SAFETY: driver was installed in initialize()
        let status = unsafe { i2s_driver_uninstall(i2s_port_t_I2S_NUM_0) };
        if status != ESP_OK {
            return Err(CodecError::Bus);
        }
        Ok(())
    }
}
