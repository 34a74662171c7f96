//! Fixed-capacity sample store for captured audio.
//!
//! Linear store, not a ring: each recording restarts from offset zero and
//! playback replays the captured range without consuming it. Storage is
//! borrowed from the caller (a static array in firmware, a small slice in
//! tests), so capacity is decided where the memory lives.
//!
//! Invariants: `write_count <= capacity` and `read_cursor <= write_count`,
//! maintained by every mutating operation.

/// Capture store with write/read cursor accounting.
pub struct SampleBuffer<'a> {
    storage: &'a mut [i16],
    write_count: usize,
    read_cursor: usize,
}

impl<'a> SampleBuffer<'a> {
    /// Create a buffer over caller-owned storage.
    ///
    /// The slice length is the buffer capacity.
    pub fn new(storage: &'a mut [i16]) -> Self {
        Self {
            storage,
            write_count: 0,
            read_cursor: 0,
        }
    }

    /// Zero both cursors. Storage contents are left as-is.
    #[inline]
    pub fn reset(&mut self) {
        self.write_count = 0;
        self.read_cursor = 0;
    }

    /// Move the playback cursor back to the start of the recording.
    #[inline]
    pub fn rewind(&mut self) {
        self.read_cursor = 0;
    }

    /// Append samples, accepting as many as fit within remaining capacity.
    ///
    /// Returns the accepted count. Never errors; excess input is silently
    /// truncated.
    pub fn append(&mut self, samples: &[i16]) -> usize {
        let accepted = samples.len().min(self.remaining_capacity());
        self.storage[self.write_count..self.write_count + accepted]
            .copy_from_slice(&samples[..accepted]);
        self.write_count += accepted;
        accepted
    }

    /// Advance the playback cursor, clamped to the recorded range.
    ///
    /// Returns the new cursor position.
    pub fn advance_read(&mut self, count: usize) -> usize {
        self.read_cursor = (self.read_cursor + count).min(self.write_count);
        self.read_cursor
    }

    /// Free space in samples.
    #[inline]
    pub fn remaining_capacity(&self) -> usize {
        self.storage.len() - self.write_count
    }

    /// Total capacity in samples.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Samples captured so far.
    #[inline]
    pub fn write_count(&self) -> usize {
        self.write_count
    }

    /// Current playback offset.
    #[inline]
    pub fn read_cursor(&self) -> usize {
        self.read_cursor
    }

    /// True if nothing has been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.write_count == 0
    }

    /// True if capacity is exhausted.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.write_count == self.storage.len()
    }

    /// Duration of the captured audio in seconds at the given rate.
    #[inline]
    pub fn total_duration(&self, sample_rate: u32) -> f64 {
        self.write_count as f64 / sample_rate as f64
    }

    /// View of the captured samples.
    #[inline]
    pub fn recorded(&self) -> &[i16] {
        &self.storage[..self.write_count]
    }
}
