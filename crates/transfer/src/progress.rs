use std::sync::Mutex;

use reelpush_protocol::{UploadPhase, UploadProgress};

/// Callback invoked with a fresh snapshot after every progress change.
pub type ProgressCallback = Box<dyn Fn(UploadProgress) + Send + Sync>;

/// Owns the mutable progress state of one upload attempt.
///
/// Counter updates and callback invocation happen under a single
/// lock, so delivered snapshots are monotonic in `uploaded_bytes`
/// and `current_part_count` even when parts settle concurrently.
/// Each attempt owns its own notifier; nothing here is process-wide.
pub struct ProgressNotifier {
    inner: Mutex<NotifierInner>,
}

struct NotifierInner {
    total_bytes: u64,
    uploaded_bytes: u64,
    parts_done: u32,
    total_parts: u32,
    phase: UploadPhase,
    callback: Option<ProgressCallback>,
}

impl ProgressNotifier {
    /// Creates a notifier in the `Preparing` phase.
    pub fn new(total_bytes: u64, total_parts: u32, callback: Option<ProgressCallback>) -> Self {
        Self {
            inner: Mutex::new(NotifierInner {
                total_bytes,
                uploaded_bytes: 0,
                parts_done: 0,
                total_parts,
                phase: UploadPhase::Preparing,
                callback,
            }),
        }
    }

    /// Transitions to `phase` and notifies.
    pub fn set_phase(&self, phase: UploadPhase) {
        let mut s = self.inner.lock().unwrap();
        s.phase = phase;
        s.notify();
    }

    /// Records one completed part of `size_bytes` and notifies.
    pub fn part_done(&self, size_bytes: u64) {
        let mut s = self.inner.lock().unwrap();
        s.uploaded_bytes += size_bytes;
        s.parts_done += 1;
        s.notify();
    }

    /// Returns the current snapshot without notifying.
    pub fn snapshot(&self) -> UploadProgress {
        self.inner.lock().unwrap().snapshot()
    }
}

impl NotifierInner {
    fn snapshot(&self) -> UploadProgress {
        UploadProgress {
            total_bytes: self.total_bytes,
            uploaded_bytes: self.uploaded_bytes,
            percentage: self.percentage(),
            current_part_count: self.parts_done,
            total_part_count: self.total_parts,
            phase: self.phase,
        }
    }

    fn percentage(&self) -> u8 {
        if self.total_bytes == 0 {
            // A zero-byte upload has no bytes to count; it is done
            // when its single empty part is.
            if self.parts_done >= self.total_parts { 100 } else { 0 }
        } else {
            (self.uploaded_bytes as f64 / self.total_bytes as f64 * 100.0).round() as u8
        }
    }

    fn notify(&self) {
        if let Some(cb) = &self.callback {
            cb(self.snapshot());
        }
    }
}
