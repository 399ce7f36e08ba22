use serde::{Deserialize, Serialize};

/// Byte counters reported by the transport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub loaded: u64,
    pub total: u64,
}

impl Progress {
    pub fn new(loaded: u64, total: u64) -> Self {
        Progress { loaded, total }
    }

    /// Returns true while there are bytes left to send
    pub fn is_partial(&self) -> bool {
        self.loaded < self.total
    }
}

/// Raw progress event as a transport reports it, either counter may be unknown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEvent {
    pub loaded: Option<u64>,
    pub total: Option<u64>,
}

impl ProgressEvent {
    pub fn new(loaded: u64, total: u64) -> Self {
        ProgressEvent {
            loaded: Some(loaded),
            total: Some(total),
        }
    }

    pub fn has_progress_data(&self) -> bool {
        self.loaded.is_some() && self.total.is_some()
    }
}

/// Fraction of bytes sent, in `[0, 1]`.
///
/// Returns `None` when there is no progress data at all or when the total is
/// zero. A `loaded` larger than `total` is clamped to 1.
pub fn percent_progress(progress: Option<&Progress>) -> Option<f64> {
    let progress = progress?;
    if progress.total == 0 {
        return None;
    }
    Some((progress.loaded as f64 / progress.total as f64).clamp(0.0, 1.0))
}
