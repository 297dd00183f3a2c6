use std::{default::Default, time::Duration};

/// Contains Config properties which will be used by the sync loop
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyncConfig {
    /// Fixed cadence at which the loop advances and re-fetches the match
    pub interval: Duration,
    /// Number of consecutive failed cycles after which the loop reports
    /// itself as stalled
    pub stall_threshold: u32,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(1000),
            stall_threshold: 3,
        }
    }
}
