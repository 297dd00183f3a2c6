use std::fmt;

/// Coarse status of a match session, governing which operations are permitted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LifecycleState {
    /// No match has been started, or the last start failed
    #[default]
    Idle,
    /// Player and match are being requested from the server
    Starting,
    /// A match is attached and its sync loop is ticking
    Running,
    /// The user stopped the session
    Stopped,
}

impl LifecycleState {
    pub fn is_running(&self) -> bool {
        matches!(self, LifecycleState::Running)
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecycleState::Idle => f.write_str("idle"),
            LifecycleState::Starting => f.write_str("starting"),
            LifecycleState::Running => f.write_str("running"),
            LifecycleState::Stopped => f.write_str("stopped"),
        }
    }
}
