use arena_shared::Receipt;

/// What a session does with a deploy the server fails to accept.
///
/// The next fetched snapshot shows the true board either way; the policy only
/// decides how loudly the failure is reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeployFailurePolicy {
    /// Swallow the failure after logging it at warn level
    #[default]
    Log,
    /// Swallow the failure, logging it at debug level only
    Ignore,
    /// Return the failure to the caller as `SessionError::Deploy`
    Surface,
}

/// Result of a deploy that did not raise an error
#[derive(Clone, Debug, PartialEq)]
pub enum DeployOutcome {
    /// The server acknowledged the request
    Sent(Receipt),
    /// The session was not running, nothing was sent
    NotRunning,
    /// The server failed the request and the failure was swallowed
    Dropped,
}
