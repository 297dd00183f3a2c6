use thiserror::Error;

use crate::transport::TransportError;

/// Errors surfaced by `MatchSession` operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The server did not create a player; the session stays idle
    #[error("Failed to create player: {0}")]
    CreatePlayer(TransportError),

    /// The server did not start a match; the session stays idle
    #[error("Failed to start match: {0}")]
    StartMatch(TransportError),

    /// The server did not accept a deploy. Only surfaced under
    /// `DeployFailurePolicy::Surface`.
    #[error("Deploy was not accepted: {0}")]
    Deploy(TransportError),
}
