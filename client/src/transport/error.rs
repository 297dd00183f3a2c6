use thiserror::Error;

use super::Route;

/// Errors that can occur while talking to the match service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request never produced a response
    #[error("Network failure on {route}: {reason}")]
    Network { route: Route, reason: String },

    /// The service answered with a non-success status
    #[error("{route} returned HTTP status {status}")]
    Status { route: Route, status: u16 },

    /// The response body could not be decoded into the expected shape
    #[error("Malformed response body from {route}: {reason}")]
    Decode { route: Route, reason: String },
}

impl TransportError {
    pub fn route(&self) -> &Route {
        match self {
            TransportError::Network { route, .. }
            | TransportError::Status { route, .. }
            | TransportError::Decode { route, .. } => route,
        }
    }
}
