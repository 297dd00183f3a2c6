use thiserror::Error;

use crate::transport::TransportError;

/// Errors that can occur while building a `ClientConfig`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Base address is not a URL
    #[error("Invalid base address '{value}': {reason}")]
    InvalidBaseUrl { value: String, reason: String },

    /// Base address uses a scheme other than http or https
    #[error("Unsupported scheme '{scheme}' in base address. Use http or https")]
    UnsupportedScheme { scheme: String },

    /// Base address cannot carry a path (e.g. `mailto:` style URLs)
    #[error("Base address '{value}' cannot carry a path")]
    CannotBeABase { value: String },

    /// Sync interval of zero would spin the sync loop
    #[error("Sync interval must be greater than zero")]
    ZeroInterval,

    /// Sync interval could not be read as a number of milliseconds
    #[error("Invalid sync interval '{value}'. Expected a whole number of milliseconds")]
    InvalidInterval { value: String },
}

/// Errors that can occur while loading the card catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Failed to list cards: {0}")]
    ListCards(TransportError),
}
