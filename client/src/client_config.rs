use std::{default::Default, env, time::Duration};

use url::Url;

use crate::{error::ConfigError, session::DeployFailurePolicy, sync::SyncConfig};

/// Base address used when none is supplied
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/";

/// Environment variable holding the base address of the match service
pub const BASE_URL_VAR: &str = "ARENA_BACKEND_URL";

/// Environment variable holding the sync interval in milliseconds
pub const SYNC_INTERVAL_VAR: &str = "ARENA_SYNC_INTERVAL_MS";

/// Contains Config properties which will be used by the Client
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Base address of the match service. Always ends with `/`.
    pub base_url: Url,
    /// Cadence and failure reporting of the sync loop
    pub sync: SyncConfig,
    /// What happens to deploy requests the server fails to accept
    pub deploy_failure: DeployFailurePolicy,
    /// Whether loading the catalog asks the service to seed it first
    pub seed_catalog: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: parse_base_url(DEFAULT_BASE_URL).expect("default base address is valid"),
            sync: SyncConfig::default(),
            deploy_failure: DeployFailurePolicy::default(),
            seed_catalog: true,
        }
    }
}

impl ClientConfig {
    /// Defaults, overridden by `ARENA_BACKEND_URL` and `ARENA_SYNC_INTERVAL_MS`
    /// when they are set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            env::var(BASE_URL_VAR).ok().as_deref(),
            env::var(SYNC_INTERVAL_VAR).ok().as_deref(),
        )
    }

    fn from_values(base_url: Option<&str>, interval_ms: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = base_url {
            config.base_url = parse_base_url(value)?;
        }
        if let Some(value) = interval_ms {
            let millis: u64 = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidInterval {
                    value: value.to_string(),
                })?;
            config = config.with_interval(Duration::from_millis(millis))?;
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, value: &str) -> Result<Self, ConfigError> {
        self.base_url = parse_base_url(value)?;
        Ok(self)
    }

    pub fn with_interval(mut self, interval: Duration) -> Result<Self, ConfigError> {
        if interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        self.sync.interval = interval;
        Ok(self)
    }

    pub fn with_deploy_failure(mut self, policy: DeployFailurePolicy) -> Self {
        self.deploy_failure = policy;
        self
    }
}

/// Validates a base address and normalizes its path to end with `/`, so that
/// routes resolve underneath it rather than beside it.
pub fn parse_base_url(value: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(value.trim()).map_err(|error| ConfigError::InvalidBaseUrl {
        value: value.to_string(),
        reason: error.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(ConfigError::UnsupportedScheme {
                scheme: scheme.to_string(),
            })
        }
    }
    if url.cannot_be_a_base() {
        return Err(ConfigError::CannotBeABase {
            value: value.to_string(),
        });
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}
