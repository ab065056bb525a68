//! Application state management

use std::sync::Arc;
use std::time::Duration;

use crate::checks::{HttpLinkProbe, LinkProbe};
use crate::config::Config;

/// Error type for state initialization
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    link_probe: Arc<dyn LinkProbe>,
}

impl AppState {
    /// Create state with an HTTP link probe built from the config
    pub fn new(config: Config) -> Result<Self, StateError> {
        let probe = HttpLinkProbe::new(
            Duration::from_secs(config.link_check.timeout_secs),
            config.link_check.max_redirects,
        )?;
        Ok(Self::with_probe(config, Arc::new(probe)))
    }

    pub fn with_probe(config: Config, link_probe: Arc<dyn LinkProbe>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, link_probe }),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get the external link probe
    pub fn link_probe(&self) -> &dyn LinkProbe {
        self.inner.link_probe.as_ref()
    }
}
