//! Shared application state.
//!
//! `AppState` is injected into the proxy handler via the `State` extractor.
//! It holds one pooled HTTP client and the upstream origin.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;
use crate::routes::proxy::ProxyError;

const CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub api_upstream: Arc<str>,
}

impl AppState {
    /// Build the relay client from host config.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::ClientBuild`] if the TLS backend cannot initialize.
    pub fn new(config: &ServerConfig) -> Result<Self, ProxyError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.proxy_timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| ProxyError::ClientBuild(e.to_string()))?;
        Ok(Self { http, api_upstream: Arc::from(config.api_upstream.as_str()) })
    }
}
