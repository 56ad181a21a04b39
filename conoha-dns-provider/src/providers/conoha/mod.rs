//! ConoHa DNS v1 Provider

mod http;
mod provider;

use reqwest::Client;

use crate::config::ProviderConfig;
use crate::error::Result;
use crate::http_client::create_http_client;
use crate::utils::log_sanitizer::redact_secret;

/// Token header expected by ConoHa's OpenStack-style services.
pub(crate) const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// ConoHa DNS gateway.
///
/// The only component that talks to the network. Every request carries the
/// bearer token given at construction.
pub struct ConohaProvider {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) token: String,
}

impl ConohaProvider {
    pub fn new(config: &ProviderConfig, token: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: create_http_client(config)?,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    /// Base URL the resource paths are appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl std::fmt::Debug for ConohaProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConohaProvider")
            .field("base_url", &self.base_url)
            .field("token", &redact_secret(&self.token))
            .finish_non_exhaustive()
    }
}
