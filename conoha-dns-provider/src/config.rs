//! Explicit client configuration.
//!
//! Nothing in this crate reads the process environment; the binary builds
//! these structs once at startup and hands them to the constructors.

use std::time::Duration;

use crate::error::{ProviderError, Result};

/// ConoHa DNS API endpoint (c3j1 region).
pub const DEFAULT_API_BASE_URL: &str = "https://dns-service.c3j1.conoha.io";
/// ConoHa identity endpoint (c3j1 region).
pub const DEFAULT_AUTH_BASE_URL: &str = "https://identity.c3j1.conoha.io";

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// HTTP settings shared by the DNS gateway and the identity call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Base URL the `/v1/...` resource paths are appended to.
    pub api_base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl ProviderConfig {
    /// Default timeouts against a custom API base URL.
    pub fn with_base_url(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            ..Self::default()
        }
    }
}

/// How the bearer token is obtained.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// A token that is already known.
    Token(String),
    /// Password grant against the identity service.
    Password {
        user_id: String,
        password: String,
        project_id: String,
    },
}

impl Credentials {
    /// Pick a credential source from optional parts.
    ///
    /// A token wins outright. Otherwise all three password-grant values must
    /// be present; the error names every one that is missing.
    pub fn from_parts(
        token: Option<String>,
        user_id: Option<String>,
        password: Option<String>,
        project_id: Option<String>,
    ) -> Result<Self> {
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            return Ok(Self::Token(token));
        }

        let user_id = user_id.filter(|v| !v.is_empty());
        let password = password.filter(|v| !v.is_empty());
        let project_id = project_id.filter(|v| !v.is_empty());

        match (user_id, password, project_id) {
            (Some(user_id), Some(password), Some(project_id)) => Ok(Self::Password {
                user_id,
                password,
                project_id,
            }),
            (user_id, password, project_id) => {
                let missing = [
                    ("CONOHA_USER_ID", user_id.is_none()),
                    ("CONOHA_PASSWORD", password.is_none()),
                    ("TENANT_ID", project_id.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, absent)| absent.then(|| name.to_string()))
                .collect();
                Err(ProviderError::MissingCredentials { missing })
            }
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Token(_) => f.debug_tuple("Token").field(&"<redacted>").finish(),
            Self::Password {
                user_id,
                project_id,
                ..
            } => f
                .debug_struct("Password")
                .field("user_id", user_id)
                .field("password", &"<redacted>")
                .field("project_id", project_id)
                .finish(),
        }
    }
}

/// Settings for token acquisition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Identity service base URL; `/v3/auth/tokens` is appended.
    pub auth_base_url: String,
    pub credentials: Credentials,
}

impl AuthConfig {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            auth_base_url: DEFAULT_AUTH_BASE_URL.to_string(),
            credentials,
        }
    }

    /// Full token endpoint URL.
    pub fn token_url(&self) -> String {
        format!("{}/v3/auth/tokens", self.auth_base_url.trim_end_matches('/'))
    }
}
