//! Bearer token acquisition.
//!
//! A single best-effort password-grant call against the identity service.
//! Tokens are not refreshed when they expire; the user re-runs `auth`.

use serde::Serialize;

use crate::config::{AuthConfig, Credentials, ProviderConfig};
use crate::error::{ErrorBody, ProviderError, Result};
use crate::http_client::{HttpUtils, create_http_client};
use crate::utils::log_sanitizer::redact_secret;

/// Header carrying the issued token.
const SUBJECT_TOKEN_HEADER: &str = "X-Subject-Token";

/// Where a token came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    /// Supplied directly by configuration.
    Configured,
    /// Freshly issued by the identity service; callers may want to persist it.
    PasswordGrant,
}

/// A usable bearer token.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken {
    pub value: String,
    pub source: TokenSource,
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthToken")
            .field("value", &redact_secret(&self.value))
            .field("source", &self.source)
            .finish()
    }
}

#[derive(Serialize)]
struct TokenRequest<'a> {
    auth: AuthBody<'a>,
}

#[derive(Serialize)]
struct AuthBody<'a> {
    identity: Identity<'a>,
    scope: Scope<'a>,
}

#[derive(Serialize)]
struct Identity<'a> {
    methods: [&'static str; 1],
    password: PasswordMethod<'a>,
}

#[derive(Serialize)]
struct PasswordMethod<'a> {
    user: PasswordUser<'a>,
}

#[derive(Serialize)]
struct PasswordUser<'a> {
    id: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct Scope<'a> {
    project: Project<'a>,
}

#[derive(Serialize)]
struct Project<'a> {
    id: &'a str,
}

/// Resolve a bearer token from the configured credentials.
///
/// A configured token is returned as-is without any network call. Password
/// credentials trigger `POST {auth_base_url}/v3/auth/tokens`; only a 201
/// carrying an `X-Subject-Token` header counts as success.
pub async fn authenticate(auth: &AuthConfig, http: &ProviderConfig) -> Result<AuthToken> {
    let (user_id, password, project_id) = match &auth.credentials {
        Credentials::Token(token) => {
            return Ok(AuthToken {
                value: token.clone(),
                source: TokenSource::Configured,
            });
        }
        Credentials::Password {
            user_id,
            password,
            project_id,
        } => (user_id, password, project_id),
    };

    let body = TokenRequest {
        auth: AuthBody {
            identity: Identity {
                methods: ["password"],
                password: PasswordMethod {
                    user: PasswordUser {
                        id: user_id,
                        password,
                    },
                },
            },
            scope: Scope {
                project: Project { id: project_id },
            },
        },
    };
    let body_json = serde_json::to_string(&body).map_err(|e| ProviderError::SerializationError {
        detail: e.to_string(),
    })?;

    let url = auth.token_url();
    log::info!("Requesting a new API token for user {user_id}");

    let client = create_http_client(http)?;
    let builder = client
        .post(&url)
        .header("Accept", "application/json")
        .header("Content-Type", "application/json")
        .body(body_json);
    let response = HttpUtils::execute_request(builder, "POST", &url).await?;

    // Any status other than 201, including other 2xx codes, is a failed grant.
    if response.status != 201 {
        let error = ProviderError::ApiFailure {
            status: response.status,
            body: ErrorBody::parse(&response.body),
        };
        log::warn!("Token request failed: {error}");
        return Err(error);
    }

    let token = response
        .header(SUBJECT_TOKEN_HEADER)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .ok_or(ProviderError::MissingAuthToken {
            status: response.status,
        })?;

    log::info!("Obtained API token {}", redact_secret(&token));
    Ok(AuthToken {
        value: token,
        source: TokenSource::PasswordGrant,
    })
}
