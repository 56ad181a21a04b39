use serde::Serialize;

/// Body of a failed API response.
///
/// ConoHa usually answers errors with a JSON document, but proxies and the
/// identity service occasionally return plain text or HTML. Both are kept so
/// the user always sees what the server said.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ErrorBody {
    /// The body parsed as JSON.
    Json(serde_json::Value),
    /// The raw response text (not valid JSON).
    Text(String),
}

impl ErrorBody {
    /// Parse a response body, falling back to the raw text.
    pub fn parse(text: &str) -> Self {
        serde_json::from_str(text).map_or_else(|_| Self::Text(text.to_string()), Self::Json)
    }

    /// Multi-line rendering used by CLI diagnostics.
    pub fn pretty(&self) -> String {
        match self {
            Self::Json(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            Self::Text(text) => text.clone(),
        }
    }
}

impl std::fmt::Display for ErrorBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(value) => write!(f, "{value}"),
            Self::Text(text) => write!(f, "{text}"),
        }
    }
}

/// Error type for every gateway operation.
///
/// Nothing in this crate retries: each variant is surfaced to the caller
/// exactly once.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The API answered with a non-2xx status.
    ApiFailure {
        /// HTTP status code.
        status: u16,
        /// Structured error body when parseable, raw text otherwise.
        body: ErrorBody,
    },

    /// A 2xx response could not be decoded into the expected shape.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Details about the serialization failure.
        detail: String,
    },

    /// Neither a token nor a complete set of password-grant credentials is configured.
    MissingCredentials {
        /// Names of the environment variables that are unset.
        missing: Vec<String>,
    },

    /// The identity service accepted the request but returned no token header.
    MissingAuthToken {
        /// HTTP status code of the token response.
        status: u16,
    },

    /// Client configuration is unusable (bad TLS backend, invalid timeout, ...).
    InvalidConfig {
        /// Error details.
        detail: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（用户输入、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ApiFailure { status, .. } => (400..500).contains(status),
            Self::MissingCredentials { .. } | Self::MissingAuthToken { .. } => true,
            _ => false,
        }
    }

    /// Whether the error stems from local configuration rather than the API.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::MissingCredentials { .. } | Self::InvalidConfig { .. }
        )
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => write!(f, "Network error: {detail}"),
            Self::Timeout { detail } => write!(f, "Request timeout: {detail}"),
            Self::ApiFailure { status, body } => {
                if matches!(body, ErrorBody::Text(text) if text.is_empty()) {
                    write!(f, "API request failed with status {status}")
                } else {
                    write!(f, "API request failed with status {status}: {body}")
                }
            }
            Self::ParseError { detail } => write!(f, "Parse error: {detail}"),
            Self::SerializationError { detail } => write!(f, "Serialization error: {detail}"),
            Self::MissingCredentials { missing } => write!(
                f,
                "No API token found and password credentials are incomplete (missing: {})",
                missing.join(", ")
            ),
            Self::MissingAuthToken { status } => write!(
                f,
                "Identity service answered {status} without an X-Subject-Token header"
            ),
            Self::InvalidConfig { detail } => write!(f, "Invalid configuration: {detail}"),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
