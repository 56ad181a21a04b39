//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use conoha_dns_provider::{ErrorBody, ProviderError};

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// No domain in the current listing matches the identifier (short ID or name)
    #[error("Domain not found: {0}")]
    DomainNotFound(String),

    /// No record in the domain's listing has this short ID
    #[error("Record '{record}' not found in domain {domain}")]
    RecordNotFound { domain: String, record: String },

    /// The delete call for an already resolved domain failed
    #[error("Failed to delete domain {name} (ID: {id}): {source}")]
    DomainDelete {
        name: String,
        id: String,
        #[source]
        source: ProviderError,
    },

    /// Gateway error (API failure, transport, configuration)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// Whether the failure is expected (bad input, missing resource); used to
    /// pick the log level.
    ///
    /// Log at `warn` when this returns `true` and at `error` otherwise.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::DomainNotFound(_) | Self::RecordNotFound { .. } => true,
            Self::DomainDelete { source, .. } | Self::Provider(source) => source.is_expected(),
        }
    }

    /// The gateway error behind this one, if any.
    #[must_use]
    pub fn provider_error(&self) -> Option<&ProviderError> {
        match self {
            Self::DomainDelete { source, .. } | Self::Provider(source) => Some(source),
            Self::DomainNotFound(_) | Self::RecordNotFound { .. } => None,
        }
    }

    /// Whether this is a local lookup miss rather than a gateway failure.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::DomainNotFound(_) | Self::RecordNotFound { .. })
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
