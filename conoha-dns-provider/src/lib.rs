//! # conoha-dns-provider
//!
//! Gateway to the ConoHa DNS v1 REST API.
//!
//! This crate is the only part of the workspace that performs network I/O.
//! It exposes:
//!
//! - [`ConohaProvider`]: raw `get` / `post` / `put` / `delete` over the
//!   versioned resource paths, and the resource-level [`DnsApi`] trait on top.
//! - [`authenticate`]: bearer-token resolution, including the password grant
//!   against the identity service.
//! - [`ProviderConfig`] / [`AuthConfig`]: explicit configuration; nothing here
//!   reads the environment.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use conoha_dns_provider::{
//!     authenticate, AuthConfig, ConohaProvider, Credentials, DnsApi, ProviderConfig,
//! };
//!
//! # async fn example() -> conoha_dns_provider::Result<()> {
//! let http = ProviderConfig::default();
//! let auth = AuthConfig::new(Credentials::Token("your-token".to_string()));
//! let token = authenticate(&auth, &http).await?;
//!
//! let provider = ConohaProvider::new(&http, token.value)?;
//! for domain in provider.list_domains().await? {
//!     println!("{} {}", domain.id, domain.name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, ProviderError>`](ProviderError). Non-2xx
//! responses become [`ProviderError::ApiFailure`] carrying the status and the
//! parsed (or raw) body. Nothing is retried.

mod auth;
mod config;
mod error;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

pub use auth::{AuthToken, TokenSource, authenticate};
pub use config::{
    AuthConfig, Credentials, DEFAULT_API_BASE_URL, DEFAULT_AUTH_BASE_URL, ProviderConfig,
};
pub use error::{ErrorBody, ProviderError, Result};
pub use providers::ConohaProvider;
pub use traits::DnsApi;
pub use types::{
    CreateDomainRequest, CreateRecordRequest, DeleteOutcome, Domain, Record, UpdateRecordRequest,
};
