//! ConoHa DNS Core Library
//!
//! Identifier resolution and request normalization for the ConoHa DNS CLI:
//! - Short IDs: 8-hex-digit handles for domain and record UUIDs
//! - Name normalization into fully-qualified, trailing-dot form
//! - Domain Service: cached domain listing, short-ID or name lookup
//! - Record Service: record lookup and merge-style updates
//!
//! All network access goes through the [`conoha_dns_provider::DnsApi`] trait.

pub mod error;
pub mod names;
pub mod services;
pub mod short_id;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{DomainService, RecordService, ServiceContext};
pub use short_id::short_id;
