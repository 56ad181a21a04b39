//! Short display IDs.
//!
//! A short ID is the first 8 hex digits of the xxHash64 (seed 0) digest of a
//! full identifier. It is stable across processes and platforms, so an ID
//! printed by one invocation is valid input to the next. Collisions are
//! possible; resolution picks the first match in the API's listing order.

use conoha_dns_provider::{Domain, Record};
use xxhash_rust::xxh64::xxh64;

/// Length of a short ID in characters.
pub const SHORT_ID_LEN: usize = 8;

/// Anything addressable by a provider-assigned full identifier.
pub trait FullId {
    fn full_id(&self) -> &str;
}

impl FullId for Domain {
    fn full_id(&self) -> &str {
        &self.id
    }
}

impl FullId for Record {
    fn full_id(&self) -> &str {
        &self.id
    }
}

/// Compute the 8-character lowercase hex short ID of `full_id`.
pub fn short_id(full_id: &str) -> String {
    let digest = format!("{:016x}", xxh64(full_id.as_bytes(), 0));
    digest[..SHORT_ID_LEN].to_string()
}

/// Whether `token` has the shape of a short ID (8 hex digits, any case).
pub fn looks_like_short_id(token: &str) -> bool {
    token.len() == SHORT_ID_LEN && token.chars().all(|c| c.is_ascii_hexdigit())
}

/// First candidate, in listing order, whose short ID equals `token`.
///
/// The comparison ignores ASCII case, matching [`looks_like_short_id`].
pub fn resolve_short_id<'a, T: FullId>(candidates: &'a [T], token: &str) -> Option<&'a T> {
    candidates
        .iter()
        .find(|candidate| short_id(candidate.full_id()).eq_ignore_ascii_case(token))
}
