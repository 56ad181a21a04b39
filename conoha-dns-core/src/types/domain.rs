//! Domain resolution type definitions

use crate::names::normalize_domain_name;
use crate::short_id::looks_like_short_id;

/// One way of matching a user-supplied domain identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainLookup<'a> {
    /// Match against the short ID of each domain's UUID.
    ShortId(&'a str),
    /// Exact match against the normalized (trailing-dot) domain name.
    Name(String),
}

impl<'a> DomainLookup<'a> {
    /// Strategies to try for `identifier`, in order.
    ///
    /// A token shaped like a short ID is tried as one first; the name
    /// strategy always follows, so a zone literally named like a hex
    /// string is still reachable.
    pub fn plan(identifier: &'a str) -> Vec<Self> {
        let mut steps = Vec::with_capacity(2);
        if looks_like_short_id(identifier) {
            steps.push(Self::ShortId(identifier));
        }
        steps.push(Self::Name(normalize_domain_name(identifier)));
        steps
    }
}

/// The domain a delete is aimed at, known before the API call is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedDomain {
    pub id: String,
    pub name: String,
}
