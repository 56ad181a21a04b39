//! DNS record type definitions

/// Optional replacements for an update; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordOverrides {
    pub name: Option<String>,
    pub record_type: Option<String>,
    pub data: Option<String>,
    pub ttl: Option<u32>,
}

/// Input for creating a record under a user-supplied domain identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    /// Short label, `@`, or an already-qualified name.
    pub name: String,
    pub record_type: String,
    pub data: String,
    pub ttl: Option<u32>,
}
