use serde::{Deserialize, Serialize};

// ============ Domain Types ============

/// A DNS zone as returned by `GET /v1/domains`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    /// Provider-assigned UUID.
    #[serde(rename = "uuid")]
    pub id: String,
    /// Fully-qualified zone name, always ending in `.`.
    pub name: String,
    /// Administrative contact.
    #[serde(default)]
    pub email: String,
}

/// Body of `POST /v1/domains`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateDomainRequest {
    /// Fully-qualified zone name.
    pub name: String,
    /// Administrative contact.
    pub email: String,
}

// ============ DNS Record Types ============

/// A resource record as returned by `GET /v1/domains/{id}/records`.
///
/// `record_type` stays a raw token (`A`, `MX`, `SRV`, ...) so types the API
/// supports but this client does not know about still round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Provider-assigned UUID.
    #[serde(rename = "uuid")]
    pub id: String,
    /// Owning domain UUID, when the API includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<String>,
    /// Fully-qualified record name.
    pub name: String,
    /// RR type token.
    #[serde(rename = "type")]
    pub record_type: String,
    /// Type-dependent payload.
    pub data: String,
    /// TTL in seconds; the API applies its own default when absent.
    #[serde(default)]
    pub ttl: Option<u32>,
    /// Used by MX/SRV style records.
    #[serde(default)]
    pub priority: Option<u32>,
    /// Free-form note.
    #[serde(default)]
    pub description: Option<String>,
}

/// Body of `POST /v1/domains/{id}/records`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateRecordRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
}

/// Body of `PUT /v1/domains/{id}/records/{rid}`.
///
/// This is a full replace: `description` and `priority` are always sent
/// (possibly as `null`) because the API clears fields that are left out.
/// `ttl` is the exception and is omitted entirely when unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateRecordRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    pub description: Option<String>,
    pub priority: Option<u32>,
}

// ============ Response Envelopes ============

/// `{"domains": [...]}`; a missing key is an empty listing.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct DomainList {
    #[serde(default)]
    pub domains: Vec<Domain>,
}

/// `{"records": [...]}`; a missing key is an empty listing.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RecordList {
    #[serde(default)]
    pub records: Vec<Record>,
}

/// Result of a `DELETE` call.
///
/// A 204 (or any empty 2xx body) is reported as [`NoContent`](Self::NoContent)
/// instead of being forced through the JSON parser.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// The server answered without a body.
    NoContent,
    /// The server echoed a JSON document.
    Body(serde_json::Value),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_defaults_optional_fields() {
        let record: Record = serde_json::from_value(json!({
            "uuid": "r-1",
            "name": "www.example.com.",
            "type": "A",
            "data": "192.0.2.1"
        }))
        .unwrap();
        assert_eq!(record.ttl, None);
        assert_eq!(record.priority, None);
        assert_eq!(record.description, None);
        assert_eq!(record.domain_id, None);
    }

    #[test]
    fn record_ignores_unknown_fields() {
        let record: Record = serde_json::from_value(json!({
            "uuid": "r-1",
            "domain_id": "d-1",
            "name": "mail.example.com.",
            "type": "MX",
            "data": "mx.example.com.",
            "ttl": 3600,
            "priority": 10,
            "description": null,
            "gslb_check": null,
            "created_at": "2024-01-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(record.domain_id.as_deref(), Some("d-1"));
        assert_eq!(record.priority, Some(10));
        assert_eq!(record.ttl, Some(3600));
    }

    #[test]
    fn update_request_omits_missing_ttl_but_keeps_nulls() {
        let body = UpdateRecordRequest {
            name: "www.example.com.".to_string(),
            record_type: "A".to_string(),
            data: "192.0.2.2".to_string(),
            ttl: None,
            description: None,
            priority: None,
        };
        let value = serde_json::to_value(&body).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("ttl"));
        assert_eq!(object.get("description"), Some(&serde_json::Value::Null));
        assert_eq!(object.get("priority"), Some(&serde_json::Value::Null));
        assert_eq!(object.get("type"), Some(&json!("A")));
    }

    #[test]
    fn missing_listing_key_is_empty() {
        let domains: DomainList = serde_json::from_str("{}").unwrap();
        let records: RecordList = serde_json::from_str(r#"{"other": 1}"#).unwrap();
        assert!(domains.domains.is_empty());
        assert!(records.records.is_empty());
    }
}
