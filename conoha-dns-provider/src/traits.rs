use async_trait::async_trait;

use crate::error::Result;
use crate::types::{
    CreateDomainRequest, CreateRecordRequest, DeleteOutcome, Domain, Record, UpdateRecordRequest,
};

/// DNS API Trait
///
/// The resource-level operations the resolvers need. [`ConohaProvider`]
/// implements it over HTTP; tests swap in an in-memory double.
///
/// [`ConohaProvider`]: crate::ConohaProvider
#[async_trait]
pub trait DnsApi: Send + Sync {
    /// `GET /v1/domains`, in the API's listing order.
    async fn list_domains(&self) -> Result<Vec<Domain>>;

    /// `POST /v1/domains`
    async fn create_domain(&self, req: &CreateDomainRequest) -> Result<Domain>;

    /// `DELETE /v1/domains/{id}`
    async fn delete_domain(&self, domain_id: &str) -> Result<DeleteOutcome>;

    /// `GET /v1/domains/{id}/records`, in the API's listing order.
    async fn list_records(&self, domain_id: &str) -> Result<Vec<Record>>;

    /// `GET /v1/domains/{id}/records/{rid}`
    async fn get_record(&self, domain_id: &str, record_id: &str) -> Result<Record>;

    /// `POST /v1/domains/{id}/records`
    async fn create_record(&self, domain_id: &str, req: &CreateRecordRequest) -> Result<Record>;

    /// `PUT /v1/domains/{id}/records/{rid}` (full replace)
    async fn update_record(
        &self,
        domain_id: &str,
        record_id: &str,
        req: &UpdateRecordRequest,
    ) -> Result<Record>;

    /// `DELETE /v1/domains/{id}/records/{rid}`
    async fn delete_record(&self, domain_id: &str, record_id: &str) -> Result<DeleteOutcome>;
}
