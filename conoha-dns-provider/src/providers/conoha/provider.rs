//! ConoHa DnsApi trait 实现

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::DnsApi;
use crate::types::{
    CreateDomainRequest, CreateRecordRequest, DeleteOutcome, Domain, DomainList, Record,
    RecordList, UpdateRecordRequest,
};

use super::ConohaProvider;

#[async_trait]
impl DnsApi for ConohaProvider {
    async fn list_domains(&self) -> Result<Vec<Domain>> {
        let list: DomainList = self.get("/v1/domains").await?;
        Ok(list.domains)
    }

    async fn create_domain(&self, req: &CreateDomainRequest) -> Result<Domain> {
        self.post("/v1/domains", req).await
    }

    async fn delete_domain(&self, domain_id: &str) -> Result<DeleteOutcome> {
        self.delete(&format!("/v1/domains/{domain_id}")).await
    }

    async fn list_records(&self, domain_id: &str) -> Result<Vec<Record>> {
        let list: RecordList = self.get(&format!("/v1/domains/{domain_id}/records")).await?;
        Ok(list.records)
    }

    async fn get_record(&self, domain_id: &str, record_id: &str) -> Result<Record> {
        self.get(&format!("/v1/domains/{domain_id}/records/{record_id}"))
            .await
    }

    async fn create_record(&self, domain_id: &str, req: &CreateRecordRequest) -> Result<Record> {
        self.post(&format!("/v1/domains/{domain_id}/records"), req)
            .await
    }

    async fn update_record(
        &self,
        domain_id: &str,
        record_id: &str,
        req: &UpdateRecordRequest,
    ) -> Result<Record> {
        self.put(&format!("/v1/domains/{domain_id}/records/{record_id}"), req)
            .await
    }

    async fn delete_record(&self, domain_id: &str, record_id: &str) -> Result<DeleteOutcome> {
        self.delete(&format!("/v1/domains/{domain_id}/records/{record_id}"))
            .await
    }
}
