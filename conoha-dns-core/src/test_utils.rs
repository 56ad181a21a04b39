//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use conoha_dns_provider::{
    CreateDomainRequest, CreateRecordRequest, DeleteOutcome, DnsApi, Domain, ErrorBody,
    ProviderError, Record, Result, UpdateRecordRequest,
};
use tokio::sync::RwLock;

use crate::services::{DomainService, RecordService, ServiceContext};

// ===== MockDnsApi =====

/// In-memory DNS API that records what it was asked to do.
#[derive(Default)]
pub struct MockDnsApi {
    domains: RwLock<Vec<Domain>>,
    records: RwLock<Vec<Record>>,
    /// 如果 Some，所有调用返回此状态码的 API 错误
    fail_status: RwLock<Option<u16>>,
    list_domains_calls: AtomicUsize,
    list_records_calls: AtomicUsize,
    created_domains: RwLock<Vec<CreateDomainRequest>>,
    created_records: RwLock<Vec<(String, CreateRecordRequest)>>,
    updates: RwLock<Vec<(String, String, UpdateRecordRequest)>>,
    deleted_domains: RwLock<Vec<String>>,
    deleted_records: RwLock<Vec<(String, String)>>,
}

impl MockDnsApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_domain(&self, id: &str, name: &str) {
        self.domains.write().await.push(Domain {
            id: id.to_string(),
            name: name.to_string(),
            email: "admin@example.com".to_string(),
        });
    }

    pub async fn add_record(&self, domain_id: &str, record: Record) {
        let mut record = record;
        record.domain_id = Some(domain_id.to_string());
        self.records.write().await.push(record);
    }

    pub async fn set_fail_status(&self, status: Option<u16>) {
        *self.fail_status.write().await = status;
    }

    pub fn list_domains_calls(&self) -> usize {
        self.list_domains_calls.load(Ordering::SeqCst)
    }

    pub fn list_records_calls(&self) -> usize {
        self.list_records_calls.load(Ordering::SeqCst)
    }

    pub async fn created_domains(&self) -> Vec<CreateDomainRequest> {
        self.created_domains.read().await.clone()
    }

    pub async fn created_records(&self) -> Vec<(String, CreateRecordRequest)> {
        self.created_records.read().await.clone()
    }

    pub async fn updates(&self) -> Vec<(String, String, UpdateRecordRequest)> {
        self.updates.read().await.clone()
    }

    pub async fn deleted_domains(&self) -> Vec<String> {
        self.deleted_domains.read().await.clone()
    }

    pub async fn deleted_records(&self) -> Vec<(String, String)> {
        self.deleted_records.read().await.clone()
    }

    async fn check_failure(&self) -> Result<()> {
        match *self.fail_status.read().await {
            Some(status) => Err(ProviderError::ApiFailure {
                status,
                body: ErrorBody::Text("mock failure".to_string()),
            }),
            None => Ok(()),
        }
    }

    async fn records_of(&self, domain_id: &str) -> Vec<Record> {
        self.records
            .read()
            .await
            .iter()
            .filter(|r| r.domain_id.as_deref() == Some(domain_id))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl DnsApi for MockDnsApi {
    async fn list_domains(&self) -> Result<Vec<Domain>> {
        self.list_domains_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure().await?;
        Ok(self.domains.read().await.clone())
    }

    async fn create_domain(&self, req: &CreateDomainRequest) -> Result<Domain> {
        self.check_failure().await?;
        self.created_domains.write().await.push(req.clone());
        Ok(Domain {
            id: format!("new-domain-{}", req.name),
            name: req.name.clone(),
            email: req.email.clone(),
        })
    }

    async fn delete_domain(&self, domain_id: &str) -> Result<DeleteOutcome> {
        self.check_failure().await?;
        self.deleted_domains.write().await.push(domain_id.to_string());
        Ok(DeleteOutcome::NoContent)
    }

    async fn list_records(&self, domain_id: &str) -> Result<Vec<Record>> {
        self.list_records_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure().await?;
        Ok(self.records_of(domain_id).await)
    }

    async fn get_record(&self, domain_id: &str, record_id: &str) -> Result<Record> {
        self.check_failure().await?;
        self.records_of(domain_id)
            .await
            .into_iter()
            .find(|r| r.id == record_id)
            .ok_or(ProviderError::ApiFailure {
                status: 404,
                body: ErrorBody::Text("record not found".to_string()),
            })
    }

    async fn create_record(&self, domain_id: &str, req: &CreateRecordRequest) -> Result<Record> {
        self.check_failure().await?;
        self.created_records
            .write()
            .await
            .push((domain_id.to_string(), req.clone()));
        Ok(Record {
            id: format!("new-record-{}", req.name),
            domain_id: Some(domain_id.to_string()),
            name: req.name.clone(),
            record_type: req.record_type.clone(),
            data: req.data.clone(),
            ttl: req.ttl,
            priority: None,
            description: None,
        })
    }

    async fn update_record(
        &self,
        domain_id: &str,
        record_id: &str,
        req: &UpdateRecordRequest,
    ) -> Result<Record> {
        self.check_failure().await?;
        self.updates
            .write()
            .await
            .push((domain_id.to_string(), record_id.to_string(), req.clone()));
        Ok(Record {
            id: record_id.to_string(),
            domain_id: Some(domain_id.to_string()),
            name: req.name.clone(),
            record_type: req.record_type.clone(),
            data: req.data.clone(),
            ttl: req.ttl,
            priority: None,
            description: None,
        })
    }

    async fn delete_record(&self, domain_id: &str, record_id: &str) -> Result<DeleteOutcome> {
        self.check_failure().await?;
        self.deleted_records
            .write()
            .await
            .push((domain_id.to_string(), record_id.to_string()));
        Ok(DeleteOutcome::NoContent)
    }
}

// ===== 工厂方法 =====

/// 构造测试用 Record
pub fn test_record(
    id: &str,
    name: &str,
    record_type: &str,
    data: &str,
    ttl: Option<u32>,
) -> Record {
    Record {
        id: id.to_string(),
        domain_id: None,
        name: name.to_string(),
        record_type: record_type.to_string(),
        data: data.to_string(),
        ttl,
        priority: None,
        description: None,
    }
}

/// 创建测试用 `ServiceContext`，预置一个 `example.com.` 域名
pub async fn create_test_context() -> (Arc<ServiceContext>, Arc<MockDnsApi>) {
    let api = Arc::new(MockDnsApi::new());
    api.add_domain("dom-1111", "example.com.").await;
    api.add_domain("dom-2222", "example.org.").await;
    let ctx = Arc::new(ServiceContext::new(api.clone()));
    (ctx, api)
}

/// 创建测试用 `DomainService`
pub async fn create_test_domain_service() -> (DomainService, Arc<MockDnsApi>) {
    let (ctx, api) = create_test_context().await;
    (DomainService::new(ctx), api)
}

/// 创建测试用 `RecordService`
pub async fn create_test_record_service() -> (RecordService, Arc<MockDnsApi>) {
    let (ctx, api) = create_test_context().await;
    let domains = Arc::new(DomainService::new(ctx.clone()));
    (RecordService::new(ctx, domains), api)
}
