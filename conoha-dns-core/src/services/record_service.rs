//! DNS 记录管理服务

use std::sync::Arc;

use conoha_dns_provider::{CreateRecordRequest, Record, UpdateRecordRequest};

use crate::error::{CoreError, CoreResult};
use crate::names::normalize_record_name;
use crate::services::{DomainService, ServiceContext};
use crate::short_id::resolve_short_id;
use crate::types::{NewRecord, RecordOverrides};

/// DNS 记录管理服务
///
/// Record listings are never cached; every call that needs them fetches
/// them again.
pub struct RecordService {
    ctx: Arc<ServiceContext>,
    domains: Arc<DomainService>,
}

impl RecordService {
    /// 创建 DNS 记录服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>, domains: Arc<DomainService>) -> Self {
        Self { ctx, domains }
    }

    /// 列出域名下的所有 DNS 记录
    pub async fn list_records(&self, domain_id: &str) -> CoreResult<Vec<Record>> {
        let records = self.ctx.api.list_records(domain_id).await?;
        log::debug!("Fetched {} records for domain {domain_id}", records.len());
        Ok(records)
    }

    /// 获取单条记录的当前状态
    pub async fn get_record(&self, domain_id: &str, record_id: &str) -> CoreResult<Record> {
        Ok(self.ctx.api.get_record(domain_id, record_id).await?)
    }

    /// Resolve a record short ID within one domain to its full ID.
    pub async fn resolve_record_id(
        &self,
        domain_id: &str,
        short_record_id: &str,
    ) -> CoreResult<String> {
        let records = self.list_records(domain_id).await?;
        if let Some(record) = resolve_short_id(&records, short_record_id) {
            return Ok(record.id.clone());
        }

        let domain = match self.domains.domain_name(domain_id).await {
            Ok(name) => name,
            Err(_) => domain_id.to_string(),
        };
        Err(CoreError::RecordNotFound {
            domain,
            record: short_record_id.to_string(),
        })
    }

    /// 创建 DNS 记录
    pub async fn add_record(
        &self,
        domain_identifier: &str,
        new: &NewRecord,
    ) -> CoreResult<Record> {
        let domain = self.domains.resolve_domain(domain_identifier).await?;
        let request = CreateRecordRequest {
            name: normalize_record_name(&domain.name, &new.name),
            record_type: new.record_type.clone(),
            data: new.data.clone(),
            ttl: new.ttl,
        };

        log::info!(
            "Adding {} record {} to domain {}",
            request.record_type,
            request.name,
            domain.name
        );
        Ok(self.ctx.api.create_record(&domain.id, &request).await?)
    }

    /// 更新 DNS 记录
    ///
    /// The current record is fetched and merged with `overrides` into a
    /// full replacement; see [`build_update_request`].
    pub async fn update_record(
        &self,
        domain_identifier: &str,
        short_record_id: &str,
        overrides: &RecordOverrides,
    ) -> CoreResult<Record> {
        let domain = self.domains.resolve_domain(domain_identifier).await?;
        let record_id = self.resolve_record_id(&domain.id, short_record_id).await?;

        log::info!("Fetching current state of record {short_record_id} (UUID: {record_id})");
        let current = self.get_record(&domain.id, &record_id).await?;
        let request = build_update_request(&domain.name, &current, overrides);

        log::info!("Updating record {short_record_id} in domain {}", domain.name);
        Ok(self
            .ctx
            .api
            .update_record(&domain.id, &record_id, &request)
            .await?)
    }

    /// 删除 DNS 记录，返回被删除记录的完整 ID
    pub async fn delete_record(
        &self,
        domain_identifier: &str,
        short_record_id: &str,
    ) -> CoreResult<String> {
        let domain = self.domains.resolve_domain(domain_identifier).await?;
        let record_id = self.resolve_record_id(&domain.id, short_record_id).await?;

        log::info!(
            "Deleting record {short_record_id} (UUID: {record_id}) from domain {}",
            domain.name
        );
        self.ctx.api.delete_record(&domain.id, &record_id).await?;
        Ok(record_id)
    }
}

/// Merge `overrides` onto `current` to build a full-replace payload.
///
/// Each field takes the override when given, else the current value. The
/// name is normalized against the zone every time, even when unchanged.
/// `description` and `priority` always come from `current`: the API clears
/// whatever a replace leaves out. A TTL that is still unknown after the
/// merge is left out of the payload instead of being sent as `null`.
pub fn build_update_request(
    domain_name: &str,
    current: &Record,
    overrides: &RecordOverrides,
) -> UpdateRecordRequest {
    let name = overrides.name.as_deref().unwrap_or(&current.name);

    UpdateRecordRequest {
        name: normalize_record_name(domain_name, name),
        record_type: overrides
            .record_type
            .clone()
            .unwrap_or_else(|| current.record_type.clone()),
        data: overrides.data.clone().unwrap_or_else(|| current.data.clone()),
        ttl: overrides.ttl.or(current.ttl),
        description: current.description.clone(),
        priority: current.priority,
    }
}
