//! 域名管理服务

use std::sync::Arc;

use conoha_dns_provider::{CreateDomainRequest, Domain};
use tokio::sync::OnceCell;

use crate::error::{CoreError, CoreResult};
use crate::names::normalize_domain_name;
use crate::services::ServiceContext;
use crate::short_id::resolve_short_id;
use crate::types::{DeletedDomain, DomainLookup};

/// 域名管理服务
///
/// The domain listing is fetched at most once per service instance and then
/// reused for every lookup. Domains created or deleted by another client
/// afterwards stay invisible until a new instance is built, which for the
/// CLI means the next invocation.
pub struct DomainService {
    ctx: Arc<ServiceContext>,
    cache: OnceCell<Vec<Domain>>,
}

impl DomainService {
    /// 创建域名服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self {
            ctx,
            cache: OnceCell::new(),
        }
    }

    /// 列出所有域名（首次调用时拉取并缓存）
    ///
    /// A failed fetch leaves the cache empty, so a later call tries again.
    pub async fn list_domains(&self) -> CoreResult<&[Domain]> {
        let domains = self
            .cache
            .get_or_try_init(|| async {
                let domains = self.ctx.api.list_domains().await?;
                log::debug!("Cached {} domains", domains.len());
                Ok::<_, CoreError>(domains)
            })
            .await?;
        Ok(domains)
    }

    /// Resolve a short ID or a domain name to the matching domain.
    ///
    /// Short-ID matching runs first when the identifier has that shape; the
    /// exact-name match always runs after it. The error carries the
    /// identifier exactly as the user typed it.
    pub async fn resolve_domain(&self, identifier: &str) -> CoreResult<&Domain> {
        let domains = self.list_domains().await?;

        for step in DomainLookup::plan(identifier) {
            let found = match &step {
                DomainLookup::ShortId(token) => resolve_short_id(domains, token),
                DomainLookup::Name(name) => domains.iter().find(|d| &d.name == name),
            };
            if let Some(domain) = found {
                log::debug!("Resolved domain {identifier} via {step:?} to {}", domain.id);
                return Ok(domain);
            }
        }

        Err(CoreError::DomainNotFound(identifier.to_string()))
    }

    /// 解析域名标识符，返回完整 ID
    pub async fn resolve_domain_id(&self, identifier: &str) -> CoreResult<String> {
        Ok(self.resolve_domain(identifier).await?.id.clone())
    }

    /// 根据完整 ID 反查域名
    pub async fn domain_name(&self, domain_id: &str) -> CoreResult<String> {
        self.list_domains()
            .await?
            .iter()
            .find(|d| d.id == domain_id)
            .map(|d| d.name.clone())
            .ok_or_else(|| CoreError::DomainNotFound(domain_id.to_string()))
    }

    /// 添加域名
    ///
    /// The created domain is not merged into the cached listing.
    pub async fn add_domain(&self, name: &str, email: &str) -> CoreResult<Domain> {
        let request = CreateDomainRequest {
            name: normalize_domain_name(name),
            email: email.to_string(),
        };
        log::info!("Adding domain {}", request.name);
        let domain = self.ctx.api.create_domain(&request).await?;
        Ok(domain)
    }

    /// Resolve the domain a delete would target, without deleting it.
    pub async fn resolve_for_delete(&self, identifier: &str) -> CoreResult<DeletedDomain> {
        let domain = self.resolve_domain(identifier).await?;
        Ok(DeletedDomain {
            id: domain.id.clone(),
            name: domain.name.clone(),
        })
    }

    /// 删除已解析的域名
    ///
    /// A failure of the delete call names the domain it was aimed at.
    pub async fn delete_resolved_domain(&self, target: &DeletedDomain) -> CoreResult<()> {
        log::info!("Deleting domain {} (ID: {})", target.name, target.id);
        match self.ctx.api.delete_domain(&target.id).await {
            Ok(_) => Ok(()),
            Err(source) => Err(CoreError::DomainDelete {
                name: target.name.clone(),
                id: target.id.clone(),
                source,
            }),
        }
    }

    /// 删除域名
    pub async fn delete_domain(&self, identifier: &str) -> CoreResult<DeletedDomain> {
        let target = self.resolve_for_delete(identifier).await?;
        self.delete_resolved_domain(&target).await?;
        Ok(target)
    }
}
