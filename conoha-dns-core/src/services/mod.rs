//! 业务逻辑服务层

mod domain_service;
mod record_service;

pub use domain_service::DomainService;
pub use record_service::{RecordService, build_update_request};

use std::sync::Arc;

use conoha_dns_provider::DnsApi;

/// 服务上下文 - 持有所有依赖
///
/// 平台层创建 API 网关后注入此上下文。
pub struct ServiceContext {
    /// DNS API 网关
    pub api: Arc<dyn DnsApi>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(api: Arc<dyn DnsApi>) -> Self {
        Self { api }
    }
}
