//! 共享测试工具和辅助函数

#![allow(dead_code)]

use conoha_dns_provider::{ConohaProvider, ProviderConfig};
use serde_json::{Value, json};
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "test-token-0123456789";

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 测试上下文 - 封装 mock 服务器和指向它的 Provider
pub struct TestContext {
    pub server: MockServer,
    pub provider: ConohaProvider,
}

impl TestContext {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let config = ProviderConfig::with_base_url(server.uri());
        let provider = ConohaProvider::new(&config, TEST_TOKEN).expect("创建 Provider 失败");
        Self { server, provider }
    }
}

pub fn domain_json(uuid: &str, name: &str) -> Value {
    json!({
        "uuid": uuid,
        "name": name,
        "email": "hostmaster@example.com",
        "ttl": 3600,
        "serial": 1_700_000_000,
        "gslb": null,
        "created_at": "2024-01-01T00:00:00.000000",
        "updated_at": null
    })
}

pub fn record_json(uuid: &str, name: &str, record_type: &str, data: &str) -> Value {
    json!({
        "uuid": uuid,
        "domain_id": "d-1",
        "name": name,
        "type": record_type,
        "data": data,
        "ttl": 300,
        "priority": null,
        "description": null,
        "gslb_region": null,
        "gslb_weight": null,
        "gslb_check": null
    })
}
