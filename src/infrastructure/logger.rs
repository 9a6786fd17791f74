//! 日志基础设施

use tracing_subscriber::EnvFilter;

/// 未设置 `RUST_LOG` 时的默认过滤规则
const DEFAULT_FILTER: &str = "info,tower_http=info,sqlx=warn";

pub struct Logger;

impl Logger {
    pub fn init() {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
