//! Diagnostic logging setup.

use tracing_subscriber::EnvFilter;

/// 未设置 `RUST_LOG` 时使用的过滤级别。
pub const DEFAULT_FILTER: &str = "warn";

/// 构造日志过滤器：优先读取 `RUST_LOG`，无效或缺失时回退到 `default_filter`。
#[must_use]
pub fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// 安装全局 fmt 订阅器，日志写入 stderr，stdout 只保留报告。
///
/// 重复调用时静默忽略。
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(DEFAULT_FILTER))
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
