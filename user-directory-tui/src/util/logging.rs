//! 日志初始化
//!
//! TUI 占用整个终端，日志必须写入文件：
//! `<config_dir>/user-directory-tui/user-directory-tui.log`。
//! 库 crate 通过 `log` 门面记录，由 tracing-subscriber 桥接。

use std::path::Path;

use anyhow::{Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// 日志级别环境变量（EnvFilter 语法）
pub const LOG_ENV: &str = "USER_DIRECTORY_LOG";
const LOG_FILE_NAME: &str = "user-directory-tui.log";

/// 构建过滤器，未设置或无效时为 `info`
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// 安装全局订阅者
///
/// 返回的 guard 必须存活到程序退出，否则缓冲中的日志会丢失。
pub fn init_logging(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;
    let appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .with(env_filter())
        .try_init()
        .map_err(|e| anyhow!("Failed to install logger: {e}"))?;

    Ok(guard)
}
