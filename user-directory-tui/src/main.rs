//! User Directory TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新，返回待执行的 [`backend::Command`] (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与异步请求调度 (`backend/`)
//!
//! ## 启动流程
//!
//! ```text
//! user-directory-tui [PATH]       // 例如 /user/3、/user/create，默认 /
//!
//! 1. 初始化日志（写入配置目录下的日志文件，终端由 UI 占用）
//! 2. 读取配置（不存在时写入默认值），应用环境变量覆盖
//! 3. 应用主题与语言
//! 4. 创建 HTTP 客户端与后台调度器
//! 5. 挂载起始路由
//! 6. init_terminal() -> app::run() -> restore_terminal()
//! ```

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use user_directory_client::HttpUserDirectory;
use user_directory_core::Route;

use backend::{Backend, ConfigService, LocalConfigService};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<()> {
    let config_service = LocalConfigService::new()?;

    // 1. 日志先于配置读写安装（guard 需存活到退出，保证缓冲日志写完）
    let log_dir = config_service.path().parent().unwrap_or(Path::new("."));
    let _log_guard = init_logging(log_dir)?;

    // 2. 配置
    let mut config = config_service.load()?;
    if !config_service.exists() {
        config_service.save(&config)?;
    }
    config.apply_env_overrides(|key| std::env::var(key).ok())?;
    log::info!(
        "Starting against {} (language {})",
        config.base_url,
        config.language.code()
    );

    // 3. 主题与语言
    view::theme::set_theme(config.theme);
    i18n::set_language(config.language);

    // 4. 客户端与后台
    let client = HttpUserDirectory::new(&config.client_config())
        .context("Failed to create HTTP client")?;
    let mut backend = Backend::new(Arc::new(client))?;

    // 5. 起始路由
    let start = Route::parse(&std::env::args().nth(1).unwrap_or_else(|| "/".to_string()));
    let mut app = model::App::new();
    app::dispatch(&backend, update::update(&mut app, message::AppMessage::Navigate(start)));

    // 6. 运行主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &mut backend);

    // 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        log::error!("Exited with error: {e:#}");
    }
    result
}
