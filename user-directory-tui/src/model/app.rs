//! 应用主状态结构

use user_directory_core::Route;

use super::{DetailState, FormState, ModalState, UsersState};

/// 应用主状态
#[derive(Debug, Default)]
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前页面
    pub current_page: Route,

    /// 状态栏消息
    pub status_message: Option<String>,

    // === 各页面状态 ===
    /// 用户列表页面状态
    pub users: UsersState,
    /// 用户详情页面状态
    pub detail: DetailState,
    /// 创建/编辑表单状态
    pub form: FormState,

    /// 弹窗状态
    pub modal: ModalState,
}

impl App {
    /// 创建新的应用实例
    ///
    /// 页面尚未挂载；由 `update::navigate` 进入起始页面。
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
