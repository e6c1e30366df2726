//! 应用主消息枚举

use user_directory_core::Route;

use super::{BackendEvent, ContentMessage, FormMessage, ModalMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 返回上一页（表单中即取消）
    GoBack,

    /// 重新加载当前页面
    Refresh,

    /// 显示帮助
    ShowHelp,

    /// 进入指定页面
    Navigate(Route),

    /// 列表/详情页面相关消息
    Content(ContentMessage),

    /// 表单相关消息
    Form(FormMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 后台任务结果
    Backend(BackendEvent),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
