use async_trait::async_trait;

/// Question asked before a record is deleted.
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this user?";

/// 确认对话框
///
/// 由界面层实现（终端弹窗、测试桩等）。
#[async_trait]
pub trait ConfirmPrompt: Send + Sync {
    /// Ask the operator; `true` means go ahead.
    async fn confirm(&self, message: &str) -> bool;
}
