//! 弹窗/对话框状态

/// 弹窗类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 确认删除
    ConfirmDelete {
        /// 待删除的用户 id
        record_id: u64,
        /// 展示给用户的名称
        label: String,
        /// 焦点：0=取消, 1=删除
        focus: usize,
    },
    /// 帮助信息
    Help,
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示确认删除弹窗（默认焦点在"取消"）
    pub fn show_confirm_delete(&mut self, record_id: u64, label: &str) {
        self.active = Some(Modal::ConfirmDelete {
            record_id,
            label: label.to_string(),
            focus: 0,
        });
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }
}
