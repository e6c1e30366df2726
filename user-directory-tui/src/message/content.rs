//! 内容面板消息
//!
//! 处理列表与详情页面中的操作，如列表选择、查看、增删改

/// 内容面板消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMessage {
    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
    /// 查看选中项
    Confirm,

    // ========== CRUD 操作 ==========
    /// 新建用户
    Add,
    /// 编辑当前用户
    Edit,
    /// 删除当前用户
    Delete,

    /// 关闭列表错误横幅
    DismissError,
}
