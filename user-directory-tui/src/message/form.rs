//! 表单消息

/// 创建/编辑表单消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMessage {
    /// 下一个字段
    NextField,
    /// 上一个字段
    PrevField,
    /// 输入字符
    Input(char),
    /// 删除字符（Backspace）
    Backspace,
    /// 提交
    Submit,
    /// 关闭错误横幅
    DismissError,
}
