//! 创建/编辑表单状态

use user_directory_core::{FieldPath, FormMode, FormService};

/// 表单页面状态
#[derive(Debug)]
pub struct FormState {
    /// 表单控制器（草稿、校验、提交）
    pub service: FormService,
    /// 当前聚焦的字段
    pub focused: FieldPath,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(FormMode::Create)
    }
}

impl FormState {
    /// 以指定模式创建表单，焦点在第一个字段
    pub fn new(mode: FormMode) -> Self {
        Self {
            service: FormService::new(mode),
            focused: FieldPath::ALL[0],
        }
    }

    /// 输入是否被锁定（加载或提交中）
    pub fn is_locked(&self) -> bool {
        self.service.is_loading() || self.service.is_submitting()
    }

    /// 聚焦下一个字段（循环）
    pub fn focus_next(&mut self) {
        let next = (self.focused.index() + 1) % FieldPath::ALL.len();
        self.focused = FieldPath::ALL[next];
    }

    /// 聚焦上一个字段（循环）
    pub fn focus_prev(&mut self) {
        let len = FieldPath::ALL.len();
        let prev = (self.focused.index() + len - 1) % len;
        self.focused = FieldPath::ALL[prev];
    }

    /// 在聚焦字段末尾输入一个字符
    pub fn input(&mut self, ch: char) {
        let mut value = self.service.draft().field(self.focused).to_string();
        value.push(ch);
        self.service.set_field(self.focused, value);
    }

    /// 删除聚焦字段的最后一个字符
    pub fn backspace(&mut self) {
        let mut value = self.service.draft().field(self.focused).to_string();
        if value.pop().is_some() {
            self.service.set_field(self.focused, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_wraps_both_ways() {
        let mut form = FormState::default();
        form.focus_prev();
        assert_eq!(form.focused, FieldPath::CompanyName);
        form.focus_next();
        assert_eq!(form.focused, FieldPath::Name);
        form.focus_next();
        assert_eq!(form.focused, FieldPath::Username);
    }

    #[test]
    fn typing_edits_only_the_focused_field() {
        let mut form = FormState::default();
        for _ in 0..7 {
            form.focus_next();
        }
        assert_eq!(form.focused, FieldPath::AddressCity);

        for ch in "Paris".chars() {
            form.input(ch);
        }
        form.backspace();

        let draft = form.service.draft();
        assert_eq!(draft.address.city, "Pari");
        assert_eq!(draft.address.street, "");
        assert_eq!(draft.name, "");
    }

    #[test]
    fn backspace_handles_multibyte_chars() {
        let mut form = FormState::default();
        form.input('张');
        form.input('三');
        form.backspace();
        assert_eq!(form.service.draft().name, "张");
    }

    #[test]
    fn edit_form_is_locked_until_loaded() {
        let form = FormState::new(FormMode::Edit(4));
        assert!(form.is_locked());
        assert!(!FormState::new(FormMode::Create).is_locked());
    }
}
