//! 用户列表页面状态

use user_directory_core::ListService;
use user_directory_core::types::UserRecord;

/// 用户列表页面状态
#[derive(Debug, Default)]
pub struct UsersState {
    /// 列表控制器
    pub list: ListService,
    /// 当前选中的索引
    pub selected: usize,
}

impl UsersState {
    /// 创建新的列表状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        let len = self.list.users().len();
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        self.selected = self.list.users().len().saturating_sub(1);
    }

    /// 获取当前选中的用户
    pub fn selected_user(&self) -> Option<&UserRecord> {
        self.list.users().get(self.selected)
    }

    /// 当前选中用户的 id
    pub fn selected_id(&self) -> Option<u64> {
        self.selected_user().and_then(|u| u.id)
    }

    /// 列表变化后保证选中项仍然有效
    pub fn clamp_selection(&mut self) {
        let len = self.list.users().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use user_directory_core::test_utils::test_user;

    fn loaded(n: u64) -> UsersState {
        let mut state = UsersState::new();
        state.list.begin_load();
        state
            .list
            .finish_load(Ok((1..=n).map(|id| test_user(id, "User")).collect()));
        state
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut state = loaded(3);
        state.select_previous();
        assert_eq!(state.selected, 0);

        state.select_next();
        state.select_next();
        state.select_next();
        assert_eq!(state.selected, 2);
        assert_eq!(state.selected_id(), Some(3));

        state.select_first();
        assert_eq!(state.selected_id(), Some(1));
        state.select_last();
        assert_eq!(state.selected_id(), Some(3));
    }

    #[test]
    fn empty_list_has_no_selection() {
        let mut state = UsersState::new();
        state.select_next();
        state.select_last();
        assert_eq!(state.selected, 0);
        assert!(state.selected_user().is_none());
    }

    #[test]
    fn clamp_after_last_row_removed() {
        let mut state = loaded(2);
        state.select_last();
        assert!(state.list.begin_remove(2));
        state.list.finish_remove(2, Ok(()));

        state.clamp_selection();

        assert_eq!(state.selected, 0);
        assert_eq!(state.selected_id(), Some(1));
    }
}
