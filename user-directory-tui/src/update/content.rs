//! 内容面板更新逻辑
//!
//! 处理列表与详情页面中的操作消息

use user_directory_core::{ListService, Route};

use super::navigate;
use crate::backend::Command;
use crate::i18n::t;
use crate::message::ContentMessage;
use crate::model::App;

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) -> Option<Command> {
    match msg {
        // ========== 列表导航 ==========
        ContentMessage::SelectPrevious => on_list(app, |app| app.users.select_previous()),
        ContentMessage::SelectNext => on_list(app, |app| app.users.select_next()),
        ContentMessage::SelectFirst => on_list(app, |app| app.users.select_first()),
        ContentMessage::SelectLast => on_list(app, |app| app.users.select_last()),
        ContentMessage::Confirm => handle_view(app),
        // 详情页的加载错误不可关闭
        ContentMessage::DismissError => on_list(app, |app| app.users.list.clear_error()),

        // ========== CRUD 操作 ==========
        ContentMessage::Add => navigate(app, Route::Create),
        ContentMessage::Edit => handle_edit(app),
        ContentMessage::Delete => {
            handle_delete(app);
            None
        }
    }
}

fn on_list(app: &mut App, f: impl FnOnce(&mut App)) -> Option<Command> {
    if app.current_page == Route::List {
        f(app);
    }
    None
}

/// Enter：查看选中的用户
fn handle_view(app: &mut App) -> Option<Command> {
    if app.current_page != Route::List {
        return None;
    }
    let id = app.users.selected_id()?;
    navigate(app, ListService::view(id))
}

/// Alt+e：列表中编辑选中项，详情页中编辑当前记录
fn handle_edit(app: &mut App) -> Option<Command> {
    let target = match app.current_page {
        Route::List => app.users.selected_id().map(Route::Edit),
        Route::Detail(_) => app.detail.controller.edit_route(),
        Route::Create | Route::Edit(_) => None,
    }?;
    navigate(app, target)
}

/// Alt+d：弹出确认框；已有删除进行中时拒绝
fn handle_delete(app: &mut App) {
    if app.current_page != Route::List {
        return;
    }
    let Some((id, label)) = app
        .users
        .selected_user()
        .and_then(|user| user.id.map(|id| (id, user.name.clone())))
    else {
        return;
    };

    if app.users.list.deleting().is_some() {
        app.set_status(t().users.delete_in_progress);
        return;
    }

    app.modal.show_confirm_delete(id, &label);
}
