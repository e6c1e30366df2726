//! 异步结果处理
//!
//! 结果只应用到发起请求的页面；用户已离开该页面时直接丢弃。

use user_directory_core::Route;

use super::navigate;
use crate::backend::Command;
use crate::i18n::t;
use crate::message::BackendEvent;
use crate::model::App;

/// 处理后台任务结果
pub fn update(app: &mut App, event: BackendEvent) -> Option<Command> {
    match event {
        BackendEvent::UsersLoaded(result) => {
            if app.current_page != Route::List {
                return discard(app, "user list");
            }
            app.users.list.finish_load(result);
            app.users.clamp_selection();
            None
        }

        BackendEvent::UserLoaded { record_id, result } => {
            if app.current_page != Route::Detail(record_id) {
                return discard(app, "user detail");
            }
            app.detail.controller.finish_load(record_id, result);
            None
        }

        BackendEvent::FormLoaded { record_id, result } => {
            if app.current_page != Route::Edit(record_id) {
                return discard(app, "form record");
            }
            app.form.service.finish_load(record_id, result);
            None
        }

        BackendEvent::Submitted { mode, result } => {
            if app.current_page != mode.route() || app.form.service.mode() != mode {
                return discard(app, "form submit");
            }
            let next = app.form.service.finish_submit(result)?;
            let command = navigate(app, next);
            app.set_status(if mode.is_edit() {
                t().form.updated
            } else {
                t().form.created
            });
            command
        }

        BackendEvent::Deleted { record_id, result } => {
            if app.current_page != Route::List {
                return discard(app, "delete");
            }
            let succeeded = result.is_ok();
            let was_pending = app.users.list.is_deleting(record_id);
            app.users.list.finish_remove(record_id, result);
            app.users.clamp_selection();
            if succeeded && was_pending {
                app.set_status(t().users.deleted);
            }
            None
        }
    }
}

fn discard(app: &App, what: &str) -> Option<Command> {
    log::debug!("Discarding {what} result, now on {}", app.current_page);
    None
}
