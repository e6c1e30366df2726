//! 表单更新逻辑

use user_directory_core::CoreError;

use crate::backend::Command;
use crate::message::FormMessage;
use crate::model::App;

/// 处理表单消息
pub fn update(app: &mut App, msg: FormMessage) -> Option<Command> {
    if !app.current_page.is_form() {
        return None;
    }
    let form = &mut app.form;

    match msg {
        FormMessage::NextField => form.focus_next(),
        FormMessage::PrevField => form.focus_prev(),
        FormMessage::Input(ch) if !form.is_locked() => form.input(ch),
        FormMessage::Backspace if !form.is_locked() => form.backspace(),
        FormMessage::Input(_) | FormMessage::Backspace => {}
        FormMessage::DismissError => form.service.clear_error(),
        // 加载或提交进行中时 FormService 返回 Ok(None)
        FormMessage::Submit => match form.service.begin_submit() {
            Ok(request) => return request.map(Command::Submit),
            // 横幅已由 FormService 设置，焦点移到出错字段
            Err(CoreError::Validation(rule)) => form.focused = rule.field(),
            Err(CoreError::Network(_)) => {}
        },
    }
    None
}
