//! 弹窗更新逻辑

use crate::backend::Command;
use crate::i18n::t;
use crate::message::ModalMessage;
use crate::model::{App, Modal};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) -> Option<Command> {
    match app.modal.active {
        Some(Modal::ConfirmDelete { .. }) => handle_confirm_delete(app, msg),
        Some(Modal::Help) => {
            if matches!(msg, ModalMessage::Close | ModalMessage::Confirm) {
                app.modal.close();
            }
            None
        }
        None => None,
    }
}

/// 处理确认删除弹窗
fn handle_confirm_delete(app: &mut App, msg: ModalMessage) -> Option<Command> {
    let Some(Modal::ConfirmDelete {
        record_id,
        ref mut focus,
        ..
    }) = app.modal.active
    else {
        return None;
    };

    match msg {
        ModalMessage::Close => {
            app.modal.close();
            None
        }

        ModalMessage::ToggleFocus => {
            *focus = usize::from(*focus == 0);
            None
        }

        ModalMessage::Confirm => {
            let confirmed = *focus == 1;
            app.modal.close();
            if !confirmed {
                return None;
            }

            if app.users.list.begin_remove(record_id) {
                Some(Command::Delete(record_id))
            } else {
                app.set_status(t().users.delete_in_progress);
                None
            }
        }
    }
}
