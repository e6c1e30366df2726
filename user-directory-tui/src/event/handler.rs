//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, FormMessage, ModalMessage};
use crate::model::{App, Modal};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        _ => AppMessage::Noop, // 终端窗口大小改变等，下一帧自动重绘
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 表单页面：字符键用于输入
    if app.current_page.is_form() {
        return handle_form_keys(key);
    }

    // 全局快捷键
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) || is_question_mark(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    handle_content_keys(key)
}

/// `?` 在部分终端上带 SHIFT 修饰
fn is_question_mark(key: &KeyEvent) -> bool {
    DefaultKeymap::HELP_ALT.matches(key)
        || (key.code == KeyCode::Char('?') && key.modifiers == KeyModifiers::SHIFT)
}

/// 处理列表/详情页面的按键
fn handle_content_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::ACTION_ADD.matches(&key) {
        return AppMessage::Content(ContentMessage::Add);
    }
    if DefaultKeymap::ACTION_EDIT.matches(&key) {
        return AppMessage::Content(ContentMessage::Edit);
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::Content(ContentMessage::Delete);
    }
    if DefaultKeymap::NAV_CONFIRM.matches(&key) {
        return AppMessage::Content(ContentMessage::Confirm);
    }
    if DefaultKeymap::DISMISS_ERROR.matches(&key) {
        return AppMessage::Content(ContentMessage::DismissError);
    }

    if !key.modifiers.is_empty() {
        return AppMessage::Noop;
    }

    match key.code {
        // ↑ 或 k: 上一项
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        // ↓ 或 j: 下一项
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        // Home: 跳到第一项
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        // End: 跳到最后一项
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// 处理表单页面的按键
fn handle_form_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }
    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::FORM_SUBMIT.matches(&key) || DefaultKeymap::FORM_SUBMIT_ALT.matches(&key) {
        return AppMessage::Form(FormMessage::Submit);
    }
    if DefaultKeymap::FORM_NEXT.matches(&key) {
        return AppMessage::Form(FormMessage::NextField);
    }
    if DefaultKeymap::DISMISS_ERROR.matches(&key) {
        return AppMessage::Form(FormMessage::DismissError);
    }

    match key.code {
        // Shift+Tab（多数终端报告为带 SHIFT 的 BackTab）
        KeyCode::BackTab => AppMessage::Form(FormMessage::PrevField),
        KeyCode::Down => AppMessage::Form(FormMessage::NextField),
        KeyCode::Up => AppMessage::Form(FormMessage::PrevField),
        KeyCode::Backspace => AppMessage::Form(FormMessage::Backspace),
        KeyCode::Char(ch)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Form(FormMessage::Input(ch))
        }
        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭弹窗
    if DefaultKeymap::BACK.matches(&key) || DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Modal(ModalMessage::Close);
    }

    match app.modal.active {
        Some(Modal::ConfirmDelete { .. }) => match key.code {
            // Tab 或 ← →: 切换焦点
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
                AppMessage::Modal(ModalMessage::ToggleFocus)
            }
            // Enter: 确认
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
            _ => AppMessage::Noop,
        },
        // 帮助弹窗只响应关闭按键
        Some(Modal::Help) => match key.code {
            KeyCode::Enter | KeyCode::Char('q' | '?') => AppMessage::Modal(ModalMessage::Close),
            _ => AppMessage::Noop,
        },
        None => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use user_directory_core::Route;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn key(code: KeyCode) -> Event {
        press(code, KeyModifiers::NONE)
    }

    fn on(page: Route) -> App {
        App {
            current_page: page,
            ..App::default()
        }
    }

    #[test]
    fn release_events_are_ignored() {
        let event = Event::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert!(matches!(handle_event(event, &App::new()), AppMessage::Noop));
    }

    #[test]
    fn list_keys() {
        let app = on(Route::List);
        assert!(matches!(handle_event(key(KeyCode::Char('q')), &app), AppMessage::Quit));
        assert!(matches!(
            handle_event(key(KeyCode::Char('j')), &app),
            AppMessage::Content(ContentMessage::SelectNext)
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Up), &app),
            AppMessage::Content(ContentMessage::SelectPrevious)
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Enter), &app),
            AppMessage::Content(ContentMessage::Confirm)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('d'), KeyModifiers::ALT), &app),
            AppMessage::Content(ContentMessage::Delete)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('r'), KeyModifiers::ALT), &app),
            AppMessage::Refresh
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Char('?')), &app),
            AppMessage::ShowHelp
        ));
    }

    #[test]
    fn form_keys_type_instead_of_quitting() {
        let app = on(Route::Create);
        assert!(matches!(
            handle_event(key(KeyCode::Char('q')), &app),
            AppMessage::Form(FormMessage::Input('q'))
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('Q'), KeyModifiers::SHIFT), &app),
            AppMessage::Form(FormMessage::Input('Q'))
        ));
        assert!(matches!(
            handle_event(press(KeyCode::BackTab, KeyModifiers::SHIFT), &app),
            AppMessage::Form(FormMessage::PrevField)
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Tab), &app),
            AppMessage::Form(FormMessage::NextField)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('s'), KeyModifiers::CONTROL), &app),
            AppMessage::Form(FormMessage::Submit)
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Esc), &app),
            AppMessage::GoBack
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL), &app),
            AppMessage::Quit
        ));
    }

    #[test]
    fn alt_x_dismisses_the_banner() {
        let alt_x = || press(KeyCode::Char('x'), KeyModifiers::ALT);
        assert!(matches!(
            handle_event(alt_x(), &on(Route::List)),
            AppMessage::Content(ContentMessage::DismissError)
        ));
        assert!(matches!(
            handle_event(alt_x(), &on(Route::Edit(1))),
            AppMessage::Form(FormMessage::DismissError)
        ));
        // 普通 x 仍然是输入
        assert!(matches!(
            handle_event(key(KeyCode::Char('x')), &on(Route::Edit(1))),
            AppMessage::Form(FormMessage::Input('x'))
        ));
    }

    #[test]
    fn modal_keys_take_priority() {
        let mut app = on(Route::List);
        app.modal.show_confirm_delete(1, "Leanne Graham");

        assert!(matches!(
            handle_event(key(KeyCode::Char('q')), &app),
            AppMessage::Noop
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Right), &app),
            AppMessage::Modal(ModalMessage::ToggleFocus)
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Enter), &app),
            AppMessage::Modal(ModalMessage::Confirm)
        ));
        assert!(matches!(
            handle_event(key(KeyCode::Esc), &app),
            AppMessage::Modal(ModalMessage::Close)
        ));
    }
}
