//! 底部状态栏组件

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use user_directory_core::Route;

use crate::i18n::t;
use crate::model::{App, Modal};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前页面和弹窗生成快捷键提示
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let keys = &t().hints.keys;
    let actions = &t().hints.actions;

    match app.modal.active {
        Some(Modal::ConfirmDelete { .. }) => {
            return vec![
                (keys.arrows_lr, actions.switch_option),
                (keys.enter, actions.confirm),
                (keys.esc, actions.cancel),
            ];
        }
        Some(Modal::Help) => return vec![(keys.esc, actions.close)],
        None => {}
    }

    match app.current_page {
        Route::List => {
            let mut hints = vec![
                (keys.arrows_ud, actions.select),
                (keys.enter, actions.view),
                (keys.add, actions.new),
                (keys.edit, actions.edit),
                (keys.delete, actions.delete),
                (keys.reload, actions.reload),
            ];
            if app.users.list.error().is_some() {
                hints.push((keys.dismiss, actions.dismiss));
            }
            hints.push((keys.quit, actions.quit));
            hints
        }
        Route::Detail(_) => vec![
            (keys.edit, actions.edit),
            (keys.reload, actions.reload),
            (keys.esc, actions.back),
            (keys.quit, actions.quit),
        ],
        Route::Create | Route::Edit(_) => {
            let mut hints = vec![
                (keys.tab, actions.next_field),
                (keys.submit, actions.submit),
            ];
            if app.form.service.error().is_some() {
                hints.push((keys.dismiss, actions.dismiss));
            }
            hints.push((keys.esc, actions.cancel));
            hints
        }
    }
}
