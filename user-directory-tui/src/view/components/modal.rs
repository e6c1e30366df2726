//! 弹窗组件

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::i18n::t;
use crate::model::{App, Modal};
use crate::view::format::truncate;
use crate::view::theme::{Styles, colors};

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    match &app.modal.active {
        Some(Modal::ConfirmDelete { label, focus, .. }) => {
            render_confirm_delete(frame, label, *focus);
        }
        Some(Modal::Help) => render_help(frame),
        None => {}
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 弹窗边框内的内容区域
fn inner(area: Rect) -> Rect {
    Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    )
}

/// 渲染确认删除弹窗
fn render_confirm_delete(frame: &mut Frame, label: &str, focus: usize) {
    let texts = t();
    let c = colors();
    let area = centered_rect(50, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", texts.modal.confirm_delete.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.error))
        .style(Style::default().bg(c.bg));
    frame.render_widget(block, area);

    let cancel_style = if focus == 0 {
        Style::default().fg(Color::Black).bg(Color::White)
    } else {
        Style::default().fg(c.fg)
    };
    let confirm_style = if focus == 1 {
        Style::default().fg(Color::Black).bg(c.error)
    } else {
        Style::default().fg(c.error)
    };

    let lines = vec![
        Line::from(""),
        Line::styled(
            format!("  {}", texts.modal.confirm_delete.message),
            Style::default().fg(c.fg),
        ),
        Line::styled(
            format!("  \"{}\"", truncate(label, 40)),
            Style::default().fg(Color::Yellow),
        ),
        Line::from(""),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!(" {} ", texts.common.cancel), cancel_style),
            Span::raw("    "),
            Span::styled(format!(" {} ", texts.common.delete), confirm_style),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner(area));
}

/// 帮助行：按键 + 说明
fn help_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<14}"), Style::default().fg(Color::Yellow)),
        Span::styled(desc.to_string(), Style::default().fg(colors().fg)),
    ])
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let texts = t();
    let keys = &texts.hints.keys;
    let actions = &texts.hints.actions;
    let c = colors();

    let area = centered_rect(56, 24, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", texts.help.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.highlight))
        .style(Style::default().bg(c.bg));
    frame.render_widget(block, area);

    let lines = vec![
        Line::styled(texts.help.list_section, Styles::section()),
        help_line(keys.arrows_ud, actions.select),
        help_line(keys.enter, actions.view),
        help_line(keys.add, actions.new),
        help_line(keys.edit, actions.edit),
        help_line(keys.delete, actions.delete),
        help_line(keys.reload, actions.reload),
        help_line(keys.dismiss, actions.dismiss),
        help_line(keys.esc, actions.back),
        help_line("?/Alt+h", actions.help),
        help_line("q/Ctrl+c", actions.quit),
        Line::from(""),
        Line::styled(texts.help.form_section, Styles::section()),
        help_line("Tab/Shift+Tab", actions.next_field),
        help_line(keys.submit, actions.submit),
        help_line(keys.dismiss, actions.dismiss),
        help_line(keys.esc, actions.cancel),
        Line::from(""),
        Line::styled(texts.help.close_hint, Style::default().fg(c.muted).add_modifier(Modifier::ITALIC)),
    ];

    frame.render_widget(Paragraph::new(lines), inner(area));
}
