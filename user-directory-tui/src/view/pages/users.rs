//! 用户列表页面视图

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::i18n::t;
use crate::model::App;
use crate::view::components::banner;
use crate::view::format::pad;
use crate::view::theme::{Styles, colors};

const ID_WIDTH: usize = 5;
const NAME_WIDTH: usize = 24;
const EMAIL_WIDTH: usize = 28;
const PHONE_WIDTH: usize = 22;

/// 渲染用户列表页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let list = &app.users.list;

    // 首次加载时没有旧数据可显示
    if list.is_loading() && list.users().is_empty() {
        banner::render_loading(frame, area);
        return;
    }

    let (banner_area, body) = match list.error() {
        Some(_) => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Min(1)])
                .split(area);
            (Some(rows[0]), rows[1])
        }
        None => (None, area),
    };

    if let (Some(banner_area), Some(message)) = (banner_area, list.error()) {
        banner::render_error(frame, banner_area, message);
    }

    if list.users().is_empty() {
        render_empty(frame, body);
    } else {
        render_table(app, frame, body);
    }
}

/// 渲染空状态
fn render_empty(frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let content = vec![
        Line::from(""),
        Line::styled(format!("  {}", texts.users.no_users), Style::default().fg(c.fg)),
        Line::from(""),
        Line::styled(
            format!("  {}", texts.users.no_users_hint),
            Style::default().fg(c.muted),
        ),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染表头和用户行
fn render_table(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let header = format!(
        "  {}{}{}{}{}",
        pad(texts.fields.id, ID_WIDTH),
        pad(texts.fields.name, NAME_WIDTH),
        pad(texts.fields.email, EMAIL_WIDTH),
        pad(texts.fields.phone, PHONE_WIDTH),
        texts.users.actions,
    );
    frame.render_widget(
        Paragraph::new(Line::styled(
            header,
            Style::default().fg(c.muted).add_modifier(Modifier::BOLD),
        )),
        rows[0],
    );

    let deleting = app.users.list.deleting();
    let items: Vec<ListItem> = app
        .users
        .list
        .users()
        .iter()
        .enumerate()
        .map(|(i, user)| {
            let is_selected = i == app.users.selected;
            let base = if is_selected {
                Styles::selected()
            } else {
                Style::default().fg(c.fg)
            };

            let id = user.id.map(|id| id.to_string()).unwrap_or_default();
            let (actions, action_color) = if user.id.is_some() && user.id == deleting {
                (texts.users.deleting, c.warning)
            } else {
                (texts.users.row_actions, c.muted)
            };
            let action_style = if is_selected {
                base.fg(action_color)
            } else {
                Style::default().fg(action_color)
            };

            ListItem::new(Line::from(vec![
                Span::styled("  ", base),
                Span::styled(pad(&id, ID_WIDTH), base),
                Span::styled(pad(&user.name, NAME_WIDTH), base),
                Span::styled(pad(&user.email, EMAIL_WIDTH), base),
                Span::styled(pad(&user.phone, PHONE_WIDTH), base),
                Span::styled(actions, action_style),
            ]))
        })
        .collect();

    let list = List::new(items).highlight_style(Style::default());
    let mut state = ListState::default();
    state.select(Some(app.users.selected));

    frame.render_stateful_widget(list, rows[1], &mut state);
}
