//! 主布局渲染

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use user_directory_core::Route;

use crate::i18n::t;
use crate::model::App;

use super::components;
use super::pages;
use super::theme::colors;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(app, frame, main_layout[0]);
    render_page_content(app, frame, main_layout[1]);
    components::statusbar::render(app, frame, main_layout[2]);

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏：应用名 + 当前路径
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = format!(
        " {} v{}  {}",
        t().common.app_name,
        env!("CARGO_PKG_VERSION"),
        app.current_page.path()
    );
    let bar = Paragraph::new(title).style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(bar, area);
}

/// 根据当前页面渲染内容
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let page_title = match app.current_page {
        Route::List => texts.users.title,
        Route::Detail(_) => texts.detail.title,
        Route::Create => texts.form.create_title,
        Route::Edit(_) => texts.form.edit_title,
    };

    let block = Block::default()
        .title(format!(" {page_title} "))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    match app.current_page {
        Route::List => pages::users::render(app, frame, inner_area),
        Route::Detail(_) => pages::detail::render(app, frame, inner_area),
        Route::Create | Route::Edit(_) => pages::form::render(app, frame, inner_area),
    }
}
