//! 错误横幅与加载占位

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

use crate::i18n::t;
use crate::view::format::banner_text;
use crate::view::theme::colors;

/// 渲染一行错误横幅（按当前语言翻译核心层消息）
pub fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let c = colors();
    let line = Line::styled(
        format!(" ✗ {}", banner_text(message)),
        Style::default().fg(c.error).add_modifier(Modifier::BOLD),
    );
    frame.render_widget(Paragraph::new(line), area);
}

/// 渲染加载占位
pub fn render_loading(frame: &mut Frame, area: Rect) {
    let c = colors();
    let content = vec![
        Line::from(""),
        Line::styled(format!("  {}", t().common.loading), Style::default().fg(c.muted)),
    ];
    frame.render_widget(Paragraph::new(content), area);
}
