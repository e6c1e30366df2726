//! 创建/编辑表单页面视图

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use user_directory_core::FieldPath;

use crate::i18n::t;
use crate::model::{App, FormState};
use crate::view::components::banner;
use crate::view::format::{field_label, pad};
use crate::view::theme::{Styles, colors};

const LABEL_WIDTH: usize = 16;

/// 渲染表单页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let form = &app.form;

    if form.service.is_loading() {
        banner::render_loading(frame, area);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    if let Some(message) = form.service.error() {
        banner::render_error(frame, rows[0], message);
    }

    frame.render_widget(Paragraph::new(form_lines(form)), rows[1]);
}

fn form_lines(form: &FormState) -> Vec<Line<'static>> {
    let texts = t();
    let c = colors();
    let mut lines = Vec::new();

    for field in FieldPath::ALL {
        match field {
            FieldPath::Name => {
                lines.push(Line::styled(
                    format!("  {}", texts.form.basic_info),
                    Styles::section(),
                ));
            }
            FieldPath::AddressStreet | FieldPath::CompanyName => {
                let title = if field == FieldPath::CompanyName {
                    texts.form.company
                } else {
                    texts.form.address
                };
                lines.push(Line::from(""));
                lines.push(Line::styled(format!("  {title}"), Styles::section()));
            }
            _ => {}
        }
        lines.push(field_line(form, field));
    }

    let button = if form.service.is_submitting() {
        texts.form.saving
    } else if form.service.mode().is_edit() {
        texts.form.update_submit
    } else {
        texts.form.create_submit
    };
    let button_style = if form.service.is_submitting() {
        Style::default().fg(c.muted)
    } else {
        Style::default().fg(Color::Black).bg(c.success).add_modifier(Modifier::BOLD)
    };

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("    "),
        Span::styled(format!(" {button} "), button_style),
        Span::raw("   "),
        Span::styled(texts.form.required_hint, Style::default().fg(c.muted)),
    ]));
    lines
}

fn field_line(form: &FormState, field: FieldPath) -> Line<'static> {
    let c = colors();
    let focused = form.focused == field;
    let marker = if field.is_required() { " *" } else { "" };
    let label = format!("{}{marker}", field_label(field));
    let value = form.service.draft().field(field).to_string();

    let (prefix, label_style, value_style) = if focused {
        ("  ▶ ", Styles::section(), Styles::selected())
    } else {
        ("    ", Style::default().fg(c.muted), Style::default().fg(c.fg))
    };

    let mut spans = vec![
        Span::styled(prefix, label_style),
        Span::styled(pad(&label, LABEL_WIDTH), label_style),
        Span::styled(value, value_style),
    ];
    if focused {
        spans.push(Span::styled("▎", Style::default().fg(c.highlight)));
    }
    Line::from(spans)
}
