//! 用户详情页面视图

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};
use user_directory_core::types::UserRecord;

use crate::i18n::t;
use crate::model::App;
use crate::view::components::banner;
use crate::view::format::{or_na, pad};
use crate::view::theme::{Styles, colors};

const LABEL_WIDTH: usize = 16;

/// 渲染用户详情页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let controller = &app.detail.controller;

    if controller.is_loading() {
        banner::render_loading(frame, area);
        return;
    }
    if let Some(message) = controller.error() {
        banner::render_error(frame, area, message);
        return;
    }

    match controller.user() {
        Some(user) => frame.render_widget(Paragraph::new(detail_lines(user)), area),
        None => {
            let line = Line::styled(
                format!("  {}", t().detail.not_found),
                Style::default().fg(colors().muted),
            );
            frame.render_widget(Paragraph::new(vec![Line::from(""), line]), area);
        }
    }
}

fn field_line(label: &str, value: Option<&str>) -> Line<'static> {
    let c = colors();
    Line::from(vec![
        Span::styled(format!("    {}", pad(label, LABEL_WIDTH)), Style::default().fg(c.muted)),
        Span::styled(or_na(value).to_string(), Style::default().fg(c.fg)),
    ])
}

fn section_line(title: &str) -> Line<'static> {
    Line::styled(format!("  {title}"), Styles::section())
}

/// 三个分组：基本信息、地址、公司。坐标、口号与业务仅在有值时显示
fn detail_lines(user: &UserRecord) -> Vec<Line<'static>> {
    let texts = t();
    let fields = &texts.fields;

    let mut lines = vec![
        Line::from(""),
        section_line(texts.detail.basic_info),
        field_line(fields.name, Some(user.name.as_str())),
        field_line(fields.username, user.username.as_deref()),
        field_line(fields.email, Some(user.email.as_str())),
        field_line(fields.phone, Some(user.phone.as_str())),
        field_line(fields.website, user.website.as_deref()),
        Line::from(""),
        section_line(texts.detail.address),
    ];

    let address = user.address.as_ref();
    lines.push(field_line(fields.street, address.and_then(|a| a.street.as_deref())));
    lines.push(field_line(fields.suite, address.and_then(|a| a.suite.as_deref())));
    lines.push(field_line(fields.city, address.and_then(|a| a.city.as_deref())));
    lines.push(field_line(fields.zipcode, address.and_then(|a| a.zipcode.as_deref())));
    if let Some(geo) = address.and_then(|a| a.geo.as_ref()) {
        let coords = format!(
            "{}, {}",
            or_na(geo.lat.as_deref()),
            or_na(geo.lng.as_deref())
        );
        lines.push(field_line(fields.geo, Some(coords.as_str())));
    }

    lines.push(Line::from(""));
    lines.push(section_line(texts.detail.company));
    let company = user.company.as_ref();
    lines.push(field_line(fields.company_name, company.and_then(|c| c.name.as_deref())));
    if let Some(phrase) = company.and_then(|c| c.catch_phrase.as_deref()) {
        lines.push(field_line(fields.catch_phrase, Some(phrase)));
    }
    if let Some(bs) = company.and_then(|c| c.bs.as_deref()) {
        lines.push(field_line(fields.bs, Some(bs)));
    }

    lines
}
