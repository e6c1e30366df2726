//! 主题和样式定义

use std::sync::atomic::{AtomicU8, Ordering};

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

static CURRENT_THEME: AtomicU8 = AtomicU8::new(Theme::Dark as u8);

/// 配色主题，由配置文件中的 `theme` 字段选择
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Theme {
    #[default]
    Dark = 0,
    Light = 1,
}

impl Theme {
    fn from_index(index: u8) -> Self {
        if index == Self::Light as u8 {
            Self::Light
        } else {
            Self::Dark
        }
    }

    /// 该主题的调色板
    pub const fn palette(self) -> ThemeColors {
        match self {
            Self::Dark => DARK,
            Self::Light => LIGHT,
        }
    }
}

/// 设置当前主题
pub fn set_theme(theme: Theme) {
    CURRENT_THEME.store(theme as u8, Ordering::Relaxed);
}

/// 当前主题
pub fn current_theme() -> Theme {
    Theme::from_index(CURRENT_THEME.load(Ordering::Relaxed))
}

/// 获取当前主题的颜色方案
pub fn colors() -> ThemeColors {
    current_theme().palette()
}

/// 主题颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    /// 标题栏、状态栏与分组标题
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    /// 提交按钮
    pub success: Color,
    /// 删除进行中的行
    pub warning: Color,
    /// 错误横幅与删除确认
    pub error: Color,
    /// 次要文本：表头、字段名、占位
    pub muted: Color,
}

const DARK: ThemeColors = ThemeColors {
    bg: Color::Rgb(28, 28, 30),
    fg: Color::Rgb(220, 220, 220),
    border: Color::Rgb(70, 70, 74),
    highlight: Color::Rgb(0, 122, 204),
    selected_bg: Color::Rgb(38, 79, 120),
    selected_fg: Color::White,
    success: Color::Rgb(78, 201, 176),
    warning: Color::Rgb(229, 192, 123),
    error: Color::Rgb(244, 135, 113),
    muted: Color::Rgb(128, 128, 128),
};

const LIGHT: ThemeColors = ThemeColors {
    bg: Color::Rgb(250, 250, 250),
    fg: Color::Rgb(40, 40, 40),
    border: Color::Rgb(200, 200, 200),
    highlight: Color::Rgb(0, 102, 204),
    selected_bg: Color::Rgb(204, 232, 255),
    selected_fg: Color::Black,
    success: Color::Rgb(34, 134, 58),
    warning: Color::Rgb(176, 110, 0),
    error: Color::Rgb(200, 40, 60),
    muted: Color::Rgb(110, 110, 110),
};

/// 常用样式
pub struct Styles;

impl Styles {
    /// 选中行 / 聚焦字段
    pub fn selected() -> Style {
        let c = colors();
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 分组标题
    pub fn section() -> Style {
        Style::default()
            .fg(colors().highlight)
            .add_modifier(Modifier::BOLD)
    }

    pub fn statusbar() -> Style {
        let c = colors();
        Style::default().bg(c.highlight).fg(c.selected_fg)
    }

    pub fn hint_key() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(200, 200, 200))
    }
}
