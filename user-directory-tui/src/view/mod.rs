//! View 层：根据 Model 渲染 UI
//!
//! 纯函数式渲染，只读取 [`App`] 状态，不做任何修改。
//!
//! ```text
//! view/
//! ├── layout.rs      标题栏 + 内容区 + 状态栏
//! ├── theme.rs       颜色与常用样式
//! ├── format.rs      按显示宽度截断/补齐
//! ├── components/    横幅、状态栏、弹窗
//! └── pages/         列表、详情、表单
//! ```

mod components;
mod format;
mod layout;
mod pages;
pub mod theme;

use ratatui::Frame;

use crate::model::App;

/// 渲染整个界面
pub fn render(app: &App, frame: &mut Frame) {
    layout::render(app, frame);
}
