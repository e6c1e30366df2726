//! 可复用的界面组件

pub mod banner;
pub mod modal;
pub mod statusbar;
