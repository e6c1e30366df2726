//! 页面视图

pub mod detail;
pub mod form;
pub mod users;
