//! 页面状态模块
//!
//! 定义各个页面的状态数据结构

mod detail;
mod form;
mod modal;
mod users;

pub use detail::DetailState;
pub use form::FormState;
pub use modal::{Modal, ModalState};
pub use users::UsersState;
