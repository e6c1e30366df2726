//! 业务逻辑服务层

mod detail_service;
mod form_service;
mod list_service;

pub use detail_service::UserDetailController;
pub use form_service::{FormService, LoadRequest, SubmitRequest};
pub use list_service::ListService;

/// Banner texts shown when a request fails.
pub mod messages {
    pub use super::detail_service::LOAD_FAILED as DETAIL_LOAD_FAILED;
    pub use super::form_service::{
        CREATE_FAILED, LOAD_FAILED as FORM_LOAD_FAILED, UPDATE_FAILED,
    };
    pub use super::list_service::{DELETE_FAILED, LOAD_FAILED as LIST_LOAD_FAILED};
}
