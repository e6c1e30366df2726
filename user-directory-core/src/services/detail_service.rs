//! 用户详情服务

use user_directory_client::{ClientError, UserDirectory};

use crate::error::CoreError;
use crate::navigation::Route;
use crate::services::LoadRequest;
use crate::types::UserRecord;

pub const LOAD_FAILED: &str = "Failed to load user details. Please try again.";

/// Single-record view.
#[derive(Debug, Clone, Default)]
pub struct UserDetailController {
    record_id: Option<u64>,
    user: Option<UserRecord>,
    loading: bool,
    error: Option<String>,
}

impl UserDetailController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the view is mounted on.
    pub fn record_id(&self) -> Option<u64> {
        self.record_id
    }

    pub fn user(&self) -> Option<&UserRecord> {
        self.user.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Mount on `id` and start fetching it. Any previously shown record is
    /// dropped.
    pub fn mount(&mut self, id: u64) -> LoadRequest {
        self.record_id = Some(id);
        self.user = None;
        self.loading = true;
        self.error = None;
        LoadRequest { record_id: id }
    }

    /// Apply a fetch result. A result for an id other than the mounted one
    /// is discarded and `false` is returned.
    pub fn finish_load(&mut self, record_id: u64, result: Result<UserRecord, ClientError>) -> bool {
        if !self.loading || self.record_id != Some(record_id) {
            log::debug!("Discarding stale detail for user {record_id}");
            return false;
        }
        self.loading = false;

        match result {
            Ok(user) => self.user = Some(user),
            Err(e) => {
                CoreError::from(e).log(&format!("Load user {record_id}"));
                self.error = Some(LOAD_FAILED.to_string());
            }
        }
        true
    }

    /// Mount and fetch in one step.
    pub async fn load(&mut self, id: u64, client: &dyn UserDirectory) {
        let request = self.mount(id);
        let result = client.get_record(request.record_id).await;
        self.finish_load(request.record_id, result);
    }

    /// Route showing record `id`.
    pub fn view(id: u64) -> Route {
        Route::Detail(id)
    }

    /// Edit form for the mounted record.
    pub fn edit_route(&self) -> Option<Route> {
        self.record_id.map(Route::Edit)
    }

    /// Back to the collection.
    pub fn back_route(&self) -> Route {
        Route::List
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockUserDirectory, Operation, full_user, network_down, seeded_directory};

    #[tokio::test]
    async fn load_shows_record() {
        let client = seeded_directory();
        let mut detail = UserDetailController::new();

        detail.load(1, &client).await;

        assert_eq!(detail.user(), Some(&full_user(1)));
        assert!(!detail.is_loading());
        assert_eq!(detail.edit_route(), Some(Route::Edit(1)));
    }

    #[tokio::test]
    async fn missing_record_sets_banner() {
        let client = MockUserDirectory::new();
        let mut detail = UserDetailController::new();

        detail.load(42, &client).await;

        assert!(detail.user().is_none());
        assert_eq!(detail.error(), Some(LOAD_FAILED));
        assert_eq!(detail.back_route(), Route::List);
    }

    #[tokio::test]
    async fn network_failure_sets_banner() {
        let client = seeded_directory();
        client.fail(Operation::Get, network_down()).await;
        let mut detail = UserDetailController::new();

        detail.load(1, &client).await;

        assert_eq!(detail.error(), Some(LOAD_FAILED));
    }

    #[test]
    fn result_for_previous_id_is_discarded() {
        let mut detail = UserDetailController::new();
        detail.mount(1);
        detail.mount(2);

        assert!(!detail.finish_load(1, Ok(full_user(1))));
        assert!(detail.is_loading());
        assert!(detail.user().is_none());

        assert!(detail.finish_load(2, Ok(full_user(2))));
        assert_eq!(detail.user().and_then(|u| u.id), Some(2));
    }

    #[test]
    fn remount_clears_previous_record() {
        let mut detail = UserDetailController::new();
        detail.mount(1);
        detail.finish_load(1, Ok(full_user(1)));

        let request = detail.mount(3);

        assert_eq!(request.record_id, 3);
        assert!(detail.user().is_none());
        assert!(detail.is_loading());
    }

    #[test]
    fn view_routes_to_detail() {
        assert_eq!(UserDetailController::view(8), Route::Detail(8));
        assert_eq!(UserDetailController::new().edit_route(), None);
    }
}
