//! 用户列表服务

use user_directory_client::{ClientError, UserDirectory};

use crate::error::{CoreError, CoreResult};
use crate::navigation::Route;
use crate::traits::{ConfirmPrompt, DELETE_CONFIRMATION};
use crate::types::UserRecord;

pub const LOAD_FAILED: &str = "Failed to load users. Please try again later.";
pub const DELETE_FAILED: &str = "Failed to delete user. Please try again.";

/// 用户列表服务
///
/// Local state is authoritative: a successful delete removes the row even
/// though the backing API does not persist it.
#[derive(Debug, Clone, Default)]
pub struct ListService {
    users: Vec<UserRecord>,
    loading: bool,
    error: Option<String>,
    deleting: Option<u64>,
}

impl ListService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Id of the row whose deletion is in flight.
    pub fn deleting(&self) -> Option<u64> {
        self.deleting
    }

    pub fn is_deleting(&self, id: u64) -> bool {
        self.deleting == Some(id)
    }

    /// Route showing one record of the list.
    pub fn view(id: u64) -> Route {
        Route::Detail(id)
    }

    // ===== Load =====

    /// Start a reload. Returns `false` if one is already running.
    pub fn begin_load(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.error = None;
        true
    }

    /// Replace the collection wholesale, or keep it and set the banner.
    pub fn finish_load(&mut self, result: Result<Vec<UserRecord>, ClientError>) {
        if !self.loading {
            log::debug!("Discarding stale user list");
            return;
        }
        self.loading = false;

        match result {
            Ok(users) => {
                log::debug!("Loaded {} users", users.len());
                self.users = users;
            }
            Err(e) => {
                CoreError::from(e).log("Load users");
                self.error = Some(LOAD_FAILED.to_string());
            }
        }
    }

    pub async fn load(&mut self, client: &dyn UserDirectory) {
        if self.begin_load() {
            let result = client.list_records().await;
            self.finish_load(result);
        }
    }

    // ===== Remove =====

    /// Mark `id` as deleting. Refused (`false`) while another deletion is in
    /// flight.
    pub fn begin_remove(&mut self, id: u64) -> bool {
        if let Some(current) = self.deleting {
            log::warn!("Refusing to delete user {id} while user {current} is being deleted");
            return false;
        }
        self.deleting = Some(id);
        self.error = None;
        true
    }

    /// Apply a delete result and clear the marker.
    pub fn finish_remove(&mut self, id: u64, result: Result<(), ClientError>) {
        if self.deleting != Some(id) {
            log::debug!("Discarding stale delete result for user {id}");
            return;
        }
        self.deleting = None;

        match result {
            Ok(()) => self.users.retain(|u| u.id != Some(id)),
            Err(e) => {
                CoreError::from(e).log(&format!("Delete user {id}"));
                self.error = Some(DELETE_FAILED.to_string());
            }
        }
    }

    /// Confirm, then delete `id`.
    ///
    /// Returns `Ok(false)` when the prompt is declined or another deletion is
    /// in flight; no request is made in either case.
    pub async fn remove(
        &mut self,
        id: u64,
        prompt: &dyn ConfirmPrompt,
        client: &dyn UserDirectory,
    ) -> CoreResult<bool> {
        if self.deleting.is_some() || !prompt.confirm(DELETE_CONFIRMATION).await {
            return Ok(false);
        }
        if !self.begin_remove(id) {
            return Ok(false);
        }

        let result = client.delete_record(id).await;
        let outcome = result.clone();
        self.finish_remove(id, result);
        outcome.map(|()| true).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        Call, MockUserDirectory, Operation, StaticPrompt, network_down, seeded_directory,
        test_user,
    };

    async fn loaded(client: &MockUserDirectory) -> ListService {
        let mut list = ListService::new();
        list.load(client).await;
        list
    }

    fn ids(list: &ListService) -> Vec<u64> {
        list.users().iter().filter_map(|u| u.id).collect()
    }

    // ---- load ----

    #[tokio::test]
    async fn load_replaces_state() {
        let client = seeded_directory();
        let list = loaded(&client).await;

        assert_eq!(ids(&list), vec![1, 2, 3]);
        assert!(!list.is_loading());
        assert!(list.error().is_none());
    }

    #[tokio::test]
    async fn failed_load_keeps_previous_users() {
        let client = seeded_directory();
        let mut list = loaded(&client).await;

        client.fail(Operation::List, network_down()).await;
        list.load(&client).await;

        assert_eq!(ids(&list), vec![1, 2, 3]);
        assert_eq!(list.error(), Some(LOAD_FAILED));
        assert!(!list.is_loading());
    }

    #[tokio::test]
    async fn reload_after_outage_clears_banner() {
        let client = seeded_directory();
        let mut list = ListService::new();

        client.fail(Operation::List, network_down()).await;
        list.load(&client).await;
        assert_eq!(list.error(), Some(LOAD_FAILED));
        assert!(list.users().is_empty());

        client.recover(Operation::List).await;
        list.load(&client).await;

        assert!(list.error().is_none());
        assert_eq!(ids(&list), vec![1, 2, 3]);
    }

    #[test]
    fn second_begin_load_is_refused() {
        let mut list = ListService::new();
        assert!(list.begin_load());
        assert!(!list.begin_load());
    }

    #[test]
    fn load_result_after_abandon_is_ignored() {
        let mut list = ListService::new();
        list.finish_load(Ok(vec![test_user(9, "Late")]));
        assert!(list.users().is_empty());
    }

    // ---- remove ----

    #[tokio::test]
    async fn remove_drops_exactly_that_row() {
        let client = seeded_directory();
        let mut list = loaded(&client).await;
        let prompt = StaticPrompt::accept();

        let removed = list.remove(2, &prompt, &client).await.unwrap();

        assert!(removed);
        assert!(prompt.was_asked());
        assert_eq!(ids(&list), vec![1, 3]);
        assert_eq!(list.deleting(), None);
        assert!(client.calls().await.contains(&Call::Delete(2)));
    }

    #[tokio::test]
    async fn server_still_has_record_after_local_delete() {
        let client = seeded_directory();
        let mut list = loaded(&client).await;

        list.remove(2, &StaticPrompt::accept(), &client)
            .await
            .unwrap();

        assert!(client.contains(2).await);
        assert_eq!(ids(&list), vec![1, 3]);
    }

    #[tokio::test]
    async fn declined_prompt_makes_no_call() {
        let client = seeded_directory();
        let mut list = loaded(&client).await;

        let removed = list
            .remove(2, &StaticPrompt::decline(), &client)
            .await
            .unwrap();

        assert!(!removed);
        assert_eq!(ids(&list), vec![1, 2, 3]);
        assert_eq!(client.calls().await, vec![Call::List]);
    }

    #[tokio::test]
    async fn failed_remove_restores_row_and_clears_marker() {
        let client = seeded_directory();
        let mut list = loaded(&client).await;
        let before = list.users().to_vec();
        client.fail(Operation::Delete, network_down()).await;

        let result = list.remove(2, &StaticPrompt::accept(), &client).await;

        assert!(matches!(result, Err(CoreError::Network(_))));
        assert_eq!(list.users(), before.as_slice());
        assert_eq!(list.deleting(), None);
        assert_eq!(list.error(), Some(DELETE_FAILED));
    }

    #[test]
    fn only_one_deletion_in_flight() {
        let mut list = ListService::new();
        assert!(list.begin_remove(1));
        assert!(list.is_deleting(1));
        assert!(!list.begin_remove(2));
        assert_eq!(list.deleting(), Some(1));
    }

    #[tokio::test]
    async fn remove_while_deleting_does_not_prompt() {
        let client = seeded_directory();
        let mut list = loaded(&client).await;
        assert!(list.begin_remove(1));

        let prompt = StaticPrompt::accept();
        let removed = list.remove(2, &prompt, &client).await.unwrap();

        assert!(!removed);
        assert!(!prompt.was_asked());
        assert_eq!(list.deleting(), Some(1));
    }

    #[tokio::test]
    async fn split_phase_remove_matches_async_remove() {
        let client = seeded_directory();
        let mut list = loaded(&client).await;

        assert!(list.begin_remove(3));
        assert_eq!(ids(&list), vec![1, 2, 3]);
        list.finish_remove(3, Ok(()));
        assert_eq!(ids(&list), vec![1, 2]);
    }

    #[test]
    fn stale_remove_result_is_ignored() {
        let mut list = ListService::new();
        list.begin_load();
        list.finish_load(Ok(vec![test_user(1, "A"), test_user(2, "B")]));
        assert!(list.begin_remove(1));

        list.finish_remove(2, Ok(()));

        assert_eq!(ids(&list), vec![1, 2]);
        assert_eq!(list.deleting(), Some(1));
    }

    #[test]
    fn view_routes_to_detail() {
        assert_eq!(ListService::view(5), Route::Detail(5));
    }
}
