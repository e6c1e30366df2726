use async_trait::async_trait;
use reqwest::Method;

use crate::error::{ClientError, Result};
use crate::traits::UserDirectory;
use crate::types::UserRecord;

use super::HttpUserDirectory;

/// Log a failed call at a level matching how surprising it is.
fn log_failure(operation: &str, err: &ClientError) {
    if err.is_expected() {
        log::warn!("{operation} failed: {err}");
    } else {
        log::error!("{operation} failed: {err}");
    }
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn list_records(&self) -> Result<Vec<UserRecord>> {
        let url = self.collection_url();
        self.get_json(&url, None)
            .await
            .inspect_err(|e| log_failure("list users", e))
    }

    async fn get_record(&self, record_id: u64) -> Result<UserRecord> {
        let url = self.record_url(record_id);
        self.get_json(&url, Some(record_id))
            .await
            .inspect_err(|e| log_failure(&format!("get user {record_id}"), e))
    }

    async fn create_record(&self, record: &UserRecord) -> Result<UserRecord> {
        let url = self.collection_url();
        let created: UserRecord = self
            .send_json(Method::POST, &url, record, None)
            .await
            .inspect_err(|e| log_failure("create user", e))?;
        log::info!("Created user {}", created.label());
        Ok(created)
    }

    async fn update_record(&self, record_id: u64, record: &UserRecord) -> Result<UserRecord> {
        let url = self.record_url(record_id);
        let updated: UserRecord = self
            .send_json(Method::PUT, &url, record, Some(record_id))
            .await
            .inspect_err(|e| log_failure(&format!("update user {record_id}"), e))?;
        log::info!("Updated user {}", updated.label());
        Ok(updated)
    }

    async fn delete_record(&self, record_id: u64) -> Result<()> {
        let url = self.record_url(record_id);
        self.delete(&url, record_id)
            .await
            .inspect_err(|e| log_failure(&format!("delete user {record_id}"), e))?;
        log::info!("Deleted user {record_id}");
        Ok(())
    }
}
