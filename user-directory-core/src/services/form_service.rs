//! 用户表单服务
//!
//! 负责创建/编辑表单的草稿、校验与提交。

use user_directory_client::{ClientError, UserDirectory};

use crate::error::{CoreError, CoreResult};
use crate::navigation::{FormMode, Route};
use crate::types::{FieldPath, UnknownFieldPath, UserDraft, UserRecord, ValidationError};

pub const LOAD_FAILED: &str = "Failed to load user data. Please try again.";
pub const CREATE_FAILED: &str = "Failed to create user. Please try again.";
pub const UPDATE_FAILED: &str = "Failed to update user. Please try again.";

/// Fetch the form needs before it can be edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadRequest {
    pub record_id: u64,
}

/// Write the form wants performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub mode: FormMode,
    /// Whole-object payload, never a partial patch.
    pub payload: UserRecord,
}

impl SubmitRequest {
    /// Run the write against `client`.
    pub async fn send(&self, client: &dyn UserDirectory) -> Result<UserRecord, ClientError> {
        match self.mode {
            FormMode::Create => client.create_record(&self.payload).await,
            FormMode::Edit(id) => client.update_record(id, &self.payload).await,
        }
    }
}

/// 表单服务
#[derive(Debug, Clone, Default)]
pub struct FormService {
    mode: FormMode,
    draft: UserDraft,
    loading: bool,
    submitting: bool,
    error: Option<String>,
}

impl FormService {
    /// 创建表单（编辑模式下初始为加载中）
    #[must_use]
    pub fn new(mode: FormMode) -> Self {
        Self {
            mode,
            loading: mode.is_edit(),
            ..Self::default()
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn draft(&self) -> &UserDraft {
        &self.draft
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Neither a load nor a write is in flight.
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Replace one leaf of the draft.
    pub fn set_field(&mut self, path: FieldPath, value: impl Into<String>) {
        self.draft = self.draft.with_field(path, value);
    }

    /// [`set_field`](Self::set_field) addressed by a dotted path.
    pub fn set_field_path(
        &mut self,
        path: &str,
        value: impl Into<String>,
    ) -> Result<(), UnknownFieldPath> {
        let path: FieldPath = path.parse()?;
        self.set_field(path, value);
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.draft.validate()
    }

    /// Populate the draft from a fetched record.
    pub fn hydrate(&mut self, record: &UserRecord) {
        self.draft = UserDraft::from_record(record);
    }

    // ===== Load (edit mode) =====

    /// Start fetching the record being edited. `None` in create mode.
    pub fn begin_load(&mut self) -> Option<LoadRequest> {
        let record_id = self.mode.record_id()?;
        self.loading = true;
        self.error = None;
        Some(LoadRequest { record_id })
    }

    /// Apply a fetch result. Results for another record, or arriving after
    /// the load was abandoned, are discarded and `false` is returned.
    pub fn finish_load(
        &mut self,
        record_id: u64,
        result: Result<UserRecord, ClientError>,
    ) -> bool {
        if !self.loading || self.mode.record_id() != Some(record_id) {
            log::debug!("Discarding stale form load for user {record_id}");
            return false;
        }
        self.loading = false;

        match result {
            Ok(record) => self.hydrate(&record),
            Err(e) => {
                CoreError::from(e).log(&format!("Load user {record_id} for editing"));
                self.error = Some(LOAD_FAILED.to_string());
            }
        }
        true
    }

    /// Fetch and hydrate in one step (edit mode only).
    pub async fn load(&mut self, client: &dyn UserDirectory) {
        if let Some(request) = self.begin_load() {
            let result = client.get_record(request.record_id).await;
            self.finish_load(request.record_id, result);
        }
    }

    // ===== Submit =====

    /// Validate and produce the write to perform.
    ///
    /// `Ok(None)` while a load or another write is in flight; the draft and
    /// banner are left alone. A validation failure sets the banner and no
    /// request is made.
    pub fn begin_submit(&mut self) -> CoreResult<Option<SubmitRequest>> {
        if !self.can_submit() {
            log::debug!(
                "Ignoring submit while {}",
                if self.loading { "loading" } else { "submitting" }
            );
            return Ok(None);
        }
        self.error = None;

        if let Err(e) = self.validate() {
            self.error = Some(e.to_string());
            return Err(e.into());
        }

        self.submitting = true;
        Ok(Some(SubmitRequest {
            mode: self.mode,
            payload: self.draft.to_record(),
        }))
    }

    /// Apply a write result; on success the draft is discarded and the
    /// route to show next is returned. On failure the draft is kept.
    pub fn finish_submit(&mut self, result: Result<UserRecord, ClientError>) -> Option<Route> {
        if !self.submitting {
            log::debug!("Discarding stale form submit result");
            return None;
        }
        self.submitting = false;

        match result {
            Ok(_) => {
                self.draft = UserDraft::default();
                Some(self.exit_route())
            }
            Err(e) => {
                let (operation, banner) = match self.mode {
                    FormMode::Create => ("Create user".to_string(), CREATE_FAILED),
                    FormMode::Edit(id) => (format!("Update user {id}"), UPDATE_FAILED),
                };
                CoreError::from(e).log(&operation);
                self.error = Some(banner.to_string());
                None
            }
        }
    }

    /// Validate, send and apply in one step. `Ok(None)` when the form is
    /// still loading and nothing was sent.
    pub async fn submit(&mut self, client: &dyn UserDirectory) -> CoreResult<Option<Route>> {
        let Some(request) = self.begin_submit()? else {
            return Ok(None);
        };
        match request.send(client).await {
            Ok(record) => Ok(self.finish_submit(Ok(record))),
            Err(e) => {
                self.finish_submit(Err(e.clone()));
                Err(e.into())
            }
        }
    }

    /// Route to leave the form for without saving.
    pub fn cancel(&self) -> Route {
        self.exit_route()
    }

    /// Collection after a create, the record after an edit.
    fn exit_route(&self) -> Route {
        match self.mode {
            FormMode::Create => Route::List,
            FormMode::Edit(id) => Route::Detail(id),
        }
    }
}
