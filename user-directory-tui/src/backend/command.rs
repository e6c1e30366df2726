//! 待执行的 API 调用

use user_directory_client::UserDirectory;
use user_directory_core::{LoadRequest, SubmitRequest};

use crate::message::BackendEvent;

/// Update 层请求 Backend 执行的调用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 加载整个列表
    LoadUsers,
    /// 加载详情页记录
    LoadUser(LoadRequest),
    /// 加载编辑表单记录
    LoadForm(LoadRequest),
    /// 创建或更新
    Submit(SubmitRequest),
    /// 删除
    Delete(u64),
}

impl Command {
    /// 执行调用并把结果包装为 [`BackendEvent`]
    pub async fn run(self, client: &dyn UserDirectory) -> BackendEvent {
        match self {
            Self::LoadUsers => BackendEvent::UsersLoaded(client.list_records().await),
            Self::LoadUser(request) => BackendEvent::UserLoaded {
                record_id: request.record_id,
                result: client.get_record(request.record_id).await,
            },
            Self::LoadForm(request) => BackendEvent::FormLoaded {
                record_id: request.record_id,
                result: client.get_record(request.record_id).await,
            },
            Self::Submit(request) => BackendEvent::Submitted {
                mode: request.mode,
                result: request.send(client).await,
            },
            Self::Delete(record_id) => BackendEvent::Deleted {
                record_id,
                result: client.delete_record(record_id).await,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use user_directory_core::FormMode;
    use user_directory_core::test_utils::{Call, Operation, network_down, seeded_directory};

    #[tokio::test]
    async fn load_user_carries_the_requested_id() {
        let client = seeded_directory();

        let event = Command::LoadUser(LoadRequest { record_id: 2 })
            .run(&client)
            .await;

        let BackendEvent::UserLoaded { record_id, result } = event else {
            panic!("expected UserLoaded");
        };
        assert_eq!(record_id, 2);
        assert_eq!(result.unwrap().name, "Ervin");
    }

    #[tokio::test]
    async fn edit_submit_is_a_put_to_the_mode_id() {
        let client = seeded_directory();
        let payload = user_directory_core::test_utils::test_user(3, "Clem");
        let request = SubmitRequest {
            mode: FormMode::Edit(3),
            payload: payload.clone(),
        };

        let event = Command::Submit(request).run(&client).await;

        assert!(matches!(
            event,
            BackendEvent::Submitted { mode: FormMode::Edit(3), result: Ok(_) }
        ));
        assert_eq!(client.calls().await, vec![Call::Update(3, payload)]);
    }

    #[tokio::test]
    async fn delete_failure_is_reported_not_raised() {
        let client = seeded_directory();
        client.fail(Operation::Delete, network_down()).await;

        let event = Command::Delete(1).run(&client).await;

        assert!(matches!(
            event,
            BackendEvent::Deleted { record_id: 1, result: Err(_) }
        ));
    }
}
