//! 后台任务结果

use user_directory_client::ClientError;
use user_directory_core::FormMode;
use user_directory_core::types::UserRecord;

/// 一次 API 调用的结果，携带足以判断是否过期的标识
#[derive(Debug, Clone)]
pub enum BackendEvent {
    /// 列表加载完成
    UsersLoaded(Result<Vec<UserRecord>, ClientError>),
    /// 详情页记录加载完成
    UserLoaded {
        record_id: u64,
        result: Result<UserRecord, ClientError>,
    },
    /// 编辑表单记录加载完成
    FormLoaded {
        record_id: u64,
        result: Result<UserRecord, ClientError>,
    },
    /// 表单提交完成
    Submitted {
        mode: FormMode,
        result: Result<UserRecord, ClientError>,
    },
    /// 删除完成
    Deleted {
        record_id: u64,
        result: Result<(), ClientError>,
    },
}
