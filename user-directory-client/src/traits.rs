use async_trait::async_trait;

use crate::error::Result;
use crate::types::UserRecord;

/// 用户目录 Trait
///
/// Remote collection of [`UserRecord`]s keyed by integer id. Every call issues
/// at most one request and reports at most one [`ClientError`](crate::ClientError).
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// 获取全部用户（服务端顺序）
    async fn list_records(&self) -> Result<Vec<UserRecord>>;

    /// 获取单个用户
    ///
    /// A missing record yields [`ClientError::NotFound`](crate::ClientError::NotFound).
    async fn get_record(&self, record_id: u64) -> Result<UserRecord>;

    /// 创建用户，返回服务端回显的记录
    async fn create_record(&self, record: &UserRecord) -> Result<UserRecord>;

    /// 整体替换用户，返回服务端回显的记录
    async fn update_record(&self, record_id: u64, record: &UserRecord) -> Result<UserRecord>;

    /// 删除用户（响应体被忽略）
    async fn delete_record(&self, record_id: u64) -> Result<()>;
}
