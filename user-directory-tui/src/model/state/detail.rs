//! 用户详情页面状态

use user_directory_core::UserDetailController;

/// 用户详情页面状态
#[derive(Debug, Default)]
pub struct DetailState {
    /// 详情控制器（挂载的 id、记录、加载状态、错误横幅）
    pub controller: UserDetailController,
}
