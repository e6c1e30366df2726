//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 "唯一真相来源"。
//! 所有状态变更都通过 Update 层来触发，View 层只读。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         pub mod state;      // 页面数据状态
//!
//!     当前页面直接使用 core 的 `Route`：
//!         - Route 相当于房间的门牌号，只负责标识位置（`/`, `/user/3`, ...）；
//!         - State 是各个页面的数据容器，内部持有 core 的控制器
//!           （ListService / UserDetailController / FormService），
//!           再加上纯 UI 字段（选中行、聚焦字段）。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub current_page: Route,            // 当前页面
//!             pub status_message: Option<String>, // 状态栏消息（可选）
//!
//!             pub users: UsersState,              // 列表页状态
//!             pub detail: DetailState,            // 详情页状态
//!             pub form: FormState,                // 创建/编辑表单状态
//!
//!             pub modal: ModalState               // 弹窗状态
//!         }
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、挂载语义
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     进入一个页面时，对应的页面状态会被重新初始化：
//!         进入 `/`               → UsersState 重建，开始加载列表
//!         进入 `/user/{id}`      → DetailState 挂载到 id，开始加载记录
//!         进入 `/user/create`    → FormState 以 Create 模式重建
//!         进入 `/user/{id}/edit` → FormState 以 Edit 模式重建，开始加载记录
//!
//!     离开页面后到达的异步结果会在 Update 层被丢弃。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、弹窗状态（ModalState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         Modal 枚举：
//!             - ConfirmDelete { record_id, label, focus }
//!             - Help
//!
//!         ModalState 容器：
//!             - active: Option<Modal>    // None = 无弹窗, Some = 有弹窗
//!             - show_xxx() / close() / is_open()
//!

mod app;
pub mod state;

pub use app::App;
pub use state::{DetailState, FormState, Modal, ModalState, UsersState};
