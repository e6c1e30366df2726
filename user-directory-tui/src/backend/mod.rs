//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦，负责所有的网络调用。
//! 通过 user-directory-client 访问远端 `/users` 资源。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod command;            // Update 层产出的待执行调用
//!         mod config_service;     // 配置加载与保存（JSON 文件）
//!         mod dispatcher;         // tokio 运行时 + 结果通道
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、命令（Command）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Update 层从不直接发起网络请求，而是返回 Option<Command>：
//!         - LoadUsers             列表加载
//!         - LoadUser(request)     详情页加载
//!         - LoadForm(request)     编辑表单加载
//!         - Submit(request)       创建 / 更新（整对象载荷）
//!         - Delete(id)            删除
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、调度器（Backend）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Backend 持有 tokio 运行时与 Arc<dyn UserDirectory>：
//!         dispatch(command)   在运行时上 spawn 调用，完成后把 BackendEvent 发入通道
//!         drain()             主循环每个 tick 取出所有已完成的结果
//!
//!     UI 线程从不阻塞在 I/O 上；没有取消，过期结果在 Update 层被丢弃。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户在确认删除弹窗中选择 "Delete"
//!         ↓
//!     Update 层处理 ModalMessage::Confirm，返回 Command::Delete(id)
//!         ↓
//!     Backend::dispatch 在 tokio 任务中调用 UserDirectory::delete_record
//!         ↓
//!     BackendEvent::Deleted 发入通道
//!         ↓
//!     主循环 drain → AppMessage::Backend → Update 层更新 Model
//!         ↓
//!     View 层重新渲染
//!

mod command;
mod config_service;
mod dispatcher;

pub use command::Command;
pub use config_service::{ConfigService, LocalConfigService};
pub use dispatcher::Backend;
