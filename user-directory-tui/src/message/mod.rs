//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁
//! 所有的用户操作和状态变更都通过 Message 来表达。
//! 相当于将形形色色的 Events 翻译成 Update 能够看懂的 Messages
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息
//!         mod backend;        // 后台任务完成后回送的结果
//!         mod content;        // 列表/详情页面的子消息
//!         mod form;           // 表单页面的子消息
//!         mod modal;          // 弹窗的子消息
//!
//!
//!     在 app::AppMessage 中进行主消息的枚举：
//!
//!         pub enum AppMessage {
//!             Quit,                               // 退出应用
//!             GoBack,                             // 返回/取消
//!             Refresh,                            // 重新加载当前页面
//!             ShowHelp,                           // 显示帮助
//!             Navigate(Route),                    // 进入指定页面
//!             Content(ContentMessage),            // 子消息，与主消息分离
//!             Form(FormMessage),
//!             Modal(ModalMessage),
//!             Backend(BackendEvent),              // 异步结果
//!             Noop,                               // 无操作，用于代替 Option::None
//!         }
//!
//!
//!     BackendEvent 并非来自按键：
//!         Backend 层在 tokio 任务中完成 API 调用后，将结果通过通道发回，
//!         主循环在每个 tick 取出并包装为 AppMessage::Backend 交给 Update 层。
//!

mod app;
mod backend;
mod content;
mod form;
mod modal;

pub use app::AppMessage;
pub use backend::BackendEvent;
pub use content::ContentMessage;
pub use form::FormMessage;
pub use modal::ModalMessage;
