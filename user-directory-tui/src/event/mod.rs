//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 src/app.rs 调用，最长等待 timeout
//!
//!         · handle_event    事件分发
//!
//!         接收以下 Event 类型：
//!             Event::Key(KeyEvent)                // 键盘事件
//!             Event::Resize(width, height)        // 终端窗口大小发生变化，下一帧自动重绘
//!             其他                                 // 忽略
//!
//!             当接收到键盘事件时，转入 handle_key_event()
//!             判断：
//!                 - 有弹窗打开时，调用 handle_modal_keys 处理
//!                 - Ctrl+C 始终退出
//!                 - 当前页面是表单时，调用 handle_form_keys 处理
//!                   （普通字符进入输入框，因此 q / ? 不作为快捷键）
//!                 - 其他页面先匹配全局快捷键，再调用 handle_content_keys
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 按键一览
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     列表/详情：
//!         ↑/↓, j/k    选择            Enter       查看
//!         Alt+a       新建            Alt+e       编辑
//!         Alt+d       删除            Alt+r       刷新
//!         Esc         返回            ?/Alt+h     帮助
//!         q/Ctrl+c    退出
//!
//!     表单：
//!         Tab/Shift+Tab   切换字段     字符        输入
//!         Backspace       删除字符     Enter/Ctrl+s 提交
//!         Esc             取消         Alt+h       帮助
//!
//!     确认删除弹窗：
//!         Tab/←/→     切换 Cancel/Delete      Enter   确认     Esc 关闭
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
