//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码，
//! 负责终端的初始化和恢复，以及日志的安装。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod logging;        // tracing 订阅者 + 文件输出
//!         mod terminal;       // 终端初始化和恢复
//!
//!
//!     终端类型定义：
//!
//!             // 类型别名，简化长类型名
//!             pub type Term = Terminal<CrosstermBackend<Stdout>>;
//!
//!
//!     初始化终端：
//!
//!             enable_raw_mode()?;                         // 1. 启用原始模式
//!             execute!(stdout, EnterAlternateScreen)?;    // 2. 进入备用屏幕
//!             Terminal::new(backend)?;                    // 3. 创建终端对象
//!
//!         · Raw Mode（原始模式）
//!             - 关闭行缓冲：无需按 Enter，每个按键立即生效
//!             - 关闭字符回显：按键不会显示在终端上
//!             - 捕获所有按键：包括 Ctrl+C、箭头键等特殊键
//!
//!         · Alternate Screen（备用屏幕）
//!             - TUI 应用在备用屏幕运行
//!             - 退出后自动恢复主屏幕内容（不会覆盖原有内容）
//!
//!
//!     恢复终端：
//!
//!             disable_raw_mode()?;                                    // 1. 禁用原始模式
//!             execute!(terminal.backend_mut(), LeaveAlternateScreen)?; // 2. 离开备用屏幕
//!             terminal.show_cursor()?;                                // 3. 显示光标
//!
//!         注意：无论程序是正常退出还是发生错误，都必须调用此函数！
//!               否则终端会保持在原始模式，用户输入不会正常显示。
//!
//!
//!     日志：
//!         终端被 TUI 占用，日志通过 tracing-appender 的非阻塞写入器
//!         写到配置目录下的文件中，级别由 USER_DIRECTORY_LOG 控制（默认 info）。
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{Term, init_terminal, restore_terminal};
