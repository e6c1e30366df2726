//! 应用主循环
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//!
//! ```text
//! loop {
//!     terminal.draw(|f| view::render(&app, f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查是否应该退出
//!     for event in backend.drain() {                  // 应用已完成的后台结果
//!         update(&mut app, AppMessage::Backend(event)) -> Option<Command>
//!     }
//!     if let Some(event) = poll_event(100ms) {        // 轮询输入
//!         let msg = handle_event(event, &app);
//!         update(&mut app, msg) -> Option<Command>    // 返回的命令交给 backend 执行
//!     }
//! }
//! ```

use std::time::Duration;

use anyhow::Result;

use crate::backend::{Backend, Command};
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, backend: &mut Backend) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 应用后台任务结果
        for result in backend.drain() {
            dispatch(backend, update::update(app, AppMessage::Backend(result)));
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            dispatch(backend, update::update(app, msg));
        }
    }

    Ok(())
}

/// 把 update 返回的命令交给后台执行
pub fn dispatch(backend: &Backend, command: Option<Command>) {
    if let Some(command) = command {
        backend.dispatch(command);
    }
}
