//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod backend;            // 异步结果处理（含过期丢弃）
//!         mod content;            // 列表/详情子消息处理
//!         mod form;               // 表单子消息处理
//!         mod modal;              // 弹窗子消息处理
//!
//!         pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {...}
//!         pub fn navigate(app: &mut App, route: Route) -> Option<Command> {...}
//!
//!
//!     与一般的 Elm 更新函数一样，update 使用 match 对消息穷举；
//!     不同之处在于它返回 Option<Command>：
//!         - None                  纯状态变更
//!         - Some(Command::...)    交给 Backend 执行的 API 调用
//!
//!     主循环（app.rs）负责把返回的 Command 交给 Backend::dispatch。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 页面切换（navigate）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     所有页面切换都经过 navigate()，它实现挂载语义：
//!         Route::List         重建 UsersState，返回 LoadUsers
//!         Route::Detail(id)   详情控制器 mount(id)，返回 LoadUser
//!         Route::Create       以 Create 模式重建表单
//!         Route::Edit(id)     以 Edit 模式重建表单，返回 LoadForm
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 过期结果（backend.rs）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     BackendEvent 到达时，若当前页面已不是发起请求的页面，结果被丢弃；
//!     同一页面内的过期结果（例如 id 不符）由 core 控制器自身丢弃。
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod backend;
mod content;
mod form;
mod modal;

use user_directory_core::{FormMode, Route};

use crate::backend::Command;
use crate::message::AppMessage;
use crate::model::{App, FormState, UsersState};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            None
        }

        AppMessage::GoBack => go_back(app),

        AppMessage::Refresh => refresh(app),

        AppMessage::ShowHelp => {
            app.modal.show_help();
            None
        }

        AppMessage::Navigate(route) => navigate(app, route),

        AppMessage::Content(content_msg) => content::update(app, content_msg),

        AppMessage::Form(form_msg) => form::update(app, form_msg),

        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),

        AppMessage::Backend(event) => backend::update(app, event),

        AppMessage::Noop => None,
    }
}

/// 进入 `route`，重新初始化该页面的状态
pub fn navigate(app: &mut App, route: Route) -> Option<Command> {
    log::debug!("Navigate {} -> {route}", app.current_page);
    app.current_page = route;
    app.modal.close();
    app.clear_status();

    match route {
        Route::List => {
            app.users = UsersState::new();
            app.users.list.begin_load().then_some(Command::LoadUsers)
        }
        Route::Detail(id) => Some(Command::LoadUser(app.detail.controller.mount(id))),
        Route::Create => {
            app.form = FormState::new(FormMode::Create);
            None
        }
        Route::Edit(id) => {
            app.form = FormState::new(FormMode::Edit(id));
            app.form.service.begin_load().map(Command::LoadForm)
        }
    }
}

/// Esc：弹窗已由 Event 层处理，这里只负责页面返回
fn go_back(app: &mut App) -> Option<Command> {
    let target = match app.current_page {
        Route::List => return None,
        Route::Detail(_) => app.detail.controller.back_route(),
        Route::Create | Route::Edit(_) => app.form.service.cancel(),
    };
    navigate(app, target)
}

/// 重新加载当前页面；列表保留已有数据直到新结果到达
fn refresh(app: &mut App) -> Option<Command> {
    match app.current_page {
        Route::List => app.users.list.begin_load().then_some(Command::LoadUsers),
        Route::Detail(id) => navigate(app, Route::Detail(id)),
        // 表单刷新会丢失草稿
        Route::Create | Route::Edit(_) => None,
    }
}
