//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**：所有弹窗（Modal）的内容都放在 modal 下
//! 3. **页面内容归对应页面**：如 `users.*`, `detail.*`, `form.*`
//! 4. **跨组件复用归 `common.*` / `fields.*`**：多处使用的通用词汇与字段名
//! 5. **键盘提示归 `hints.*`**：按键名称和操作提示

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 用户字段名称（详情页与表单共用）
    pub fields: FieldTexts,
    /// 错误横幅（请求失败与校验失败）
    pub banners: BannerTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 用户列表页面文本
    pub users: UsersTexts,
    /// 用户详情页面文本
    pub detail: DetailTexts,
    /// 创建/编辑表单文本
    pub form: FormTexts,
    /// 弹窗文本
    pub modal: ModalTexts,
    /// 帮助弹窗文本
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    // 操作动词
    pub view: &'static str,
    pub add: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub cancel: &'static str,
    pub back: &'static str,
    pub quit: &'static str,
    // 状态词
    pub loading: &'static str,
    /// 空值占位
    pub not_available: &'static str,
}

// ============================================================================
// 字段名称
// ============================================================================

/// 用户记录的字段名称
pub struct FieldTexts {
    pub id: &'static str,
    pub name: &'static str,
    pub username: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub website: &'static str,
    pub street: &'static str,
    pub suite: &'static str,
    pub city: &'static str,
    pub zipcode: &'static str,
    pub geo: &'static str,
    pub company_name: &'static str,
    pub catch_phrase: &'static str,
    pub bs: &'static str,
}

// ============================================================================
// 错误横幅
// ============================================================================

/// 错误横幅文本，对应核心层产生的英文消息
pub struct BannerTexts {
    pub list_load_failed: &'static str,
    pub delete_failed: &'static str,
    pub detail_load_failed: &'static str,
    pub form_load_failed: &'static str,
    pub create_failed: &'static str,
    pub update_failed: &'static str,
    pub name_required: &'static str,
    pub email_required: &'static str,
    pub invalid_email: &'static str,
    pub phone_required: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示文本
pub struct HintTexts {
    /// 按键名称
    pub keys: KeyNames,
    /// 动作描述
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab: &'static str,
    pub arrows_ud: &'static str, // "↑↓/jk"
    pub arrows_lr: &'static str, // "Tab/←→"
    pub submit: &'static str,    // "Enter/Ctrl+s"
    pub add: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub reload: &'static str,
    pub dismiss: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}

/// 动作描述
pub struct ActionTexts {
    pub select: &'static str,
    pub view: &'static str,
    pub new: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub reload: &'static str,
    pub back: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
    pub next_field: &'static str,
    pub submit: &'static str,
    pub cancel: &'static str,
    pub switch_option: &'static str,
    pub confirm: &'static str,
    pub close: &'static str,
    pub dismiss: &'static str,
}

// ============================================================================
// 页面文本
// ============================================================================

/// 用户列表页面
pub struct UsersTexts {
    pub title: &'static str,
    pub actions: &'static str,
    pub row_actions: &'static str,
    pub deleting: &'static str,
    pub no_users: &'static str,
    pub no_users_hint: &'static str,
    pub deleted: &'static str,
    pub delete_in_progress: &'static str,
}

/// 用户详情页面
pub struct DetailTexts {
    pub title: &'static str,
    pub basic_info: &'static str,
    pub address: &'static str,
    pub company: &'static str,
    pub not_found: &'static str,
}

/// 创建/编辑表单
pub struct FormTexts {
    pub create_title: &'static str,
    pub edit_title: &'static str,
    pub create_submit: &'static str,
    pub update_submit: &'static str,
    pub saving: &'static str,
    pub required_hint: &'static str,
    pub basic_info: &'static str,
    pub address: &'static str,
    pub company: &'static str,
    pub created: &'static str,
    pub updated: &'static str,
}

// ============================================================================
// 弹窗
// ============================================================================

/// 弹窗文本
pub struct ModalTexts {
    /// 确认删除弹窗
    pub confirm_delete: ConfirmDeleteTexts,
}

/// 确认删除弹窗
pub struct ConfirmDeleteTexts {
    pub title: &'static str,
    pub message: &'static str,
}

/// 帮助弹窗
pub struct HelpTexts {
    pub title: &'static str,
    pub list_section: &'static str,
    pub form_section: &'static str,
    pub close_hint: &'static str,
}
