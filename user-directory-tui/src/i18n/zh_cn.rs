//! 简体中文翻译 (zh-CN)

use super::keys::{
    ActionTexts, BannerTexts, CommonTexts, ConfirmDeleteTexts, DetailTexts, FieldTexts, FormTexts,
    HelpTexts, HintTexts, KeyNames, ModalTexts, Translations, UsersTexts,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "用户目录",
        view: "查看",
        add: "添加",
        edit: "编辑",
        delete: "删除",
        cancel: "取消",
        back: "返回",
        quit: "退出",
        loading: "加载中...",
        not_available: "N/A",
    },

    // ========================================================================
    // 字段名称
    // ========================================================================
    fields: FieldTexts {
        id: "ID",
        name: "姓名",
        username: "用户名",
        email: "邮箱",
        phone: "电话",
        website: "网站",
        street: "街道",
        suite: "门牌",
        city: "城市",
        zipcode: "邮编",
        geo: "地理坐标",
        company_name: "公司名称",
        catch_phrase: "口号",
        bs: "业务",
    },

    // ========================================================================
    // 错误横幅
    // ========================================================================
    banners: BannerTexts {
        list_load_failed: "加载用户列表失败，请稍后重试。",
        delete_failed: "删除用户失败，请重试。",
        detail_load_failed: "加载用户详情失败，请重试。",
        form_load_failed: "加载用户数据失败，请重试。",
        create_failed: "创建用户失败，请重试。",
        update_failed: "更新用户失败，请重试。",
        name_required: "姓名不能为空",
        email_required: "邮箱不能为空",
        invalid_email: "请输入有效的邮箱地址",
        phone_required: "电话不能为空",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            arrows_ud: "↑↓/jk",
            arrows_lr: "Tab/←→",
            submit: "Enter/Ctrl+s",
            add: "Alt+a",
            edit: "Alt+e",
            delete: "Alt+d",
            reload: "Alt+r",
            dismiss: "Alt+x",
            help: "?",
            quit: "q",
        },
        actions: ActionTexts {
            select: "选择",
            view: "查看",
            new: "新建",
            edit: "编辑",
            delete: "删除",
            reload: "刷新",
            back: "返回",
            help: "帮助",
            quit: "退出",
            next_field: "下一字段",
            submit: "提交",
            cancel: "取消",
            switch_option: "切换",
            confirm: "确认",
            close: "关闭",
            dismiss: "关闭提示",
        },
    },

    // ========================================================================
    // 页面
    // ========================================================================
    users: UsersTexts {
        title: "用户",
        actions: "操作",
        row_actions: "查看 · 编辑 · 删除",
        deleting: "删除中...",
        no_users: "暂无用户。",
        no_users_hint: "按 Alt+a 添加新用户，或按 Alt+r 刷新。",
        deleted: "用户已删除",
        delete_in_progress: "另一个用户仍在删除中",
    },

    detail: DetailTexts {
        title: "用户详情",
        basic_info: "基本信息",
        address: "地址",
        company: "公司",
        not_found: "未找到该用户。",
    },

    form: FormTexts {
        create_title: "创建用户",
        edit_title: "编辑用户",
        create_submit: "创建用户",
        update_submit: "更新用户",
        saving: "保存中...",
        required_hint: "* 必填",
        basic_info: "基本信息",
        address: "地址",
        company: "公司",
        created: "用户已创建",
        updated: "用户已更新",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        confirm_delete: ConfirmDeleteTexts {
            title: "确认删除",
            message: "确定要删除该用户吗？",
        },
    },

    help: HelpTexts {
        title: "帮助",
        list_section: "用户列表与详情",
        form_section: "创建 / 编辑表单",
        close_hint: "按 Esc 关闭帮助",
    },
};
