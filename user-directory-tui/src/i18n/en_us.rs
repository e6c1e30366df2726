//! 英文翻译 (en-US)

use user_directory_core::traits::DELETE_CONFIRMATION;

use super::keys::{
    ActionTexts, BannerTexts, CommonTexts, ConfirmDeleteTexts, DetailTexts, FieldTexts, FormTexts,
    HelpTexts, HintTexts, KeyNames, ModalTexts, Translations, UsersTexts,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "User Directory",
        view: "View",
        add: "Add",
        edit: "Edit",
        delete: "Delete",
        cancel: "Cancel",
        back: "Back",
        quit: "Quit",
        loading: "Loading...",
        not_available: "N/A",
    },

    // ========================================================================
    // 字段名称
    // ========================================================================
    fields: FieldTexts {
        id: "ID",
        name: "Name",
        username: "Username",
        email: "Email",
        phone: "Phone",
        website: "Website",
        street: "Street",
        suite: "Suite",
        city: "City",
        zipcode: "Zipcode",
        geo: "Geo Location",
        company_name: "Company Name",
        catch_phrase: "Catch Phrase",
        bs: "Business",
    },

    // ========================================================================
    // 错误横幅
    // ========================================================================
    banners: BannerTexts {
        list_load_failed: "Failed to load users. Please try again later.",
        delete_failed: "Failed to delete user. Please try again.",
        detail_load_failed: "Failed to load user details. Please try again.",
        form_load_failed: "Failed to load user data. Please try again.",
        create_failed: "Failed to create user. Please try again.",
        update_failed: "Failed to update user. Please try again.",
        name_required: "Name is required",
        email_required: "Email is required",
        invalid_email: "Please enter a valid email address",
        phone_required: "Phone is required",
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
            select: "Select",
            view: "View",
            new: "New",
            edit: "Edit",
            delete: "Delete",
            reload: "Reload",
            back: "Back",
            help: "Help",
            quit: "Quit",
            next_field: "Next field",
            submit: "Submit",
            cancel: "Cancel",
            switch_option: "Switch",
            confirm: "Confirm",
            close: "Close",
            dismiss: "Dismiss",
        },
    },

    // ========================================================================
    // 页面
    // ========================================================================
    users: UsersTexts {
        title: "Users",
        actions: "Actions",
        row_actions: "View · Edit · Delete",
        deleting: "Deleting...",
        no_users: "No users found.",
        no_users_hint: "Press Alt+a to add a new user, or Alt+r to reload.",
        deleted: "User deleted",
        delete_in_progress: "Another user is still being deleted",
    },

    detail: DetailTexts {
        title: "User Details",
        basic_info: "Basic Information",
        address: "Address",
        company: "Company",
        not_found: "User not found.",
    },

    form: FormTexts {
        create_title: "Create User",
        edit_title: "Edit User",
        create_submit: "Create User",
        update_submit: "Update User",
        saving: "Saving...",
        required_hint: "* required",
        basic_info: "Basic Information",
        address: "Address",
        company: "Company",
        created: "User created",
        updated: "User updated",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        confirm_delete: ConfirmDeleteTexts {
            title: "Confirm Deletion",
            message: DELETE_CONFIRMATION,
        },
    },

    help: HelpTexts {
        title: "Help",
        list_section: "User list and details",
        form_section: "Create / edit form",
        close_hint: "Press Esc to close the help",
    },
};
