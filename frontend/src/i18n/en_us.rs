pub(super) const MESSAGES: &[(&str, &str)] = &[
    // components
    ("components.isSetup.on", "Enabled"),
    ("components.isSetup.off", "Disabled"),
    ("components.manage", "Manage"),
    ("components.delete", "Delete"),
    ("components.commonTable.operation", "Operation"),
    ("components.commonTable.detail", "detail"),
    ("components.commonTable.delete", "delete"),
    ("components.commonTable.reset", "reset"),
    ("components.commonTable.query", "query"),
    ("components.invalid_token", "Login has expired, please log in again"),
    ("components.api_error", "api request error"),
    ("components.api_error_code", "api request error, code: "),
    // layout
    ("layout.header.code", "Code Repository"),
    ("layout.header.help", "Document"),
    ("layout.header.user", "Profile"),
    ("layout.header.signOut", "Sign Out"),
    ("layout.header.setting", "Setting"),
    ("layout.header.version", "Version"),
    ("layout.setting.title", "Setting"),
    ("layout.setting.theme.mode", "Theme Mode"),
    ("layout.setting.theme.color", "Theme Color"),
    ("layout.setting.theme.options.light", "Light"),
    ("layout.setting.theme.options.dark", "Dark "),
    ("layout.setting.theme.options.auto", "Auto"),
    // pages.login
    ("pages.login.loginTitle", "Login in"),
    ("pages.login.subtitle", "The auto tracking bangumi tool"),
    ("pages.login.signIn", "Sign in"),
    ("pages.login.input.account", "please enter account"),
    ("pages.login.input.password", "please enter password"),
    ("pages.login.required.account", "account is required"),
    ("pages.login.required.phone", "phone is required"),
    ("pages.login.required.password", "password is required"),
    ("pages.login.required.verification", "verification code is require"),
    ("pages.login.result.success", "login success"),
    ("pages.login.result.username_error", "account incorrect"),
    ("pages.login.result.password_error", "password incorrect"),
    ("pages.login.result.other_error", "other error，please open new issue"),
    // pages.bangumi
    ("pages.bangumi.search", "search bangumi"),
    ("pages.bangumi.season", "Season"),
    ("pages.bangumi.offset", "Offset"),
    ("pages.bangumi.year", "Year"),
    ("pages.bangumi.exclude", "Excluded"),
    ("pages.bangumi.empty", "No bangumi is being tracked"),
    // pages.rss
    ("pages.rss.field.name", "Name"),
    ("pages.rss.field.category", "Type"),
    ("pages.rss.field.status", "Status"),
    ("pages.rss.field.url", "URL"),
    ("pages.rss.field.operation", "Operation"),
    ("pages.rss.placeholder.name", "enter indexer name"),
    ("pages.rss.placeholder.category", "enter indexer category"),
    ("pages.rss.placeholder.url", "enter indexer URL"),
    ("pages.rss.placeholder.enable", "enter enable"),
    ("pages.rss.status.enable", "enable"),
    ("pages.rss.status.disable", "disable"),
    ("pages.rss.option.create", "Add a new Indexer"),
    ("pages.rss.option.truncate", "Clear All Indexer"),
    ("pages.rss.option.detail", "detail"),
    ("pages.rss.option.delete", "delete"),
    ("pages.rss.option.submit", "Submit"),
    ("pages.rss.option.cancel", "Cancel"),
    ("pages.rss.hint.create", "Create Indexer"),
    ("pages.rss.hint.modify", "Modify Indexer"),
    ("pages.rss.hint.delete", "Are you sure to delete the selected indexer?"),
    ("pages.rss.hint.truncate", "Are you sure to delete ALL indexer?"),
    ("pages.rss.hint.delete_success", "Delete success"),
    ("pages.rss.hint.submit_success", "Submit success"),
    // pages.setting
    ("pages.setting.title.bangumi", "Bangumi Tracking Setting"),
    ("pages.setting.title.auth", "Authentication Setting"),
    ("pages.setting.title.password", "Modify password"),
    ("pages.setting.form.username", "Username"),
    ("pages.setting.form.password", "Password"),
    ("pages.setting.form.r_password", "Confirm Password"),
    ("pages.setting.form.bangumi_default_status", "Default Status"),
    ("pages.setting.form.auth_intranet", "LAN auth"),
    ("pages.setting.help.bangumi_default_status", "The default state when adding bangumi automatically"),
    ("pages.setting.help.auth_intranet", "Is authentication enabled when in the local area network?"),
    ("pages.setting.placeholder.password", "enter password"),
    ("pages.setting.placeholder.re_password", "entered twice are inconsistent"),
    ("pages.setting.status.enable", "Enable"),
    ("pages.setting.status.disable", "Disable"),
    ("pages.setting.hint.save_success", "save success"),
    ("pages.setting.option.modify_password", "Modify Password"),
    ("pages.setting.option.cancel", "Cancel"),
    ("pages.setting.option.save", "Save"),
    ("pages.setting.option.submit", "Submit"),
    // pages.result
    ("pages.result.success", "Operation succeeded"),
    ("pages.result.fail", "Operation failed"),
    ("pages.result.network_error", "Network error, please check your connection"),
    ("pages.result.forbidden", "Sorry, you do not have permission to access this page"),
    ("pages.result.not_found", "Sorry, the page you visited does not exist"),
    ("pages.result.server_error", "Sorry, the server is down"),
    ("pages.result.browser_incompatible", "Your browser version is too low, please upgrade"),
    ("pages.result.maintenance", "The system is under maintenance, please visit later"),
    ("pages.result.back_home", "Back to home"),
];
