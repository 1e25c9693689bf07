//! 应用配置
//!
//! 集中管理编译期常量。API 前缀可在构建时通过 `MIKAN_API_BASE` 覆盖，
//! 未设置时使用 `/api`（开发时由 Trunk 代理到后端）。

/// 默认的 API 前缀
const DEFAULT_API_BASE: &str = "/api";

/// API 前缀，构建时可覆盖
pub const API_BASE: &str = match option_env!("MIKAN_API_BASE") {
    Some(base) => base,
    None => DEFAULT_API_BASE,
};

// =========================================================
// 本地存储
// =========================================================

/// 用户状态持久化使用的 LocalStorage 键（只保存 token）
pub const STORAGE_USER_KEY: &str = "user";

/// 界面语言持久化使用的 LocalStorage 键
pub const STORAGE_LOCALE_KEY: &str = "lang";

// =========================================================
// 路由
// =========================================================

pub const LOGIN_PATH: &str = "/login";
pub const ROOT_PATH: &str = "/";

/// 登录页携带原始目标地址的查询参数名
pub const REDIRECT_QUERY_KEY: &str = "redirect";

/// 无需登录即可访问的路由
pub const WHITE_LIST_ROUTERS: &[&str] = &[LOGIN_PATH];

/// 菜单高亮时参与匹配的最大路径层级
pub const MENU_ACTIVE_MAX_LEVEL: usize = 3;

// =========================================================
// 界面
// =========================================================

/// 消息提示自动消失时间（毫秒）
pub const MESSAGE_DURATION_MS: u32 = 3000;
