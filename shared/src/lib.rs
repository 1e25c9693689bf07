use serde::{Deserialize, Serialize};

pub mod protocol;

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const BEARER_PREFIX: &str = "Bearer ";

/// 后端约定的成功业务码
pub const CODE_OK: u16 = 200;
/// token 失效或缺失
pub const CODE_INVALID_TOKEN: u16 = 401;
/// 账号错误
pub const CODE_ACCOUNT_MISMATCH: u16 = 421;
/// 密码错误
pub const CODE_PASSWORD_MISMATCH: u16 = 422;

// =========================================================
// 响应信封 (Response Envelope)
// =========================================================

/// 后端所有接口统一的返回结构
///
/// `code == 200` 表示成功，此时 `data` 为业务数据；
/// 其他 code 表示失败，`message` 可能携带错误描述。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ResultResp<T> {
    pub code: u16,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> ResultResp<T> {
    pub fn is_ok(&self) -> bool {
        self.code == CODE_OK
    }
}

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 登录表单
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginParam {
    pub account: String,
    pub password: String,
}

/// `/username` 接口返回的用户信息
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub username: String,
    pub version: String,
}

/// 索引器类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexerCategory {
    #[default]
    Rss,
    Torznab,
}

impl IndexerCategory {
    pub const ALL: [IndexerCategory; 2] = [IndexerCategory::Rss, IndexerCategory::Torznab];

    pub fn as_str(&self) -> &'static str {
        match self {
            IndexerCategory::Rss => "rss",
            IndexerCategory::Torznab => "torznab",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "rss" => Some(IndexerCategory::Rss),
            "torznab" => Some(IndexerCategory::Torznab),
            _ => None,
        }
    }
}

/// torrent 数据源（索引器）
///
/// `id` 为空表示尚未创建，序列化时省略该字段。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexerInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub name: String,
    pub category: IndexerCategory,
    pub url: String,
    pub enable: bool,
}

/// 索引器查询条件，均为可选
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexerSearch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<IndexerCategory>,
}

/// 删除索引器的目标
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DeleteTarget {
    pub id: u32,
}

/// 追踪中的番剧
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BangumiInfo {
    pub id: u32,
    pub title: String,
    pub poster: String,
    #[serde(default)]
    pub year: Option<u32>,
    pub season: u32,
    pub offset: i32,
    pub enable: bool,
    #[serde(default)]
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BangumiListResult {
    pub list: Vec<BangumiInfo>,
}

/// 系统设置
///
/// 读取时 `password` 始终为空，仅在修改密码时携带。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bangumi_default_status: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_intranet: Option<bool>,
}
