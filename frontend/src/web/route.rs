//! 路由位置模型
//!
//! 纯粹的数据层，不依赖于 DOM 或 web_sys。

use std::fmt::Display;

/// 一次导航的目标地址
///
/// `full_path` 保留原始的 path + query，用于登录后跳回。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    pub path: String,
    pub query: Vec<(String, String)>,
    pub full_path: String,
}

impl Location {
    /// 解析 URL（path + 可选 query），忽略 hash 片段
    pub fn parse(url: &str) -> Self {
        let url = url.split('#').next().unwrap_or_default();
        let (path, query_str) = match url.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (url, None),
        };

        let path = normalize_path(path);
        let query: Vec<(String, String)> = query_str
            .map(|q| {
                q.split('&')
                    .filter(|pair| !pair.is_empty())
                    .map(|pair| match pair.split_once('=') {
                        Some((k, v)) => (k.to_string(), v.to_string()),
                        None => (pair.to_string(), String::new()),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let full_path = match query_str {
            Some(q) if !q.is_empty() => format!("{}?{}", path, q),
            _ => path.clone(),
        };

        Self {
            path,
            query,
            full_path,
        }
    }

    /// 读取查询参数的原始值（不做解码）
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// 替换 path，保留 query
    pub fn with_path(&self, path: &str) -> Self {
        let path = normalize_path(path);
        let full_path = match self.full_path.split_once('?') {
            Some((_, q)) => format!("{}?{}", path, q),
            None => path.clone(),
        };
        Self {
            path,
            query: self.query.clone(),
            full_path,
        }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.full_path)
    }
}

/// 去掉末尾的 `/`，空路径视为根
fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_path_and_query() {
        let loc = Location::parse("/rss/list?name=mikan&category=rss#top");
        assert_eq!(loc.path, "/rss/list");
        assert_eq!(loc.query_value("name"), Some("mikan"));
        assert_eq!(loc.query_value("category"), Some("rss"));
        assert_eq!(loc.full_path, "/rss/list?name=mikan&category=rss");
    }

    #[test]
    fn normalizes_trailing_slash_and_root() {
        assert_eq!(Location::parse("").path, "/");
        assert_eq!(Location::parse("/").path, "/");
        assert_eq!(Location::parse("/setting/index/").path, "/setting/index");
        assert_eq!(Location::parse("bangumi").path, "/bangumi");
    }

    #[test]
    fn with_path_keeps_query() {
        let loc = Location::parse("/bangumi?keyword=a").with_path("/bangumi/list");
        assert_eq!(loc.full_path, "/bangumi/list?keyword=a");
        assert_eq!(loc.query_value("keyword"), Some("a"));
    }

    #[test]
    fn flag_without_value() {
        let loc = Location::parse("/login?debug");
        assert_eq!(loc.query_value("debug"), Some(""));
    }
}
