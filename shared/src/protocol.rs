use crate::{BangumiListResult, DeleteTarget, IndexerInfo, IndexerSearch, LoginParam, Settings, UserInfo};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
///
/// Paths are relative to the API base (`/api` in production).
pub trait ApiRequest: Serialize + DeserializeOwned {
    /// The payload carried in `data` of a successful envelope.
    type Response: Serialize + DeserializeOwned;
    /// The URL path (or suffix).
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Whether the request itself is sent as a JSON body.
    const HAS_BODY: bool = true;

    /// Query parameters, unencoded. Only absent-free pairs are returned.
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

// =========================================================
// 鉴权
// =========================================================

impl ApiRequest for LoginParam {
    type Response = String;
    const PATH: &'static str = "/login";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// Fetch the logged-in user's name and the backend version.
#[derive(Debug, Serialize, Deserialize)]
pub struct UsernameRequest;

impl ApiRequest for UsernameRequest {
    type Response = UserInfo;
    const PATH: &'static str = "/username";
    const METHOD: HttpMethod = HttpMethod::Get;
    const HAS_BODY: bool = false;
}

// =========================================================
// 番剧
// =========================================================

/// List tracked bangumi.
///
/// The keyword is accepted but not sent: the backend has no text filter yet.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct BangumiListRequest {
    pub keyword: String,
}

impl ApiRequest for BangumiListRequest {
    type Response = BangumiListResult;
    const PATH: &'static str = "/bangumi/list";
    const METHOD: HttpMethod = HttpMethod::Get;
    const HAS_BODY: bool = false;
}

// =========================================================
// 索引器
// =========================================================

impl ApiRequest for IndexerSearch {
    type Response = Vec<IndexerInfo>;
    const PATH: &'static str = "/indexer/list";
    const METHOD: HttpMethod = HttpMethod::Get;
    const HAS_BODY: bool = false;

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(name) = &self.name {
            pairs.push(("name", name.clone()));
        }
        if let Some(category) = self.category {
            pairs.push(("category", category.as_str().to_string()));
        }
        pairs
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddIndexerRequest(pub IndexerInfo);

impl ApiRequest for AddIndexerRequest {
    type Response = ();
    const PATH: &'static str = "/indexer/add";
    const METHOD: HttpMethod = HttpMethod::Post;
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModifyIndexerRequest(pub IndexerInfo);

impl ApiRequest for ModifyIndexerRequest {
    type Response = ();
    const PATH: &'static str = "/indexer/modify";
    const METHOD: HttpMethod = HttpMethod::Put;
}

impl ApiRequest for DeleteTarget {
    type Response = ();
    const PATH: &'static str = "/indexer/delete";
    const METHOD: HttpMethod = HttpMethod::Delete;
}

/// Remove every indexer.
#[derive(Debug, Serialize, Deserialize)]
pub struct TruncateIndexerRequest;

impl ApiRequest for TruncateIndexerRequest {
    type Response = ();
    const PATH: &'static str = "/indexer/truncate";
    const METHOD: HttpMethod = HttpMethod::Delete;
    const HAS_BODY: bool = false;
}

// =========================================================
// 系统设置
// =========================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct SettingInfoRequest;

impl ApiRequest for SettingInfoRequest {
    type Response = Settings;
    const PATH: &'static str = "/setting/info";
    const METHOD: HttpMethod = HttpMethod::Get;
    const HAS_BODY: bool = false;
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModifySettingRequest(pub Settings);

impl ApiRequest for ModifySettingRequest {
    type Response = ();
    const PATH: &'static str = "/setting/modify";
    const METHOD: HttpMethod = HttpMethod::Put;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IndexerCategory;

    #[test]
    fn indexer_search_only_emits_present_params() {
        assert!(IndexerSearch::default().query_pairs().is_empty());

        let search = IndexerSearch {
            name: Some("mikan".into()),
            category: None,
        };
        assert_eq!(search.query_pairs(), vec![("name", "mikan".to_string())]);

        let search = IndexerSearch {
            name: Some("a b".into()),
            category: Some(IndexerCategory::Torznab),
        };
        assert_eq!(
            search.query_pairs(),
            vec![("name", "a b".to_string()), ("category", "torznab".to_string())]
        );
    }

    #[test]
    fn bangumi_keyword_is_not_forwarded() {
        let req = BangumiListRequest {
            keyword: "frieren".into(),
        };
        assert!(req.query_pairs().is_empty());
        assert!(!BangumiListRequest::HAS_BODY);
    }

    #[test]
    fn wrapped_bodies_serialize_as_the_inner_model() {
        let info = IndexerInfo {
            id: Some(3),
            name: "nyaa".into(),
            category: IndexerCategory::Rss,
            url: "https://nyaa.si/?page=rss".into(),
            enable: true,
        };
        let wrapped = serde_json::to_value(ModifyIndexerRequest(info.clone())).unwrap();
        assert_eq!(wrapped, serde_json::to_value(info).unwrap());
    }

    #[test]
    fn endpoint_table() {
        assert_eq!(
            (LoginParam::METHOD, LoginParam::PATH),
            (HttpMethod::Post, "/login")
        );
        assert_eq!(
            (DeleteTarget::METHOD, DeleteTarget::PATH),
            (HttpMethod::Delete, "/indexer/delete")
        );
        assert_eq!(
            (ModifySettingRequest::METHOD, ModifySettingRequest::PATH),
            (HttpMethod::Put, "/setting/modify")
        );
        assert_eq!(TruncateIndexerRequest::METHOD.as_str(), "DELETE");
    }
}
