//! 后端接口客户端
//!
//! 每个端点对应一个 [`ApiRequest`] 类型，[`MikanApi::call`] 统一负责
//! 拼接地址、附加鉴权头、编码参数以及拆开 `{code, message, data}` 信封。

use leptos::logging::warn;
use mikan_shared::protocol::{
    AddIndexerRequest, ApiRequest, BangumiListRequest, ModifyIndexerRequest, ModifySettingRequest,
    SettingInfoRequest, TruncateIndexerRequest, UsernameRequest,
};
use mikan_shared::{
    BEARER_PREFIX, BangumiListResult, CODE_INVALID_TOKEN, CODE_OK, DeleteTarget,
    HEADER_AUTHORIZATION, IndexerInfo, IndexerSearch, LoginParam, ResultResp, Settings, UserInfo,
};

use crate::error::{ApiError, ApiResult};
use crate::web::{FetchClient, HttpClient, HttpRequest, HttpResponse};

#[derive(Clone, Debug)]
pub struct MikanApi<C: HttpClient = FetchClient> {
    client: C,
    base_url: String,
    token: Option<String>,
}

impl<C: HttpClient> MikanApi<C> {
    pub fn new(client: C, base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            token: None,
        }
    }

    /// 附带 token，空字符串视为未登录
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = (!token.is_empty()).then(|| token.to_string());
        self
    }

    fn url<R: ApiRequest>(&self, req: &R) -> String {
        let query: Vec<String> = req
            .query_pairs()
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(&v)))
            .collect();
        if query.is_empty() {
            format!("{}{}", self.base_url, R::PATH)
        } else {
            format!("{}{}?{}", self.base_url, R::PATH, query.join("&"))
        }
    }

    fn build<R: ApiRequest>(&self, req: &R) -> ApiResult<HttpRequest> {
        let mut request = HttpRequest::new(self.url(req), R::METHOD);
        if let Some(token) = &self.token {
            request = request.with_header(HEADER_AUTHORIZATION, &format!("{BEARER_PREFIX}{token}"));
        }
        if R::HAS_BODY {
            let body = serde_json::to_string(req).map_err(|e| ApiError::Decode(e.to_string()))?;
            request = request.with_json_body(body);
        }
        Ok(request)
    }

    async fn send<R: ApiRequest>(&self, req: &R) -> ApiResult<HttpResponse> {
        let request = self.build(req)?;
        let response = self.client.send(request).await.map_err(|e| {
            warn!("[Api] {} {} failed: {}", R::METHOD.as_str(), R::PATH, e);
            ApiError::from(e)
        })?;
        if !response.ok() {
            warn!("[Api] {} {} returned HTTP {}", R::METHOD.as_str(), R::PATH, response.status);
            return Err(ApiError::Status(response.status));
        }
        Ok(response)
    }

    /// 返回原始信封，不检查业务码
    pub async fn call_raw<R: ApiRequest>(&self, req: &R) -> ApiResult<ResultResp<R::Response>> {
        self.send(req).await?.json()
    }

    /// 拆开信封，只返回 `data`
    pub async fn call<R: ApiRequest>(&self, req: &R) -> ApiResult<R::Response> {
        let envelope: ResultResp<serde_json::Value> = self.send(req).await?.json()?;
        match envelope.code {
            CODE_OK => serde_json::from_value(envelope.data.unwrap_or_default())
                .map_err(|e| ApiError::Decode(e.to_string())),
            CODE_INVALID_TOKEN => Err(ApiError::InvalidToken),
            code => {
                warn!("[Api] {} rejected with code {}", R::PATH, code);
                Err(ApiError::Rejected {
                    code,
                    message: envelope.message,
                })
            }
        }
    }

    // =========================================================
    // 鉴权
    // =========================================================

    pub async fn login(&self, param: &LoginParam) -> ApiResult<ResultResp<String>> {
        self.call_raw(param).await
    }

    pub async fn username(&self) -> ApiResult<UserInfo> {
        self.call(&UsernameRequest).await
    }

    // =========================================================
    // 番剧
    // =========================================================

    /// 获取番剧列表
    ///
    /// 后端暂不支持关键字过滤，`keyword` 不会被发送。
    pub async fn get_bangumi_list(&self, keyword: &str) -> ApiResult<BangumiListResult> {
        self.call(&BangumiListRequest {
            keyword: keyword.to_string(),
        })
        .await
    }

    // =========================================================
    // 索引器
    // =========================================================

    pub async fn get_indexer_list(&self, search: &IndexerSearch) -> ApiResult<Vec<IndexerInfo>> {
        self.call(search).await
    }

    pub async fn add_indexer(&self, info: IndexerInfo) -> ApiResult<()> {
        self.call(&AddIndexerRequest(info)).await
    }

    pub async fn modify_indexer(&self, info: IndexerInfo) -> ApiResult<()> {
        self.call(&ModifyIndexerRequest(info)).await
    }

    pub async fn delete_indexer(&self, id: u32) -> ApiResult<()> {
        self.call(&DeleteTarget { id }).await
    }

    pub async fn truncate_indexer(&self) -> ApiResult<()> {
        self.call(&TruncateIndexerRequest).await
    }

    // =========================================================
    // 系统设置
    // =========================================================

    pub async fn get_setting_info(&self) -> ApiResult<Settings> {
        self.call(&SettingInfoRequest).await
    }

    pub async fn modify_setting(&self, settings: Settings) -> ApiResult<()> {
        self.call(&ModifySettingRequest(settings)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HttpError;
    use crate::web::mock::MockHttpClient;
    use mikan_shared::IndexerCategory;
    use mikan_shared::protocol::HttpMethod;
    use serde_json::json;

    fn api(client: &MockHttpClient) -> MikanApi<MockHttpClient> {
        MikanApi::new(client.clone(), "/api/")
    }

    #[tokio::test]
    async fn unwraps_successful_envelope() {
        let client = MockHttpClient::new();
        client.respond_json(200, json!({"code": 200, "data": {"username": "admin", "version": "1.2.0"}}));

        let info = api(&client).with_token("T").username().await.unwrap();
        assert_eq!(info.username, "admin");
        assert_eq!(info.version, "1.2.0");

        let requests = client.requests();
        assert_eq!(requests[0].url, "/api/username");
        assert_eq!(requests[0].method, HttpMethod::Get);
        assert_eq!(requests[0].header("authorization"), Some("Bearer T"));
        assert_eq!(requests[0].body, None);
    }

    #[tokio::test]
    async fn authorization_header_only_with_token() {
        let client = MockHttpClient::new();
        client.respond_json(200, json!({"code": 200}));

        api(&client).with_token("").truncate_indexer().await.unwrap();
        assert_eq!(client.requests()[0].header(HEADER_AUTHORIZATION), None);
    }

    #[tokio::test]
    async fn maps_business_codes() {
        let client = MockHttpClient::new();
        client
            .respond_json(200, json!({"code": 401}))
            .respond_json(200, json!({"code": 500, "message": "locked"}));

        let api = api(&client);
        assert_eq!(api.username().await, Err(ApiError::InvalidToken));
        assert_eq!(
            api.get_setting_info().await,
            Err(ApiError::Rejected {
                code: 500,
                message: Some("locked".into())
            })
        );
    }

    #[tokio::test]
    async fn maps_http_status_and_transport_errors() {
        let client = MockHttpClient::new();
        client
            .respond_text(502, "Bad Gateway")
            .fail(HttpError::NetworkError("offline".into()))
            .respond_text(200, "<html>");

        let api = api(&client);
        assert_eq!(api.truncate_indexer().await, Err(ApiError::Status(502)));
        assert_eq!(
            api.truncate_indexer().await,
            Err(ApiError::Transport(HttpError::NetworkError("offline".into())))
        );
        assert!(matches!(api.truncate_indexer().await, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn login_returns_raw_envelope() {
        let client = MockHttpClient::new();
        client.respond_json(200, json!({"code": 422}));

        let param = LoginParam {
            account: "a".into(),
            password: "b".into(),
        };
        let resp = api(&client).login(&param).await.unwrap();
        assert_eq!(resp.code, 422);
        assert_eq!(resp.data, None);

        let request = &client.requests()[0];
        assert_eq!(request.url, "/api/login");
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(request.body.as_deref(), Some(r#"{"account":"a","password":"b"}"#));
    }

    #[tokio::test]
    async fn indexer_search_encodes_present_parameters_only() {
        let client = MockHttpClient::new();
        client
            .respond_json(200, json!({"code": 200, "data": []}))
            .respond_json(
                200,
                json!({"code": 200, "data": [
                    {"id": 1, "name": "mikan", "category": "rss", "url": "https://example.org/rss", "enable": true}
                ]}),
            );

        let api = api(&client);
        api.get_indexer_list(&IndexerSearch::default()).await.unwrap();
        let list = api
            .get_indexer_list(&IndexerSearch {
                name: Some("a b&c".into()),
                category: Some(IndexerCategory::Torznab),
            })
            .await
            .unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].category, IndexerCategory::Rss);

        let requests = client.requests();
        assert_eq!(requests[0].url, "/api/indexer/list");
        assert_eq!(requests[1].url, "/api/indexer/list?name=a%20b%26c&category=torznab");
        assert!(requests.iter().all(|r| r.body.is_none()));
    }

    #[tokio::test]
    async fn bangumi_keyword_is_not_sent() {
        let client = MockHttpClient::new();
        client.respond_json(200, json!({"code": 200, "data": {"list": []}}));

        let result = api(&client).get_bangumi_list("frieren").await.unwrap();
        assert!(result.list.is_empty());
        assert_eq!(client.requests()[0].url, "/api/bangumi/list");
    }

    #[tokio::test]
    async fn mutations_send_json_bodies() {
        let client = MockHttpClient::new();
        for _ in 0..3 {
            client.respond_json(200, json!({"code": 200}));
        }

        let api = api(&client);
        api.delete_indexer(7).await.unwrap();
        api.modify_indexer(IndexerInfo {
            id: Some(3),
            name: "nyaa".into(),
            category: IndexerCategory::Torznab,
            url: "https://example.org/torznab".into(),
            enable: false,
        })
        .await
        .unwrap();
        api.modify_setting(Settings {
            auth_intranet: Some(true),
            ..Settings::default()
        })
        .await
        .unwrap();

        let requests = client.requests();
        assert_eq!(requests[0].method, HttpMethod::Delete);
        assert_eq!(requests[0].body.as_deref(), Some(r#"{"id":7}"#));
        assert_eq!(requests[1].url, "/api/indexer/modify");
        assert_eq!(requests[1].method, HttpMethod::Put);
        let body: serde_json::Value =
            serde_json::from_str(requests[1].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["id"], 3);
        assert_eq!(body["category"], "torznab");
        assert_eq!(requests[2].url, "/api/setting/modify");
        assert_eq!(requests[2].body.as_deref(), Some(r#"{"auth_intranet":true}"#));
    }
}
