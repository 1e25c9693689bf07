use super::*;
use crate::error::{ApiError, HttpError};
use crate::web::mock::MockHttpClient;
use serde_json::json;

fn param() -> LoginParam {
    LoginParam {
        account: "a".into(),
        password: "b".into(),
    }
}

fn setup() -> (UserStore, MockHttpClient, MikanApi<MockHttpClient>) {
    let client = MockHttpClient::new();
    let api = MikanApi::new(client.clone(), "/api");
    (UserStore::in_memory(), client, api)
}

#[tokio::test]
async fn login_success_stores_token() {
    let (store, client, api) = setup();
    client.respond_json(200, json!({"code": 200, "data": "T"}));

    store.login(&api, &param()).await.unwrap();
    assert_eq!(store.token(), "T");
}

#[tokio::test]
async fn login_rejection_keeps_token_empty() {
    let (store, client, api) = setup();
    client
        .respond_json(200, json!({"code": 401}))
        .respond_json(200, json!({"code": 421}))
        .respond_json(200, json!({"code": 422}));

    assert_eq!(store.login(&api, &param()).await, Err(AuthError::Rejected(401)));
    assert_eq!(store.login(&api, &param()).await, Err(AuthError::Rejected(421)));
    assert_eq!(store.login(&api, &param()).await, Err(AuthError::Rejected(422)));
    assert_eq!(store.token(), "");
}

#[tokio::test]
async fn login_without_token_is_an_error() {
    let (store, client, api) = setup();
    client
        .respond_json(200, json!({"code": 200}))
        .respond_json(200, json!({"code": 200, "data": ""}));

    for _ in 0..2 {
        let err = store.login(&api, &param()).await.unwrap_err();
        assert!(matches!(err, AuthError::Api(ApiError::Decode(_))), "{err:?}");
    }
    assert_eq!(store.token(), "");
}

#[tokio::test]
async fn login_transport_failure_propagates() {
    let (store, client, api) = setup();
    client.fail(HttpError::NetworkError("offline".into()));

    let err = store.login(&api, &param()).await.unwrap_err();
    assert_eq!(
        err,
        AuthError::Api(ApiError::Transport(HttpError::NetworkError("offline".into())))
    );
}

#[tokio::test]
async fn user_info_fills_profile() {
    let (store, client, api) = setup();
    client.respond_json(200, json!({"code": 200, "data": {"username": "admin", "version": "0.3.1"}}));

    store.get_user_info(&api).await.unwrap();
    let session = store.snapshot();
    assert_eq!(session.user_name, "admin");
    assert_eq!(session.version, "0.3.1");
    assert_eq!(session.roles, vec!["all"]);
}

#[tokio::test]
async fn user_info_failure_leaves_session_untouched() {
    let (store, client, api) = setup();
    client.respond_json(200, json!({"code": 401}));

    assert_eq!(store.get_user_info(&api).await, Err(ApiError::InvalidToken));
    assert_eq!(store.snapshot(), Session::default());
}

#[tokio::test]
async fn logout_resets_everything_and_is_idempotent() {
    let (store, client, api) = setup();
    client
        .respond_json(200, json!({"code": 200, "data": "T"}))
        .respond_json(200, json!({"code": 200, "data": {"username": "admin", "version": "1"}}));
    store.login(&api, &param()).await.unwrap();
    store.get_user_info(&api).await.unwrap();

    store.logout();
    assert_eq!(store.snapshot(), Session::default());
    store.logout();
    assert_eq!(store.snapshot(), Session::default());
    assert_eq!(client.requests().len(), 2);
}

#[test]
fn persisted_form_is_token_only() {
    let session = Session {
        token: "eyJhbGciOi.J9\"x".into(),
        user_name: "admin".into(),
        roles: vec!["all".into()],
        version: "1".into(),
    };
    let raw = serde_json::to_string(&session.to_persisted()).unwrap();
    assert_eq!(raw, r#"{"token":"eyJhbGciOi.J9\"x"}"#);

    let restored = Session::from_persisted(serde_json::from_str(&raw).unwrap());
    assert_eq!(restored.token, session.token);
    assert_eq!(restored.user_name, "");
}
