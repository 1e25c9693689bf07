//! 错误类型
//!
//! - [`HttpError`]: 传输层错误（请求构建、网络、响应读取）
//! - [`ApiError`]: 接口层错误（HTTP 状态码、业务码、反序列化）
//! - [`AuthError`]: 登录错误，携带后端返回的业务码

use thiserror::Error;

/// HTTP 传输错误
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HttpError {
    /// 请求构建失败
    #[error("failed to build request: {0}")]
    RequestBuildFailed(String),
    /// 网络请求失败
    #[error("network error: {0}")]
    NetworkError(String),
    /// 响应读取失败
    #[error("failed to read response: {0}")]
    ResponseReadFailed(String),
}

/// 接口调用错误
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] HttpError),
    /// 非 2xx 的 HTTP 状态码
    #[error("api request error, status: {0}")]
    Status(u16),
    /// 业务码 401，token 失效
    #[error("login has expired, please log in again")]
    InvalidToken,
    /// 其他非 200 业务码
    #[error("api request error, code: {code}{}", message_suffix(.message))]
    Rejected { code: u16, message: Option<String> },
    /// 响应体无法解析
    #[error("invalid response payload: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

fn message_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(" ({m})"))
        .unwrap_or_default()
}

/// 登录错误
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    /// 后端拒绝登录，携带业务码（421 账号错误，422 密码错误）
    #[error("authentication rejected, code: {0}")]
    Rejected(u16),
    #[error(transparent)]
    Api(#[from] ApiError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_message_includes_backend_text() {
        let err = ApiError::Rejected {
            code: 500,
            message: Some("database locked".into()),
        };
        assert_eq!(err.to_string(), "api request error, code: 500 (database locked)");

        let err = ApiError::Rejected {
            code: 500,
            message: None,
        };
        assert_eq!(err.to_string(), "api request error, code: 500");
    }

    #[test]
    fn transport_errors_convert_through() {
        let err: ApiError = HttpError::NetworkError("offline".into()).into();
        assert_eq!(err.to_string(), "network error: offline");

        let err: AuthError = ApiError::InvalidToken.into();
        assert!(matches!(err, AuthError::Api(ApiError::InvalidToken)));
    }
}
