//! 响应封装
//!
//! 成功响应带 `"success": true`，错误响应统一为
//! `{"success": false, "error": <状态码>, "message": <描述>}`。
//! 错误类型到状态码的映射只在这里做一次。

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{AppError, StoreError, TriviaError};

/// 成功响应
#[derive(Debug, Clone, Serialize)]
pub struct ApiSuccess<T> {
    pub success: bool,
    #[serde(flatten)]
    pub body: T,
}

impl<T> ApiSuccess<T> {
    pub fn new(body: T) -> Self {
        Self {
            success: true,
            body,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// 错误响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl AppError {
    /// 对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Trivia(TriviaError::NotFound { .. }) => StatusCode::NOT_FOUND,
            AppError::Trivia(TriviaError::Exhausted) => StatusCode::NOT_FOUND,
            AppError::Trivia(TriviaError::InvalidRequest { .. }) => StatusCode::BAD_REQUEST,
            AppError::Trivia(TriviaError::MissingBody) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Store(StoreError::UnknownCategory { .. })
            | AppError::Store(StoreError::DuplicateCategory { .. }) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        }
    }

    /// 返回给客户端的描述
    pub fn client_message(&self) -> &'static str {
        match self {
            AppError::Trivia(TriviaError::NotFound { .. }) => "Not found",
            AppError::Trivia(TriviaError::Exhausted) => "No questions available",
            AppError::Trivia(TriviaError::InvalidRequest { .. }) => "Bad request",
            AppError::Trivia(TriviaError::MissingBody) => "Missing request body",
            AppError::Store(_) => "Unprocessable",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        match &self {
            AppError::Trivia(TriviaError::NotFound { .. }) => debug!("请求失败: {}", self),
            _ => warn!("请求失败 ({}): {}", status_code.as_u16(), self),
        }

        let error_response = ErrorResponse {
            success: false,
            error: status_code.as_u16(),
            message: self.client_message().to_string(),
        };

        (status_code, Json(error_response)).into_response()
    }
}
