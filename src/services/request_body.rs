//! 请求体解析
//!
//! 区分"没有请求体"和"请求体不合法"两种错误

use crate::error::TriviaError;
use serde::de::DeserializeOwned;

/// 把 JSON 请求体解析为 `T`
///
/// 空请求体返回 `MissingBody`，其余解析失败（包括缺字段）返回 `InvalidRequest`。
pub fn parse_json_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, TriviaError> {
    if body.is_empty() {
        return Err(TriviaError::MissingBody);
    }
    serde_json::from_slice(body).map_err(|e| TriviaError::invalid_request(e.to_string()))
}
