//! 自定义提取器
//!
//! axum 自带的 `Path` / `Query` 提取失败时返回纯文本 400，
//! 这里换成统一的 JSON 错误响应或默认值

use axum::extract::{FromRequestParts, Path, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use std::convert::Infallible;
use tracing::debug;

use crate::error::AppError;
use crate::services::{parse_page, DEFAULT_PAGE};

/// 路径中的 id
///
/// 无法解析为非负整数时按 `NotFound` 处理。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath<T>(pub T);

impl<S, T> FromRequestParts<S> for IdPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(IdPath(id)),
            Err(rejection) => {
                debug!("路径参数无法解析: {}", rejection.body_text());
                Err(AppError::not_found(format!("路径 {}", parts.uri.path())))
            }
        }
    }
}

/// `?page=N`
///
/// 取第一个 `page` 参数；缺省、重复或非法时回落到第 1 页，从不拒绝请求。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(pub u32);

impl Default for Page {
    fn default() -> Self {
        Page(DEFAULT_PAGE)
    }
}

impl Page {
    /// 从查询字符串中解析页码
    pub fn from_query(parts: &Parts) -> Self {
        let Ok(Query(pairs)) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri) else {
            return Page::default();
        };
        let value = pairs
            .iter()
            .find(|(key, _)| key == "page")
            .map(|(_, value)| value.as_str());
        Page(parse_page(value))
    }
}

impl<S> FromRequestParts<S> for Page
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Page::from_query(parts))
    }
}
