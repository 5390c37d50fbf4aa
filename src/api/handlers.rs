//! 请求处理函数
//!
//! 只做参数提取和请求体解析，随后交给 `TriviaFlow`

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use super::extract::{IdPath, Page};
use super::response::ApiSuccess;
use crate::error::{AppError, AppResult};
use crate::models::{CategoryId, NewQuestion, QuestionId};
use crate::services::{parse_json_body, QuizRequest};
use crate::workflow::{
    CategoriesPayload, CategoryPayload, CreatedPayload, DeletedPayload, QuestionListPayload,
    QuizPayload, TriviaFlow,
};

/// 搜索请求体
#[derive(Debug, Deserialize)]
pub struct SearchBody {
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
}

pub async fn get_categories(State(flow): State<TriviaFlow>) -> ApiSuccess<CategoriesPayload> {
    ApiSuccess::new(flow.categories())
}

pub async fn get_category(
    State(flow): State<TriviaFlow>,
    IdPath(category_id): IdPath<CategoryId>,
) -> AppResult<ApiSuccess<CategoryPayload>> {
    Ok(ApiSuccess::new(flow.category(category_id)?))
}

pub async fn get_questions(
    State(flow): State<TriviaFlow>,
    Page(page): Page,
) -> AppResult<ApiSuccess<QuestionListPayload>> {
    Ok(ApiSuccess::new(flow.list_questions(page)?))
}

pub async fn delete_question(
    State(flow): State<TriviaFlow>,
    IdPath(question_id): IdPath<QuestionId>,
    Page(page): Page,
) -> AppResult<ApiSuccess<DeletedPayload>> {
    Ok(ApiSuccess::new(
        flow.delete_question(question_id, page)?,
    ))
}

pub async fn create_question(
    State(flow): State<TriviaFlow>,
    Page(page): Page,
    body: Bytes,
) -> AppResult<ApiSuccess<CreatedPayload>> {
    let new: NewQuestion = parse_json_body(&body)?;
    Ok(ApiSuccess::new(flow.create_question(new, page)?))
}

/// 搜索为空时返回 204 和空响应体
pub async fn search_questions(
    State(flow): State<TriviaFlow>,
    Page(page): Page,
    body: Bytes,
) -> AppResult<Response> {
    let body: SearchBody = parse_json_body(&body)?;
    let response = match flow.search_questions(body.search_term.as_deref(), page) {
        Some(payload) => ApiSuccess::new(payload).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    };
    Ok(response)
}

pub async fn get_category_questions(
    State(flow): State<TriviaFlow>,
    IdPath(category_id): IdPath<CategoryId>,
    Page(page): Page,
) -> AppResult<ApiSuccess<QuestionListPayload>> {
    Ok(ApiSuccess::new(
        flow.questions_by_category(category_id, page)?,
    ))
}

pub async fn play_quiz(
    State(flow): State<TriviaFlow>,
    body: Bytes,
) -> AppResult<ApiSuccess<QuizPayload>> {
    let request = QuizRequest::from_body(&body)?;
    Ok(ApiSuccess::new(flow.next_quiz_question(&request)?))
}

pub async fn fallback() -> AppError {
    AppError::not_found("路由")
}
