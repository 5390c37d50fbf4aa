//! 路由定义

use axum::http::{header, Method};
use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::workflow::TriviaFlow;

/// 创建完整的路由，附带 CORS 和请求追踪
pub fn create_router(flow: TriviaFlow) -> Router {
    Router::new()
        .route("/categories", get(handlers::get_categories))
        .route("/categories/{category_id}", get(handlers::get_category))
        .route(
            "/categories/{category_id}/questions",
            get(handlers::get_category_questions),
        )
        .route(
            "/questions",
            get(handlers::get_questions).post(handlers::create_question),
        )
        .route("/questions/search", post(handlers::search_questions))
        .route(
            "/questions/{question_id}",
            delete(handlers::delete_question),
        )
        .route("/quizzes", post(handlers::play_quiz))
        .fallback(handlers::fallback)
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer())
        .with_state(flow)
}

/// 允许任意来源跨域访问
fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
