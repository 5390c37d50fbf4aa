use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceExt;
use trivia_api::api::{create_router, ErrorResponse};
use trivia_api::models::load_seed_file;
use trivia_api::{MemoryStore, TriviaFlow};

async fn create_test_app() -> Router {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/trivia.toml");
    let seed = load_seed_file(&path).await.unwrap();
    create_router(TriviaFlow::new(Arc::new(MemoryStore::from_seed(seed))))
}

fn empty_app() -> Router {
    create_router(TriviaFlow::new(Arc::new(MemoryStore::new())))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, value)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn assert_error(value: &Value, status: u16, message: &str) {
    let body: ErrorResponse = serde_json::from_value(value.clone()).unwrap();
    assert_eq!(
        body,
        ErrorResponse {
            success: false,
            error: status,
            message: message.to_string(),
        }
    );
}

#[tokio::test]
async fn test_get_paginated_questions() {
    let (status, data) = send(create_test_app().await, get("/questions")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["success"], true);
    assert_eq!(data["questions"].as_array().unwrap().len(), 10);
    assert_eq!(data["total_questions"], 19);
    assert_eq!(data["categories"]["1"], "Science");
    assert!(data["current_category"].is_null());
    assert_eq!(data["questions"][0]["id"], 1);
    assert!(data["questions"][0]["question"].is_string());
}

#[tokio::test]
async fn test_get_second_page() {
    let (status, data) = send(create_test_app().await, get("/questions?page=2")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["questions"].as_array().unwrap().len(), 9);
    assert_eq!(data["questions"][0]["id"], 11);
}

#[tokio::test]
async fn test_page_beyond_data_is_not_found() {
    let (status, data) = send(create_test_app().await, get("/questions?page=3")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&data, 404, "Not found");
}

#[tokio::test]
async fn test_invalid_page_falls_back_to_first() {
    let (status, data) = send(create_test_app().await, get("/questions?page=abc")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["questions"][0]["id"], 1);
}

#[tokio::test]
async fn test_duplicated_page_uses_first_value() {
    let (status, data) = send(create_test_app().await, get("/questions?page=1&page=2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["questions"][0]["id"], 1);

    let (status, data) = send(create_test_app().await, get("/questions?page=2&page=1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["questions"][0]["id"], 11);
}

#[tokio::test]
async fn test_bad_page_on_category_listing_falls_back() {
    let (status, data) = send(
        create_test_app().await,
        get("/categories/2/questions?page=x&page=3"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["questions"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_empty_store_has_no_questions_page() {
    let (status, _) = send(empty_app(), get("/questions")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_categories() {
    let (status, data) = send(create_test_app().await, get("/categories")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["success"], true);
    assert_eq!(data["categories"].as_object().unwrap().len(), 6);
    assert_eq!(data["categories"]["6"], "Sports");
}

#[tokio::test]
async fn test_get_category_detail() {
    let (status, data) = send(create_test_app().await, get("/categories/2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["category"], json!({"id": 2, "type": "Art"}));

    let (status, data) = send(create_test_app().await, get("/categories/99")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&data, 404, "Not found");
}

#[tokio::test]
async fn test_get_question_by_category() {
    let (status, data) = send(create_test_app().await, get("/categories/2/questions")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["success"], true);
    assert_eq!(data["total_questions"], 4);
    assert_eq!(data["questions"].as_array().unwrap().len(), 4);
    assert_eq!(data["current_category"]["type"], "Art");
}

#[tokio::test]
async fn test_get_question_by_unknown_category() {
    let (status, data) = send(create_test_app().await, get("/categories/99/questions")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&data, 404, "Not found");
}

#[tokio::test]
async fn test_get_question_search() {
    let (status, data) = send(
        create_test_app().await,
        post("/questions/search", r#"{"searchTerm": "title"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["success"], true);
    assert_eq!(data["total_questions"], 19);
    assert_eq!(data["questions"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let (_, lower) = send(
        create_test_app().await,
        post("/questions/search", r#"{"searchTerm": "world cup"}"#),
    )
    .await;
    let (_, upper) = send(
        create_test_app().await,
        post("/questions/search", r#"{"searchTerm": "WORLD CUP"}"#),
    )
    .await;

    assert_eq!(lower["questions"].as_array().unwrap().len(), 2);
    assert_eq!(lower["questions"], upper["questions"]);
}

#[tokio::test]
async fn test_search_without_term_returns_empty_body() {
    for body in [r#"{"searchTerm": ""}"#, "{}"] {
        let (status, data) = send(create_test_app().await, post("/questions/search", body)).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(data.is_null());
    }
}

#[tokio::test]
async fn test_search_without_body() {
    let (status, data) = send(create_test_app().await, post("/questions/search", Body::empty())).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_error(&data, 422, "Missing request body");
}

#[tokio::test]
async fn test_create_new_question() {
    let new_question = json!({
        "question": "Color of Milk",
        "answer": "White",
        "difficulty": 1,
        "category": 4
    });
    let (status, data) = send(
        create_test_app().await,
        post("/questions?page=2", new_question.to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["success"], true);
    assert_eq!(data["created"], 20);
    assert_eq!(data["total_questions"], 20);

    // 新题出现在最后一页的末尾
    let questions = data["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 10);
    assert_eq!(questions[9]["question"], "Color of Milk");
}

#[tokio::test]
async fn test_create_question_rejects_bad_input() {
    let cases = [
        (r#"{"question": "", "answer": "a", "difficulty": 1, "category": 1}"#, 400),
        (r#"{"answer": "a", "difficulty": 1, "category": 1}"#, 400),
        (r#"{"question": "q", "answer": "a", "difficulty": 1, "category": 42}"#, 422),
    ];

    for (body, expected) in cases {
        let (status, data) = send(create_test_app().await, post("/questions", body)).await;
        assert_eq!(status.as_u16(), expected, "body={body}");
        assert_eq!(data["success"], false);
    }

    let (status, data) = send(create_test_app().await, post("/questions", Body::empty())).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_error(&data, 422, "Missing request body");
}

#[tokio::test]
async fn test_delete_question() {
    let app = create_test_app().await;

    let (status, data) = send(app.clone(), delete("/questions/4")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["success"], true);
    assert_eq!(data["deleted"], 4);
    assert_eq!(data["total_questions"], 18);
    assert!(data["questions"]
        .as_array()
        .unwrap()
        .iter()
        .all(|q| q["id"] != 4));

    let (status, data) = send(app, delete("/questions/4")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&data, 404, "Not found");
}

#[tokio::test]
async fn test_non_integer_ids_are_not_found() {
    let cases = [
        delete("/questions/abc"),
        delete("/questions/-4"),
        get("/categories/-1/questions"),
        get("/categories/art"),
    ];

    for request in cases {
        let uri = request.uri().to_string();
        let (status, data) = send(create_test_app().await, request).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "uri={uri}");
        assert_error(&data, 404, "Not found");
    }
}

#[tokio::test]
async fn test_quizzes() {
    let body = json!({
        "previous_questions": [20],
        "quiz_category": {"id": "5", "type": "Entertainment"}
    });
    let (status, data) = send(create_test_app().await, post("/quizzes", body.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["success"], true);
    assert_eq!(data["question"]["category"], 5);
}

#[tokio::test]
async fn test_quizzes_fall_back_when_category_used_up() {
    let body = json!({
        "previous_questions": [16, 17, 18],
        "quiz_category": {"id": 1, "type": "Science"}
    });
    let (status, data) = send(create_test_app().await, post("/quizzes", body.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert!(data["question"]["id"].is_u64());
}

#[tokio::test]
async fn test_quizzes_previous_questions_as_strings() {
    let body = json!({
        "previous_questions": ["9", "10"],
        "quiz_category": {"id": 3, "type": "Geography"}
    });
    let (status, data) = send(create_test_app().await, post("/quizzes", body.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["question"]["id"], 11);
}

#[tokio::test]
async fn test_quizzes_all_categories() {
    let previous: Vec<u64> = (1..=18).collect();
    let body = json!({
        "previous_questions": previous,
        "quiz_category": {"id": 0, "type": "click"}
    });
    let (status, data) = send(create_test_app().await, post("/quizzes", body.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["question"]["id"], 19);
}

#[tokio::test]
async fn test_quizzes_request_errors() {
    let (status, data) = send(create_test_app().await, post("/quizzes", Body::empty())).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_error(&data, 422, "Missing request body");

    let (status, data) = send(
        create_test_app().await,
        post("/quizzes", r#"{"quiz_category": {"id": 1}}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&data, 400, "Bad request");
}

#[tokio::test]
async fn test_quizzes_on_empty_store() {
    let body = r#"{"previous_questions": [], "quiz_category": {"id": 1}}"#;
    let (status, data) = send(empty_app(), post("/quizzes", body)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&data, 404, "No questions available");
}

#[tokio::test]
async fn test_cors_headers() {
    let request = Request::builder()
        .uri("/categories")
        .header("origin", "http://localhost:3000")
        .body(Body::empty())
        .unwrap();
    let response = create_test_app().await.oneshot(request).await.unwrap();

    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_unknown_route() {
    let (status, data) = send(create_test_app().await, get("/nope")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(&data, 404, "Not found");
}
