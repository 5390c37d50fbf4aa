//! API 模块
//!
//! 负责 HTTP 路由、请求解析和响应封装，业务全部交给 `TriviaFlow`

pub mod extract;
pub mod handlers;
pub mod response;
pub mod routes;

pub use extract::{IdPath, Page};
pub use response::{ApiSuccess, ErrorResponse};
pub use routes::create_router;
