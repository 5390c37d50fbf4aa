//! # Trivia API
//!
//! 一个提供问答题目的 HTTP 服务：分类列表、题目分页 / 搜索 / 增删，
//! 以及每次随机出一道不重复题目的测验
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有题目与分类数据，只暴露同步读写能力
//! - `TriviaStore` - 存储能力接口，`MemoryStore` 为内存实现
//!
//! ### ② 核心能力层（Services）
//! - `services/` - 纯函数，不持有任何状态
//! - `paginator` - 固定每页 10 道题的分页
//! - `search_filter` - 不区分大小写的题干子串搜索
//! - `quiz_selector` - 测验随机出题，候选池为空时从整个题库兜底
//!
//! ### ③ 流程层（Workflow）
//! - `TriviaFlow` - 取快照 → 调用核心能力 → 组装返回数据
//!
//! ### ④ 接口层（API）
//! - `api/` - axum 路由、请求解析、错误到状态码的映射
//!
//! ## 模块结构

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult, StoreError, TriviaError};
pub use infrastructure::{MemoryStore, TriviaStore};
pub use models::{Category, NewQuestion, Question};
pub use workflow::TriviaFlow;
