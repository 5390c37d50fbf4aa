use thiserror::Error;

use crate::models::CategoryId;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 请求级别的业务错误（找不到、题目耗尽、请求不合法、缺少请求体）
    #[error("业务错误: {0}")]
    Trivia(#[from] TriviaError),
    /// 存储层拒绝了操作
    #[error("存储错误: {0}")]
    Store(#[from] StoreError),
}

/// 核心逻辑可以发出的四类错误
///
/// 每一类在边界处映射到各自的 HTTP 状态码，互相可区分。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriviaError {
    /// 期望至少一个结果却一个都没有
    #[error("未找到: {resource}")]
    NotFound { resource: String },
    /// 题库完全为空，连兜底都无题可出
    #[error("题库为空，无题可出")]
    Exhausted,
    /// 请求缺少必需字段或格式不正确
    #[error("请求不合法: {reason}")]
    InvalidRequest { reason: String },
    /// 请求没有携带任何内容
    #[error("缺少请求体")]
    MissingBody,
}

/// 存储层错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// 题目引用了不存在的分类
    #[error("分类 {category} 不存在")]
    UnknownCategory { category: CategoryId },
    /// 分类 id 重复
    #[error("分类 {category} 已存在")]
    DuplicateCategory { category: CategoryId },
}

// ========== 便捷构造函数 ==========

impl TriviaError {
    /// 创建未找到错误
    pub fn not_found(resource: impl Into<String>) -> Self {
        TriviaError::NotFound {
            resource: resource.into(),
        }
    }

    /// 创建请求不合法错误
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        TriviaError::InvalidRequest {
            reason: reason.into(),
        }
    }
}

impl AppError {
    /// 创建未找到错误
    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::Trivia(TriviaError::not_found(resource))
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
