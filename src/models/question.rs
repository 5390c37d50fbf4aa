use serde::{Deserialize, Serialize};

use super::{deserialize_id, CategoryId, QuestionId};
use crate::error::TriviaError;

/// 题目
///
/// 由存储层创建和销毁，核心逻辑只读取。序列化时题干字段名为 `question`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    #[serde(rename = "question")]
    pub text: String,
    pub answer: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub category: CategoryId,
    pub difficulty: i32,
}

impl Question {
    pub fn from_new(id: QuestionId, new: NewQuestion) -> Self {
        Self {
            id,
            text: new.text,
            answer: new.answer,
            category: new.category,
            difficulty: new.difficulty,
        }
    }
}

/// 尚未入库的题目（没有 id）
///
/// 同时用作创建题目接口的请求体和种子文件中的题目条目。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    #[serde(rename = "question")]
    pub text: String,
    pub answer: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub category: CategoryId,
    pub difficulty: i32,
}

impl NewQuestion {
    /// 校验题干非空
    pub fn validate(&self) -> Result<(), TriviaError> {
        if self.text.trim().is_empty() {
            return Err(TriviaError::invalid_request("question 字段不能为空"));
        }
        Ok(())
    }
}
