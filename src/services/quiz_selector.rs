//! 测验出题 - 核心能力
//!
//! 在指定分类中随机挑一道没出过的题；候选池为空时从整个题库兜底

use crate::error::TriviaError;
use crate::models::{deserialize_id, deserialize_id_list, CategoryId, Question, QuestionId};
use crate::services::request_body::parse_json_body;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;
use std::collections::HashSet;

/// 前端"全部分类"使用的分类 id
pub const ALL_CATEGORIES: CategoryId = 0;

/// 一次出题请求
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizRequest {
    /// `None` 表示不限分类
    pub category: Option<CategoryId>,
    /// 本局已经出过的题目
    pub previous_questions: HashSet<QuestionId>,
}

#[derive(Debug, Deserialize)]
struct QuizRequestBody {
    #[serde(deserialize_with = "deserialize_id_list")]
    previous_questions: Vec<QuestionId>,
    quiz_category: QuizCategoryBody,
}

#[derive(Debug, Deserialize)]
struct QuizCategoryBody {
    #[serde(deserialize_with = "deserialize_id")]
    id: CategoryId,
}

impl QuizRequest {
    pub fn new(
        category: Option<CategoryId>,
        previous_questions: impl IntoIterator<Item = QuestionId>,
    ) -> Self {
        Self {
            category,
            previous_questions: previous_questions.into_iter().collect(),
        }
    }

    /// 从原始请求体解析
    ///
    /// - 空请求体：`MissingBody`
    /// - 缺少 `quiz_category.id` 或 `previous_questions`：`InvalidRequest`
    pub fn from_body(body: &[u8]) -> Result<Self, TriviaError> {
        let body: QuizRequestBody = parse_json_body(body)?;
        let category = match body.quiz_category.id {
            ALL_CATEGORIES => None,
            id => Some(id),
        };
        Ok(Self::new(category, body.previous_questions))
    }

    /// 题目是否在候选池中
    fn is_eligible(&self, question: &Question) -> bool {
        self.category.map_or(true, |c| question.category == c)
            && !self.previous_questions.contains(&question.id)
    }
}

/// 出题结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<'a> {
    pub question: &'a Question,
    /// 是否因候选池为空而从整个题库兜底
    pub fallback: bool,
}

/// 挑选下一道题
///
/// 候选池（分类匹配且未出过）非空时从中均匀随机抽取；
/// 否则忽略分类和排除条件，从整个题库均匀随机抽取；
/// 题库为空时返回 `Exhausted`。
pub fn next_question<'a, R: Rng + ?Sized>(
    request: &QuizRequest,
    all_questions: &'a [Question],
    rng: &mut R,
) -> Result<Selection<'a>, TriviaError> {
    let pool: Vec<&Question> = all_questions
        .iter()
        .filter(|q| request.is_eligible(q))
        .collect();

    if let Some(question) = pool.choose(rng).copied() {
        return Ok(Selection {
            question,
            fallback: false,
        });
    }

    all_questions
        .choose(rng)
        .map(|question| Selection {
            question,
            fallback: true,
        })
        .ok_or(TriviaError::Exhausted)
}
