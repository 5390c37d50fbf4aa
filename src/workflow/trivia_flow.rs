//! 结果组装 - 流程层
//!
//! 核心职责：从存储层取一份快照，交给分页 / 搜索 / 出题能力处理，
//! 再组装成接口返回的数据结构
//!
//! 不持有任何数据，只依赖 `TriviaStore`

use rand::thread_rng;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::{AppResult, TriviaError};
use crate::infrastructure::TriviaStore;
use crate::models::{category_map, Category, CategoryId, CategoryMap, NewQuestion, Question, QuestionId};
use crate::services::{next_question, normalize_term, paginate, search, QuizRequest};
use crate::utils::logging::truncate_text;

/// 分类列表
#[derive(Debug, Clone, Serialize)]
pub struct CategoriesPayload {
    pub categories: CategoryMap,
}

/// 单个分类
#[derive(Debug, Clone, Serialize)]
pub struct CategoryPayload {
    pub category: Category,
}

/// 分页后的题目列表
///
/// `total_questions` 是分页前集合的大小。
#[derive(Debug, Clone, Serialize)]
pub struct QuestionListPayload {
    pub questions: Vec<Question>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<CategoryMap>,
    pub total_questions: usize,
    pub current_category: Option<Category>,
}

/// 删除结果，附带删除后的题目列表
#[derive(Debug, Clone, Serialize)]
pub struct DeletedPayload {
    pub deleted: QuestionId,
    #[serde(flatten)]
    pub listing: QuestionListPayload,
}

/// 创建结果
#[derive(Debug, Clone, Serialize)]
pub struct CreatedPayload {
    pub created: QuestionId,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// 测验出的一道题
#[derive(Debug, Clone, Serialize)]
pub struct QuizPayload {
    pub question: Question,
}

/// 题库流程
#[derive(Clone)]
pub struct TriviaFlow {
    store: Arc<dyn TriviaStore>,
}

impl TriviaFlow {
    /// 创建新的题库流程
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// 所有分类
    pub fn categories(&self) -> CategoriesPayload {
        CategoriesPayload {
            categories: category_map(&self.store.list_categories()),
        }
    }

    /// 分类详情
    pub fn category(&self, id: CategoryId) -> AppResult<CategoryPayload> {
        let category = self
            .store
            .get_category(id)
            .ok_or_else(|| TriviaError::not_found(format!("分类 {}", id)))?;
        Ok(CategoryPayload { category })
    }

    /// 第 `page` 页题目
    ///
    /// 页面为空（没有题目或页码越界）时返回 `NotFound`。
    pub fn list_questions(&self, page: u32) -> AppResult<QuestionListPayload> {
        let listing = self.listing(page);
        if listing.questions.is_empty() {
            return Err(TriviaError::not_found(format!("第 {} 页题目", page)).into());
        }
        debug!("📄 第 {} 页: {} 道题", page, listing.questions.len());
        Ok(listing)
    }

    /// 删除题目并返回删除后的第 `page` 页
    pub fn delete_question(&self, id: QuestionId, page: u32) -> AppResult<DeletedPayload> {
        if !self.store.delete_question(id) {
            return Err(TriviaError::not_found(format!("题目 {}", id)).into());
        }
        info!("🗑️ 已删除题目 {}", id);

        Ok(DeletedPayload {
            deleted: id,
            listing: self.listing(page),
        })
    }

    /// 创建题目并返回创建后的第 `page` 页
    pub fn create_question(&self, new: NewQuestion, page: u32) -> AppResult<CreatedPayload> {
        new.validate()?;
        let question = self.store.insert_question(new)?;
        info!(
            "✓ 已创建题目 {}: {}",
            question.id,
            truncate_text(&question.text, 40)
        );

        let all = self.store.list_questions();
        Ok(CreatedPayload {
            created: question.id,
            questions: paginate(page, &all).to_vec(),
            total_questions: all.len(),
        })
    }

    /// 按题干搜索
    ///
    /// 搜索词为空或缺省时不做搜索，返回 `None`。
    /// `total_questions` 是整个题库的题目数。
    pub fn search_questions(&self, term: Option<&str>, page: u32) -> Option<QuestionListPayload> {
        let Some(term) = normalize_term(term) else {
            warn!("⚠️ 搜索词为空，不执行搜索");
            return None;
        };

        let all = self.store.list_questions();
        let found = search(term, &all);
        debug!("🔍 搜索 \"{}\": 命中 {} 道题", term, found.len());

        Some(QuestionListPayload {
            questions: paginate(page, &found).iter().map(|q| (*q).clone()).collect(),
            categories: None,
            total_questions: all.len(),
            current_category: None,
        })
    }

    /// 某个分类下的题目
    pub fn questions_by_category(
        &self,
        id: CategoryId,
        page: u32,
    ) -> AppResult<QuestionListPayload> {
        let category = self
            .store
            .get_category(id)
            .ok_or_else(|| TriviaError::not_found(format!("分类 {}", id)))?;

        let selection: Vec<Question> = self
            .store
            .list_questions()
            .into_iter()
            .filter(|q| q.category == id)
            .collect();

        Ok(QuestionListPayload {
            questions: paginate(page, &selection).to_vec(),
            categories: None,
            total_questions: selection.len(),
            current_category: Some(category),
        })
    }

    /// 测验的下一道题
    pub fn next_quiz_question(&self, request: &QuizRequest) -> AppResult<QuizPayload> {
        let all = self.store.list_questions();
        let selection = next_question(request, &all, &mut thread_rng())?;

        if selection.fallback {
            warn!(
                "⚠️ 分类 {:?} 的候选题已用完 (已出 {} 道)，从整个题库兜底",
                request.category,
                request.previous_questions.len()
            );
        }
        debug!(
            "🎯 出题 {}: {}",
            selection.question.id,
            truncate_text(&selection.question.text, 40)
        );

        Ok(QuizPayload {
            question: selection.question.clone(),
        })
    }

    /// 全部题目的第 `page` 页，附带分类
    fn listing(&self, page: u32) -> QuestionListPayload {
        let all = self.store.list_questions();
        QuestionListPayload {
            questions: paginate(page, &all).to_vec(),
            categories: Some(category_map(&self.store.list_categories())),
            total_questions: all.len(),
            current_category: None,
        }
    }
}
