//! 题库存储 - 基础设施层
//!
//! 唯一的数据 owner，负责 id 分配和分类引用完整性

use crate::error::StoreError;
use crate::models::{Category, CategoryId, NewQuestion, Question, QuestionId, SeedData};
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, warn};

/// 存储层能力
///
/// 每次调用都返回一份一致的快照，核心逻辑只在快照上计算。
pub trait TriviaStore: Send + Sync {
    /// 所有题目，按 id 升序
    fn list_questions(&self) -> Vec<Question>;

    /// 所有分类，按 id 升序
    fn list_categories(&self) -> Vec<Category>;

    fn get_question(&self, id: QuestionId) -> Option<Question>;

    fn get_category(&self, id: CategoryId) -> Option<Category>;

    /// 删除题目，返回是否真的删除了
    fn delete_question(&self, id: QuestionId) -> bool;

    /// 插入题目并分配 id
    fn insert_question(&self, new: NewQuestion) -> Result<Question, StoreError>;
}

#[derive(Debug)]
struct StoreState {
    next_id: QuestionId,
    questions: BTreeMap<QuestionId, Question>,
    categories: BTreeMap<CategoryId, Category>,
}

/// 内存题库
#[derive(Debug)]
pub struct MemoryStore {
    state: RwLock<StoreState>,
}

impl MemoryStore {
    /// 创建空题库
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState {
                next_id: 1,
                questions: BTreeMap::new(),
                categories: BTreeMap::new(),
            }),
        }
    }

    /// 用种子数据创建题库
    ///
    /// 重复的分类和引用未知分类的题目会被跳过并记录警告。
    pub fn from_seed(seed: SeedData) -> Self {
        let store = Self::new();

        for category in seed.categories {
            if let Err(e) = store.insert_category(category) {
                warn!("跳过种子分类: {}", e);
            }
        }

        for question in seed.questions {
            if let Err(e) = store.insert_question(question) {
                warn!("跳过种子题目: {}", e);
            }
        }

        store
    }

    /// 添加分类
    pub fn insert_category(&self, category: Category) -> Result<(), StoreError> {
        let mut state = self.write();
        if state.categories.contains_key(&category.id) {
            return Err(StoreError::DuplicateCategory {
                category: category.id,
            });
        }
        debug!("添加分类: {}", category);
        state.categories.insert(category.id, category);
        Ok(())
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TriviaStore for MemoryStore {
    fn list_questions(&self) -> Vec<Question> {
        self.read().questions.values().cloned().collect()
    }

    fn list_categories(&self) -> Vec<Category> {
        self.read().categories.values().cloned().collect()
    }

    fn get_question(&self, id: QuestionId) -> Option<Question> {
        self.read().questions.get(&id).cloned()
    }

    fn get_category(&self, id: CategoryId) -> Option<Category> {
        self.read().categories.get(&id).cloned()
    }

    fn delete_question(&self, id: QuestionId) -> bool {
        self.write().questions.remove(&id).is_some()
    }

    fn insert_question(&self, new: NewQuestion) -> Result<Question, StoreError> {
        let mut state = self.write();
        if !state.categories.contains_key(&new.category) {
            return Err(StoreError::UnknownCategory {
                category: new.category,
            });
        }

        let id = state.next_id;
        state.next_id += 1;

        let question = Question::from_new(id, new);
        state.questions.insert(id, question.clone());
        Ok(question)
    }
}
