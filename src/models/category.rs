use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::CategoryId;

/// 题目分类
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(rename = "type")]
    pub kind: String,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (#{})", self.kind, self.id)
    }
}

/// 分类 id → 名称，序列化为 `{"1": "Science", ...}`
pub type CategoryMap = BTreeMap<CategoryId, String>;

/// 把分类列表整理为 id → 名称的映射
pub fn category_map(categories: &[Category]) -> CategoryMap {
    categories
        .iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect()
}
