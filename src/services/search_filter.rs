//! 题干搜索 - 核心能力
//!
//! 只匹配题干，不看答案和分类

use crate::models::Question;

/// 规整搜索词
///
/// 空字符串和缺省都视为"没有搜索"，返回 `None`。
pub fn normalize_term(term: Option<&str>) -> Option<&str> {
    term.filter(|t| !t.is_empty())
}

/// 返回题干包含 `term`（不区分大小写）的题目，保持输入顺序
pub fn search<'a>(term: &str, items: &'a [Question]) -> Vec<&'a Question> {
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|q| q.text.to_lowercase().contains(&needle))
        .collect()
}
