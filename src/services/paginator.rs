//! 分页 - 核心能力
//!
//! 把有序集合切成固定大小的页，页码从 1 开始

/// 每页题目数
pub const PAGE_SIZE: usize = 10;

/// 默认页码
pub const DEFAULT_PAGE: u32 = 1;

/// 解析页码参数
///
/// 缺省、无法解析或为 0 时回落到第 1 页。
pub fn parse_page(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(DEFAULT_PAGE)
}

/// 取第 `page` 页
///
/// 返回 `items[(page-1)*PAGE_SIZE .. page*PAGE_SIZE]`，越界部分被截掉，
/// 页码超出范围时返回空切片，从不 panic。
pub fn paginate<T>(page: u32, items: &[T]) -> &[T] {
    let start = (page.saturating_sub(1) as usize)
        .saturating_mul(PAGE_SIZE)
        .min(items.len());
    let end = start.saturating_add(PAGE_SIZE).min(items.len());
    &items[start..end]
}
