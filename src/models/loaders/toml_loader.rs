use crate::models::category::Category;
use crate::models::question::NewQuestion;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

/// 种子数据：启动时写入存储层的分类和题目
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub questions: Vec<NewQuestion>,
}

/// 解析 TOML 格式的种子数据
pub fn parse_seed(content: &str) -> Result<SeedData> {
    let seed: SeedData = toml::from_str(content).context("无法解析种子数据")?;
    Ok(seed)
}

/// 从 TOML 文件加载种子数据
///
/// 文件不存在时返回空数据，由调用方决定以空库启动。
pub async fn load_seed_file(seed_file_path: &Path) -> Result<SeedData> {
    if !fs::try_exists(seed_file_path).await.unwrap_or(false) {
        tracing::warn!("种子文件不存在: {}，以空库启动", seed_file_path.display());
        return Ok(SeedData::default());
    }

    let content = fs::read_to_string(seed_file_path)
        .await
        .with_context(|| format!("无法读取种子文件: {}", seed_file_path.display()))?;

    let seed = parse_seed(&content)
        .with_context(|| format!("无法解析种子文件: {}", seed_file_path.display()))?;

    tracing::info!(
        "成功加载 {} 个分类, {} 个题目",
        seed.categories.len(),
        seed.questions.len()
    );

    Ok(seed)
}
