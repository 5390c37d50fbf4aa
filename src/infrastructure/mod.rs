//! 基础设施层
//!
//! 持有题目与分类数据，只暴露简单的同步读写能力

pub mod memory_store;

pub use memory_store::{MemoryStore, TriviaStore};
