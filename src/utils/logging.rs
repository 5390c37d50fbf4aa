use anyhow::Result;
/// 日志工具模块
///
/// 提供日志格式化和输出的辅助函数
use std::fs::{self, OpenOptions};
use std::io::Write;
use tracing::info;

/// 初始化日志文件
///
/// # 参数
/// - `log_file_path`: 日志文件路径
pub fn init_log_file(log_file_path: &str) -> Result<()> {
    let log_header = format!(
        "{}\n题库服务日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)?;
    Ok(())
}

/// 记录程序启动信息
///
/// # 参数
/// - `address`: 监听地址
/// - `questions`: 题目数
/// - `categories`: 分类数
pub fn log_startup(address: &str, questions: usize, categories: usize) {
    info!("{}", "=".repeat(60));
    info!("🚀 题库服务启动");
    info!("🌐 监听地址: http://{}", address);
    info!("📚 题目: {} 道, 分类: {} 个", questions, categories);
    info!("{}", "=".repeat(60));
}

/// 追加一行到日志文件
pub fn append_log_line(log_file_path: &str, line: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;
    writeln!(
        file,
        "[{}] {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        line
    )?;
    Ok(())
}

/// 记录停机信息
pub fn log_shutdown(log_file_path: &str) -> Result<()> {
    append_log_line(log_file_path, "服务已停止")?;
    info!("\n{}", "─".repeat(60));
    info!("🛑 服务已停止");
    info!("日志已保存至: {}", log_file_path);
    info!("{}", "─".repeat(60));
    Ok(())
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度（按字符计）
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("abcdefghijkl", 5), "abcde...");
        assert_eq!(truncate_text("中国的首都是哪里", 4), "中国的首...");
    }
}
