//! 运行日志
//!
//! 控制台输出走 tracing；运行日志文件只记录启动参数和每次转换的结果，
//! 便于批量转换后回头核对哪些文档没有产出页面

use crate::config::Config;
use anyhow::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// 创建运行日志文件，写入本次转换的输入输出目录
pub fn init_log_file(config: &Config) -> Result<()> {
    let rules = config.rules_file.as_deref().unwrap_or("内置规则");
    let log_header = format!(
        "题目转换日志 - {}\n输入目录: {}\n输出目录: {}\n识别规则: {}\n\n",
        timestamp(),
        config.input_folder,
        config.output_folder,
        rules
    );
    fs::write(&config.output_log_file, log_header)?;
    Ok(())
}

/// 向日志文件追加一行
pub fn append_log_line(log_file_path: &str, line: &str) -> Result<()> {
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;
    writeln!(file, "{}", line)?;
    Ok(())
}

/// 启动时打印当前生效的转换参数
pub fn log_startup(config: &Config) {
    info!("🚀 DOCX 题目 → HTML");
    info!("📂 {} → {}", config.input_folder, config.output_folder);
    if let Some(template) = &config.template_file {
        info!("🧩 页面模板: {}", template);
    }
    if config.emit_json {
        info!("🗂 同时导出 JSON");
    }
}

/// 打印本批要转换的文件名
///
/// # 参数
/// - `batch_num`: 批次编号（从 1 开始）
/// - `total_batches`: 批次总数
/// - `documents`: 本批文档
pub fn log_batch_start(batch_num: usize, total_batches: usize, documents: &[PathBuf]) {
    let names: Vec<String> = documents.iter().map(|p| display_name(p)).collect();
    info!(
        "📦 第 {}/{} 批: {}",
        batch_num,
        total_batches,
        names.join(", ")
    );
}

/// 打印最终统计
pub fn log_final_stats(summary: &str, config: &Config) {
    info!("📊 转换结束 ({}): {}", timestamp(), summary);
    info!("📄 页面已写入 {}，日志见 {}", config.output_folder, config.output_log_file);
}

/// 日志里显示的文件名
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大字符数
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
