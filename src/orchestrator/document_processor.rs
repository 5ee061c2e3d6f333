//! 单个文档处理器 - 编排层
//!
//! ## 职责
//!
//! 1. **读取文件**：把 DOCX 文件读入内存
//! 2. **流程调度**：交给 `ConversionFlow` 完成转换
//! 3. **写出结果**：HTML 页面（以及可选的 JSON）写到输出目录
//! 4. **结果汇报**：返回 `DocumentOutcome` 供批处理统计

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::record::{ConversionResult, QuizReport};
use crate::services::{markdown_preview, PageTemplate};
use crate::utils::logging::truncate_text;
use crate::workflow::ConversionFlow;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// 单个文档的处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentOutcome {
    /// 转换成功
    Converted { questions: usize, output: PathBuf },
    /// 没有识别到题目
    NoContent,
    /// 文档无法读取
    Failed { reason: String },
}

impl std::fmt::Display for DocumentOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentOutcome::Converted { questions, output } => {
                write!(f, "{} 道题目 → {}", questions, output.display())
            }
            DocumentOutcome::NoContent => write!(f, "无题目"),
            DocumentOutcome::Failed { reason } => write!(f, "失败: {}", reason),
        }
    }
}

/// 处理单个文档
///
/// # 参数
/// - `flow`: 转换流程
/// - `template`: 页面模板
/// - `input`: DOCX 文件路径
/// - `doc_index`: 文档索引（用于日志）
/// - `config`: 配置
///
/// # 返回
/// 返回处理结果；只有写文件失败才返回错误
pub fn process_document(
    flow: &ConversionFlow,
    template: &PageTemplate,
    input: &Path,
    doc_index: usize,
    config: &Config,
) -> AppResult<DocumentOutcome> {
    log_document_start(doc_index, input);

    let bytes = match fs::read(input) {
        Ok(bytes) => bytes,
        Err(e) => {
            let err = AppError::file_read_failed(input.display().to_string(), e);
            error!("[文档 {}] ❌ {}", doc_index, err);
            return Ok(DocumentOutcome::Failed {
                reason: err.to_string(),
            });
        }
    };

    match flow.run(&bytes) {
        ConversionResult::Success(report) => {
            let output = write_outputs(&report, template, input, doc_index, config)?;
            log_document_complete(doc_index, &report, &output, config);
            Ok(DocumentOutcome::Converted {
                questions: report.records.len(),
                output,
            })
        }
        ConversionResult::NoContent => {
            warn!(
                "[文档 {}] ⚠️ 没有提取到题目，请确认文档符合题目格式",
                doc_index
            );
            Ok(DocumentOutcome::NoContent)
        }
        ConversionResult::ReadFailure(reason) => {
            error!("[文档 {}] ❌ 文档解析失败: {}", doc_index, reason);
            Ok(DocumentOutcome::Failed { reason })
        }
    }
}

/// 写出 HTML（和可选的 JSON），返回 HTML 路径
fn write_outputs(
    report: &QuizReport,
    template: &PageTemplate,
    input: &Path,
    doc_index: usize,
    config: &Config,
) -> AppResult<PathBuf> {
    let output_dir = Path::new(&config.output_folder);
    fs::create_dir_all(output_dir)
        .map_err(|e| AppError::file_write_failed(output_dir.display().to_string(), e))?;

    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| format!("quiz_{}", doc_index));

    let html_path = output_dir.join(format!("{}.html", stem));
    let page = template.render(&report.fragment);
    fs::write(&html_path, page)
        .map_err(|e| AppError::file_write_failed(html_path.display().to_string(), e))?;

    if config.emit_json {
        let json_path = output_dir.join(format!("{}.json", stem));
        let json = serde_json::to_string_pretty(&report.records).map_err(|e| {
            AppError::file_write_failed(json_path.display().to_string(), e.into())
        })?;
        fs::write(&json_path, json)
            .map_err(|e| AppError::file_write_failed(json_path.display().to_string(), e))?;
        info!("[文档 {}] ✓ JSON 已导出: {}", doc_index, json_path.display());
    }

    Ok(html_path)
}

// ========== 日志辅助函数 ==========

fn log_document_start(doc_index: usize, input: &Path) {
    info!("[文档 {}] 开始处理", doc_index);
    info!(
        "[文档 {}] 文件: {}",
        doc_index,
        input.file_name().unwrap_or_default().to_string_lossy()
    );
}

fn log_document_complete(doc_index: usize, report: &QuizReport, output: &Path, config: &Config) {
    info!(
        "[文档 {}] ✅ 转换完成: {} 道题目 → {}",
        doc_index,
        report.records.len(),
        output.display()
    );

    let missing_answers = report.records.iter().filter(|r| !r.has_answer()).count();
    if missing_answers > 0 {
        warn!("[文档 {}] ⚠️ {} 道题目没有答案", doc_index, missing_answers);
    }

    if config.verbose_logging {
        for record in &report.records {
            info!("[文档 {}]   {}", doc_index, record);
        }
        info!(
            "[文档 {}] 预览:\n{}",
            doc_index,
            truncate_text(&markdown_preview(&report.fragment), 600)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::rules::QuizRules;

    fn test_config(output: &Path, emit_json: bool) -> Config {
        Config {
            output_folder: output.to_string_lossy().to_string(),
            emit_json,
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_file_is_failed_outcome() {
        let dir = tempfile::TempDir::new().unwrap();
        let flow = ConversionFlow::new(&QuizRules::default()).unwrap();
        let template = PageTemplate::new("T");

        let outcome = process_document(
            &flow,
            &template,
            &dir.path().join("missing.docx"),
            1,
            &test_config(dir.path(), false),
        )
        .unwrap();
        match outcome {
            DocumentOutcome::Failed { reason } => {
                assert!(reason.contains("读取文件失败"));
                assert!(reason.contains("missing.docx"));
            }
            other => panic!("应该是读取失败: {:?}", other),
        }
    }

    #[test]
    fn test_corrupt_file_writes_nothing() {
        let dir = tempfile::TempDir::new().unwrap();
        let input = dir.path().join("broken.docx");
        fs::write(&input, b"garbage").unwrap();
        let out = dir.path().join("out");

        let flow = ConversionFlow::new(&QuizRules::default()).unwrap();
        let outcome = process_document(
            &flow,
            &PageTemplate::new("T"),
            &input,
            1,
            &test_config(&out, true),
        )
        .unwrap();

        assert!(matches!(outcome, DocumentOutcome::Failed { .. }));
        assert!(!out.join("broken.html").exists());
    }

    #[test]
    fn test_write_outputs_with_json() {
        let dir = tempfile::TempDir::new().unwrap();
        let report = QuizReport {
            records: vec![crate::models::QuestionRecord {
                number: "1".to_string(),
                text: "Q?".to_string(),
                options: vec!["A. a".to_string()],
                answer: "A. a".to_string(),
            }],
            fragment: "\n\n<p>1. <b>Q?</b></p>".to_string(),
        };

        let html_path = write_outputs(
            &report,
            &PageTemplate::new("T"),
            Path::new("quiz.docx"),
            1,
            &test_config(dir.path(), true),
        )
        .unwrap();

        assert_eq!(html_path, dir.path().join("quiz.html"));
        let page = fs::read_to_string(&html_path).unwrap();
        assert!(page.contains("<p>1. <b>Q?</b></p>"));

        let json = fs::read_to_string(dir.path().join("quiz.json")).unwrap();
        let records: Vec<crate::models::QuestionRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(records, report.records);
    }
}
