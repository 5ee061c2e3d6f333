//! 文档转换流程 - 流程层
//!
//! 核心职责：定义"一份文档"的完整转换流程
//!
//! 流程顺序：
//! 1. 读取段落（失败 → ReadFailure）
//! 2. 行分类（没有任何题目行 → NoContent）
//! 3. 题目重建（没有任何题目 → NoContent）
//! 4. 渲染 HTML 片段
//!
//! 每次调用都只使用自己的行序列和题目列表，不跨文档缓存任何状态

use crate::error::ConfigError;
use crate::infrastructure::{DocxReader, ParagraphSource};
use crate::models::record::{ConversionResult, QuizReport};
use crate::models::rules::QuizRules;
use crate::services::{render_fragment, LineClassifier, QuizPatterns, QuizReconstructor};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// 文档转换流程
///
/// - 编排 读取 → 分类 → 重建 → 渲染
/// - 不持有文件路径，不写文件
/// - 同一个流程对象可以被多个文档复用
pub struct ConversionFlow {
    source: Box<dyn ParagraphSource>,
    classifier: LineClassifier,
    reconstructor: QuizReconstructor,
}

impl ConversionFlow {
    /// 使用 DOCX 读取器创建流程
    pub fn new(rules: &QuizRules) -> Result<Self, ConfigError> {
        Self::with_source(rules, Box::new(DocxReader::new()))
    }

    /// 使用自定义段落来源创建流程
    pub fn with_source(
        rules: &QuizRules,
        source: Box<dyn ParagraphSource>,
    ) -> Result<Self, ConfigError> {
        let patterns = Arc::new(QuizPatterns::new(rules)?);
        Ok(Self {
            source,
            classifier: LineClassifier::new(patterns.clone()),
            reconstructor: QuizReconstructor::new(patterns),
        })
    }

    /// 转换一份文档的二进制内容
    pub fn run(&self, bytes: &[u8]) -> ConversionResult {
        match self.source.read_paragraphs(bytes) {
            Ok(paragraphs) => self.run_paragraphs(&paragraphs),
            Err(e) => {
                error!("❌ 无法读取文档: {}", e);
                ConversionResult::ReadFailure(e.to_string())
            }
        }
    }

    /// 转换已经读好的段落序列
    pub fn run_paragraphs<S: AsRef<str>>(&self, paragraphs: &[S]) -> ConversionResult {
        let lines = self.classifier.filter(paragraphs);
        if lines.is_empty() {
            warn!("⚠️ 文档中没有识别到任何题目行");
            return ConversionResult::NoContent;
        }

        let records = self.reconstructor.reconstruct(&lines);
        if records.is_empty() {
            warn!("⚠️ 文档中有 {} 行题目内容，但没有题号行", lines.len());
            return ConversionResult::NoContent;
        }

        let fragment = render_fragment(&records);
        debug!("片段长度: {} 字节", fragment.len());

        ConversionResult::Success(QuizReport { records, fragment })
    }
}
