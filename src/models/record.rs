use serde::{Deserialize, Serialize};

/// 重建出来的一道题
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// 题号，保持原文（如 "1"）
    pub number: String,
    /// 题干
    pub text: String,
    /// 选项，每项都带 "A. ".."D. " 前缀；找不到选项时为空
    #[serde(default)]
    pub options: Vec<String>,
    /// 答案原文，可能本身以 "B. " 开头
    #[serde(default)]
    pub answer: String,
}

impl QuestionRecord {
    pub fn has_answer(&self) -> bool {
        !self.answer.is_empty()
    }
}

impl std::fmt::Display for QuestionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // 截断题干以便显示（最多60个字符）
        let text_preview = if self.text.chars().count() > 60 {
            self.text.chars().take(60).collect::<String>() + "..."
        } else {
            self.text.clone()
        };
        write!(
            f,
            "{}. {} [选项: {}, 答案: {}]",
            self.number,
            text_preview,
            self.options.len(),
            if self.has_answer() { self.answer.as_str() } else { "无" }
        )
    }
}

/// 一次成功转换的产物
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizReport {
    pub records: Vec<QuestionRecord>,
    /// 拼接好的 HTML 片段，交给页面模板使用
    pub fragment: String,
}

/// 单个文档的转换结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionResult {
    /// 转换成功
    Success(QuizReport),
    /// 文档可读，但没有识别出任何题目
    NoContent,
    /// 文档无法解析成段落
    ReadFailure(String),
}

impl ConversionResult {
    pub fn report(&self) -> Option<&QuizReport> {
        match self {
            ConversionResult::Success(report) => Some(report),
            _ => None,
        }
    }
}
