//! 题目识别规则
//!
//! 答案标记、续行白名单和选项字母范围都是可覆盖的命名配置，
//! 不在代码里写死。

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// 选项字母最多到 Z
pub const MAX_OPTION_COUNT: u8 = 26;

/// 题目识别规则
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizRules {
    /// 答案行的标记，紧跟 "Answer:"
    pub answer_marker: String,
    /// 续行前缀白名单（忽略大小写）
    pub continuation_prefixes: Vec<String>,
    /// 每道题的选项数量，从 A 开始
    pub option_count: u8,
}

impl Default for QuizRules {
    fn default() -> Self {
        Self {
            answer_marker: "✅ ".to_string(),
            continuation_prefixes: vec![
                "to increase profit".to_string(),
                "they eliminate human".to_string(),
                "using encryption to".to_string(),
            ],
            option_count: 4,
        }
    }
}

impl QuizRules {
    /// 校验规则取值
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.option_count == 0 || self.option_count > MAX_OPTION_COUNT {
            return Err(ConfigError::OptionCountOutOfRange {
                count: self.option_count,
            });
        }
        if self.answer_marker.trim().is_empty() {
            return Err(ConfigError::EmptyAnswerMarker);
        }
        Ok(())
    }

    /// 答案行的完整前缀，如 "✅ Answer:"
    pub fn answer_prefix(&self) -> String {
        format!("{}Answer:", self.answer_marker)
    }

    pub fn first_option_letter(&self) -> char {
        'A'
    }

    pub fn last_option_letter(&self) -> char {
        let count = self.option_count.clamp(1, MAX_OPTION_COUNT);
        (b'A' + count - 1) as char
    }

    /// 选项字母范围，默认 A..=D
    pub fn option_letters(&self) -> RangeInclusive<char> {
        self.first_option_letter()..=self.last_option_letter()
    }
}
