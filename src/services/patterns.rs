//! 行形状匹配规则
//!
//! 把 QuizRules 编译成一组正则，分类器和重建器共用同一份

use crate::error::ConfigError;
use crate::models::rules::QuizRules;
use regex::Regex;

/// 编译好的匹配规则
#[derive(Debug, Clone)]
pub struct QuizPatterns {
    /// 题号行：一到两位数字 + ". "
    question_header: Regex,
    /// 选项行：A..=末位字母 + ". "
    option_start: Regex,
    /// 选项切分点：B..=末位字母 + ". "；只有一个选项时没有切分点
    option_split: Option<Regex>,
    /// 完整答案前缀，如 "✅ Answer:"
    answer_prefix: String,
    /// 首个选项标记，如 "A."
    first_option_marker: String,
    /// 续行前缀（已转小写）
    continuation_prefixes: Vec<String>,
}

impl QuizPatterns {
    pub fn new(rules: &QuizRules) -> Result<Self, ConfigError> {
        rules.validate()?;

        let first = rules.first_option_letter();
        let last = rules.last_option_letter();

        let question_header = Regex::new(r"^\d{1,2}\. ")?;
        let option_start = Regex::new(&format!(r"^[{}-{}]\. ", first, last))?;
        let option_split = if last > first {
            let second = char::from(first as u8 + 1);
            Some(Regex::new(&format!(r"[{}-{}]\. ", second, last))?)
        } else {
            None
        };

        Ok(Self {
            question_header,
            option_start,
            option_split,
            answer_prefix: rules.answer_prefix(),
            first_option_marker: format!("{}.", first),
            continuation_prefixes: rules
                .continuation_prefixes
                .iter()
                .map(|p| p.to_lowercase())
                .filter(|p| !p.is_empty())
                .collect(),
        })
    }

    pub fn is_question_header(&self, line: &str) -> bool {
        self.question_header.is_match(line)
    }

    pub fn is_answer_line(&self, line: &str) -> bool {
        line.starts_with(&self.answer_prefix)
    }

    pub fn is_option_line(&self, line: &str) -> bool {
        self.option_start.is_match(line)
    }

    pub fn is_continuation(&self, line: &str) -> bool {
        let lower = line.to_lowercase();
        self.continuation_prefixes
            .iter()
            .any(|prefix| lower.starts_with(prefix.as_str()))
    }

    /// 答案行去掉标记和冒号后的文本
    pub fn strip_answer_prefix<'a>(&self, line: &'a str) -> Option<&'a str> {
        line.strip_prefix(self.answer_prefix.as_str())
            .map(str::trim)
    }

    pub fn first_option_marker(&self) -> &str {
        &self.first_option_marker
    }

    pub(crate) fn option_split(&self) -> Option<&Regex> {
        self.option_split.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_patterns() {
        let patterns = QuizPatterns::new(&QuizRules::default()).unwrap();

        assert!(patterns.is_question_header("1. What"));
        assert!(patterns.is_question_header("12. What"));
        assert!(!patterns.is_question_header("123. What"));
        assert!(!patterns.is_question_header("1.What"));

        assert!(patterns.is_option_line("D. Reduce risk"));
        assert!(!patterns.is_option_line("E. Extra"));
        assert!(!patterns.is_option_line("a. lower"));

        assert!(patterns.is_answer_line("✅ Answer: B. Opt2"));
        assert!(!patterns.is_answer_line("Answer: B. Opt2"));
        assert_eq!(
            patterns.strip_answer_prefix("✅ Answer:   B. Opt2 "),
            Some("B. Opt2")
        );
        assert_eq!(patterns.first_option_marker(), "A.");
    }

    #[test]
    fn test_single_option_has_no_split_point() {
        let rules = QuizRules {
            option_count: 1,
            ..Default::default()
        };
        let patterns = QuizPatterns::new(&rules).unwrap();
        assert!(patterns.option_split().is_none());
        assert!(patterns.is_option_line("A. only"));
        assert!(!patterns.is_option_line("B. not an option"));
    }

    #[test]
    fn test_invalid_rules_do_not_compile() {
        let rules = QuizRules {
            option_count: 0,
            ..Default::default()
        };
        assert!(QuizPatterns::new(&rules).is_err());
    }
}
