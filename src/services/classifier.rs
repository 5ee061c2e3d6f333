//! 行分类服务 - 业务能力层
//!
//! 只负责"从段落里挑出题目相关的行"，不关心题目边界

use crate::models::line::{ClassifiedLine, LineKind};
use crate::services::patterns::QuizPatterns;
use std::sync::Arc;
use tracing::debug;

/// 行分类器
///
/// 职责：
/// - trim 每个段落，丢弃空段落
/// - 只保留题号行、选项行、答案行和白名单续行
/// - 标题、说明、页脚等其它行静默丢弃，不算错误
/// - 无状态，保持输入顺序
pub struct LineClassifier {
    patterns: Arc<QuizPatterns>,
}

impl LineClassifier {
    pub fn new(patterns: Arc<QuizPatterns>) -> Self {
        Self { patterns }
    }

    /// 判断单行的形状，不属于题目词汇时返回 None
    ///
    /// 优先级：题号行 > 答案行 > 选项行 / 续行
    pub fn classify(&self, line: &str) -> Option<LineKind> {
        if self.patterns.is_question_header(line) {
            Some(LineKind::QuestionHeader)
        } else if self.patterns.is_answer_line(line) {
            Some(LineKind::AnswerLine)
        } else if self.patterns.is_option_line(line) {
            Some(LineKind::OptionLine)
        } else if self.patterns.is_continuation(line) {
            Some(LineKind::ContinuationText)
        } else {
            None
        }
    }

    /// 过滤整份文档的段落
    pub fn filter<S: AsRef<str>>(&self, paragraphs: &[S]) -> Vec<ClassifiedLine> {
        let mut kept = Vec::new();
        let mut dropped = 0usize;

        for raw in paragraphs {
            let text = raw.as_ref().trim();
            if text.is_empty() {
                continue;
            }
            match self.classify(text) {
                Some(kind) => kept.push(ClassifiedLine::new(kind, text)),
                None => dropped += 1,
            }
        }

        debug!("分类完成: 保留 {} 行, 丢弃 {} 行", kept.len(), dropped);
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::rules::QuizRules;

    fn create_test_classifier(rules: &QuizRules) -> LineClassifier {
        LineClassifier::new(Arc::new(QuizPatterns::new(rules).unwrap()))
    }

    #[test]
    fn test_keeps_quiz_vocabulary_in_order() {
        let classifier = create_test_classifier(&QuizRules::default());
        let paragraphs = vec![
            "ProCoder Quiz Oct 2025",
            "",
            "   ",
            "Instructions: choose one option",
            "  1. What is X?  ",
            "A. Opt1",
            "B. Opt2",
            "C. Opt3",
            "D. Opt4",
            "✅ Answer: B. Opt2",
            "Thank you!",
        ];

        let lines = classifier.filter(&paragraphs);
        let kinds: Vec<_> = lines.iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            vec![
                LineKind::QuestionHeader,
                LineKind::OptionLine,
                LineKind::OptionLine,
                LineKind::OptionLine,
                LineKind::OptionLine,
                LineKind::AnswerLine,
            ]
        );
        // 保存的是 trim 之后的文本
        assert_eq!(lines[0].text, "1. What is X?");
    }

    #[test]
    fn test_continuation_prefix_is_case_insensitive() {
        let classifier = create_test_classifier(&QuizRules::default());

        assert_eq!(
            classifier.classify("To increase profits for the company"),
            Some(LineKind::ContinuationText)
        );
        assert_eq!(
            classifier.classify("USING ENCRYPTION TO protect data"),
            Some(LineKind::ContinuationText)
        );
        assert_eq!(classifier.classify("to decrease profit"), None);
    }

    #[test]
    fn test_rejects_near_misses() {
        let classifier = create_test_classifier(&QuizRules::default());

        assert_eq!(classifier.classify("123. Too many digits"), None);
        assert_eq!(classifier.classify("1.No space"), None);
        assert_eq!(classifier.classify("E. Fifth option"), None);
        assert_eq!(classifier.classify("Answer: B. no marker"), None);
    }

    #[test]
    fn test_custom_rules() {
        let rules = QuizRules {
            answer_marker: "=> ".to_string(),
            continuation_prefixes: vec!["And then".to_string()],
            option_count: 5,
        };
        let classifier = create_test_classifier(&rules);

        assert_eq!(classifier.classify("=> Answer: E. x"), Some(LineKind::AnswerLine));
        assert_eq!(classifier.classify("✅ Answer: B. x"), None);
        assert_eq!(classifier.classify("E. Fifth option"), Some(LineKind::OptionLine));
        assert_eq!(
            classifier.classify("and then some more"),
            Some(LineKind::ContinuationText)
        );
    }

    #[test]
    fn test_header_wins_over_other_shapes() {
        let rules = QuizRules {
            continuation_prefixes: vec!["1. ".to_string()],
            ..Default::default()
        };
        let classifier = create_test_classifier(&rules);
        assert_eq!(classifier.classify("1. Header"), Some(LineKind::QuestionHeader));
    }
}
