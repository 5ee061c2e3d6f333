use std::fmt;

/// 段落的形状分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// 题号行，如 `1. What is ...`
    QuestionHeader,
    /// 选项行，如 `B. ...`
    OptionLine,
    /// 答案行，如 `✅ Answer: B. ...`
    AnswerLine,
    /// 被拆到新段落里的续行
    ContinuationText,
}

impl LineKind {
    /// 是否为块边界（题号行或答案行）
    pub fn is_boundary(self) -> bool {
        matches!(self, LineKind::QuestionHeader | LineKind::AnswerLine)
    }
}

/// 通过分类器的一行（已 trim，非空）
///
/// 行的先后顺序本身就是信息，重建阶段依赖它的位置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    pub kind: LineKind,
    pub text: String,
}

impl ClassifiedLine {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

impl fmt::Display for ClassifiedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.kind, self.text)
    }
}
