pub mod line;
pub mod loaders;
pub mod record;
pub mod rules;

pub use line::{ClassifiedLine, LineKind};
pub use loaders::{load_rules, load_rules_or_default, scan_docx_files};
pub use record::{ConversionResult, QuestionRecord, QuizReport};
pub use rules::QuizRules;
