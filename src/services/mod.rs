pub mod classifier;
pub mod html_renderer;
pub mod page_template;
pub mod patterns;
pub mod reconstructor;

pub use classifier::LineClassifier;
pub use html_renderer::{markdown_preview, render_fragment};
pub use page_template::PageTemplate;
pub use patterns::QuizPatterns;
pub use reconstructor::QuizReconstructor;
