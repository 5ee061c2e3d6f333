pub mod docx_scanner;
pub mod toml_loader;

pub use docx_scanner::scan_docx_files;
pub use toml_loader::{load_rules, load_rules_or_default};
