//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责文件读写和批量调度，是整个系统唯一接触文件系统的地方。
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量文档处理器
//! - 初始化规则、模板和日志文件
//! - 扫描输入目录（Vec<PathBuf>）
//! - 控制并发数量（Semaphore + spawn_blocking）
//! - 输出全局统计信息
//!
//! ### `document_processor` - 单个文档处理器
//! - 读取单个 DOCX 文件
//! - 调用 ConversionFlow
//! - 写出 HTML / JSON
//! - 汇报单个文档的结果
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<PathBuf>)
//!     ↓
//! document_processor (处理单个文件)
//!     ↓
//! workflow::ConversionFlow (处理单个文档的字节)
//!     ↓
//! services (能力层：classifier / reconstructor / renderer)
//!     ↓
//! infrastructure (基础设施：DocxReader)
//! ```

pub mod batch_processor;
pub mod document_processor;

// 重新导出主要类型
pub use batch_processor::{App, ProcessingStats};
pub use document_processor::{process_document, DocumentOutcome};
