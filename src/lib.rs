//! # Quiz DOCX → HTML
//!
//! 把题目文档（带题号的题干、A–D 四个选项、一行答案）转换成 HTML 页面
//!
//! ## 架构设计
//!
//! 本系统采用四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 只暴露"读段落"的能力
//! - `DocxReader` - 从 DOCX 字节读出正文段落
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理一份段落序列
//! - `LineClassifier` - 挑出题号行、选项行、答案行和续行
//! - `QuizReconstructor` - 把行序列还原成题目
//! - `html_renderer` / `PageTemplate` - 渲染片段并嵌入页面
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一份文档"的完整转换流程
//! - `ConversionFlow` - 读取 → 分类 → 重建 → 渲染
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量转换目录中的文档，管理并发
//! - `orchestrator/document_processor` - 单个文件的读写
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult, ConfigError, SourceReadError};
pub use infrastructure::{DocxReader, ParagraphSource};
pub use models::{ClassifiedLine, ConversionResult, LineKind, QuestionRecord, QuizReport, QuizRules};
pub use orchestrator::{App, DocumentOutcome, ProcessingStats};
pub use services::{LineClassifier, PageTemplate, QuizPatterns, QuizReconstructor};
pub use workflow::ConversionFlow;
