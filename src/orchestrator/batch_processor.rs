//! 批量文档处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责批量文档的转换和资源管理。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：写日志文件头、加载识别规则和页面模板
//! 2. **批量扫描**：找出输入目录中所有待转换的 DOCX
//! 3. **并发控制**：使用 Semaphore 限制并发数量
//! 4. **分批处理**：每批完成后再开始下一批
//! 5. **全局统计**：汇总所有文档的处理结果
//!
//! 每个文档在独立的阻塞任务里完整转换，文档之间不共享解析状态。

use crate::config::Config;
use crate::models::{load_rules_or_default, scan_docx_files};
use crate::orchestrator::document_processor::{self, DocumentOutcome};
use crate::services::PageTemplate;
use crate::utils::logging::{
    append_log_line, display_name, init_log_file, log_batch_start, log_final_stats, log_startup,
};
use crate::workflow::ConversionFlow;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

/// 应用主结构
pub struct App {
    config: Arc<Config>,
    flow: Arc<ConversionFlow>,
    template: Arc<PageTemplate>,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        // 初始化日志文件
        init_log_file(&config)
            .with_context(|| format!("无法创建日志文件: {}", config.output_log_file))?;

        log_startup(&config);

        let rules = load_rules_or_default(config.rules_file.as_deref()).await?;
        let flow = ConversionFlow::new(&rules).context("无法编译题目识别规则")?;
        let template = PageTemplate::load(config.template_file.as_deref(), &config.page_title)?;

        Ok(Self {
            config: Arc::new(config),
            flow: Arc::new(flow),
            template: Arc::new(template),
        })
    }

    /// 运行应用主逻辑：转换输入目录中的所有文档
    pub async fn run(&self) -> Result<ProcessingStats> {
        info!("\n📁 正在扫描待转换的文档...");
        let documents = scan_docx_files(&self.config.input_folder).await?;

        if documents.is_empty() {
            warn!("⚠️ 没有找到待转换的DOCX文件，程序结束");
            return Ok(ProcessingStats::default());
        }

        info!(
            "✓ 找到 {} 个文档，每批最多 {} 个",
            documents.len(),
            self.config.max_concurrent_documents
        );

        let stats = self.process_all_documents(documents).await?;

        let summary = stats.summary();
        log_final_stats(&summary, &self.config);
        append_log_line(&self.config.output_log_file, &summary)?;

        Ok(stats)
    }

    /// 只转换一个文件
    pub async fn convert_file(&self, path: &Path) -> Result<DocumentOutcome> {
        let outcome = self.spawn_document(path.to_path_buf(), 1).await??;
        append_log_line(
            &self.config.output_log_file,
            &format!("{} → {}", display_name(path), outcome),
        )?;
        Ok(outcome)
    }

    /// 处理所有文档
    async fn process_all_documents(&self, documents: Vec<PathBuf>) -> Result<ProcessingStats> {
        let batch_size = self.config.max_concurrent_documents.max(1);
        let semaphore = Arc::new(Semaphore::new(batch_size));
        let total = documents.len();
        let mut stats = ProcessingStats {
            total,
            ..Default::default()
        };

        // 分批处理
        for batch_start in (0..total).step_by(batch_size) {
            let batch_end = (batch_start + batch_size).min(total);
            let batch_num = (batch_start / batch_size) + 1;
            let total_batches = total.div_ceil(batch_size);

            let batch_documents = &documents[batch_start..batch_end];
            log_batch_start(batch_num, total_batches, batch_documents);

            let batch = self
                .process_batch(batch_documents, batch_start, semaphore.clone())
                .await?;

            info!(
                "✓ 第 {} 批完成: 成功 {}，无题目 {}，失败 {}",
                batch_num, batch.converted, batch.no_content, batch.failed
            );
            stats.merge(batch);
        }

        Ok(stats)
    }

    /// 处理单个批次
    async fn process_batch(
        &self,
        batch_documents: &[PathBuf],
        batch_start: usize,
        semaphore: Arc<Semaphore>,
    ) -> Result<ProcessingStats> {
        let mut batch_handles = Vec::new();

        // 为本批创建并发任务
        for (idx, path) in batch_documents.iter().enumerate() {
            let doc_index = batch_start + idx + 1;
            let permit = semaphore.clone().acquire_owned().await?;
            let handle = self.spawn_document(path.clone(), doc_index);

            batch_handles.push((
                doc_index,
                tokio::spawn(async move {
                    let _permit = permit;
                    handle.await
                }),
            ));
        }

        // 等待本批所有任务完成
        let mut result = ProcessingStats::default();

        for (doc_index, handle) in batch_handles {
            match handle.await {
                Ok(Ok(Ok(outcome))) => result.record(&outcome),
                Ok(Ok(Err(e))) => {
                    error!("[文档 {}] ❌ 写出结果失败: {}", doc_index, e);
                    result.failed += 1;
                }
                Ok(Err(e)) | Err(e) => {
                    error!("[文档 {}] 任务执行失败: {}", doc_index, e);
                    result.failed += 1;
                }
            }
        }

        Ok(result)
    }

    /// 在阻塞线程池中转换一个文档
    fn spawn_document(
        &self,
        path: PathBuf,
        doc_index: usize,
    ) -> tokio::task::JoinHandle<crate::error::AppResult<DocumentOutcome>> {
        let flow = self.flow.clone();
        let template = self.template.clone();
        let config = self.config.clone();

        tokio::task::spawn_blocking(move || {
            document_processor::process_document(&flow, &template, &path, doc_index, &config)
        })
    }
}

/// 处理统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProcessingStats {
    pub converted: usize,
    pub no_content: usize,
    pub failed: usize,
    pub total: usize,
    pub questions: usize,
}

impl ProcessingStats {
    fn record(&mut self, outcome: &DocumentOutcome) {
        match outcome {
            DocumentOutcome::Converted { questions, .. } => {
                self.converted += 1;
                self.questions += questions;
            }
            DocumentOutcome::NoContent => self.no_content += 1,
            DocumentOutcome::Failed { .. } => self.failed += 1,
        }
    }

    fn merge(&mut self, other: ProcessingStats) {
        self.converted += other.converted;
        self.no_content += other.no_content;
        self.failed += other.failed;
        self.questions += other.questions;
    }

    fn summary(&self) -> String {
        format!(
            "成功 {}/{}，无题目 {}，失败 {}，共 {} 道题目",
            self.converted, self.total, self.no_content, self.failed, self.questions
        )
    }
}
