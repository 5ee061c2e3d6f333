use anyhow::Result;
use quiz_docx_html::{logger, App, Config, DocumentOutcome};
use std::path::Path;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logger::init();

    // 加载配置
    let config = Config::from_env();

    let app = App::initialize(config).await?;

    // 传入单个文件时只转换这个文件，否则批量处理输入目录
    match std::env::args().nth(1) {
        Some(path) => match app.convert_file(Path::new(&path)).await? {
            DocumentOutcome::Converted { questions, output } => {
                info!("✅ 转换完成: {} 道题目 → {}", questions, output.display());
            }
            DocumentOutcome::NoContent => {
                warn!("⚠️ 无法提取题目，请确认文档符合题目格式");
            }
            DocumentOutcome::Failed { reason } => {
                anyhow::bail!("文档转换失败: {}", reason);
            }
        },
        None => {
            app.run().await?;
        }
    }

    Ok(())
}
