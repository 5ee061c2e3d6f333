use crate::models::rules::QuizRules;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// 从 TOML 文件加载题目识别规则
///
/// 文件中没写的字段使用默认值，加载后会做取值校验
pub async fn load_rules(toml_file_path: &Path) -> Result<QuizRules> {
    let content = fs::read_to_string(toml_file_path)
        .await
        .with_context(|| format!("无法读取规则文件: {}", toml_file_path.display()))?;

    let rules: QuizRules = toml::from_str(&content)
        .with_context(|| format!("无法解析规则文件: {}", toml_file_path.display()))?;

    rules
        .validate()
        .with_context(|| format!("规则文件取值不合法: {}", toml_file_path.display()))?;

    Ok(rules)
}

/// 有路径时加载规则文件，否则使用内置规则
pub async fn load_rules_or_default(toml_file_path: Option<&str>) -> Result<QuizRules> {
    match toml_file_path {
        Some(path) => {
            tracing::info!("正在加载规则文件: {}", path);
            load_rules(Path::new(path)).await
        }
        None => Ok(QuizRules::default()),
    }
}
