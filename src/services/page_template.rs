//! 页面模板
//!
//! 把题目片段嵌进完整的 HTML 页面。模板只关心两个占位符，
//! 样式和页面外观全部由模板本身决定。

use crate::error::ConfigError;
use crate::services::html_renderer::html_escape;
use anyhow::{Context, Result};
use std::path::Path;

pub const TITLE_PLACEHOLDER: &str = "{{title}}";
pub const CONTENT_PLACEHOLDER: &str = "{{quiz_content}}";

const DEFAULT_SHELL: &str = r#"<!doctype html>
<html lang="en">

<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{{title}}</title>
    <style>
        body {
            border: 2px solid #1D3557;
            border-radius: 20px;
            margin: 30px;
            background-color: white;
            font-family: 'Red Hat Display', sans-serif;
        }

        .container {
            max-width: 960px;
            margin: 0 auto;
            padding: 0 16px;
        }

        .title-wrapper {
            background-color: #E63946;
            color: #fff;
            padding: 10px;
            margin-bottom: 40px;
            text-align: center;
        }

        .title-wrapper h2 {
            font-weight: 700;
            margin: 0;
        }
    </style>
</head>

<body>
    <div class="title-wrapper">
        <h2>{{title}}</h2>
    </div>

    <div class="container">
{{quiz_content}}

    </div>
</body>
</html>
"#;

/// 页面模板
#[derive(Debug, Clone)]
pub struct PageTemplate {
    shell: String,
    title: String,
}

impl PageTemplate {
    /// 使用内置模板
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            shell: DEFAULT_SHELL.to_string(),
            title: title.into(),
        }
    }

    /// 使用自定义模板，模板必须包含 `{{quiz_content}}`
    pub fn with_shell(shell: impl Into<String>, title: impl Into<String>) -> Result<Self, ConfigError> {
        let shell = shell.into();
        if !shell.contains(CONTENT_PLACEHOLDER) {
            return Err(ConfigError::TemplatePlaceholderMissing {
                placeholder: CONTENT_PLACEHOLDER.to_string(),
            });
        }
        Ok(Self {
            shell,
            title: title.into(),
        })
    }

    /// 从文件加载模板；没有路径时使用内置模板
    pub fn load(template_file: Option<&str>, title: &str) -> Result<Self> {
        match template_file {
            Some(path) => {
                let shell = std::fs::read_to_string(Path::new(path))
                    .with_context(|| format!("无法读取模板文件: {}", path))?;
                let template = Self::with_shell(shell, title)
                    .with_context(|| format!("模板文件不可用: {}", path))?;
                Ok(template)
            }
            None => Ok(Self::new(title)),
        }
    }

    /// 生成完整页面
    pub fn render(&self, quiz_fragment: &str) -> String {
        // 先替换标题，片段里出现的占位符文本不会被再次替换
        self.shell
            .replace(TITLE_PLACEHOLDER, &html_escape(&self.title))
            .replace(CONTENT_PLACEHOLDER, quiz_fragment)
    }
}
