use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 文档读取错误
    #[error("文档读取错误: {0}")]
    SourceRead(#[from] SourceReadError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
}

/// 文档无法解析成段落序列
///
/// 对单个文档来说是终止性错误，不产生任何部分输出
#[derive(Debug, Error)]
pub enum SourceReadError {
    /// 不是合法的 ZIP 容器（文件损坏或格式不对）
    #[error("无法打开文档容器: {0}")]
    Container(#[from] zip::result::ZipError),
    /// 容器内缺少正文部分
    #[error("文档缺少正文部分: {part}")]
    MissingPart { part: String },
    /// 读取正文失败
    #[error("读取正文失败: {0}")]
    Io(#[from] std::io::Error),
    /// 正文 XML 解析失败
    #[error("正文 XML 解析失败: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 选项数量超出范围
    #[error("选项数量 {count} 超出范围 [1, 26]")]
    OptionCountOutOfRange { count: u8 },
    /// 答案标记为空
    #[error("答案标记不能为空")]
    EmptyAnswerMarker,
    /// 模板缺少占位符
    #[error("模板缺少占位符 {placeholder}")]
    TemplatePlaceholderMissing { placeholder: String },
    /// 正则编译失败
    #[error("无法编译匹配规则: {0}")]
    Pattern(#[from] regex::Error),
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 目录不存在
    #[error("目录不存在: {path}")]
    DirectoryNotFound { path: String },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_read_error_wraps_into_app_error() {
        let err: AppError = SourceReadError::MissingPart {
            part: "word/document.xml".to_string(),
        }
        .into();
        assert!(err.to_string().contains("word/document.xml"));
    }

    #[test]
    fn test_file_error_keeps_path() {
        let err = AppError::file_write_failed(
            "out/quiz.html",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("out/quiz.html"));
    }
}
