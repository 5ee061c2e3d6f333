use crate::error::{AppError, FileError};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// 扫描文件夹中所有待转换的 DOCX 文件
///
/// 结果按文件名排序；Word 打开文档时留下的 `~$` 锁文件会被跳过
pub async fn scan_docx_files(folder_path: &str) -> Result<Vec<PathBuf>> {
    let folder = PathBuf::from(folder_path);

    if !folder.exists() {
        return Err(AppError::File(FileError::DirectoryNotFound {
            path: folder_path.to_string(),
        })
        .into());
    }

    let mut docx_files = Vec::new();
    let mut entries = fs::read_dir(&folder)
        .await
        .with_context(|| format!("无法读取文件夹: {}", folder_path))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if is_docx(&path) {
            docx_files.push(path);
        }
    }

    docx_files.sort();
    tracing::info!("在 {} 中找到 {} 个 DOCX 文件", folder_path, docx_files.len());

    Ok(docx_files)
}

fn is_docx(path: &Path) -> bool {
    let is_lock_file = path
        .file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with("~$"))
        .unwrap_or(false);
    let has_docx_ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("docx"))
        .unwrap_or(false);
    has_docx_ext && !is_lock_file
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scan_skips_lock_and_other_files() {
        let dir = tempfile::TempDir::new().unwrap();
        for name in ["b.docx", "a.DOCX", "~$a.docx", "notes.txt"] {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }

        let files = scan_docx_files(dir.path().to_str().unwrap()).await.unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.DOCX", "b.docx"]);
    }

    #[tokio::test]
    async fn test_missing_folder_is_error() {
        let err = scan_docx_files("/definitely/not/here").await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::File(FileError::DirectoryNotFound { path })) if path == "/definitely/not/here"
        ));
    }
}
