//! DOCX 段落读取器 - 基础设施层
//!
//! 只暴露"把文档字节变成段落序列"的能力，不认识题目

use crate::error::SourceReadError;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use tracing::debug;
use zip::result::ZipError;
use zip::ZipArchive;

/// 正文部分在容器中的位置
const DOCUMENT_PART: &str = "word/document.xml";

/// 段落来源
///
/// 职责：
/// - 给定文档的二进制内容，按顺序产出段落文本
/// - 不做 trim，不做过滤
/// - 文档无法解析时返回 SourceReadError
pub trait ParagraphSource: Send + Sync {
    fn read_paragraphs(&self, bytes: &[u8]) -> Result<Vec<String>, SourceReadError>;
}

/// Word 2007+ (.docx) 段落读取器
///
/// 只读取正文顶层段落，表格和文本框里的段落不算
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxReader;

impl DocxReader {
    pub fn new() -> Self {
        Self
    }
}

impl ParagraphSource for DocxReader {
    fn read_paragraphs(&self, bytes: &[u8]) -> Result<Vec<String>, SourceReadError> {
        let xml = read_document_part(bytes)?;
        let paragraphs = parse_body_paragraphs(&xml)?;
        debug!("从正文中读取到 {} 个段落", paragraphs.len());
        Ok(paragraphs)
    }
}

fn read_document_part(bytes: &[u8]) -> Result<String, SourceReadError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut entry = match archive.by_name(DOCUMENT_PART) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => {
            return Err(SourceReadError::MissingPart {
                part: DOCUMENT_PART.to_string(),
            })
        }
        Err(e) => return Err(e.into()),
    };
    let mut xml = String::new();
    entry.read_to_string(&mut xml)?;
    Ok(xml)
}

fn parse_body_paragraphs(xml: &str) -> Result<Vec<String>, SourceReadError> {
    let mut reader = Reader::from_str(xml);
    let mut scanner = BodyScanner::default();

    loop {
        match reader.read_event()? {
            Event::Start(e) => scanner.open(e.local_name().as_ref()),
            Event::End(e) => scanner.close(e.local_name().as_ref()),
            Event::Empty(e) => scanner.empty(e.local_name().as_ref()),
            Event::Text(t) => scanner.text(&t.unescape()?),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(scanner.paragraphs)
}

/// 正文扫描状态
#[derive(Debug, Default)]
struct BodyScanner {
    paragraphs: Vec<String>,
    current: String,
    in_paragraph: bool,
    in_run: bool,
    in_text: bool,
    table_depth: usize,
    textbox_depth: usize,
    /// 修订中被删除的内容（w:del / w:moveFrom）
    deleted_depth: usize,
}

impl BodyScanner {
    fn at_body_level(&self) -> bool {
        self.table_depth == 0 && self.textbox_depth == 0
    }

    fn collecting(&self) -> bool {
        self.in_run && self.deleted_depth == 0 && self.at_body_level()
    }

    fn open(&mut self, name: &[u8]) {
        match name {
            b"tbl" => self.table_depth += 1,
            b"txbxContent" => self.textbox_depth += 1,
            b"del" | b"moveFrom" => self.deleted_depth += 1,
            b"p" if self.at_body_level() => {
                self.in_paragraph = true;
                self.current.clear();
            }
            b"r" if self.in_paragraph && self.at_body_level() => self.in_run = true,
            b"t" if self.in_run && self.at_body_level() => self.in_text = true,
            _ => self.inline(name),
        }
    }

    fn close(&mut self, name: &[u8]) {
        match name {
            b"tbl" => self.table_depth = self.table_depth.saturating_sub(1),
            b"txbxContent" => self.textbox_depth = self.textbox_depth.saturating_sub(1),
            b"del" | b"moveFrom" => self.deleted_depth = self.deleted_depth.saturating_sub(1),
            b"p" if self.in_paragraph && self.at_body_level() => {
                self.paragraphs.push(std::mem::take(&mut self.current));
                self.in_paragraph = false;
            }
            b"r" if self.at_body_level() => self.in_run = false,
            b"t" if self.at_body_level() => self.in_text = false,
            _ => {}
        }
    }

    fn empty(&mut self, name: &[u8]) {
        match name {
            b"p" if self.at_body_level() => self.paragraphs.push(String::new()),
            _ => self.inline(name),
        }
    }

    /// 行内控制元素：制表符和换行
    fn inline(&mut self, name: &[u8]) {
        if !self.collecting() {
            return;
        }
        match name {
            b"tab" => self.current.push('\t'),
            b"br" | b"cr" => self.current.push('\n'),
            _ => {}
        }
    }

    fn text(&mut self, text: &str) {
        if self.in_text && self.collecting() {
            self.current.push_str(text);
        }
    }
}
