//! 题目重建服务 - 业务能力层
//!
//! 把分类后的行序列还原成 `QuestionRecord` 列表。
//!
//! ## 扫描方式
//!
//! 游标从头扫描，遇到题号行时：
//! 1. 结束上一道未完成的题目
//! 2. 把题号行和后续所有非边界行直接拼接成"题目块"
//! 3. 在题目块里按第一个 "A." 切开题干和选项
//! 4. 选项串按 B./C./D. 切开（保留分隔符），再按字母前缀重新归并
//! 5. 紧随其后的一行若是答案行则取走，否则不动
//!
//! 输入结束时仍未完成的题目同样要输出。
//!
//! ## 已知限制
//!
//! 题干里如果本身含有 "A."（如 "U.S.A."），会在那里提前切开。
//! 这是现有输出的一部分，不做修正。

use crate::models::line::{ClassifiedLine, LineKind};
use crate::models::record::QuestionRecord;
use crate::services::patterns::QuizPatterns;
use std::sync::Arc;
use tracing::{debug, warn};

/// 题目重建器
///
/// 宽松处理：缺选项、缺答案都不报错，只记日志
pub struct QuizReconstructor {
    patterns: Arc<QuizPatterns>,
}

impl QuizReconstructor {
    pub fn new(patterns: Arc<QuizPatterns>) -> Self {
        Self { patterns }
    }

    /// 扫描整份分类结果
    pub fn reconstruct(&self, lines: &[ClassifiedLine]) -> Vec<QuestionRecord> {
        let mut records = Vec::new();
        let mut open: Option<QuestionRecord> = None;
        let mut cursor = 0;

        while cursor < lines.len() {
            if lines[cursor].kind != LineKind::QuestionHeader {
                // 题号之前的行、多余的答案行都跳过
                cursor += 1;
                continue;
            }

            if let Some(done) = open.take() {
                records.push(self.finalize(done));
            }

            let block_end = self.block_end(lines, cursor + 1);
            let block = merge_block(&lines[cursor..block_end]);
            let mut record = self.build_record(&block);

            cursor = match self.take_answer(lines, block_end) {
                Some(answer) => {
                    record.answer = answer;
                    block_end + 1
                }
                None => block_end,
            };

            open = Some(record);
        }

        if let Some(done) = open.take() {
            records.push(self.finalize(done));
        }

        debug!("重建完成: 共 {} 道题目", records.len());
        records
    }

    /// 从 `start` 开始找下一条边界行的位置
    fn block_end(&self, lines: &[ClassifiedLine], start: usize) -> usize {
        lines[start..]
            .iter()
            .position(|line| line.kind.is_boundary())
            .map(|offset| start + offset)
            .unwrap_or(lines.len())
    }

    /// 查看块后的第一行：是答案行就取走
    ///
    /// 返回 None 时游标不前进，下一轮照常处理那一行
    fn take_answer(&self, lines: &[ClassifiedLine], at: usize) -> Option<String> {
        let line = lines.get(at)?;
        if line.kind != LineKind::AnswerLine {
            return None;
        }
        self.patterns
            .strip_answer_prefix(&line.text)
            .map(str::to_string)
    }

    fn finalize(&self, record: QuestionRecord) -> QuestionRecord {
        if record.options.is_empty() {
            warn!("⚠️ 第 {} 题没有识别到选项", record.number);
        }
        if !record.has_answer() {
            warn!("⚠️ 第 {} 题没有答案行", record.number);
        }
        debug!("✓ {}", record);
        record
    }

    /// 从题目块构建一道题
    pub fn build_record(&self, block: &str) -> QuestionRecord {
        let (label, remainder) = block.split_once('.').unwrap_or((block, ""));
        let number = label.trim().to_string();
        let prose_start = label.len() + 1;

        let (text, options) = match block.find(self.patterns.first_option_marker()) {
            Some(a_pos) => {
                let prose = block.get(prose_start..a_pos).unwrap_or_default().trim();
                let blob = block[a_pos..].trim();
                (prose.to_string(), self.segment_options(blob))
            }
            None => (remainder.trim().to_string(), Vec::new()),
        };

        if text.is_empty() {
            // 题号后面紧跟 "A."：整段当作题干，保证题干不为空
            return QuestionRecord {
                number,
                text: remainder.trim().to_string(),
                options: Vec::new(),
                answer: String::new(),
            };
        }

        QuestionRecord {
            number,
            text,
            options,
            answer: String::new(),
        }
    }

    /// 切分选项串
    ///
    /// 先按 B./C./D. 切开并保留分隔符，再把以字母前缀开头的片段当作新选项，
    /// 其它片段接到当前选项后面。文本为空的选项被丢弃。
    pub fn segment_options(&self, blob: &str) -> Vec<String> {
        let mut options = Vec::new();
        let mut current = String::new();

        for piece in split_keep_delimiters(blob, self.patterns.option_split()) {
            if self.patterns.is_option_line(piece) {
                push_option(&mut options, &current);
                current = piece.to_string();
            } else {
                current.push_str(piece);
            }
        }
        push_option(&mut options, &current);

        options
    }
}

/// 题号行和后续续行直接拼接，不加分隔符
fn merge_block(lines: &[ClassifiedLine]) -> String {
    lines.iter().map(|line| line.text.trim()).collect()
}

fn push_option(options: &mut Vec<String>, option: &str) {
    let option = option.trim();
    if !option.is_empty() {
        options.push(option.to_string());
    }
}

fn split_keep_delimiters<'a>(text: &'a str, delimiter: Option<&regex::Regex>) -> Vec<&'a str> {
    let Some(re) = delimiter else {
        return vec![text];
    };

    let mut pieces = Vec::new();
    let mut last = 0;
    for m in re.find_iter(text) {
        pieces.push(&text[last..m.start()]);
        pieces.push(m.as_str());
        last = m.end();
    }
    pieces.push(&text[last..]);
    pieces
}
