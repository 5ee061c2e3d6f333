//! HTML 片段渲染
//!
//! 每道题依次输出：题号+加粗题干、每个选项一行、正确答案一行

use crate::models::record::QuestionRecord;

/// 正确答案行的标签
pub const CORRECT_ANSWER_LABEL: &str = "✔ Correct Answer";

/// 渲染所有题目，块之间用换行连接，片段以两个换行开头
pub fn render_fragment(records: &[QuestionRecord]) -> String {
    let mut blocks = Vec::new();
    for record in records {
        render_record(record, &mut blocks);
    }
    format!("\n\n{}", blocks.join("\n"))
}

fn render_record(record: &QuestionRecord, blocks: &mut Vec<String>) {
    blocks.push(format!(
        "<p>{}. <b>{}</b></p>",
        html_escape(&record.number),
        html_escape(&record.text)
    ));

    for option in record.options.iter().filter(|o| !o.is_empty()) {
        blocks.push(format!("<p>• {}</p>", html_escape(option)));
    }

    blocks.push(format!(
        "<p><b>{}</b>: {}</p>",
        CORRECT_ANSWER_LABEL,
        html_escape(&record.answer)
    ));
}

/// 日志预览用：把加粗标签换成 Markdown 的 `**`
pub fn markdown_preview(fragment: &str) -> String {
    fragment.replace("<b>", "**").replace("</b>", "**")
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> QuestionRecord {
        QuestionRecord {
            number: "1".to_string(),
            text: "What is X?".to_string(),
            options: vec![
                "A. Opt1".to_string(),
                "B. Opt2".to_string(),
                "C. Opt3".to_string(),
                "D. Opt4".to_string(),
            ],
            answer: "B. Opt2".to_string(),
        }
    }

    #[test]
    fn test_render_single_record() {
        let fragment = render_fragment(&[sample_record()]);
        let expected = "\n\n<p>1. <b>What is X?</b></p>\n\
                        <p>• A. Opt1</p>\n\
                        <p>• B. Opt2</p>\n\
                        <p>• C. Opt3</p>\n\
                        <p>• D. Opt4</p>\n\
                        <p><b>✔ Correct Answer</b>: B. Opt2</p>";
        assert_eq!(fragment, expected);
        assert_eq!(fragment.matches("Correct Answer").count(), 1);
    }

    #[test]
    fn test_empty_options_and_answer() {
        let record = QuestionRecord {
            number: "7".to_string(),
            text: "Open question".to_string(),
            options: vec![String::new()],
            answer: String::new(),
        };
        let fragment = render_fragment(&[record]);
        assert_eq!(
            fragment,
            "\n\n<p>7. <b>Open question</b></p>\n<p><b>✔ Correct Answer</b>: </p>"
        );
    }

    #[test]
    fn test_escapes_markup_in_text() {
        let record = QuestionRecord {
            number: "2".to_string(),
            text: "What does <div> & \"p\" do?".to_string(),
            options: vec!["A. <b>bold</b>".to_string()],
            answer: "A. <b>bold</b>".to_string(),
        };
        let fragment = render_fragment(&[record]);
        assert!(fragment.contains("<b>What does &lt;div&gt; &amp; &quot;p&quot; do?</b>"));
        assert!(fragment.contains("<p>• A. &lt;b&gt;bold&lt;/b&gt;</p>"));
    }

    #[test]
    fn test_no_records_renders_empty_fragment() {
        assert_eq!(render_fragment(&[]), "\n\n");
    }

    #[test]
    fn test_markdown_preview() {
        let preview = markdown_preview(&render_fragment(&[sample_record()]));
        assert!(preview.contains("<p>1. **What is X?**</p>"));
        assert!(!preview.contains("<b>"));
    }
}
