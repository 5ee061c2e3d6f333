/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 待转换的 DOCX 文件目录
    pub input_folder: String,
    /// HTML 输出目录
    pub output_folder: String,
    /// 同时处理的文档数量
    pub max_concurrent_documents: usize,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
    /// 题目识别规则文件（TOML），不设置则使用内置规则
    pub rules_file: Option<String>,
    /// 页面模板文件，不设置则使用内置模板
    pub template_file: Option<String>,
    /// 页面标题
    pub page_title: String,
    /// 是否同时导出 JSON
    pub emit_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_folder: "input_docx".to_string(),
            output_folder: "output_html".to_string(),
            max_concurrent_documents: 4,
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
            rules_file: None,
            template_file: None,
            page_title: "Quiz Questions and Answers".to_string(),
            emit_json: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            input_folder: std::env::var("INPUT_FOLDER").unwrap_or(default.input_folder),
            output_folder: std::env::var("OUTPUT_FOLDER").unwrap_or(default.output_folder),
            max_concurrent_documents: std::env::var("MAX_CONCURRENT_DOCUMENTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|n: &usize| *n > 0)
                .unwrap_or(default.max_concurrent_documents),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
            rules_file: std::env::var("QUIZ_RULES_FILE").ok().or(default.rules_file),
            template_file: std::env::var("TEMPLATE_FILE").ok().or(default.template_file),
            page_title: std::env::var("PAGE_TITLE").unwrap_or(default.page_title),
            emit_json: std::env::var("EMIT_JSON").ok().and_then(|v| v.parse().ok()).unwrap_or(default.emit_json),
        }
    }
}
