use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 单个候选人的匹配结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub candidate_name: String,
    pub email: String,
    /// 0 到 100
    pub match_percentage: f64,
    /// 服务端附带的原始文件名，PDF 导出会用到
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

impl MatchRecord {
    pub fn new(candidate_name: impl Into<String>, email: impl Into<String>, match_percentage: f64) -> Self {
        Self {
            candidate_name: candidate_name.into(),
            email: email.into(),
            match_percentage,
            file_name: None,
        }
    }

    /// 两位小数加百分号，如 `87.50%`
    pub fn display_percentage(&self) -> String {
        format!("{:.2}%", self.match_percentage)
    }
}

/// 匹配报告，顺序即服务端返回顺序
pub type MatchReport = Vec<MatchRecord>;

/// 匹配接口成功时的响应体
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchResponse {
    #[serde(default)]
    pub results: Option<MatchReport>,
    #[serde(default)]
    pub message: Option<String>,
}

/// 匹配接口失败时的响应体
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
}

/// 导出请求体
#[derive(Debug, Serialize)]
pub struct ExportRequest<'a> {
    pub results: &'a [MatchRecord],
}

/// 导出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Excel,
    Pdf,
}

impl ExportFormat {
    /// 导出接口路径
    pub fn endpoint(&self) -> &'static str {
        match self {
            ExportFormat::Excel => "api/export/excel",
            ExportFormat::Pdf => "api/export/pdf",
        }
    }

    /// 本地保存使用的固定文件名
    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Excel => "match_report.xlsx",
            ExportFormat::Pdf => "match_report.pdf",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Excel => write!(f, "excel"),
            ExportFormat::Pdf => write!(f, "pdf"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "pdf" => Ok(ExportFormat::Pdf),
            other => Err(format!("未知的导出格式: {}", other)),
        }
    }
}
