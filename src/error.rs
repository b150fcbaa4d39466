//! 错误类型
//!
//! 匹配流程中的错误分为四类：校验错误、服务错误、传输错误、导出错误。
//! 前三类最终都在提交控制器处终结，转成唯一的错误提示；导出错误有自己的槽位。

use thiserror::Error;

/// 选择了非 ZIP 文件时的提示
pub const MSG_ONLY_ZIP: &str = "Only ZIP files are allowed.";
/// 缺少文件或职位描述时的提示
pub const MSG_MISSING_INPUT: &str = "Please upload a ZIP file and paste a job description.";
/// 服务返回失败且没有 `error` 字段时的提示
pub const MSG_PROCESS_FAILED: &str = "Failed to process resumes.";
/// 传输错误没有具体信息时的兜底提示
pub const MSG_UNEXPECTED: &str = "An unexpected error occurred.";

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 本地校验错误，永远不会到达网络
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// 匹配服务返回的非 2xx 响应
    #[error(transparent)]
    Service(#[from] ServiceError),
    /// 网络失败或无法解析的响应
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// 导出失败
    #[error("导出失败: {0}")]
    Export(#[from] ExportError),
    /// 文件读写错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 输入校验错误
///
/// Display 文本就是展示给用户的提示，保持原样。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// 文件名不以 `.zip` 结尾，或者没有选中文件
    #[error("{}", MSG_ONLY_ZIP)]
    NotZip { name: Option<String> },
    /// 缺少压缩包或职位描述为空
    #[error("{}", MSG_MISSING_INPUT)]
    MissingInput,
}

/// 匹配服务返回的错误响应
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// 非 2xx 状态码，`message` 取自响应体的 `error` 字段
    #[error("{}", rejected_message(.message))]
    Rejected { status: u16, message: Option<String> },
}

/// 空的 `error` 字段与缺失同等对待
fn rejected_message(message: &Option<String>) -> &str {
    match message.as_deref() {
        Some(m) if !m.is_empty() => m,
        _ => MSG_PROCESS_FAILED,
    }
}

/// 传输层错误
#[derive(Debug, Error)]
pub enum TransportError {
    /// 请求没有拿到响应
    #[error("{source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// 响应体不是预期的 JSON
    #[error("{source}")]
    MalformedBody {
        #[source]
        source: serde_json::Error,
    },
}

/// 导出错误
#[derive(Debug, Error)]
pub enum ExportError {
    /// 导出请求没有拿到响应
    #[error("{format} 导出请求失败: {source}")]
    RequestFailed {
        format: String,
        #[source]
        source: reqwest::Error,
    },
    /// 导出服务返回非 2xx
    #[error("{format} 导出被拒绝 (状态码 {status}): {}", .message.as_deref().unwrap_or("无错误信息"))]
    Rejected {
        format: String,
        status: u16,
        message: Option<String>,
    },
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
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

// ========== 从常见错误类型转换 ==========

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        let endpoint = err.url().map(|u| u.to_string()).unwrap_or_default();
        AppError::Transport(TransportError::RequestFailed {
            endpoint,
            source: err,
        })
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Transport(TransportError::MalformedBody { source: err })
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::Config(ConfigError::TomlParseFailed {
            path: String::new(), // TOML错误不包含路径信息
            source: err,
        })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建API请求失败错误
    pub fn request_failed(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        AppError::Transport(TransportError::RequestFailed {
            endpoint: endpoint.into(),
            source,
        })
    }

    /// 创建服务拒绝错误
    pub fn service_rejected(status: u16, message: Option<String>) -> Self {
        AppError::Service(ServiceError::Rejected { status, message })
    }

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

    /// 展示给用户的错误文本
    ///
    /// 错误本身没有可读信息时退回到 [`MSG_UNEXPECTED`]。
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            MSG_UNEXPECTED.to_string()
        } else {
            message
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_are_user_facing() {
        assert_eq!(
            ValidationError::NotZip { name: Some("a.rar".into()) }.to_string(),
            "Only ZIP files are allowed."
        );
        assert_eq!(
            AppError::from(ValidationError::MissingInput).user_message(),
            "Please upload a ZIP file and paste a job description."
        );
    }

    #[test]
    fn test_service_error_falls_back_when_message_missing() {
        assert_eq!(
            AppError::service_rejected(500, None).user_message(),
            "Failed to process resumes."
        );
        assert_eq!(
            AppError::service_rejected(400, Some("No job description provided".into()))
                .user_message(),
            "No job description provided"
        );
    }

    #[test]
    fn test_empty_service_message_is_treated_as_missing() {
        assert_eq!(
            AppError::service_rejected(400, Some(String::new())).user_message(),
            MSG_PROCESS_FAILED
        );
    }

    #[test]
    fn test_malformed_body_keeps_parser_message() {
        let err: AppError = serde_json::from_str::<serde_json::Value>("<html>")
            .unwrap_err()
            .into();
        assert!(matches!(err, AppError::Transport(TransportError::MalformedBody { .. })));
        assert!(!err.user_message().is_empty());
    }
}
