/// 匹配服务 API 客户端
///
/// 封装与匹配服务及导出服务的所有 HTTP 交互
use crate::config::Config;
use crate::error::{AppError, AppResult, ExportError};
use crate::models::{ArchiveFile, ErrorResponse, ExportFormat, ExportRequest, MatchRecord};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

/// 匹配接口路径
pub const MATCH_ENDPOINT: &str = "api/match_resumes";

/// 未解析的 HTTP 响应
///
/// 解析放在调用方，调用方需要在拿到响应之后、解析之前更新进度。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// 远程匹配服务
#[async_trait]
pub trait MatchService: Send + Sync {
    /// 上传压缩包和职位描述
    async fn match_resumes(&self, archive: &ArchiveFile, job_description: &str) -> AppResult<RawResponse>;

    /// 请求导出文档，返回文档字节
    async fn export_report(&self, format: ExportFormat, report: &[MatchRecord]) -> AppResult<Vec<u8>>;
}

/// 基于 reqwest 的匹配服务客户端
pub struct HttpMatchClient {
    client: Client,
    config: Config,
}

impl HttpMatchClient {
    /// 创建新的客户端
    pub fn new(config: &Config) -> AppResult<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| AppError::request_failed(config.base_url.clone(), e))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// 构建 multipart 请求体
    fn build_match_form(archive: &ArchiveFile, job_description: &str) -> AppResult<Form> {
        let zip_part = Part::bytes(archive.content().to_vec())
            .file_name(archive.name().to_string())
            .mime_str("application/zip")?;

        Ok(Form::new()
            .part("resume_zip", zip_part)
            .text("job_description", job_description.to_string()))
    }
}

#[async_trait]
impl MatchService for HttpMatchClient {
    async fn match_resumes(&self, archive: &ArchiveFile, job_description: &str) -> AppResult<RawResponse> {
        let url = self.config.endpoint(MATCH_ENDPOINT);
        let form = Self::build_match_form(archive, job_description)?;

        info!("📤 上传简历压缩包: {} ({} 字节)", archive.name(), archive.len());
        if archive.is_empty() {
            warn!("⚠️ 压缩包内容为空，仍按原样上传: {}", archive.name());
        }
        debug!("职位描述长度: {} 字符", job_description.chars().count());

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::request_failed(url.clone(), e))?;

        let status = response.status().as_u16();
        debug!("匹配接口响应状态: {}", status);

        let body = response
            .bytes()
            .await
            .map_err(|e| AppError::request_failed(url.clone(), e))?;

        Ok(RawResponse::new(status, body.to_vec()))
    }

    async fn export_report(&self, format: ExportFormat, report: &[MatchRecord]) -> AppResult<Vec<u8>> {
        let url = self.config.endpoint(format.endpoint());
        let request_failed = |source| {
            AppError::Export(ExportError::RequestFailed {
                format: format.to_string(),
                source,
            })
        };

        info!("📄 请求导出 {}，共 {} 条记录", format, report.len());

        let response = self
            .client
            .post(&url)
            .json(&ExportRequest { results: report })
            .send()
            .await
            .map_err(request_failed)?;

        let status = response.status();
        let body = response.bytes().await.map_err(request_failed)?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorResponse>(&body)
                .ok()
                .and_then(|e| e.error);
            warn!("⚠️ {} 导出失败，状态码 {}: {:?}", format, status, message);
            return Err(AppError::Export(ExportError::Rejected {
                format: format.to_string(),
                status: status.as_u16(),
                message,
            }));
        }

        debug!("{} 导出返回 {} 字节", format, body.len());
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_response_success_range() {
        assert!(RawResponse::new(200, vec![]).is_success());
        assert!(RawResponse::new(204, vec![]).is_success());
        assert!(!RawResponse::new(199, vec![]).is_success());
        assert!(!RawResponse::new(400, vec![]).is_success());
        assert!(!RawResponse::new(500, vec![]).is_success());
    }

    #[test]
    fn test_client_builds_with_timeout() {
        let config = Config {
            request_timeout_secs: Some(5),
            ..Config::default()
        };
        assert!(HttpMatchClient::new(&config).is_ok());
    }
}
