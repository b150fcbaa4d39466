use crate::error::{AppError, AppResult, ConfigError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 匹配服务地址（不带结尾的 `/`）
    pub base_url: String,
    /// 导出文件的保存目录
    pub download_dir: PathBuf,
    /// 请求超时（秒），默认不设超时
    pub request_timeout_secs: Option<u64>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            download_dir: PathBuf::from("."),
            request_timeout_secs: None,
            verbose_logging: false,
        }
    }
}

/// TOML 配置文件的结构，所有字段都可省略
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    base_url: Option<String>,
    download_dir: Option<PathBuf>,
    request_timeout_secs: Option<u64>,
    verbose_logging: Option<bool>,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        Self::default().with_env_overrides()
    }

    /// 从 TOML 文件加载，未写的字段取默认值
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;
        Self::from_toml_str(&content).map_err(|e| match e {
            AppError::Config(ConfigError::TomlParseFailed { source, .. }) => {
                AppError::Config(ConfigError::TomlParseFailed {
                    path: path.display().to_string(),
                    source,
                })
            }
            other => other,
        })
    }

    pub fn from_toml_str(content: &str) -> AppResult<Self> {
        let file: FileConfig = toml::from_str(content)?;
        let default = Self::default();
        Ok(Self {
            base_url: file.base_url.unwrap_or(default.base_url),
            download_dir: file.download_dir.unwrap_or(default.download_dir),
            request_timeout_secs: file.request_timeout_secs.or(default.request_timeout_secs),
            verbose_logging: file.verbose_logging.unwrap_or(default.verbose_logging),
        }
        .normalized())
    }

    /// 用环境变量覆盖当前配置
    pub fn with_env_overrides(self) -> AppResult<Self> {
        Ok(Self {
            base_url: std::env::var("MATCHER_BASE_URL").unwrap_or(self.base_url),
            download_dir: std::env::var("MATCHER_DOWNLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or(self.download_dir),
            request_timeout_secs: match std::env::var("MATCHER_REQUEST_TIMEOUT_SECS") {
                Ok(v) => Some(parse_env("MATCHER_REQUEST_TIMEOUT_SECS", &v, "u64")?),
                Err(_) => self.request_timeout_secs,
            },
            verbose_logging: match std::env::var("VERBOSE_LOGGING") {
                Ok(v) => parse_env("VERBOSE_LOGGING", &v, "bool")?,
                Err(_) => self.verbose_logging,
            },
        }
        .normalized())
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self.normalized()
    }

    /// 拼接完整的接口地址
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn normalized(mut self) -> Self {
        let trimmed = self.base_url.trim_end_matches('/').len();
        self.base_url.truncate(trimmed);
        self
    }
}

fn parse_env<T: std::str::FromStr>(var_name: &str, value: &str, expected_type: &str) -> AppResult<T> {
    value.trim().parse().map_err(|_| {
        AppError::Config(ConfigError::EnvVarParseFailed {
            var_name: var_name.to_string(),
            value: value.to_string(),
            expected_type: expected_type.to_string(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_service() {
        let config = Config::default();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.request_timeout_secs, None);
        assert_eq!(
            config.endpoint("/api/match_resumes"),
            "http://localhost:5000/api/match_resumes"
        );
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = Config::default().with_base_url("http://matcher.internal:8080///");
        assert_eq!(
            config.endpoint("api/export/pdf"),
            "http://matcher.internal:8080/api/export/pdf"
        );
    }

    #[test]
    fn test_toml_partial_file_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            base_url = "http://10.0.0.5:5000/"
            request_timeout_secs = 30
            "#,
        )
        .unwrap();
        assert_eq!(config.base_url, "http://10.0.0.5:5000");
        assert_eq!(config.request_timeout_secs, Some(30));
        assert_eq!(config.download_dir, PathBuf::from("."));
        assert!(!config.verbose_logging);
    }

    #[test]
    fn test_toml_bad_type_is_config_error() {
        let err = Config::from_toml_str("verbose_logging = \"yes\"").unwrap_err();
        assert!(matches!(err, AppError::Config(ConfigError::TomlParseFailed { .. })));
    }

    #[test]
    fn test_env_overrides_win_over_file_values() {
        std::env::set_var("MATCHER_BASE_URL", "http://matcher.test:9000/");
        std::env::set_var("MATCHER_REQUEST_TIMEOUT_SECS", " 45 ");
        let config = Config::from_toml_str(
            r#"
            base_url = "http://10.0.0.5:5000"
            request_timeout_secs = 5
            "#,
        )
        .unwrap()
        .with_env_overrides()
        .unwrap();
        assert_eq!(config.base_url, "http://matcher.test:9000");
        assert_eq!(config.request_timeout_secs, Some(45));

        std::env::set_var("MATCHER_REQUEST_TIMEOUT_SECS", "soon");
        let err = Config::default().with_env_overrides().unwrap_err();
        assert!(matches!(
            err,
            AppError::Config(ConfigError::EnvVarParseFailed { ref var_name, .. })
                if var_name == "MATCHER_REQUEST_TIMEOUT_SECS"
        ));

        std::env::remove_var("MATCHER_BASE_URL");
        std::env::remove_var("MATCHER_REQUEST_TIMEOUT_SECS");
    }

    #[test]
    fn test_parse_env_reports_variable() {
        let err = parse_env::<u64>("MATCHER_REQUEST_TIMEOUT_SECS", "soon", "u64").unwrap_err();
        assert!(err.to_string().contains("MATCHER_REQUEST_TIMEOUT_SECS"));
    }
}
