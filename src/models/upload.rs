//! 上传输入
//!
//! 压缩包只按文件名后缀校验，内容不做检查。

use crate::error::{AppError, AppResult, ValidationError};
use std::path::Path;

/// 压缩包文件名必须带的后缀（区分大小写）
pub const ARCHIVE_SUFFIX: &str = ".zip";

/// 文件选择器或拖放给出的候选文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub name: String,
    pub content: Vec<u8>,
}

impl FileCandidate {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// 从磁盘读取文件，文件名取路径最后一段
    pub async fn load(path: &Path) -> AppResult<Self> {
        let content = tokio::fs::read(path)
            .await
            .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Ok(Self { name, content })
    }
}

/// 通过了后缀校验的压缩包
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveFile {
    name: String,
    content: Vec<u8>,
}

impl ArchiveFile {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl TryFrom<FileCandidate> for ArchiveFile {
    type Error = ValidationError;

    fn try_from(candidate: FileCandidate) -> Result<Self, Self::Error> {
        if candidate.name.ends_with(ARCHIVE_SUFFIX) {
            Ok(Self {
                name: candidate.name,
                content: candidate.content,
            })
        } else {
            Err(ValidationError::NotZip {
                name: Some(candidate.name),
            })
        }
    }
}

/// 用户收集到的输入
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadInput {
    pub archive_file: Option<ArchiveFile>,
    /// 原样保存，不做 trim
    pub job_description: String,
}

impl UploadInput {
    /// 校验并借出提交所需的两部分
    ///
    /// 要求有压缩包，且职位描述去掉空白后非空
    pub fn validated(&self) -> Result<(&ArchiveFile, &str), ValidationError> {
        match &self.archive_file {
            Some(archive) if !self.job_description.trim().is_empty() => {
                Ok((archive, self.job_description.as_str()))
            }
            _ => Err(ValidationError::MissingInput),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn archive(name: &str) -> ArchiveFile {
        ArchiveFile::try_from(FileCandidate::new(name, b"PK\x03\x04".to_vec())).unwrap()
    }

    #[test]
    fn test_suffix_match_is_case_sensitive() {
        assert!(ArchiveFile::try_from(FileCandidate::new("team.zip", vec![])).is_ok());
        assert!(ArchiveFile::try_from(FileCandidate::new("TEAM.ZIP", vec![])).is_err());
        assert!(ArchiveFile::try_from(FileCandidate::new("team.zip.pdf", vec![])).is_err());
        assert!(ArchiveFile::try_from(FileCandidate::new("zip", vec![])).is_err());
    }

    #[test]
    fn test_bare_suffix_is_accepted() {
        assert_eq!(archive(".zip").name(), ".zip");
    }

    #[test]
    fn test_whitespace_description_is_not_submittable() {
        let input = UploadInput {
            archive_file: Some(archive("team.zip")),
            job_description: " \n\t ".to_string(),
        };
        assert_eq!(input.validated().unwrap_err(), ValidationError::MissingInput);
    }

    #[test]
    fn test_missing_archive_is_not_submittable() {
        let input = UploadInput {
            archive_file: None,
            job_description: "Senior backend engineer".to_string(),
        };
        assert!(input.validated().is_err());
    }

    #[test]
    fn test_description_is_kept_verbatim() {
        let input = UploadInput {
            archive_file: Some(archive("team.zip")),
            job_description: "  Rust, tokio \n".to_string(),
        };
        let (file, text) = input.validated().unwrap();
        assert_eq!(file.name(), "team.zip");
        assert_eq!(text, "  Rust, tokio \n");
    }
}
