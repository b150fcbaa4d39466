//! 文件保存服务 - 业务能力层
//!
//! 只负责"把字节存成指定文件名"，不关心字节从哪来

use crate::error::{AppError, AppResult};
use std::path::PathBuf;
use tracing::debug;

/// 文件保存服务
pub struct FileSaver {
    download_dir: PathBuf,
}

impl FileSaver {
    pub fn new(download_dir: impl Into<PathBuf>) -> Self {
        Self {
            download_dir: download_dir.into(),
        }
    }

    /// 保存文件，已存在的同名文件会被覆盖
    ///
    /// # 返回
    /// 返回保存后的完整路径
    pub async fn save(&self, file_name: &str, bytes: &[u8]) -> AppResult<PathBuf> {
        tokio::fs::create_dir_all(&self.download_dir)
            .await
            .map_err(|e| AppError::file_write_failed(self.download_dir.display().to_string(), e))?;

        let path = self.download_dir.join(file_name);
        debug!("写入文件: {} ({} 字节)", path.display(), bytes.len());

        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| AppError::file_write_failed(path.display().to_string(), e))?;

        Ok(path)
    }
}
