//! 输入收集 - 业务能力层
//!
//! 只负责接收压缩包和职位描述，不发起任何网络请求

use crate::error::ValidationError;
use crate::models::{ArchiveFile, FileCandidate};
use crate::state::{ClientState, ClientStateHandle};
use tracing::{debug, warn};

/// 输入收集器
///
/// 职责：
/// - 文件选择器和拖放两种入口，行为一致
/// - 只按文件名后缀校验压缩包
/// - 编辑输入会清掉当前错误提示
/// - 提交进行中也允许编辑，但不会取消已发出的请求
pub struct InputCollector {
    state: ClientStateHandle,
}

impl InputCollector {
    pub fn new(state: ClientStateHandle) -> Self {
        Self { state }
    }

    /// 文件选择器给出的文件，`None` 表示没有选中任何文件
    pub fn select_file(&self, candidate: Option<FileCandidate>) -> Result<(), ValidationError> {
        let result = match candidate {
            Some(candidate) => ArchiveFile::try_from(candidate),
            None => Err(ValidationError::NotZip { name: None }),
        };

        match result {
            Ok(archive) => {
                debug!("✓ 已选择压缩包: {}", archive.name());
                self.state.transition(|s| {
                    let mut input = s.input.clone();
                    input.archive_file = Some(archive);
                    Some(ClientState {
                        input,
                        error: None,
                        ..s.clone()
                    })
                });
                Ok(())
            }
            Err(err) => {
                warn!("⚠️ 拒绝文件: {:?}", err);
                let message = err.to_string();
                self.state.transition(|s| {
                    Some(ClientState {
                        error: Some(message),
                        ..s.clone()
                    })
                });
                Err(err)
            }
        }
    }

    /// 拖放进来的文件，只取第一个
    pub fn drop_files(&self, files: Vec<FileCandidate>) -> Result<(), ValidationError> {
        self.select_file(files.into_iter().next())
    }

    /// 保存职位描述原文
    pub fn set_job_description(&self, text: impl Into<String>) {
        let text = text.into();
        self.state.transition(|s| {
            let mut input = s.input.clone();
            input.job_description = text;
            Some(ClientState {
                input,
                error: None,
                ..s.clone()
            })
        });
    }
}
