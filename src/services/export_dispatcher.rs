//! 导出分发 - 业务能力层
//!
//! 把已有的匹配报告交给导出服务，拿到文档字节后保存到本地

use crate::clients::MatchService;
use crate::error::AppResult;
use crate::models::{ExportFormat, MatchRecord};
use crate::services::FileSaver;
use crate::state::{ClientState, ClientStateHandle};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

/// 导出分发器
///
/// 职责：
/// - 只读报告，从不写结果存储
/// - 不检查报告是否为空，由调用方决定何时提供导出
/// - 失败按格式写入 `export_errors`，不会占用提交的错误提示
/// - 成功只清掉同一格式之前的失败，并发的其他格式不受影响
pub struct ExportDispatcher {
    service: Arc<dyn MatchService>,
    saver: FileSaver,
    state: ClientStateHandle,
}

impl ExportDispatcher {
    pub fn new(service: Arc<dyn MatchService>, saver: FileSaver, state: ClientStateHandle) -> Self {
        Self {
            service,
            saver,
            state,
        }
    }

    /// 导出报告并保存为固定文件名
    ///
    /// # 返回
    /// 返回保存后的文件路径
    pub async fn export_report(&self, format: ExportFormat, report: &[MatchRecord]) -> AppResult<PathBuf> {
        let result = self.export_and_save(format, report).await;

        let export_error = match &result {
            Ok(path) => {
                info!("✓ {} 报告已保存: {}", format, path.display());
                None
            }
            Err(e) => {
                warn!("⚠️ {} 导出失败: {}", format, e);
                Some(e.user_message())
            }
        };
        self.state.transition(|s| {
            let mut export_errors = s.export_errors.clone();
            match export_error {
                Some(message) => export_errors.insert(format, message),
                None => export_errors.remove(&format),
            };
            Some(ClientState {
                export_errors,
                ..s.clone()
            })
        });

        result
    }

    async fn export_and_save(&self, format: ExportFormat, report: &[MatchRecord]) -> AppResult<PathBuf> {
        let bytes = self.service.export_report(format, report).await?;
        self.saver.save(format.file_name(), &bytes).await
    }
}
