//! 客户端状态容器
//!
//! 整个界面状态是一个不可变的 [`ClientState`]，每次状态变化都整体替换。
//! 替换在 `watch` 通道的锁内完成，观察者只会看到完整的旧状态或新状态。

use crate::models::{ExportFormat, MatchReport, UploadInput};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;

/// 提交状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// 粗粒度的提交进度
///
/// 同一次提交内只增不减，不反映已传输的字节数。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum ProgressLevel {
    /// 还没有提交
    #[default]
    Zero,
    /// 请求已发出
    Uploading,
    /// 收到响应
    Received,
    /// 结果已写入
    Complete,
}

impl ProgressLevel {
    pub fn percent(&self) -> u8 {
        match self {
            ProgressLevel::Zero => 0,
            ProgressLevel::Uploading => 30,
            ProgressLevel::Received => 70,
            ProgressLevel::Complete => 100,
        }
    }

    pub fn is_visible(&self) -> bool {
        *self != ProgressLevel::Zero
    }
}

impl fmt::Display for ProgressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

/// 界面状态快照
#[derive(Debug, Clone, Default)]
pub struct ClientState {
    pub input: UploadInput,
    pub submission: SubmissionState,
    pub progress: ProgressLevel,
    pub report: Arc<MatchReport>,
    /// 提交相关的唯一错误提示
    pub error: Option<String>,
    /// 导出错误按格式单独存放，不占用 `error`
    pub export_errors: HashMap<ExportFormat, String>,
    /// 最近一次开始的提交编号
    pub generation: u64,
}

impl ClientState {
    pub fn is_loading(&self) -> bool {
        self.submission == SubmissionState::Submitting
    }

    /// 只有存在报告时才提供导出
    pub fn can_export(&self) -> bool {
        !self.report.is_empty()
    }
}

/// 状态句柄，可在各组件之间克隆共享
#[derive(Debug, Clone)]
pub struct ClientStateHandle {
    tx: Arc<watch::Sender<ClientState>>,
}

impl ClientStateHandle {
    pub fn new() -> Self {
        Self::with_state(ClientState::default())
    }

    pub fn with_state(state: ClientState) -> Self {
        let (tx, _rx) = watch::channel(state);
        Self { tx: Arc::new(tx) }
    }

    pub fn snapshot(&self) -> ClientState {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ClientState> {
        self.tx.subscribe()
    }

    /// 基于当前状态计算下一个状态并整体替换
    ///
    /// 闭包返回 `None` 表示不变更，返回值表示是否发生了替换。
    pub fn transition<F>(&self, f: F) -> bool
    where
        F: FnOnce(&ClientState) -> Option<ClientState>,
    {
        self.tx.send_if_modified(|state| match f(state) {
            Some(next) => {
                *state = next;
                true
            }
            None => false,
        })
    }
}

impl Default for ClientStateHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_percentages() {
        let levels = [
            ProgressLevel::Zero,
            ProgressLevel::Uploading,
            ProgressLevel::Received,
            ProgressLevel::Complete,
        ];
        let percents: Vec<u8> = levels.iter().map(|l| l.percent()).collect();
        assert_eq!(percents, vec![0, 30, 70, 100]);
        assert!(levels.windows(2).all(|w| w[0] < w[1]));
        assert!(!ProgressLevel::Zero.is_visible());
    }

    #[test]
    fn test_initial_state_is_idle() {
        let handle = ClientStateHandle::new();
        let state = handle.snapshot();
        assert_eq!(state.submission, SubmissionState::Idle);
        assert_eq!(state.progress, ProgressLevel::Zero);
        assert!(state.report.is_empty());
        assert!(state.error.is_none());
        assert_eq!(state.generation, 0);
    }

    #[test]
    fn test_transition_none_leaves_state_untouched() {
        let handle = ClientStateHandle::new();
        let mut rx = handle.subscribe();
        assert!(!handle.transition(|_| None));
        assert!(!rx.has_changed().unwrap());

        assert!(handle.transition(|s| Some(ClientState {
            error: Some("boom".into()),
            ..s.clone()
        })));
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().error.as_deref(), Some("boom"));
    }

    #[test]
    fn test_submitting_state_flags() {
        let state = ClientState {
            submission: SubmissionState::Submitting,
            ..Default::default()
        };
        assert!(state.is_loading());
        assert!(!state.can_export());
    }
}
