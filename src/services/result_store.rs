//! 结果存储 - 业务能力层
//!
//! 只保存最近一次成功取回的匹配报告，不做任何校验

use crate::models::MatchReport;
use crate::state::{ClientState, ClientStateHandle};
use std::sync::Arc;

/// 结果存储
///
/// 报告以 `Arc` 整体替换，读者拿到的永远是完整的一份。
#[derive(Clone)]
pub struct ResultStore {
    state: ClientStateHandle,
}

impl ResultStore {
    pub fn new(state: ClientStateHandle) -> Self {
        Self { state }
    }

    /// 覆盖当前报告
    pub fn replace(&self, report: MatchReport) {
        let report = Arc::new(report);
        self.state.transition(|s| Some(Self::replaced(s, report)));
    }

    /// 清空报告
    pub fn clear(&self) {
        self.state.transition(|s| Some(Self::cleared(s)));
    }

    /// 当前报告的只读引用
    pub fn snapshot(&self) -> Arc<MatchReport> {
        self.state.snapshot().report
    }

    /// 在状态转换内部使用：替换报告后的新状态
    pub(crate) fn replaced(state: &ClientState, report: Arc<MatchReport>) -> ClientState {
        ClientState {
            report,
            ..state.clone()
        }
    }

    /// 在状态转换内部使用：清空报告后的新状态
    pub(crate) fn cleared(state: &ClientState) -> ClientState {
        Self::replaced(state, Arc::new(MatchReport::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MatchRecord;

    #[test]
    fn test_replace_then_clear() {
        let store = ResultStore::new(ClientStateHandle::new());
        store.replace(vec![
            MatchRecord::new("Ada", "ada@x.com", 87.5),
            MatchRecord::new("Bo", "bo@x.com", 40.0),
        ]);
        let report = store.snapshot();
        assert_eq!(report.len(), 2);
        assert_eq!(report[0].candidate_name, "Ada");

        store.clear();
        assert!(store.snapshot().is_empty());
        // 之前拿到的快照不受影响
        assert_eq!(report.len(), 2);
    }
}
