//! 提交流程 - 流程层
//!
//! 核心职责：驱动一次"上传压缩包 → 等待匹配 → 写入结果"的完整流程
//!
//! 状态转换：
//! 1. Idle --submit(无效)--> Idle（设置错误提示）
//! 2. Idle/Succeeded/Failed --submit(有效)--> Submitting（进度 30）
//! 3. Submitting --收到响应--> 进度 70
//! 4. 2xx --> Succeeded（进度 100） / 非 2xx 或传输错误 --> Failed
//!
//! 每次提交都带一个递增的编号，只有最新一次提交的响应会被写入状态。

use crate::clients::{MatchService, RawResponse};
use crate::error::AppError;
use crate::models::{ArchiveFile, MatchResponse};
use crate::services::ResultStore;
use crate::state::{ClientState, ClientStateHandle, ProgressLevel, SubmissionState};
use crate::utils::logging::truncate_text;
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 一次提交的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 输入不完整，没有发出请求
    Rejected,
    /// 成功，附带记录条数
    Succeeded(usize),
    /// 失败，附带展示给用户的错误文本
    Failed(String),
    /// 响应到达前已经开始了更新的提交，本次响应被丢弃
    Superseded,
}

/// 已通过校验、即将发出的请求
struct PendingSubmission {
    generation: u64,
    archive: ArchiveFile,
    job_description: String,
}

/// 提交控制器
///
/// - 错误不会抛出组件边界，全部落到状态里的 `error`
/// - 不设超时、不支持取消
/// - 允许重复提交，旧提交的响应按编号丢弃
pub struct SubmissionController {
    service: Arc<dyn MatchService>,
    state: ClientStateHandle,
}

impl SubmissionController {
    pub fn new(service: Arc<dyn MatchService>, state: ClientStateHandle) -> Self {
        Self { service, state }
    }

    /// 用当前收集到的输入发起一次提交
    pub async fn submit(&self) -> SubmitOutcome {
        let Some(pending) = self.begin() else {
            return SubmitOutcome::Rejected;
        };

        info!(
            "🔍 提交 #{}: {} | 职位描述: {}",
            pending.generation,
            pending.archive.name(),
            truncate_text(pending.job_description.trim(), 60)
        );

        let outcome = match self
            .service
            .match_resumes(&pending.archive, &pending.job_description)
            .await
        {
            Ok(response) => self.handle_response(pending.generation, response),
            Err(e) => self.fail(pending.generation, e),
        };

        crate::utils::logging::log_submission_outcome(pending.generation, &outcome);
        outcome
    }

    /// 校验并进入 Submitting，整个过程是一次状态替换
    fn begin(&self) -> Option<PendingSubmission> {
        let mut pending = None;

        self.state.transition(|s| match s.input.validated() {
            Ok((archive, job_description)) => {
                let generation = s.generation + 1;
                pending = Some(PendingSubmission {
                    generation,
                    archive: archive.clone(),
                    job_description: job_description.to_string(),
                });
                Some(ClientState {
                    submission: SubmissionState::Submitting,
                    progress: ProgressLevel::Uploading,
                    error: None,
                    generation,
                    ..ResultStore::cleared(s)
                })
            }
            Err(err) => {
                warn!("⚠️ 输入不完整，未发出请求");
                Some(ClientState {
                    error: Some(err.to_string()),
                    ..s.clone()
                })
            }
        });

        pending
    }

    fn handle_response(&self, generation: u64, response: RawResponse) -> SubmitOutcome {
        if !self.apply(generation, |s| ClientState {
            progress: ProgressLevel::Received,
            ..s.clone()
        }) {
            return SubmitOutcome::Superseded;
        }

        let body: JsonValue = match serde_json::from_slice(&response.body) {
            Ok(body) => body,
            Err(e) => return self.fail(generation, e.into()),
        };

        if !response.is_success() {
            let message = body
                .get("error")
                .and_then(JsonValue::as_str)
                .map(str::to_string);
            return self.fail(generation, AppError::service_rejected(response.status, message));
        }

        // `null` 读不出任何字段，交给反序列化报格式错误
        let parsed = if body.is_object() || body.is_null() {
            match serde_json::from_value::<MatchResponse>(body) {
                Ok(parsed) => parsed,
                Err(e) => return self.fail(generation, e.into()),
            }
        } else {
            MatchResponse::default()
        };

        if let Some(message) = &parsed.message {
            debug!("服务端消息: {}", message);
        }

        let report = Arc::new(parsed.results.unwrap_or_default());
        let count = report.len();

        if self.apply(generation, |s| ClientState {
            submission: SubmissionState::Succeeded,
            progress: ProgressLevel::Complete,
            ..ResultStore::replaced(s, report)
        }) {
            SubmitOutcome::Succeeded(count)
        } else {
            SubmitOutcome::Superseded
        }
    }

    fn fail(&self, generation: u64, err: AppError) -> SubmitOutcome {
        let message = err.user_message();
        let error = Some(message.clone());

        if self.apply(generation, |s| ClientState {
            submission: SubmissionState::Failed,
            error,
            ..s.clone()
        }) {
            SubmitOutcome::Failed(message)
        } else {
            SubmitOutcome::Superseded
        }
    }

    /// 只在编号仍是最新时才写入
    fn apply<F>(&self, generation: u64, f: F) -> bool
    where
        F: FnOnce(&ClientState) -> ClientState,
    {
        let applied = self.state.transition(|s| {
            if s.generation == generation {
                Some(f(s))
            } else {
                None
            }
        });
        if !applied {
            debug!("丢弃过期响应: 提交 #{}", generation);
        }
        applied
    }
}
