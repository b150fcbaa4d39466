use crate::clients::{HttpMatchClient, MatchService};
use crate::config::Config;
use crate::error::AppResult;
use crate::models::{ExportFormat, FileCandidate};
use crate::render::{render_progress, render_report};
use crate::services::{ExportDispatcher, FileSaver, InputCollector, ResultStore};
use crate::state::{ClientState, ClientStateHandle, ProgressLevel};
use crate::utils::logging::{log_export_summary, log_startup};
use crate::workflow::{SubmissionController, SubmitOutcome};
use futures::future::join_all;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info, warn};

/// 一次运行的输入
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub zip_path: PathBuf,
    pub job_description: String,
    pub exports: Vec<ExportFormat>,
}

/// 一次运行的结果
#[derive(Debug)]
pub struct RunSummary {
    pub outcome: SubmitOutcome,
    pub exported: Vec<PathBuf>,
    pub failed_exports: usize,
    /// 进度视图实际画出的进度，按先后顺序
    pub progress: Vec<ProgressLevel>,
}

impl RunSummary {
    pub fn succeeded(&self) -> bool {
        matches!(self.outcome, SubmitOutcome::Succeeded(_))
    }
}

/// 应用主结构
pub struct App {
    state: ClientStateHandle,
    collector: InputCollector,
    controller: SubmissionController,
    store: ResultStore,
    exporter: ExportDispatcher,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> AppResult<Self> {
        log_startup(&config);
        let service: Arc<dyn MatchService> = Arc::new(HttpMatchClient::new(&config)?);
        Ok(Self::with_service(&config, service))
    }

    /// 使用指定的匹配服务组装应用
    pub fn with_service(config: &Config, service: Arc<dyn MatchService>) -> Self {
        let state = ClientStateHandle::new();
        Self {
            collector: InputCollector::new(state.clone()),
            controller: SubmissionController::new(service.clone(), state.clone()),
            store: ResultStore::new(state.clone()),
            exporter: ExportDispatcher::new(
                service,
                FileSaver::new(config.download_dir.clone()),
                state.clone(),
            ),
            state,
        }
    }

    pub fn state(&self) -> &ClientStateHandle {
        &self.state
    }

    /// 运行应用主逻辑：选文件 → 填描述 → 提交 → 展示 → 导出
    pub async fn run(&self, request: RunRequest) -> AppResult<RunSummary> {
        self.select_archive(&request.zip_path).await?;
        self.collector.set_job_description(request.job_description);

        let progress_task = self.spawn_progress_view();
        let outcome = self.controller.submit().await;
        let progress = if outcome == SubmitOutcome::Rejected {
            // 没有发出请求，进度视图等不到结束
            progress_task.abort();
            Vec::new()
        } else {
            progress_task.await.unwrap_or_default()
        };

        let snapshot = self.state.snapshot();
        print_banner(&snapshot);

        let mut summary = RunSummary {
            outcome,
            exported: Vec::new(),
            failed_exports: 0,
            progress,
        };

        if !snapshot.can_export() {
            if !request.exports.is_empty() {
                warn!("⚠️ 没有可导出的报告，跳过导出");
            }
            return Ok(summary);
        }

        if !request.exports.is_empty() {
            let report = self.store.snapshot();
            let results = join_all(
                request
                    .exports
                    .iter()
                    .map(|format| self.exporter.export_report(*format, &report)),
            )
            .await;

            for result in results {
                match result {
                    Ok(path) => summary.exported.push(path),
                    Err(_) => summary.failed_exports += 1,
                }
            }
            log_export_summary(summary.exported.len(), request.exports.len());
        }

        Ok(summary)
    }

    /// 读取压缩包并交给输入收集器
    ///
    /// 后缀不对只会留下错误提示，随后的提交会给出缺少输入的提示
    async fn select_archive(&self, path: &Path) -> AppResult<()> {
        let candidate = FileCandidate::load(path).await?;
        if let Err(e) = self.collector.select_file(Some(candidate)) {
            warn!("⚠️ {}: {}", path.display(), e);
        }
        Ok(())
    }

    /// 订阅状态变化，在进度改变时输出进度条
    ///
    /// 订阅发生在提交之前；看到本次提交结束后任务返回已画出的进度。
    /// 中间进度可能被合并，但最终进度一定会画出来。
    fn spawn_progress_view(&self) -> tokio::task::JoinHandle<Vec<ProgressLevel>> {
        let mut rx = self.state.subscribe();
        let started_from = rx.borrow_and_update().generation;
        tokio::spawn(async move {
            let mut drawn: Vec<ProgressLevel> = Vec::new();
            while rx.changed().await.is_ok() {
                let (progress, settled) = {
                    let state = rx.borrow_and_update();
                    (
                        state.progress,
                        state.generation > started_from && !state.is_loading(),
                    )
                };
                if drawn.last() != Some(&progress) {
                    if let Some(bar) = render_progress(progress, 30) {
                        info!("{}", bar);
                        drawn.push(progress);
                    }
                }
                if settled {
                    break;
                }
            }
            drawn
        })
    }
}

/// 输出错误提示或报告表格
fn print_banner(state: &ClientState) {
    if let Some(message) = &state.error {
        error!("Error: {}", message);
    }
    if let Some(table) = render_report(&state.report) {
        println!("{}", table);
    }
}
