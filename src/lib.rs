//! # Resume Matcher
//!
//! 把简历压缩包和职位描述提交给远程匹配服务，展示匹配报告并导出为 Excel / PDF 的客户端
//!
//! ## 架构设计
//!
//! 本系统采用四层架构：
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - 唯一做网络请求的地方
//! - `MatchService` - 匹配与导出接口的抽象
//! - `HttpMatchClient` - 基于 reqwest 的实现
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，每个组件只有一种能力
//! - `InputCollector` - 收集压缩包和职位描述
//! - `ResultStore` - 保存最近一次的匹配报告
//! - `ExportDispatcher` - 导出报告
//! - `FileSaver` - 把字节保存为本地文件
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - `SubmissionController`，提交状态机
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/` - `App`，组装并驱动以上组件
//!
//! 所有组件共享一个 [`state::ClientStateHandle`]，状态整体替换、单向流动。

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod render;
pub mod services;
pub mod state;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{HttpMatchClient, MatchService, RawResponse};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{ExportFormat, FileCandidate, MatchRecord, MatchReport, UploadInput};
pub use orchestrator::{App, RunRequest, RunSummary};
pub use state::{ClientState, ClientStateHandle, ProgressLevel, SubmissionState};
pub use workflow::{SubmissionController, SubmitOutcome};
