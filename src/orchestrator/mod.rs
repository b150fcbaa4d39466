//! 编排层（Orchestration Layer）
//!
//! 持有状态句柄和所有组件，把"选文件 → 填描述 → 提交 → 展示 → 导出"串起来。
//! 本层不做业务判断，只做调度和输出。
//!
//! ```text
//! orchestrator::App
//!     ↓
//! workflow::SubmissionController
//!     ↓
//! services (InputCollector / ResultStore / ExportDispatcher / FileSaver)
//!     ↓
//! clients (MatchService)
//! ```

pub mod app;

pub use app::{App, RunRequest, RunSummary};
