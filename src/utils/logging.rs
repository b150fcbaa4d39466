/// 日志工具模块
///
/// 提供日志初始化和输出的辅助函数
use crate::config::Config;
use crate::workflow::SubmitOutcome;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 优先使用 `RUST_LOG`，否则默认 `info`，详细模式下为 `debug`
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 Resume Matcher 启动 - {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
    info!("🌐 匹配服务: {}", config.base_url);
    info!("📁 导出目录: {}", config.download_dir.display());
    info!("{}", "=".repeat(60));
}

/// 记录一次提交的结果
///
/// # 参数
/// - `generation`: 提交编号
/// - `outcome`: 提交结果
pub fn log_submission_outcome(generation: u64, outcome: &SubmitOutcome) {
    match outcome {
        SubmitOutcome::Rejected => warn!("⚠️ 提交 #{} 未发出: 输入不完整", generation),
        SubmitOutcome::Succeeded(count) => {
            info!("✅ 提交 #{} 完成，匹配到 {} 位候选人", generation, count)
        }
        SubmitOutcome::Failed(message) => warn!("❌ 提交 #{} 失败: {}", generation, message),
        SubmitOutcome::Superseded => info!("⏭ 提交 #{} 已被更新的提交取代", generation),
    }
}

/// 打印导出统计
///
/// # 参数
/// - `success`: 成功数量
/// - `total`: 总数
pub fn log_export_summary(success: usize, total: usize) {
    info!("{}", "─".repeat(60));
    info!("📄 导出完成: 成功 {}/{}", success, total);
    info!("{}", "─".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
