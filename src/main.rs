use anyhow::{Context, Result};
use clap::Parser;
use resume_matcher::utils::logging;
use resume_matcher::{App, Config, ExportFormat, RunRequest};
use std::path::PathBuf;

/// 提交简历压缩包和职位描述，生成匹配报告
#[derive(Debug, Parser)]
#[command(name = "resume-matcher", version)]
struct Cli {
    /// 简历压缩包（.zip）
    #[arg(long)]
    zip: PathBuf,

    /// 职位描述原文
    #[arg(long, conflicts_with = "jd_file")]
    jd: Option<String>,

    /// 从文件读取职位描述
    #[arg(long)]
    jd_file: Option<PathBuf>,

    /// 导出格式，可重复：excel / pdf
    #[arg(long = "export")]
    exports: Vec<ExportFormat>,

    /// TOML 配置文件
    #[arg(long)]
    config: Option<PathBuf>,

    /// 覆盖匹配服务地址
    #[arg(long)]
    base_url: Option<String>,

    /// 覆盖导出目录
    #[arg(long)]
    download_dir: Option<PathBuf>,

    /// 显示详细日志
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置：文件 → 环境变量 → 命令行
    let mut config = match &cli.config {
        Some(path) => Config::from_toml_file(path)?,
        None => Config::default(),
    }
    .with_env_overrides()?;
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }
    if let Some(dir) = cli.download_dir {
        config.download_dir = dir;
    }
    config.verbose_logging |= cli.verbose;

    // 初始化日志
    logging::init(config.verbose_logging);

    let job_description = match (cli.jd, cli.jd_file) {
        (Some(text), _) => text,
        (None, Some(path)) => tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("无法读取职位描述文件: {}", path.display()))?,
        (None, None) => String::new(),
    };

    let app = App::initialize(config)?;
    let summary = app
        .run(RunRequest {
            zip_path: cli.zip,
            job_description,
            exports: cli.exports,
        })
        .await?;

    if !summary.succeeded() {
        std::process::exit(1);
    }

    Ok(())
}
