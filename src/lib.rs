// src/lib.rs

pub mod cli;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod fetcher;
pub mod logger;
pub mod summary;
pub mod ui;
pub mod utils;

use crate::{
    cli::{Cli, Command},
    client::HttpClient,
    config::AppConfig,
    error::{AppError, AppResult},
    fetcher::ImageFetcher,
    ui::Status,
};
use log::{debug, info};
use std::path::Path;

/// 库的公共入口点，由 `main.rs` 调用
pub async fn run_from_cli(args: &Cli) -> AppResult<()> {
    debug!("CLI 参数: {:?}", args);
    match &args.command {
        Command::Fetch { root } => {
            let config = AppConfig::load(args.config.as_deref());
            debug!("加载的应用配置: {:?}", config);
            run_fetch(&config, root).await
        }
        Command::Summary { root, output } => run_summary(root, output),
    }
}

pub async fn run_fetch(config: &AppConfig, root: &Path) -> AppResult<()> {
    let client = HttpClient::new(config)?;
    ui::print_header(&format!("下载图片: {}", root.display()));

    match ImageFetcher::new(client).run(root).await {
        Ok(report) => {
            report.print();
            Ok(())
        }
        Err(e @ AppError::RootNotFound(_)) => {
            ui::status(Status::Error, format!("错误: {}。", e));
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// 汇总失败只做报告，不视为程序错误。
pub fn run_summary(root: &Path, output: &Path) -> AppResult<()> {
    ui::print_header(&format!("生成汇总文档: {}", root.display()));

    match summary::generate_summary(root, output) {
        Ok(outcome) => {
            info!("汇总完成: {} 个文件夹 -> {}", outcome.sections, outcome.output.display());
            ui::status(
                Status::Ok,
                format!("成功生成汇总文档: {}", outcome.output.display()),
            );
        }
        Err(e @ AppError::RootNotFound(_)) => {
            ui::status(Status::Error, format!("错误: {}。", e));
        }
        Err(e) => ui::status(Status::Error, e),
    }
    Ok(())
}
