// src/main.rs

use clap::Parser;
use post_kit::{
    cli::Cli,
    logger, run_from_cli,
    ui::{self, Status},
};

#[tokio::main]
async fn main() {
    // 为 Windows 终端启用 ANSI 颜色支持。
    #[cfg(windows)]
    {
        colored::control::set_virtual_terminal(true).ok();
    }

    let args = Cli::parse();
    logger::init_logger(args.log_level);

    // 运行期的错误只报告，不改变退出码
    if let Err(e) = run_from_cli(&args).await {
        ui::status(Status::Error, format!("程序执行出错: {}", e));
    }
}
