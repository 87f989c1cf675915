// src/cli.rs

use crate::constants;
use clap::{Parser, Subcommand, ValueEnum, crate_version};
use std::path::PathBuf;

/// 定义日志输出级别
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// 下载帖子配图，并把各话题文件夹的文案与图片整理成一份 Markdown 汇总
#[derive(Parser, Debug, Clone)]
#[command(version = crate_version!(), about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// 指定配置文件路径 (默认: ~/.post-kit/config.json)
    #[arg(long, value_name = "FILE", global = true, help_heading = "General")]
    pub config: Option<PathBuf>,
    /// (隐藏参数) 设置日志文件的输出级别，用于调试
    #[arg(long, value_enum, default_value_t = LogLevel::Off, global = true, hide = true)]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// 递归查找 image_*_url.txt 文件并下载其中链接指向的图片
    Fetch {
        /// 要扫描的根目录
        #[arg(short, long, value_name = "DIR", default_value_os_t = PathBuf::from(constants::DEFAULT_FETCH_DIR))]
        root: PathBuf,
    },
    /// 汇总各子文件夹的文案与图片，生成一份 Markdown 文档
    Summary {
        /// 包含话题子文件夹的根目录
        #[arg(short, long, value_name = "DIR", default_value_os_t = PathBuf::from(constants::DEFAULT_OUTPUTS_DIR))]
        root: PathBuf,
        /// 生成的 Markdown 文件路径
        #[arg(short, long, value_name = "FILE", default_value_os_t = PathBuf::from(constants::DEFAULT_SUMMARY_FILE))]
        output: PathBuf,
    },
}
