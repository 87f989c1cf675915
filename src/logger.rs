// src/logger.rs

use crate::{cli::LogLevel, constants, ui::CONSOLE_TARGET};
use std::{env, fs::File, path::PathBuf};

/// 日志只写文件，`Off` 时完全不初始化。
///
/// 屏幕上的状态行以 `console` target 进入日志，与库内部的 debug/info 记录交错，
/// 因此文件里能看到用户当时看到的内容以及它前后发生了什么。
pub fn init_logger(level: LogLevel) {
    if level == LogLevel::Off {
        return;
    }
    let Some((file, path)) = open_first_writable(&log_file_candidates()) else {
        eprintln!("警告: 没有可写的日志文件位置，本次运行不记录日志。");
        return;
    };

    let result = fern::Dispatch::new()
        .level(level.into())
        .level_for("reqwest", log::LevelFilter::Warn)
        .level_for("hyper_util", log::LevelFilter::Warn)
        .format(|out, message, record| {
            let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
            if record.target() == CONSOLE_TARGET {
                out.finish(format_args!("[{}] [{:<5}] > {}", timestamp, record.level(), message))
            } else {
                out.finish(format_args!(
                    "[{}] [{:<5}] [{}:{}] - {}",
                    timestamp,
                    record.level(),
                    record.target(),
                    record.line().unwrap_or(0),
                    message
                ))
            }
        })
        .chain(file)
        .apply();

    match result {
        Ok(()) => log::debug!("日志文件: {}", path.display()),
        Err(e) => eprintln!("警告: 日志系统初始化失败: {}", e),
    }
}

/// 依次尝试的日志位置：`~/.post-kit/post-kit.log`，然后是系统临时目录。
fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::with_capacity(2);
    if let Some(home) = dirs::home_dir() {
        candidates.push(
            home.join(constants::CONFIG_DIR_NAME)
                .join(constants::LOG_FILE_NAME),
        );
    }
    candidates.push(env::temp_dir().join(format!(
        "{}-{}",
        clap::crate_name!(),
        constants::LOG_FALLBACK_FILE_NAME
    )));
    candidates
}

fn open_first_writable(candidates: &[PathBuf]) -> Option<(File, PathBuf)> {
    for path in candidates {
        if let Some(dir) = path.parent() {
            // 目录创建失败时交给 log_file 报告具体原因
            let _ = std::fs::create_dir_all(dir);
        }
        match fern::log_file(path) {
            Ok(file) => return Some((file, path.clone())),
            Err(e) => eprintln!("警告: 无法打开日志文件 {}: {}", path.display(), e),
        }
    }
    None
}
