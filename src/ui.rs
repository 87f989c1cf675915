// src/ui.rs

use crate::constants;
use colored::*;
use log::Level;
use std::fmt::Display;

pub const CONSOLE_TARGET: &str = "console";

/// 控制台状态行前缀
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Error,
    Info,
    Warn,
}

impl Status {
    pub fn symbol(self) -> ColoredString {
        match self {
            Status::Ok => "[OK]".green(),
            Status::Error => "[X]".red(),
            Status::Info => "[i]".cyan(),
            Status::Warn => "[!]".yellow(),
        }
    }

    pub fn level(self) -> Level {
        match self {
            Status::Ok | Status::Info => Level::Info,
            Status::Warn => Level::Warn,
            Status::Error => Level::Error,
        }
    }
}

/// 所有面向用户的信息都写到标准输出，错误也不例外。
///
/// 同一条信息会以 `console` 为 target 写入日志，日志文件与屏幕内容一致。
pub fn status(kind: Status, message: impl Display) {
    log::log!(target: CONSOLE_TARGET, kind.level(), "{}", message);
    println!("{} {}", kind.symbol(), message);
}

pub fn print_header(title: &str) {
    println!("\n{}", "═".repeat(constants::UI_WIDTH));
    println!(" {}", title.cyan().bold());
    println!("{}", "═".repeat(constants::UI_WIDTH));
}

pub fn print_sub_header(title: &str) {
    println!("\n--- {} ---", title.bold());
}
