// src/fetcher/report.rs

use crate::ui::{self, Status};
use colored::*;
use log::info;
use std::collections::BTreeMap;

/// 一次扫描的结果统计
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchStats {
    pub total: usize,
    pub success: usize,
    pub skipped: usize,
    pub failed: usize,
}

#[derive(Debug, Default)]
pub struct FetchReport {
    stats: FetchStats,
    skipped: Vec<(String, String)>,
    failed: Vec<(String, String)>,
}

impl FetchReport {
    pub fn new(total: usize) -> Self {
        Self {
            stats: FetchStats {
                total,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn record_success(&mut self) {
        self.stats.success += 1;
    }

    pub fn record_skip(&mut self, file: &str, reason: &str) {
        self.stats.skipped += 1;
        self.skipped.push((file.to_string(), reason.to_string()));
    }

    pub fn record_failure(&mut self, file: &str, reason: &str) {
        self.stats.failed += 1;
        self.failed.push((file.to_string(), reason.to_string()));
    }

    pub fn stats(&self) -> &FetchStats {
        &self.stats
    }

    pub fn failures(&self) -> &[(String, String)] {
        &self.failed
    }

    pub fn print(&self) {
        let stats = &self.stats;
        info!(
            "下载报告: Total={}, Success={}, Skipped={}, Failed={}",
            stats.total, stats.success, stats.skipped, stats.failed
        );

        if !self.skipped.is_empty() || !self.failed.is_empty() {
            ui::print_sub_header("下载详情报告");
            if !self.skipped.is_empty() {
                println!("\n{} 跳过的文件 ({}个):", Status::Info.symbol(), stats.skipped);
                print_grouped(&self.skipped, |s| s.cyan());
            }
            if !self.failed.is_empty() {
                println!("\n{} 失败的文件 ({}个):", Status::Error.symbol(), stats.failed);
                print_grouped(&self.failed, |s| s.red());
            }
        }

        ui::print_sub_header("任务总结");
        if stats.total == 0 {
            ui::status(Status::Info, "没有找到任何图片链接文件。");
        } else if stats.failed == 0 {
            ui::status(
                Status::Ok,
                format!("所有 {} 个任务均已完成 ({} 个已跳过)。", stats.total, stats.skipped),
            );
        } else {
            println!(
                "{} | {} | {}",
                format!("成功: {}", stats.success).green(),
                format!("失败: {}", stats.failed).red(),
                format!("跳过: {}", stats.skipped).yellow()
            );
        }
    }
}

fn print_grouped(items: &[(String, String)], color_fn: fn(ColoredString) -> ColoredString) {
    let mut grouped: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for (file, reason) in items {
        grouped.entry(reason.as_str()).or_default().push(file.as_str());
    }
    for (reason, mut files) in grouped {
        println!("  - {}", color_fn(format!("原因: {}", reason).into()));
        files.sort();
        for file in files {
            println!("    - {}", file);
        }
    }
}
