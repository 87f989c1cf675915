// src/utils.rs

use crate::constants;
use regex::Regex;
use std::{path::Path, sync::LazyLock};

// 第一个下划线之前必须全是数字；没有下划线时整个名字都要是数字
static LEADING_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)(?:_|$)").unwrap());

/// 解析文件夹名开头的序号，例如 `12_春季穿搭` -> 12。
pub fn leading_number(name: &str) -> Option<u64> {
    LEADING_NUMBER_RE
        .captures(name)
        .and_then(|caps| caps[1].parse().ok())
}

pub fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| constants::summary::IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// 用正斜杠拼接路径片段，保证生成的 Markdown 在各平台上一致。
pub fn join_url_path(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.replace('\\', "/"))
        .collect::<Vec<_>>()
        .join("/")
}
