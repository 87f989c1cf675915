// src/summary/folder.rs

use crate::{constants::summary::CAPTION_FILE_NAME, error::*, utils};
use log::{debug, warn};
use std::{
    cmp::Ordering,
    fs,
    path::{Path, PathBuf},
};

/// 文案文件的读取状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Caption {
    /// 已去除首尾空白的原文
    Text(String),
    Missing,
    Unreadable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicFolder {
    pub name: String,
    pub path: PathBuf,
    pub caption: Caption,
    pub images: Vec<String>,
}

impl TopicFolder {
    pub fn load(path: &Path) -> AppResult<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let caption = read_caption(path);
        let images = list_images(path)?;
        debug!("文件夹 '{}': {} 张图片, 文案 {:?}", name, images.len(), caption_kind(&caption));
        Ok(Self {
            name,
            path: path.to_path_buf(),
            caption,
            images,
        })
    }
}

fn caption_kind(caption: &Caption) -> &'static str {
    match caption {
        Caption::Text(_) => "ok",
        Caption::Missing => "missing",
        Caption::Unreadable(_) => "unreadable",
    }
}

pub fn read_caption(dir: &Path) -> Caption {
    let path = dir.join(CAPTION_FILE_NAME);
    if !path.exists() {
        return Caption::Missing;
    }
    match fs::read_to_string(&path) {
        Ok(content) => Caption::Text(content.trim().to_string()),
        Err(e) => {
            warn!("读取文案 {} 失败: {}", path.display(), e);
            Caption::Unreadable(e.to_string())
        }
    }
}

/// 列出目录下的图片文件名 (不递归)，按字典序排序。
pub fn list_images(dir: &Path) -> AppResult<Vec<String>> {
    let mut images = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file()
            && utils::has_image_extension(&path)
            && let Some(name) = path.file_name()
        {
            images.push(name.to_string_lossy().into_owned());
        }
    }
    images.sort();
    Ok(images)
}

/// 以 `#` 开头的行 (忽略前导空白) 把第一个 `#` 转义为 `\#`，
/// 避免话题标签被渲染成标题。
pub fn escape_caption(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            if line.trim().starts_with('#') {
                line.replacen('#', r"\#", 1)
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// 有数字序号的文件夹按序号升序排在前面，其余排在最后；同序号或无序号时按名称排序。
pub fn compare_folder_names(a: &str, b: &str) -> Ordering {
    folder_sort_key(a).cmp(&folder_sort_key(b))
}

pub fn folder_sort_key(name: &str) -> (bool, u64, &str) {
    match utils::leading_number(name) {
        Some(n) => (false, n, name),
        None => (true, 0, name),
    }
}
