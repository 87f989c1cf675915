// src/summary/mod.rs

mod folder;
mod render;

pub use folder::{
    Caption, TopicFolder, compare_folder_names, escape_caption, folder_sort_key, list_images,
    read_caption,
};
pub use render::render_document;

use crate::{
    error::*,
    ui::{self, Status},
};
use log::info;
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryOutcome {
    pub output: PathBuf,
    pub sections: usize,
}

/// 只看 `root` 的直接子目录，不递归。
///
/// 某个文件夹无法列出内容时给出警告并跳过，不影响其余文件夹。
pub fn scan_topics(root: &Path) -> AppResult<Vec<TopicFolder>> {
    if !root.is_dir() {
        return Err(AppError::RootNotFound(root.to_path_buf()));
    }

    let mut dirs = Vec::new();
    for entry in fs::read_dir(root)? {
        let path = entry?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }

    let mut topics = Vec::with_capacity(dirs.len());
    for dir in dirs {
        match TopicFolder::load(&dir) {
            Ok(topic) => topics.push(topic),
            Err(e) => {
                ui::status(Status::Warn, format!("读取文件夹 {} 失败，已跳过: {}", dir.display(), e));
            }
        }
    }
    topics.sort_by(|a, b| compare_folder_names(&a.name, &b.name));
    Ok(topics)
}

/// 图片引用里使用的根目录名，例如 `Outputs`
pub fn root_display_name(root: &Path) -> String {
    root.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .or_else(|| {
            dunce::canonicalize(root)
                .ok()
                .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        })
        .unwrap_or_default()
}

pub fn generate_summary(root: &Path, output: &Path) -> AppResult<SummaryOutcome> {
    let topics = scan_topics(root)?;
    info!("在 {} 下找到 {} 个话题文件夹", root.display(), topics.len());

    let document = render_document(&root_display_name(root), &topics);
    fs::write(output, document).map_err(|source| AppError::OutputWrite {
        path: output.to_path_buf(),
        source,
    })?;

    Ok(SummaryOutcome {
        output: output.to_path_buf(),
        sections: topics.len(),
    })
}
