// src/fetcher/mod.rs

mod descriptor;
mod report;

pub use descriptor::{Descriptor, extract_url, image_name_for};
pub use report::{FetchReport, FetchStats};

use crate::{
    client::HttpClient,
    error::*,
    ui::{self, Status},
};
use log::{debug, info, warn};
use std::{
    fs,
    io::Write,
    path::Path,
};
use walkdir::WalkDir;

/// 单个链接文件的处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Downloaded,
    EmptyDescriptor,
}

/// 递归收集 `root` 下的所有链接文件，按文件名排序以保证输出顺序稳定。
///
/// 无法访问的子目录只记日志，不影响其余部分的扫描。
pub fn find_descriptors(root: &Path) -> AppResult<Vec<Descriptor>> {
    if !root.is_dir() {
        return Err(AppError::RootNotFound(root.to_path_buf()));
    }

    let mut descriptors = Vec::new();
    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("遍历 {} 时跳过不可访问的条目: {}", root.display(), e);
                continue;
            }
        };
        if !entry.path().is_file() {
            continue;
        }
        if let Some(descriptor) = Descriptor::from_path(entry.path()) {
            debug!("发现链接文件: {}", descriptor.path.display());
            descriptors.push(descriptor);
        }
    }
    Ok(descriptors)
}

pub struct ImageFetcher {
    client: HttpClient,
}

impl ImageFetcher {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// 逐个处理链接文件。单个文件的失败只会被记录，扫描总会走完。
    pub async fn run(&self, root: &Path) -> AppResult<FetchReport> {
        let descriptors = find_descriptors(root)?;
        info!("在 {} 下找到 {} 个链接文件", root.display(), descriptors.len());

        let mut report = FetchReport::new(descriptors.len());
        for descriptor in &descriptors {
            let shown = descriptor.path.display().to_string();
            match self.process(descriptor).await {
                Ok(FetchOutcome::Downloaded) => report.record_success(),
                Ok(FetchOutcome::EmptyDescriptor) => {
                    ui::status(Status::Warn, format!("跳过空文件: {}", shown));
                    report.record_skip(&shown, "文件内容为空");
                }
                Err(e) => {
                    ui::status(Status::Error, format!("处理文件 {} 时出错: {}", shown, e));
                    report.record_failure(&shown, &e.to_string());
                }
            }
        }
        Ok(report)
    }

    pub async fn process(&self, descriptor: &Descriptor) -> AppResult<FetchOutcome> {
        let content = fs::read_to_string(&descriptor.path)?;
        let Some(url) = extract_url(&content) else {
            return Ok(FetchOutcome::EmptyDescriptor);
        };

        ui::status(
            Status::Info,
            format!("正在下载: {} -> {}", url, descriptor.image_path.display()),
        );
        let body = self.client.get_bytes(&url).await?;
        write_replacing(&descriptor.image_path, &body)?;
        ui::status(
            Status::Ok,
            format!("成功下载到: {}", descriptor.image_path.display()),
        );
        Ok(FetchOutcome::Downloaded)
    }
}

/// 先写入同目录下的临时文件再替换目标，已有的图片会被覆盖。
fn write_replacing(path: &Path, data: &[u8]) -> AppResult<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut builder = tempfile::Builder::new();
    builder.prefix(".post-kit-");
    if let Some(permissions) = image_permissions(path) {
        builder.permissions(permissions);
    }
    let mut tmp = builder.tempfile_in(dir)?;
    tmp.write_all(data)?;
    tmp.persist(path)?;
    Ok(())
}

/// 临时文件默认是 0600；沿用已有图片的权限，新图片使用 0644。
#[cfg(unix)]
fn image_permissions(path: &Path) -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    let permissions = fs::metadata(path)
        .map(|m| m.permissions())
        .unwrap_or_else(|_| fs::Permissions::from_mode(0o644));
    Some(permissions)
}

#[cfg(not(unix))]
fn image_permissions(_path: &Path) -> Option<fs::Permissions> {
    None
}
