// src/fetcher/descriptor.rs

use crate::constants::descriptor::{IMAGE_SUFFIX, PREFIX, SUFFIX, URL_MARKER};
use std::path::{Path, PathBuf};

/// 一个 `image_<id>_url.txt` 文件及其对应的目标图片路径
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    pub path: PathBuf,
    pub image_path: PathBuf,
}

impl Descriptor {
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        let image_name = image_name_for(name)?;
        Some(Self {
            path: path.to_path_buf(),
            image_path: path.with_file_name(image_name),
        })
    }
}

/// `image_1_url.txt` -> `image_1.jpg`；不符合命名约定时返回 `None`。
pub fn image_name_for(file_name: &str) -> Option<String> {
    if !file_name.starts_with(PREFIX) {
        return None;
    }
    let stem = file_name.strip_suffix(SUFFIX)?;
    Some(format!("{}{}", stem, IMAGE_SUFFIX))
}

/// 从文件内容中取出真正的链接。
///
/// 内容可能带有 `1→https://...` 这样的前缀，此时只取最后一个 `→` 之后的部分。
/// 只有整个文件为空白时才返回 `None`；`1→` 这类只有前缀的内容返回空链接，
/// 由后续请求报错。
pub fn extract_url(content: &str) -> Option<String> {
    let content = content.trim();
    if content.is_empty() {
        return None;
    }
    let url = match content.rsplit_once(URL_MARKER) {
        Some((_, tail)) => tail.trim(),
        None => content,
    };
    Some(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_name_for() {
        assert_eq!(image_name_for("image_1_url.txt").as_deref(), Some("image_1.jpg"));
        assert_eq!(image_name_for("image_cover_2_url.txt").as_deref(), Some("image_cover_2.jpg"));
        // 前后缀共享下划线时仍然匹配
        assert_eq!(image_name_for("image_url.txt").as_deref(), Some("image.jpg"));
        assert_eq!(image_name_for("img_1_url.txt"), None);
        assert_eq!(image_name_for("image_1_url.md"), None);
        assert_eq!(image_name_for("image_1.jpg"), None);
    }

    #[test]
    fn test_descriptor_keeps_directory() {
        let d = Descriptor::from_path(Path::new("18/3_话题/image_2_url.txt")).unwrap();
        assert_eq!(d.image_path, PathBuf::from("18/3_话题/image_2.jpg"));
        assert!(Descriptor::from_path(Path::new("18/3_话题/文案.md")).is_none());
    }

    #[test]
    fn test_extract_url() {
        assert_eq!(
            extract_url("  https://example.com/a.jpg \n").as_deref(),
            Some("https://example.com/a.jpg")
        );
        assert_eq!(
            extract_url("1→https://example.com/a.jpg").as_deref(),
            Some("https://example.com/a.jpg")
        );
        assert_eq!(
            extract_url("1→2→ https://example.com/b.png").as_deref(),
            Some("https://example.com/b.png")
        );
        assert_eq!(extract_url(""), None);
        assert_eq!(extract_url("   \n\t"), None);
        assert_eq!(extract_url("1→  ").as_deref(), Some(""));
    }
}
