// src/constants.rs

pub const UI_WIDTH: usize = 72;
pub const CONFIG_DIR_NAME: &str = concat!(".", clap::crate_name!());
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = concat!(clap::crate_name!(), ".log");
pub const LOG_FALLBACK_FILE_NAME: &str = "fallback.log";
pub const USER_AGENT: &str = "Mozilla/5.0";

/// 默认的下载根目录 (相对当前工作目录)
pub const DEFAULT_FETCH_DIR: &str = "18";
/// 默认的汇总根目录 (相对当前工作目录)
pub const DEFAULT_OUTPUTS_DIR: &str = "Outputs";
pub const DEFAULT_SUMMARY_FILE: &str = "项目内容整理.md";

pub mod descriptor {
    pub const PREFIX: &str = "image_";
    pub const SUFFIX: &str = "_url.txt";
    pub const IMAGE_SUFFIX: &str = ".jpg";
    pub const URL_MARKER: char = '→';
}

pub mod summary {
    pub const CAPTION_FILE_NAME: &str = "文案.md";
    pub const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];
    pub const IMAGE_ZOOM: &str = "22%";

    pub const DOCUMENT_TITLE: &str = "# 项目内容整理汇总";
    pub const DOCUMENT_INTRO: &str = "> 本文档自动汇总了各个文件夹下的文案内容与已下载的图片。";
    pub const CAPTION_HEADING: &str = "### 📝 文案内容";
    pub const IMAGES_HEADING: &str = "### 🖼️ 图片展示";
    pub const CAPTION_MISSING: &str = "*(未找到文案文件)*";
    pub const IMAGES_MISSING: &str = "*(暂无图片)*";
    pub const SECTION_SEPARATOR: &str = "\n\n<br>\n\n---\n\n<br>\n\n";
}
