// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("目录 {} 不存在", .0.display())]
    RootNotFound(PathBuf),
    #[error("网络请求失败: {0}")]
    Network(#[from] reqwest::Error),
    #[error("写入文件失败: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("I/O 错误: {0}")]
    Io(#[from] std::io::Error),
    #[error("临时文件持久化失败: {0}")]
    TempFilePersist(#[from] tempfile::PersistError),
    #[error("URL 解析错误: {0}")]
    Url(#[from] url::ParseError),
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

pub type AppResult<T> = Result<T, AppError>;
