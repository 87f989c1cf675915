// src/config.rs

use crate::{constants, error::AppResult, ui::{self, Status}};
use anyhow::Context;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::{fs, path::{Path, PathBuf}, time::Duration};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NetworkConfig {
    pub user_agent: Option<String>,
    pub connect_timeout_secs: Option<u64>,
    pub timeout_secs: Option<u64>,
}

/// 配置文件在磁盘上的形态
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExternalConfig {
    #[serde(default)]
    pub network: NetworkConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub user_agent: String,
    pub connect_timeout: Option<Duration>,
    pub timeout: Option<Duration>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_external(ExternalConfig::default())
    }
}

impl AppConfig {
    pub fn from_external(external: ExternalConfig) -> Self {
        let network = external.network;
        Self {
            user_agent: network
                .user_agent
                .filter(|ua| !ua.trim().is_empty())
                .unwrap_or_else(|| constants::USER_AGENT.to_string()),
            connect_timeout: network.connect_timeout_secs.map(Duration::from_secs),
            timeout: network.timeout_secs.map(Duration::from_secs),
        }
    }

    /// 读取配置；文件不存在时使用默认值，文件损坏时给出警告后同样回退到默认值。
    pub fn load(explicit_path: Option<&Path>) -> Self {
        let path = match explicit_path {
            Some(p) => Some(p.to_path_buf()),
            None => default_config_path(),
        };
        let Some(path) = path else {
            debug!("无法定位用户主目录，使用默认配置");
            return Self::default();
        };
        if !path.is_file() {
            debug!("配置文件 {:?} 不存在，使用默认配置", path);
            return Self::default();
        }
        match read_external_config(&path) {
            Ok(external) => {
                info!("已加载配置文件: {}", path.display());
                Self::from_external(external)
            }
            Err(e) => {
                ui::status(Status::Warn, format!("{}，将使用默认配置。", e));
                Self::default()
            }
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| {
        home.join(constants::CONFIG_DIR_NAME)
            .join(constants::CONFIG_FILE_NAME)
    })
}

fn read_external_config(path: &Path) -> AppResult<ExternalConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("读取配置文件 '{}' 失败", path.display()))?;
    let config: ExternalConfig = serde_json::from_str(&content)
        .with_context(|| format!("解析配置文件 '{}' 失败", path.display()))?;
    Ok(config)
}
