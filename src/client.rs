// src/client.rs

use crate::{config::AppConfig, error::*};
use log::debug;
use reqwest::Client;
use url::Url;

/// 单次 GET 的薄封装：不重试，非 2xx 状态视为错误。
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    pub async fn get_bytes(&self, url: &str) -> AppResult<Vec<u8>> {
        let url = Url::parse(url)?;
        debug!("GET {}", url);
        let res = self.client.get(url).send().await?.error_for_status()?;
        let body = res.bytes().await?;
        debug!("收到 {} 字节", body.len());
        Ok(body.to_vec())
    }
}
