use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, error};

use crate::error::{LyricsError, Result};

pub mod netease;

pub const REQWEST_TIMEOUT: u64 = 10;

/// 发起一次 GET 请求并返回 JSON
///
/// 只请求一次，不做重试；失败原样返回给调用方。
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    async fn get_json(&self, url: &str) -> Result<Value>;
}

/// 基于 reqwest 的实现
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str, timeout_secs: u64) -> Result<Self> {
        let timeout = if timeout_secs == 0 {
            REQWEST_TIMEOUT
        } else {
            timeout_secs
        };

        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl JsonFetcher for HttpFetcher {
    async fn get_json(&self, url: &str) -> Result<Value> {
        debug!("GET {}", url);

        let resp = self
            .client
            .get(url)
            .header("Referer", "https://music.163.com/")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            error!("请求失败: HTTP {} ({})", status, url);
            return Err(LyricsError::Status {
                status,
                url: url.to_string(),
            });
        }

        Ok(resp.json().await?)
    }
}
