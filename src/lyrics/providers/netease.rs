use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::api::netease::{lyric_url, search_url, LyricResponse, SearchResponse};
use crate::api::{HttpFetcher, JsonFetcher};
use crate::config::NeteaseConfig;
use crate::error::{LyricsError, Result};
use crate::lyrics::matcher::{build_search_keyword, expected_album_name, select_candidate};
use crate::lyrics::{Candidate, LyricsProvider, RawLyricPayload, TrackQuery};
use crate::utils::{Simplifier, ZhconvSimplifier};

/// 网易云音乐歌词提供者
pub struct NeteaseProvider {
    fetcher: Arc<dyn JsonFetcher>,
    simplifier: Arc<dyn Simplifier>,
    api_base: String,
    search_limit: u32,
}

impl NeteaseProvider {
    /// 创建新的网易云音乐歌词提供者
    pub fn new(config: NeteaseConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(&config.user_agent, config.timeout_secs)?;
        Ok(Self::with_backend(
            config,
            Arc::new(fetcher),
            Arc::new(ZhconvSimplifier),
        ))
    }

    /// 使用指定的请求和繁简转换实现
    pub fn with_backend(
        config: NeteaseConfig,
        fetcher: Arc<dyn JsonFetcher>,
        simplifier: Arc<dyn Simplifier>,
    ) -> Self {
        Self {
            fetcher,
            simplifier,
            api_base: config.api_base,
            search_limit: config.search_limit.max(1),
        }
    }

    /// 搜索歌曲，返回第一个专辑或时长匹配的结果
    pub async fn search(&self, track: &TrackQuery) -> Result<Candidate> {
        let keyword = build_search_keyword(track);
        debug!("网易云音乐搜索关键词: '{}'", keyword);

        let json = self
            .fetcher
            .get_json(&search_url(&self.api_base, &keyword, self.search_limit))
            .await?;
        let candidates = serde_json::from_value::<SearchResponse>(json)?.into_candidates();
        debug!("网易云音乐搜索结果数量: {}", candidates.len());

        if candidates.is_empty() {
            return Err(LyricsError::NotFound { keyword });
        }

        let expected_album = expected_album_name(&track.album, self.simplifier.as_ref()).await;
        debug!("用于比较的专辑名: '{}'", expected_album);

        match select_candidate(&candidates, &expected_album, track.duration_ms) {
            Some(candidate) => {
                debug!(
                    "网易云音乐匹配: {} (ID: {}, 专辑: '{}')",
                    candidate.name, candidate.id, candidate.album_name
                );
                Ok(candidate.clone())
            }
            None => Err(LyricsError::NotFound { keyword }),
        }
    }

    /// 获取指定歌曲的原始歌词
    pub async fn fetch_payload(&self, song_id: u64) -> Result<RawLyricPayload> {
        debug!("获取网易云音乐歌词, ID: {}", song_id);

        let json = self
            .fetcher
            .get_json(&lyric_url(&self.api_base, song_id))
            .await?;
        let payload: RawLyricPayload = serde_json::from_value::<LyricResponse>(json)?.into();
        Ok(payload)
    }
}

#[async_trait]
impl LyricsProvider for NeteaseProvider {
    fn name(&self) -> &str {
        "netease"
    }

    async fn find_lyrics(&self, track: &TrackQuery) -> Result<RawLyricPayload> {
        let candidate = self.search(track).await?;
        let payload = self.fetch_payload(candidate.id).await?;

        info!(
            "成功获取网易云音乐歌词: {} - {} (逐行: {}, 逐字: {}, 翻译: {})",
            track.title,
            track.artist,
            payload.primary.is_some(),
            payload.karaoke.is_some(),
            payload.translation.is_some()
        );
        Ok(payload)
    }
}
