mod netease;

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::error::{LyricsError, Result};
use crate::lyrics::{LyricsProvider, RawLyricPayload, TrackQuery};

pub use netease::NeteaseProvider;

/// 获取所有启用的歌词提供者
pub fn get_enabled_providers(config: &Config) -> Vec<Arc<dyn LyricsProvider>> {
    let mut providers: Vec<Arc<dyn LyricsProvider>> = Vec::new();

    debug!(
        "加载启用的歌词提供者，配置的源: {:?}",
        config.lyrics_sources
    );

    for source in &config.lyrics_sources {
        match source.as_str() {
            "netease" | "163" => {
                let Some(netease_config) = &config.sources.netease else {
                    warn!("已启用网易云音乐歌词源，但未找到相关配置");
                    continue;
                };
                match NeteaseProvider::new(netease_config.clone()) {
                    Ok(provider) => {
                        info!("启用网易云音乐歌词源");
                        providers.push(Arc::new(provider) as Arc<dyn LyricsProvider>);
                    }
                    Err(e) => error!("创建网易云音乐歌词源失败: {}", e),
                }
            }
            _ => {
                warn!("未知的歌词源: {}", source);
            }
        }
    }

    info!("成功加载 {} 个歌词提供者", providers.len());
    providers
}

/// 依次尝试各个提供者，遇到"未找到"时换下一个，其他错误直接返回
pub async fn find_lyrics_with_fallback(
    providers: &[Arc<dyn LyricsProvider>],
    track: &TrackQuery,
) -> Result<(String, RawLyricPayload)> {
    let mut last_err = None;

    for provider in providers {
        match provider.find_lyrics(track).await {
            Ok(payload) => return Ok((provider.name().to_string(), payload)),
            Err(e) if e.is_not_found() => {
                debug!("{} 未找到歌词: {}", provider.name(), e);
                last_err = Some(e);
            }
            Err(e) => return Err(e),
        }
    }

    Err(last_err.unwrap_or_else(|| LyricsError::NotFound {
        keyword: format!("{} {}", track.title, track.artist),
    }))
}
