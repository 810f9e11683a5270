//! 网易云音乐接口的请求地址和响应结构

use serde::Deserialize;

use crate::lyrics::{Candidate, RawLyricPayload};

pub const DEFAULT_API_BASE: &str = "https://music.xianqiao.wang/neteaseapiv2";
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 11_1_0) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/88.0.4324.87 Safari/537.36";

/// 单曲搜索地址
pub fn search_url(api_base: &str, keyword: &str, limit: u32) -> String {
    format!(
        "{}/search?limit={}&type=1&keywords={}",
        api_base.trim_end_matches('/'),
        limit,
        urlencoding::encode(keyword)
    )
}

/// 歌词地址
pub fn lyric_url(api_base: &str, song_id: u64) -> String {
    format!("{}/lyric?id={}", api_base.trim_end_matches('/'), song_id)
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub result: Option<SearchResult>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub songs: Vec<SongItem>,
}

/// 搜索结果中的歌曲，兼容 /search 与 /cloudsearch 两种字段名
#[derive(Debug, Deserialize)]
pub struct SongItem {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "dt")]
    pub duration: u64,
    #[serde(default, alias = "al")]
    pub album: Option<AlbumItem>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AlbumItem {
    #[serde(default)]
    pub name: Option<String>,
}

impl SearchResponse {
    pub fn into_candidates(self) -> Vec<Candidate> {
        self.result
            .map(|r| r.songs.into_iter().map(Candidate::from).collect())
            .unwrap_or_default()
    }
}

impl From<SongItem> for Candidate {
    fn from(song: SongItem) -> Self {
        Candidate {
            id: song.id,
            name: song.name,
            duration_ms: song.duration,
            album_name: song.album.and_then(|a| a.name).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LyricResponse {
    #[serde(default)]
    pub lrc: Option<LyricBlock>,
    #[serde(default)]
    pub klyric: Option<LyricBlock>,
    #[serde(default)]
    pub tlyric: Option<LyricBlock>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LyricBlock {
    #[serde(default)]
    pub lyric: Option<String>,
}

fn block_text(block: Option<LyricBlock>) -> Option<String> {
    block
        .and_then(|b| b.lyric)
        .filter(|text| !text.trim().is_empty())
}

impl From<LyricResponse> for RawLyricPayload {
    fn from(resp: LyricResponse) -> Self {
        RawLyricPayload {
            primary: block_text(resp.lrc),
            karaoke: block_text(resp.klyric),
            translation: block_text(resp.tlyric),
        }
    }
}
