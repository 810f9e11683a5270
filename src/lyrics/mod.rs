pub mod credits;
pub mod extract;
pub mod matcher;
pub mod parser;
pub mod providers;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use credits::is_credit_line;
pub use extract::{get_karaoke, get_synced, get_translation, get_unsynced};
pub use parser::{parse_timestamped_line, tokenize_karaoke, TimestampedLine};

/// 待查询的歌曲信息
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackQuery {
    /// 歌曲标题
    pub title: String,
    /// 艺术家
    pub artist: String,
    /// 专辑
    pub album: String,
    /// 歌曲时长（毫秒）
    pub duration_ms: u64,
}

/// 搜索结果中的一首候选歌曲
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// 歌曲ID
    pub id: u64,
    /// 歌曲名，仅用于日志
    pub name: String,
    /// 歌曲时长（毫秒）
    pub duration_ms: u64,
    /// 专辑名
    pub album_name: String,
}

/// 歌词接口返回的原始歌词，每个部分都可能缺失
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLyricPayload {
    /// 逐行歌词 (lrc)
    pub primary: Option<String>,
    /// 逐字歌词 (klyric)
    pub karaoke: Option<String>,
    /// 翻译歌词 (tlyric)
    pub translation: Option<String>,
}

/// 带时间的歌词行，用于逐行歌词和翻译
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedLine {
    pub start_time_ms: u64,
    pub text: String,
}

/// 不要求时间戳的歌词行，time 保留原始标签内容
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnsyncedLine {
    pub time: Option<String>,
    pub text: String,
}

/// 逐字歌词中的一个词
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KaraokeWord {
    pub word: String,
    pub offset_ms: u64,
}

/// 逐字歌词行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KaraokeLine {
    pub start_time_ms: u64,
    pub end_time_ms: u64,
    pub words: Vec<KaraokeWord>,
}

impl KaraokeLine {
    /// 拼接所有词得到整行文本
    pub fn text(&self) -> String {
        self.words
            .iter()
            .map(|w| w.word.as_str())
            .collect::<String>()
            .trim_end()
            .to_string()
    }
}

/// 歌词提供者接口
#[async_trait]
pub trait LyricsProvider: Send + Sync {
    /// 获取提供者名称
    fn name(&self) -> &str;

    /// 查找歌曲并获取原始歌词
    async fn find_lyrics(&self, track: &TrackQuery) -> Result<RawLyricPayload>;
}
