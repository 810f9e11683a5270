// 网易云歌词查找与解析库

// 模块导出
pub mod api;
pub mod config;
pub mod error;
pub mod lyrics;
pub mod utils;

pub use error::{LyricsError, Result};
pub use lyrics::{
    get_karaoke, get_synced, get_translation, get_unsynced, Candidate, KaraokeLine, KaraokeWord,
    LyricsProvider, ParsedLine, RawLyricPayload, TrackQuery, UnsyncedLine,
};
