use thiserror::Error;

/// 歌词查找过程中的错误
#[derive(Error, Debug)]
pub enum LyricsError {
    /// 搜索结果中没有可接受的歌曲
    #[error("未找到匹配的歌曲: '{keyword}'")]
    NotFound { keyword: String },

    #[error("网络请求失败: {0}")]
    Http(#[from] reqwest::Error),

    #[error("请求失败: HTTP {status} ({url})")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("JSON 解析失败: {0}")]
    Json(#[from] serde_json::Error),
}

impl LyricsError {
    /// 是否为"未找到"错误，调用方可据此切换到其他歌词源
    pub fn is_not_found(&self) -> bool {
        matches!(self, LyricsError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, LyricsError>;
