use tracing::debug;

use super::{Candidate, TrackQuery};
use crate::utils::{
    contains_han_script, normalize_text, strip_featured_artist, strip_parenthetical_suffix,
    Simplifier,
};

/// 时长相差小于该值（毫秒）即认为是同一首歌
pub const DURATION_TOLERANCE_MS: u64 = 1000;

/// 去掉标题中的合作艺人和括号描述
pub fn clean_title(title: &str) -> String {
    let normalized = normalize_text(title, false);
    strip_parenthetical_suffix(&strip_featured_artist(&normalized))
}

/// 构建搜索关键词: "<标题> <艺术家>"
pub fn build_search_keyword(track: &TrackQuery) -> String {
    format!("{} {}", clean_title(&track.title), track.artist.trim())
        .trim()
        .to_string()
}

/// 计算用于比较的专辑名，含汉字时先转为简体
pub async fn expected_album_name(album: &str, simplifier: &dyn Simplifier) -> String {
    let normalized = normalize_text(album, true);
    if contains_han_script(&normalized) {
        simplifier.to_simplified(&normalized).await
    } else {
        normalized
    }
}

/// 专辑名相同或时长接近即接受
pub fn is_acceptable(candidate: &Candidate, expected_album: &str, duration_ms: u64) -> bool {
    let album_match = normalize_text(&candidate.album_name, true) == expected_album;
    let duration_match = duration_ms.abs_diff(candidate.duration_ms) < DURATION_TOLERANCE_MS;

    album_match || duration_match
}

/// 按搜索结果的原始顺序返回第一个可接受的候选
pub fn select_candidate<'a>(
    candidates: &'a [Candidate],
    expected_album: &str,
    duration_ms: u64,
) -> Option<&'a Candidate> {
    candidates.iter().enumerate().find_map(|(i, candidate)| {
        let accepted = is_acceptable(candidate, expected_album, duration_ms);
        debug!(
            "候选 #{}: ID: {}, 标题: '{}', 专辑: '{}', 时长: {}ms, 接受: {}",
            i + 1,
            candidate.id,
            candidate.name,
            candidate.album_name,
            candidate.duration_ms,
            accepted
        );
        accepted.then_some(candidate)
    })
}
