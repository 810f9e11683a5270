//! 歌词行解析
//!
//! 网易云返回的歌词行格式并不统一，常见的有：
//! - `[ar:Beyond]` 元数据标签
//! - `[03:10]` 只有时间
//! - `[03:10.52]歌词` 逐行歌词
//! - `[03:10][03:45]歌词` 多个时间标签
//! - `[1235,300](0,508)Don't(0,1) (0,151)want` 逐字歌词

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::KaraokeWord;
use crate::utils::{capitalize, normalize_text};

/// 方括号标签或标签之间的文本
static LINE_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[.*?\]|[^\[\]]+").unwrap());

/// 逐字歌词的时间标记: (0,508)
static KARAOKE_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\((\d+),(\d+)\)").unwrap());

/// 单行解析结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TimestampedLine {
    /// 第一个方括号标签的内容（不含括号）
    pub time: Option<String>,
    /// 歌词文本
    pub text: Option<String>,
}

fn is_bracketed(token: &str) -> bool {
    token.starts_with('[') && token.ends_with(']')
}

/// 拆分一行歌词为时间标签和文本
pub fn parse_timestamped_line(line: &str) -> TimestampedLine {
    let tokens: Vec<&str> = LINE_TOKEN.find_iter(line).map(|m| m.as_str()).collect();

    // 没有标签的纯文本行原样保留
    if tokens.len() <= 1 && !tokens.first().is_some_and(|t| is_bracketed(t)) {
        return TimestampedLine {
            time: None,
            text: Some(line.to_string()),
        };
    }

    let text = tokens
        .iter()
        .find(|t| !is_bracketed(t))
        .map(|t| capitalize(&normalize_text(t, false)))
        .filter(|t| !t.is_empty());

    let time = tokens
        .iter()
        .find(|t| is_bracketed(t))
        .map(|t| t[1..t.len() - 1].trim().to_string())
        .filter(|t| !t.is_empty());

    TimestampedLine { time, text }
}

/// 拆分逐字歌词文本
///
/// 每个 `(a,b)` 标记后面跟着一个词，取标记的第二个数值作为该词的时间。
/// 标记之间只有空格（或什么都没有）的片段不是词，直接跳过。
pub fn tokenize_karaoke(text: &str) -> Vec<KaraokeWord> {
    let markers: Vec<_> = KARAOKE_MARKER.captures_iter(text).collect();
    let mut words = Vec::with_capacity(markers.len());

    for (i, cap) in markers.iter().enumerate() {
        let (Some(whole), Some(time)) = (cap.get(0), cap.get(2)) else {
            continue;
        };
        let next_start = markers
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(text.len(), |m| m.start());
        let trailing = &text[whole.end()..next_start];

        if trailing.is_empty() || trailing == " " {
            continue;
        }

        let Ok(offset_ms) = time.as_str().parse::<u64>() else {
            continue;
        };

        words.push(KaraokeWord {
            word: format!("{} ", trailing),
            offset_ms,
        });
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timed_line() {
        let parsed = parse_timestamped_line("[03:10]lyrics");
        assert_eq!(parsed.time.as_deref(), Some("03:10"));
        assert_eq!(parsed.text.as_deref(), Some("Lyrics"));

        // 标签后的空白被归一化
        let parsed = parse_timestamped_line("[00:12.34]  对这个世界如果你有太多的抱怨");
        assert_eq!(parsed.time.as_deref(), Some("00:12.34"));
        assert_eq!(parsed.text.as_deref(), Some("对这个世界如果你有太多的抱怨"));
    }

    #[test]
    fn test_parse_metadata_tag() {
        let parsed = parse_timestamped_line("[ar:Beyond]");
        assert_eq!(parsed.time.as_deref(), Some("ar:Beyond"));
        assert_eq!(parsed.text, None);

        let parsed = parse_timestamped_line("[03:10]");
        assert_eq!(parsed.time.as_deref(), Some("03:10"));
        assert_eq!(parsed.text, None);
    }

    #[test]
    fn test_parse_plain_text() {
        let parsed = parse_timestamped_line("plain text");
        assert_eq!(parsed.time, None);
        assert_eq!(parsed.text.as_deref(), Some("plain text"));
    }

    #[test]
    fn test_parse_multiple_tags() {
        // 多个时间标签时取第一个
        let parsed = parse_timestamped_line("[00:21.10][01:45.20]副歌");
        assert_eq!(parsed.time.as_deref(), Some("00:21.10"));
        assert_eq!(parsed.text.as_deref(), Some("副歌"));

        // 逐字歌词的 "开始,时长" 标签
        let parsed = parse_timestamped_line("[1235,300](0,508)don't");
        assert_eq!(parsed.time.as_deref(), Some("1235,300"));
        assert_eq!(parsed.text.as_deref(), Some("(0,508)don't"));
    }

    #[test]
    fn test_parse_fullwidth_text() {
        let parsed = parse_timestamped_line("[00:00.00]纯音乐，请欣赏");
        assert_eq!(parsed.text.as_deref(), Some("纯音乐, 请欣赏"));
    }

    #[test]
    fn test_tokenize_karaoke() {
        let words = tokenize_karaoke("(0,508)Don't(0,1) (0,151)want(0,1)");
        assert_eq!(
            words,
            vec![
                KaraokeWord {
                    word: "Don't ".to_string(),
                    offset_ms: 508,
                },
                KaraokeWord {
                    word: "want ".to_string(),
                    offset_ms: 151,
                },
            ]
        );
    }

    #[test]
    fn test_tokenize_karaoke_reassembles_text() {
        let text = "(0,508)Don't(0,1) (0,151)want(0,1) (0,162)to(0,1) (0,100)be(0,1) (0,157)an";
        let words = tokenize_karaoke(text);
        assert_eq!(words.len(), 5);
        let joined: String = words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(joined.trim_end(), "Don't want to be an");
    }

    #[test]
    fn test_tokenize_karaoke_without_markers() {
        assert!(tokenize_karaoke("no markers here").is_empty());
        assert!(tokenize_karaoke("").is_empty());
    }
}
