//! 从原始歌词中提取四种歌词形式
//!
//! 每个函数只读取对应的歌词块，解析失败的行直接丢弃。
//! 过滤后没有剩余行时返回 `None`，与歌词块缺失无法区分。

use tracing::{debug, trace};

use super::credits::is_credit_line;
use super::parser::{parse_timestamped_line, tokenize_karaoke, TimestampedLine};
use super::{KaraokeLine, ParsedLine, RawLyricPayload, UnsyncedLine};

/// 网易云标记纯音乐的歌词行（已归一化）
pub const NO_LYRICS_SENTINEL: &str = "纯音乐, 请欣赏";

/// 拆分为去除首尾空白后的非空行
fn lyric_lines(block: &str) -> impl Iterator<Item = &str> {
    block.lines().map(str::trim).filter(|line| !line.is_empty())
}

fn parse_non_negative(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// 解析 "分:秒" 格式的时间，返回毫秒
fn parse_minute_second(time: &str) -> Option<u64> {
    let (min, sec) = time.split_once(':')?;
    let min = parse_non_negative(min)?;
    let sec = parse_non_negative(sec)?;
    Some(((min * 60.0 + sec) * 1000.0).round() as u64)
}

/// 解析 "开始,时长" 格式的时间，返回 (开始, 结束) 毫秒
fn parse_start_duration(time: &str) -> Option<(u64, u64)> {
    let (start, duration) = time.split_once(',')?;
    let start = parse_non_negative(start)?;
    let duration = parse_non_negative(duration)?;
    Some((start.round() as u64, (start + duration).round() as u64))
}

fn non_empty<T>(lines: Vec<T>) -> Option<Vec<T>> {
    if lines.is_empty() {
        None
    } else {
        Some(lines)
    }
}

/// 逐行解析一个带 "分:秒" 时间的歌词块，返回结果和是否出现纯音乐标记
fn parse_timed_block(block: &str) -> (Vec<ParsedLine>, bool) {
    let mut lines = Vec::new();
    let mut no_lyrics = false;

    for raw in lyric_lines(block) {
        let TimestampedLine { time, text } = parse_timestamped_line(raw);
        if text.as_deref() == Some(NO_LYRICS_SENTINEL) {
            no_lyrics = true;
        }

        let (Some(time), Some(text)) = (time, text) else {
            trace!("跳过无时间或无文本的行: '{}'", raw);
            continue;
        };
        let Some(start_time_ms) = parse_minute_second(&time) else {
            trace!("跳过时间格式无效的行: '{}'", raw);
            continue;
        };
        if is_credit_line(&text) {
            trace!("跳过制作信息行: '{}'", text);
            continue;
        }

        lines.push(ParsedLine {
            start_time_ms,
            text,
        });
    }

    (lines, no_lyrics)
}

/// 获取逐字歌词
pub fn get_karaoke(payload: &RawLyricPayload) -> Option<Vec<KaraokeLine>> {
    let block = payload.karaoke.as_deref()?;

    let lines: Vec<KaraokeLine> = lyric_lines(block)
        .filter_map(|raw| {
            let TimestampedLine { time, text } = parse_timestamped_line(raw);
            let (time, text) = (time?, text?);
            let (start_time_ms, end_time_ms) = parse_start_duration(&time)?;
            let line = KaraokeLine {
                start_time_ms,
                end_time_ms,
                words: tokenize_karaoke(&text),
            };

            // 同时检查去掉时间标记后的文本，"(0,500)作词：X" 这类行才能被识别
            if is_credit_line(&text) || is_credit_line(&line.text()) {
                trace!("跳过制作信息行: '{}'", raw);
                return None;
            }

            Some(line)
        })
        .collect();

    debug!("逐字歌词解析完成，共{}行", lines.len());
    non_empty(lines)
}

/// 获取逐行歌词，纯音乐返回 `None`
pub fn get_synced(payload: &RawLyricPayload) -> Option<Vec<ParsedLine>> {
    let block = payload.primary.as_deref()?;
    let (lines, no_lyrics) = parse_timed_block(block);

    if no_lyrics {
        debug!("歌词标记为纯音乐，忽略已解析的{}行", lines.len());
        return None;
    }

    debug!("逐行歌词解析完成，共{}行", lines.len());
    non_empty(lines)
}

/// 获取翻译歌词
pub fn get_translation(payload: &RawLyricPayload) -> Option<Vec<ParsedLine>> {
    let block = payload.translation.as_deref()?;
    let (lines, _) = parse_timed_block(block);

    debug!("翻译歌词解析完成，共{}行", lines.len());
    non_empty(lines)
}

/// 获取不带时间要求的歌词，纯音乐返回 `None`
pub fn get_unsynced(payload: &RawLyricPayload) -> Option<Vec<UnsyncedLine>> {
    let block = payload.primary.as_deref()?;
    let mut lines = Vec::new();
    let mut no_lyrics = false;

    for raw in lyric_lines(block) {
        let TimestampedLine { time, text } = parse_timestamped_line(raw);
        let Some(text) = text else {
            continue;
        };
        if text == NO_LYRICS_SENTINEL {
            no_lyrics = true;
        }
        if is_credit_line(&text) {
            trace!("跳过制作信息行: '{}'", text);
            continue;
        }

        lines.push(UnsyncedLine { time, text });
    }

    if no_lyrics {
        debug!("歌词标记为纯音乐，忽略已解析的{}行", lines.len());
        return None;
    }

    non_empty(lines)
}
