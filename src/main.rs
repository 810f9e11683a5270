use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde_json::json;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use netease_lyrics::config::Config;
use netease_lyrics::lyrics::providers::{find_lyrics_with_fallback, get_enabled_providers};
use netease_lyrics::{
    get_karaoke, get_synced, get_translation, get_unsynced, RawLyricPayload, TrackQuery,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    Synced,
    Unsynced,
    Karaoke,
    Translation,
    All,
}

#[derive(Debug, Parser)]
#[command(name = "netease-lyrics", version, about = "从网易云音乐查找并解析歌词")]
struct Cli {
    /// 歌曲标题
    #[arg(long)]
    title: String,

    /// 艺术家
    #[arg(long, default_value = "")]
    artist: String,

    /// 专辑
    #[arg(long, default_value = "")]
    album: String,

    /// 歌曲时长（毫秒）
    #[arg(long, default_value_t = 0)]
    duration_ms: u64,

    /// 输出的歌词形式
    #[arg(long, value_enum, default_value_t = Mode::Synced)]
    mode: Mode,

    /// 以 JSON 格式输出
    #[arg(long)]
    json: bool,

    /// 指定配置文件路径
    #[arg(long)]
    config: Option<PathBuf>,
}

/// 毫秒转为 LRC 时间标签: [mm:ss.xx]
fn format_timestamp(ms: u64) -> String {
    format!(
        "[{:02}:{:02}.{:02}]",
        ms / 60_000,
        (ms / 1000) % 60,
        (ms % 1000) / 10
    )
}

fn print_text(payload: &RawLyricPayload, mode: Mode) {
    let modes: &[Mode] = match mode {
        Mode::All => &[Mode::Synced, Mode::Karaoke, Mode::Translation, Mode::Unsynced],
        _ => std::slice::from_ref(&mode),
    };

    for mode in modes {
        println!("== {:?}", mode);
        let printed = match mode {
            Mode::Synced => get_synced(payload).map(|lines| {
                for line in lines {
                    println!("{}{}", format_timestamp(line.start_time_ms), line.text);
                }
            }),
            Mode::Translation => get_translation(payload).map(|lines| {
                for line in lines {
                    println!("{}{}", format_timestamp(line.start_time_ms), line.text);
                }
            }),
            Mode::Karaoke => get_karaoke(payload).map(|lines| {
                for line in lines {
                    println!("{}{}", format_timestamp(line.start_time_ms), line.text());
                }
            }),
            Mode::Unsynced => get_unsynced(payload).map(|lines| {
                for line in lines {
                    println!("{}", line.text);
                }
            }),
            Mode::All => None,
        };

        if printed.is_none() {
            println!("（无歌词）");
        }
    }
}

fn print_json(payload: &RawLyricPayload, source: &str, mode: Mode) -> Result<()> {
    let all = mode == Mode::All;
    let mut output = json!({ "source": source });

    if all || mode == Mode::Synced {
        output["synced"] = serde_json::to_value(get_synced(payload))?;
    }
    if all || mode == Mode::Unsynced {
        output["unsynced"] = serde_json::to_value(get_unsynced(payload))?;
    }
    if all || mode == Mode::Karaoke {
        output["karaoke"] = serde_json::to_value(get_karaoke(payload))?;
    }
    if all || mode == Mode::Translation {
        output["translation"] = serde_json::to_value(get_translation(payload))?;
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.clone()).context("加载配置文件失败")?;

    // 日志输出到 stderr，避免干扰歌词输出
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!("命令行参数: {:?}", cli);

    let track = TrackQuery {
        title: cli.title,
        artist: cli.artist,
        album: cli.album,
        duration_ms: cli.duration_ms,
    };

    let providers = get_enabled_providers(&config);
    let (source, payload) = match find_lyrics_with_fallback(&providers, &track).await {
        Ok(found) => found,
        Err(e) if e.is_not_found() => {
            info!("{}", e);
            println!("未找到歌词: {} - {}", track.title, track.artist);
            return Ok(());
        }
        Err(e) => return Err(e).context("获取歌词失败"),
    };

    if cli.json {
        print_json(&payload, &source, cli.mode)?;
    } else {
        print_text(&payload, cli.mode);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0), "[00:00.00]");
        assert_eq!(format_timestamp(9_860), "[00:09.86]");
        assert_eq!(format_timestamp(190_000), "[03:10.00]");
    }

    #[test]
    fn test_cli_parse() {
        let cli = Cli::parse_from([
            "netease-lyrics",
            "--title",
            "晴天",
            "--duration-ms",
            "269000",
            "--mode",
            "karaoke",
        ]);
        assert_eq!(cli.title, "晴天");
        assert_eq!(cli.duration_ms, 269_000);
        assert_eq!(cli.mode, Mode::Karaoke);
        assert!(!cli.json);
    }
}
