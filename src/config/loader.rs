use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

use crate::api::netease::{DEFAULT_API_BASE, USER_AGENT};
use crate::api::REQWEST_TIMEOUT;

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    /// 启用的歌词源列表，按顺序尝试
    pub lyrics_sources: Vec<String>,

    /// 默认日志级别，可被 RUST_LOG 覆盖
    pub log_level: String,

    /// 歌词源特定配置
    pub sources: SourcesConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct SourcesConfig {
    /// 网易云音乐API配置
    pub netease: Option<NeteaseConfig>,
}

/// 网易云音乐配置
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct NeteaseConfig {
    /// API 地址
    pub api_base: String,

    /// 搜索结果数量
    pub search_limit: u32,

    /// 请求超时（秒）
    pub timeout_secs: u64,

    /// 请求使用的 User-Agent
    pub user_agent: String,
}

impl Default for NeteaseConfig {
    fn default() -> Self {
        NeteaseConfig {
            api_base: DEFAULT_API_BASE.to_string(),
            search_limit: 10,
            timeout_secs: REQWEST_TIMEOUT,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            lyrics_sources: vec!["netease".to_string()],
            log_level: "info".to_string(),
            sources: SourcesConfig {
                netease: Some(NeteaseConfig::default()),
            },
        }
    }
}

impl Config {
    /// 默认配置文件路径
    pub fn default_path() -> PathBuf {
        let pkg_name = env!("CARGO_PKG_NAME");
        dirs::config_dir()
            .map(|p| p.join(pkg_name).join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(format!("{}-config.toml", pkg_name)))
    }

    /// 加载配置，支持从指定路径或默认路径加载
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = path.unwrap_or_else(Self::default_path);

        debug!("尝试从 {:?} 加载配置文件", config_path);

        if !config_path.exists() {
            debug!("配置文件 {:?} 不存在，将创建默认配置", config_path);
            let default_config = Config::default();
            let toml = toml::to_string_pretty(&default_config)?;

            if let Some(parent) = config_path.parent() {
                fs::create_dir_all(parent)?;
                debug!("已确保目录 {:?} 存在", parent);
            }

            fs::write(&config_path, toml)?;
            info!("已创建默认配置文件: {:?}", config_path);
            return Ok(default_config);
        }

        let content = fs::read_to_string(&config_path)?;
        Ok(Self::parse(&content).unwrap_or_else(|e| {
            error!("解析配置文件 {:?} 失败: {}", config_path, e);
            warn!("由于解析错误，将加载默认配置");
            Config::default()
        }))
    }

    /// 从 TOML 文本解析配置，缺失的字段使用默认值
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial_config() {
        let config = Config::parse(
            r#"
lyrics_sources = ["netease", "qq"]

[sources.netease]
search_limit = 30
"#,
        )
        .unwrap();

        assert_eq!(config.lyrics_sources, vec!["netease", "qq"]);
        assert_eq!(config.log_level, "info");
        let netease = config.sources.netease.unwrap();
        assert_eq!(netease.search_limit, 30);
        assert_eq!(netease.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn test_default_config_round_trips() {
        let toml = toml::to_string_pretty(&Config::default()).unwrap();
        let config = Config::parse(&toml).unwrap();
        assert_eq!(config.lyrics_sources, vec!["netease"]);
        assert!(config.sources.netease.is_some());
    }

    #[test]
    fn test_invalid_config() {
        assert!(Config::parse("lyrics_sources = 1").is_err());
    }

    #[test]
    fn test_load_creates_default_file() {
        let path = std::env::temp_dir()
            .join(format!("netease-lyrics-test-{}", std::process::id()))
            .join("config.toml");
        let _ = fs::remove_file(&path);

        let config = Config::load(Some(path.clone())).unwrap();
        assert_eq!(config.log_level, "info");
        assert!(path.exists());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
