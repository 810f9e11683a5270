mod loader;

pub use loader::{Config, NeteaseConfig, SourcesConfig};
