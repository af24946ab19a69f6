use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Filter used when RUST_LOG is not set
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Directory of `layout.log`; console only if missing
    #[serde(default)]
    pub log_dir: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            log_dir: None,
        }
    }
}

fn default_filter() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// Entity descriptor files (JSON)
    #[serde(default)]
    pub paths: Vec<String>,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[logging]
filter = "info"
log_dir = "target/logs"

[catalog]
paths = []
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    // Try to find config.toml next to the executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return load_config_from_str(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    // Fall back to default config
    tracing::info!("Using default embedded configuration");
    load_config_from_str(DEFAULT_CONFIG)
}

pub fn load_config_from_str(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// Resolve a configured path
/// Relative paths are resolved relative to the executable directory
pub fn resolve_path(path_str: &str) -> PathBuf {
    let path = Path::new(path_str);

    // If absolute path, use as is
    if path.is_absolute() {
        return path.to_path_buf();
    }

    // If relative path, resolve it relative to the executable directory
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(path);
        }
    }

    // Fallback: use relative to current directory
    PathBuf::from(path_str)
}
