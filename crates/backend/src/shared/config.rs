use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub distribution: DistributionSettings,
    /// Откуда загружена конфигурация (для лога при старте)
    #[serde(skip)]
    pub loaded_from: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_dir")]
    pub dir: String,
    /// Фильтр EnvFilter; RUST_LOG имеет приоритет
    #[serde(default)]
    pub filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: default_log_dir(),
            filter: None,
        }
    }
}

fn default_log_dir() -> String {
    "logs".to_string()
}

/// Настройки выполнения распределения
#[derive(Debug, Deserialize, Clone, Default)]
pub struct DistributionSettings {
    /// Отклонять выполнение, если сумма процентов не равна 100%
    #[serde(default)]
    pub enforce_full_allocation: bool,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[database]
path = "target/db/app.db"

[server]
host = "0.0.0.0"
port = 3000

[logging]
dir = "logs"

[distribution]
enforce_full_allocation = false
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// Tracing is not initialized yet at this point, the caller logs `loaded_from`.
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");
            if config_path.exists() {
                let contents = std::fs::read_to_string(&config_path)?;
                let mut config = parse_config(&contents)?;
                config.loaded_from = Some(config_path);
                return Ok(config);
            }
        }
    }

    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// Resolves relative paths relative to the executable directory
fn resolve_path(path_str: &str) -> PathBuf {
    let path = Path::new(path_str);
    if path.is_absolute() {
        return path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(path);
        }
    }

    PathBuf::from(path_str)
}

/// Get the database file path from configuration
pub fn get_database_path(config: &Config) -> PathBuf {
    resolve_path(&config.database.path)
}

/// Get the log directory from configuration
pub fn get_log_dir(config: &Config) -> PathBuf {
    resolve_path(&config.logging.dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.database.path, "target/db/app.db");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.logging.dir, "logs");
        assert!(!config.distribution.enforce_full_allocation);
        assert!(config.loaded_from.is_none());
    }

    #[test]
    fn test_optional_sections_fall_back_to_defaults() {
        let config = parse_config(
            r#"
            [database]
            path = "/var/lib/salon/app.db"

            [distribution]
            enforce_full_allocation = true
            "#,
        )
        .unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert!(config.logging.filter.is_none());
        assert!(config.distribution.enforce_full_allocation);
        assert_eq!(
            get_database_path(&config),
            PathBuf::from("/var/lib/salon/app.db")
        );
    }

    #[test]
    fn test_missing_database_section_is_an_error() {
        assert!(parse_config("[server]\nport = 8080\n").is_err());
    }
}
