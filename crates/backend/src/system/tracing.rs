use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "info,sqlx=warn,sea_orm=warn";

/// Инициализация системы трассировки (tracing)
///
/// Логи пишутся в:
/// - stdout (с цветами)
/// - `<log_dir>/backend.log` (без цветов)
///
/// Фильтр: RUST_LOG, затем `logging.filter` из конфигурации, затем значение по умолчанию.
pub fn initialize(log_dir: &Path, configured_filter: Option<&str>) -> anyhow::Result<()> {
    println!("========================================");
    println!("  LOGGING SYSTEM INITIALIZATION");
    println!("========================================\n");

    if let Err(e) = std::fs::create_dir_all(log_dir) {
        println!("✗ ERROR: Cannot create log directory: {}", e);
        println!("  Path: {}", log_dir.display());
        return Err(anyhow::anyhow!("Cannot create log directory: {}", e));
    }
    println!("✓ Log directory ready: {}", log_dir.display());

    let log_file_path = log_dir.join("backend.log");
    let log_file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)
    {
        Ok(f) => {
            println!("✓ Log file opened: {}", log_file_path.display());
            f
        }
        Err(e) => {
            println!("✗ ERROR: Cannot open log file: {}", e);
            println!("  Path: {}", log_file_path.display());
            return Err(anyhow::anyhow!("Cannot open log file: {}", e));
        }
    };

    let log_level = resolve_filter(std::env::var("RUST_LOG").ok(), configured_filter);
    println!("✓ Log level: {}", log_level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(log_level))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    println!("✓ Tracing subscriber initialized");
    println!("========================================\n");

    Ok(())
}

fn resolve_filter(env_filter: Option<String>, configured_filter: Option<&str>) -> String {
    env_filter
        .filter(|f| !f.trim().is_empty())
        .or_else(|| configured_filter.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}
