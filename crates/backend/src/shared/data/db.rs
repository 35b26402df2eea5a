use contracts::domain::a001_profit_distribution_config::aggregate::DistributionConfigEntry;
use contracts::domain::a002_profit_distribution::aggregate::DistributionRecord;
use contracts::domain::a003_attendance::aggregate::Attendance;
use contracts::domain::common::AggregateRoot;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, DbErr,
    Statement,
};
use std::path::Path;

const CREATE_A001_PROFIT_DISTRIBUTION_CONFIG: &str = r#"
    CREATE TABLE a001_profit_distribution_config (
        id TEXT PRIMARY KEY NOT NULL,
        owner_id TEXT NOT NULL,
        category TEXT NOT NULL,
        percentage REAL NOT NULL,
        description TEXT,
        is_active INTEGER NOT NULL DEFAULT 1,
        created_at TEXT,
        updated_at TEXT,
        version INTEGER NOT NULL DEFAULT 1
    );
"#;

const CREATE_A002_PROFIT_DISTRIBUTION: &str = r#"
    CREATE TABLE a002_profit_distribution (
        id TEXT PRIMARY KEY NOT NULL,
        owner_id TEXT NOT NULL,
        month INTEGER NOT NULL,
        year INTEGER NOT NULL,
        total_revenue REAL NOT NULL DEFAULT 0,
        total_costs REAL NOT NULL DEFAULT 0,
        total_profit REAL NOT NULL DEFAULT 0,
        pro_labore_amount REAL,
        equipment_reserve_amount REAL,
        emergency_reserve_amount REAL,
        investment_amount REAL,
        created_at TEXT,
        updated_at TEXT,
        version INTEGER NOT NULL DEFAULT 1
    );
"#;

const CREATE_A003_ATTENDANCE: &str = r#"
    CREATE TABLE a003_attendance (
        id TEXT PRIMARY KEY NOT NULL,
        owner_id TEXT NOT NULL,
        date TEXT NOT NULL,
        value REAL NOT NULL DEFAULT 0,
        discount REAL NOT NULL DEFAULT 0,
        product_cost REAL NOT NULL DEFAULT 0,
        payment_method TEXT,
        payment_status TEXT NOT NULL DEFAULT 'pending',
        observations TEXT,
        created_at TEXT,
        updated_at TEXT,
        version INTEGER NOT NULL DEFAULT 1
    );
"#;

const INDEXES: [&str; 3] = [
    // Не больше одной активной строки на категорию у владельца
    "CREATE UNIQUE INDEX IF NOT EXISTS idx_a001_owner_category_active \
     ON a001_profit_distribution_config (owner_id, category) WHERE is_active = 1;",
    "CREATE INDEX IF NOT EXISTS idx_a002_owner_period \
     ON a002_profit_distribution (owner_id, year, month);",
    "CREATE INDEX IF NOT EXISTS idx_a003_owner_date ON a003_attendance (owner_id, date);",
];

fn build_sqlite_url(path: &Path) -> String {
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    format!("sqlite://{}{}?mode=rwc", prefix, normalized)
}

/// Открыть файл БД (создается при отсутствии) и подготовить схему
pub async fn initialize_database(db_file: &Path) -> anyhow::Result<DatabaseConnection> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };

    let db_url = build_sqlite_url(&absolute_path);
    tracing::info!("Connecting to database: {}", absolute_path.display());
    let conn = connect(&db_url).await?;

    bootstrap_schema(&conn).await?;
    Ok(conn)
}

pub async fn connect(db_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(db_url.to_string());
    options.sqlx_logging(false);
    Database::connect(options).await
}

/// Создать недостающие таблицы и индексы
pub async fn bootstrap_schema(conn: &DatabaseConnection) -> Result<(), DbErr> {
    ensure_table(
        conn,
        &DistributionConfigEntry::full_name(),
        CREATE_A001_PROFIT_DISTRIBUTION_CONFIG,
    )
    .await?;
    ensure_table(
        conn,
        &DistributionRecord::full_name(),
        CREATE_A002_PROFIT_DISTRIBUTION,
    )
    .await?;
    ensure_table(conn, &Attendance::full_name(), CREATE_A003_ATTENDANCE).await?;

    for sql in INDEXES {
        conn.execute(Statement::from_string(DatabaseBackend::Sqlite, sql.to_string()))
            .await?;
    }
    Ok(())
}

async fn ensure_table(
    conn: &DatabaseConnection,
    table_name: &str,
    create_sql: &str,
) -> Result<(), DbErr> {
    let check_table = format!(
        "SELECT name FROM sqlite_master WHERE type='table' AND name='{}';",
        table_name
    );
    let existing = conn
        .query_all(Statement::from_string(DatabaseBackend::Sqlite, check_table))
        .await?;

    if existing.is_empty() {
        tracing::info!("Creating {} table", table_name);
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            create_sql.to_string(),
        ))
        .await?;
    }
    Ok(())
}

/// In-memory БД со схемой для тестов
///
/// Одно соединение: каждое новое соединение к `sqlite::memory:` видит пустую БД.
#[cfg(test)]
pub async fn test_connection() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:".to_string());
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let conn = Database::connect(options).await.unwrap();
    bootstrap_schema(&conn).await.unwrap();
    conn
}
