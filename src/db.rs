use std::str::FromStr;

use anyhow::Context;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
use tracing::info;

use crate::config::AppConfig;

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id            INTEGER PRIMARY KEY AUTOINCREMENT,
        username      VARCHAR(100) NOT NULL UNIQUE,
        email         VARCHAR(100) NOT NULL UNIQUE,
        password      VARCHAR(200) NOT NULL,
        is_admin      BOOLEAN NOT NULL DEFAULT 0,
        profile_photo VARCHAR(300)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS questions (
        id         INTEGER PRIMARY KEY AUTOINCREMENT,
        title      VARCHAR(200),
        body       TEXT,
        created_at TEXT NOT NULL,
        user_id    INTEGER REFERENCES users (id)
    )
    "#,
    r#"CREATE INDEX IF NOT EXISTS idx_questions_user_id ON questions (user_id)"#,
    // question_id deliberately carries no foreign key
    r#"
    CREATE TABLE IF NOT EXISTS answers (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        body        TEXT,
        created_at  TEXT NOT NULL,
        question_id INTEGER,
        user_id     INTEGER REFERENCES users (id)
    )
    "#,
    r#"CREATE INDEX IF NOT EXISTS idx_answers_user_id ON answers (user_id)"#,
];

pub async fn connect(config: &AppConfig) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .with_context(|| format!("parse DATABASE_URL {}", config.database_url))?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect_with(options)
        .await
        .context("connect to database")?;
    Ok(pool)
}

/// Creates the three entity tables if they are not there yet.
pub async fn init_schema(db: &SqlitePool) -> anyhow::Result<()> {
    for statement in SCHEMA {
        sqlx::query(statement)
            .execute(db)
            .await
            .context("create schema")?;
    }
    info!("schema ready");
    Ok(())
}

/// Single-connection in-memory database with the schema applied.
#[cfg(test)]
pub async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    init_schema(&pool).await.expect("schema");
    pool
}
