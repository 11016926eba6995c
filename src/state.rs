use crate::config::AppConfig;
use crate::db;
use crate::store::{SqliteStore, Store};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let pool = db::connect(&config).await?;
        db::init_schema(&pool).await?;

        let store = Arc::new(SqliteStore::new(pool)) as Arc<dyn Store>;

        Ok(Self::from_parts(store, config))
    }

    pub fn from_parts(store: Arc<dyn Store>, config: Arc<AppConfig>) -> Self {
        Self { store, config }
    }

    /// State backed by a fresh in-memory database.
    #[cfg(test)]
    pub async fn fake() -> Self {
        let config = Arc::new(AppConfig {
            database_url: "sqlite::memory:".into(),
            db_max_connections: 1,
            host: "127.0.0.1".into(),
            port: 0,
        });
        let store = Arc::new(SqliteStore::new(db::memory_pool().await)) as Arc<dyn Store>;
        Self::from_parts(store, config)
    }
}
