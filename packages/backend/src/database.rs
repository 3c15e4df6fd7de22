//! # Database handle: PostgreSQL connection pool lifecycle
//!
//! [`Database`] owns the process's `PgPool`. It is created once at startup with
//! [`Database::connect`], handed to whatever needs it (usually through
//! [`crate::AppState`]), and closed at shutdown with [`Database::close`]. There is no
//! global: every user of the pool receives it explicitly.
//!
//! One-shot tools use [`Database::scoped`], which connects, runs a closure, and closes
//! the pool on every exit path, success or failure.

use std::future::Future;

use anyhow::Context as _;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::settings::DatabaseSettings;

#[derive(Clone, Debug)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Open a connection pool.
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .connect(&settings.url)
            .await?;
        tracing::info!(
            max_connections = settings.max_connections,
            "database pool ready"
        );
        Ok(Self { pool })
    }

    /// Apply pending migrations from `packages/backend/migrations`.
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Close every connection; waits for checked-out connections to return.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("database pool closed");
    }

    /// Connect, run `f`, then close the pool whatever `f` returned.
    pub async fn scoped<T, F, Fut>(settings: &DatabaseSettings, f: F) -> anyhow::Result<T>
    where
        F: FnOnce(Database) -> Fut,
        Fut: Future<Output = anyhow::Result<T>>,
    {
        let db = Self::connect(settings)
            .await
            .context("Failed to connect to database")?;
        let result = f(db.clone()).await;
        db.close().await;
        result
    }
}
