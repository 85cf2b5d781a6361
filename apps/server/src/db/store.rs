//! PostgreSQL-backed facility store

use crate::{
    config::DatabaseConfig,
    db::{
        filter::FacilityFilter,
        query::{BindValue, FacilityQuery},
        traits::FacilityStore,
    },
    models::{Doctor, Facility, Treatment},
    Error, Result,
};
use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::Executor as _;
use std::time::Duration;

/// Production [`FacilityStore`] over a `sqlx` connection pool.
#[derive(Debug, Clone)]
pub struct PgFacilityStore {
    pool: PgPool,
}

impl PgFacilityStore {
    /// Build the pool from configuration and optionally run migrations.
    ///
    /// Every connection gets `statement_timeout` and `lock_timeout` set, so
    /// a slow or wedged query cannot hold a request open indefinitely.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let statement_timeout_ms = config.statement_timeout_seconds * 1000;
        let lock_timeout_ms = config.lock_timeout_seconds * 1000;

        let pool = PgPoolOptions::new()
            .min_connections(config.pool_min_size)
            .max_connections(config.pool_max_size)
            .acquire_timeout(Duration::from_secs(config.pool_timeout_seconds))
            .after_connect(move |conn, _meta| {
                Box::pin(async move {
                    conn.execute(format!("SET statement_timeout = {statement_timeout_ms}").as_str())
                        .await?;
                    conn.execute(format!("SET lock_timeout = {lock_timeout_ms}").as_str())
                        .await?;
                    Ok(())
                })
            })
            .connect(&config.url)
            .await?;

        if config.run_migrations {
            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .map_err(|e| Error::Internal(format!("Failed to run migrations: {e}")))?;
        }

        Ok(Self { pool })
    }
}

#[async_trait]
impl FacilityStore for PgFacilityStore {
    async fn list_facilities(&self, filter: &FacilityFilter) -> Result<Vec<Facility>> {
        let (sql, bind_values) = FacilityQuery::new(filter).build_sql();

        let mut query = sqlx::query_as::<_, Facility>(&sql);
        for value in bind_values {
            query = match value {
                BindValue::Text(v) => query.bind(v),
                BindValue::TextArray(v) => query.bind(v),
                BindValue::Float(v) => query.bind(v),
            };
        }

        let rows = query.fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn get_facility(&self, id: i64) -> Result<Option<Facility>> {
        let row = sqlx::query_as::<_, Facility>("SELECT f.* FROM facilities f WHERE f.id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn list_treatments(&self, facility_id: i64) -> Result<Vec<Treatment>> {
        let rows = sqlx::query_as::<_, Treatment>(
            "SELECT t.* FROM treatments t WHERE t.facility_id = $1 ORDER BY t.name ASC, t.id ASC",
        )
        .bind(facility_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn list_doctors(&self, facility_id: i64) -> Result<Vec<Doctor>> {
        let rows = sqlx::query_as::<_, Doctor>(
            "SELECT d.* FROM doctors d WHERE d.facility_id = $1 ORDER BY d.name ASC, d.id ASC",
        )
        .bind(facility_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
