//! Test database helper utilities
//!
//! Provides a migrated PostgreSQL database, either from `TEST_DATABASE_URL`
//! or from a throwaway testcontainers instance.

use std::sync::Once;
use sqlx::PgPool;
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres as PostgresImage;

static INIT: Once = Once::new();

/// Test database helper that manages PostgreSQL test database setup
pub struct TestDatabase {
    pub pool: PgPool,
    pub database_url: String,
    // Keeps the container alive for the lifetime of the pool
    _container: Option<ContainerAsync<PostgresImage>>,
}

impl TestDatabase {
    /// Create a migrated, empty test database
    pub async fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        // Initialize logging once
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt::try_init();
        });

        // For CI/CD environments, use environment variable if available
        let (database_url, container) = if let Ok(url) = std::env::var("TEST_DATABASE_URL") {
            (url, None)
        } else {
            let container = PostgresImage::default()
                .with_tag("16-alpine")
                .start()
                .await?;
            let host = container.get_host().await?;
            let port = container.get_host_port_ipv4(5432).await?;

            (
                format!("postgres://postgres:postgres@{}:{}/postgres", host, port),
                Some(container),
            )
        };

        let pool = PgPool::connect(&database_url).await?;
        hostel_server::database::run_migrations(&pool).await?;

        let db = Self {
            pool,
            database_url,
            _container: container,
        };
        db.cleanup().await?;

        Ok(db)
    }

    /// Clean all test data from the database
    pub async fn cleanup(&self) -> Result<(), sqlx::Error> {
        sqlx::query("TRUNCATE rooms, pan_cards, users RESTART IDENTITY")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Count records in a table
    pub async fn count_records(&self, table: &str) -> Result<i64, sqlx::Error> {
        let count = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
