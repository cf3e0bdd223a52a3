// ABOUTME: Database connection management and shared handler state
// ABOUTME: Builds the Postgres pool and storage layer passed to API handlers

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use std::sync::Arc;
use tracing::{debug, info};

use crate::error::QuestionsResult;
use crate::storage::{QuestionStorage, SCHEMA_SQL};

/// Connection settings for the questions database. Values normally come from
/// the environment; missing credentials surface as a connection failure when
/// the pool is first used, not as a configuration error.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub user: String,
    pub host: String,
    pub database: String,
    pub password: String,
    pub port: u16,
}

/// Shared database state for API handlers
#[derive(Clone)]
pub struct DbState {
    pub pool: PgPool,
    pub question_storage: Arc<QuestionStorage>,
}

impl DbState {
    /// Create new database state from a Postgres pool
    pub fn new(pool: PgPool) -> Self {
        let question_storage = Arc::new(QuestionStorage::new(pool.clone()));
        Self {
            pool,
            question_storage,
        }
    }

    /// Connect to the database and ensure the questions table exists
    pub async fn init(config: &DatabaseConfig) -> QuestionsResult<Self> {
        let options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.database);

        debug!(
            "Connecting to database {} at {}:{}",
            config.database, config.host, config.port
        );

        // Configure connection pool
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect_with(options)
            .await?;

        info!("Database connection established");

        sqlx::query(SCHEMA_SQL).execute(&pool).await?;

        debug!("Questions table ensured");

        Ok(Self::new(pool))
    }
}
