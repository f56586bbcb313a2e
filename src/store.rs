//! Embedded relational store.
//!
//! `Store::open` brings up an in-memory SQLite engine, creates one table per
//! entity kind from the schema descriptors and seeds the fixture corpus, all
//! before the handle is handed out. Cloning a `Store` shares the same
//! underlying database, so everything constructed from it observes one
//! initialization. There is no durability: the data lives and dies with the
//! process.

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tracing::info;

use crate::error::AppError;
use crate::fixtures;
use crate::models::{Event, Hostel, Job, NewsItem, RoommateProfile, University};
use crate::schema::TableSchema;
use crate::service::{Entity, insert_row, to_object};

const TABLES: [TableSchema; 6] = [
    University::SCHEMA,
    Hostel::SCHEMA,
    NewsItem::SCHEMA,
    Event::SCHEMA,
    Job::SCHEMA,
    RoommateProfile::SCHEMA,
];

pub const IN_MEMORY_URL: &str = "sqlite::memory:";

#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Opens the engine, creates the schema and seeds the fixtures. Any
    /// failure here is fatal for the session; there is no retry path.
    pub async fn open(url: &str) -> Result<Self, AppError> {
        // An in-memory SQLite database exists only as long as its connection,
        // so the pool is pinned to a single connection that never expires.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect(url)
            .await
            .map_err(|e| AppError::Initialization(e.to_string()))?;

        create_schema(&pool).await?;
        seed(&pool).await?;

        Ok(Self { pool })
    }

    pub async fn open_in_memory() -> Result<Self, AppError> {
        Self::open(IN_MEMORY_URL).await
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Explicit shutdown for the composition point.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

async fn create_schema(pool: &SqlitePool) -> Result<(), AppError> {
    for table in &TABLES {
        sqlx::query(&table.create_table_sql())
            .execute(pool)
            .await
            .map_err(|e| {
                AppError::Initialization(format!("creating table {}: {}", table.table, e))
            })?;
    }
    Ok(())
}

async fn seed(pool: &SqlitePool) -> Result<(), AppError> {
    let universities = seed_rows(pool, &fixtures::universities()).await?;
    let hostels = seed_rows(pool, &fixtures::hostels()).await?;
    let news = seed_rows(pool, &fixtures::news_items()).await?;
    let events = seed_rows(pool, &fixtures::events()).await?;
    let jobs = seed_rows(pool, &fixtures::jobs()).await?;
    let profiles = seed_rows(pool, &fixtures::roommate_profiles()).await?;

    info!(
        "seeded store: {} universities, {} hostels, {} news, {} events, {} jobs, {} profiles",
        universities, hostels, news, events, jobs, profiles
    );
    Ok(())
}

async fn seed_rows<T: Entity>(pool: &SqlitePool, rows: &[T]) -> Result<usize, AppError> {
    for row in rows {
        let record = to_object(row)
            .map_err(|e| AppError::Initialization(format!("seeding {}: {}", T::SCHEMA.table, e)))?;
        insert_row(pool, &T::SCHEMA, &record)
            .await
            .map_err(|e| AppError::Initialization(format!("seeding {}: {}", T::SCHEMA.table, e)))?;
    }
    Ok(rows.len())
}
