use crate::error::AppError;
use crate::models::{NewPrompt, Prompt};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::types::Json;
use std::path::Path;
use tracing::info;

/// Opens (creating if needed) the SQLite database at `path` and applies the schema.
pub async fn init_db(path: &Path) -> Result<SqlitePool, AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            info!("Creating database directory: {:?}", parent);
            std::fs::create_dir_all(parent)?;
        }
    }

    info!("Initializing database at: {}", path.display());

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    info!("Database initialized and migrations applied.");

    Ok(pool)
}

/// Creates the `prompts` table if it does not exist yet.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS prompts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            original_prompt TEXT NOT NULL,
            improved_prompt TEXT NOT NULL,
            metadata TEXT NOT NULL,
            created_at INTEGER NOT NULL,
            updated_at INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

// --- Prompts CRUD ---

pub async fn create_prompt(pool: &SqlitePool, new_prompt: &NewPrompt) -> Result<Prompt, sqlx::Error> {
    let now = Utc::now().timestamp();

    sqlx::query_as::<_, Prompt>(
        r#"
        INSERT INTO prompts (original_prompt, improved_prompt, metadata, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, original_prompt, improved_prompt, metadata, created_at, updated_at
        "#,
    )
    .bind(&new_prompt.original_prompt)
    .bind(&new_prompt.improved_prompt)
    .bind(Json(&new_prompt.metadata))
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

pub async fn get_prompt(pool: &SqlitePool, id: i64) -> Result<Prompt, sqlx::Error> {
    sqlx::query_as::<_, Prompt>(
        r#"
        SELECT id, original_prompt, improved_prompt, metadata, created_at, updated_at
        FROM prompts
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_one(pool)
    .await
}

pub async fn count_prompts(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM prompts")
        .fetch_one(pool)
        .await
}

// --- Store abstraction ---

/// Persistence seam used by the HTTP layer.
///
/// Records are created once per request and never updated or deleted.
#[async_trait]
pub trait PromptStore: Send + Sync + 'static {
    /// Persists a new prompt and returns the stored record.
    async fn save(&self, new_prompt: NewPrompt) -> Result<Prompt, AppError>;
}

/// [`PromptStore`] backed by a SQLite pool.
#[derive(Clone)]
pub struct SqlitePromptStore {
    pool: SqlitePool,
}

impl SqlitePromptStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PromptStore for SqlitePromptStore {
    async fn save(&self, new_prompt: NewPrompt) -> Result<Prompt, AppError> {
        Ok(create_prompt(&self.pool, &new_prompt).await?)
    }
}
