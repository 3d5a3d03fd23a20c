use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::store::*;
use crate::error::AppError;

/// Rows inserted by `initialize` when the table is empty, in insertion order.
/// Listing is id-descending, so the last entry shows up first.
pub const SEED_PROJECTS: [(&str, &str, &str); 2] = [
    (
        "Campus Cravings",
        "Full‑stack web app connecting IU students with local restaurant deals.",
        "Campus-Cravings.png",
    ),
    (
        "Fantasy Football Predictions",
        "Python visualizations forecasting fantasy performance from historical NFL data.",
        "Fantasy-football.png",
    ),
];

/// SQLite-backed project store.
///
/// Holds only the database path; every operation opens its own connection
/// on the blocking thread pool and drops it before returning.
#[derive(Debug, Clone)]
pub struct SqliteProjectStore {
    db_path: PathBuf,
}

impl SqliteProjectStore {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn open(&self) -> Result<Connection, AppError> {
        Connection::open(&self.db_path).map_err(|e| {
            AppError::StorageError(format!(
                "Failed to open database at '{}': {}",
                self.db_path.display(),
                e
            ))
        })
    }

    fn ensure_parent_dir(&self) -> Result<(), AppError> {
        if let Some(parent) = self.db_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    AppError::StorageError(format!(
                        "Failed to create database directory '{}': {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }
        Ok(())
    }

    /// Run a blocking store operation off the async workers.
    async fn run_blocking<T, F>(&self, op: F) -> Result<T, AppError>
    where
        T: Send + 'static,
        F: FnOnce(&SqliteProjectStore) -> Result<T, AppError> + Send + 'static,
    {
        let store = self.clone();
        tokio::task::spawn_blocking(move || op(&store))
            .await
            .map_err(|e| AppError::StorageError(format!("Storage task failed: {}", e)))?
    }

    fn create_and_seed(&self) -> Result<usize, AppError> {
        self.ensure_parent_dir()?;
        let mut conn = self.open()?;

        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS projects (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                Title TEXT NOT NULL,
                Description TEXT,
                ImageFileName TEXT
            );",
        )
        .map_err(|e| AppError::StorageError(format!("Failed to create projects table: {}", e)))?;

        // Seeding looks at the row count only, never at content.
        if count_rows(&conn)? > 0 {
            debug!(path = %self.db_path.display(), "projects table already populated, skipping seed");
            return Ok(0);
        }

        let tx = conn
            .transaction()
            .map_err(|e| AppError::StorageError(format!("Failed to begin seed transaction: {}", e)))?;
        for (title, description, image) in SEED_PROJECTS {
            tx.execute(
                "INSERT INTO projects (Title, Description, ImageFileName) VALUES (?1, ?2, ?3)",
                rusqlite::params![title, description, image],
            )
            .map_err(|e| AppError::StorageError(format!("Failed to seed project: {}", e)))?;
        }
        tx.commit()
            .map_err(|e| AppError::StorageError(format!("Failed to commit seed projects: {}", e)))?;

        info!(path = %self.db_path.display(), seeded = SEED_PROJECTS.len(), "seeded projects table");
        Ok(SEED_PROJECTS.len())
    }

    fn query_all(&self) -> Result<Vec<Project>, AppError> {
        let conn = self.open()?;

        let mut stmt = conn
            .prepare("SELECT id, Title, Description, ImageFileName FROM projects ORDER BY id DESC")
            .map_err(|e| AppError::StorageError(format!("Failed to prepare list query: {}", e)))?;

        let projects = stmt
            .query_map([], |row| {
                Ok(Project {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    description: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                    image_file_name: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                })
            })
            .map_err(|e| AppError::StorageError(format!("Failed to query projects: {}", e)))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| AppError::StorageError(format!("Failed to collect projects: {}", e)))?;

        Ok(projects)
    }

    fn insert(&self, input: NewProject) -> Result<(), AppError> {
        let conn = self.open()?;

        conn.execute(
            "INSERT INTO projects (Title, Description, ImageFileName) VALUES (?1, ?2, ?3)",
            rusqlite::params![input.title, input.description, input.image_file_name],
        )
        .map_err(|e| AppError::StorageError(format!("Failed to add project: {}", e)))?;

        debug!(id = conn.last_insert_rowid(), "added project");
        Ok(())
    }
}

fn count_rows(conn: &Connection) -> Result<usize, AppError> {
    conn.query_row("SELECT COUNT(*) FROM projects", [], |row| row.get::<_, i64>(0))
        .map(|n| n as usize)
        .map_err(|e| AppError::StorageError(format!("Failed to count projects: {}", e)))
}

#[async_trait::async_trait]
impl ProjectStore for SqliteProjectStore {
    async fn initialize(&self) -> Result<usize, AppError> {
        self.run_blocking(|store| store.create_and_seed()).await
    }

    async fn list_all(&self) -> Result<Vec<Project>, AppError> {
        self.run_blocking(|store| store.query_all()).await
    }

    async fn add(&self, input: NewProject) -> Result<(), AppError> {
        self.run_blocking(move |store| store.insert(input)).await
    }

    async fn count(&self) -> Result<usize, AppError> {
        self.run_blocking(|store| count_rows(&store.open()?)).await
    }
}
