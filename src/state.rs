use std::sync::Arc;

use crate::error::AppError;
use crate::projects::{ProjectStore, SqliteProjectStore};
use crate::settings::Settings;

/// Shared by every handler. Holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProjectStore>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(store: Arc<dyn ProjectStore>, settings: Settings) -> Self {
        Self {
            store,
            settings: Arc::new(settings),
        }
    }

    /// Open the SQLite store at the configured path and make sure it is
    /// created and seeded before any request is served.
    pub async fn from_settings(settings: Settings) -> Result<Self, AppError> {
        let store = SqliteProjectStore::new(settings.storage.db_path.clone());
        store.initialize().await?;
        Ok(Self::new(Arc::new(store), settings))
    }
}
