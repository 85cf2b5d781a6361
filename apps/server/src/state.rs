//! Shared application state

use std::sync::Arc;

use crate::config::Config;
use crate::db::{FacilityStore, PgFacilityStore};
use crate::error::Result;
use crate::services::DirectoryService;

/// State shared across all request handlers.
///
/// Cheap to clone; everything inside is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn FacilityStore>,
    pub directory: DirectoryService,
}

impl AppState {
    /// Connect to PostgreSQL and build the full application state.
    pub async fn new(config: Config) -> Result<Self> {
        let store = PgFacilityStore::connect(&config.database).await?;
        Ok(Self::with_store(config, Arc::new(store)))
    }

    /// Build state around an existing store. Tests use this to swap in an
    /// in-memory store without a database.
    pub fn with_store(config: Config, store: Arc<dyn FacilityStore>) -> Self {
        let directory = DirectoryService::new(store.clone());
        Self {
            config: Arc::new(config),
            store,
            directory,
        }
    }
}
