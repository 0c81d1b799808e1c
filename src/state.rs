//! Shared application state for all routes.

use crate::store::Database;

/// Built once in `main` and handed to every router; the pool inside is the only shared resource.
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        AppState { db }
    }
}
