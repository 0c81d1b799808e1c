//! REST API for roles, users and products stored in MySQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{Config, DatabaseConfig};
pub use error::{AppError, ConfigError, StoreError};
pub use migration::ensure_tables;
pub use openapi::ApiDoc;
pub use routes::{api_routes, app, docs_routes, status_routes};
pub use state::AppState;
pub use store::Database;
