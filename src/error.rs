//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::response::ErrorBody;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

/// Failures of the storage gateway.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The pool could not hand out a connection.
    #[error("connection: {0}")]
    Connection(#[source] sqlx::Error),
    /// The statement reached the server and failed, or its rows could not be decoded.
    #[error("query: {0}")]
    Query(#[source] sqlx::Error),
}

impl StoreError {
    /// MySQL error code for server-side failures (e.g. 1451 for a restricted foreign key).
    pub fn mysql_code(&self) -> Option<u16> {
        match self {
            StoreError::Query(sqlx::Error::Database(db)) => db
                .try_downcast_ref::<sqlx::mysql::MySqlDatabaseError>()
                .map(|e| e.number()),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => StoreError::Connection(e),
            _ => StoreError::Query(e),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{message}")]
    Storage {
        message: &'static str,
        #[source]
        source: StoreError,
    },
    #[error("Ruta no encontrada")]
    RouteNotFound,
}

impl AppError {
    /// Wraps a store failure with the public message for the action that failed.
    pub fn storage(message: &'static str) -> impl FnOnce(StoreError) -> AppError {
        move |source| AppError::Storage { message, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) | AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Storage { message, source } = &self {
            tracing::error!(error = %source, "{}", message);
        }
        let status = self.status();
        let body = ErrorBody::new(self.to_string());
        (status, Json(body)).into_response()
    }
}
