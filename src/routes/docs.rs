//! Serves the generated OpenAPI document.

use crate::openapi::ApiDoc;
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

pub const DOCS_PATH: &str = "/api-docs";

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /api-docs and /api-docs/openapi.json.
pub fn docs_routes() -> Router {
    Router::new()
        .route(DOCS_PATH, get(openapi_json))
        .route("/api-docs/openapi.json", get(openapi_json))
}
