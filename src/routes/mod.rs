pub mod api;
pub mod docs;
pub mod status;

pub use api::api_routes;
pub use docs::{docs_routes, DOCS_PATH};
pub use status::status_routes;

use crate::handlers::{route_not_found, welcome};
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Request bodies above this size are refused before reaching a handler.
pub const BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// The whole service: API, docs, status endpoints, welcome text, 404 fallback and middleware.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome).fallback(route_not_found))
        .merge(api_routes(state.clone()))
        .merge(status_routes(state))
        .merge(docs_routes())
        .fallback(route_not_found)
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
