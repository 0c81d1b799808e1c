//! `/api` routes for roles, users, products and login.

use crate::handlers::{
    create_product, create_role, create_user, delete_product, delete_role, delete_user, list_products,
    list_roles, list_users, login, route_not_found,
};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

/// Unsupported methods on a known path answer like unknown paths.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/roles",
            get(list_roles).post(create_role).fallback(route_not_found),
        )
        .route("/api/roles/:id", delete(delete_role).fallback(route_not_found))
        .route(
            "/api/users",
            get(list_users).post(create_user).fallback(route_not_found),
        )
        .route("/api/users/:id", delete(delete_user).fallback(route_not_found))
        .route(
            "/api/productos",
            get(list_products).post(create_product).fallback(route_not_found),
        )
        .route(
            "/api/productos/:id",
            delete(delete_product).fallback(route_not_found),
        )
        .route("/api/login", post(login).fallback(route_not_found))
        .with_state(state)
}
