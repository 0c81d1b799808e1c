//! Welcome text and the catch-all 404.

use crate::error::AppError;

pub const WELCOME: &str = "API de Roles, Usuarios y Productos conectada a MySQL.";

/// Ruta base de la API
#[utoipa::path(
    get,
    path = "/",
    tag = "General",
    responses((status = 200, description = "Mensaje de bienvenida", body = String, content_type = "text/plain"))
)]
pub async fn welcome() -> &'static str {
    WELCOME
}

/// Any path or method without a route.
pub async fn route_not_found() -> AppError {
    AppError::RouteNotFound
}
