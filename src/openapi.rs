//! OpenAPI document derived from the handler annotations.

use crate::handlers;
use crate::model::{
    CreateProduct, CreateRole, CreateUser, CreatedProduct, CreatedRole, CreatedUser, LoginRequest, Product, PublicUser, Role,
    User,
};
use crate::response::{ErrorBody, SuccessMessage};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "API de Roles, Usuarios y Productos",
        version = "1.0.0",
        description = "API para gestión de roles, usuarios y productos con MySQL"
    ),
    paths(
        handlers::common::welcome,
        handlers::roles::create_role,
        handlers::roles::list_roles,
        handlers::roles::delete_role,
        handlers::users::create_user,
        handlers::users::list_users,
        handlers::users::delete_user,
        handlers::products::create_product,
        handlers::products::list_products,
        handlers::products::delete_product,
        handlers::auth::login,
    ),
    components(schemas(
        Role,
        CreateRole,
        CreatedRole,
        User,
        PublicUser,
        CreateUser,
        CreatedUser,
        LoginRequest,
        Product,
        CreateProduct,
        CreatedProduct,
        ErrorBody,
        SuccessMessage
    )),
    tags(
        (name = "Roles", description = "Gestión de roles"),
        (name = "Usuarios", description = "Gestión de usuarios"),
        (name = "Productos", description = "Gestión de productos"),
        (name = "Autenticación", description = "Inicio de sesión"),
        (name = "General")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_is_documented() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for path in [
            "/",
            "/api/roles",
            "/api/roles/{id}",
            "/api/users",
            "/api/users/{id}",
            "/api/productos",
            "/api/productos/{id}",
            "/api/login",
        ] {
            assert!(paths.contains(&path), "missing {path}");
        }
    }

    #[test]
    fn schemas_are_registered() {
        let doc = ApiDoc::openapi();
        let schemas = doc.components.expect("components").schemas;
        assert!(schemas.contains_key("Role"));
        assert!(schemas.contains_key("CreateUser"));
        assert!(schemas.contains_key("ErrorBody"));
    }
}
