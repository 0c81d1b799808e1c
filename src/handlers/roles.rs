//! Roles: create, list, delete.

use crate::error::AppError;
use crate::extractors::ApiJson;
use crate::model::{CreateRole, CreatedRole, Role};
use crate::response::{success_data, success_message, ErrorBody, SuccessMessage};
use crate::service::validation::{parse_id, required_field};
use crate::service::{DeleteOutcome, RoleService};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

pub const ROLES_TAG: &str = "Roles";

/// Crear un nuevo rol
#[utoipa::path(
    post,
    path = "/api/roles",
    tag = ROLES_TAG,
    request_body = CreateRole,
    responses(
        (status = 200, description = "Rol creado exitosamente", body = CreatedRole),
        (status = 400, description = "Datos inválidos", body = ErrorBody),
        (status = 500, description = "Error del servidor", body = ErrorBody)
    )
)]
pub async fn create_role(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateRole>,
) -> Result<impl IntoResponse, AppError> {
    let name = required_field(&body.name)
        .ok_or_else(|| AppError::Validation("El nombre es requerido.".into()))?;
    let role = RoleService::create(&state.db, name.clone())
        .await
        .map_err(AppError::storage("Error al crear rol."))?;
    tracing::info!(id = role.id, "role created");
    Ok(success_data(role))
}

/// Obtener todos los roles
#[utoipa::path(
    get,
    path = "/api/roles",
    tag = ROLES_TAG,
    responses(
        (status = 200, description = "Lista de roles obtenida exitosamente", body = [Role]),
        (status = 500, description = "Error del servidor", body = ErrorBody)
    )
)]
pub async fn list_roles(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let roles = RoleService::list(&state.db)
        .await
        .map_err(AppError::storage("Error al obtener roles."))?;
    Ok(success_data(roles))
}

/// Eliminar un rol
///
/// Se rechaza mientras algún usuario tenga asignado el rol.
#[utoipa::path(
    delete,
    path = "/api/roles/{id}",
    tag = ROLES_TAG,
    params(("id" = i64, Path, description = "ID del rol a eliminar")),
    responses(
        (status = 200, description = "Rol eliminado exitosamente", body = SuccessMessage),
        (status = 400, description = "ID inválido o rol tiene usuarios asociados", body = ErrorBody),
        (status = 404, description = "Rol no encontrado", body = ErrorBody),
        (status = 500, description = "Error del servidor", body = ErrorBody)
    )
)]
pub async fn delete_role(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let outcome = match parse_id(&raw_id)? {
        Some(id) => RoleService::delete(&state.db, id)
            .await
            .map_err(AppError::storage("Error al eliminar el rol."))?,
        None => DeleteOutcome::NotFound,
    };
    match outcome {
        DeleteOutcome::Deleted(role) => {
            tracing::info!(id = role.id, "role deleted");
            Ok(success_message("Rol eliminado exitosamente."))
        }
        DeleteOutcome::NotFound => Err(AppError::NotFound("El rol no existe.".into())),
        DeleteOutcome::InUse(users) => Err(AppError::Conflict(format!(
            "No se puede eliminar el rol porque tiene {} usuario(s) asociado(s). \
             Primero cambie o elimine los usuarios asociados.",
            users
        ))),
        DeleteOutcome::NothingDeleted => Err(AppError::NotFound("No se pudo eliminar el rol.".into())),
    }
}
