//! Users: create, list, delete.

use crate::error::AppError;
use crate::extractors::ApiJson;
use crate::model::{CreateUser, CreatedUser, User};
use crate::response::{success_data, success_message, ErrorBody, SuccessMessage};
use crate::service::users::NewUser;
use crate::service::validation::{parse_id, required_field};
use crate::service::{DeleteOutcome, UserService};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

pub const USERS_TAG: &str = "Usuarios";

const MISSING_USER_FIELDS: &str =
    "Los campos obligatorios son: identificacion, nombres, apellidos, email y password.";

impl CreateUser {
    /// Checks the five required fields; optional ones pass through untouched.
    fn into_new_user(self) -> Result<NewUser, AppError> {
        let missing = || AppError::Validation(MISSING_USER_FIELDS.into());
        Ok(NewUser {
            identificacion: required_field(&self.identificacion).ok_or_else(missing)?.clone(),
            nombres: required_field(&self.nombres).ok_or_else(missing)?.clone(),
            apellidos: required_field(&self.apellidos).ok_or_else(missing)?.clone(),
            email: required_field(&self.email).ok_or_else(missing)?.clone(),
            password: required_field(&self.password).ok_or_else(missing)?.clone(),
            telefono: self.telefono,
            direccion: self.direccion,
            sexo: self.sexo,
            edad: self.edad,
            estatus: self.estatus,
            role_id: self.role_id,
        })
    }
}

/// Crear un nuevo usuario
///
/// La respuesta no incluye la contraseña ni los campos opcionales.
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USERS_TAG,
    request_body = CreateUser,
    responses(
        (status = 200, description = "Usuario creado exitosamente", body = CreatedUser),
        (status = 400, description = "Datos inválidos", body = ErrorBody),
        (status = 500, description = "Error del servidor", body = ErrorBody)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateUser>,
) -> Result<impl IntoResponse, AppError> {
    let new_user = body.into_new_user()?;
    let user = UserService::create(&state.db, new_user)
        .await
        .map_err(AppError::storage("Error al crear usuario."))?;
    tracing::info!(id = user.id, "user created");
    Ok(success_data(user))
}

/// Obtener todos los usuarios
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USERS_TAG,
    responses(
        (status = 200, description = "Lista de usuarios obtenida exitosamente", body = [User]),
        (status = 500, description = "Error del servidor", body = ErrorBody)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::list(&state.db)
        .await
        .map_err(AppError::storage("Error al obtener usuarios."))?;
    Ok(success_data(users))
}

/// Eliminar un usuario
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USERS_TAG,
    params(("id" = i64, Path, description = "ID del usuario a eliminar")),
    responses(
        (status = 200, description = "Usuario eliminado exitosamente", body = SuccessMessage),
        (status = 400, description = "ID inválido", body = ErrorBody),
        (status = 404, description = "Usuario no encontrado", body = ErrorBody),
        (status = 500, description = "Error del servidor", body = ErrorBody)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let outcome = match parse_id(&raw_id)? {
        Some(id) => UserService::delete(&state.db, id)
            .await
            .map_err(AppError::storage("Error al eliminar el usuario."))?,
        None => DeleteOutcome::NotFound,
    };
    match outcome {
        DeleteOutcome::Deleted(user) => {
            tracing::info!(id = user.id, "user deleted");
            Ok(success_message(format!(
                "Usuario {} {} eliminado exitosamente.",
                user.nombres, user.apellidos
            )))
        }
        DeleteOutcome::NotFound => Err(AppError::NotFound("El usuario no existe.".into())),
        DeleteOutcome::InUse(_) | DeleteOutcome::NothingDeleted => {
            Err(AppError::NotFound("No se pudo eliminar el usuario.".into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_email_is_rejected() {
        let body = CreateUser {
            identificacion: Some(json!("123")),
            nombres: Some(json!("Ana")),
            apellidos: Some(json!("Lopez")),
            email: Some(json!("")),
            password: Some(json!("pw")),
            ..CreateUser::default()
        };
        assert!(matches!(body.into_new_user(), Err(AppError::Validation(m)) if m == MISSING_USER_FIELDS));
    }

    #[test]
    fn optional_fields_pass_through() {
        let body = CreateUser {
            identificacion: Some(json!(123)),
            nombres: Some(json!("Ana")),
            apellidos: Some(json!("Lopez")),
            email: Some(json!("a@x.com")),
            password: Some(json!("pw")),
            role_id: Some(json!(1)),
            ..CreateUser::default()
        };
        let user = body.into_new_user().unwrap();
        assert_eq!(user.identificacion, json!(123));
        assert_eq!(user.role_id, Some(json!(1)));
        assert_eq!(user.telefono, None);
    }

    #[test]
    fn numeric_strings_are_not_type_checked() {
        let body: CreateUser = serde_json::from_value(json!({
            "identificacion": "123",
            "nombres": "Ana",
            "apellidos": "Lopez",
            "email": "a@x.com",
            "password": "pw",
            "edad": "30",
            "role_id": "1"
        }))
        .unwrap();
        let user = body.into_new_user().unwrap();
        assert_eq!(user.edad, Some(json!("30")));
        assert_eq!(user.role_id, Some(json!("1")));
    }
}
