//! Login by email and password.

use crate::error::AppError;
use crate::extractors::ApiJson;
use crate::model::{LoginRequest, PublicUser};
use crate::response::{success_user, ErrorBody};
use crate::service::validation::required_field;
use crate::service::AuthService;
use crate::state::AppState;
use axum::extract::State;
use axum::response::IntoResponse;

pub const AUTH_TAG: &str = "Autenticación";

/// Iniciar sesión
///
/// Devuelve el usuario sin el campo `password` dentro de `user`.
#[utoipa::path(
    post,
    path = "/api/login",
    tag = AUTH_TAG,
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login exitoso", body = PublicUser),
        (status = 400, description = "Datos faltantes", body = ErrorBody),
        (status = 401, description = "Credenciales incorrectas", body = ErrorBody),
        (status = 500, description = "Error del servidor", body = ErrorBody)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (Some(email), Some(password)) = (required_field(&body.email), required_field(&body.password)) else {
        return Err(AppError::Validation(
            "El correo y la contraseña son obligatorios.".into(),
        ));
    };
    let user = AuthService::login(&state.db, email, password)
        .await
        .map_err(AppError::storage("Error en el servidor."))?
        .ok_or_else(|| AppError::Unauthorized("Credenciales incorrectas.".into()))?;
    tracing::info!(id = user.id, "login");
    Ok(success_user(user))
}
