//! JSON body extractor whose rejections use the error envelope.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Like `axum::Json`, but a malformed body is a 400 `{success:false, message}`.
///
/// A request without a JSON content type is read as `{}`, so the handler's own
/// required-field checks decide the response.
#[derive(Clone, Debug)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(JsonRejection::MissingJsonContentType(rejection)) => {
                serde_json::from_value(Value::Object(Map::new()))
                    .map(ApiJson)
                    .map_err(|_| rejection_to_error(rejection.into()))
            }
            Err(rejection) => Err(rejection_to_error(rejection)),
        }
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    tracing::debug!(error = %rejection.body_text(), "rejected request body");
    let message = match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            "Se esperaba un cuerpo JSON (Content-Type: application/json).".to_string()
        }
        JsonRejection::JsonSyntaxError(_) => "El cuerpo de la solicitud no es JSON válido.".to_string(),
        JsonRejection::JsonDataError(e) => format!("Datos inválidos: {}", e.body_text()),
        other => format!("Solicitud inválida: {}", other.body_text()),
    };
    AppError::Validation(message)
}
