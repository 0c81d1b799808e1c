//! Standard response envelope: `{success, data|message|user}`.

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize)]
pub struct SuccessData<T> {
    pub success: bool,
    pub data: T,
}

#[derive(Serialize, ToSchema)]
pub struct SuccessMessage {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize)]
pub struct SuccessUser<T> {
    pub success: bool,
    pub user: T,
}

/// Body of every failure response.
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        ErrorBody {
            success: false,
            message: message.into(),
        }
    }
}

pub fn success_data<T: Serialize>(data: T) -> Json<SuccessData<T>> {
    Json(SuccessData { success: true, data })
}

pub fn success_message(message: impl Into<String>) -> Json<SuccessMessage> {
    Json(SuccessMessage {
        success: true,
        message: message.into(),
    })
}

pub fn success_user<T: Serialize>(user: T) -> Json<SuccessUser<T>> {
    Json(SuccessUser { success: true, user })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelopes_serialize_flat() {
        let Json(body) = success_data(serde_json::json!({ "id": 1, "name": "Admin" }));
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            serde_json::json!({ "success": true, "data": { "id": 1, "name": "Admin" } })
        );
        let Json(body) = success_message("Rol eliminado exitosamente.");
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            serde_json::json!({ "success": true, "message": "Rol eliminado exitosamente." })
        );
    }
}
