use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, FromRow, ToSchema, Clone, Debug, PartialEq)]
#[schema(example = json!({ "id": 1, "name": "Administrador" }))]
pub struct Role {
    /// ID único del rol
    pub id: i32,
    /// Nombre del rol
    pub name: String,
}

#[derive(Deserialize, ToSchema, Clone, Debug, Default)]
#[schema(example = json!({ "name": "Administrador" }))]
pub struct CreateRole {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub name: Option<Value>,
}

/// The inserted role echoed back with the name as it was submitted.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct CreatedRole {
    pub id: i32,
    #[schema(value_type = String)]
    pub name: Value,
}
