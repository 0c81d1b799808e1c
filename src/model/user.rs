use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;

/// A row of `users` exactly as stored, password included.
#[derive(Serialize, Deserialize, FromRow, ToSchema, Clone, Debug, PartialEq)]
pub struct User {
    pub id: i32,
    /// Número de identificación
    pub identificacion: String,
    pub nombres: String,
    pub apellidos: String,
    pub email: String,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
    pub password: String,
    /// `M` o `F`
    pub sexo: Option<String>,
    pub edad: Option<i32>,
    /// `activo` o `inactivo`
    pub estatus: Option<String>,
    pub role_id: Option<i32>,
}

/// A user as returned by login: every column except the password.
#[derive(Serialize, Deserialize, FromRow, ToSchema, Clone, Debug, PartialEq)]
pub struct PublicUser {
    pub id: i32,
    pub identificacion: String,
    pub nombres: String,
    pub apellidos: String,
    pub email: String,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
    pub sexo: Option<String>,
    pub edad: Option<i32>,
    pub estatus: Option<String>,
    pub role_id: Option<i32>,
}

impl From<User> for PublicUser {
    fn from(u: User) -> Self {
        PublicUser {
            id: u.id,
            identificacion: u.identificacion,
            nombres: u.nombres,
            apellidos: u.apellidos,
            email: u.email,
            telefono: u.telefono,
            direccion: u.direccion,
            sexo: u.sexo,
            edad: u.edad,
            estatus: u.estatus,
            role_id: u.role_id,
        }
    }
}

/// Fields are only checked for presence. Their JSON types are not checked; numbers and strings
/// are both accepted and the database converts them to the column types.
#[derive(Deserialize, ToSchema, Clone, Debug, Default)]
#[schema(example = json!({
    "identificacion": "123",
    "nombres": "Ana",
    "apellidos": "Lopez",
    "email": "a@x.com",
    "password": "pw",
    "sexo": "F",
    "edad": 30,
    "estatus": "activo",
    "role_id": 1
}))]
pub struct CreateUser {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub identificacion: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub nombres: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub apellidos: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub email: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub telefono: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub direccion: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub password: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub sexo: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub edad: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub estatus: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub role_id: Option<Value>,
}

/// Response for a created user: the password and optional columns are left out.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct CreatedUser {
    pub id: i32,
    #[schema(value_type = String)]
    pub identificacion: Value,
    #[schema(value_type = String)]
    pub nombres: Value,
    #[schema(value_type = String)]
    pub apellidos: Value,
    #[schema(value_type = String)]
    pub email: Value,
}

#[derive(Deserialize, ToSchema, Clone, Debug, Default)]
#[schema(example = json!({ "email": "usuario@ejemplo.com", "password": "123456" }))]
pub struct LoginRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub email: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub password: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_fields_keep_their_json_type() {
        let body: CreateUser = serde_json::from_str(
            r#"{"identificacion": 123, "telefono": "555", "edad": "30", "role_id": "1"}"#,
        )
        .unwrap();
        assert_eq!(body.identificacion, Some(Value::from(123)));
        assert_eq!(body.edad, Some(Value::from("30")));
        assert_eq!(body.role_id, Some(Value::from("1")));
        assert!(body.nombres.is_none());
    }

    #[test]
    fn public_user_has_no_password() {
        let user = User {
            id: 7,
            identificacion: "123".into(),
            nombres: "Ana".into(),
            apellidos: "Lopez".into(),
            email: "a@x.com".into(),
            telefono: None,
            direccion: None,
            password: "pw".into(),
            sexo: Some("F".into()),
            edad: None,
            estatus: None,
            role_id: Some(1),
        };
        let json = serde_json::to_value(PublicUser::from(user)).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["role_id"], 1);
    }
}
