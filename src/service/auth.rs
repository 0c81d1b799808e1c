use crate::error::StoreError;
use crate::model::PublicUser;
use crate::sql::SqlParam;
use crate::store::Database;
use serde_json::Value;

pub struct AuthService;

impl AuthService {
    /// Exact match on email and stored password. Several matching rows yield the first one.
    // TODO: compare against a password hash once users are created with hashed passwords.
    pub async fn login(db: &Database, email: &Value, password: &Value) -> Result<Option<PublicUser>, StoreError> {
        db.fetch_optional(
            "SELECT id, identificacion, nombres, apellidos, email, telefono, direccion, \
             sexo, edad, estatus, role_id FROM users WHERE email = ? AND password = ? LIMIT 1",
            &[SqlParam::from_json(email), SqlParam::from_json(password)],
        )
        .await
    }
}
