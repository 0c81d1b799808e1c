use super::DeleteOutcome;
use crate::error::StoreError;
use crate::model::{CreatedUser, User};
use crate::sql::SqlParam;
use crate::store::Database;
use serde_json::Value;
use sqlx::FromRow;

/// Validated input for an insert: the five required columns plus the optional ones.
/// Values are bound as sent and MySQL converts them to the column types.
#[derive(Clone, Debug)]
pub struct NewUser {
    pub identificacion: Value,
    pub nombres: Value,
    pub apellidos: Value,
    pub email: Value,
    pub telefono: Option<Value>,
    pub direccion: Option<Value>,
    pub password: Value,
    pub sexo: Option<Value>,
    pub edad: Option<Value>,
    pub estatus: Option<Value>,
    pub role_id: Option<Value>,
}

/// The columns a delete message needs.
#[derive(FromRow, Clone, Debug, PartialEq)]
pub struct UserName {
    pub id: i32,
    pub nombres: String,
    pub apellidos: String,
}

pub struct UserService;

impl UserService {
    pub async fn create(db: &Database, user: NewUser) -> Result<CreatedUser, StoreError> {
        let params: [SqlParam; 11] = [
            (&user.identificacion).into(),
            (&user.nombres).into(),
            (&user.apellidos).into(),
            (&user.email).into(),
            user.telefono.as_ref().into(),
            user.direccion.as_ref().into(),
            (&user.password).into(),
            user.sexo.as_ref().into(),
            user.edad.as_ref().into(),
            user.estatus.as_ref().into(),
            user.role_id.as_ref().into(),
        ];
        let outcome = db
            .execute(
                "INSERT INTO users \
                 (identificacion, nombres, apellidos, email, telefono, direccion, password, sexo, edad, estatus, role_id) \
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
                &params,
            )
            .await?;
        Ok(CreatedUser {
            id: outcome.inserted_id()?,
            identificacion: user.identificacion,
            nombres: user.nombres,
            apellidos: user.apellidos,
            email: user.email,
        })
    }

    /// Every column, password included.
    pub async fn list(db: &Database) -> Result<Vec<User>, StoreError> {
        db.fetch_all(
            "SELECT id, identificacion, nombres, apellidos, email, telefono, direccion, password, \
             sexo, edad, estatus, role_id FROM users",
            &[],
        )
        .await
    }

    pub async fn delete(db: &Database, id: i64) -> Result<DeleteOutcome<UserName>, StoreError> {
        let found: Option<UserName> = db
            .fetch_optional("SELECT id, nombres, apellidos FROM users WHERE id = ?", &[id.into()])
            .await?;
        let Some(user) = found else {
            return Ok(DeleteOutcome::NotFound);
        };
        let outcome = db.execute("DELETE FROM users WHERE id = ?", &[id.into()]).await?;
        if outcome.rows_affected == 0 {
            return Ok(DeleteOutcome::NothingDeleted);
        }
        Ok(DeleteOutcome::Deleted(user))
    }
}
