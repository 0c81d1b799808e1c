use super::DeleteOutcome;
use crate::error::StoreError;
use crate::model::{CreatedRole, Role};
use crate::sql::SqlParam;
use serde_json::Value;
use crate::store::{self, Database};

/// MySQL ER_ROW_IS_REFERENCED_2: delete blocked by a foreign key.
const ER_ROW_IS_REFERENCED: u16 = 1451;

pub struct RoleService;

impl RoleService {
    pub async fn create(db: &Database, name: Value) -> Result<CreatedRole, StoreError> {
        let outcome = db
            .execute("INSERT INTO roles (name) VALUES (?)", &[SqlParam::from_json(&name)])
            .await?;
        Ok(CreatedRole {
            id: outcome.inserted_id()?,
            name,
        })
    }

    pub async fn list(db: &Database) -> Result<Vec<Role>, StoreError> {
        db.fetch_all("SELECT id, name FROM roles", &[]).await
    }

    /// Delete a role that no user references.
    ///
    /// The existence check, the reference count and the delete run in one transaction with the
    /// role row locked, so a user cannot be attached to the role between the check and the delete.
    /// The foreign key on `users.role_id` still rejects the delete if that ever happens.
    pub async fn delete(db: &Database, id: i64) -> Result<DeleteOutcome<Role>, StoreError> {
        let mut tx = db.begin().await?;

        let role: Option<Role> = store::fetch_optional(
            &mut *tx,
            "SELECT id, name FROM roles WHERE id = ? FOR UPDATE",
            &[id.into()],
        )
        .await?;
        let Some(role) = role else {
            return Ok(DeleteOutcome::NotFound);
        };

        let users = count_users(&mut tx, id).await?;
        if users > 0 {
            return Ok(DeleteOutcome::InUse(users));
        }

        let deleted = match store::execute(&mut *tx, "DELETE FROM roles WHERE id = ?", &[id.into()]).await {
            Ok(outcome) => outcome,
            Err(e) if e.mysql_code() == Some(ER_ROW_IS_REFERENCED) => {
                let users = count_users(&mut tx, id).await?;
                return Ok(DeleteOutcome::InUse(users.max(1)));
            }
            Err(e) => return Err(e),
        };
        if deleted.rows_affected == 0 {
            return Ok(DeleteOutcome::NothingDeleted);
        }

        tx.commit().await?;
        Ok(DeleteOutcome::Deleted(role))
    }
}

async fn count_users(tx: &mut sqlx::MySqlConnection, role_id: i64) -> Result<i64, StoreError> {
    store::fetch_scalar(tx, "SELECT COUNT(*) FROM users WHERE role_id = ?", &[role_id.into()]).await
}
