//! Storage gateway over the MySQL connection pool.
//!
//! Every statement goes through [`execute`], [`fetch_all`], [`fetch_optional`] or [`fetch_scalar`].
//! They take any sqlx executor, so the same calls run against the pool or inside a transaction
//! obtained from [`Database::begin`].

use crate::config::DatabaseConfig;
use crate::error::StoreError;
use crate::sql::SqlParam;
use sqlx::mysql::{MySql, MySqlRow};
use sqlx::{Executor, FromRow, MySqlPool, Transaction};

/// Outcome of a write statement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExecOutcome {
    pub last_insert_id: u64,
    pub rows_affected: u64,
}

impl ExecOutcome {
    /// Generated key of an `INT AUTO_INCREMENT` column.
    pub fn inserted_id(&self) -> Result<i32, StoreError> {
        i32::try_from(self.last_insert_id).map_err(|_| {
            StoreError::Query(sqlx::Error::Protocol(format!(
                "insert id {} out of range for INT",
                self.last_insert_id
            )))
        })
    }
}

/// Handle to the pool. Cheap to clone; passed to handlers through `AppState`.
#[derive(Clone, Debug)]
pub struct Database {
    pool: MySqlPool,
}

impl Database {
    /// Connect eagerly; fails if the server is unreachable.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let pool = config
            .pool_options()
            .connect_with(config.connect_options())
            .await?;
        Ok(Database { pool })
    }

    /// Build the pool without opening a connection. The first statement connects.
    pub fn connect_lazy(config: &DatabaseConfig) -> Self {
        let pool = config.pool_options().connect_lazy_with(config.connect_options());
        Database { pool }
    }

    pub async fn begin(&self) -> Result<Transaction<'static, MySql>, StoreError> {
        Ok(self.pool.begin().await?)
    }

    pub async fn execute(&self, sql: &str, params: &[SqlParam]) -> Result<ExecOutcome, StoreError> {
        execute(&self.pool, sql, params).await
    }

    pub async fn fetch_all<T>(&self, sql: &str, params: &[SqlParam]) -> Result<Vec<T>, StoreError>
    where
        T: for<'r> FromRow<'r, MySqlRow> + Send + Unpin,
    {
        fetch_all(&self.pool, sql, params).await
    }

    pub async fn fetch_optional<T>(&self, sql: &str, params: &[SqlParam]) -> Result<Option<T>, StoreError>
    where
        T: for<'r> FromRow<'r, MySqlRow> + Send + Unpin,
    {
        fetch_optional(&self.pool, sql, params).await
    }

    /// `SELECT 1`, used by `/ready`.
    pub async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

pub async fn execute<'c, E>(executor: E, sql: &str, params: &[SqlParam]) -> Result<ExecOutcome, StoreError>
where
    E: Executor<'c, Database = MySql>,
{
    tracing::debug!(sql = %sql, params = ?params, "execute");
    let mut query = sqlx::query(sql);
    for p in params {
        query = query.bind(p.clone());
    }
    let result = query.execute(executor).await?;
    Ok(ExecOutcome {
        last_insert_id: result.last_insert_id(),
        rows_affected: result.rows_affected(),
    })
}

pub async fn fetch_all<'c, E, T>(executor: E, sql: &str, params: &[SqlParam]) -> Result<Vec<T>, StoreError>
where
    E: Executor<'c, Database = MySql>,
    T: for<'r> FromRow<'r, MySqlRow> + Send + Unpin,
{
    tracing::debug!(sql = %sql, params = ?params, "query");
    let mut query = sqlx::query_as::<_, T>(sql);
    for p in params {
        query = query.bind(p.clone());
    }
    Ok(query.fetch_all(executor).await?)
}

pub async fn fetch_optional<'c, E, T>(executor: E, sql: &str, params: &[SqlParam]) -> Result<Option<T>, StoreError>
where
    E: Executor<'c, Database = MySql>,
    T: for<'r> FromRow<'r, MySqlRow> + Send + Unpin,
{
    tracing::debug!(sql = %sql, params = ?params, "query");
    let mut query = sqlx::query_as::<_, T>(sql);
    for p in params {
        query = query.bind(p.clone());
    }
    Ok(query.fetch_optional(executor).await?)
}

/// Single value from the first column of the first row (e.g. `COUNT(*)`).
pub async fn fetch_scalar<'c, E, T>(executor: E, sql: &str, params: &[SqlParam]) -> Result<T, StoreError>
where
    E: Executor<'c, Database = MySql>,
    T: Send + Unpin,
    (T,): for<'r> FromRow<'r, MySqlRow>,
{
    tracing::debug!(sql = %sql, params = ?params, "query");
    let mut query = sqlx::query_scalar::<_, T>(sql);
    for p in params {
        query = query.bind(p.clone());
    }
    Ok(query.fetch_one(executor).await?)
}
