use sqlx::mysql::MySqlRow;
use sqlx::{FromRow, MySqlPool};
use tracing::{debug, warn};

use super::classify::{ConstraintViolation, classify};
use crate::domain::error::DomainError;
use crate::domain::order::OrderBy;

pub(crate) const NOT_EXIST: &str = "not exist";

pub(crate) fn now_ts() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Turns a driver error into a domain error. Constraint violations become
/// validation errors; `duplicate` names the field and message reported for a
/// unique-key hit, and without it a duplicate stays a database error.
pub(crate) fn map_db_error(err: sqlx::Error, duplicate: Option<(&str, &str)>) -> DomainError {
    match (classify(&err), duplicate) {
        (Some(ConstraintViolation::DuplicateKey), Some((field, reason))) => {
            debug!(field, error = %err, "duplicate key reported as validation error");
            DomainError::validation(field, reason)
        }
        (Some(ConstraintViolation::ForeignKey { field }), _) => {
            debug!(field = %field, error = %err, "missing reference reported as validation error");
            DomainError::validation(field, NOT_EXIST)
        }
        _ => {
            warn!(error = %err, "database operation failed");
            DomainError::Database(err)
        }
    }
}

pub(crate) fn map_sqlx_error(err: sqlx::Error) -> DomainError {
    map_db_error(err, None)
}

pub(crate) fn insert_id(last_insert_id: u64) -> Result<i64, DomainError> {
    i64::try_from(last_insert_id)
        .map_err(|_| DomainError::Unexpected(format!("insert id out of range: {last_insert_id}")))
}

pub(crate) async fn fetch_all<T>(
    pool: &MySqlPool,
    table: &str,
    order: Option<&OrderBy>,
) -> Result<Vec<T>, DomainError>
where
    T: for<'r> FromRow<'r, MySqlRow> + Send + Unpin,
{
    let order = order.map(OrderBy::to_sql).unwrap_or_default();
    let sql = format!("SELECT * FROM {table}{order}");
    sqlx::query_as::<_, T>(&sql)
        .fetch_all(pool)
        .await
        .map_err(map_sqlx_error)
}

pub(crate) async fn fetch_by_id<T>(
    pool: &MySqlPool,
    table: &str,
    id: i64,
) -> Result<Option<T>, DomainError>
where
    T: for<'r> FromRow<'r, MySqlRow> + Send + Unpin,
{
    let sql = format!("SELECT * FROM {table} WHERE id = ?");
    sqlx::query_as::<_, T>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(map_sqlx_error)
}

/// Rows whose foreign key `column` points at `id`.
pub(crate) async fn fetch_by_column<T>(
    pool: &MySqlPool,
    table: &str,
    column: &str,
    id: i64,
) -> Result<Vec<T>, DomainError>
where
    T: for<'r> FromRow<'r, MySqlRow> + Send + Unpin,
{
    let sql = format!("SELECT * FROM {table} WHERE {column} = ?");
    sqlx::query_as::<_, T>(&sql)
        .bind(id)
        .fetch_all(pool)
        .await
        .map_err(map_sqlx_error)
}

pub(crate) async fn count_rows(pool: &MySqlPool, table: &str) -> Result<i64, DomainError> {
    let sql = format!("SELECT COUNT(*) FROM {table}");
    sqlx::query_scalar::<_, i64>(&sql)
        .fetch_one(pool)
        .await
        .map_err(map_sqlx_error)
}

pub(crate) async fn row_exists(pool: &MySqlPool, table: &str, id: i64) -> Result<bool, DomainError> {
    let sql = format!("SELECT COUNT(*) FROM {table} WHERE id = ?");
    let count = sqlx::query_scalar::<_, i64>(&sql)
        .bind(id)
        .fetch_one(pool)
        .await
        .map_err(map_sqlx_error)?;
    Ok(count > 0)
}

pub(crate) async fn delete_by_id(pool: &MySqlPool, table: &str, id: i64) -> Result<u64, DomainError> {
    let sql = format!("DELETE FROM {table} WHERE id = ?");
    let result = sqlx::query(&sql)
        .bind(id)
        .execute(pool)
        .await
        .map_err(map_sqlx_error)?;
    Ok(result.rows_affected())
}

/// Sets one text column (logo, cv, photo) and stamps the update audit.
pub(crate) async fn update_text_column(
    pool: &MySqlPool,
    table: &str,
    column: &str,
    id: i64,
    value: &str,
    updated_by: &str,
) -> Result<u64, DomainError> {
    let sql = format!("UPDATE {table} SET {column} = ?, updated_by = ?, updated_at = ? WHERE id = ?");
    let result = sqlx::query(&sql)
        .bind(value)
        .bind(updated_by)
        .bind(now_ts())
        .bind(id)
        .execute(pool)
        .await
        .map_err(map_sqlx_error)?;
    Ok(result.rows_affected())
}
