use sqlx::PgPool;

use crate::models::StatusCheck;

pub async fn insert(pool: &PgPool, status: &StatusCheck) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO status_checks (id, client_name, timestamp) VALUES ($1, $2, $3)")
        .bind(status.id)
        .bind(&status.client_name)
        .bind(status.timestamp)
        .execute(pool)
        .await?;
    Ok(())
}

/// Unsorted read; the status widget shows checks in whatever order the
/// storage returns them.
pub async fn list(pool: &PgPool, limit: i64) -> Result<Vec<StatusCheck>, sqlx::Error> {
    sqlx::query_as::<_, StatusCheck>("SELECT * FROM status_checks LIMIT $1")
        .bind(limit)
        .fetch_all(pool)
        .await
}
