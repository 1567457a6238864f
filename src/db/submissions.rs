use sqlx::PgPool;

use crate::models::{Submission, SubmissionKind};

// Table names come from `SubmissionKind::table`, never from request input,
// so formatting them into the query text is safe.

pub async fn insert(
    pool: &PgPool,
    kind: SubmissionKind,
    submission: &Submission,
) -> Result<(), sqlx::Error> {
    let query = format!(
        "INSERT INTO {} (id, name, email, company, message, source_page, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7)",
        kind.table()
    );
    sqlx::query(&query)
        .bind(submission.id)
        .bind(&submission.name)
        .bind(&submission.email)
        .bind(&submission.company)
        .bind(&submission.message)
        .bind(&submission.source_page)
        .bind(submission.created_at)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn list_recent(
    pool: &PgPool,
    kind: SubmissionKind,
    limit: i64,
) -> Result<Vec<Submission>, sqlx::Error> {
    let query = format!(
        "SELECT * FROM {} ORDER BY created_at DESC LIMIT $1",
        kind.table()
    );
    sqlx::query_as::<_, Submission>(&query)
        .bind(limit)
        .fetch_all(pool)
        .await
}
