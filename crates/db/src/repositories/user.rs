use crate::models::DbUser;
use eyre::Result;
use sqlx::{Pool, Postgres};

pub async fn get_user_by_id(pool: &Pool<Postgres>, id: &str) -> Result<Option<DbUser>> {
    tracing::debug!("Getting user by id: {}", id);

    let user = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, email, name, mentor, specialization, discord_username, intro, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn list_mentors(pool: &Pool<Postgres>, limit: Option<i64>) -> Result<Vec<DbUser>> {
    tracing::debug!("Listing mentors: limit={:?}", limit);

    let mentors = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, email, name, mentor, specialization, discord_username, intro, created_at
        FROM users
        WHERE mentor = TRUE
        ORDER BY name ASC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(mentors)
}
