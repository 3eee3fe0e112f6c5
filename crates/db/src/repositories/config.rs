use crate::models::DbMentorshipConfig;
use eyre::Result;
use sqlx::{Pool, Postgres};

/// The mentorship-config document is a single pinned row. `None` means the
/// event has not been configured yet.
pub async fn get_mentorship_config(
    pool: &Pool<Postgres>,
) -> Result<Option<DbMentorshipConfig>> {
    let config = sqlx::query_as::<_, DbMentorshipConfig>(
        r#"
        SELECT is_mentorship_open, start_date, end_date
        FROM mentorship_config
        WHERE id = 1
        "#,
    )
    .fetch_optional(pool)
    .await?;

    Ok(config)
}

/// Creates or replaces the config row. Used by admin/seed tooling.
pub async fn set_mentorship_config(
    pool: &Pool<Postgres>,
    is_mentorship_open: bool,
    start_date: i64,
    end_date: i64,
) -> Result<()> {
    tracing::debug!(
        "Setting mentorship config: open={}, start={}, end={}",
        is_mentorship_open,
        start_date,
        end_date
    );

    sqlx::query(
        r#"
        INSERT INTO mentorship_config (id, is_mentorship_open, start_date, end_date)
        VALUES (1, $1, $2, $3)
        ON CONFLICT (id) DO UPDATE
        SET is_mentorship_open = EXCLUDED.is_mentorship_open,
            start_date = EXCLUDED.start_date,
            end_date = EXCLUDED.end_date
        "#,
    )
    .bind(is_mentorship_open)
    .bind(start_date)
    .bind(end_date)
    .execute(pool)
    .await?;

    Ok(())
}
