use crate::models::{BookingFields, DbMentorshipSlot, SlotFilter};
use eyre::Result;
use sqlx::{PgConnection, Pool, Postgres};
use uuid::Uuid;

pub async fn get_slot_by_id(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbMentorshipSlot>> {
    tracing::debug!("Getting mentorship slot by id: {}", id);

    let slot = sqlx::query_as::<_, DbMentorshipSlot>(
        r#"
        SELECT id, mentor_id, start_time, end_time, location, offline_location,
               hacker_id, hacker_name, team_name, hacker_description,
               mentor_notes, mentor_mark_as_done, mentor_mark_as_afk, created_at
        FROM mentorship_slots
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(slot)
}

pub async fn list_slots_by_mentor(
    pool: &Pool<Postgres>,
    mentor_id: &str,
    filter: &SlotFilter,
) -> Result<Vec<DbMentorshipSlot>> {
    tracing::debug!(
        "Listing mentorship slots for mentor {}: filter={:?}",
        mentor_id,
        filter
    );

    let slots = sqlx::query_as::<_, DbMentorshipSlot>(
        r#"
        SELECT id, mentor_id, start_time, end_time, location, offline_location,
               hacker_id, hacker_name, team_name, hacker_description,
               mentor_notes, mentor_mark_as_done, mentor_mark_as_afk, created_at
        FROM mentorship_slots
        WHERE mentor_id = $1
          AND ($2::BIGINT IS NULL OR start_time >= $2)
          AND ($3::BIGINT IS NULL OR start_time <= $3)
        ORDER BY start_time ASC
        LIMIT $4
        "#,
    )
    .bind(mentor_id)
    .bind(filter.start_after)
    .bind(filter.start_before)
    .bind(filter.limit)
    .fetch_all(pool)
    .await?;

    Ok(slots)
}

pub async fn list_slots_by_hacker(
    pool: &Pool<Postgres>,
    hacker_id: &str,
    filter: &SlotFilter,
) -> Result<Vec<DbMentorshipSlot>> {
    tracing::debug!(
        "Listing mentorship slots booked by hacker {}: filter={:?}",
        hacker_id,
        filter
    );

    let slots = sqlx::query_as::<_, DbMentorshipSlot>(
        r#"
        SELECT id, mentor_id, start_time, end_time, location, offline_location,
               hacker_id, hacker_name, team_name, hacker_description,
               mentor_notes, mentor_mark_as_done, mentor_mark_as_afk, created_at
        FROM mentorship_slots
        WHERE hacker_id = $1
          AND ($2::BIGINT IS NULL OR start_time >= $2)
          AND ($3::BIGINT IS NULL OR start_time <= $3)
        ORDER BY start_time ASC
        LIMIT $4
        "#,
    )
    .bind(hacker_id)
    .bind(filter.start_after)
    .bind(filter.start_before)
    .bind(filter.limit)
    .fetch_all(pool)
    .await?;

    Ok(slots)
}

/// Number of slots the hacker holds that have not started yet. Past
/// bookings never count against the quota.
pub async fn count_future_bookings(
    pool: &Pool<Postgres>,
    hacker_id: &str,
    now: i64,
) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM mentorship_slots
        WHERE hacker_id = $1 AND start_time > $2
        "#,
    )
    .bind(hacker_id)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(count)
}

/// Batch read for the booking transaction. Row locks are taken so
/// concurrent bookings of overlapping slot sets serialize; callers compare
/// the result cardinality against the requested id set to detect missing
/// slots. Must run inside a transaction.
pub async fn get_slots_for_update(
    conn: &mut PgConnection,
    ids: &[Uuid],
) -> Result<Vec<DbMentorshipSlot>> {
    tracing::debug!("Locking {} mentorship slot(s) for booking", ids.len());

    let slots = sqlx::query_as::<_, DbMentorshipSlot>(
        r#"
        SELECT id, mentor_id, start_time, end_time, location, offline_location,
               hacker_id, hacker_name, team_name, hacker_description,
               mentor_notes, mentor_mark_as_done, mentor_mark_as_afk, created_at
        FROM mentorship_slots
        WHERE id = ANY($1)
        FOR UPDATE
        "#,
    )
    .bind(ids)
    .fetch_all(conn)
    .await?;

    Ok(slots)
}

/// Writes the booking-field unit. Generic over the executor so the booking
/// engine can run it inside its transaction.
pub async fn update_booking_fields<'e, E>(
    executor: E,
    id: Uuid,
    fields: &BookingFields,
) -> Result<()>
where
    E: sqlx::PgExecutor<'e>,
{
    sqlx::query(
        r#"
        UPDATE mentorship_slots
        SET hacker_id = $2,
            hacker_name = $3,
            team_name = $4,
            hacker_description = $5,
            offline_location = $6
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(&fields.hacker_id)
    .bind(&fields.hacker_name)
    .bind(&fields.team_name)
    .bind(&fields.hacker_description)
    .bind(&fields.offline_location)
    .execute(executor)
    .await?;

    Ok(())
}

/// Clears the booking-field unit, returning the slot to the free state.
pub async fn clear_booking_fields<'e, E>(executor: E, id: Uuid) -> Result<()>
where
    E: sqlx::PgExecutor<'e>,
{
    sqlx::query(
        r#"
        UPDATE mentorship_slots
        SET hacker_id = NULL,
            hacker_name = NULL,
            team_name = NULL,
            hacker_description = NULL,
            offline_location = NULL
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(executor)
    .await?;

    Ok(())
}

/// Partial update of the mentor-only annotation fields. Absent values keep
/// the stored ones.
pub async fn update_mentor_annotations(
    pool: &Pool<Postgres>,
    id: Uuid,
    mentor_notes: Option<&str>,
    mentor_mark_as_done: Option<bool>,
    mentor_mark_as_afk: Option<bool>,
) -> Result<()> {
    tracing::debug!("Updating mentor annotations on slot {}", id);

    sqlx::query(
        r#"
        UPDATE mentorship_slots
        SET mentor_notes = COALESCE($2, mentor_notes),
            mentor_mark_as_done = COALESCE($3, mentor_mark_as_done),
            mentor_mark_as_afk = COALESCE($4, mentor_mark_as_afk)
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(mentor_notes)
    .bind(mentor_mark_as_done)
    .bind(mentor_mark_as_afk)
    .execute(pool)
    .await?;

    Ok(())
}
