use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create users table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id VARCHAR(255) PRIMARY KEY,
            email VARCHAR(255) NOT NULL,
            name VARCHAR(255) NOT NULL,
            mentor BOOLEAN NOT NULL DEFAULT FALSE,
            specialization VARCHAR(255) NOT NULL DEFAULT '',
            discord_username VARCHAR(255) NOT NULL DEFAULT '',
            intro TEXT NOT NULL DEFAULT '',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create mentorship_slots table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS mentorship_slots (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            mentor_id VARCHAR(255) NOT NULL REFERENCES users(id),
            start_time BIGINT NOT NULL,
            end_time BIGINT NOT NULL,
            location VARCHAR(16) NOT NULL,
            offline_location VARCHAR(255) NULL,
            hacker_id VARCHAR(255) NULL,
            hacker_name VARCHAR(255) NULL,
            team_name VARCHAR(255) NULL,
            hacker_description TEXT NULL,
            mentor_notes TEXT NOT NULL DEFAULT '',
            mentor_mark_as_done BOOLEAN NOT NULL DEFAULT FALSE,
            mentor_mark_as_afk BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_time_range CHECK (end_time > start_time),
            CONSTRAINT valid_location CHECK (location IN ('online', 'offline'))
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create mentorship_config table (single row, id pinned to 1)
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS mentorship_config (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            is_mentorship_open BOOLEAN NOT NULL,
            start_date BIGINT NOT NULL,
            end_date BIGINT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_mentorship_slots_mentor_id ON mentorship_slots(mentor_id);
        CREATE INDEX IF NOT EXISTS idx_mentorship_slots_hacker_id ON mentorship_slots(hacker_id);
        CREATE INDEX IF NOT EXISTS idx_mentorship_slots_start_time ON mentorship_slots(start_time);
        CREATE INDEX IF NOT EXISTS idx_users_mentor ON users(mentor);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
