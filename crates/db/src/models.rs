use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A bookable mentorship time window as persisted.
///
/// The four hacker_* columns form the booking-field unit: they are written
/// and cleared together, never partially.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbMentorshipSlot {
    pub id: Uuid,
    pub mentor_id: String,
    pub start_time: i64,
    pub end_time: i64,
    pub location: String,
    pub offline_location: Option<String>,
    pub hacker_id: Option<String>,
    pub hacker_name: Option<String>,
    pub team_name: Option<String>,
    pub hacker_description: Option<String>,
    pub mentor_notes: String,
    pub mentor_mark_as_done: bool,
    pub mentor_mark_as_afk: bool,
    pub created_at: DateTime<Utc>,
}

impl DbMentorshipSlot {
    /// A slot is booked iff a hacker id is present.
    pub fn is_booked(&self) -> bool {
        self.hacker_id.is_some()
    }

    /// The booking-field unit, present only when complete.
    pub fn booking(&self) -> Option<SlotBooking<'_>> {
        match (
            &self.hacker_id,
            &self.hacker_name,
            &self.team_name,
            &self.hacker_description,
        ) {
            (Some(hacker_id), Some(hacker_name), Some(team_name), Some(hacker_description)) => {
                Some(SlotBooking {
                    hacker_id,
                    hacker_name,
                    team_name,
                    hacker_description,
                })
            }
            _ => None,
        }
    }
}

/// Borrowed view of a complete booking-field unit.
#[derive(Debug, Clone, Copy)]
pub struct SlotBooking<'a> {
    pub hacker_id: &'a str,
    pub hacker_name: &'a str,
    pub team_name: &'a str,
    pub hacker_description: &'a str,
}

/// Values written as a unit when a slot transitions free -> booked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingFields {
    pub hacker_id: String,
    pub hacker_name: String,
    pub team_name: String,
    pub hacker_description: String,
    pub offline_location: Option<String>,
}

/// Time-range and cap filters shared by the slot list queries. Both bounds
/// are inclusive and apply to start_time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlotFilter {
    pub start_after: Option<i64>,
    pub start_before: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub mentor: bool,
    pub specialization: String,
    pub discord_username: String,
    pub intro: String,
    pub created_at: DateTime<Utc>,
}

/// The single mentorship-config row. Absent until seeded by admin tooling.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbMentorshipConfig {
    pub is_mentorship_open: bool,
    pub start_date: i64,
    pub end_date: i64,
}
