//! # Mentorship Handlers
//!
//! Request processing for the mentorship surface: the event config
//! endpoint, mentor-side slot views and annotations, hacker-side mentor
//! discovery, and the booking/cancellation entry points that delegate to
//! the [`crate::booking::BookingEngine`].
//!
//! Handlers shape persisted slot rows into role-appropriate projections:
//! mentors see their private annotation fields, hackers never do.

use axum::extract::{Path, Query, State};
use axum::Json;
use hackhub_core::errors::HackError;
use hackhub_core::models::mentorship::{
    AckResponse, BookMentorshipsRequest, BookMentorshipsResponse, CancelMentorshipRequest,
    HackerSlotResponse, MentorListResponse, MentorResponse, MentorshipConfigResponse,
    MentorSlotResponse, SlotLocation, UpdateSlotAnnotationsRequest,
};
use hackhub_db::models::{DbMentorshipSlot, DbUser, SlotFilter};
use hackhub_db::repositories::{config, mentorship, user};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::middleware::auth::Caller;
use crate::middleware::error_handling::AppError;
use crate::ApiState;

/// Query parameters for the mentor's own-slot listing.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorSlotsQuery {
    #[serde(default)]
    pub upcoming_only: Option<bool>,
    #[serde(default)]
    pub recent_only: Option<bool>,
    #[serde(default)]
    pub is_booked: Option<bool>,
    #[serde(default)]
    pub is_available: Option<bool>,
    #[serde(default)]
    pub limit: Option<i64>,
}

/// Query parameters for the hacker's view of a mentor's schedule.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorScheduleQuery {
    #[serde(default)]
    pub mentor_id: Option<String>,
    #[serde(default)]
    pub limit: Option<i64>,
}

/// Query parameters for the hacker's own-booking listing.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HackerSlotsQuery {
    #[serde(default)]
    pub upcoming_only: Option<bool>,
    #[serde(default)]
    pub recent_only: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LimitQuery {
    #[serde(default)]
    pub limit: Option<i64>,
}

/// Builds the time-range filter shared by the listing endpoints.
/// `upcomingOnly` and `recentOnly` are mutually exclusive.
pub fn time_filter(
    upcoming_only: bool,
    recent_only: bool,
    now: i64,
    limit: Option<i64>,
) -> Result<SlotFilter, HackError> {
    if upcoming_only && recent_only {
        return Err(HackError::Validation(
            "upcomingOnly and recentOnly are mutually exclusive".to_string(),
        ));
    }

    Ok(SlotFilter {
        start_after: upcoming_only.then_some(now),
        start_before: recent_only.then_some(now),
        limit,
    })
}

/// Post-filters a slot list on booking state. `isBooked` and
/// `isAvailable` are mutually exclusive; the result cap is applied after
/// filtering so a page is never short-changed by filtered-out rows.
pub fn availability_filter(
    slots: Vec<DbMentorshipSlot>,
    is_booked: Option<bool>,
    is_available: Option<bool>,
    limit: Option<i64>,
) -> Result<Vec<DbMentorshipSlot>, HackError> {
    if is_booked == Some(true) && is_available == Some(true) {
        return Err(HackError::Validation(
            "isBooked and isAvailable are mutually exclusive".to_string(),
        ));
    }

    let mut slots: Vec<DbMentorshipSlot> = match (is_booked, is_available) {
        (Some(true), _) => slots.into_iter().filter(|s| s.is_booked()).collect(),
        (_, Some(true)) => slots.into_iter().filter(|s| !s.is_booked()).collect(),
        _ => slots,
    };

    if let Some(limit) = limit {
        slots.truncate(limit.max(0) as usize);
    }

    Ok(slots)
}

/// Mentor-facing projection, including the private annotation fields.
pub fn mentor_view(slot: DbMentorshipSlot) -> MentorSlotResponse {
    MentorSlotResponse {
        id: slot.id,
        mentor_id: slot.mentor_id,
        start_time: slot.start_time,
        end_time: slot.end_time,
        location: SlotLocation::from_db(&slot.location),
        offline_location: slot.offline_location,
        hacker_id: slot.hacker_id,
        hacker_name: slot.hacker_name,
        team_name: slot.team_name,
        hacker_description: slot.hacker_description,
        mentor_notes: slot.mentor_notes,
        mentor_mark_as_done: slot.mentor_mark_as_done,
        mentor_mark_as_afk: slot.mentor_mark_as_afk,
    }
}

/// Hacker-safe projection; mentor annotations never leave the store here.
pub fn hacker_view(slot: DbMentorshipSlot) -> HackerSlotResponse {
    HackerSlotResponse {
        id: slot.id,
        mentor_id: slot.mentor_id,
        start_time: slot.start_time,
        end_time: slot.end_time,
        location: SlotLocation::from_db(&slot.location),
        offline_location: slot.offline_location,
        hacker_id: slot.hacker_id,
        hacker_name: slot.hacker_name,
        team_name: slot.team_name,
        hacker_description: slot.hacker_description,
    }
}

pub fn mentor_summary(user: DbUser) -> MentorResponse {
    MentorResponse {
        id: user.id,
        name: user.name,
        email: user.email,
        specialization: user.specialization,
        discord_username: user.discord_username,
        intro: user.intro,
    }
}

#[axum::debug_handler]
pub async fn get_mentorship_config(
    State(state): State<Arc<ApiState>>,
    _caller: Caller,
) -> Result<Json<MentorshipConfigResponse>, AppError> {
    let config = config::get_mentorship_config(&state.db_pool)
        .await
        .map_err(HackError::Database)?
        .ok_or_else(|| {
            HackError::Validation("mentorship has not been configured".to_string())
        })?;

    Ok(Json(MentorshipConfigResponse {
        is_mentorship_open: config.is_mentorship_open,
        start_date: config.start_date,
        end_date: config.end_date,
    }))
}

#[axum::debug_handler]
pub async fn list_my_mentor_slots(
    State(state): State<Arc<ApiState>>,
    caller: Caller,
    Query(query): Query<MentorSlotsQuery>,
) -> Result<Json<Vec<MentorSlotResponse>>, AppError> {
    caller.require_mentor()?;

    let now = state.clock.now();
    // The availability post-filter applies the cap itself, so the SQL
    // query runs uncapped.
    let filter = time_filter(
        query.upcoming_only.unwrap_or(false),
        query.recent_only.unwrap_or(false),
        now,
        None,
    )?;

    let slots = mentorship::list_slots_by_mentor(&state.db_pool, &caller.uid, &filter)
        .await
        .map_err(HackError::Database)?;
    let slots = availability_filter(slots, query.is_booked, query.is_available, query.limit)?;

    Ok(Json(slots.into_iter().map(mentor_view).collect()))
}

#[axum::debug_handler]
pub async fn get_my_mentor_slot(
    State(state): State<Arc<ApiState>>,
    caller: Caller,
    Path(id): Path<Uuid>,
) -> Result<Json<MentorSlotResponse>, AppError> {
    caller.require_mentor()?;

    let slot = owned_mentor_slot(&state, &caller, id).await?;
    Ok(Json(mentor_view(slot)))
}

#[axum::debug_handler]
pub async fn update_my_mentor_slot(
    State(state): State<Arc<ApiState>>,
    caller: Caller,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateSlotAnnotationsRequest>,
) -> Result<Json<AckResponse>, AppError> {
    caller.require_mentor()?;

    if payload.is_empty() {
        return Err(AppError(HackError::Validation(
            "at least one of mentorNotes, mentorMarkAsDone, mentorMarkAsAfk is required"
                .to_string(),
        )));
    }

    owned_mentor_slot(&state, &caller, id).await?;

    mentorship::update_mentor_annotations(
        &state.db_pool,
        id,
        payload.mentor_notes.as_deref(),
        payload.mentor_mark_as_done,
        payload.mentor_mark_as_afk,
    )
    .await
    .map_err(HackError::Database)?;

    Ok(Json(AckResponse { success: true }))
}

/// Fetches a slot and checks the caller owns it. A slot belonging to a
/// different mentor reads as not-found so slot existence never leaks
/// across mentors.
async fn owned_mentor_slot(
    state: &ApiState,
    caller: &Caller,
    id: Uuid,
) -> Result<DbMentorshipSlot, AppError> {
    let slot = mentorship::get_slot_by_id(&state.db_pool, id)
        .await
        .map_err(HackError::Database)?
        .filter(|slot| slot.mentor_id == caller.uid)
        .ok_or_else(|| HackError::NotFound(format!("Mentorship slot {} not found", id)))?;

    Ok(slot)
}

#[axum::debug_handler]
pub async fn list_mentors(
    State(state): State<Arc<ApiState>>,
    _caller: Caller,
    Query(query): Query<LimitQuery>,
) -> Result<Json<MentorListResponse>, AppError> {
    let mentors = user::list_mentors(&state.db_pool, query.limit)
        .await
        .map_err(HackError::Database)?;

    Ok(Json(MentorListResponse {
        mentors: mentors.into_iter().map(mentor_summary).collect(),
    }))
}

#[axum::debug_handler]
pub async fn list_mentor_schedule(
    State(state): State<Arc<ApiState>>,
    _caller: Caller,
    Query(query): Query<MentorScheduleQuery>,
) -> Result<Json<Vec<HackerSlotResponse>>, AppError> {
    let mentor_id = query.mentor_id.ok_or_else(|| {
        HackError::Validation("mentorId query parameter is required".to_string())
    })?;

    let filter = SlotFilter {
        limit: query.limit,
        ..Default::default()
    };
    let slots = mentorship::list_slots_by_mentor(&state.db_pool, &mentor_id, &filter)
        .await
        .map_err(HackError::Database)?;

    Ok(Json(slots.into_iter().map(hacker_view).collect()))
}

#[axum::debug_handler]
pub async fn book_mentorships(
    State(state): State<Arc<ApiState>>,
    caller: Caller,
    Json(payload): Json<BookMentorshipsRequest>,
) -> Result<Json<BookMentorshipsResponse>, AppError> {
    let booked_count = state
        .booking
        .book_many(&caller.uid, &payload.mentorships)
        .await?;

    Ok(Json(BookMentorshipsResponse {
        success: true,
        message: format!("Booked {} mentorship slot(s)", booked_count),
        booked_count,
    }))
}

#[axum::debug_handler]
pub async fn cancel_mentorship(
    State(state): State<Arc<ApiState>>,
    caller: Caller,
    Json(payload): Json<CancelMentorshipRequest>,
) -> Result<Json<AckResponse>, AppError> {
    state.booking.cancel_one(&caller.uid, payload.id).await?;

    Ok(Json(AckResponse { success: true }))
}

#[axum::debug_handler]
pub async fn list_my_bookings(
    State(state): State<Arc<ApiState>>,
    caller: Caller,
    Query(query): Query<HackerSlotsQuery>,
) -> Result<Json<Vec<HackerSlotResponse>>, AppError> {
    let now = state.clock.now();
    let filter = time_filter(
        query.upcoming_only.unwrap_or(false),
        query.recent_only.unwrap_or(false),
        now,
        None,
    )?;

    let slots = mentorship::list_slots_by_hacker(&state.db_pool, &caller.uid, &filter)
        .await
        .map_err(HackError::Database)?;

    Ok(Json(slots.into_iter().map(hacker_view).collect()))
}
