//! # Booking Engine
//!
//! Validates and executes multi-slot booking requests and single-slot
//! cancellations against the slot store.
//!
//! ## Booking protocol
//!
//! A booking call runs in three phases:
//!
//! 1. Fail-fast checks that need no transaction: request shape, the
//!    mentorship-open gate, and the future-booking quota.
//! 2. A single database transaction that locks the requested slots
//!    (`SELECT ... FOR UPDATE`), re-validates each one against committed
//!    state, and writes the booking-field unit to all of them. Any failed
//!    check aborts the whole batch; there is no partial booking.
//! 3. Best-effort mentor notifications after the commit. A notification
//!    failure is logged and never affects the booking outcome.
//!
//! Two concurrent bookings that share a slot serialize on the row locks;
//! the second transaction re-reads the winner's committed write and fails
//! the already-booked check. Retries are safe because every attempt
//! re-reads current slot state.

use std::collections::HashMap;
use std::sync::Arc;

use hackhub_core::clock::Clock;
use hackhub_core::errors::HackError;
use hackhub_core::models::mentorship::{BookingRequest, SlotLocation};
use hackhub_db::models::{BookingFields, DbMentorshipSlot};
use hackhub_db::repositories::{config, mentorship, user};
use hackhub_db::DbPool;
use uuid::Uuid;

use crate::notify::Notifier;

/// Maximum number of future bookings a hacker may hold at once. Also caps
/// the size of a single booking batch.
pub const MAX_CONCURRENT_BOOKINGS: usize = 2;

/// A slot starting less than 30 minutes from now can no longer be booked.
pub const BOOKING_LEAD_TIME_SECS: i64 = 30 * 60;

/// A booking starting less than 45 minutes from now can no longer be
/// cancelled. Intentionally wider than the booking cutoff.
pub const CANCEL_LEAD_TIME_SECS: i64 = 45 * 60;

/// Executes bookings and cancellations. Constructed once at startup with
/// its collaborators and shared through [`crate::ApiState`].
pub struct BookingEngine {
    pool: DbPool,
    clock: Arc<dyn Clock>,
    notifier: Arc<dyn Notifier>,
}

impl BookingEngine {
    pub fn new(pool: DbPool, clock: Arc<dyn Clock>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            pool,
            clock,
            notifier,
        }
    }

    /// Books every requested slot for the caller, or none of them.
    ///
    /// Returns the number of slots booked on success.
    pub async fn book_many(
        &self,
        caller_uid: &str,
        requests: &[BookingRequest],
    ) -> Result<usize, HackError> {
        validate_requests(requests)?;

        let config = config::get_mentorship_config(&self.pool)
            .await
            .map_err(HackError::Database)?
            .ok_or_else(|| {
                HackError::Validation("mentorship has not been configured".to_string())
            })?;
        if !config.is_mentorship_open {
            return Err(HackError::Validation(
                "mentorship booking is not open".to_string(),
            ));
        }

        let now = self.clock.now();
        let existing = mentorship::count_future_bookings(&self.pool, caller_uid, now)
            .await
            .map_err(HackError::Database)?;
        check_quota(existing, requests.len())?;

        let ids: Vec<Uuid> = requests.iter().map(|r| r.slot_id).collect();
        let by_id: HashMap<Uuid, &BookingRequest> =
            requests.iter().map(|r| (r.slot_id, r)).collect();

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| HackError::Database(e.into()))?;

        let slots = mentorship::get_slots_for_update(&mut tx, &ids)
            .await
            .map_err(HackError::Database)?;
        // Duplicate ids in the request collapse in the batch read and are
        // rejected here along with genuinely unknown slots.
        if slots.len() != ids.len() {
            return Err(HackError::NotFound(
                "one or more requested slots do not exist".to_string(),
            ));
        }

        for slot in &slots {
            ensure_bookable(slot, now)?;
        }

        let mut booked = Vec::with_capacity(slots.len());
        for slot in slots {
            // The id was present in the map when `ids` was built.
            let request = by_id[&slot.id];
            let fields = booking_fields_for(&slot, request, caller_uid);
            mentorship::update_booking_fields(&mut *tx, slot.id, &fields)
                .await
                .map_err(HackError::Database)?;
            booked.push(apply_booking(slot, fields));
        }

        tx.commit()
            .await
            .map_err(|e| HackError::Database(e.into()))?;

        tracing::info!(
            "Hacker {} booked {} mentorship slot(s)",
            caller_uid,
            booked.len()
        );

        for slot in &booked {
            self.notify_booked(slot).await;
        }

        Ok(booked.len())
    }

    /// Cancels the caller's booking on a single slot, clearing the
    /// booking-field unit.
    ///
    /// This path deliberately runs without a transaction: the update is a
    /// single row write validated against the snapshot read just above it.
    pub async fn cancel_one(&self, caller_uid: &str, slot_id: Uuid) -> Result<(), HackError> {
        let slot = mentorship::get_slot_by_id(&self.pool, slot_id)
            .await
            .map_err(HackError::Database)?
            .ok_or_else(|| {
                HackError::NotFound(format!("Mentorship slot {} not found", slot_id))
            })?;

        authorize_cancellation(&slot, caller_uid, self.clock.now())?;

        // Notice goes out before the clear; a failed dispatch never blocks
        // the cancellation.
        self.notify_cancelled(&slot).await;

        mentorship::clear_booking_fields(&self.pool, slot_id)
            .await
            .map_err(HackError::Database)?;

        tracing::info!("Hacker {} cancelled mentorship slot {}", caller_uid, slot_id);
        Ok(())
    }

    async fn notify_booked(&self, slot: &DbMentorshipSlot) {
        match user::get_user_by_id(&self.pool, &slot.mentor_id).await {
            Ok(Some(mentor)) => {
                if let Err(err) = self.notifier.booking_booked(&mentor, slot).await {
                    tracing::warn!(
                        "Booking notification for slot {} failed: {}",
                        slot.id,
                        err
                    );
                }
            }
            Ok(None) => {
                tracing::warn!("Mentor {} not found for slot {}", slot.mentor_id, slot.id)
            }
            Err(err) => {
                tracing::warn!("Mentor lookup failed for slot {}: {}", slot.id, err)
            }
        }
    }

    async fn notify_cancelled(&self, slot: &DbMentorshipSlot) {
        match user::get_user_by_id(&self.pool, &slot.mentor_id).await {
            Ok(Some(mentor)) => {
                if let Err(err) = self.notifier.booking_cancelled(&mentor, slot).await {
                    tracing::warn!(
                        "Cancellation notification for slot {} failed: {}",
                        slot.id,
                        err
                    );
                }
            }
            Ok(None) => {
                tracing::warn!("Mentor {} not found for slot {}", slot.mentor_id, slot.id)
            }
            Err(err) => {
                tracing::warn!("Mentor lookup failed for slot {}: {}", slot.id, err)
            }
        }
    }
}

/// Shape checks that need no database access: non-empty batch, batch-size
/// cap, and required request fields.
pub fn validate_requests(requests: &[BookingRequest]) -> Result<(), HackError> {
    if requests.is_empty() {
        return Err(HackError::Validation(
            "at least one mentorship slot must be requested".to_string(),
        ));
    }
    if requests.len() > MAX_CONCURRENT_BOOKINGS {
        return Err(HackError::Validation(format!(
            "at most {} slots may be booked in one request",
            MAX_CONCURRENT_BOOKINGS
        )));
    }
    for request in requests {
        if request.hacker_name.trim().is_empty()
            || request.team_name.trim().is_empty()
            || request.hacker_description.trim().is_empty()
        {
            return Err(HackError::Validation(
                "hackerName, teamName and hackerDescription are required".to_string(),
            ));
        }
    }
    Ok(())
}

/// The quota counts future bookings only; completed appointments never
/// block new ones.
pub fn check_quota(existing: i64, requested: usize) -> Result<(), HackError> {
    if existing as usize + requested > MAX_CONCURRENT_BOOKINGS {
        return Err(HackError::QuotaExceeded(format!(
            "{} upcoming booking(s) already held; the limit is {}",
            existing, MAX_CONCURRENT_BOOKINGS
        )));
    }
    Ok(())
}

/// Per-slot checks inside the booking transaction, against locked rows.
pub fn ensure_bookable(slot: &DbMentorshipSlot, now: i64) -> Result<(), HackError> {
    if slot.is_booked() {
        return Err(HackError::Conflict(format!(
            "slot {} is already booked",
            slot.id
        )));
    }
    if slot.start_time < now + BOOKING_LEAD_TIME_SECS {
        return Err(HackError::Conflict(format!(
            "slot {} is starting too soon to book",
            slot.id
        )));
    }
    Ok(())
}

/// Ownership and lead-time checks for cancellation. Rejection leaves the
/// slot untouched no matter how often it is retried.
pub fn authorize_cancellation(
    slot: &DbMentorshipSlot,
    caller_uid: &str,
    now: i64,
) -> Result<(), HackError> {
    if slot.hacker_id.as_deref() != Some(caller_uid) {
        return Err(HackError::Unauthorized(
            "only the booking hacker may cancel this appointment".to_string(),
        ));
    }
    if slot.start_time < now + CANCEL_LEAD_TIME_SECS {
        return Err(HackError::Conflict(
            "the appointment starts too soon to cancel".to_string(),
        ));
    }
    Ok(())
}

/// Builds the booking-field unit for one slot. The offline location is
/// taken from the request only for offline slots and cleared otherwise.
pub fn booking_fields_for(
    slot: &DbMentorshipSlot,
    request: &BookingRequest,
    caller_uid: &str,
) -> BookingFields {
    let offline_location = if slot.location == SlotLocation::Offline.as_str() {
        request.offline_location.clone()
    } else {
        None
    };

    BookingFields {
        hacker_id: caller_uid.to_string(),
        hacker_name: request.hacker_name.clone(),
        team_name: request.team_name.clone(),
        hacker_description: request.hacker_description.clone(),
        offline_location,
    }
}

/// The in-memory image of a slot after its booking fields are written,
/// used for post-commit notifications.
pub fn apply_booking(mut slot: DbMentorshipSlot, fields: BookingFields) -> DbMentorshipSlot {
    slot.hacker_id = Some(fields.hacker_id);
    slot.hacker_name = Some(fields.hacker_name);
    slot.team_name = Some(fields.team_name);
    slot.hacker_description = Some(fields.hacker_description);
    slot.offline_location = fields.offline_location;
    slot
}
