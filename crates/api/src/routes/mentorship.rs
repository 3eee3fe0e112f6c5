use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/mentorship/config",
            get(handlers::mentorship::get_mentorship_config),
        )
        .route(
            "/mentorship/mentor/my-mentorships",
            get(handlers::mentorship::list_my_mentor_slots),
        )
        .route(
            "/mentorship/mentor/my-mentorships/:id",
            get(handlers::mentorship::get_my_mentor_slot)
                .post(handlers::mentorship::update_my_mentor_slot),
        )
        .route(
            "/mentorship/hacker/mentors",
            get(handlers::mentorship::list_mentors),
        )
        .route(
            "/mentorship/hacker/mentorships",
            get(handlers::mentorship::list_mentor_schedule),
        )
        .route(
            "/mentorship/hacker/mentorships/book",
            post(handlers::mentorship::book_mentorships),
        )
        .route(
            "/mentorship/hacker/mentorships/cancel",
            post(handlers::mentorship::cancel_mentorship),
        )
        .route(
            "/mentorship/hacker/my-mentorships",
            get(handlers::mentorship::list_my_bookings),
        )
}
