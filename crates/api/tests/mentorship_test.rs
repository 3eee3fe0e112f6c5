use chrono::Utc;
use hackhub_api::handlers::mentorship::{
    availability_filter, hacker_view, mentor_summary, mentor_view, time_filter,
};
use hackhub_core::errors::HackError;
use hackhub_core::models::mentorship::SlotLocation;
use hackhub_db::models::{DbMentorshipSlot, DbUser};
use pretty_assertions::assert_eq;
use serde_json::to_value;
use uuid::Uuid;

const NOW: i64 = 1_752_800_000;

fn slot(start_offset: i64, booked_by: Option<&str>) -> DbMentorshipSlot {
    DbMentorshipSlot {
        id: Uuid::new_v4(),
        mentor_id: "mentor-1".to_string(),
        start_time: NOW + start_offset,
        end_time: NOW + start_offset + 900,
        location: "offline".to_string(),
        offline_location: booked_by.map(|_| "Table 4".to_string()),
        hacker_id: booked_by.map(str::to_string),
        hacker_name: booked_by.map(|_| "Ada".to_string()),
        team_name: booked_by.map(|_| "Bitwise".to_string()),
        hacker_description: booked_by.map(|_| "Auth flow".to_string()),
        mentor_notes: "solid team".to_string(),
        mentor_mark_as_done: true,
        mentor_mark_as_afk: false,
        created_at: Utc::now(),
    }
}

#[test]
fn test_time_filter_defaults_to_unbounded() {
    let filter = time_filter(false, false, NOW, Some(10)).unwrap();

    assert_eq!(filter.start_after, None);
    assert_eq!(filter.start_before, None);
    assert_eq!(filter.limit, Some(10));
}

#[test]
fn test_time_filter_upcoming_bounds_from_now() {
    let filter = time_filter(true, false, NOW, None).unwrap();

    assert_eq!(filter.start_after, Some(NOW));
    assert_eq!(filter.start_before, None);
}

#[test]
fn test_time_filter_recent_bounds_to_now() {
    let filter = time_filter(false, true, NOW, None).unwrap();

    assert_eq!(filter.start_after, None);
    assert_eq!(filter.start_before, Some(NOW));
}

#[test]
fn test_time_filter_rejects_conflicting_flags() {
    let result = time_filter(true, true, NOW, None);
    assert!(matches!(result, Err(HackError::Validation(_))));
}

#[test]
fn test_availability_filter_booked_only() {
    let slots = vec![
        slot(3600, None),
        slot(7200, Some("hacker-1")),
        slot(10800, None),
    ];

    let booked = availability_filter(slots, Some(true), None, None).unwrap();
    assert_eq!(booked.len(), 1);
    assert!(booked[0].is_booked());
}

#[test]
fn test_availability_filter_available_only() {
    let slots = vec![
        slot(3600, None),
        slot(7200, Some("hacker-1")),
        slot(10800, None),
    ];

    let available = availability_filter(slots, None, Some(true), None).unwrap();
    assert_eq!(available.len(), 2);
    assert!(available.iter().all(|s| !s.is_booked()));
}

#[test]
fn test_availability_filter_applies_limit_after_filtering() {
    let slots = vec![
        slot(3600, Some("hacker-1")),
        slot(7200, None),
        slot(10800, None),
        slot(14400, None),
    ];

    // The cap applies to the filtered set, so the booked head row does
    // not eat into the page.
    let available = availability_filter(slots, None, Some(true), Some(2)).unwrap();
    assert_eq!(available.len(), 2);
    assert!(available.iter().all(|s| !s.is_booked()));
}

#[test]
fn test_availability_filter_rejects_conflicting_flags() {
    let result = availability_filter(vec![], Some(true), Some(true), None);
    assert!(matches!(result, Err(HackError::Validation(_))));
}

#[test]
fn test_availability_filter_passthrough() {
    let slots = vec![slot(3600, None), slot(7200, Some("hacker-1"))];

    let all = availability_filter(slots, None, None, None).unwrap();
    assert_eq!(all.len(), 2);
}

#[test]
fn test_mentor_view_keeps_annotations() {
    let view = mentor_view(slot(3600, Some("hacker-1")));

    assert_eq!(view.location, SlotLocation::Offline);
    assert_eq!(view.mentor_notes, "solid team");
    assert!(view.mentor_mark_as_done);
    assert_eq!(view.hacker_id.as_deref(), Some("hacker-1"));
}

#[test]
fn test_hacker_view_never_carries_annotations() {
    let view = hacker_view(slot(3600, Some("hacker-1")));

    assert_eq!(view.hacker_name.as_deref(), Some("Ada"));
    assert_eq!(view.offline_location.as_deref(), Some("Table 4"));

    // The projection has no annotation fields at all; assert at the wire
    // level for good measure.
    let value = to_value(&view).expect("Failed to serialize hacker view");
    let object = value.as_object().expect("Expected a JSON object");
    assert!(!object.contains_key("mentorNotes"));
    assert!(!object.contains_key("mentorMarkAsDone"));
    assert!(!object.contains_key("mentorMarkAsAfk"));
}

#[test]
fn test_mentor_summary_projection() {
    let user = DbUser {
        id: "mentor-1".to_string(),
        email: "mentor@example.com".to_string(),
        name: "Barbara".to_string(),
        mentor: true,
        specialization: "Distributed systems".to_string(),
        discord_username: "barbara#0001".to_string(),
        intro: "Happy to help with backend questions".to_string(),
        created_at: Utc::now(),
    };

    let summary = mentor_summary(user);
    assert_eq!(summary.id, "mentor-1");
    assert_eq!(summary.name, "Barbara");
    assert_eq!(summary.specialization, "Distributed systems");
}
