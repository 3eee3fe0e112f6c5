use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Where a mentorship appointment takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotLocation {
    Online,
    Offline,
}

impl SlotLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotLocation::Online => "online",
            SlotLocation::Offline => "offline",
        }
    }

    /// Stored values are constrained to "online"/"offline" by the schema.
    pub fn from_db(value: &str) -> Self {
        if value == "offline" {
            SlotLocation::Offline
        } else {
            SlotLocation::Online
        }
    }
}

/// One slot reservation inside a booking call. A caller may submit up to
/// the concurrent-booking cap of these in a single request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub slot_id: Uuid,
    pub hacker_name: String,
    pub team_name: String,
    pub hacker_description: String,
    #[serde(default)]
    pub offline_location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookMentorshipsRequest {
    pub mentorships: Vec<BookingRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookMentorshipsResponse {
    pub success: bool,
    pub message: String,
    pub booked_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancelMentorshipRequest {
    pub id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AckResponse {
    pub success: bool,
}

/// Mentor-only annotation updates. All fields optional; a request with
/// none present is rejected at the handler.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSlotAnnotationsRequest {
    #[serde(default)]
    pub mentor_notes: Option<String>,
    #[serde(default)]
    pub mentor_mark_as_done: Option<bool>,
    #[serde(default)]
    pub mentor_mark_as_afk: Option<bool>,
}

impl UpdateSlotAnnotationsRequest {
    pub fn is_empty(&self) -> bool {
        self.mentor_notes.is_none()
            && self.mentor_mark_as_done.is_none()
            && self.mentor_mark_as_afk.is_none()
    }
}

/// Mentor-facing projection of a slot, including the private annotation
/// fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorSlotResponse {
    pub id: Uuid,
    pub mentor_id: String,
    pub start_time: i64,
    pub end_time: i64,
    pub location: SlotLocation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offline_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hacker_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hacker_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hacker_description: Option<String>,
    pub mentor_notes: String,
    pub mentor_mark_as_done: bool,
    pub mentor_mark_as_afk: bool,
}

/// Hacker-safe projection: the same slot without mentor-private fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HackerSlotResponse {
    pub id: Uuid,
    pub mentor_id: String,
    pub start_time: i64,
    pub end_time: i64,
    pub location: SlotLocation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offline_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hacker_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hacker_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hacker_description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub specialization: String,
    pub discord_username: String,
    pub intro: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentorListResponse {
    pub mentors: Vec<MentorResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorshipConfigResponse {
    pub is_mentorship_open: bool,
    pub start_date: i64,
    pub end_date: i64,
}
