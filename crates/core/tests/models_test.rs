use fake::faker::name::en::Name;
use fake::Fake;
use hackhub_core::models::mentorship::{
    BookingRequest, BookMentorshipsRequest, BookMentorshipsResponse, CancelMentorshipRequest,
    HackerSlotResponse, MentorshipConfigResponse, MentorSlotResponse, SlotLocation,
    UpdateSlotAnnotationsRequest,
};
use hackhub_core::models::role::Role;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{from_str, from_value, json, to_string, to_value};
use uuid::Uuid;

#[test]
fn test_booking_request_wire_format() {
    let slot_id = Uuid::new_v4();

    // The wire format is camelCase; field names are mapped exactly once,
    // at the serde boundary.
    let request: BookingRequest = from_value(json!({
        "slotId": slot_id,
        "hackerName": "Ada Lovelace",
        "teamName": "Bitwise",
        "hackerDescription": "Stuck on our auth flow",
        "offlineLocation": "Table 4"
    }))
    .expect("Failed to deserialize booking request");

    assert_eq!(request.slot_id, slot_id);
    assert_eq!(request.hacker_name, "Ada Lovelace");
    assert_eq!(request.team_name, "Bitwise");
    assert_eq!(request.hacker_description, "Stuck on our auth flow");
    assert_eq!(request.offline_location.as_deref(), Some("Table 4"));
}

#[test]
fn test_booking_request_offline_location_optional() {
    let request: BookingRequest = from_value(json!({
        "slotId": Uuid::new_v4(),
        "hackerName": "Ada",
        "teamName": "Bitwise",
        "hackerDescription": "Q&A"
    }))
    .expect("Failed to deserialize booking request");

    assert_eq!(request.offline_location, None);
}

#[test]
fn test_book_mentorships_request_roundtrip() {
    let hacker_name: String = Name().fake();

    let request = BookMentorshipsRequest {
        mentorships: vec![
            BookingRequest {
                slot_id: Uuid::new_v4(),
                hacker_name: hacker_name.clone(),
                team_name: "Bitwise".to_string(),
                hacker_description: "Design review".to_string(),
                offline_location: None,
            },
            BookingRequest {
                slot_id: Uuid::new_v4(),
                hacker_name,
                team_name: "Bitwise".to_string(),
                hacker_description: "Deployment help".to_string(),
                offline_location: Some("Hall B".to_string()),
            },
        ],
    };

    let serialized = to_string(&request).expect("Failed to serialize booking request");
    let deserialized: BookMentorshipsRequest =
        from_str(&serialized).expect("Failed to deserialize booking request");

    assert_eq!(deserialized.mentorships.len(), request.mentorships.len());
    assert_eq!(
        deserialized.mentorships[0].hacker_name,
        request.mentorships[0].hacker_name
    );
    assert_eq!(
        deserialized.mentorships[1].offline_location,
        request.mentorships[1].offline_location
    );
}

#[test]
fn test_cancel_request_roundtrip() {
    let request = CancelMentorshipRequest { id: Uuid::new_v4() };

    let serialized = to_string(&request).expect("Failed to serialize cancel request");
    let deserialized: CancelMentorshipRequest =
        from_str(&serialized).expect("Failed to deserialize cancel request");

    assert_eq!(deserialized.id, request.id);
}

#[rstest]
#[case(SlotLocation::Online, "online")]
#[case(SlotLocation::Offline, "offline")]
fn test_slot_location_wire_names(#[case] location: SlotLocation, #[case] expected: &str) {
    let serialized = to_string(&location).expect("Failed to serialize location");
    assert_eq!(serialized, format!("\"{}\"", expected));
    assert_eq!(location.as_str(), expected);
    assert_eq!(SlotLocation::from_db(expected), location);
}

#[test]
fn test_mentor_slot_response_keys_are_camel_case() {
    let response = MentorSlotResponse {
        id: Uuid::new_v4(),
        mentor_id: "mentor-1".to_string(),
        start_time: 1_752_804_000,
        end_time: 1_752_804_900,
        location: SlotLocation::Online,
        offline_location: None,
        hacker_id: Some("hacker-1".to_string()),
        hacker_name: Some("Ada".to_string()),
        team_name: Some("Bitwise".to_string()),
        hacker_description: Some("Auth flow".to_string()),
        mentor_notes: "promising team".to_string(),
        mentor_mark_as_done: false,
        mentor_mark_as_afk: false,
    };

    let value = to_value(&response).expect("Failed to serialize mentor slot response");
    let object = value.as_object().expect("Expected a JSON object");

    for key in [
        "id",
        "mentorId",
        "startTime",
        "endTime",
        "location",
        "hackerId",
        "hackerName",
        "teamName",
        "hackerDescription",
        "mentorNotes",
        "mentorMarkAsDone",
        "mentorMarkAsAfk",
    ] {
        assert!(object.contains_key(key), "missing key: {}", key);
    }
}

#[test]
fn test_slot_responses_omit_unset_booking_fields() {
    let response = HackerSlotResponse {
        id: Uuid::new_v4(),
        mentor_id: "mentor-1".to_string(),
        start_time: 1_752_804_000,
        end_time: 1_752_804_900,
        location: SlotLocation::Online,
        offline_location: None,
        hacker_id: None,
        hacker_name: None,
        team_name: None,
        hacker_description: None,
    };

    let value = to_value(&response).expect("Failed to serialize hacker slot response");
    let object = value.as_object().expect("Expected a JSON object");

    // A free slot serializes without the booking-field unit entirely.
    for key in ["hackerId", "hackerName", "teamName", "hackerDescription"] {
        assert!(!object.contains_key(key), "unexpected key: {}", key);
    }
}

#[test]
fn test_update_annotations_request_is_empty() {
    let empty: UpdateSlotAnnotationsRequest =
        from_value(json!({})).expect("Failed to deserialize empty annotations");
    assert!(empty.is_empty());

    let with_notes: UpdateSlotAnnotationsRequest =
        from_value(json!({ "mentorNotes": "great questions" }))
            .expect("Failed to deserialize annotations");
    assert!(!with_notes.is_empty());

    let with_flag: UpdateSlotAnnotationsRequest =
        from_value(json!({ "mentorMarkAsAfk": true }))
            .expect("Failed to deserialize annotations");
    assert!(!with_flag.is_empty());
}

#[test]
fn test_config_response_wire_format() {
    let response = MentorshipConfigResponse {
        is_mentorship_open: true,
        start_date: 1_752_600_000,
        end_date: 1_752_900_000,
    };

    let value = to_value(&response).expect("Failed to serialize config response");
    assert_eq!(value["isMentorshipOpen"], json!(true));
    assert_eq!(value["startDate"], json!(1_752_600_000));
    assert_eq!(value["endDate"], json!(1_752_900_000));
}

#[test]
fn test_book_response_wire_format() {
    let response = BookMentorshipsResponse {
        success: true,
        message: "Booked 2 mentorship slot(s)".to_string(),
        booked_count: 2,
    };

    let value = to_value(&response).expect("Failed to serialize book response");
    assert_eq!(value["success"], json!(true));
    assert_eq!(value["bookedCount"], json!(2));
}

#[rstest]
#[case(true, Role::Mentor)]
#[case(false, Role::Hacker)]
fn test_role_from_mentor_claim(#[case] claim: bool, #[case] expected: Role) {
    let role = Role::from_mentor_claim(claim);
    assert_eq!(role, expected);
    assert_eq!(role.is_mentor(), claim);
}

#[test]
fn test_role_serializes_lowercase() {
    assert_eq!(to_string(&Role::Mentor).unwrap(), "\"mentor\"");
    assert_eq!(to_string(&Role::Hacker).unwrap(), "\"hacker\"");
}
