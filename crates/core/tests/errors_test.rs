use std::error::Error;

use hackhub_core::errors::{HackError, HackResult};

#[test]
fn test_hack_error_display() {
    let not_found = HackError::NotFound("Mentorship slot not found".to_string());
    let validation = HackError::Validation("Invalid input".to_string());
    let quota = HackError::QuotaExceeded("2 upcoming bookings held".to_string());
    let conflict = HackError::Conflict("slot is already booked".to_string());
    let unauthorized = HackError::Unauthorized("mentor access required".to_string());
    let database = HackError::Database(eyre::eyre!("Database connection failed"));
    let internal = HackError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    assert_eq!(
        not_found.to_string(),
        "Resource not found: Mentorship slot not found"
    );
    assert_eq!(validation.to_string(), "Validation error: Invalid input");
    assert_eq!(
        quota.to_string(),
        "Booking quota exceeded: 2 upcoming bookings held"
    );
    assert_eq!(conflict.to_string(), "Conflict: slot is already booked");
    assert_eq!(
        unauthorized.to_string(),
        "Unauthorized: mentor access required"
    );
    assert!(database.to_string().contains("Database error:"));
    assert!(internal.to_string().contains("Internal server error:"));
}

#[test]
fn test_error_kinds_are_distinct() {
    // The booking surface relies on structure, not message contents, to
    // tell "someone beat you to it" from "bad id".
    let conflict = HackError::Conflict("slot x is already booked".to_string());
    let not_found = HackError::NotFound("slot x".to_string());

    assert!(matches!(conflict, HackError::Conflict(_)));
    assert!(matches!(not_found, HackError::NotFound(_)));
}

#[test]
fn test_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let hack_error = HackError::Internal(Box::new(io_error));

    assert!(hack_error.source().is_some());
}

#[test]
fn test_hack_result() {
    let result: HackResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: HackResult<i32> = Err(HackError::NotFound("Not found".to_string()));
    assert!(result.is_err());
}

#[test]
fn test_from_eyre_report() {
    let report = eyre::eyre!("connection reset");
    let hack_error: HackError = report.into();

    assert!(matches!(hack_error, HackError::Database(_)));
    assert!(hack_error.to_string().contains("connection reset"));
}

#[test]
fn test_box_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let boxed_error: Box<dyn Error + Send + Sync> = Box::new(io_error);
    let hack_error = HackError::Internal(boxed_error);

    assert!(hack_error.to_string().contains("IO error"));
}
