use chrono::Utc;
use hackhub_core::clock::{Clock, FixedClock, SystemClock};

#[test]
fn test_fixed_clock_pins_now() {
    let clock = FixedClock(1_752_804_000);
    assert_eq!(clock.now(), 1_752_804_000);
    assert_eq!(clock.now(), 1_752_804_000);
}

#[test]
fn test_system_clock_tracks_wall_time() {
    let before = Utc::now().timestamp();
    let now = SystemClock.now();
    let after = Utc::now().timestamp();

    assert!(before <= now && now <= after);
}
