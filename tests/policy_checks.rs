use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

use kursus_core::api::Request;
use kursus_core::model::StudentProfile;
use kursus_core::policy::{ban_verdict, message_window, BanVerdict};

fn call(method: &str, params: Value) -> Value {
    kursus_core::handle_request(&Request {
        id: "t".to_string(),
        method: method.to_string(),
        params,
    })
}

fn banned_student(expires: Option<&str>) -> StudentProfile {
    StudentProfile {
        name: "Andi".to_string(),
        banned: true,
        ban_reason: Some("spam".to_string()),
        ban_expires: expires.map(|s| {
            s.parse::<chrono::DateTime<Utc>>()
                .expect("parse ban expiry")
        }),
        ..StudentProfile::default()
    }
}

#[test]
fn unbanned_student_is_clear() {
    let student = StudentProfile {
        name: "Budi".to_string(),
        ..StudentProfile::default()
    };
    let now = Utc.with_ymd_and_hms(2024, 3, 4, 8, 0, 0).unwrap();
    assert_eq!(ban_verdict(&student, now), BanVerdict::Clear);
}

#[test]
fn permanent_ban_never_expires() {
    let now = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
    match ban_verdict(&banned_student(None), now) {
        BanVerdict::Banned { reason, expires } => {
            assert_eq!(reason.as_deref(), Some("spam"));
            assert!(expires.is_none());
        }
        other => panic!("expected Banned, got {:?}", other),
    }
}

#[test]
fn temporary_ban_flips_to_expired_after_deadline() {
    let expires = "2024-03-04T00:00:00Z";
    let before = Utc.with_ymd_and_hms(2024, 3, 3, 23, 0, 0).unwrap();
    let at = Utc.with_ymd_and_hms(2024, 3, 4, 0, 0, 0).unwrap();
    let after = Utc.with_ymd_and_hms(2024, 3, 4, 0, 0, 1).unwrap();

    assert!(matches!(
        ban_verdict(&banned_student(Some(expires)), before),
        BanVerdict::Banned { .. }
    ));
    // Expiry is exclusive; the flip happens strictly after the deadline.
    assert!(matches!(
        ban_verdict(&banned_student(Some(expires)), at),
        BanVerdict::Banned { .. }
    ));
    assert_eq!(
        ban_verdict(&banned_student(Some(expires)), after),
        BanVerdict::Expired
    );
}

#[test]
fn message_window_blocks_inside_24_hours() {
    let last = Utc.with_ymd_and_hms(2024, 3, 4, 8, 0, 0).unwrap();

    let w = message_window(Some(last), last + chrono::Duration::hours(2));
    assert!(!w.allowed);
    assert_eq!(w.hours_remaining, 22);

    // 30 minutes in: 23.5 hours left rounds up to 24.
    let w = message_window(Some(last), last + chrono::Duration::minutes(30));
    assert!(!w.allowed);
    assert_eq!(w.hours_remaining, 24);

    let w = message_window(Some(last), last + chrono::Duration::hours(24));
    assert!(w.allowed);
    assert_eq!(w.hours_remaining, 0);

    let w = message_window(None, last);
    assert!(w.allowed);
}

#[test]
fn policy_methods_answer_over_the_api() {
    let resp = call(
        "policy.banCheck",
        json!({
            "student": {
                "name": "Andi",
                "isBanned": true,
                "banReason": "spam",
                "banExpires": "2024-03-04T00:00:00Z"
            },
            "now": "2024-03-10T00:00:00Z"
        }),
    );
    assert_eq!(resp["result"]["state"], json!("expired"));

    let resp = call(
        "policy.messageWindow",
        json!({
            "lastMessageSentAt": "2024-03-04T08:00:00Z",
            "now": "2024-03-04T10:00:00Z"
        }),
    );
    assert_eq!(resp["result"]["allowed"], json!(false));
    assert_eq!(resp["result"]["hoursRemaining"], json!(22));
}
