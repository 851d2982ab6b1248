//! Integration tests for the backend client against a mock server.

use std::time::Duration;

use chrono::NaiveDate;
use goca_core::booking::BookingId;
use goca_core::client::GocaClient;
use goca_core::{BookingSession, BookingSubmitter, GocaError, GuestDetails, Hhmm, MeetingLocation};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Test Helpers
// ============================================================================

fn host_profile() -> serde_json::Value {
    let days: Vec<_> = (0..7)
        .map(|day| {
            json!({
                "id": day + 1,
                "enable": if day == 0 || day == 6 { 0 } else { 1 },
                "day": day,
                "start_time": 900,
                "end_time": 1200
            })
        })
        .collect();

    json!({
        "id": 1,
        "username": "john",
        "event_types": [{
            "id": 3,
            "enable": 1,
            "title": "45 Min Meeting",
            "description": "",
            "duration": 45,
            "is_google_available": true,
            "is_microsoft_available": true,
            "availability": {
                "id": 1,
                "label": "Working Hours",
                "timezone": "Asia/Makassar",
                "days": days
            }
        }]
    })
}

fn client(server: &MockServer) -> GocaClient {
    GocaClient::new(&format!("{}/api/v1/", server.uri()), Duration::from_secs(5)).unwrap()
}

fn guest() -> GuestDetails {
    GuestDetails {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        notes: Some("Intro call".to_string()),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_host_profile_to_slots() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/booking/john"))
        .respond_with(ResponseTemplate::new(200).set_body_json(host_profile()))
        .expect(1)
        .mount(&server)
        .await;

    let profile = client(&server).host("john").await.unwrap();
    let session = BookingSession::from_profile(&profile, 3).unwrap();

    // Saturday pick, evaluated the Friday before
    let saturday = NaiveDate::from_ymd_opt(2026, 10, 24).unwrap();
    let now = NaiveDate::from_ymd_opt(2026, 10, 23)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    let schedule = session.open_day(saturday, now).unwrap();

    assert_eq!(
        schedule.day.date,
        NaiveDate::from_ymd_opt(2026, 10, 26).unwrap()
    );
    assert_eq!(
        schedule.labels(),
        vec!["09:00", "09:45", "10:30", "11:15", "12:00"]
    );
}

#[tokio::test]
async fn test_unknown_host_is_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/booking/nobody"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(json!({"error": "sql: no rows in result set"})),
        )
        .mount(&server)
        .await;

    let err = client(&server).host("nobody").await.unwrap_err();
    assert!(matches!(err, GocaError::Http(msg) if msg.contains("no rows") && msg.contains("422")));
}

#[tokio::test]
async fn test_submit_posts_wire_format() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/booking"))
        .and(body_json(json!({
            "username": "john",
            "event_type_id": 3,
            "date": 1_792_972_800,
            "time": 945,
            "name": "Ada",
            "email": "ada@example.com",
            "notes": "Intro call",
            "meeting_location": "google"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 12})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/booking/john"))
        .respond_with(ResponseTemplate::new(200).set_body_json(host_profile()))
        .mount(&server)
        .await;

    let client = client(&server);
    let profile = client.host("john").await.unwrap();
    let session = BookingSession::from_profile(&profile, 3).unwrap();

    let monday = NaiveDate::from_ymd_opt(2026, 10, 26).unwrap();
    let now = monday.and_hms_opt(8, 0, 0).unwrap();
    let schedule = session.open_day(monday, now).unwrap();
    let slot = *schedule.find(Hhmm::new(945).unwrap()).unwrap();

    let request = session.confirm(&slot, guest(), Some(MeetingLocation::Google));
    let confirmation = session.submit(&client, request).await.unwrap();
    assert_eq!(confirmation.id, BookingId::Number(12));
}

#[tokio::test]
async fn test_rejected_submission_is_reported_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/booking"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!("googleapi: Error 401")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let request = goca_core::BookingRequest {
        username: "john".to_string(),
        event_type_id: 3,
        date: 1_792_713_600,
        time: Hhmm::new(1030).unwrap(),
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        notes: None,
        meeting_location: None,
    };

    let err = client(&server).submit(&request).await.unwrap_err();
    assert!(matches!(err, GocaError::SubmissionFailed(msg) if msg == "googleapi: Error 401"));
}

#[tokio::test]
async fn test_unreachable_backend_is_submission_failure() {
    let client = GocaClient::new("http://127.0.0.1:9", Duration::from_millis(500)).unwrap();
    let request = goca_core::BookingRequest {
        username: "john".to_string(),
        event_type_id: 3,
        date: 1_792_713_600,
        time: Hhmm::new(1030).unwrap(),
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        notes: None,
        meeting_location: None,
    };

    assert!(matches!(
        client.submit(&request).await,
        Err(GocaError::SubmissionFailed(_))
    ));
}

#[tokio::test]
async fn test_schedule_lookup() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/schedule/12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "12",
            "title": "45 Min Meeting between john and Ada",
            "notes": "Intro call",
            "name": "Ada",
            "email": "ada@example.com",
            "date": 1_792_713_600,
            "time": 945,
            "location": "google",
            "event_detail": null
        })))
        .mount(&server)
        .await;

    let booking = client(&server).schedule("12").await.unwrap();
    assert_eq!(booking.time, 945);
    assert_eq!(booking.name, "Ada");
}
