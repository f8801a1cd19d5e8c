use chrono::{DateTime, Duration};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

use common::{envelope, setup_test_client};
use robin_client::models::{Calendar, DateTimeZone, Event, Presence, Space};

#[tokio::test]
async fn test_get_space_with_includes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/spaces/7"))
        .and(query_param("include", "calendar,location"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "id": 7,
            "location_id": 12,
            "name": "Board Room",
            "type": "meeting",
            "calendar": { "space_id": 7, "remote_type": "google_calendar" },
            "location": { "id": 12, "name": "HQ" }
        }))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let space = client
        .spaces()
        .get(7)
        .include("calendar")
        .include("location")
        .send()
        .await
        .unwrap();

    assert_eq!(space.space_type.as_deref(), Some("meeting"));
    assert_eq!(
        space.calendar.and_then(|c| c.remote_type),
        Some("google_calendar".to_string())
    );
    assert_eq!(space.location.map(|l| l.id), Some(12));
}

#[tokio::test]
async fn test_get_space_without_includes_sends_no_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/spaces/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({ "id": 7 }))))
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    client.spaces().get(7).send().await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_update_space() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/spaces/7"))
        .and(body_json(json!({ "id": 7, "capacity": 12, "is_disabled": false })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let space = Space {
        id: 7,
        capacity: Some(12),
        is_disabled: Some(false),
        ..Space::default()
    };
    client.spaces().update(&space).await.unwrap();
}

#[tokio::test]
async fn test_book_space() {
    // What it tests: Booking a space posts the event with start/end in the API's timestamp
    // format and decodes the created event.
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/spaces/7/events"))
        .and(body_json(json!({
            "title": "Planning",
            "start": { "date_time": "2024-03-01T14:00:00-05:00", "time_zone": "America/New_York" },
            "end": { "date_time": "2024-03-01T15:00:00-05:00", "time_zone": "America/New_York" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "id": 501,
            "space_id": 7,
            "title": "Planning",
            "started_at": "2024-03-01T14:00:00-05:00",
            "ended_at": "2024-03-01T15:00:00-05:00"
        }))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let start = DateTime::parse_from_rfc3339("2024-03-01T14:00:00-05:00").unwrap();
    let event = Event {
        title: Some("Planning".into()),
        start: Some(DateTimeZone::new(start, "America/New_York")),
        end: Some(DateTimeZone::new(start + Duration::hours(1), "America/New_York")),
        ..Event::default()
    };

    let created = client.spaces().add_event(7, &event).await.unwrap();
    assert_eq!(created.id, 501);
    assert_eq!(created.space_id, 7);
    assert_eq!(created.started_at, Some(start));
}

#[tokio::test]
async fn test_space_events_window() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/spaces/7/events"))
        .and(query_param("after", "2024-03-01T00:00:00+01:00"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([]))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let events = client
        .spaces()
        .events(7)
        .after(DateTime::parse_from_rfc3339("2024-03-01T00:00:00+01:00").unwrap())
        .send()
        .await
        .unwrap();
    assert!(events.is_empty());

    let requests = mock_server.received_requests().await.unwrap();
    assert!(!requests[0].url.query().unwrap_or_default().contains("before="));
}

#[tokio::test]
async fn test_space_amenities() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/spaces/7/amenities"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            { "id": 1, "name": "Projector" }
        ]))))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/spaces/7/amenities/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "id": 1,
            "name": "Projector"
        }))))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/spaces/7/amenities/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "id": 2,
            "name": "Whiteboard"
        }))))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/spaces/7/amenities/1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let spaces = client.spaces();

    assert_eq!(spaces.amenities(7).await.unwrap().len(), 1);
    assert_eq!(spaces.amenity(7, 1).await.unwrap().id, 1);
    assert_eq!(
        spaces.add_amenity(7, 2).await.unwrap().name.as_deref(),
        Some("Whiteboard")
    );
    spaces.remove_amenity(7, 1).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let put = requests
        .iter()
        .find(|r| r.method.as_str() == "PUT")
        .unwrap();
    assert!(put.body.is_empty());
}

#[tokio::test]
async fn test_space_presence() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/spaces/7/presence"))
        .and(query_param("query", "ada"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            { "location_id": 12, "space_id": 7, "device_id": 70, "device": { "id": 70 } }
        ]))))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/spaces/7/presence"))
        .and(body_json(json!({ "device_id": 70 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "location_id": 12,
            "space_id": 7,
            "device_id": 70
        }))))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/spaces/7/presence"))
        .and(body_json(json!({ "device_id": 70 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!(null))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let presence = client.spaces().presence(7).query("ada").send().await.unwrap();
    assert_eq!(presence[0].device.as_ref().map(|d| d.id), Some(70));

    let report = Presence::for_device(70);
    let added = client.spaces().add_presence(7, &report).await.unwrap();
    assert_eq!(added.space_id, Some(7));
    client.spaces().remove_presence(7, &report).await.unwrap();
}

#[tokio::test]
async fn test_space_state_and_calendar() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/spaces/7/state"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "availability": "booked",
            "present": 3,
            "next_busy_change": "2024-03-01T15:00:00-05:00"
        }))))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/spaces/7/calendar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "space_id": 7,
            "remote_type": "google_calendar",
            "calendar_id": "room-7@acme.test"
        }))))
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/spaces/7/calendar"))
        .and(body_json(json!({
            "remote_type": "microsoft_365",
            "calendar_id": "room-7@acme.onmicrosoft.com"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "space_id": 7,
            "remote_type": "microsoft_365",
            "calendar_id": "room-7@acme.onmicrosoft.com"
        }))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());

    let state = client.spaces().state(7).await.unwrap();
    assert_eq!(state.availability.as_deref(), Some("booked"));
    assert_eq!(state.present, Some(3));
    assert!(state.next_busy_change.is_some());

    let calendar = client.spaces().calendar(7).await.unwrap();
    assert_eq!(calendar.space_id, 7);

    let updated = client
        .spaces()
        .set_calendar(
            7,
            &Calendar {
                remote_type: Some("microsoft_365".into()),
                calendar_id: Some("room-7@acme.onmicrosoft.com".into()),
                ..Calendar::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.remote_type.as_deref(), Some("microsoft_365"));
}

#[tokio::test]
async fn test_space_devices() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/spaces/7/devices"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([{ "id": 70 }]))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let devices = client.spaces().devices(7).page(3).send().await.unwrap();
    assert_eq!(devices[0].id, 70);
}
