use chrono::DateTime;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

use common::{envelope, setup_test_client};

#[tokio::test]
async fn test_free_busy_search() {
    // What it tests: Every filter of the availability search lands in its own query parameter,
    // lists are comma joined, and busy windows decode with their events.
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/free-busy/spaces"))
        .and(query_param("location_ids", "12,13"))
        .and(query_param("after", "2024-03-01T09:00:00-05:00"))
        .and(query_param("before", "2024-03-01T17:00:00-05:00"))
        .and(query_param("duration", "60"))
        .and(query_param("types", "meeting"))
        .and(query_param("amenity_ids", "1,2"))
        .and(query_param("min_capacity", "6"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            {
                "has_presence": false,
                "space": { "id": 7, "name": "Board Room", "capacity": 10 },
                "busy": []
            },
            {
                "has_presence": true,
                "space": { "id": 8, "name": "Fishbowl", "capacity": 6 },
                "busy": [{
                    "from": "2024-03-01T10:00:00-05:00",
                    "to": "2024-03-01T11:00:00-05:00",
                    "events": [{ "id": 501, "title": "Planning" }]
                }]
            }
        ]))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let results = client
        .free_busy()
        .spaces()
        .location_ids([12, 13])
        .after(DateTime::parse_from_rfc3339("2024-03-01T09:00:00-05:00").unwrap())
        .before(DateTime::parse_from_rfc3339("2024-03-01T17:00:00-05:00").unwrap())
        .duration(60)
        .types(["meeting"])
        .amenity_ids([1, 2])
        .min_capacity(6)
        .send()
        .await
        .unwrap();

    assert_eq!(results.len(), 2);
    assert!(results[0].is_free());
    assert!(!results[1].is_free());

    let busy = &results[1].busy.as_ref().unwrap()[0];
    assert_eq!(
        busy.from,
        Some(DateTime::parse_from_rfc3339("2024-03-01T10:00:00-05:00").unwrap())
    );
    assert_eq!(busy.events.as_ref().map(Vec::len), Some(1));

    let requests = mock_server.received_requests().await.unwrap();
    let query = requests[0].url.query().unwrap_or_default();
    assert!(!query.contains("space_ids="));
    assert!(!query.contains("max_capacity="));
    assert!(!query.contains("query="));
}

#[tokio::test]
async fn test_free_busy_default_duration() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/free-busy/spaces"))
        .and(query_param("space_ids", "7"))
        .and(query_param("duration", "30"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([]))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let results = client
        .free_busy()
        .spaces()
        .space_ids([7])
        .send()
        .await
        .unwrap();
    assert!(results.is_empty());
}
