use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

use common::{envelope, error_envelope, setup_test_client};
use robin_client::models::{Amenity, Location, User};
use robin_client::RobinError;

#[tokio::test]
async fn test_get_organization() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/organizations/acme"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "id": 11,
            "name": "Acme",
            "slug": "acme",
            "is_organization": true,
            "created_at": "2023-01-05T10:00:00+00:00"
        }))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let org = client.organizations().get("acme").await.unwrap();

    assert_eq!(org.id, 11);
    assert_eq!(org.slug.as_deref(), Some("acme"));
    assert_eq!(org.is_organization, Some(true));
    assert!(org.created_at.is_some());
}

#[tokio::test]
async fn test_create_location_sends_only_set_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/organizations/11/locations"))
        .and(body_json(json!({ "name": "Boston", "address": "1 Main St" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "id": 40,
            "account_id": 11,
            "name": "Boston",
            "address": "1 Main St"
        }))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let location = Location {
        name: Some("Boston".into()),
        address: Some("1 Main St".into()),
        ..Location::default()
    };
    let created = client
        .organizations()
        .create_location(11, &location)
        .await
        .unwrap();

    assert_eq!(created.id, 40);
    assert_eq!(created.account_id, Some(11));
}

#[tokio::test]
async fn test_list_users_with_ids() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/organizations/acme/users"))
        .and(query_param("ids", "3,8"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            {
                "id": 3,
                "name": "Ada",
                "primary_email": { "email": "ada@acme.test", "is_verified": true }
            },
            { "id": 8, "name": "Grace" }
        ]))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let users = client
        .organizations()
        .users("acme")
        .ids([3, 8])
        .send()
        .await
        .unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].to_string(), "Ada <ada@acme.test>");

    let requests = mock_server.received_requests().await.unwrap();
    assert!(!requests[0].url.query().unwrap_or_default().contains("query="));
}

#[tokio::test]
async fn test_add_users_reports_field_errors() {
    // What it tests: Inviting users posts the array body and, on a validation failure,
    // surfaces the per-field messages from `meta.more_info`.
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/organizations/acme/users"))
        .and(body_json(json!([{ "email": "not-an-email" }])))
        .respond_with(ResponseTemplate::new(422).set_body_json(error_envelope(
            422,
            "The given data failed to pass validation.",
            json!({ "email": ["must be a valid email address"] }),
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let err = client
        .organizations()
        .add_users("acme", &[User::invite("not-an-email")])
        .await
        .unwrap_err();

    assert!(matches!(err, RobinError::Api { .. }));
    assert_eq!(
        err.field_errors("email"),
        ["must be a valid email address".to_string()]
    );
}

#[tokio::test]
async fn test_get_organization_user() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/organizations/acme/users/ada"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(json!({ "id": 3, "slug": "ada" }))),
        )
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let user = client.organizations().user("acme", "ada").await.unwrap();
    assert_eq!(user.id, 3);
}

#[tokio::test]
async fn test_amenities() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/organizations/11/amenities"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            { "id": 1, "name": "Projector" },
            { "id": 2, "name": "Whiteboard" }
        ]))))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/organizations/11/amenities"))
        .and(body_json(json!({ "name": "Video conferencing" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "id": 3,
            "account_id": 11,
            "name": "Video conferencing"
        }))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let amenities = client.organizations().amenities(11).await.unwrap();
    assert_eq!(amenities.len(), 2);
    assert_eq!(amenities[1].name.as_deref(), Some("Whiteboard"));

    let created = client
        .organizations()
        .add_amenity(
            11,
            &Amenity {
                name: Some("Video conferencing".into()),
                ..Amenity::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(created.id, 3);
}

#[tokio::test]
async fn test_devices_filtered_by_manifest() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/organizations/11/devices"))
        .and(query_param("manifest", "ios-app"))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            { "id": 70, "device_manifest_id": 2, "name": "Ada's phone" }
        ]))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let devices = client
        .organizations()
        .devices(11)
        .manifest("ios-app")
        .per_page(100)
        .send()
        .await
        .unwrap();

    assert_eq!(devices[0].device_manifest_id, 2);
}
