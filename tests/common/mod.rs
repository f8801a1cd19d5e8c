use serde_json::{json, Value};
use robin_client::RobinClient;

pub const TEST_KEY: &str = "test-key";

/// Set up a test client pointed at the mock server.
#[allow(dead_code)]
pub fn setup_test_client(server_url: &str) -> RobinClient {
    let _ = env_logger::builder().is_test(true).try_init();

    RobinClient::builder()
        .api_key(TEST_KEY)
        .base_url(server_url)
        .build()
        .expect("Failed to build RobinClient")
}

/// Wraps `data` in a successful response envelope.
#[allow(dead_code)]
pub fn envelope(data: Value) -> Value {
    json!({
        "meta": {
            "status_code": 200,
            "status": "OK",
            "message": "",
            "more_info": {}
        },
        "data": data
    })
}

/// A paginated success envelope.
#[allow(dead_code)]
pub fn paged_envelope(data: Value, page: i64, per_page: i64) -> Value {
    let mut body = envelope(data);
    body["paging"] = json!({ "page": page, "per_page": per_page });
    body
}

/// An error envelope as the API returns it for failed requests.
#[allow(dead_code)]
pub fn error_envelope(status_code: u16, message: &str, more_info: Value) -> Value {
    json!({
        "meta": {
            "status_code": status_code,
            "status": "ERROR",
            "message": message,
            "more_info": more_info
        },
        "data": null
    })
}
