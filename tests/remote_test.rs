//! Integration tests for [`RemoteModelClient`] against a mock prediction
//! service.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use demeter::{
    Crop, DemeterError, PredictionProvider, PredictionSource, RemoteModelClient, ServiceStatus,
    SoilReading,
};

fn maize_reading() -> SoilReading {
    SoilReading {
        nitrogen: 90.0,
        phosphorus: 45.0,
        potassium: 10.0,
        temperature: 22.0,
        humidity: 30.0,
        ph: 6.8,
        rainfall: 10.0,
    }
}

async fn mount_health(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(template)
        .mount(server)
        .await;
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn health_parses_report() {
    let server = MockServer::start().await;
    mount_health(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(json!({"status": "healthy", "message": "Crop prediction API is running"})),
    )
    .await;

    let client = RemoteModelClient::new(server.uri()).unwrap();
    let report = client.health().await.unwrap();
    assert!(report.is_healthy());
    assert_eq!(report.message.as_deref(), Some("Crop prediction API is running"));
}

#[tokio::test]
async fn probe_connected_when_healthy() {
    let server = MockServer::start().await;
    mount_health(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"status": "healthy"})),
    )
    .await;

    let client = RemoteModelClient::new(server.uri()).unwrap();
    assert_eq!(client.probe().await, ServiceStatus::Connected);
}

#[tokio::test]
async fn probe_fallback_when_unhealthy() {
    let server = MockServer::start().await;
    mount_health(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"status": "degraded"})),
    )
    .await;

    let client = RemoteModelClient::new(server.uri()).unwrap();
    assert_eq!(client.probe().await, ServiceStatus::Fallback);
}

#[tokio::test]
async fn probe_fallback_on_server_error() {
    let server = MockServer::start().await;
    mount_health(&server, ResponseTemplate::new(500).set_body_string("boom")).await;

    let client = RemoteModelClient::new(server.uri()).unwrap();
    let err = client.health().await.unwrap_err();
    assert!(matches!(err, DemeterError::Api { status: 500, .. }));
    assert_eq!(client.probe().await, ServiceStatus::Fallback);
}

#[tokio::test]
async fn probe_fallback_on_malformed_body() {
    let server = MockServer::start().await;
    mount_health(&server, ResponseTemplate::new(200).set_body_string("ok")).await;

    let client = RemoteModelClient::new(server.uri()).unwrap();
    assert_eq!(client.probe().await, ServiceStatus::Fallback);
}

#[tokio::test]
async fn probe_fallback_on_timeout() {
    let server = MockServer::start().await;
    mount_health(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(json!({"status": "healthy"}))
            .set_delay(Duration::from_millis(500)),
    )
    .await;

    let client = RemoteModelClient::new(server.uri())
        .unwrap()
        .probe_timeout(Duration::from_millis(50));
    let err = client.health().await.unwrap_err();
    assert!(err.is_transient());
    assert_eq!(client.probe().await, ServiceStatus::Fallback);
}

#[tokio::test]
async fn probe_fallback_when_nothing_listens() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = RemoteModelClient::new(uri).unwrap();
    assert_eq!(client.probe().await, ServiceStatus::Fallback);
}

// =============================================================================
// Predict
// =============================================================================

#[tokio::test]
async fn predict_sends_reading_and_maps_crop() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(body_json(json!({
            "nitrogen": 90.0,
            "phosphorus": 45.0,
            "potassium": 10.0,
            "temperature": 22.0,
            "humidity": 30.0,
            "ph": 6.8,
            "rainfall": 10.0
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Maize",
            "image": "https://example.invalid/maize.jpg"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = RemoteModelClient::new(server.uri()).unwrap();
    let prediction = client.predict_remote(&maize_reading()).await.unwrap();
    assert_eq!(prediction.crop(), Crop::Maize);
    assert_eq!(prediction.source, PredictionSource::Remote);
    // The image always comes from the local catalog.
    assert_eq!(prediction.image(), Crop::Maize.record().image);
}

#[tokio::test]
async fn predict_name_is_case_insensitive() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "rice"})))
        .mount(&server)
        .await;

    let client = RemoteModelClient::new(server.uri()).unwrap();
    let prediction = client.predict(&maize_reading()).await.unwrap();
    assert_eq!(prediction.crop(), Crop::Rice);
}

#[tokio::test]
async fn predict_error_body_becomes_remote_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"error": "model not loaded"})),
        )
        .mount(&server)
        .await;

    let client = RemoteModelClient::new(server.uri()).unwrap();
    let err = client.predict_remote(&maize_reading()).await.unwrap_err();
    match err {
        DemeterError::Remote(message) => assert_eq!(message, "model not loaded"),
        other => panic!("expected Remote, got {other:?}"),
    }
}

#[tokio::test]
async fn predict_unknown_crop_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "Quinoa"})))
        .mount(&server)
        .await;

    let client = RemoteModelClient::new(server.uri()).unwrap();
    let err = client.predict_remote(&maize_reading()).await.unwrap_err();
    assert!(matches!(err, DemeterError::UnknownCrop(ref name) if name == "Quinoa"));
    assert!(!err.is_transient());
}

#[tokio::test]
async fn predict_server_error_is_transient() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let client = RemoteModelClient::new(server.uri()).unwrap();
    let err = client.predict_remote(&maize_reading()).await.unwrap_err();
    assert!(matches!(err, DemeterError::Api { status: 503, ref message } if message == "overloaded"));
    assert!(err.is_transient());
}

#[tokio::test]
async fn predict_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"name": "Rice"}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let client = RemoteModelClient::new(server.uri())
        .unwrap()
        .predict_timeout(Duration::from_millis(50));
    let err = client.predict_remote(&maize_reading()).await.unwrap_err();
    assert!(matches!(err, DemeterError::Http(_)));
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn trailing_slash_trimmed_from_base_url() {
    let client = RemoteModelClient::new("http://127.0.0.1:5000/").unwrap();
    assert_eq!(client.base_url(), "http://127.0.0.1:5000");
}

#[test]
fn shared_http_client_accepted() {
    let client = RemoteModelClient::with_http_client(reqwest::Client::new(), "http://host:1");
    assert_eq!(client.base_url(), "http://host:1");
    assert_eq!(client.name(), "remote");
}
