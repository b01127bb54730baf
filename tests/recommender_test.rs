//! Tests for the recommender: validation, shadow traffic and the local
//! answer always winning.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use demeter::{
    Crop, Demeter, DemeterError, Prediction, PredictionProvider, PredictionSource, RandomSource,
    Result, ServiceStatus, SoilReading, StaticAvailability,
};

// ============================================================================
// Mock providers
// ============================================================================

/// Shadow provider that always names the same crop and counts its calls.
struct FixedShadow {
    crop: Crop,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl PredictionProvider for FixedShadow {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn predict(&self, _reading: &SoilReading) -> Result<Prediction> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Prediction::new(self.crop, PredictionSource::Remote))
    }
}

struct FailingShadow {
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl PredictionProvider for FailingShadow {
    fn name(&self) -> &str {
        "failing"
    }

    async fn predict(&self, _reading: &SoilReading) -> Result<Prediction> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(DemeterError::Http("connection refused".to_string()))
    }
}

struct FixedIndex(usize);

impl RandomSource for FixedIndex {
    fn pick_index(&mut self, _len: usize) -> usize {
        self.0
    }
}

// ============================================================================
// Helpers
// ============================================================================

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

fn unmatched() -> SoilReading {
    SoilReading {
        nitrogen: 100.0,
        phosphorus: 0.0,
        potassium: 0.0,
        temperature: 0.0,
        humidity: 0.0,
        ph: 0.0,
        rainfall: 0.0,
    }
}

fn fixed_shadow(crop: Crop) -> (Arc<dyn PredictionProvider>, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let shadow = Arc::new(FixedShadow {
        crop,
        calls: calls.clone(),
    });
    (shadow, calls)
}

// ============================================================================
// Local answers
// ============================================================================

#[tokio::test]
async fn default_builder_answers_from_rule_table() {
    let recommender = Demeter::builder().build().unwrap();
    assert_eq!(recommender.status(), ServiceStatus::Fallback);
    assert!(!recommender.has_shadow());

    let prediction = recommender.recommend(&maize_reading()).await.unwrap();
    assert_eq!(prediction.crop(), Crop::Maize);
    assert_eq!(prediction.source, PredictionSource::Rule { number: 2 });
}

#[tokio::test]
async fn invalid_reading_rejected_before_shadow() {
    let (shadow, calls) = fixed_shadow(Crop::Coffee);
    let recommender = Demeter::builder()
        .shadow_provider(shadow)
        .availability(Arc::new(StaticAvailability(ServiceStatus::Connected)))
        .build()
        .unwrap();

    let mut reading = maize_reading();
    reading.ph = 15.0;
    let err = recommender.recommend(&reading).await.unwrap_err();
    assert!(matches!(
        err,
        DemeterError::InvalidReading {
            parameter: "ph",
            ..
        }
    ));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn evaluate_skips_validation() {
    let recommender = Demeter::builder().build().unwrap();
    let mut reading = maize_reading();
    reading.ph = 15.0;
    assert_eq!(recommender.evaluate(&reading).crop(), Crop::Maize);
}

#[tokio::test]
async fn seeded_builders_agree_on_default_branch() {
    let a = Demeter::builder().seed(11).build().unwrap();
    let b = Demeter::builder().seed(11).build().unwrap();

    for _ in 0..20 {
        let left = a.recommend(&unmatched()).await.unwrap();
        let right = b.recommend(&unmatched()).await.unwrap();
        assert!(left.is_default());
        assert_eq!(left, right);
    }
}

#[tokio::test]
async fn random_source_overrides_seed() {
    let recommender = Demeter::builder()
        .seed(11)
        .random_source(Box::new(FixedIndex(21)))
        .build()
        .unwrap();
    let prediction = recommender.recommend(&unmatched()).await.unwrap();
    assert_eq!(prediction.crop(), Crop::Coffee);
}

// ============================================================================
// Shadow traffic
// ============================================================================

#[tokio::test]
async fn shadow_answer_is_discarded() {
    let (shadow, calls) = fixed_shadow(Crop::Coffee);
    let recommender = Demeter::builder()
        .shadow_provider(shadow)
        .availability(Arc::new(StaticAvailability(ServiceStatus::Connected)))
        .build()
        .unwrap();

    let prediction = recommender.recommend(&maize_reading()).await.unwrap();
    assert_eq!(prediction.crop(), Crop::Maize);
    assert_ne!(prediction.source, PredictionSource::Remote);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn shadow_skipped_unless_connected() {
    for status in [ServiceStatus::Checking, ServiceStatus::Fallback] {
        let (shadow, calls) = fixed_shadow(Crop::Coffee);
        let recommender = Demeter::builder()
            .shadow_provider(shadow)
            .availability(Arc::new(StaticAvailability(status)))
            .build()
            .unwrap();

        recommender.recommend(&maize_reading()).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 0, "status {status}");
    }
}

#[tokio::test]
async fn shadow_disabled_drops_provider() {
    let (shadow, calls) = fixed_shadow(Crop::Coffee);
    let recommender = Demeter::builder()
        .shadow_provider(shadow)
        .shadow(false)
        .availability(Arc::new(StaticAvailability(ServiceStatus::Connected)))
        .build()
        .unwrap();

    assert!(!recommender.has_shadow());
    recommender.recommend(&maize_reading()).await.unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn shadow_failure_is_swallowed() {
    let calls = Arc::new(AtomicUsize::new(0));
    let recommender = Demeter::builder()
        .shadow_provider(Arc::new(FailingShadow {
            calls: calls.clone(),
        }))
        .availability(Arc::new(StaticAvailability(ServiceStatus::Connected)))
        .build()
        .unwrap();

    let prediction = recommender.recommend(&maize_reading()).await.unwrap();
    assert_eq!(prediction.crop(), Crop::Maize);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn remote_service_queried_but_ignored() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "healthy"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "Coffee"})))
        .expect(1)
        .mount(&server)
        .await;

    let (recommender, probe) = Demeter::builder()
        .remote(server.uri())
        .build_probed()
        .unwrap();
    probe.ready().await;

    let prediction = recommender.recommend(&maize_reading()).await.unwrap();
    assert_eq!(prediction.crop(), Crop::Maize);
}

#[tokio::test]
async fn remote_down_sends_no_predict() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "Coffee"})))
        .expect(0)
        .mount(&server)
        .await;

    let (recommender, probe) = Demeter::builder()
        .remote(server.uri())
        .build_probed()
        .unwrap();
    assert_eq!(probe.ready().await, ServiceStatus::Fallback);

    let prediction = recommender.recommend(&maize_reading()).await.unwrap();
    assert_eq!(prediction.crop(), Crop::Maize);
}
