//! Client for an external crop prediction service.
//!
//! The service exposes two endpoints:
//!
//! - `GET /health` → `{"status": "healthy", "message": "..."}`
//! - `POST /predict` with the seven readings as JSON →
//!   `{"name": "Rice", "image": "https://..."}` or `{"error": "..."}`
//!
//! Both calls are bounded by short per-request timeouts so a missing
//! service is noticed within seconds.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use super::traits::PredictionProvider;
use crate::types::{Prediction, PredictionSource, ServiceStatus, SoilReading};
use crate::{DemeterError, Result, catalog, telemetry};

/// Default base URL for a locally running prediction service.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Health checks give up after this long.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// Predict requests give up after this long.
pub const DEFAULT_PREDICT_TIMEOUT: Duration = Duration::from_secs(5);

/// Body of a `GET /health` response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// `POST /predict` answers with either an error or a crop.
#[derive(Deserialize)]
#[serde(untagged)]
enum PredictPayload {
    Failure { error: String },
    Crop { name: String },
}

/// Client for the remote prediction service.
#[derive(Clone)]
pub struct RemoteModelClient {
    http: Client,
    base_url: String,
    probe_timeout: Duration,
    predict_timeout: Duration,
}

impl RemoteModelClient {
    /// Create a client for the service at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .build()
            .map_err(|e| DemeterError::Http(e.to_string()))?;
        Ok(Self::with_http_client(http, base_url))
    }

    /// Create a client sharing an existing HTTP client.
    pub fn with_http_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            predict_timeout: DEFAULT_PREDICT_TIMEOUT,
        }
    }

    /// Set the health check timeout.
    pub fn probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    /// Set the predict request timeout.
    pub fn predict_timeout(mut self, timeout: Duration) -> Self {
        self.predict_timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the service's health report.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn health(&self) -> Result<HealthResponse> {
        let url = format!("{}/health", self.base_url);

        let response = self
            .http
            .get(&url)
            .timeout(self.probe_timeout)
            .send()
            .await
            .map_err(|e| DemeterError::Http(e.to_string()))?;

        let response = Self::check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| DemeterError::Http(e.to_string()))
    }

    /// Classify the service as reachable or not.
    ///
    /// Never fails: timeouts, transport errors, error statuses and
    /// unhealthy reports all map to [`ServiceStatus::Fallback`].
    pub async fn probe(&self) -> ServiceStatus {
        let status = match self.health().await {
            Ok(report) if report.is_healthy() => {
                info!(base_url = %self.base_url, "prediction service is available");
                ServiceStatus::Connected
            }
            Ok(report) => {
                warn!(
                    base_url = %self.base_url,
                    status = %report.status,
                    "prediction service reported unhealthy, using rule table"
                );
                ServiceStatus::Fallback
            }
            Err(e) => {
                warn!(
                    base_url = %self.base_url,
                    error = %e,
                    "prediction service is not available, using rule table"
                );
                ServiceStatus::Fallback
            }
        };

        metrics::counter!(telemetry::PROBE_TOTAL, "status" => status.as_str()).increment(1);
        status
    }

    /// Ask the service which crop suits `reading`.
    #[instrument(skip(self, reading), fields(base_url = %self.base_url))]
    pub async fn predict_remote(&self, reading: &SoilReading) -> Result<Prediction> {
        let start = Instant::now();
        let result = self.send_predict(reading).await;
        Self::record_request(start, result.is_ok());
        result
    }

    async fn send_predict(&self, reading: &SoilReading) -> Result<Prediction> {
        let url = format!("{}/predict", self.base_url);

        let response = self
            .http
            .post(&url)
            .json(reading)
            .timeout(self.predict_timeout)
            .send()
            .await
            .map_err(|e| DemeterError::Http(e.to_string()))?;

        let response = Self::check_status(response).await?;

        let payload: PredictPayload = response
            .json()
            .await
            .map_err(|e| DemeterError::Http(e.to_string()))?;

        match payload {
            PredictPayload::Failure { error } => Err(DemeterError::Remote(error)),
            PredictPayload::Crop { name } => {
                let record = catalog::lookup(&name).ok_or(DemeterError::UnknownCrop(name))?;
                debug!(crop = record.name, "remote prediction");
                Ok(Prediction::new(record.crop, PredictionSource::Remote))
            }
        }
    }

    /// Turn non-success statuses into `Api` errors.
    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(DemeterError::Api {
            status: status.as_u16(),
            message,
        })
    }

    fn record_request(start: Instant, ok: bool) {
        let status = if ok { "ok" } else { "error" };
        metrics::counter!(telemetry::REMOTE_REQUESTS_TOTAL, "status" => status).increment(1);
        metrics::histogram!(telemetry::REMOTE_REQUEST_DURATION_SECONDS)
            .record(start.elapsed().as_secs_f64());
    }
}

#[async_trait]
impl PredictionProvider for RemoteModelClient {
    fn name(&self) -> &str {
        "remote"
    }

    async fn predict(&self, reading: &SoilReading) -> Result<Prediction> {
        self.predict_remote(reading).await
    }
}
