//! Recommender - validates readings and answers from the rule table

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::availability::Availability;
use crate::providers::{PredictionProvider, RuleTableProvider};
use crate::types::{Prediction, ServiceStatus, SoilReading};
use crate::{Result, telemetry};

/// Recommends crops for soil readings.
///
/// Every answer comes from the rule table. When a shadow provider is
/// configured and the injected [`Availability`] reports it connected, the
/// recommender also sends it the reading, logs whether it agrees, and then
/// discards its answer. Shadow failures never reach the caller.
pub struct Recommender {
    local: RuleTableProvider,
    shadow: Option<Arc<dyn PredictionProvider>>,
    availability: Arc<dyn Availability>,
}

impl Recommender {
    pub(crate) fn new(
        local: RuleTableProvider,
        shadow: Option<Arc<dyn PredictionProvider>>,
        availability: Arc<dyn Availability>,
    ) -> Self {
        Self {
            local,
            shadow,
            availability,
        }
    }

    /// Current status of the remote model, for a status badge.
    pub fn status(&self) -> ServiceStatus {
        self.availability.status()
    }

    /// Whether a shadow provider is configured.
    pub fn has_shadow(&self) -> bool {
        self.shadow.is_some()
    }

    /// Evaluate the rule table without validation or shadow traffic.
    pub fn evaluate(&self, reading: &SoilReading) -> Prediction {
        self.local.evaluate(reading)
    }

    /// Validate `reading` and recommend a crop.
    ///
    /// Fails only when the reading is invalid
    /// (see [`SoilReading::validate`]).
    #[instrument(skip_all, fields(status = %self.status()))]
    pub async fn recommend(&self, reading: &SoilReading) -> Result<Prediction> {
        reading.validate()?;

        let remote = match &self.shadow {
            Some(shadow) if self.availability.status().is_connected() => {
                Self::query_shadow(shadow.as_ref(), reading).await
            }
            _ => None,
        };

        let prediction = self.local.evaluate(reading);

        if let Some(remote) = remote {
            if remote.crop() == prediction.crop() {
                debug!(crop = prediction.name(), "remote model agrees with rule table");
            } else {
                debug!(
                    local = prediction.name(),
                    remote = remote.name(),
                    "remote model disagrees with rule table; keeping rule table answer"
                );
                metrics::counter!(telemetry::REMOTE_DISAGREEMENTS_TOTAL).increment(1);
            }
        }

        Ok(prediction)
    }

    async fn query_shadow(
        shadow: &dyn PredictionProvider,
        reading: &SoilReading,
    ) -> Option<Prediction> {
        match shadow.predict(reading).await {
            Ok(prediction) => Some(prediction),
            Err(e) => {
                warn!(
                    provider = shadow.name(),
                    error = %e,
                    transient = e.is_transient(),
                    "shadow prediction failed"
                );
                None
            }
        }
    }
}
