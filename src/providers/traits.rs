//! Provider trait for crop predictions.

use async_trait::async_trait;

use crate::Result;
use crate::types::{Prediction, SoilReading};

/// Something that can name a crop for a reading.
///
/// The rule table implements this infallibly; remote implementations
/// report transport and protocol failures through [`DemeterError`](crate::DemeterError).
#[async_trait]
pub trait PredictionProvider: Send + Sync {
    /// Provider name for logging/debugging.
    fn name(&self) -> &str;

    /// Predict a crop for `reading`.
    async fn predict(&self, reading: &SoilReading) -> Result<Prediction>;
}
