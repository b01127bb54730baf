//! Local provider backed by the decision list.

use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use super::traits::PredictionProvider;
use crate::random::{RandomSource, ThreadRandom};
use crate::types::{Prediction, PredictionSource, SoilReading};
use crate::{Result, rules, telemetry};

/// Answers from [`rules::RULES`], drawing the default branch from an owned
/// random source.
///
/// The source sits behind a mutex so one provider can serve concurrent
/// callers; the lock is only taken for the draw itself.
pub struct RuleTableProvider {
    random: Mutex<Box<dyn RandomSource>>,
}

impl RuleTableProvider {
    /// Provider drawing defaults from the thread-local generator.
    pub fn new() -> Self {
        Self::with_random(Box::new(ThreadRandom))
    }

    /// Provider drawing defaults from `random`.
    pub fn with_random(random: Box<dyn RandomSource>) -> Self {
        Self {
            random: Mutex::new(random),
        }
    }

    /// Evaluate the decision list. Never fails.
    pub fn evaluate(&self, reading: &SoilReading) -> Prediction {
        let prediction = match rules::first_match(reading) {
            Some((number, rule)) => Prediction::new(rule.crop, PredictionSource::Rule { number }),
            None => {
                // A poisoned lock only means another caller panicked mid-draw;
                // the generator state is still usable.
                let mut random = self
                    .random
                    .lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner());
                rules::evaluate_with(reading, random.as_mut())
            }
        };

        let source = match prediction.source {
            PredictionSource::Default => "default",
            _ => "rule",
        };
        debug!(crop = prediction.name(), source, "rule table recommendation");
        metrics::counter!(telemetry::RECOMMENDATIONS_TOTAL,
            "source" => source,
            "crop" => prediction.name(),
        )
        .increment(1);

        prediction
    }
}

impl Default for RuleTableProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PredictionProvider for RuleTableProvider {
    fn name(&self) -> &str {
        "rule_table"
    }

    async fn predict(&self, reading: &SoilReading) -> Result<Prediction> {
        Ok(self.evaluate(reading))
    }
}
