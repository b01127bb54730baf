//! Recommendation results.

use serde::Serialize;

use super::{Crop, CropRecord};

/// How a prediction was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum PredictionSource {
    /// A rule in the decision list matched. `number` is 1-based.
    Rule { number: usize },
    /// No rule matched; the crop was drawn at random.
    Default,
    /// The remote model named the crop.
    Remote,
}

/// A recommended crop, pointing into the static catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    #[serde(flatten)]
    pub record: &'static CropRecord,
    pub source: PredictionSource,
}

impl Prediction {
    pub fn new(crop: Crop, source: PredictionSource) -> Self {
        Self {
            record: crop.record(),
            source,
        }
    }

    pub fn crop(&self) -> Crop {
        self.record.crop
    }

    pub fn name(&self) -> &'static str {
        self.record.name
    }

    pub fn image(&self) -> &'static str {
        self.record.image
    }

    /// Whether the default branch picked this crop.
    pub fn is_default(&self) -> bool {
        self.source == PredictionSource::Default
    }
}
