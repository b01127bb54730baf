//! The crop decision list.
//!
//! Twenty-two threshold rules evaluated top to bottom; the first rule whose
//! condition holds names the crop. Order matters: several conditions
//! overlap (rules 1 and 2, for instance), and earlier rules win.
//!
//! Every comparison is strict. A reading sitting exactly on a threshold
//! does not satisfy that comparison, and `NaN` satisfies none, so such
//! readings fall through to later rules or to the default branch.
//!
//! When no rule matches, a crop is drawn uniformly from the whole catalog
//! through a [`RandomSource`].
//!
//! ```text
//!   SoilReading
//!       │
//!       ▼
//!   rule 1 ──match──► Rice
//!       │ no
//!   rule 2 ──match──► Maize
//!       │ no
//!      ...
//!   rule 22 ─match──► Kidneybeans
//!       │ no
//!       ▼
//!   default ────────► uniform pick over all 22 crops
//! ```

use std::fmt;

use crate::random::{RandomSource, ThreadRandom};
use crate::types::{Crop, Prediction, PredictionSource, SoilReading};

/// One entry in the decision list.
pub struct Rule {
    /// Crop recommended when the condition holds.
    pub crop: Crop,
    /// Human-readable condition.
    pub condition: &'static str,
    test: fn(&SoilReading) -> bool,
}

impl Rule {
    /// Whether the reading satisfies this rule's condition.
    pub fn matches(&self, reading: &SoilReading) -> bool {
        (self.test)(reading)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("crop", &self.crop)
            .field("condition", &self.condition)
            .finish()
    }
}

/// The decision list, in priority order.
pub static RULES: [Rule; 22] = [
    Rule {
        crop: Crop::Rice,
        condition: "temperature > 30 and humidity > 80 and rainfall > 200",
        test: |r| r.temperature > 30.0 && r.humidity > 80.0 && r.rainfall > 200.0,
    },
    Rule {
        crop: Crop::Maize,
        condition: "nitrogen > 80 and phosphorus > 40 and temperature > 20",
        test: |r| r.nitrogen > 80.0 && r.phosphorus > 40.0 && r.temperature > 20.0,
    },
    Rule {
        crop: Crop::Apple,
        condition: "ph < 6 and rainfall > 150",
        test: |r| r.ph < 6.0 && r.rainfall > 150.0,
    },
    Rule {
        crop: Crop::Coconut,
        condition: "ph > 7.5 and temperature > 25",
        test: |r| r.ph > 7.5 && r.temperature > 25.0,
    },
    Rule {
        crop: Crop::Orange,
        condition: "potassium > 40 and temperature > 25 and humidity < 60",
        test: |r| r.potassium > 40.0 && r.temperature > 25.0 && r.humidity < 60.0,
    },
    Rule {
        crop: Crop::Mango,
        condition: "nitrogen > 40 and phosphorus > 30 and potassium > 30",
        test: |r| r.nitrogen > 40.0 && r.phosphorus > 30.0 && r.potassium > 30.0,
    },
    Rule {
        crop: Crop::Banana,
        condition: "6 < ph < 7.5 and rainfall > 100",
        test: |r| r.ph > 6.0 && r.ph < 7.5 && r.rainfall > 100.0,
    },
    Rule {
        crop: Crop::Chickpea,
        condition: "nitrogen < 30 and phosphorus < 30 and potassium < 30",
        test: |r| r.nitrogen < 30.0 && r.phosphorus < 30.0 && r.potassium < 30.0,
    },
    Rule {
        crop: Crop::Coffee,
        condition: "20 < temperature < 30 and 30 < humidity < 50",
        test: |r| {
            r.temperature > 20.0 && r.temperature < 30.0 && r.humidity > 30.0 && r.humidity < 50.0
        },
    },
    Rule {
        crop: Crop::Jute,
        condition: "rainfall > 250 and humidity > 85",
        test: |r| r.rainfall > 250.0 && r.humidity > 85.0,
    },
    Rule {
        crop: Crop::Cotton,
        condition: "temperature > 25 and ph > 6.5 and humidity > 60",
        test: |r| r.temperature > 25.0 && r.ph > 6.5 && r.humidity > 60.0,
    },
    Rule {
        crop: Crop::Papaya,
        condition: "nitrogen > 50 and phosphorus > 50 and potassium > 50",
        test: |r| r.nitrogen > 50.0 && r.phosphorus > 50.0 && r.potassium > 50.0,
    },
    Rule {
        crop: Crop::Muskmelon,
        condition: "temperature > 25 and rainfall > 100",
        test: |r| r.temperature > 25.0 && r.rainfall > 100.0,
    },
    Rule {
        crop: Crop::Watermelon,
        condition: "temperature > 25 and rainfall > 50",
        test: |r| r.temperature > 25.0 && r.rainfall > 50.0,
    },
    Rule {
        crop: Crop::Grapes,
        condition: "temperature > 15 and humidity > 50",
        test: |r| r.temperature > 15.0 && r.humidity > 50.0,
    },
    Rule {
        crop: Crop::Pomegranate,
        condition: "6 < ph < 7 and rainfall > 100",
        test: |r| r.ph > 6.0 && r.ph < 7.0 && r.rainfall > 100.0,
    },
    Rule {
        crop: Crop::Lentil,
        condition: "nitrogen > 30 and phosphorus > 30 and potassium > 30 and humidity < 40",
        test: |r| {
            r.nitrogen > 30.0 && r.phosphorus > 30.0 && r.potassium > 30.0 && r.humidity < 40.0
        },
    },
    Rule {
        crop: Crop::Blackgram,
        condition: "nitrogen > 40 and ph > 6.5 and humidity > 50",
        test: |r| r.nitrogen > 40.0 && r.ph > 6.5 && r.humidity > 50.0,
    },
    Rule {
        crop: Crop::Mungbean,
        condition: "nitrogen > 35 and potassium > 30 and humidity > 45",
        test: |r| r.nitrogen > 35.0 && r.potassium > 30.0 && r.humidity > 45.0,
    },
    Rule {
        crop: Crop::Mothbeans,
        condition: "20 < temperature < 35 and ph > 6",
        test: |r| r.temperature > 20.0 && r.temperature < 35.0 && r.ph > 6.0,
    },
    Rule {
        crop: Crop::Pigeonpeas,
        condition: "temperature > 20 and humidity > 60",
        test: |r| r.temperature > 20.0 && r.humidity > 60.0,
    },
    Rule {
        crop: Crop::Kidneybeans,
        condition: "nitrogen > 50 and phosphorus > 50 and potassium > 50 and rainfall > 50",
        test: |r| {
            r.nitrogen > 50.0 && r.phosphorus > 50.0 && r.potassium > 50.0 && r.rainfall > 50.0
        },
    },
];

/// Which rule decided a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Explanation {
    /// Rule `number` (1-based) matched.
    Matched {
        number: usize,
        crop: Crop,
        condition: &'static str,
    },
    /// No rule matched; the default branch applies.
    Default,
}

impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Matched {
                number,
                crop,
                condition,
            } => write!(f, "rule {number} ({condition}) -> {crop}"),
            Self::Default => f.write_str("no rule matched; crop chosen at random"),
        }
    }
}

/// First matching rule as a 1-based number and the rule itself.
pub fn first_match(reading: &SoilReading) -> Option<(usize, &'static Rule)> {
    RULES
        .iter()
        .enumerate()
        .find(|(_, rule)| rule.matches(reading))
        .map(|(index, rule)| (index + 1, rule))
}

/// Report which rule decides `reading`, without drawing a default crop.
pub fn explain(reading: &SoilReading) -> Explanation {
    match first_match(reading) {
        Some((number, rule)) => Explanation::Matched {
            number,
            crop: rule.crop,
            condition: rule.condition,
        },
        None => Explanation::Default,
    }
}

/// Recommend a crop, drawing the default branch from the thread-local generator.
pub fn evaluate(reading: &SoilReading) -> Prediction {
    evaluate_with(reading, &mut ThreadRandom)
}

/// Recommend a crop, drawing the default branch from `random`.
///
/// `random` is consulted only when no rule matches.
pub fn evaluate_with<R: RandomSource + ?Sized>(reading: &SoilReading, random: &mut R) -> Prediction {
    match first_match(reading) {
        Some((number, rule)) => Prediction::new(rule.crop, PredictionSource::Rule { number }),
        None => {
            // Out-of-range picks wrap around.
            let index = random.pick_index(Crop::ALL.len()) % Crop::ALL.len();
            Prediction::new(Crop::ALL[index], PredictionSource::Default)
        }
    }
}
