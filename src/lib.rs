//! Demeter - crop recommendation from soil and climate readings
//!
//! Seven readings go in (nitrogen, phosphorus, potassium, temperature,
//! humidity, pH, rainfall) and one of 22 crops comes out, chosen by an
//! ordered list of threshold rules. When no rule matches, a crop is drawn
//! at random through an injectable [`RandomSource`].
//!
//! # Pure evaluation
//!
//! ```rust
//! use demeter::{Crop, SoilReading, rules};
//!
//! let reading = SoilReading {
//!     nitrogen: 90.0,
//!     phosphorus: 45.0,
//!     potassium: 10.0,
//!     temperature: 22.0,
//!     humidity: 30.0,
//!     ph: 6.8,
//!     rainfall: 10.0,
//! };
//!
//! let prediction = rules::evaluate(&reading);
//! assert_eq!(prediction.crop(), Crop::Maize);
//! ```
//!
//! # Recommender with a remote shadow
//!
//! ```rust,no_run
//! use demeter::{Demeter, SoilReading};
//!
//! #[tokio::main]
//! async fn main() -> demeter::Result<()> {
//!     let (recommender, probe) = Demeter::builder()
//!         .remote("http://127.0.0.1:5000")
//!         .build_probed()?;
//!
//!     println!("remote model: {}", probe.ready().await);
//!
//!     let prediction = recommender.recommend(&SoilReading::slider_defaults()).await?;
//!     println!("{} ({})", prediction.name(), prediction.image());
//!     Ok(())
//! }
//! ```

pub mod availability;
pub mod catalog;
#[cfg(feature = "cli")]
pub mod config;
pub mod error;
pub mod gateway;
pub mod providers;
pub mod random;
pub mod rules;
pub mod telemetry;
pub mod timeline;
pub mod types;
mod version;

// Re-export main types at crate root
pub use availability::{Availability, ProbedAvailability, StaticAvailability};
pub use error::{DemeterError, Result};
pub use gateway::{Demeter, Recommender, RecommenderBuilder};
pub use providers::{PredictionProvider, RemoteModelClient, RuleTableProvider};
pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use version::{GIT_BRANCH, GIT_SHA, PKG_VERSION, git_dirty, version_string};

// Re-export all types
pub use types::{
    Crop, CropRecord, Parameter, ParameterRange, Prediction, PredictionSource, ServiceStatus,
    SoilReading,
};
