//! Prediction providers.
//!
//! The rule table is the provider that answers every recommendation. The
//! remote model client speaks to an external prediction service; the
//! recommender queries it only as a shadow when the service is reachable.

pub mod remote;
pub mod rule_table;
pub mod traits;

pub use remote::{HealthResponse, RemoteModelClient};
pub use rule_table::RuleTableProvider;
pub use traits::PredictionProvider;
