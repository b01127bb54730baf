//! Public types for the Demeter API.

mod crop;
mod parameter;
mod prediction;
mod reading;
mod status;

pub use crop::{Crop, CropRecord};
pub use parameter::{Parameter, ParameterRange};
pub use prediction::{Prediction, PredictionSource};
pub use reading::SoilReading;
pub use status::ServiceStatus;
