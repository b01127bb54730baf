//! Recommender entry point

mod builder;
mod recommender;

pub use builder::{Demeter, RecommenderBuilder};
pub use recommender::Recommender;
