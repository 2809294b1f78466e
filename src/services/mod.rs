// Service exports
pub mod model;

pub use model::{DefaultModel, LogisticModel, ModelError, ModelInfo};
