// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{ApplicantRecord, BinaryAnswer, FeatureRow, FeatureValue, PredictionResult, RiskTier, EMPLOYMENT_TYPES};
pub use requests::ClassifyRequest;
pub use responses::{ClassifyResponse, HealthResponse, ErrorResponse};
