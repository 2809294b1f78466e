//! Loan Risk - default risk classification service
//!
//! Validates loan-applicant records, scores them with a pre-trained default
//! model and maps the default probability to a low/medium/high risk tier.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{RiskClassifier, InferenceFailure, render_report, ReportLanguage, RiskReport};
pub use models::{ApplicantRecord, BinaryAnswer, PredictionResult, RiskTier};
pub use services::{DefaultModel, LogisticModel, ModelError};
