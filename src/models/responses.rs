use serde::{Deserialize, Serialize};
use crate::core::report::RiskReport;
use crate::models::domain::PredictionResult;

/// Response for the classify endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyResponse {
    #[serde(rename = "requestId")]
    pub request_id: String,
    pub prediction: PredictionResult,
    pub report: RiskReport,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
