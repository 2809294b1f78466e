use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{form_definition, render_report, ReportLanguage, RiskClassifier};
use crate::models::{ApplicantRecord, ClassifyRequest, ClassifyResponse, ErrorResponse, HealthResponse};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<RiskClassifier>,
    pub language: ReportLanguage,
}

/// Configure all risk-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/model", web::get().to(model_info))
        .route("/form", web::get().to(form))
        .route("/risk/classify", web::post().to(classify));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Loaded model description
async fn model_info(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.classifier.model_info())
}

/// Applicant form definition
async fn form(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(form_definition(state.language, state.classifier.employment_types()))
}

/// Classify endpoint
///
/// POST /api/v1/risk/classify
///
/// Request body:
/// ```json
/// {
///   "Age": 30,
///   "Income": 5000000,
///   "LoanAmount": 10000000,
///   "CreditScore": 650,
///   "MonthsEmployed": 24,
///   "EmploymentType": "Full-time",
///   "HasDependents": "No",
///   "HasCoSigner": "No"
/// }
/// ```
async fn classify(
    state: web::Data<AppState>,
    req: web::Json<ClassifyRequest>,
) -> impl Responder {
    let record = ApplicantRecord::from(req.into_inner());

    if let Err(errors) = record.validate() {
        tracing::info!("Validation failed for classify request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let prediction = match state.classifier.classify(&record) {
        Ok(prediction) => prediction,
        Err(e) => {
            tracing::warn!("Inference failed: {}", e.message);
            return HttpResponse::UnprocessableEntity().json(ErrorResponse {
                error: "Inference failed".to_string(),
                message: e.message,
                status_code: 422,
            });
        }
    };

    let report = render_report(&prediction, state.language);

    tracing::info!(
        "Classified applicant: {} ({:?}), predicted class {}",
        report.probability_display,
        prediction.risk_tier,
        prediction.predicted_class
    );

    HttpResponse::Ok().json(ClassifyResponse {
        request_id: uuid::Uuid::new_v4().to_string(),
        prediction,
        report,
    })
}
