use std::sync::Arc;
use thiserror::Error;
use validator::Validate;
use crate::core::encoding::feature_row;
use crate::models::{ApplicantRecord, PredictionResult, RiskTier, EMPLOYMENT_TYPES};
use crate::services::model::{DefaultModel, ModelError, ModelInfo};

/// The model could not produce a result for a record
///
/// This is the only failure `classify` reports; the message is meant to be
/// shown to the user as-is.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Inference failed: {message}")]
pub struct InferenceFailure {
    pub message: String,
}

impl InferenceFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl From<ModelError> for InferenceFailure {
    fn from(err: ModelError) -> Self {
        Self::new(err.to_string())
    }
}

/// Adapter between applicant records and the pre-trained default model
///
/// Holds the model read-only; one instance is built at startup and shared by
/// every request.
#[derive(Clone)]
pub struct RiskClassifier {
    model: Arc<dyn DefaultModel>,
    employment_types: Vec<String>,
}

impl RiskClassifier {
    pub fn new(model: Arc<dyn DefaultModel>, employment_types: Vec<String>) -> Self {
        Self { model, employment_types }
    }

    /// Classifier accepting the four standard employment types
    pub fn with_default_categories(model: Arc<dyn DefaultModel>) -> Self {
        Self::new(model, EMPLOYMENT_TYPES.iter().map(|s| s.to_string()).collect())
    }

    pub fn model_info(&self) -> ModelInfo {
        self.model.info()
    }

    pub fn employment_types(&self) -> &[String] {
        &self.employment_types
    }

    /// Classify one applicant
    ///
    /// Probability and class label come from two independent model calls and
    /// are not reconciled with each other.
    pub fn classify(&self, record: &ApplicantRecord) -> Result<PredictionResult, InferenceFailure> {
        self.check_record(record)?;

        let rows = [feature_row(record)];

        let probabilities = self.model.predict_proba(&rows)?;
        let default_probability = match probabilities.as_slice() {
            [[_, positive]] => *positive,
            other => {
                return Err(InferenceFailure::new(format!(
                    "Model returned {} probability rows for 1 input row",
                    other.len()
                )))
            }
        };
        if !(0.0..=1.0).contains(&default_probability) {
            return Err(InferenceFailure::new(format!(
                "Model returned invalid probability {}",
                default_probability
            )));
        }

        let labels = self.model.predict(&rows)?;
        let predicted_class = match labels.as_slice() {
            [label @ (0 | 1)] => *label,
            [label] => {
                return Err(InferenceFailure::new(format!("Model returned invalid class {}", label)))
            }
            other => {
                return Err(InferenceFailure::new(format!(
                    "Model returned {} labels for 1 input row",
                    other.len()
                )))
            }
        };

        let probability_percent = default_probability * 100.0;
        let risk_tier = RiskTier::from_percent(probability_percent);

        tracing::debug!(
            "Classified applicant: class={}, probability={:.2}%, tier={:?}",
            predicted_class,
            probability_percent,
            risk_tier
        );

        Ok(PredictionResult {
            predicted_class,
            probability_percent,
            risk_tier,
        })
    }

    fn check_record(&self, record: &ApplicantRecord) -> Result<(), InferenceFailure> {
        if let Err(errors) = record.validate() {
            return Err(InferenceFailure::new(format!("Invalid applicant record: {}", errors)));
        }

        if !(record.income.is_finite() && record.loan_amount.is_finite() && record.credit_score.is_finite()) {
            return Err(InferenceFailure::new("Invalid applicant record: non-finite amount"));
        }

        if !self.employment_types.iter().any(|t| *t == record.employment_type) {
            return Err(InferenceFailure::new(format!(
                "Unknown employment type {:?}, expected one of: {}",
                record.employment_type,
                self.employment_types.join(", ")
            )));
        }

        Ok(())
    }
}

impl std::fmt::Debug for RiskClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RiskClassifier")
            .field("model", &self.model.info().name)
            .field("employment_types", &self.employment_types)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FeatureRow;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Model answering fixed values and counting calls
    struct FixedModel {
        probability: f64,
        class: u8,
        calls: AtomicUsize,
    }

    impl FixedModel {
        fn new(probability: f64, class: u8) -> Self {
            Self { probability, class, calls: AtomicUsize::new(0) }
        }
    }

    impl DefaultModel for FixedModel {
        fn predict(&self, rows: &[FeatureRow]) -> Result<Vec<u8>, ModelError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(rows.iter().map(|_| self.class).collect())
        }

        fn predict_proba(&self, rows: &[FeatureRow]) -> Result<Vec<[f64; 2]>, ModelError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(rows.iter().map(|_| [1.0 - self.probability, self.probability]).collect())
        }

        fn info(&self) -> ModelInfo {
            ModelInfo {
                name: "fixed".to_string(),
                version: "0".to_string(),
                columns: vec![],
                threshold: 0.5,
            }
        }
    }

    struct FailingModel;

    impl DefaultModel for FailingModel {
        fn predict(&self, _rows: &[FeatureRow]) -> Result<Vec<u8>, ModelError> {
            Err(ModelError::MissingColumn("Age".to_string()))
        }

        fn predict_proba(&self, _rows: &[FeatureRow]) -> Result<Vec<[f64; 2]>, ModelError> {
            Err(ModelError::MissingColumn("Age".to_string()))
        }

        fn info(&self) -> ModelInfo {
            ModelInfo {
                name: "failing".to_string(),
                version: "0".to_string(),
                columns: vec![],
                threshold: 0.5,
            }
        }
    }

    fn create_test_record() -> ApplicantRecord {
        ApplicantRecord {
            age: 30,
            income: 5_000_000.0,
            loan_amount: 10_000_000.0,
            credit_score: 650.0,
            months_employed: 24,
            employment_type: "Full-time".to_string(),
            has_dependents: false,
            has_co_signer: false,
        }
    }

    #[test]
    fn test_classify_low_risk() {
        let classifier = RiskClassifier::with_default_categories(Arc::new(FixedModel::new(0.25, 0)));
        let result = classifier.classify(&create_test_record()).unwrap();

        assert_eq!(result.predicted_class, 0);
        assert!((result.probability_percent - 25.0).abs() < 1e-9);
        assert_eq!(result.risk_tier, RiskTier::Low);
    }

    #[test]
    fn test_classify_high_risk() {
        let classifier = RiskClassifier::with_default_categories(Arc::new(FixedModel::new(0.72, 1)));
        let result = classifier.classify(&create_test_record()).unwrap();

        assert_eq!(result.predicted_class, 1);
        assert!((result.probability_percent - 72.0).abs() < 1e-9);
        assert_eq!(result.risk_tier, RiskTier::High);
    }

    #[test]
    fn test_disagreeing_outputs_kept() {
        let classifier = RiskClassifier::with_default_categories(Arc::new(FixedModel::new(0.75, 0)));
        let result = classifier.classify(&create_test_record()).unwrap();

        assert_eq!(result.predicted_class, 0);
        assert_eq!(result.risk_tier, RiskTier::High);
    }

    #[test]
    fn test_model_failure_is_inference_failure() {
        let classifier = RiskClassifier::with_default_categories(Arc::new(FailingModel));
        let err = classifier.classify(&create_test_record()).unwrap_err();

        assert_eq!(err.message, "Missing column: Age");
    }

    #[test]
    fn test_unknown_category_never_reaches_model() {
        let model = Arc::new(FixedModel::new(0.1, 0));
        let classifier = RiskClassifier::with_default_categories(model.clone());

        let mut record = create_test_record();
        record.employment_type = "Freelance".to_string();

        assert!(classifier.classify(&record).is_err());
        assert_eq!(model.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_out_of_domain_record_never_reaches_model() {
        let model = Arc::new(FixedModel::new(0.1, 0));
        let classifier = RiskClassifier::with_default_categories(model.clone());

        let mut record = create_test_record();
        record.age = 12;

        assert!(classifier.classify(&record).is_err());
        assert_eq!(model.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_configured_categories() {
        let classifier = RiskClassifier::new(
            Arc::new(FixedModel::new(0.1, 0)),
            vec!["Contract".to_string()],
        );

        let mut record = create_test_record();
        assert!(classifier.classify(&record).is_err());

        record.employment_type = "Contract".to_string();
        assert!(classifier.classify(&record).is_ok());
    }

    #[test]
    fn test_invalid_probability_rejected() {
        let classifier = RiskClassifier::with_default_categories(Arc::new(FixedModel::new(1.5, 1)));
        assert!(classifier.classify(&create_test_record()).is_err());

        let classifier = RiskClassifier::with_default_categories(Arc::new(FixedModel::new(f64::NAN, 1)));
        assert!(classifier.classify(&create_test_record()).is_err());
    }

    #[test]
    fn test_invalid_label_rejected() {
        let classifier = RiskClassifier::with_default_categories(Arc::new(FixedModel::new(0.5, 2)));
        let err = classifier.classify(&create_test_record()).unwrap_err();

        assert_eq!(err.message, "Model returned invalid class 2");
    }
}
