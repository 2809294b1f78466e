use serde::{Deserialize, Serialize};
use validator::Validate;

/// Employment categories the bundled model was trained on
pub const EMPLOYMENT_TYPES: [&str; 4] = ["Full-time", "Part-time", "Self-employed", "Unemployed"];

/// One loan applicant, already checked against the field domains
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ApplicantRecord {
    #[validate(range(min = 18, max = 100))]
    pub age: u8,
    #[validate(range(min = 0.0))]
    pub income: f64,
    #[validate(range(min = 0.0))]
    pub loan_amount: f64,
    #[validate(range(min = 300.0, max = 850.0))]
    pub credit_score: f64,
    pub months_employed: u32,
    #[validate(length(min = 1))]
    pub employment_type: String,
    pub has_dependents: bool,
    pub has_co_signer: bool,
}

/// Yes/No answer as entered on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryAnswer {
    Yes,
    No,
}

impl BinaryAnswer {
    pub fn is_yes(self) -> bool {
        matches!(self, BinaryAnswer::Yes)
    }
}

impl From<bool> for BinaryAnswer {
    fn from(value: bool) -> Self {
        if value { BinaryAnswer::Yes } else { BinaryAnswer::No }
    }
}

/// Discrete risk tier derived from the default probability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

/// Outcome of one classification
///
/// `predicted_class` and `probability_percent` come from two separate model
/// calls and are reported as-is, even when they disagree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    #[serde(rename = "predictedClass")]
    pub predicted_class: u8,
    #[serde(rename = "probabilityPercent")]
    pub probability_percent: f64,
    #[serde(rename = "riskTier")]
    pub risk_tier: RiskTier,
}

impl PredictionResult {
    pub fn predicts_default(&self) -> bool {
        self.predicted_class == 1
    }
}

/// A single value in a model input row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Number(f64),
    Category(String),
}

/// One model input row: named columns in schema order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureRow {
    columns: Vec<(String, FeatureValue)>,
}

impl FeatureRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: FeatureValue) {
        self.columns.push((name.into(), value));
    }

    pub fn with_number(mut self, name: &str, value: f64) -> Self {
        self.push(name, FeatureValue::Number(value));
        self
    }

    pub fn with_category(mut self, name: &str, value: &str) -> Self {
        self.push(name, FeatureValue::Category(value.to_string()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&FeatureValue> {
        self.columns
            .iter()
            .find(|(column, _)| column == name)
            .map(|(_, value)| value)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_record_within_domains() {
        assert!(create_test_record().validate().is_ok());
    }

    #[test]
    fn test_record_rejects_underage() {
        let mut record = create_test_record();
        record.age = 17;
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_record_rejects_credit_score_out_of_range() {
        let mut record = create_test_record();
        record.credit_score = 851.0;
        assert!(record.validate().is_err());

        record.credit_score = 299.5;
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_record_rejects_negative_amounts() {
        let mut record = create_test_record();
        record.loan_amount = -1.0;
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_feature_row_lookup() {
        let row = FeatureRow::new()
            .with_number("Age", 30.0)
            .with_category("EmploymentType", "Part-time");

        assert_eq!(row.len(), 2);
        assert_eq!(row.get("Age"), Some(&FeatureValue::Number(30.0)));
        assert_eq!(
            row.get("EmploymentType"),
            Some(&FeatureValue::Category("Part-time".to_string()))
        );
        assert!(row.get("Income").is_none());
    }

    #[test]
    fn test_prediction_serializes_camel_case() {
        let result = PredictionResult {
            predicted_class: 1,
            probability_percent: 72.0,
            risk_tier: RiskTier::High,
        };
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["predictedClass"], 1);
        assert_eq!(json["riskTier"], "high");
    }
}
