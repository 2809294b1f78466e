use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;
use crate::models::{FeatureRow, FeatureValue};

/// Errors that can occur when loading or running a model
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Failed to read model artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid model artifact: {0}")]
    InvalidArtifact(String),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Unexpected value for column {0}")]
    UnexpectedValue(String),

    #[error("Found unknown category {category:?} in column {column}")]
    UnknownCategory { column: String, category: String },

    #[error("Non-finite value in column {0}")]
    NonFinite(String),
}

/// Description of a loaded model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    pub version: String,
    pub columns: Vec<String>,
    pub threshold: f64,
}

/// Pre-trained default classifier
///
/// Both methods take a batch of rows and answer one entry per row.
/// Implementations are read-only after construction and shared across workers.
pub trait DefaultModel: Send + Sync {
    /// Predicted class per row (1 = default)
    fn predict(&self, rows: &[FeatureRow]) -> Result<Vec<u8>, ModelError>;

    /// `[P(no default), P(default)]` per row
    fn predict_proba(&self, rows: &[FeatureRow]) -> Result<Vec<[f64; 2]>, ModelError>;

    fn info(&self) -> ModelInfo;
}

/// Standardized numeric input: `weight * (x - mean) / scale`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumericFeature {
    pub name: String,
    pub mean: f64,
    pub scale: f64,
    pub weight: f64,
}

/// One-hot encoded categorical input, one weight per known category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoricalFeature {
    pub name: String,
    pub weights: BTreeMap<String, f64>,
}

/// Logistic regression pipeline serialized as JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticModel {
    pub name: String,
    pub version: String,
    pub numeric: Vec<NumericFeature>,
    pub categorical: Vec<CategoricalFeature>,
    pub intercept: f64,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_threshold() -> f64 { 0.5 }

impl LogisticModel {
    /// Load and check a model artifact from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let model = Self::from_json(&raw)?;

        tracing::debug!(
            "Loaded model {} v{} from {}",
            model.name,
            model.version,
            path.as_ref().display()
        );

        Ok(model)
    }

    /// Parse and check a model artifact
    pub fn from_json(raw: &str) -> Result<Self, ModelError> {
        let model: LogisticModel = serde_json::from_str(raw)?;
        model.check()?;
        Ok(model)
    }

    fn check(&self) -> Result<(), ModelError> {
        if self.numeric.is_empty() && self.categorical.is_empty() {
            return Err(ModelError::InvalidArtifact("no input features".to_string()));
        }

        if !self.intercept.is_finite() {
            return Err(ModelError::InvalidArtifact("intercept is not finite".to_string()));
        }

        if !(self.threshold > 0.0 && self.threshold < 1.0) {
            return Err(ModelError::InvalidArtifact(format!(
                "threshold {} outside (0, 1)",
                self.threshold
            )));
        }

        for feature in &self.numeric {
            if !(feature.mean.is_finite() && feature.weight.is_finite() && feature.scale.is_finite()) {
                return Err(ModelError::InvalidArtifact(format!(
                    "non-finite parameters for {}",
                    feature.name
                )));
            }
            if feature.scale == 0.0 {
                return Err(ModelError::InvalidArtifact(format!("zero scale for {}", feature.name)));
            }
        }

        for feature in &self.categorical {
            if feature.weights.is_empty() {
                return Err(ModelError::InvalidArtifact(format!("no categories for {}", feature.name)));
            }
            if feature.weights.values().any(|w| !w.is_finite()) {
                return Err(ModelError::InvalidArtifact(format!(
                    "non-finite weight for {}",
                    feature.name
                )));
            }
        }

        Ok(())
    }

    /// Categories known for a categorical column
    pub fn categories(&self, column: &str) -> Option<Vec<&str>> {
        self.categorical
            .iter()
            .find(|f| f.name == column)
            .map(|f| f.weights.keys().map(String::as_str).collect())
    }

    fn decision_value(&self, row: &FeatureRow) -> Result<f64, ModelError> {
        let mut z = self.intercept;

        for feature in &self.numeric {
            let x = match row.get(&feature.name) {
                Some(FeatureValue::Number(x)) => *x,
                Some(FeatureValue::Category(_)) => {
                    return Err(ModelError::UnexpectedValue(feature.name.clone()))
                }
                None => return Err(ModelError::MissingColumn(feature.name.clone())),
            };
            if !x.is_finite() {
                return Err(ModelError::NonFinite(feature.name.clone()));
            }
            z += feature.weight * (x - feature.mean) / feature.scale;
        }

        for feature in &self.categorical {
            let category = match row.get(&feature.name) {
                Some(FeatureValue::Category(c)) => c,
                Some(FeatureValue::Number(_)) => {
                    return Err(ModelError::UnexpectedValue(feature.name.clone()))
                }
                None => return Err(ModelError::MissingColumn(feature.name.clone())),
            };
            let weight = feature.weights.get(category).ok_or_else(|| ModelError::UnknownCategory {
                column: feature.name.clone(),
                category: category.clone(),
            })?;
            z += weight;
        }

        if !z.is_finite() {
            return Err(ModelError::NonFinite("decision value".to_string()));
        }

        Ok(z)
    }

    fn positive_probability(&self, row: &FeatureRow) -> Result<f64, ModelError> {
        let z = self.decision_value(row)?;
        Ok(1.0 / (1.0 + (-z).exp()))
    }
}

impl DefaultModel for LogisticModel {
    fn predict(&self, rows: &[FeatureRow]) -> Result<Vec<u8>, ModelError> {
        rows.iter()
            .map(|row| {
                let p = self.positive_probability(row)?;
                // An exact tie stays class 0
                Ok(if p > self.threshold { 1 } else { 0 })
            })
            .collect()
    }

    fn predict_proba(&self, rows: &[FeatureRow]) -> Result<Vec<[f64; 2]>, ModelError> {
        rows.iter()
            .map(|row| {
                let p = self.positive_probability(row)?;
                Ok([1.0 - p, p])
            })
            .collect()
    }

    fn info(&self) -> ModelInfo {
        let columns = self
            .numeric
            .iter()
            .map(|f| f.name.clone())
            .chain(self.categorical.iter().map(|f| f.name.clone()))
            .collect();

        ModelInfo {
            name: self.name.clone(),
            version: self.version.clone(),
            columns,
            threshold: self.threshold,
        }
    }
}
