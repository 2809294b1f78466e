// Core exports
pub mod classifier;
pub mod encoding;
pub mod form;
pub mod report;
pub mod tiers;

pub use classifier::{RiskClassifier, InferenceFailure};
pub use encoding::{encode_answer, feature_row, EncodingError, COLUMNS};
pub use form::{form_definition, FormDefinition, FormField, FieldKind};
pub use report::{render_report, format_percent, ReportLanguage, RiskReport, TierSummary, Verdict};
pub use tiers::{LOW_RISK_MAX_PERCENT, MEDIUM_RISK_MAX_PERCENT};
