use std::str::FromStr;
use thiserror::Error;
use crate::models::{ApplicantRecord, BinaryAnswer, FeatureRow};

/// Column names of the model input schema, in order
pub const COLUMNS: [&str; 8] = [
    "Age",
    "Income",
    "LoanAmount",
    "CreditScore",
    "MonthsEmployed",
    "EmploymentType",
    "HasDependents",
    "HasCoSigner",
];

/// Errors that can occur while encoding form answers
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodingError {
    #[error("Expected \"Yes\" or \"No\", got {0:?}")]
    InvalidAnswer(String),
}

impl FromStr for BinaryAnswer {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Yes" => Ok(BinaryAnswer::Yes),
            "No" => Ok(BinaryAnswer::No),
            other => Err(EncodingError::InvalidAnswer(other.to_string())),
        }
    }
}

/// Encode a Yes/No answer as the 0/1 flag the model expects
#[inline]
pub fn encode_answer(answer: BinaryAnswer) -> u8 {
    match answer {
        BinaryAnswer::Yes => 1,
        BinaryAnswer::No => 0,
    }
}

/// Build the single model input row for an applicant
///
/// Numeric fields pass through as numbers, the employment type stays a
/// category string and both Yes/No flags become 0/1.
pub fn feature_row(record: &ApplicantRecord) -> FeatureRow {
    let dependents = encode_answer(record.has_dependents.into());
    let co_signer = encode_answer(record.has_co_signer.into());

    FeatureRow::new()
        .with_number(COLUMNS[0], record.age as f64)
        .with_number(COLUMNS[1], record.income)
        .with_number(COLUMNS[2], record.loan_amount)
        .with_number(COLUMNS[3], record.credit_score)
        .with_number(COLUMNS[4], record.months_employed as f64)
        .with_category(COLUMNS[5], &record.employment_type)
        .with_number(COLUMNS[6], dependents as f64)
        .with_number(COLUMNS[7], co_signer as f64)
}
