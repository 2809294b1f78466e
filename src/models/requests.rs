use serde::{Deserialize, Serialize};
use crate::models::domain::{ApplicantRecord, BinaryAnswer};

/// Request to classify one applicant
///
/// Field names follow the model's column names; camelCase aliases are accepted.
/// Domain checks run on the converted `ApplicantRecord`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    #[serde(rename = "Age", alias = "age")]
    pub age: u8,
    #[serde(rename = "Income", alias = "income")]
    pub income: f64,
    #[serde(rename = "LoanAmount", alias = "loanAmount")]
    pub loan_amount: f64,
    #[serde(rename = "CreditScore", alias = "creditScore")]
    pub credit_score: f64,
    #[serde(rename = "MonthsEmployed", alias = "monthsEmployed")]
    pub months_employed: u32,
    #[serde(rename = "EmploymentType", alias = "employmentType")]
    pub employment_type: String,
    #[serde(rename = "HasDependents", alias = "hasDependents")]
    pub has_dependents: BinaryAnswer,
    #[serde(rename = "HasCoSigner", alias = "hasCoSigner")]
    pub has_co_signer: BinaryAnswer,
}

impl From<ClassifyRequest> for ApplicantRecord {
    fn from(req: ClassifyRequest) -> Self {
        ApplicantRecord {
            age: req.age,
            income: req.income,
            loan_amount: req.loan_amount,
            credit_score: req.credit_score,
            months_employed: req.months_employed,
            employment_type: req.employment_type,
            has_dependents: req.has_dependents.is_yes(),
            has_co_signer: req.has_co_signer.is_yes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn request_json() -> serde_json::Value {
        serde_json::json!({
            "Age": 30,
            "Income": 5000000.0,
            "LoanAmount": 10000000.0,
            "CreditScore": 650.0,
            "MonthsEmployed": 24,
            "EmploymentType": "Full-time",
            "HasDependents": "No",
            "HasCoSigner": "Yes"
        })
    }

    #[test]
    fn test_request_parses_column_names() {
        let req: ClassifyRequest = serde_json::from_value(request_json()).unwrap();
        let record = ApplicantRecord::from(req);
        assert!(record.validate().is_ok());
        assert!(!record.has_dependents);
        assert!(record.has_co_signer);
        assert_eq!(record.employment_type, "Full-time");
    }

    #[test]
    fn test_request_accepts_camel_case_aliases() {
        let body = serde_json::json!({
            "age": 45,
            "income": 1200.0,
            "loanAmount": 300.0,
            "creditScore": 700,
            "monthsEmployed": 3,
            "employmentType": "Unemployed",
            "hasDependents": "Yes",
            "hasCoSigner": "No"
        });
        let req: ClassifyRequest = serde_json::from_value(body).unwrap();
        assert_eq!(req.age, 45);
        assert_eq!(req.has_dependents, BinaryAnswer::Yes);
    }

    #[test]
    fn test_request_rejects_third_answer() {
        let mut body = request_json();
        body["HasDependents"] = serde_json::json!("Maybe");
        assert!(serde_json::from_value::<ClassifyRequest>(body).is_err());
    }

    #[test]
    fn test_request_rejects_missing_field() {
        let mut body = request_json();
        body.as_object_mut().unwrap().remove("CreditScore");
        assert!(serde_json::from_value::<ClassifyRequest>(body).is_err());
    }

    #[test]
    fn test_converted_record_checks_ranges() {
        let mut body = request_json();
        body["CreditScore"] = serde_json::json!(900);
        let req: ClassifyRequest = serde_json::from_value(body).unwrap();
        assert!(ApplicantRecord::from(req).validate().is_err());

        let mut body = request_json();
        body["Age"] = serde_json::json!(101);
        let req: ClassifyRequest = serde_json::from_value(body).unwrap();
        assert!(ApplicantRecord::from(req).validate().is_err());

        let mut body = request_json();
        body["EmploymentType"] = serde_json::json!("");
        let req: ClassifyRequest = serde_json::from_value(body).unwrap();
        assert!(ApplicantRecord::from(req).validate().is_err());
    }
}
