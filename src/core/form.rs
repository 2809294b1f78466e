use serde::{Deserialize, Serialize};
use crate::core::report::ReportLanguage;

/// Input widget kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Integer,
    Number,
    Choice,
}

/// One form input, keyed by the model column it fills
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    pub column: String,
    pub label: String,
    pub kind: FieldKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    pub default: serde_json::Value,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub options: Vec<String>,
}

/// Data a front end needs to render the applicant form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormDefinition {
    pub title: String,
    pub intro: String,
    pub instructions: Vec<String>,
    #[serde(rename = "submitLabel")]
    pub submit_label: String,
    pub fields: Vec<FormField>,
    /// Footer line shown under the form
    pub caption: String,
}

fn numeric(column: &str, label: &str, kind: FieldKind, min: f64, max: Option<f64>, default: f64) -> FormField {
    let default = match kind {
        FieldKind::Integer => serde_json::json!(default as i64),
        _ => serde_json::json!(default),
    };

    FormField {
        column: column.to_string(),
        label: label.to_string(),
        kind,
        min: Some(min),
        max,
        default,
        options: vec![],
    }
}

fn choice(column: &str, label: &str, options: &[String], default: &str) -> FormField {
    FormField {
        column: column.to_string(),
        label: label.to_string(),
        kind: FieldKind::Choice,
        min: None,
        max: None,
        default: serde_json::json!(default),
        options: options.to_vec(),
    }
}

/// Form definition with the given employment categories as choices
pub fn form_definition(language: ReportLanguage, employment_types: &[String]) -> FormDefinition {
    let answers = vec!["Yes".to_string(), "No".to_string()];
    let default_employment = employment_types.first().map(String::as_str).unwrap_or("Full-time");

    let (title, intro, instructions, submit, labels, caption) = match language {
        ReportLanguage::English => (
            "💳 Loan Default Risk Prediction",
            "Estimates the risk that an applicant defaults, based on the data they provide.",
            [
                "Fill in the data as it actually is",
                "Click Predict Risk",
                "The result appears below",
            ],
            "🔍 Predict Risk",
            [
                "Age (years)",
                "Monthly income",
                "Loan amount",
                "Credit score",
                "Months employed",
                "Employment type",
                "Has dependents?",
                "Has a co-signer?",
            ],
            "© Loan Default Risk Prediction | Machine Learning",
        ),
        ReportLanguage::Indonesian => (
            "💳 Prediksi Risiko Gagal Bayar Kredit",
            "Aplikasi ini membantu memprediksi risiko gagal bayar berdasarkan data yang diisi oleh calon peminjam.",
            [
                "Isi data sesuai kondisi sebenarnya",
                "Klik Prediksi Risiko",
                "Hasil akan muncul di bawah",
            ],
            "🔍 Prediksi Risiko",
            [
                "Umur (tahun)",
                "Pendapatan Bulanan (Rp)",
                "Jumlah Pinjaman (Rp)",
                "Skor Kredit",
                "Lama Bekerja (bulan)",
                "Jenis Pekerjaan",
                "Memiliki Tanggungan?",
                "Memiliki Penjamin?",
            ],
            "© Aplikasi Prediksi Kredit | Machine Learning + Streamlit",
        ),
    };

    let fields = vec![
        numeric("Age", labels[0], FieldKind::Integer, 18.0, Some(100.0), 30.0),
        numeric("Income", labels[1], FieldKind::Number, 0.0, None, 5_000_000.0),
        numeric("LoanAmount", labels[2], FieldKind::Number, 0.0, None, 10_000_000.0),
        numeric("CreditScore", labels[3], FieldKind::Number, 300.0, Some(850.0), 650.0),
        numeric("MonthsEmployed", labels[4], FieldKind::Integer, 0.0, None, 24.0),
        choice("EmploymentType", labels[5], employment_types, default_employment),
        choice("HasDependents", labels[6], &answers, "Yes"),
        choice("HasCoSigner", labels[7], &answers, "Yes"),
    ];

    FormDefinition {
        title: title.to_string(),
        intro: intro.to_string(),
        instructions: instructions.iter().map(|s| s.to_string()).collect(),
        submit_label: submit.to_string(),
        fields,
        caption: caption.to_string(),
    }
}
