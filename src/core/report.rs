use serde::{Deserialize, Serialize};
use crate::models::{PredictionResult, RiskTier};

/// Language of user-facing text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportLanguage {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "id")]
    Indonesian,
}

/// Tier block shown under the percentage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierSummary {
    pub tier: RiskTier,
    pub label: String,
    pub description: String,
}

/// Fixed narrative chosen by the predicted class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    #[serde(rename = "atRisk")]
    pub at_risk: bool,
    pub title: String,
    pub summary: String,
    pub points: Vec<String>,
}

/// Everything the result view displays for one classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    #[serde(rename = "metricLabel")]
    pub metric_label: String,
    #[serde(rename = "probabilityDisplay")]
    pub probability_display: String,
    pub tier: TierSummary,
    pub verdict: Verdict,
}

/// Format a percentage with two decimals and a `%` suffix
#[inline]
pub fn format_percent(probability_percent: f64) -> String {
    format!("{:.2}%", probability_percent)
}

/// Build the display payload for a classification
pub fn render_report(result: &PredictionResult, language: ReportLanguage) -> RiskReport {
    let probability_display = format_percent(result.probability_percent);

    let metric_label = match language {
        ReportLanguage::English => "Default risk percentage",
        ReportLanguage::Indonesian => "Persentase Risiko Gagal Bayar",
    };

    RiskReport {
        metric_label: metric_label.to_string(),
        tier: tier_summary(result.risk_tier, language),
        verdict: verdict(result.predicts_default(), &probability_display, language),
        probability_display,
    }
}

/// Label and one-line description for a tier
pub fn tier_summary(tier: RiskTier, language: ReportLanguage) -> TierSummary {
    let (label, description) = match (language, tier) {
        (ReportLanguage::English, RiskTier::Low) => ("🟢 Low", "Default risk is low."),
        (ReportLanguage::English, RiskTier::Medium) => ("🟠 Medium", "Default risk is moderate."),
        (ReportLanguage::English, RiskTier::High) => ("🔴 High", "Default risk is high."),
        (ReportLanguage::Indonesian, RiskTier::Low) => (
            "🟢 Rendah",
            "Risiko gagal bayar tergolong rendah.",
        ),
        (ReportLanguage::Indonesian, RiskTier::Medium) => (
            "🟠 Sedang",
            "Risiko gagal bayar tergolong sedang.",
        ),
        (ReportLanguage::Indonesian, RiskTier::High) => (
            "🔴 Tinggi",
            "Risiko gagal bayar tergolong tinggi.",
        ),
    };

    TierSummary {
        tier,
        label: label.to_string(),
        description: description.to_string(),
    }
}

fn verdict(at_risk: bool, probability_display: &str, language: ReportLanguage) -> Verdict {
    let (title, summary, points): (&str, String, [&str; 3]) = match (language, at_risk) {
        (ReportLanguage::English, true) => (
            "⚠️ AT RISK OF DEFAULT",
            format!("The model estimates a default risk of {}.", probability_display),
            [
                "Low credit score",
                "Relatively large loan amount",
                "Unstable income or short employment history",
            ],
        ),
        (ReportLanguage::English, false) => (
            "✅ NOT AT RISK OF DEFAULT",
            format!("The model estimates a default risk of {}.", probability_display),
            [
                "Adequate repayment capacity",
                "Relatively safe credit history",
                "More stable financial situation",
            ],
        ),
        (ReportLanguage::Indonesian, true) => (
            "⚠️ BERISIKO GAGAL BAYAR",
            format!("Model memprediksi risiko gagal bayar sebesar {}.", probability_display),
            [
                "Skor kredit yang rendah",
                "Jumlah pinjaman relatif besar",
                "Pendapatan atau lama bekerja yang kurang stabil",
            ],
        ),
        (ReportLanguage::Indonesian, false) => (
            "✅ TIDAK BERISIKO GAGAL BAYAR",
            format!("Model memprediksi risiko gagal bayar sebesar {}.", probability_display),
            [
                "Kemampuan bayar yang cukup baik",
                "Riwayat kredit yang relatif aman",
                "Kondisi keuangan yang lebih stabil",
            ],
        ),
    };

    Verdict {
        at_risk,
        title: title.to_string(),
        summary,
        points: points.iter().map(|p| p.to_string()).collect(),
    }
}
