use crate::models::RiskTier;

/// Highest probability percent still rated low risk
pub const LOW_RISK_MAX_PERCENT: f64 = 30.0;

/// Highest probability percent still rated medium risk
pub const MEDIUM_RISK_MAX_PERCENT: f64 = 60.0;

impl RiskTier {
    /// Map a default probability percent (0-100) to a risk tier
    ///
    /// Boundaries belong to the lower tier: 30.00 is Low, 60.00 is Medium.
    #[inline]
    pub fn from_percent(probability_percent: f64) -> Self {
        if probability_percent <= LOW_RISK_MAX_PERCENT {
            RiskTier::Low
        } else if probability_percent <= MEDIUM_RISK_MAX_PERCENT {
            RiskTier::Medium
        } else {
            RiskTier::High
        }
    }
}
