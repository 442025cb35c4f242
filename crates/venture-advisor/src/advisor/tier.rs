use serde::{Deserialize, Serialize};

/// Coarse readiness bucket selecting a fixed advice block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceTier {
    High,
    Medium,
    Low,
}

impl AdviceTier {
    /// Inclusive lower bound of the high tier.
    pub const HIGH_THRESHOLD: f64 = 70.0;
    /// Inclusive lower bound of the medium tier.
    pub const MEDIUM_THRESHOLD: f64 = 40.0;

    pub fn from_score(score: f64) -> Self {
        if score >= Self::HIGH_THRESHOLD {
            Self::High
        } else if score >= Self::MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    pub const fn advice(self) -> [&'static str; 4] {
        match self {
            Self::High => [
                "Write a detailed business plan with a clear revenue model",
                "Build a core team that covers your own gaps",
                "Plan finances with six to twelve months of operating reserve",
                "Start with a small pilot to validate the business model",
            ],
            Self::Medium => [
                "Test the idea part-time or as a side project first",
                "Find partners to share risk and resource pressure",
                "Take industry training to strengthen professional skills",
                "Grow a network of potential customers and investors",
            ],
            Self::Low => [
                "Prioritise employment to build capital and experience",
                "Study the target industry closely to find real pain points",
                "Learn business fundamentals to prepare for a future venture",
                "Follow industry trends and wait for the right moment",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(AdviceTier::from_score(70.0), AdviceTier::High);
        assert_eq!(AdviceTier::from_score(40.0), AdviceTier::Medium);
    }

    #[test]
    fn scores_just_below_thresholds_drop_a_tier() {
        assert_eq!(AdviceTier::from_score(69.999), AdviceTier::Medium);
        assert_eq!(AdviceTier::from_score(39.999), AdviceTier::Low);
        assert_eq!(AdviceTier::from_score(0.0), AdviceTier::Low);
        assert_eq!(AdviceTier::from_score(100.0), AdviceTier::High);
    }

    #[test]
    fn every_tier_carries_distinct_advice() {
        let high = AdviceTier::High.advice();
        let medium = AdviceTier::Medium.advice();
        let low = AdviceTier::Low.advice();
        assert_ne!(high, medium);
        assert_ne!(medium, low);
        assert!(high.iter().all(|item| !item.is_empty()));
    }
}
