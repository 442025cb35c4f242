use serde::{Deserialize, Serialize};

use super::domain::VentureProfile;

/// Funds at or above this amount earn the full capital factor.
const FUNDS_SATURATION: f64 = 100.0;
/// Years of experience at or above this earn the full experience factor.
const EXPERIENCE_SATURATION: f64 = 5.0;
const LEVEL_SCALE: f64 = 3.0;

/// Inputs that contribute to the readiness score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    Funds,
    RiskTolerance,
    Experience,
    MarketDemand,
}

impl ScoreFactor {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Funds,
            Self::RiskTolerance,
            Self::Experience,
            Self::MarketDemand,
        ]
    }

    pub const fn weight(self) -> f64 {
        match self {
            Self::Funds => 0.30,
            Self::RiskTolerance => 0.20,
            Self::Experience => 0.20,
            Self::MarketDemand => 0.30,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Funds => "Funds",
            Self::RiskTolerance => "Risk tolerance",
            Self::Experience => "Industry experience",
            Self::MarketDemand => "Market demand",
        }
    }

    /// Factor value normalized into [0, 1].
    fn normalize(self, profile: &VentureProfile) -> f64 {
        match self {
            Self::Funds => (f64::from(profile.funds()) / FUNDS_SATURATION).min(1.0),
            Self::RiskTolerance => f64::from(profile.risk_tolerance().rank()) / LEVEL_SCALE,
            Self::Experience => {
                (f64::from(profile.experience()) / EXPERIENCE_SATURATION).min(1.0)
            }
            Self::MarketDemand => f64::from(profile.market_demand().rank()) / LEVEL_SCALE,
        }
    }
}

/// Discrete contribution to the score, kept for transparent breakdowns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub weight: f64,
    pub normalized: f64,
    pub points: f64,
    pub notes: String,
}

/// Scores a profile on the 0-100 scale and reports each factor's share.
pub(crate) fn score_profile(profile: &VentureProfile) -> (Vec<ScoreComponent>, f64) {
    let mut components = Vec::with_capacity(ScoreFactor::ordered().len());
    let mut weighted = 0.0;

    for factor in ScoreFactor::ordered() {
        let normalized = factor.normalize(profile);
        weighted += normalized * factor.weight();
        components.push(ScoreComponent {
            factor,
            weight: factor.weight(),
            normalized,
            points: normalized * factor.weight() * 100.0,
            notes: component_notes(factor, profile),
        });
    }

    (components, weighted * 100.0)
}

fn component_notes(factor: ScoreFactor, profile: &VentureProfile) -> String {
    match factor {
        ScoreFactor::Funds => format!(
            "{} units against saturation at {FUNDS_SATURATION:.0}",
            profile.funds()
        ),
        ScoreFactor::RiskTolerance => {
            format!("{} tolerance for risk", profile.risk_tolerance())
        }
        ScoreFactor::Experience => format!(
            "{} year(s) against saturation at {EXPERIENCE_SATURATION:.0}",
            profile.experience()
        ),
        ScoreFactor::MarketDemand => format!("{} market demand", profile.market_demand()),
    }
}
