use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Upper bound for starting capital, in currency units.
pub const MAX_FUNDS: u8 = 200;
/// Upper bound for relevant industry experience, in years.
pub const MAX_EXPERIENCE_YEARS: u8 = 10;

/// Three-step scale shared by risk tolerance and market demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    High,
    Medium,
    Low,
}

impl Level {
    pub const fn ordered() -> [Self; 3] {
        [Self::High, Self::Medium, Self::Low]
    }

    /// Numeric rank used by the scorer (High 3, Medium 2, Low 1).
    pub const fn rank(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown level '{0}': expected high, medium, or low")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "high" | "h" => Ok(Self::High),
            "medium" | "med" | "m" => Ok(Self::Medium),
            "low" | "l" => Ok(Self::Low),
            _ => Err(ParseLevelError(raw.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Proposal exactly as supplied by a caller, before range checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalInput {
    pub funds: i64,
    pub risk_tolerance: Level,
    pub experience: i64,
    pub market_demand: Level,
    #[serde(default)]
    pub idea: String,
}

/// Range-checked proposal. Only the input guard constructs these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VentureProfile {
    funds: u8,
    risk_tolerance: Level,
    experience: u8,
    market_demand: Level,
}

impl VentureProfile {
    pub(crate) fn new(
        funds: u8,
        risk_tolerance: Level,
        experience: u8,
        market_demand: Level,
    ) -> Self {
        debug_assert!(funds <= MAX_FUNDS);
        debug_assert!(experience <= MAX_EXPERIENCE_YEARS);
        Self {
            funds,
            risk_tolerance,
            experience,
            market_demand,
        }
    }

    pub fn funds(&self) -> u8 {
        self.funds
    }

    pub fn risk_tolerance(&self) -> Level {
        self.risk_tolerance
    }

    pub fn experience(&self) -> u8 {
        self.experience
    }

    pub fn market_demand(&self) -> Level {
        self.market_demand
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_levels_case_insensitively() {
        assert_eq!("HIGH".parse::<Level>(), Ok(Level::High));
        assert_eq!(" med ".parse::<Level>(), Ok(Level::Medium));
        assert_eq!("l".parse::<Level>(), Ok(Level::Low));
    }

    #[test]
    fn rejects_levels_outside_the_scale() {
        let err = "extreme".parse::<Level>().unwrap_err();
        assert_eq!(err, ParseLevelError("extreme".to_string()));
        assert!(err.to_string().contains("expected high, medium, or low"));
    }

    #[test]
    fn deserializes_snake_case_levels() {
        let input: ProposalInput = serde_json::from_str(
            r#"{"funds":80,"risk_tolerance":"high","experience":5,"market_demand":"med"}"#,
        )
        .expect("proposal parses");
        assert_eq!(input.risk_tolerance, Level::High);
        assert_eq!(input.market_demand, Level::Medium);
        assert!(input.idea.is_empty());
    }

    #[test]
    fn deserializes_capitalized_levels_like_the_cli() {
        let input: ProposalInput = serde_json::from_str(
            r#"{"funds":80,"risk_tolerance":"High","experience":5,"market_demand":"LOW"}"#,
        )
        .expect("proposal parses");
        assert_eq!(input.risk_tolerance, Level::High);
        assert_eq!(input.market_demand, Level::Low);
    }

    #[test]
    fn unknown_level_reports_the_accepted_values() {
        let err = serde_json::from_str::<ProposalInput>(
            r#"{"funds":80,"risk_tolerance":"extreme","experience":5,"market_demand":"high"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown level 'extreme'"));
    }
}
