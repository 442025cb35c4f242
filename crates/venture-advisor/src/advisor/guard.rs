use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::domain::{ProposalInput, VentureProfile, MAX_EXPERIENCE_YEARS, MAX_FUNDS};

/// Validation errors raised by the input guard.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("funds must be within 0..={max}, found {found}")]
    FundsOutOfRange { found: i64, max: u8 },
    #[error("experience must be within 0..={max} years, found {found}")]
    ExperienceOutOfRange { found: i64, max: u8 },
}

/// How the guard treats integers outside their documented domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputPolicy {
    #[default]
    Reject,
    Clamp,
}

impl InputPolicy {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::Clamp => "clamp",
        }
    }
}

impl fmt::Display for InputPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for InputPolicy {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "reject" | "strict" => Ok(Self::Reject),
            "clamp" => Ok(Self::Clamp),
            other => Err(format!("unknown input policy '{other}'")),
        }
    }
}

/// Guard responsible for producing `VentureProfile` instances.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputGuard {
    policy: InputPolicy,
}

impl InputGuard {
    pub fn new(policy: InputPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> InputPolicy {
        self.policy
    }

    pub fn admit(&self, input: &ProposalInput) -> Result<VentureProfile, InputError> {
        let funds = self
            .bound("funds", input.funds, MAX_FUNDS)
            .map_err(|found| InputError::FundsOutOfRange {
                found,
                max: MAX_FUNDS,
            })?;
        let experience = self
            .bound("experience", input.experience, MAX_EXPERIENCE_YEARS)
            .map_err(|found| InputError::ExperienceOutOfRange {
                found,
                max: MAX_EXPERIENCE_YEARS,
            })?;

        Ok(VentureProfile::new(
            funds,
            input.risk_tolerance,
            experience,
            input.market_demand,
        ))
    }

    fn bound(&self, field: &'static str, value: i64, max: u8) -> Result<u8, i64> {
        if let Ok(admitted) = u8::try_from(value) {
            if admitted <= max {
                return Ok(admitted);
            }
        }

        match self.policy {
            InputPolicy::Reject => Err(value),
            InputPolicy::Clamp => {
                let clamped = if value < 0 { 0 } else { max };
                warn!(field, value, clamped, "input outside domain, clamping");
                Ok(clamped)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::domain::Level;

    fn proposal(funds: i64, experience: i64) -> ProposalInput {
        ProposalInput {
            funds,
            risk_tolerance: Level::Medium,
            experience,
            market_demand: Level::High,
            idea: String::new(),
        }
    }

    #[test]
    fn admits_values_on_domain_edges() {
        let guard = InputGuard::default();
        let profile = guard
            .admit(&proposal(200, 10))
            .expect("upper edges admitted");
        assert_eq!(profile.funds(), 200);
        assert_eq!(profile.experience(), 10);

        let profile = guard.admit(&proposal(0, 0)).expect("lower edges admitted");
        assert_eq!(profile.funds(), 0);
        assert_eq!(profile.experience(), 0);
    }

    #[test]
    fn reject_policy_refuses_negative_funds() {
        let err = InputGuard::new(InputPolicy::Reject)
            .admit(&proposal(-5, 3))
            .unwrap_err();
        assert_eq!(
            err,
            InputError::FundsOutOfRange {
                found: -5,
                max: MAX_FUNDS
            }
        );
    }

    #[test]
    fn reject_policy_refuses_excess_experience() {
        let err = InputGuard::new(InputPolicy::Reject)
            .admit(&proposal(80, 14))
            .unwrap_err();
        assert!(matches!(
            err,
            InputError::ExperienceOutOfRange { found: 14, .. }
        ));
        assert!(err.to_string().contains("0..=10"));
    }

    #[test]
    fn clamp_policy_pulls_values_into_domain() {
        let guard = InputGuard::new(InputPolicy::Clamp);
        let profile = guard.admit(&proposal(-5, 14)).expect("clamped");
        assert_eq!(profile.funds(), 0);
        assert_eq!(profile.experience(), MAX_EXPERIENCE_YEARS);

        let profile = guard.admit(&proposal(9_999, -1)).expect("clamped");
        assert_eq!(profile.funds(), MAX_FUNDS);
        assert_eq!(profile.experience(), 0);
    }

    #[test]
    fn policy_parses_from_configuration_values() {
        assert_eq!("CLAMP".parse::<InputPolicy>(), Ok(InputPolicy::Clamp));
        assert_eq!("strict".parse::<InputPolicy>(), Ok(InputPolicy::Reject));
        assert!("lenient".parse::<InputPolicy>().is_err());
    }
}
