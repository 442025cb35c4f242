use serde::{Deserialize, Serialize};

use super::domain::{Level, VentureProfile};

/// Minimum starting capital for the funds gate to pass (inclusive).
pub const MIN_FUNDS: u8 = 50;
/// Minimum years of experience for the experience gate to pass (inclusive).
pub const MIN_EXPERIENCE_YEARS: u8 = 2;

pub(crate) const START_STEP: &str = "Begin venture assessment";

/// One level of the decision cascade, listed in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gate {
    Funds,
    RiskTolerance,
    Experience,
    MarketDemand,
}

impl Gate {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Funds,
            Self::RiskTolerance,
            Self::Experience,
            Self::MarketDemand,
        ]
    }

    pub const fn question(self) -> &'static str {
        match self {
            Self::Funds => "Funds >= 50?",
            Self::RiskTolerance => "Risk tolerance?",
            Self::Experience => "Experience >= 2 years?",
            Self::MarketDemand => "Market demand?",
        }
    }

    pub const fn node_id(self) -> &'static str {
        match self {
            Self::Funds => "funds",
            Self::RiskTolerance => "risk",
            Self::Experience => "experience",
            Self::MarketDemand => "market",
        }
    }

    fn observe(self, profile: &VentureProfile) -> String {
        match self {
            Self::Funds => format!("{} units", profile.funds()),
            Self::RiskTolerance => profile.risk_tolerance().label().to_string(),
            Self::Experience => format!("{} years", profile.experience()),
            Self::MarketDemand => profile.market_demand().label().to_string(),
        }
    }

    /// Picks the branch for this gate and the leaf it exits at, if any.
    fn check(self, profile: &VentureProfile) -> (Branch, Option<Leaf>) {
        match self {
            Self::Funds if profile.funds() >= MIN_FUNDS => (Branch::Sufficient, None),
            Self::Funds => (Branch::Insufficient, Some(Leaf::AccumulateCapital)),
            Self::RiskTolerance => match profile.risk_tolerance() {
                Level::High | Level::Medium => (Branch::Tolerant, None),
                Level::Low => (Branch::Averse, Some(Leaf::ReconsiderCautiously)),
            },
            Self::Experience if profile.experience() >= MIN_EXPERIENCE_YEARS => {
                (Branch::Experienced, None)
            }
            Self::Experience => (Branch::Inexperienced, Some(Leaf::GainExperience)),
            Self::MarketDemand => {
                let demand = profile.market_demand();
                (Branch::Demand(demand), Some(Leaf::for_market(demand)))
            }
        }
    }
}

/// Which side of a gate the profile fell on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    Sufficient,
    Insufficient,
    Tolerant,
    Averse,
    Experienced,
    Inexperienced,
    Demand(Level),
}

impl Branch {
    /// Condition text used on outgoing graph edges.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sufficient | Self::Experienced => "yes",
            Self::Insufficient | Self::Inexperienced => "no",
            Self::Tolerant => "High/Medium",
            Self::Averse => "Low",
            Self::Demand(level) => level.label(),
        }
    }
}

/// Terminal recommendation reached by the cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Leaf {
    AccumulateCapital,
    ReconsiderCautiously,
    GainExperience,
    StronglyRecommend,
    RecommendWithResearch,
    DeferReassessMarket,
}

impl Leaf {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::AccumulateCapital,
            Self::ReconsiderCautiously,
            Self::GainExperience,
            Self::StronglyRecommend,
            Self::RecommendWithResearch,
            Self::DeferReassessMarket,
        ]
    }

    pub const fn for_market(demand: Level) -> Self {
        match demand {
            Level::High => Self::StronglyRecommend,
            Level::Medium => Self::RecommendWithResearch,
            Level::Low => Self::DeferReassessMarket,
        }
    }

    pub const fn recommendation(self) -> &'static str {
        match self {
            Self::AccumulateCapital => "accumulate capital / seek financing",
            Self::ReconsiderCautiously => "reconsider cautiously",
            Self::GainExperience => "accumulate industry experience first",
            Self::StronglyRecommend => "strongly recommend",
            Self::RecommendWithResearch => "recommend with market research",
            Self::DeferReassessMarket => "defer, reassess market",
        }
    }

    /// True when the leaf is reached before the market gate.
    pub const fn exits_early(self) -> bool {
        matches!(
            self,
            Self::AccumulateCapital | Self::ReconsiderCautiously | Self::GainExperience
        )
    }

    pub fn explanation(self, profile: &VentureProfile) -> String {
        match self {
            Self::AccumulateCapital => format!(
                "Your starting capital is insufficient ({} units) to cover early operating costs \
                 and risks. Build up funds first.",
                profile.funds()
            ),
            Self::ReconsiderCautiously => "Your risk tolerance is low. A venture may bring \
                 considerable financial and psychological pressure, so decide carefully."
                .to_string(),
            Self::GainExperience => format!(
                "Your capital and risk tolerance are adequate, but industry experience is \
                 limited ({} years). Gain experience in the target industry first.",
                profile.experience()
            ),
            Self::StronglyRecommend => "Capital is sufficient, risk tolerance is sound, you \
                 have relevant experience, and market demand is high. The odds of success are \
                 good."
                .to_string(),
            Self::RecommendWithResearch => "Your fundamentals are good but market demand is \
                 moderate. Refine your market positioning and competitive strategy."
                .to_string(),
            Self::DeferReassessMarket => "Market demand is low. Even with other conditions in \
                 place, the venture faces significant market risk."
                .to_string(),
        }
    }
}

/// Structured record of one gate visited on the way to a leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecisionStep {
    pub gate: Gate,
    pub observed: String,
    pub branch: Branch,
    pub description: String,
}

impl DecisionStep {
    fn record(gate: Gate, branch: Branch, profile: &VentureProfile) -> Self {
        let description = match branch {
            Branch::Sufficient => format!(
                "Funds sufficient ({} units) -> assess risk tolerance",
                profile.funds()
            ),
            Branch::Insufficient => format!(
                "Funds insufficient ({} units, below {MIN_FUNDS})",
                profile.funds()
            ),
            Branch::Tolerant => format!(
                "Risk tolerance {} -> assess industry experience",
                profile.risk_tolerance()
            ),
            Branch::Averse => format!("Risk tolerance {}", profile.risk_tolerance()),
            Branch::Experienced => format!(
                "Industry experience sufficient ({} years) -> assess market demand",
                profile.experience()
            ),
            Branch::Inexperienced => format!(
                "Industry experience insufficient ({} years, below {MIN_EXPERIENCE_YEARS})",
                profile.experience()
            ),
            Branch::Demand(level) => format!("Market demand {level}"),
        };

        Self {
            gate,
            observed: gate.observe(profile),
            branch,
            description,
        }
    }
}

/// Gates visited in order plus the leaf they settled on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecisionTrace {
    pub steps: Vec<DecisionStep>,
    pub leaf: Leaf,
}

impl DecisionTrace {
    /// Human-readable path, starting with the assessment entry step.
    pub fn path(&self) -> Vec<String> {
        std::iter::once(START_STEP.to_string())
            .chain(self.steps.iter().map(|step| step.description.clone()))
            .collect()
    }
}

pub(crate) fn walk(profile: &VentureProfile) -> DecisionTrace {
    let mut steps = Vec::with_capacity(Gate::ordered().len());

    for gate in Gate::ordered() {
        let (branch, exit) = gate.check(profile);
        steps.push(DecisionStep::record(gate, branch, profile));
        if let Some(leaf) = exit {
            return DecisionTrace { steps, leaf };
        }
    }

    // The market gate settles every profile that reaches it.
    DecisionTrace {
        steps,
        leaf: Leaf::for_market(profile.market_demand()),
    }
}
