//! Venture readiness scoring and the decision cascade behind each recommendation.
//!
//! A proposal passes through the input guard, is scored by the weighted factor rubric, and
//! walks the gate cascade to a single leaf. The recorded steps drive both the textual path and
//! the rendered decision graph, so thresholds are only ever evaluated once.

mod cascade;
pub mod domain;
mod graph;
mod guard;
pub mod router;
mod scoring;
mod tier;

#[cfg(test)]
mod tests;

pub use cascade::{
    Branch, DecisionStep, DecisionTrace, Gate, Leaf, MIN_EXPERIENCE_YEARS, MIN_FUNDS,
};
pub use domain::{Level, ParseLevelError, ProposalInput, VentureProfile};
pub use graph::{DecisionGraph, EdgeEmphasis, GraphEdge, GraphNode, NodeKind};
pub use guard::{InputError, InputGuard, InputPolicy};
pub use router::advisor_router;
pub use scoring::{ScoreComponent, ScoreFactor};
pub use tier::AdviceTier;

use serde::Serialize;
use tracing::debug;

/// Stateless advisor that applies the input guard, scorer, and cascade to a proposal.
#[derive(Debug, Clone, Copy, Default)]
pub struct VentureAdvisor {
    guard: InputGuard,
}

impl VentureAdvisor {
    pub fn new(policy: InputPolicy) -> Self {
        Self {
            guard: InputGuard::new(policy),
        }
    }

    pub fn policy(&self) -> InputPolicy {
        self.guard.policy()
    }

    pub fn evaluate(&self, input: &ProposalInput) -> Result<Evaluation, InputError> {
        let profile = self.guard.admit(input)?;
        let evaluation = Evaluation::assess(input.idea.clone(), profile);

        debug!(
            score = evaluation.score,
            leaf = ?evaluation.leaf,
            tier = evaluation.tier.label(),
            gates = evaluation.steps.len(),
            "proposal evaluated"
        );

        Ok(evaluation)
    }
}

/// Evaluates a proposal with the default (rejecting) input policy.
pub fn evaluate(input: &ProposalInput) -> Result<Evaluation, InputError> {
    VentureAdvisor::default().evaluate(input)
}

/// Full result of assessing one proposal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub idea: String,
    pub profile: VentureProfile,
    pub score: f64,
    pub components: Vec<ScoreComponent>,
    pub path: Vec<String>,
    pub steps: Vec<DecisionStep>,
    pub leaf: Leaf,
    pub recommendation: &'static str,
    pub explanation: String,
    pub tier: AdviceTier,
    pub advice: [&'static str; 4],
}

impl Evaluation {
    pub const DISCLAIMER: &'static str = "This tool is for reference only; a real venture \
         decision needs to weigh many more factors.";

    fn assess(idea: String, profile: VentureProfile) -> Self {
        let (components, score) = scoring::score_profile(&profile);
        let trace = cascade::walk(&profile);
        let tier = AdviceTier::from_score(score);
        let path = trace.path();
        let DecisionTrace { steps, leaf } = trace;

        Self {
            idea,
            profile,
            score,
            components,
            path,
            steps,
            leaf,
            recommendation: leaf.recommendation(),
            explanation: leaf.explanation(&profile),
            tier,
            advice: tier.advice(),
        }
    }

    pub fn graph(&self) -> DecisionGraph {
        DecisionGraph::from_trace(&self.steps, self.leaf)
    }
}
