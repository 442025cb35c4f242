use crate::infra::{advisor_from_config, parse_level};
use clap::{Args, ValueEnum};
use venture_advisor::advisor::{Evaluation, InputPolicy, Level, ProposalInput, VentureAdvisor};
use venture_advisor::config::AppConfig;
use venture_advisor::error::AppError;
use venture_advisor::telemetry::{self, LogSink};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// Full evaluation as pretty-printed JSON
    Json,
    /// Decision graph as Graphviz DOT
    Dot,
}

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Starting capital in currency units (0-200)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) funds: i64,
    /// Risk tolerance: high, medium, or low
    #[arg(long, value_parser = parse_level)]
    pub(crate) risk: Level,
    /// Years of relevant industry experience (0-10)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) experience: i64,
    /// Estimated market demand: high, medium, or low
    #[arg(long, value_parser = parse_level)]
    pub(crate) market: Level,
    /// Short description of the venture idea
    #[arg(long, default_value = "")]
    pub(crate) idea: String,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
    /// Clamp out-of-range values instead of rejecting them
    #[arg(long)]
    pub(crate) clamp: bool,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry, LogSink::Stderr)?;

    let EvaluateArgs {
        funds,
        risk,
        experience,
        market,
        idea,
        format,
        clamp,
    } = args;

    let advisor = if clamp {
        VentureAdvisor::new(InputPolicy::Clamp)
    } else {
        advisor_from_config(&config)
    };

    let input = ProposalInput {
        funds,
        risk_tolerance: risk,
        experience,
        market_demand: market,
        idea,
    };
    let evaluation = advisor.evaluate(&input)?;

    match format {
        OutputFormat::Text => println!("{}", render_evaluation(&evaluation)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&evaluation)?),
        OutputFormat::Dot => println!("{}", evaluation.graph().to_dot()),
    }

    Ok(())
}

pub(crate) fn render_evaluation(evaluation: &Evaluation) -> String {
    let mut lines = Vec::new();

    lines.push("Venture decision analysis".to_string());
    if !evaluation.idea.trim().is_empty() {
        lines.push(format!("Idea: {}", evaluation.idea.trim()));
    }
    lines.push(format!("Readiness score: {:.1}/100", evaluation.score));
    lines.push(format!("Recommendation: {}", evaluation.recommendation));
    lines.push(format!("Explanation: {}", evaluation.explanation));

    lines.push("\nScore components".to_string());
    for component in &evaluation.components {
        lines.push(format!(
            "- {}: {:.1} points ({})",
            component.factor.label(),
            component.points,
            component.notes
        ));
    }

    lines.push("\nDecision path".to_string());
    for (index, step) in evaluation.path.iter().enumerate() {
        lines.push(format!("{}. {}", index + 1, step));
    }

    lines.push(format!("\nDetailed advice ({} tier)", evaluation.tier.label()));
    for (index, item) in evaluation.advice.iter().enumerate() {
        lines.push(format!("{}. {}", index + 1, item));
    }

    lines.push(format!("\n{}", Evaluation::DISCLAIMER));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use venture_advisor::advisor::evaluate;

    #[test]
    fn text_report_lists_path_and_advice() {
        let evaluation = evaluate(&ProposalInput {
            funds: 60,
            risk_tolerance: Level::High,
            experience: 1,
            market_demand: Level::High,
            idea: "  Specialty coffee shop ".to_string(),
        })
        .expect("proposal admitted");

        let report = render_evaluation(&evaluation);

        assert!(report.contains("Idea: Specialty coffee shop"));
        assert!(report.contains("Recommendation: accumulate industry experience first"));
        assert!(report.contains("1. Begin venture assessment"));
        assert!(report.contains("4. Industry experience insufficient (1 years, below 2)"));
        assert!(report.contains("Detailed advice (High tier)"));
        assert!(report.ends_with(Evaluation::DISCLAIMER));
    }

    #[test]
    fn text_report_omits_blank_idea() {
        let evaluation = evaluate(&ProposalInput {
            funds: 10,
            risk_tolerance: Level::Low,
            experience: 0,
            market_demand: Level::Low,
            idea: String::new(),
        })
        .expect("proposal admitted");

        let report = render_evaluation(&evaluation);

        assert!(!report.contains("Idea:"));
        assert!(report.contains("Detailed advice (Low tier)"));
    }
}
