use axum::response::Response;
use serde_json::Value;

use crate::advisor::domain::{Level, ProposalInput, VentureProfile};
use crate::advisor::{InputPolicy, VentureAdvisor};

pub(super) fn proposal(
    funds: i64,
    risk_tolerance: Level,
    experience: i64,
    market_demand: Level,
) -> ProposalInput {
    ProposalInput {
        funds,
        risk_tolerance,
        experience,
        market_demand,
        idea: "Specialty coffee shop".to_string(),
    }
}

pub(super) fn strong_proposal() -> ProposalInput {
    proposal(80, Level::High, 5, Level::High)
}

pub(super) fn profile(
    funds: u8,
    risk_tolerance: Level,
    experience: u8,
    market_demand: Level,
) -> VentureProfile {
    VentureProfile::new(funds, risk_tolerance, experience, market_demand)
}

pub(super) fn advisor() -> VentureAdvisor {
    VentureAdvisor::new(InputPolicy::Reject)
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) async fn read_text_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf-8 payload")
}
