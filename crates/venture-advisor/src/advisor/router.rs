use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Serialize;
use serde_json::json;

use super::domain::ProposalInput;
use super::{DecisionGraph, Evaluation, VentureAdvisor};

pub(crate) const DOT_CONTENT_TYPE: &str = "text/vnd.graphviz";

#[derive(Debug, Serialize)]
struct EvaluationResponse<'a> {
    #[serde(flatten)]
    evaluation: &'a Evaluation,
    graph: DecisionGraph,
    dot: String,
}

/// Router builder exposing HTTP endpoints for proposal evaluation.
pub fn advisor_router(advisor: Arc<VentureAdvisor>) -> Router {
    Router::new()
        .route("/api/v1/advisor/evaluations", post(evaluate_handler))
        .route("/api/v1/advisor/graph", post(graph_handler))
        .with_state(advisor)
}

pub(crate) async fn evaluate_handler(
    State(advisor): State<Arc<VentureAdvisor>>,
    payload: Result<axum::Json<ProposalInput>, JsonRejection>,
) -> Response {
    let input = match payload {
        Ok(axum::Json(input)) => input,
        Err(rejection) => return rejection_response(rejection),
    };

    match advisor.evaluate(&input) {
        Ok(evaluation) => {
            let graph = evaluation.graph();
            let dot = graph.to_dot();
            let body = EvaluationResponse {
                evaluation: &evaluation,
                graph,
                dot,
            };
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn graph_handler(
    State(advisor): State<Arc<VentureAdvisor>>,
    payload: Result<axum::Json<ProposalInput>, JsonRejection>,
) -> Response {
    let input = match payload {
        Ok(axum::Json(input)) => input,
        Err(rejection) => return rejection_response(rejection),
    };

    match advisor.evaluate(&input) {
        Ok(evaluation) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, DOT_CONTENT_TYPE)],
            evaluation.graph().to_dot(),
        )
            .into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

/// Body parse failures answer with the same JSON error shape as range errors.
fn rejection_response(rejection: JsonRejection) -> Response {
    let payload = json!({
        "error": rejection.body_text(),
    });
    (rejection.status(), axum::Json(payload)).into_response()
}
