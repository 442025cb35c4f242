use super::common::*;
use crate::advisor::domain::Level;
use crate::advisor::{EdgeEmphasis, NodeKind};

#[test]
fn graph_mirrors_full_path() {
    let evaluation = advisor()
        .evaluate(&strong_proposal())
        .expect("proposal admitted");
    let graph = evaluation.graph();

    let ids: Vec<&str> = graph.nodes.iter().map(|node| node.id).collect();
    assert_eq!(
        ids,
        vec!["start", "funds", "risk", "experience", "market", "result"]
    );
    assert_eq!(graph.nodes.len(), evaluation.path.len() + 1);
    assert_eq!(graph.edges.len(), graph.nodes.len() - 1);

    let labels: Vec<&str> = graph.edges.iter().map(|edge| edge.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["yes", "yes", "High/Medium", "yes", "strongly recommend"]
    );

    let last = graph.edges.last().expect("result edge");
    assert_eq!(last.from, "market");
    assert_eq!(last.emphasis, Some(EdgeEmphasis::Reached));
}

#[test]
fn early_exit_links_last_gate_to_result() {
    let evaluation = advisor()
        .evaluate(&proposal(60, Level::Low, 9, Level::High))
        .expect("proposal admitted");
    let graph = evaluation.graph();

    assert_eq!(graph.nodes.len(), 4);
    let last = graph.edges.last().expect("result edge");
    assert_eq!(last.from, "risk");
    assert_eq!(last.to, "result");
    assert_eq!(last.label, "reconsider cautiously");
    assert_eq!(last.emphasis, Some(EdgeEmphasis::EarlyExit));
    assert!(graph
        .edges
        .iter()
        .take(graph.edges.len() - 1)
        .all(|edge| edge.emphasis.is_none()));
}

#[test]
fn gate_nodes_show_observed_values() {
    let evaluation = advisor()
        .evaluate(&proposal(30, Level::High, 5, Level::High))
        .expect("proposal admitted");
    let graph = evaluation.graph();

    let funds = graph
        .nodes
        .iter()
        .find(|node| node.id == "funds")
        .expect("funds node");
    assert!(funds.label.contains("Funds >= 50?"));
    assert!(funds.label.contains("30 units"));

    let result = graph.result_node().expect("result node");
    assert_eq!(result.kind, NodeKind::Result);
    assert_eq!(result.label, "accumulate capital / seek financing");
}

#[test]
fn dot_output_highlights_the_result() {
    let evaluation = advisor()
        .evaluate(&proposal(60, Level::High, 1, Level::Low))
        .expect("proposal admitted");
    let dot = evaluation.graph().to_dot();

    assert!(dot.starts_with("digraph {"));
    assert!(dot.contains("rankdir=LR"));
    assert!(dot.contains(
        "result [label=\"accumulate industry experience first\" shape=box style=filled color=lightgreen]"
    ));
    assert!(dot.contains(
        "experience -> result [label=\"accumulate industry experience first\" style=bold color=orange]"
    ));
    assert!(dot.contains("funds [label=\"Funds >= 50?\\nYour situation: 60 units\"]"));
    assert!(!dot.contains("market"));
    assert!(dot.ends_with('}'));
}
