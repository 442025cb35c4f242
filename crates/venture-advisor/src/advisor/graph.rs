use serde::Serialize;

use super::cascade::{DecisionStep, Leaf};

const START_ID: &str = "start";
const RESULT_ID: &str = "result";
const START_LABEL: &str = "Consider a venture?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Start,
    Gate,
    Result,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    pub id: &'static str,
    pub label: String,
    pub kind: NodeKind,
}

/// Highlight applied to the edge that lands on the result node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeEmphasis {
    /// Every gate was passed and the market gate decided.
    Reached,
    /// A threshold gate stopped the assessment.
    EarlyExit,
}

impl EdgeEmphasis {
    pub const fn color(self) -> &'static str {
        match self {
            Self::Reached => "green",
            Self::EarlyExit => "orange",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub from: &'static str,
    pub to: &'static str,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<EdgeEmphasis>,
}

/// Directed graph mirroring the branch actually taken through the cascade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecisionGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl DecisionGraph {
    /// Builds the graph from recorded steps; branch labels come from the trace.
    pub fn from_trace(steps: &[DecisionStep], leaf: Leaf) -> Self {
        let mut nodes = Vec::with_capacity(steps.len() + 2);
        let mut edges = Vec::with_capacity(steps.len() + 1);

        nodes.push(GraphNode {
            id: START_ID,
            label: START_LABEL.to_string(),
            kind: NodeKind::Start,
        });

        let mut previous = START_ID;
        let mut incoming = "yes";
        for step in steps {
            let id = step.gate.node_id();
            nodes.push(GraphNode {
                id,
                label: format!("{}\nYour situation: {}", step.gate.question(), step.observed),
                kind: NodeKind::Gate,
            });
            edges.push(GraphEdge {
                from: previous,
                to: id,
                label: incoming.to_string(),
                emphasis: None,
            });
            previous = id;
            incoming = step.branch.label();
        }

        let emphasis = if leaf.exits_early() {
            EdgeEmphasis::EarlyExit
        } else {
            EdgeEmphasis::Reached
        };
        nodes.push(GraphNode {
            id: RESULT_ID,
            label: leaf.recommendation().to_string(),
            kind: NodeKind::Result,
        });
        edges.push(GraphEdge {
            from: previous,
            to: RESULT_ID,
            label: leaf.recommendation().to_string(),
            emphasis: Some(emphasis),
        });

        Self { nodes, edges }
    }

    pub fn result_node(&self) -> Option<&GraphNode> {
        self.nodes.iter().find(|node| node.kind == NodeKind::Result)
    }

    /// Renders the graph as Graphviz DOT, laid out left to right.
    pub fn to_dot(&self) -> String {
        let mut lines = Vec::with_capacity(self.nodes.len() + self.edges.len() + 3);
        lines.push("digraph {".to_string());
        lines.push("    rankdir=LR".to_string());

        for node in &self.nodes {
            let attrs = match node.kind {
                NodeKind::Result => " shape=box style=filled color=lightgreen",
                NodeKind::Start | NodeKind::Gate => "",
            };
            lines.push(format!(
                "    {} [label={}{}]",
                node.id,
                quote(&node.label),
                attrs
            ));
        }

        for edge in &self.edges {
            let attrs = match edge.emphasis {
                Some(emphasis) => format!(" style=bold color={}", emphasis.color()),
                None => String::new(),
            };
            lines.push(format!(
                "    {} -> {} [label={}{}]",
                edge.from,
                edge.to,
                quote(&edge.label),
                attrs
            ));
        }

        lines.push("}".to_string());
        lines.join("\n")
    }
}

fn quote(raw: &str) -> String {
    let mut quoted = String::with_capacity(raw.len() + 2);
    quoted.push('"');
    for ch in raw.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            other => quoted.push(other),
        }
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::quote;

    #[test]
    fn quote_escapes_dot_metacharacters() {
        assert_eq!(quote("a \"b\"\nc\\d"), "\"a \\\"b\\\"\\nc\\\\d\"");
    }
}
