//! Roadmap flow diagram model and the generation wire contract
//!
//! The diagram has a fixed 15-node shape: a program at the root, two
//! section headers, six resources, three colleges and one detail card per
//! college. The backend fills in the labels.

use crate::location::Location;
use crate::props::Props;
use crate::route::USER_INPUT_PARAM;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_USER_QUERY: &str = "Suggest a personalized learning and career roadmap in tech.";

/// Generic message returned alongside every backend error
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal server error occurred.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Program,
    #[default]
    Header,
    Resource,
    College,
    CollegeDetail,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NodePosition {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapNode {
    pub id: String,
    pub label: String,
    pub kind: NodeKind,
    pub position: NodePosition,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

/// The id/label pair sent to the backend as node context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeLabel {
    pub id: String,
    pub label: String,
}

/// One label produced by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelUpdate {
    pub id: String,
    #[serde(rename = "newLabel")]
    pub new_label: String,
}

/// Body of `POST /generate_roadmap`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    #[serde(rename = "currentNodes", default)]
    pub current_nodes: Vec<NodeLabel>,
    #[serde(rename = "userQuery", default = "default_user_query")]
    pub user_query: String,
}

fn default_user_query() -> String {
    DEFAULT_USER_QUERY.to_string()
}

impl GenerateRequest {
    pub fn new(current_nodes: Vec<NodeLabel>, user_query: impl Into<String>) -> Self {
        Self {
            current_nodes,
            user_query: user_query.into(),
        }
    }

    /// The query to answer; blank queries use the default.
    pub fn effective_query(&self) -> &str {
        if self.user_query.trim().is_empty() {
            DEFAULT_USER_QUERY
        } else {
            &self.user_query
        }
    }
}

/// Error body returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Roadmap {
    pub nodes: Vec<RoadmapNode>,
    pub edges: Vec<RoadmapEdge>,
}

impl Roadmap {
    /// The unlabelled 15-node diagram.
    pub fn template() -> Self {
        let mut nodes = Vec::with_capacity(15);
        let mut edges = Vec::with_capacity(14);

        let mut node = |id: u32, label: String, kind: NodeKind, x: f64, y: f64| {
            nodes.push(RoadmapNode {
                id: id.to_string(),
                label,
                kind,
                position: NodePosition { x, y },
            });
        };

        node(1, "PROGRAM".to_string(), NodeKind::Program, 420.0, 0.0);
        node(2, "RESOURCES".to_string(), NodeKind::Header, 160.0, 140.0);
        node(3, "COLLEGES".to_string(), NodeKind::Header, 680.0, 140.0);
        for (i, id) in (4..=9).enumerate() {
            let column = (i % 2) as f64;
            let row = (i / 2) as f64;
            node(
                id,
                format!("Resource {}", i + 1),
                NodeKind::Resource,
                40.0 + column * 240.0,
                280.0 + row * 120.0,
            );
        }
        for (i, id) in (10..=12).enumerate() {
            let x = 520.0 + i as f64 * 220.0;
            node(id, format!("College {}", i + 1), NodeKind::College, x, 280.0);
            node(id + 3, "Details".to_string(), NodeKind::CollegeDetail, x, 420.0);
        }

        let mut edge = |source: u32, target: u32| {
            edges.push(RoadmapEdge {
                id: format!("e{}-{}", source, target),
                source: source.to_string(),
                target: target.to_string(),
            });
        };
        edge(1, 2);
        edge(1, 3);
        for id in 4..=9 {
            edge(2, id);
        }
        for id in 10..=12 {
            edge(3, id);
            edge(id, id + 3);
        }

        Self { nodes, edges }
    }

    pub fn node(&self, id: &str) -> Option<&RoadmapNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_labels(&self) -> Vec<NodeLabel> {
        self.nodes
            .iter()
            .map(|n| NodeLabel {
                id: n.id.clone(),
                label: n.label.clone(),
            })
            .collect()
    }

    /// Apply backend labels; unknown ids are ignored. Returns how many
    /// nodes changed.
    pub fn apply(&mut self, updates: &[LabelUpdate]) -> usize {
        let mut applied = 0;
        for update in updates {
            if let Some(node) = self.nodes.iter_mut().find(|n| n.id == update.id) {
                node.label = update.new_label.clone();
                applied += 1;
            }
        }
        applied
    }
}

/// Turn the roadmap page's props into a free-text query.
///
/// A non-blank `query` prop is used as is; otherwise the scalar props are
/// listed as `key: value` pairs. Nothing usable yields the default query.
pub fn user_query_from_props(props: &Props) -> String {
    if let Some(query) = props.get("query").and_then(Value::as_str) {
        if !query.trim().is_empty() {
            return query.trim().to_string();
        }
    }

    let parts: Vec<String> = props
        .iter()
        .filter_map(|(key, value)| match value {
            Value::String(s) if !s.trim().is_empty() => Some(format!("{}: {}", key, s.trim())),
            Value::Number(n) => Some(format!("{}: {}", key, n)),
            Value::Bool(b) => Some(format!("{}: {}", key, b)),
            _ => None,
        })
        .collect();

    if parts.is_empty() {
        DEFAULT_USER_QUERY.to_string()
    } else {
        parts.join(", ")
    }
}

/// `/roadmap?userInput=<json>` for the given input.
pub fn roadmap_href(input: &Props) -> String {
    let json = Value::Object(input.clone()).to_string();
    Location::new("/roadmap")
        .with_query(USER_INPUT_PARAM, json)
        .href()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::compute_props;
    use crate::route::app_routes;
    use serde_json::json;

    #[test]
    fn test_template_shape() {
        let roadmap = Roadmap::template();
        assert_eq!(roadmap.nodes.len(), 15);
        assert_eq!(roadmap.edges.len(), 14);
        assert_eq!(roadmap.node("1").unwrap().kind, NodeKind::Program);
        assert_eq!(roadmap.node("9").unwrap().kind, NodeKind::Resource);
        assert_eq!(roadmap.node("12").unwrap().kind, NodeKind::College);
        assert_eq!(roadmap.node("15").unwrap().kind, NodeKind::CollegeDetail);
        assert!(roadmap.edges.iter().any(|e| e.source == "12" && e.target == "15"));
    }

    #[test]
    fn test_apply_ignores_unknown_ids() {
        let mut roadmap = Roadmap::template();
        let applied = roadmap.apply(&[
            LabelUpdate {
                id: "1".to_string(),
                new_label: "BS Computer Science".to_string(),
            },
            LabelUpdate {
                id: "99".to_string(),
                new_label: "ignored".to_string(),
            },
        ]);
        assert_eq!(applied, 1);
        assert_eq!(roadmap.node("1").unwrap().label, "BS Computer Science");
    }

    #[test]
    fn test_generate_request_wire_format() {
        let request: GenerateRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.current_nodes.is_empty());
        assert_eq!(request.effective_query(), DEFAULT_USER_QUERY);

        let request = GenerateRequest::new(vec![], "  ");
        assert_eq!(request.effective_query(), DEFAULT_USER_QUERY);

        let update: LabelUpdate =
            serde_json::from_value(json!({ "id": "3", "newLabel": "COLLEGES" })).unwrap();
        assert_eq!(update.new_label, "COLLEGES");
    }

    #[test]
    fn test_user_query_from_props() {
        let props = json!({ "query": " robotics in Cebu " });
        assert_eq!(user_query_from_props(props.as_object().unwrap()), "robotics in Cebu");

        let props = json!({ "interest": "robotics", "location": "Cebu City", "skip": null });
        assert_eq!(
            user_query_from_props(props.as_object().unwrap()),
            "interest: robotics, location: Cebu City"
        );

        assert_eq!(user_query_from_props(&Props::new()), DEFAULT_USER_QUERY);
    }

    #[test]
    fn test_roadmap_href_resolves_back_to_props() {
        let input = json!({ "interest": "data science & AI" });
        let href = roadmap_href(input.as_object().unwrap());

        let location = Location::parse(&href).unwrap();
        let table = app_routes().unwrap();
        let matched = table.resolve(location.path()).unwrap();
        let props = compute_props(matched.entry, &location, &matched.params).unwrap();
        assert_eq!(Value::Object(props), input);
    }
}
