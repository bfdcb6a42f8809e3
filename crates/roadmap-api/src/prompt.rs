//! Advisor prompt assembly

use crate::knowledge::Document;
use roadmap_core::NodeLabel;
use serde_json::{json, Value};

pub const SYSTEM_INSTRUCTION: &str = "\
You are a career and education advisor for a student in Cebu City, Philippines.
Fill in a roadmap flowchart using the school and program records provided.

You receive:
1. The node ids of the flowchart with their current labels.
2. Records about colleges, programs, online resources and scholarships in Cebu.

Produce a label for EVERY node id from 1 to 15:
- id 1 (PROGRAM): a STEM program found in the records, tied to a specific school where possible.
- id 2: exactly the word \"RESOURCES\".
- id 3: exactly the word \"COLLEGES\".
- ids 4 to 9: online resources from the records related to the program in id 1.
- ids 10 to 12: schools from the records that offer the program in id 1.
- ids 13 to 15: details about the schools in ids 10, 11 and 12 respectively.

Respond ONLY with a JSON array of objects with \"id\" and \"newLabel\" for all 15 nodes.";

/// Everything the advisor is asked in one generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadmapPrompt {
    pub system_instruction: String,
    pub user_parts: Vec<String>,
}

impl RoadmapPrompt {
    pub fn build(query: &str, nodes: &[NodeLabel], documents: &[&Document]) -> Self {
        let nodes = serde_json::to_string(nodes).unwrap_or_else(|_| "[]".to_string());
        let texts: Vec<&str> = documents.iter().map(|d| d.text.as_str()).collect();
        let context = serde_json::to_string_pretty(&texts).unwrap_or_else(|_| "[]".to_string());

        Self {
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            user_parts: vec![
                format!("User's query/interest: {}", query),
                format!("Current Node structure: {}", nodes),
                format!("Relevant RAG Data: {}", context),
            ],
        }
    }
}

/// Structured output schema: an array of `{id, newLabel}` objects.
pub fn response_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "id": { "type": "STRING" },
                "newLabel": { "type": "STRING" }
            },
            "required": ["id", "newLabel"]
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::tests::sample_knowledge;
    use roadmap_core::Roadmap;

    #[test]
    fn test_build_prompt_parts() {
        let kb = sample_knowledge();
        let docs = kb.query("biology", 1);
        let nodes = Roadmap::template().node_labels();

        let prompt = RoadmapPrompt::build("interest: biology", &nodes, &docs);
        assert_eq!(prompt.user_parts.len(), 3);
        assert_eq!(prompt.user_parts[0], "User's query/interest: interest: biology");
        assert!(prompt.user_parts[1].starts_with("Current Node structure: [{\"id\":\"1\",\"label\":\"PROGRAM\"}"));
        assert!(prompt.user_parts[2].contains("BS Biology"));
        assert!(!prompt.user_parts[2].contains("BS Computer Engineering"));
        assert!(prompt.system_instruction.contains("ids 13 to 15"));
    }

    #[test]
    fn test_response_schema_requires_both_fields() {
        let schema = response_schema();
        assert_eq!(schema["type"], "ARRAY");
        assert_eq!(schema["items"]["required"], json!(["id", "newLabel"]));
    }
}
