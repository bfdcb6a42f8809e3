//! College and program directory used as retrieval context
//!
//! Records are the pre-joined rows of the college, program, online resource
//! and scholarship tables. Each record renders one descriptive document;
//! queries rank documents by how many query terms they share.

use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;

const NOT_AVAILABLE: &str = "N/A";

const STOPWORDS: &[&str] = &[
    "a", "an", "and", "at", "for", "in", "is", "of", "on", "or", "the", "to", "with", "their",
];

fn not_available() -> String {
    NOT_AVAILABLE.to_string()
}

/// Accept strings, numbers and nulls; blanks and nulls become `N/A`.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => not_available(),
        Value::String(s) if s.trim().is_empty() => not_available(),
        Value::String(s) => s.trim().to_string(),
        other => other.to_string(),
    })
}

/// One college/program offering row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct OfferingRecord {
    #[serde(default = "not_available", deserialize_with = "lenient_string")]
    pub school_id: String,
    #[serde(default = "not_available", deserialize_with = "lenient_string")]
    pub program_id: String,
    #[serde(default = "not_available", deserialize_with = "lenient_string")]
    pub institution_name: String,
    #[serde(default = "not_available", deserialize_with = "lenient_string")]
    pub institution_type: String,
    #[serde(default = "not_available", deserialize_with = "lenient_string")]
    pub municipality: String,
    #[serde(default = "not_available", deserialize_with = "lenient_string")]
    pub province: String,
    #[serde(default = "not_available", deserialize_with = "lenient_string")]
    pub program_name: String,
    #[serde(default = "not_available", deserialize_with = "lenient_string")]
    pub website_address: String,
    #[serde(default = "not_available", deserialize_with = "lenient_string")]
    pub resource_name: String,
    #[serde(rename = "LINK", default = "not_available", deserialize_with = "lenient_string")]
    pub resource_link: String,
    #[serde(rename = "TYPE", default = "not_available", deserialize_with = "lenient_string")]
    pub resource_types: String,
    #[serde(rename = "DOST_ELIGIBLE", default = "not_available", deserialize_with = "lenient_string")]
    pub dost_eligibility: String,
}

impl OfferingRecord {
    /// Descriptive sentence(s) the advisor reads as context.
    pub fn document(&self) -> String {
        let mut text = format!(
            "The {} ({} college) located in {}, {} offers the {} program. Their website is {}.",
            self.institution_name,
            self.institution_type,
            self.municipality,
            self.province,
            self.program_name,
            self.website_address,
        );
        if self.resource_name != NOT_AVAILABLE {
            text.push_str(&format!(
                " A related online resource is {} ({}) at {}.",
                self.resource_name, self.resource_types, self.resource_link
            ));
        }
        if self.dost_eligibility != NOT_AVAILABLE {
            text.push_str(&format!(" DOST scholarship eligibility: {}.", self.dost_eligibility));
        }
        text
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    pub id: String,
    pub text: String,
    pub record: OfferingRecord,
    terms: HashSet<String>,
}

#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    documents: Vec<Document>,
}

impl KnowledgeBase {
    pub fn load(path: &Path) -> ApiResult<Self> {
        let data = std::fs::read_to_string(path)?;
        let records: Vec<OfferingRecord> = serde_json::from_str(&data).map_err(|e| {
            ApiError::KnowledgeBase(format!("{}: {}", path.display(), e))
        })?;
        Ok(Self::from_records(records))
    }

    pub fn from_records(records: Vec<OfferingRecord>) -> Self {
        let documents = records
            .into_iter()
            .enumerate()
            .map(|(i, record)| {
                let text = record.document();
                Document {
                    id: format!("school_program_offering_{}", i),
                    terms: tokenize(&text),
                    text,
                    record,
                }
            })
            .collect();
        Self { documents }
    }

    /// Up to `limit` documents, best match first. Ties keep file order.
    pub fn query(&self, text: &str, limit: usize) -> Vec<&Document> {
        let query_terms = tokenize(text);
        let mut scored: Vec<(usize, &Document)> = self
            .documents
            .iter()
            .map(|doc| (doc.terms.intersection(&query_terms).count(), doc))
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().take(limit).map(|(_, doc)| doc).collect()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

fn tokenize(text: &str) -> HashSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .map(str::to_lowercase)
        .filter(|t| t.len() > 1 && !STOPWORDS.contains(&t.as_str()))
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    pub(crate) fn sample_knowledge() -> KnowledgeBase {
        let records: Vec<OfferingRecord> = serde_json::from_value(json!([
            {
                "SCHOOL_ID": 1,
                "PROGRAM_ID": 10,
                "INSTITUTION_NAME": "Cebu Institute of Technology",
                "INSTITUTION_TYPE": "Private",
                "MUNICIPALITY": "Cebu City",
                "PROVINCE": "Cebu",
                "PROGRAM_NAME": "BS Computer Engineering",
                "WEBSITE_ADDRESS": "cit.edu",
                "RESOURCE_NAME": "Intro to Robotics",
                "LINK": "https://example.org/robotics",
                "TYPE": "Course",
                "DOST_ELIGIBLE": "Yes"
            },
            {
                "SCHOOL_ID": 2,
                "PROGRAM_ID": 20,
                "INSTITUTION_NAME": "Cebu Normal University",
                "INSTITUTION_TYPE": "State",
                "MUNICIPALITY": "Cebu City",
                "PROVINCE": "Cebu",
                "PROGRAM_NAME": "BS Biology",
                "WEBSITE_ADDRESS": "cnu.edu.ph",
                "RESOURCE_NAME": null
            }
        ]))
        .unwrap();
        KnowledgeBase::from_records(records)
    }

    #[test]
    fn test_missing_fields_become_not_available() {
        let kb = sample_knowledge();
        let biology = &kb.documents[1].record;
        assert_eq!(biology.resource_name, NOT_AVAILABLE);
        assert_eq!(biology.dost_eligibility, NOT_AVAILABLE);
        assert_eq!(biology.school_id, "2");
    }

    #[test]
    fn test_document_text() {
        let kb = sample_knowledge();
        assert_eq!(kb.documents[0].id, "school_program_offering_0");
        assert!(kb.documents[0].text.starts_with(
            "The Cebu Institute of Technology (Private college) located in Cebu City, Cebu offers the BS Computer Engineering program."
        ));
        assert!(kb.documents[0].text.contains("Intro to Robotics"));
        assert!(!kb.documents[1].text.contains("online resource"));
    }

    #[test]
    fn test_query_ranks_by_shared_terms() {
        let kb = sample_knowledge();
        let results = kb.query("interest: biology", 10);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].record.program_name, "BS Biology");

        let results = kb.query("robotics engineering", 1);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].record.program_name, "BS Computer Engineering");
    }

    #[test]
    fn test_unmatched_query_keeps_file_order() {
        let kb = sample_knowledge();
        let results = kb.query("astronomy", 10);
        assert_eq!(results[0].id, "school_program_offering_0");
    }
}
