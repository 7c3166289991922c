//! Response types for answered queries

use serde::{Deserialize, Serialize};

/// Citation attached to an answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceRecord {
    /// Source filename
    pub file_name: String,
    /// Source file identifier (opaque)
    pub file_id: String,
    /// Page number, 1-based
    pub page_no: u32,
}

impl ReferenceRecord {
    pub fn new(file_name: impl Into<String>, file_id: impl Into<String>, page_no: u32) -> Self {
        Self {
            file_name: file_name.into(),
            file_id: file_id.into(),
            page_no,
        }
    }
}

/// Language-model token usage for one query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input: u32,
    pub output: u32,
}

impl TokenUsage {
    pub fn new(input: u32, output: u32) -> Self {
        Self { input, output }
    }
}

/// Answer to a query with its citations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    /// Generated answer
    pub answer: String,
    /// Citations, in the order they were produced
    pub references: Vec<ReferenceRecord>,
    /// Token usage
    pub tokens_used: TokenUsage,
}

impl QueryResult {
    pub fn new(answer: String, references: Vec<ReferenceRecord>, tokens_used: TokenUsage) -> Self {
        Self {
            answer,
            references,
            tokens_used,
        }
    }
}
