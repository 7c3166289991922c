//! Query request types

use serde::{Deserialize, Serialize};

/// Default model name when the caller does not pick one
pub const DEFAULT_MODEL: &str = "mock-model";

/// Inclusive page range selected within a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRange {
    pub start: u32,
    pub end: u32,
}

impl PageRange {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Pages are 1-based and the range must not be inverted
    pub fn is_valid(&self) -> bool {
        self.start >= 1 && self.start <= self.end
    }

    pub fn contains(&self, page: u32) -> bool {
        (self.start..=self.end).contains(&page)
    }
}

/// A file the user selected for the query, with the pages to search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDetail {
    /// File name or identifier
    #[serde(alias = "fileId", alias = "file_id")]
    pub name: String,
    /// Page ranges to restrict retrieval to
    #[serde(default, alias = "pageRanges", alias = "page_ranges")]
    pub ranges: Vec<PageRange>,
}

impl FileDetail {
    pub fn new(name: impl Into<String>, ranges: Vec<PageRange>) -> Self {
        Self {
            name: name.into(),
            ranges,
        }
    }
}

/// Query request for the answering provider
///
/// Accepts both the camelCase field names and the names the upload service
/// sends on stdin (`user_id`, `fileInfo`, `noOfReferences`).
#[derive(Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    /// Requesting user
    #[serde(default, alias = "user_id")]
    pub user_id: String,

    /// Files to answer from
    #[serde(default, alias = "fileInfo", alias = "file_details")]
    pub file_details: Vec<FileDetail>,

    /// The question to answer
    pub query: String,

    /// Number of references to return (default: 0)
    ///
    /// Signed so that a negative count from the wire is reported as invalid
    /// input instead of a deserialization failure.
    #[serde(default, alias = "noOfReferences", alias = "num_references")]
    pub num_references: i64,

    /// Model to answer with (default: mock-model)
    #[serde(default = "default_model")]
    pub model: String,

    /// Caller's API key for the model provider
    #[serde(default, alias = "api_key")]
    pub api_key: String,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl Default for QueryRequest {
    fn default() -> Self {
        Self {
            user_id: String::new(),
            file_details: Vec::new(),
            query: String::new(),
            num_references: 0,
            model: default_model(),
            api_key: String::new(),
        }
    }
}

impl std::fmt::Debug for QueryRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryRequest")
            .field("user_id", &self.user_id)
            .field("file_details", &self.file_details)
            .field("query", &self.query)
            .field("num_references", &self.num_references)
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl QueryRequest {
    /// Create a new query
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    /// Sample request used by the query tool when no input is given
    pub fn sample() -> Self {
        Self::new("What is the meaning of life?")
            .with_user("12345")
            .with_files(vec![
                FileDetail::new("file1", vec![PageRange::new(1, 5)]),
                FileDetail::new("file2", vec![PageRange::new(6, 10)]),
            ])
            .with_references(2)
            .with_model(DEFAULT_MODEL)
            .with_api_key("example-api-key")
    }

    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn with_files(mut self, files: Vec<FileDetail>) -> Self {
        self.file_details = files;
        self
    }

    /// Set the number of references to fabricate
    pub fn with_references(mut self, n: i64) -> Self {
        self.num_references = n;
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_service_payload() {
        let json = r#"{
            "user_id": "u-1",
            "fileInfo": [
                {"fileId": "66f3eee573a67e2b182fff42", "pageRanges": [{"start": 1, "end": 3}]}
            ],
            "query": "What is covered?",
            "noOfReferences": 3,
            "apiKey": "sk-test"
        }"#;

        let request: QueryRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.user_id, "u-1");
        assert_eq!(request.file_details.len(), 1);
        assert_eq!(request.file_details[0].name, "66f3eee573a67e2b182fff42");
        assert_eq!(request.file_details[0].ranges, vec![PageRange::new(1, 3)]);
        assert_eq!(request.num_references, 3);
        assert_eq!(request.model, DEFAULT_MODEL);
        assert_eq!(request.api_key, "sk-test");
    }

    #[test]
    fn test_parse_camel_case_payload() {
        let json = r#"{
            "userId": "u-2",
            "fileDetails": [{"name": "file1", "ranges": []}],
            "query": "ping",
            "numReferences": -1,
            "model": "gpt-4o"
        }"#;

        let request: QueryRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.user_id, "u-2");
        assert_eq!(request.num_references, -1);
        assert_eq!(request.model, "gpt-4o");
        assert!(request.api_key.is_empty());
    }

    #[test]
    fn test_query_is_required() {
        let result = serde_json::from_str::<QueryRequest>(r#"{"noOfReferences": 1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let request = QueryRequest::sample();
        let debug = format!("{:?}", request);
        assert!(!debug.contains("example-api-key"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_sample_request() {
        let request = QueryRequest::sample();
        assert_eq!(request.user_id, "12345");
        assert_eq!(request.num_references, 2);
        assert_eq!(request.file_details.len(), 2);
        assert_eq!(request.model, "mock-model");
    }

    #[test]
    fn test_page_range() {
        let range = PageRange::new(6, 10);
        assert!(range.is_valid());
        assert!(range.contains(6));
        assert!(range.contains(10));
        assert!(!range.contains(11));
        assert!(!PageRange::new(0, 4).is_valid());
        assert!(!PageRange::new(5, 4).is_valid());
    }
}
