//! Answer provider trait for query responses

use crate::error::Result;
use crate::types::{FileDetail, QueryRequest, QueryResult};

/// Trait for answering a query with citations and token usage
///
/// Implementations:
/// - `MockAnswerProvider`: fabricated answer, references and token counts
pub trait AnswerProvider: Send + Sync {
    /// Answer the query described by `request`
    fn answer(&self, request: &QueryRequest) -> Result<QueryResult>;

    /// Get provider name for logging
    fn name(&self) -> &str;
}

/// Answer a query from its individual parts
///
/// `user_id`, `file_details` and `api_key` are forwarded to the provider
/// unchanged; the mock provider ignores them.
pub fn process_query<P: AnswerProvider + ?Sized>(
    provider: &P,
    user_id: &str,
    file_details: &[FileDetail],
    query: &str,
    num_references: i64,
    model: &str,
    api_key: &str,
) -> Result<QueryResult> {
    let request = QueryRequest::new(query)
        .with_user(user_id)
        .with_files(file_details.to_vec())
        .with_references(num_references)
        .with_model(model)
        .with_api_key(api_key);

    provider.answer(&request)
}
