//! Core types for the mock providers

pub mod file_stats;
pub mod model;
pub mod query;
pub mod response;

pub use file_stats::{FileInfo, FileProcessingRequest, FileStats};
pub use model::KnownModel;
pub use query::{FileDetail, PageRange, QueryRequest};
pub use response::{QueryResult, ReferenceRecord, TokenUsage};
