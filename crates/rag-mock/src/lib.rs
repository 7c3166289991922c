//! rag-mock: placeholder providers for citation-aware answering and file processing
//!
//! This crate stands in for a real RAG backend while the surrounding service is built.
//! It answers queries with fabricated references and token counts, and reports
//! randomized chunk/page counts for uploaded files. Both behaviours sit behind
//! provider traits so a real retrieval pipeline or chunker can replace them.

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod providers;
pub mod types;

pub use config::MockConfig;
pub use error::{Error, Result};
pub use providers::{
    process_query, AnswerProvider, FileStatsProvider, MockAnswerProvider, MockFileStatsProvider,
};
pub use types::{
    file_stats::{FileInfo, FileProcessingRequest, FileStats},
    query::{FileDetail, PageRange, QueryRequest},
    response::{QueryResult, ReferenceRecord, TokenUsage},
};
