//! Provider abstractions for answering queries and processing files
//!
//! The traits are the seams where a retrieval-augmented answerer and a real
//! document chunker plug in. The `mock` implementations fabricate results.

pub mod answer;
pub mod file_stats;
pub mod mock;

pub use answer::{process_query, AnswerProvider};
pub use file_stats::{process_file_input, FileStatsProvider};
pub use mock::{MockAnswerProvider, MockFileStatsProvider};
