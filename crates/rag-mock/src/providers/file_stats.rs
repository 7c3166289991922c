//! File statistics provider trait for uploaded documents

use crate::error::Result;
use crate::types::FileStats;

/// Trait for computing chunk and page counts of an uploaded file
///
/// Implementations:
/// - `MockFileStatsProvider`: random counts, payload ignored
pub trait FileStatsProvider: Send + Sync {
    /// Process the file described by `payload`
    fn process(&self, payload: &serde_json::Value) -> Result<FileStats>;

    /// Get provider name for logging
    fn name(&self) -> &str;
}

/// Parse raw JSON text and hand it to the provider
///
/// Fails with `Error::Json` when `input` is not a JSON document.
pub fn process_file_input<P: FileStatsProvider + ?Sized>(
    provider: &P,
    input: &str,
) -> Result<FileStats> {
    let payload: serde_json::Value = serde_json::from_str(input)?;
    provider.process(&payload)
}
