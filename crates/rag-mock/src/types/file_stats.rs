//! File processing types

use serde::{Deserialize, Serialize};

/// Chunk and page counts for a processed file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStats {
    pub chunks: u32,
    pub pages: u32,
}

impl FileStats {
    pub fn new(chunks: u32, pages: u32) -> Self {
        Self { chunks, pages }
    }
}

/// Uploaded file as described by the upload service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    pub file_id: String,
    pub file_path: String,
    pub file_format: String,
}

/// Payload the upload service sends when a file needs processing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileProcessingRequest {
    pub user_id: String,
    #[serde(rename = "fileInfo", alias = "file_info")]
    pub file_info: FileInfo,
}

impl FileProcessingRequest {
    /// Read the request out of an arbitrary payload, if it has this shape
    ///
    /// Any other shape yields `None`; processing never depends on it.
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        Self::deserialize(value).ok()
    }
}
