//! Configuration for the mock providers

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Placeholder file name attached to every fabricated reference
pub const DEFAULT_REFERENCE_FILE_NAME: &str = "MockFileName.pdf";

/// Placeholder file identifier attached to every fabricated reference
pub const DEFAULT_REFERENCE_FILE_ID: &str = "66f3eee573a67e2b182fff42";

/// Main mock configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct MockConfig {
    /// Query answering configuration
    #[serde(default)]
    pub query: QueryMockConfig,
    /// File statistics configuration
    #[serde(default)]
    pub file_stats: FileStatsMockConfig,
}

impl MockConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&raw)?;
        tracing::debug!(path = %path.display(), "Loaded mock configuration");
        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every range is usable
    pub fn validate(&self) -> Result<()> {
        self.query.validate()?;
        self.file_stats.validate()
    }
}

/// Inclusive `[min, max]` range a mock value is drawn from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RangeConfig {
    pub min: u32,
    pub max: u32,
}

impl RangeConfig {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies in the range
    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn validate(&self, name: &str) -> Result<()> {
        if self.min > self.max {
            return Err(Error::config(format!(
                "{}: min ({}) is greater than max ({})",
                name, self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Query answering configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueryMockConfig {
    /// Page numbers for fabricated references (default: 1-10)
    #[serde(default = "default_page_range")]
    pub page_range: RangeConfig,
    /// Input token count (default: 100-500)
    #[serde(default = "default_input_tokens")]
    pub input_tokens: RangeConfig,
    /// Output token count (default: 50-200)
    #[serde(default = "default_output_tokens")]
    pub output_tokens: RangeConfig,
    /// File name on every reference
    #[serde(default = "default_reference_file_name")]
    pub reference_file_name: String,
    /// File ID on every reference
    #[serde(default = "default_reference_file_id")]
    pub reference_file_id: String,
}

fn default_page_range() -> RangeConfig {
    RangeConfig::new(1, 10)
}

fn default_input_tokens() -> RangeConfig {
    RangeConfig::new(100, 500)
}

fn default_output_tokens() -> RangeConfig {
    RangeConfig::new(50, 200)
}

fn default_reference_file_name() -> String {
    DEFAULT_REFERENCE_FILE_NAME.to_string()
}

fn default_reference_file_id() -> String {
    DEFAULT_REFERENCE_FILE_ID.to_string()
}

impl Default for QueryMockConfig {
    fn default() -> Self {
        Self {
            page_range: default_page_range(),
            input_tokens: default_input_tokens(),
            output_tokens: default_output_tokens(),
            reference_file_name: default_reference_file_name(),
            reference_file_id: default_reference_file_id(),
        }
    }
}

impl QueryMockConfig {
    pub fn validate(&self) -> Result<()> {
        self.page_range.validate("query.page_range")?;
        if self.page_range.min == 0 {
            return Err(Error::config("query.page_range: page numbers start at 1"));
        }
        self.input_tokens.validate("query.input_tokens")?;
        self.output_tokens.validate("query.output_tokens")
    }
}

/// File statistics configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FileStatsMockConfig {
    /// Chunk count (default: 1-10)
    #[serde(default = "default_chunks")]
    pub chunks: RangeConfig,
    /// Page count (default: 1-100)
    #[serde(default = "default_pages")]
    pub pages: RangeConfig,
}

fn default_chunks() -> RangeConfig {
    RangeConfig::new(1, 10)
}

fn default_pages() -> RangeConfig {
    RangeConfig::new(1, 100)
}

impl Default for FileStatsMockConfig {
    fn default() -> Self {
        Self {
            chunks: default_chunks(),
            pages: default_pages(),
        }
    }
}

impl FileStatsMockConfig {
    pub fn validate(&self) -> Result<()> {
        self.chunks.validate("file_stats.chunks")?;
        self.pages.validate("file_stats.pages")
    }
}
