//! Model identifiers offered by the answering service

use serde::{Deserialize, Serialize};

/// Model identifiers the service exposes to users
///
/// The mock answers for any model name; this list only lets callers tell
/// whether a name would be understood by a real provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KnownModel {
    #[serde(rename = "gpt-4o")]
    Gpt4o,
    #[serde(rename = "gpt-4o-mini")]
    Gpt4oMini,
    #[serde(rename = "llama3-70b-8192")]
    Llama3_70b,
    #[serde(rename = "llama3-8b-8192")]
    Llama3_8b,
    #[serde(rename = "gemini-1.5-flash")]
    Gemini15Flash,
    #[serde(rename = "default")]
    Default,
}

impl KnownModel {
    pub const ALL: [KnownModel; 6] = [
        Self::Gpt4o,
        Self::Gpt4oMini,
        Self::Llama3_70b,
        Self::Llama3_8b,
        Self::Gemini15Flash,
        Self::Default,
    ];

    /// Wire identifier of the model
    pub fn id(&self) -> &'static str {
        match self {
            Self::Gpt4o => "gpt-4o",
            Self::Gpt4oMini => "gpt-4o-mini",
            Self::Llama3_70b => "llama3-70b-8192",
            Self::Llama3_8b => "llama3-8b-8192",
            Self::Gemini15Flash => "gemini-1.5-flash",
            Self::Default => "default",
        }
    }

    /// Look up a model by its wire identifier
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.id() == id)
    }
}

impl std::fmt::Display for KnownModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
