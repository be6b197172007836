use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque layer identifier, unique within one collection response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerId(String);

impl LayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// One layer record as returned by `GET /api/layer/{id}`.
///
/// The server may encode its struct without field tags, so the PascalCase
/// spellings are accepted alongside the camelCase ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    #[serde(alias = "Id")]
    pub id: LayerId,
    #[serde(alias = "Index")]
    pub index: u64,
    #[serde(alias = "Command")]
    pub command: String,
    #[serde(alias = "Size")]
    pub size: u64,
    #[serde(alias = "TreeId")]
    pub tree_id: String,
    /// Absent and `null` both decode to `None`.
    #[serde(alias = "Names", default)]
    pub names: Option<Vec<String>>,
    #[serde(alias = "Digest")]
    pub digest: String,
}

impl Layer {
    /// Names joined for display, or `None` when the record carries none.
    pub fn joined_names(&self) -> Option<String> {
        self.names.as_ref().map(|names| names.join(", "))
    }
}
