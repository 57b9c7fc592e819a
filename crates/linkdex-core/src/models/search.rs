use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionKind {
    Links,
    People,
    Keywords,
}

impl CollectionKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Links => "links",
            Self::People => "people",
            Self::Keywords => "keywords",
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub key: String,
    /// Position of the document in the collection the index was built from.
    pub position: usize,
    pub score: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    EmptyText,
    NoIndexableTokens,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedDocument {
    pub key: String,
    pub position: usize,
    pub reason: SkipReason,
}
