use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordId(pub String);

impl PersonId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl KeywordId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for KeywordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author_ids: Vec<PersonId>,
    #[serde(default)]
    pub keyword_ids: Vec<KeywordId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub id: PersonId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRecord {
    pub id: KeywordId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A row of a lookup table that links reference by id.
pub trait CatalogEntity {
    type Id: Clone + Eq + Hash + fmt::Debug + fmt::Display;

    fn id(&self) -> &Self::Id;
    fn display_name(&self) -> &str;
}

impl CatalogEntity for PersonRecord {
    type Id = PersonId;

    fn id(&self) -> &PersonId {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

impl CatalogEntity for KeywordRecord {
    type Id = KeywordId;

    fn id(&self) -> &KeywordId {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

/// A resolved entity and the number of link references to it. `quantity >= 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WithQuantity<T> {
    pub lookup: T,
    pub quantity: usize,
}

impl<T: CatalogEntity> WithQuantity<T> {
    pub fn display_name(&self) -> &str {
        self.lookup.display_name()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregate<T: CatalogEntity> {
    /// Natural-sorted by display name.
    pub resolved: Vec<WithQuantity<T>>,
    /// First-appearance order across the link list.
    pub missing: Vec<T::Id>,
}

impl<T: CatalogEntity> Default for Aggregate<T> {
    fn default() -> Self {
        Self {
            resolved: Vec::new(),
            missing: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MissingReferences {
    pub people: Vec<PersonId>,
    pub keywords: Vec<KeywordId>,
}

impl MissingReferences {
    pub fn is_empty(&self) -> bool {
        self.people.is_empty() && self.keywords.is_empty()
    }
}
