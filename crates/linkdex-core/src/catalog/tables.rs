use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LinkdexError, Result};
use crate::models::{CatalogEntity, KeywordRecord, LinkRecord, PersonRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Yaml,
    Toml,
}

impl CatalogFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("toml") => Ok(Self::Toml),
            _ => Err(LinkdexError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// The three static tables a catalog is derived from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityTables {
    #[serde(default)]
    pub links: Vec<LinkRecord>,
    #[serde(default)]
    pub people: Vec<PersonRecord>,
    #[serde(default)]
    pub keywords: Vec<KeywordRecord>,
}

impl EntityTables {
    pub fn load(path: &Path) -> Result<Self> {
        let format = CatalogFormat::from_path(path)?;
        let raw = fs::read_to_string(path)?;
        Self::parse(&raw, format)
    }

    pub fn parse(raw: &str, format: CatalogFormat) -> Result<Self> {
        let tables = match format {
            CatalogFormat::Json => serde_json::from_str::<Self>(raw)?,
            CatalogFormat::Yaml => serde_norway::from_str::<Self>(raw)?,
            CatalogFormat::Toml => toml::from_str::<Self>(raw)?,
        };
        Ok(tables)
    }

    /// Builds the id-keyed lookups, rejecting duplicate ids.
    pub fn lookups(&self) -> Result<(EntityTable<PersonRecord>, EntityTable<KeywordRecord>)> {
        Ok((
            EntityTable::from_records(self.people.clone())?,
            EntityTable::from_records(self.keywords.clone())?,
        ))
    }
}

#[derive(Debug, Clone)]
pub struct EntityTable<T: CatalogEntity> {
    rows: HashMap<T::Id, T>,
}

impl<T: CatalogEntity> EntityTable<T> {
    pub fn from_records(records: Vec<T>) -> Result<Self> {
        let mut rows = HashMap::with_capacity(records.len());
        for record in records {
            let id = record.id().clone();
            if rows.contains_key(&id) {
                return Err(LinkdexError::Validation(format!(
                    "duplicate id in lookup table: {id}"
                )));
            }
            rows.insert(id, record);
        }
        Ok(Self { rows })
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.rows.get(id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
