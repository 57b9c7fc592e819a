use serde::{Deserialize, Serialize};

use crate::models::CollectionKind;

use super::codec::{decode_filter, encode_filter};

pub const FILTER_PARAM: &str = "q";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    #[default]
    Links,
    People,
    Keywords,
}

impl Route {
    /// Unknown paths land on the links page.
    pub fn from_path(path: &str) -> Self {
        match path.trim_matches('/') {
            "people" => Self::People,
            "keywords" => Self::Keywords,
            _ => Self::Links,
        }
    }

    pub const fn path(self) -> &'static str {
        match self {
            Self::Links => "/",
            Self::People => "/people",
            Self::Keywords => "/keywords",
        }
    }

    pub const fn collection(self) -> CollectionKind {
        match self {
            Self::Links => CollectionKind::Links,
            Self::People => CollectionKind::People,
            Self::Keywords => CollectionKind::Keywords,
        }
    }

    /// Location for this page with `filter` carried in the query string.
    pub fn location(self, filter: &str) -> Location {
        let query = if filter.is_empty() {
            None
        } else {
            Some(format!("{FILTER_PARAM}={}", encode_filter(filter)))
        };
        Location {
            path: self.path().to_string(),
            query,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl Location {
    /// Splits `/path?query#fragment`; the fragment is ignored.
    pub fn parse(raw: &str) -> Self {
        let without_fragment = raw.split('#').next().unwrap_or_default();
        let (path, query) = match without_fragment.split_once('?') {
            Some((path, query)) => (path, Some(query.to_string())),
            None => (without_fragment, None),
        };
        Self {
            path: if path.is_empty() { "/" } else { path }.to_string(),
            query: query.filter(|q| !q.is_empty()),
        }
    }

    pub fn route(&self) -> Route {
        Route::from_path(&self.path)
    }

    /// Raw (still encoded) filter parameter, if present.
    pub fn encoded_filter(&self) -> Option<&str> {
        self.query.as_deref()?.split('&').find_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (key == FILTER_PARAM).then_some(value)
        })
    }

    /// Decoded filter. A missing parameter or a malformed encoding both yield
    /// an empty filter.
    pub fn filter(&self) -> String {
        self.encoded_filter()
            .and_then(|raw| decode_filter(raw).ok())
            .unwrap_or_default()
    }

    pub fn to_url(&self) -> String {
        match &self.query {
            Some(query) => format!("{}?{query}", self.path),
            None => self.path.clone(),
        }
    }
}
