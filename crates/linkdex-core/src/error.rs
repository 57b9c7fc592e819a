use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

pub type Result<T> = std::result::Result<T, LinkdexError>;

/// Failure of a single free-text query. Recovered locally as "no results".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("query has no searchable terms")]
    EmptyQuery,
}

#[derive(Debug, Error)]
pub enum LinkdexError {
    #[error("index key collision in {collection} index: {key}")]
    IndexKeyCollision { collection: String, key: String },

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("malformed filter encoding: {0}")]
    MalformedFilter(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("unsupported catalog format: {0}")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_norway::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
    pub operation: String,
    pub trace_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl LinkdexError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::IndexKeyCollision { .. } => "INDEX_KEY_COLLISION",
            Self::Query(_) => "QUERY_ERROR",
            Self::MalformedFilter(_) => "MALFORMED_FILTER",
            Self::Validation(_) => "VALIDATION_FAILED",
            Self::UnsupportedFormat(_) => "UNSUPPORTED_FORMAT",
            Self::Io(_) => "IO_ERROR",
            Self::Json(_) => "JSON_ERROR",
            Self::Yaml(_) => "YAML_ERROR",
            Self::Toml(_) => "TOML_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn to_payload(&self, operation: impl Into<String>) -> ErrorPayload {
        let details = match self {
            Self::IndexKeyCollision { collection, key } => Some(serde_json::json!({
                "collection": collection,
                "key": key,
            })),
            _ => None,
        };
        ErrorPayload {
            code: self.code().to_string(),
            message: self.to_string(),
            operation: operation.into(),
            trace_id: Uuid::new_v4().to_string(),
            details,
        }
    }
}
