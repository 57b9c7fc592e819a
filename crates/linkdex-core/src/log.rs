use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Instant;

use chrono::Utc;
use uuid::Uuid;

use crate::error::LinkdexError;
use crate::models::{CollectionKind, RequestLogEntry};

/// Append-only JSON-lines request log. Write failures are swallowed so that
/// logging never fails the request it describes.
#[derive(Debug, Default)]
pub struct RequestLog {
    path: Option<PathBuf>,
    writer: Mutex<()>,
}

impl RequestLog {
    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn to_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            writer: Mutex::new(()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn log_status(
        &self,
        operation: &str,
        status: &str,
        started: Instant,
        collection: Option<CollectionKind>,
        details: Option<serde_json::Value>,
    ) {
        self.try_log(&RequestLogEntry {
            request_id: Uuid::new_v4().to_string(),
            operation: operation.to_string(),
            status: status.to_string(),
            latency_ms: started.elapsed().as_millis(),
            created_at: Utc::now().to_rfc3339(),
            collection: collection.map(|kind| kind.as_str().to_string()),
            error_code: None,
            error_message: None,
            details,
        });
    }

    pub fn log_error(
        &self,
        operation: &str,
        started: Instant,
        collection: Option<CollectionKind>,
        err: &LinkdexError,
        details: Option<serde_json::Value>,
    ) {
        self.try_log(&RequestLogEntry {
            request_id: Uuid::new_v4().to_string(),
            operation: operation.to_string(),
            status: "error".to_string(),
            latency_ms: started.elapsed().as_millis(),
            created_at: Utc::now().to_rfc3339(),
            collection: collection.map(|kind| kind.as_str().to_string()),
            error_code: Some(err.code().to_string()),
            error_message: Some(err.to_string()),
            details,
        });
    }

    fn try_log(&self, entry: &RequestLogEntry) {
        let Some(path) = self.path.as_deref() else {
            return;
        };
        let Ok(mut line) = serde_json::to_string(entry) else {
            return;
        };
        line.push('\n');
        let _guard = self
            .writer
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            let _ = fs::create_dir_all(parent);
        }
        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
            let _ = file.write_all(line.as_bytes());
        }
    }
}

/// Reads back every entry of a request log file, skipping unparsable lines.
pub fn read_request_log(path: &Path) -> crate::error::Result<Vec<RequestLogEntry>> {
    let raw = fs::read_to_string(path)?;
    Ok(raw
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| serde_json::from_str::<RequestLogEntry>(line).ok())
        .collect())
}
