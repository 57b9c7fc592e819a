use std::path::PathBuf;

use super::env::{EnvSource, read_non_empty_env};

const ENV_REQUEST_LOG: &str = "LINKDEX_REQUEST_LOG";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
    /// JSON-lines request log. Logging is off when unset.
    pub request_log_path: Option<PathBuf>,
}

impl LogConfig {
    pub(super) fn from_source(source: EnvSource<'_>) -> Self {
        Self {
            request_log_path: read_non_empty_env(source, ENV_REQUEST_LOG).map(PathBuf::from),
        }
    }
}
