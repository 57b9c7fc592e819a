use crate::error::Result;
use crate::index::IndexOptions;
use crate::text::{Analyzer, StopWords};

use super::env::{EnvSource, read_env_list, read_env_switch};

const ENV_SEARCH_PREFIX: &str = "LINKDEX_SEARCH_PREFIX";
const ENV_EXTRA_STOP_WORDS: &str = "LINKDEX_EXTRA_STOP_WORDS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub prefix_expansion: bool,
    pub extra_stop_words: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            prefix_expansion: true,
            extra_stop_words: Vec::new(),
        }
    }
}

impl SearchConfig {
    pub(super) fn from_source(source: EnvSource<'_>) -> Result<Self> {
        Ok(Self {
            prefix_expansion: read_env_switch(source, ENV_SEARCH_PREFIX, true)?,
            extra_stop_words: read_env_list(source, ENV_EXTRA_STOP_WORDS),
        })
    }

    #[must_use]
    pub fn analyzer(&self) -> Analyzer {
        Analyzer::new(StopWords::with_extra(&self.extra_stop_words))
    }

    #[must_use]
    pub fn index_options(&self) -> IndexOptions {
        IndexOptions {
            prefix_expansion: self.prefix_expansion,
        }
    }
}
