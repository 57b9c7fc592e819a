use crate::error::Result;

mod env;
mod log;
mod search;
mod view;

pub use log::LogConfig;
pub use search::SearchConfig;
pub use view::ViewConfig;

pub(crate) use env::EnvSource;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub view: ViewConfig,
    pub log: LogConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_source(&|name| std::env::var(name).ok())
    }

    pub(crate) fn from_source(source: EnvSource<'_>) -> Result<Self> {
        Ok(Self {
            search: SearchConfig::from_source(source)?,
            view: ViewConfig::from_source(source)?,
            log: LogConfig::from_source(source),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn source(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = AppConfig::from_source(&|_| None).expect("config");
        assert_eq!(config, AppConfig::default());
        assert!(config.search.prefix_expansion);
        assert_eq!(config.view.cell_px, 56);
        assert_eq!(config.view.narrow_cell_px, 50);
        assert_eq!(config.view.narrow_breakpoint_px, 475);
        assert!(config.log.request_log_path.is_none());
    }

    #[test]
    fn values_are_read_from_the_source() {
        let vars = source(&[
            ("LINKDEX_SEARCH_PREFIX", "off"),
            ("LINKDEX_EXTRA_STOP_WORDS", "talk, conf ,,"),
            ("LINKDEX_CELL_PX", "64"),
            ("LINKDEX_REQUEST_LOG", " /tmp/linkdex.jsonl "),
        ]);
        let config = AppConfig::from_source(&|name| vars.get(name).cloned()).expect("config");
        assert!(!config.search.prefix_expansion);
        assert_eq!(config.search.extra_stop_words, vec!["talk", "conf"]);
        assert_eq!(config.view.cell_px, 64);
        assert_eq!(
            config.log.request_log_path.as_deref(),
            Some(std::path::Path::new("/tmp/linkdex.jsonl"))
        );
    }

    #[test]
    fn invalid_switch_is_a_validation_error() {
        let vars = source(&[("LINKDEX_SEARCH_PREFIX", "sometimes")]);
        assert!(AppConfig::from_source(&|name| vars.get(name).cloned()).is_err());
    }

    #[test]
    fn zero_cell_width_is_rejected() {
        let vars = source(&[("LINKDEX_NARROW_CELL_PX", "0")]);
        assert!(AppConfig::from_source(&|name| vars.get(name).cloned()).is_err());
    }
}
