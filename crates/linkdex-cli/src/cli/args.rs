use std::path::PathBuf;

use clap::{Args, ValueEnum};
use linkdex_core::models::CollectionKind;
use linkdex_core::state::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CollectionArg {
    Links,
    People,
    Keywords,
}

impl CollectionArg {
    pub const fn collection(self) -> CollectionKind {
        self.route().collection()
    }

    pub const fn route(self) -> Route {
        match self {
            Self::Links => Route::Links,
            Self::People => Route::People,
            Self::Keywords => Route::Keywords,
        }
    }
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(value_enum)]
    pub collection: CollectionArg,
    /// Free-text filter; blank shows the whole collection.
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub filter: String,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    #[arg(value_enum)]
    pub collection: CollectionArg,
    #[arg(allow_hyphen_values = true)]
    pub query: String,
}

#[derive(Debug, Args)]
pub struct FilterArg {
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

#[derive(Debug, Args)]
pub struct ReplayArgs {
    /// JSON array of view events.
    pub events: PathBuf,
    /// Location the session starts from.
    #[arg(long, default_value = "/")]
    pub url: String,
    #[arg(long, default_value_t = 1280)]
    pub width: u32,
    #[arg(long, default_value_t = 800)]
    pub height: u32,
}
