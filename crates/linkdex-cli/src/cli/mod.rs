use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod args;


pub use args::{CollectionArg, FilterArg, ListArgs, ReplayArgs, SearchArgs};

#[derive(Debug, Parser)]
#[command(name = "linkdex")]
#[command(about = "Browse and search a static catalog of links, people and keywords", version)]
pub struct Cli {
    /// Catalog file (`.json`, `.yaml`/`.yml` or `.toml`).
    #[arg(long, default_value = "catalog.json")]
    pub catalog: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Collection sizes, missing references and skipped documents.
    Summary,
    List(ListArgs),
    Search(SearchArgs),
    Missing,
    EncodeFilter(FilterArg),
    DecodeFilter(FilterArg),
    Replay(ReplayArgs),
}
