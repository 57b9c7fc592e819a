use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use linkdex_core::catalog::EntityTables;
use linkdex_core::state::{Command, Event, Location, Model, Viewport, decode_filter, encode_filter};
use linkdex_core::{AppConfig, Catalog};
use serde_json::{Value, json};

use crate::cli::{Commands, ReplayArgs};

mod support;


use self::support::print_json;

pub(crate) fn run_from_catalog(catalog_path: &Path, command: Commands) -> Result<()> {
    let output = execute(catalog_path, command)?;
    print_json(&output)
}

pub(crate) fn execute(catalog_path: &Path, command: Commands) -> Result<Value> {
    match command {
        Commands::EncodeFilter(arg) => Ok(json!({ "encoded": encode_filter(&arg.value) })),
        Commands::DecodeFilter(arg) => {
            let decoded = decode_filter(&arg.value)?;
            Ok(json!({ "decoded": decoded }))
        }
        command => {
            let config = AppConfig::from_env().context("failed to read configuration")?;
            let catalog = load_catalog(catalog_path, &config)?;
            run_with_catalog(&catalog, &config, command)
        }
    }
}

fn load_catalog(path: &Path, config: &AppConfig) -> Result<Catalog> {
    let tables = EntityTables::load(path)
        .with_context(|| format!("failed to load catalog {}", path.display()))?;
    Catalog::build(tables, config).context("failed to build catalog")
}

fn run_with_catalog(catalog: &Catalog, config: &AppConfig, command: Commands) -> Result<Value> {
    let output = match command {
        Commands::Summary => serde_json::to_value(catalog.summary())?,
        Commands::List(args) => {
            serde_json::to_value(catalog.visible(args.collection.route(), &args.filter))?
        }
        Commands::Search(args) => {
            serde_json::to_value(catalog.search(args.collection.collection(), &args.query))?
        }
        Commands::Missing => serde_json::to_value(catalog.missing())?,
        Commands::Replay(args) => replay(catalog, config, &args)?,
        Commands::EncodeFilter(_) | Commands::DecodeFilter(_) => {
            anyhow::bail!("filter codec commands do not need a catalog")
        }
    };
    Ok(output)
}

fn replay(catalog: &Catalog, config: &AppConfig, args: &ReplayArgs) -> Result<Value> {
    let raw = fs::read_to_string(&args.events)
        .with_context(|| format!("failed to read events {}", args.events.display()))?;
    let events = serde_json::from_str::<Vec<Event>>(&raw).context("invalid events file")?;

    let mut model = Model::init(
        &Location::parse(&args.url),
        Viewport {
            width: args.width,
            height: args.height,
        },
        config.view,
    );
    let mut emitted = Vec::<Command>::new();
    for event in events {
        let (next, commands) = model.update(event);
        model = next;
        emitted.extend(commands);
    }

    Ok(json!({
        "commands": emitted,
        "snapshot": catalog.snapshot(&model),
    }))
}
