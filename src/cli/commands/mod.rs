mod check;
mod export;
mod fix;
mod list;
mod page;
mod related;
mod schema;
mod show;

pub use check::handle_check_command;
pub use export::handle_export_command;
pub use fix::handle_fix_command;
pub use list::handle_list_command;
pub use page::Page;
pub use related::handle_related_command;
pub use schema::handle_schema_command;
pub use show::handle_show_command;

use crate::cli::types::Commands;
use crate::collections::Entry;
use crate::config::Config;
use crate::utils::error::{BoxResult, RecipebookError};

/// Run one parsed command against the loaded configuration
pub fn dispatch(command: &Commands, config: &Config) -> BoxResult<()> {
    match command {
        Commands::List { collection, json } => handle_list_command(config, collection.as_deref(), *json),
        Commands::Show { slug, collection } => handle_show_command(config, slug, collection.as_deref()),
        Commands::Schema { slug, collection } => handle_schema_command(config, slug, collection.as_deref()),
        Commands::Related { slug, collection } => handle_related_command(config, slug, collection.as_deref()),
        Commands::Check { collection } => handle_check_command(config, collection.as_deref()),
        Commands::Fix { collection, dry_run } => handle_fix_command(config, collection.as_deref(), *dry_run),
        Commands::Export { destination } => handle_export_command(config, destination.as_deref()),
    }
}

/// The named collection if configured, else the default one
fn resolve_collection<'a>(config: &'a Config, requested: Option<&'a str>) -> BoxResult<&'a str> {
    match requested {
        Some(name) if config.has_collection(name) => Ok(name),
        Some(name) => Err(RecipebookError::Config(format!(
            "Unknown collection '{}' (configured: {})",
            name,
            config.collections.join(", ")
        )).into()),
        None => Ok(config.default_collection()),
    }
}

/// The named collection, or every configured one
fn selected_collections<'a>(config: &'a Config, requested: Option<&'a str>) -> BoxResult<Vec<&'a str>> {
    match requested {
        Some(_) => Ok(vec![resolve_collection(config, requested)?]),
        None => Ok(config.collections.iter().map(String::as_str).collect()),
    }
}

fn load_entry(config: &Config, collection: &str, slug: &str) -> BoxResult<Entry> {
    let entry = config
        .collection_dir(collection)
        .get_by_slug(slug)
        .ok_or_else(|| RecipebookError::Content(format!(
            "No entry '{}' in collection '{}'", slug, collection
        )))?;
    Ok(entry)
}
