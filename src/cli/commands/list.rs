use log::info;

use crate::cli::commands::resolve_collection;
use crate::config::Config;
use crate::utils::error::BoxResult;

/// Handle the list command
pub fn handle_list_command(config: &Config, collection: Option<&str>, json: bool) -> BoxResult<()> {
    let collection = resolve_collection(config, collection)?;
    let entries = config.collection_dir(collection).list_all();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        info!("No entries in collection '{}'", collection);
    }

    for entry in &entries {
        println!("{}  {:<40}  {}", entry.date, entry.slug, entry.title);
    }
    Ok(())
}
