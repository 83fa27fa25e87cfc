use crate::cli::commands::{load_entry, resolve_collection, Page};
use crate::config::Config;
use crate::structured::script_tag;
use crate::utils::error::BoxResult;

/// Handle the schema command
pub fn handle_schema_command(config: &Config, slug: &str, collection: Option<&str>) -> BoxResult<()> {
    let collection = resolve_collection(config, collection)?;
    let entry = load_entry(config, collection, slug)?;
    let page = Page::assemble(&entry, &config.product);

    for document in page.documents(&config.schema_site(collection)) {
        println!("{}", script_tag(&document));
    }
    Ok(())
}
