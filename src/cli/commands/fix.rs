use log::{debug, info};

use crate::cli::commands::check::{report_findings, verify_collection, Finding};
use crate::cli::commands::selected_collections;
use crate::config::Config;
use crate::front_matter::quote_risky_scalars;
use crate::utils::error::BoxResult;
use crate::utils::fs;

/// Quote risky metadata in every file of a collection; returns how many
/// files needed it
fn repair_collection(config: &Config, collection: &str, dry_run: bool) -> BoxResult<usize> {
    let dir = config.collection_dir(collection);
    let mut repaired = 0;

    for slug in dir.list_slugs() {
        let file = match dir.resolve(&slug) {
            Some(file) => file,
            None => continue,
        };

        let repair = quote_risky_scalars(&fs::read_file(&file)?);
        if !repair.changed() {
            debug!("Nothing to fix in {}", file.display());
            continue;
        }

        repaired += 1;
        if dry_run {
            println!("would fix {} ({})", file.display(), repair.fixed.join(", "));
        } else {
            fs::write_file(&file, &repair.text)?;
            info!("Fixed {} ({})", file.display(), repair.fixed.join(", "));
        }
    }

    Ok(repaired)
}

/// Handle the fix command
pub fn handle_fix_command(config: &Config, collection: Option<&str>, dry_run: bool) -> BoxResult<()> {
    let collections = selected_collections(config, collection)?;

    let mut repaired = 0;
    for name in &collections {
        repaired += repair_collection(config, name, dry_run)?;
    }
    info!("{} file(s) {}", repaired, if dry_run { "would be fixed" } else { "fixed" });

    // A dry run verifies the repaired text without writing it
    let findings: Vec<Finding> = collections
        .iter()
        .flat_map(|name| verify_collection(config, name, |raw| quote_risky_scalars(&raw).text))
        .collect();

    report_findings(&findings)
}
