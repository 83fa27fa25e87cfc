use serde::Serialize;

use crate::cli::commands::{load_entry, resolve_collection, Page};
use crate::collections::EntryMeta;
use crate::config::Config;
use crate::structured::{Extraction, FaqItem, HowToStep};
use crate::utils::error::BoxResult;

/// Extracted items together with the pattern that produced them
#[derive(Serialize)]
struct Matched<'a, T> {
    pattern: Option<&'static str>,
    items: &'a [T],
}

impl<'a, T> Matched<'a, T> {
    fn new(extraction: &'a Extraction<T>) -> Self {
        Matched {
            pattern: extraction.pattern(),
            items: extraction.items(),
        }
    }
}

#[derive(Serialize)]
struct ShowReport<'a> {
    collection: &'a str,
    #[serde(flatten)]
    meta: &'a EntryMeta,
    steps: Matched<'a, HowToStep>,
    faqs: Matched<'a, FaqItem>,
}

/// Handle the show command
pub fn handle_show_command(config: &Config, slug: &str, collection: Option<&str>) -> BoxResult<()> {
    let collection = resolve_collection(config, collection)?;
    let entry = load_entry(config, collection, slug)?;
    let page = Page::assemble(&entry, &config.product);

    let report = ShowReport {
        collection,
        meta: &page.meta,
        steps: Matched::new(&page.steps),
        faqs: Matched::new(&page.faqs),
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
