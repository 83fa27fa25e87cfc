use serde_json::Value;

use crate::collections::{Entry, EntryMeta};
use crate::structured::{faq_extraction, page_documents, step_extraction, Extraction, FaqItem, HowToStep, SchemaSite};

/// Everything derived from one entry for a single render
#[derive(Debug, Clone)]
pub struct Page {
    pub meta: EntryMeta,
    pub steps: Extraction<HowToStep>,
    pub faqs: Extraction<FaqItem>,
}

impl Page {
    pub fn assemble(entry: &Entry, product: &str) -> Self {
        Page {
            meta: entry.meta.clone(),
            steps: step_extraction(&entry.content),
            faqs: faq_extraction(&entry.content, product),
        }
    }

    pub fn documents(&self, site: &SchemaSite<'_>) -> Vec<Value> {
        page_documents(&self.meta, self.steps.items(), self.faqs.items(), site)
    }
}
