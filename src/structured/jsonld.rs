//! JSON-LD documents for search-engine rich results.

use serde_json::{json, Value};

use crate::collections::EntryMeta;
use crate::structured::types::{FaqItem, HowToStep};

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Site-level values the documents need
#[derive(Debug, Clone, Copy)]
pub struct SchemaSite<'a> {
    /// Base URL without a trailing slash
    pub site_url: &'a str,
    pub site_name: &'a str,
    /// Collection the entry lives in, used in step URLs
    pub collection: &'a str,
    pub tool_name: &'a str,
    /// ISO-8601 duration
    pub total_time: &'a str,
}

impl<'a> SchemaSite<'a> {
    fn base(&self) -> &'a str {
        self.site_url.trim_end_matches('/')
    }

    pub fn entry_url(&self, slug: &str) -> String {
        format!("{}/{}/{}", self.base(), self.collection, slug)
    }

    pub fn image_url(&self, slug: &str) -> String {
        format!("{}/og/{}.png", self.base(), slug)
    }
}

fn organization(name: &str) -> Value {
    json!({ "@type": "Organization", "name": name })
}

pub fn article(meta: &EntryMeta, site: &SchemaSite<'_>) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Article",
        "headline": meta.title,
        "description": meta.description,
        "datePublished": meta.date.format("%Y-%m-%d").to_string(),
        "url": site.entry_url(&meta.slug),
        "author": organization(site.site_name),
        "publisher": organization(site.site_name),
    })
}

/// `None` when there are no steps
pub fn how_to(meta: &EntryMeta, steps: &[HowToStep], site: &SchemaSite<'_>) -> Option<Value> {
    if steps.is_empty() {
        return None;
    }

    let entry_url = site.entry_url(&meta.slug);
    let step: Vec<Value> = steps
        .iter()
        .enumerate()
        .map(|(i, step)| {
            json!({
                "@type": "HowToStep",
                "position": i + 1,
                "name": step.name,
                "text": step.text,
                "url": format!("{}#step-{}", entry_url, i + 1),
            })
        })
        .collect();

    Some(json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "HowTo",
        "name": meta.title,
        "description": meta.description,
        "datePublished": meta.date.format("%Y-%m-%d").to_string(),
        "image": site.image_url(&meta.slug),
        "totalTime": site.total_time,
        "tool": [{ "@type": "HowToTool", "name": site.tool_name }],
        "step": step,
    }))
}

/// `None` when there are no FAQs
pub fn faq_page(faqs: &[FaqItem]) -> Option<Value> {
    if faqs.is_empty() {
        return None;
    }

    let main_entity: Vec<Value> = faqs
        .iter()
        .map(|faq| {
            json!({
                "@type": "Question",
                "name": faq.question,
                "acceptedAnswer": { "@type": "Answer", "text": faq.answer },
            })
        })
        .collect();

    Some(json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "FAQPage",
        "mainEntity": main_entity,
    }))
}

/// Article first, then HowTo and FAQPage when present
pub fn page_documents(
    meta: &EntryMeta,
    steps: &[HowToStep],
    faqs: &[FaqItem],
    site: &SchemaSite<'_>,
) -> Vec<Value> {
    let mut documents = vec![article(meta, site)];
    documents.extend(how_to(meta, steps, site));
    documents.extend(faq_page(faqs));
    documents
}

/// Wrap a document in a script element. `<` is escaped so text inside the
/// document cannot close the element early.
pub fn script_tag(document: &Value) -> String {
    format!(
        "<script type=\"application/ld+json\">{}</script>",
        document.to_string().replace('<', "\\u003c")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn site() -> SchemaSite<'static> {
        SchemaSite {
            site_url: "https://example.com/",
            site_name: "Example Cookbook",
            collection: "recipes",
            tool_name: "Microsoft Excel",
            total_time: "PT5M",
        }
    }

    fn meta() -> EntryMeta {
        EntryMeta {
            slug: "vlookup".to_string(),
            title: "VLOOKUP".to_string(),
            description: "Find things".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            tags: vec!["lookup".to_string()],
        }
    }

    fn steps() -> Vec<HowToStep> {
        vec![
            HowToStep { name: "Select".to_string(), text: "Pick a cell.".to_string() },
            HowToStep { name: "Type".to_string(), text: "Enter =VLOOKUP(A2, B:C, 2, FALSE).".to_string() },
        ]
    }

    #[test]
    fn test_article_always_present() {
        let documents = page_documents(&meta(), &[], &[], &site());
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0]["@type"], "Article");
        assert_eq!(documents[0]["datePublished"], "2024-03-01");
        assert_eq!(documents[0]["publisher"]["name"], "Example Cookbook");
    }

    #[test]
    fn test_how_to_positions_and_urls() {
        let doc = how_to(&meta(), &steps(), &site()).unwrap();

        assert_eq!(doc["image"], "https://example.com/og/vlookup.png");
        assert_eq!(doc["totalTime"], "PT5M");
        assert_eq!(doc["tool"][0]["name"], "Microsoft Excel");
        assert_eq!(doc["step"][0]["position"], 1);
        assert_eq!(doc["step"][1]["position"], 2);
        assert_eq!(doc["step"][1]["url"], "https://example.com/recipes/vlookup#step-2");
    }

    #[test]
    fn test_empty_inputs_produce_no_document() {
        assert!(how_to(&meta(), &[], &site()).is_none());
        assert!(faq_page(&[]).is_none());
    }

    #[test]
    fn test_faq_page() {
        let faqs = vec![FaqItem {
            question: "What causes the #N/A error in Excel and how do I fix it?".to_string(),
            answer: "The value is missing.".to_string(),
        }];
        let documents = page_documents(&meta(), &steps(), &faqs, &site());

        assert_eq!(documents.len(), 3);
        assert_eq!(documents[2]["@type"], "FAQPage");
        assert_eq!(documents[2]["mainEntity"][0]["acceptedAnswer"]["text"], "The value is missing.");
    }

    #[test]
    fn test_script_tag_escapes_angle_brackets() {
        let mut m = meta();
        m.title = "</script><b>x".to_string();
        let tag = script_tag(&article(&m, &site()));

        assert!(tag.starts_with("<script type=\"application/ld+json\">"));
        assert!(tag.ends_with("</script>"));
        assert_eq!(tag.matches("</script>").count(), 1);
        assert!(tag.contains("\\u003c/script>\\u003cb>x"));
    }
}
