//! Structured data recovered from entry bodies: how-to steps, troubleshooting
//! FAQs, and the JSON-LD documents built from them.

pub mod faq;
pub mod jsonld;
pub mod sections;
pub mod steps;
pub mod types;

pub use faq::{extract_faqs, extract_faqs_for, faq_extraction, FaqCandidate, QuestionForm, DEFAULT_PRODUCT};
pub use jsonld::{page_documents, script_tag, SchemaSite};
pub use sections::find_section;
pub use steps::{extract_steps, step_extraction};
pub use types::{first_match, Extraction, FaqItem, HowToStep, Pattern};
