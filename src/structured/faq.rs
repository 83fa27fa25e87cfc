use lazy_static::lazy_static;
use regex::Regex;

use crate::markdown::{clean_text, strip_emphasis};
use crate::structured::sections::{find_section, scan, shallowest_heading, split_items, Boundary};
use crate::structured::types::{first_match, Extraction, FaqItem, Pattern};

lazy_static! {
    static ref ORDINAL: Regex = Regex::new(r"^\d+[.)]\s*").unwrap();
    static ref BULLET_BOLD: Regex = Regex::new(r"^[-*+][ \t]+\*\*([^*]+)\*\*[:\s]*(.*)$").unwrap();
    static ref NUMBERED_BOLD: Regex = Regex::new(r"^\d+[.)][ \t]+\*\*([^*]+)\*\*[:\s]*(.*)$").unwrap();
    static ref PARENTHETICAL: Regex = Regex::new(r"\s*\([^)]*\)").unwrap();
    static ref ANY_LABEL: Regex = Regex::new(r"^[ \t]*(?:[-*+][ \t]+)?\*\*").unwrap();
    static ref WHY_LABEL: Regex = label_regex("why it happens");
    static ref FIX_LABEL: Regex = label_regex("how to fix(?: it)?");
    static ref SOLUTION_LABEL: Regex = label_regex("solution");
}

/// Heading fragments that introduce the troubleshooting section
pub const FAQ_MARKERS: [&str; 2] = ["troubleshooting", "common errors"];

/// Product named in synthesised questions unless configured otherwise
pub const DEFAULT_PRODUCT: &str = "Excel";

/// Answers shorter than this carry no useful information
pub const MIN_ANSWER_CHARS: usize = 20;

/// FAQ patterns, in the order they are tried
pub const FAQ_PATTERNS: [Pattern<FaqCandidate>; 3] = [
    ("sub-headings", heading_faqs),
    ("bulleted-errors", bullet_faqs),
    ("numbered-errors", numbered_faqs),
];

fn label_regex(label: &str) -> Regex {
    Regex::new(&format!(
        r"(?i)^[ \t]*(?:[-*+][ \t]+)?\*\*\s*{}\s*:?\s*\*\*\s*:?\s*(.*)$",
        label
    ))
    .unwrap()
}

/// Shape of the synthesised question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionForm {
    /// "What does the X mean ..."
    Meaning,
    /// "What causes the X error ..."
    Cause,
    /// "How do I fix "X" ..."
    Fix,
}

impl QuestionForm {
    pub fn question(self, subject: &str, product: &str) -> String {
        match self {
            QuestionForm::Meaning => {
                format!("What does the {} mean in {} and how do I fix it?", subject, product)
            }
            QuestionForm::Cause if subject.to_lowercase().ends_with("error") => {
                format!("What causes the {} in {} and how do I fix it?", subject, product)
            }
            QuestionForm::Cause => {
                format!("What causes the {} error in {} and how do I fix it?", subject, product)
            }
            QuestionForm::Fix => format!("How do I fix \"{}\" in {}?", subject, product),
        }
    }
}

/// A matched FAQ before the question is worded for a product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqCandidate {
    pub form: QuestionForm,
    pub subject: String,
    pub answer: String,
}

impl FaqCandidate {
    pub fn into_item(self, product: &str) -> FaqItem {
        FaqItem {
            question: self.form.question(&self.subject, product),
            answer: self.answer,
        }
    }
}

fn candidate(form: QuestionForm, subject: String, answer: String) -> Option<FaqCandidate> {
    if subject.is_empty() || answer.chars().count() < MIN_ANSWER_CHARS {
        return None;
    }
    Some(FaqCandidate { form, subject, answer })
}

fn clean_subject(raw: &str) -> String {
    strip_emphasis(raw)
        .replace("**", "")
        .trim()
        .trim_end_matches(':')
        .trim()
        .to_string()
}

/// `**1. #N/A Error**` → `#N/A Error`; emphasis goes first so a bold ordinal is seen
fn heading_subject(raw: &str) -> String {
    ORDINAL.replace(&clean_subject(raw), "").trim().to_string()
}

/// `**`#N/A` (Not Found!):**` → `#N/A`
fn error_token(raw: &str) -> String {
    let without_note = PARENTHETICAL.replace_all(raw, "");
    clean_subject(&without_note).replace('`', "")
}

/// Text following a bold `label` up to the next bold label, heading or rule
pub fn labeled_part(body: &str, label: &Regex) -> Option<String> {
    let lines = scan(body);
    let start = lines.iter().position(|line| !line.in_code && label.is_match(line.text))?;
    let caps = label.captures(lines[start].text)?;

    let mut parts = vec![caps.get(1).map_or("", |m| m.as_str())];
    for line in &lines[start + 1..] {
        if !line.in_code && (line.heading.is_some() || line.is_rule() || ANY_LABEL.is_match(line.text)) {
            break;
        }
        parts.push(line.text);
    }

    let text = clean_text(&parts.join("\n"));
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Combine "why it happens" and "how to fix it" parts, else the whole body
fn compose_answer(body: &str) -> String {
    let why = labeled_part(body, &WHY_LABEL);
    let fix = labeled_part(body, &FIX_LABEL);

    match (why, fix) {
        (Some(why), Some(fix)) => format!(
            "This happens because {}. To fix it: {}",
            why.trim_end_matches('.'),
            fix
        ),
        (Some(why), None) => format!("This happens because {}.", why.trim_end_matches('.')),
        (None, Some(fix)) => fix,
        (None, None) => clean_text(body),
    }
}

/// One sub-heading per error
pub fn heading_faqs(section: &str) -> Vec<FaqCandidate> {
    let lines = scan(section);
    let level = match shallowest_heading(&lines) {
        Some(level) => level,
        None => return Vec::new(),
    };

    split_items(
        &lines,
        |line| match line.heading {
            Some(h) if h.level == level => Some((heading_subject(h.text), "")),
            _ => None,
        },
        Boundary { heading_level: Some(level), blank_run: None },
    )
    .into_iter()
    .filter_map(|(subject, body)| candidate(QuestionForm::Meaning, subject, compose_answer(&body)))
    .collect()
}

/// Top-level bullets opening with a bold error token
pub fn bullet_faqs(section: &str) -> Vec<FaqCandidate> {
    let lines = scan(section);

    split_items(
        &lines,
        |line| {
            let caps = BULLET_BOLD.captures(line.text)?;
            let rest = caps.get(2).map_or("", |m| m.as_str());
            Some((error_token(&caps[1]), rest))
        },
        Boundary { heading_level: None, blank_run: None },
    )
    .into_iter()
    .filter_map(|(token, body)| {
        let answer = labeled_part(&body, &SOLUTION_LABEL).unwrap_or_else(|| clean_text(&body));
        candidate(QuestionForm::Cause, token, answer)
    })
    .collect()
}

/// Top-level numbered items opening with a bold title
pub fn numbered_faqs(section: &str) -> Vec<FaqCandidate> {
    let lines = scan(section);

    split_items(
        &lines,
        |line| {
            let caps = NUMBERED_BOLD.captures(line.text)?;
            let rest = caps.get(2).map_or("", |m| m.as_str());
            Some((clean_subject(&caps[1]), rest))
        },
        Boundary { heading_level: None, blank_run: None },
    )
    .into_iter()
    .filter_map(|(title, body)| candidate(QuestionForm::Fix, title, compose_answer(&body)))
    .collect()
}

/// Locate the troubleshooting section and run the FAQ patterns over it
pub fn faq_extraction(body: &str, product: &str) -> Extraction<FaqItem> {
    match find_section(body, &FAQ_MARKERS) {
        Some(section) => first_match(&section, &FAQ_PATTERNS).map(|c| c.into_item(product)),
        None => Extraction::Empty,
    }
}

/// FAQs for the default product; empty when there is no troubleshooting section
pub fn extract_faqs(body: &str) -> Vec<FaqItem> {
    extract_faqs_for(body, DEFAULT_PRODUCT)
}

/// FAQs with questions naming `product`; empty when there is no troubleshooting section
pub fn extract_faqs_for(body: &str, product: &str) -> Vec<FaqItem> {
    faq_extraction(body, product).into_items()
}
