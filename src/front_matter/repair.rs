//! Quoting repair for hand-written metadata blocks.
//!
//! Unquoted `title:`/`description:` values containing `:` or `'` are the
//! most common reason a block fails to parse; they are rewritten as
//! double-quoted scalars.

use lazy_static::lazy_static;
use regex::Regex;

use super::utils::content::{strip_bom, strip_wrapping_fence};

lazy_static! {
    static ref RISKY_SCALAR: Regex = Regex::new(r"^(title|description):([ \t]+)(.*)$").unwrap();
}

/// Result of a repair pass over one file
#[derive(Debug, Clone, PartialEq)]
pub struct Repair {
    /// Repaired file text
    pub text: String,
    /// Keys whose values were quoted, in file order
    pub fixed: Vec<String>,
}

impl Repair {
    pub fn changed(&self) -> bool {
        !self.fixed.is_empty()
    }
}

fn needs_quoting(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty()
        && !value.starts_with('"')
        && !value.starts_with('\'')
        && !value.starts_with('|')
        && !value.starts_with('>')
        && (value.contains(':') || value.contains('\''))
}

fn quote(value: &str) -> String {
    let escaped = value.trim().replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

/// Quote risky scalars inside the leading metadata block only; the body is never touched
pub fn quote_risky_scalars(raw: &str) -> Repair {
    // The prefix (BOM, opening fence, blank lines) is carried over verbatim.
    let cleaned = strip_wrapping_fence(strip_bom(raw)).trim_start();
    let prefix_len = cleaned.as_ptr() as usize - raw.as_ptr() as usize;

    let mut text = String::with_capacity(raw.len() + 16);
    let mut fixed = Vec::new();
    text.push_str(&raw[..prefix_len]);

    let mut lines = raw[prefix_len..].split_inclusive('\n');
    let mut in_block = false;

    if let Some(first) = lines.next() {
        in_block = first.trim_end() == "---";
        text.push_str(first);
    }

    for line in lines {
        if !in_block {
            text.push_str(line);
            continue;
        }

        let content = line.trim_end_matches(&['\n', '\r'][..]);
        let ending = &line[content.len()..];

        if content.trim_end() == "---" {
            in_block = false;
            text.push_str(line);
            continue;
        }

        match RISKY_SCALAR.captures(content) {
            Some(caps) if needs_quoting(&caps[3]) => {
                fixed.push(caps[1].to_string());
                text.push_str(&caps[1]);
                text.push(':');
                text.push_str(&caps[2]);
                text.push_str(&quote(&caps[3]));
                text.push_str(ending);
            }
            _ => text.push_str(line),
        }
    }

    Repair { text, fixed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::front_matter::parser::parse;

    #[test]
    fn test_quotes_colon_and_apostrophe() {
        let raw = "---\ntitle: VLOOKUP: The Complete Guide\ndescription: Excel's favourite lookup\ntags: [lookup]\n---\nBody\n";
        let repair = quote_risky_scalars(raw);

        assert_eq!(repair.fixed, vec!["title".to_string(), "description".to_string()]);
        assert!(repair.text.contains("title: \"VLOOKUP: The Complete Guide\"\n"));
        assert!(repair.text.contains("description: \"Excel's favourite lookup\"\n"));

        let (front_matter, body) = parse(&repair.text).unwrap();
        assert_eq!(front_matter.title, Some("VLOOKUP: The Complete Guide".to_string()));
        assert_eq!(body, "Body\n");
    }

    #[test]
    fn test_already_quoted_values_are_untouched() {
        let raw = "---\ntitle: \"A: B\"\ndescription: 'It''s fine'\n---\n";
        let repair = quote_risky_scalars(raw);
        assert!(!repair.changed());
        assert_eq!(repair.text, raw);
    }

    #[test]
    fn test_embedded_double_quotes_are_escaped() {
        let raw = "---\ntitle: Use \"IF\": a primer\n---\n";
        let repair = quote_risky_scalars(raw);
        assert!(repair.text.contains(r#"title: "Use \"IF\": a primer""#));
        let (front_matter, _) = parse(&repair.text).unwrap();
        assert_eq!(front_matter.title, Some("Use \"IF\": a primer".to_string()));
    }

    #[test]
    fn test_body_lines_are_never_rewritten() {
        let raw = "---\ntitle: Plain\n---\ntitle: looks like: metadata\n";
        let repair = quote_risky_scalars(raw);
        assert!(!repair.changed());
        assert_eq!(repair.text, raw);
    }

    #[test]
    fn test_prefix_is_preserved() {
        let raw = "\u{feff}\n---\r\ntitle: A: B\r\n---\r\nBody";
        let repair = quote_risky_scalars(raw);
        assert_eq!(repair.text, "\u{feff}\n---\r\ntitle: \"A: B\"\r\n---\r\nBody");
    }
}
