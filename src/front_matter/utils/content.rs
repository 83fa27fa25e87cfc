use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref OPENING_FENCE: Regex = Regex::new(r"(?i)^```(?:markdown|mdx|md)?[ \t]*\r?\n").unwrap();
    static ref CLOSING_FENCE: Regex = Regex::new(r"\r?\n```\s*$").unwrap();
}

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Remove a leading byte-order mark
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text)
}

/// Remove a code fence wrapped around the whole document.
///
/// The closing fence is only removed when an opening fence was found.
pub fn strip_wrapping_fence(text: &str) -> &str {
    let opening = match OPENING_FENCE.find(text) {
        Some(m) => m,
        None => return text,
    };

    let inner = &text[opening.end()..];
    match CLOSING_FENCE.find(inner) {
        Some(closing) => &inner[..closing.start()],
        None => inner,
    }
}

/// Drop whitespace ahead of an opening `---` delimiter
pub fn strip_blank_before_delimiter(text: &str) -> &str {
    let trimmed = text.trim_start();
    if trimmed.starts_with("---") {
        trimmed
    } else {
        text
    }
}

/// Apply every defensive cleaning step, in order, ahead of metadata parsing
pub fn clean_source(raw: &str) -> String {
    let text = strip_bom(raw);
    let text = strip_wrapping_fence(text);
    strip_blank_before_delimiter(text).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_bom() {
        assert_eq!(strip_bom("\u{feff}---\n"), "---\n");
        assert_eq!(strip_bom("---\n"), "---\n");
    }

    #[test]
    fn test_strip_wrapping_fence_variants() {
        assert_eq!(strip_wrapping_fence("```\n---\ntitle: A\n---\nbody\n```"), "---\ntitle: A\n---\nbody");
        assert_eq!(strip_wrapping_fence("```mdx\nbody\n```\n"), "body");
        assert_eq!(strip_wrapping_fence("```Markdown  \r\nbody\r\n```"), "body");
    }

    #[test]
    fn test_fence_with_other_language_is_kept() {
        let text = "```rust\nfn main() {}\n```";
        assert_eq!(strip_wrapping_fence(text), text);
    }

    #[test]
    fn test_closing_fence_alone_is_kept() {
        let text = "---\ntitle: A\n---\nExample:\n```";
        assert_eq!(strip_wrapping_fence(text), text);
    }

    #[test]
    fn test_blank_lines_before_delimiter() {
        assert_eq!(strip_blank_before_delimiter("\n\n  \n---\ntitle: A"), "---\ntitle: A");
        assert_eq!(strip_blank_before_delimiter("\n\nJust text"), "\n\nJust text");
    }

    #[test]
    fn test_clean_source_applies_all_steps() {
        let raw = "\u{feff}```markdown\n\n---\ntitle: A\n---\nBody\n```\n";
        assert_eq!(clean_source(raw), "---\ntitle: A\n---\nBody");
    }
}
