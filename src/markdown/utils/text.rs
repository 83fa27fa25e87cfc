use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref FENCE: Regex = Regex::new(r"(?m)^[ \t]*(?:```|~~~).*$").unwrap();
    static ref HEADING: Regex = Regex::new(r"(?m)^[ \t]*#{1,6}[ \t]+").unwrap();
    static ref BULLET: Regex = Regex::new(r"(?m)^[ \t]*[-*+][ \t]+").unwrap();
    static ref ORDERED: Regex = Regex::new(r"(?m)^[ \t]*\d+[.)][ \t]+").unwrap();
    static ref IMAGE: Regex = Regex::new(r"!\[([^\]]*)\]\([^)]*\)").unwrap();
    static ref LINK: Regex = Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap();
    static ref BOLD: Regex = Regex::new(r"\*\*([^*]+)\*\*").unwrap();
    static ref BOLD_UNDERSCORE: Regex = Regex::new(r"__([^_]+)__").unwrap();
    static ref ITALIC: Regex = Regex::new(r"(^|[^\w*])\*([^*\s](?:[^*\n]*[^*\s])?)\*").unwrap();
    static ref STRIKE: Regex = Regex::new(r"~~([^~]+)~~").unwrap();
    static ref CODE: Regex = Regex::new(r"`([^`]+)`").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Remove inline emphasis, link, image and code markup, keeping the inner text
pub fn strip_emphasis(text: &str) -> String {
    let text = IMAGE.replace_all(text, "$1");
    let text = LINK.replace_all(&text, "$1");
    let text = BOLD.replace_all(&text, "$1");
    let text = BOLD_UNDERSCORE.replace_all(&text, "$1");
    let text = ITALIC.replace_all(&text, "${1}${2}");
    let text = STRIKE.replace_all(&text, "$1");
    let text = CODE.replace_all(&text, "$1");
    text.into_owned()
}

/// Normalise markdown prose into plain, single-line text.
///
/// List markers go first so a leading `*` is never paired up as emphasis.
pub fn clean_text(text: &str) -> String {
    let text = FENCE.replace_all(text, "");
    let text = HEADING.replace_all(&text, "");
    let text = BULLET.replace_all(&text, "");
    let text = ORDERED.replace_all(&text, "");
    let text = strip_emphasis(&text);
    WHITESPACE.replace_all(&text, " ").trim().to_string()
}
