//! Line-level scanning of markdown bodies: headings, fenced code, and
//! splitting a section into items.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// An ATX heading (`## Text`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading<'a> {
    pub level: usize,
    pub text: &'a str,
}

/// One line of a body, classified
#[derive(Debug, Clone, Copy)]
pub struct Line<'a> {
    pub text: &'a str,
    pub heading: Option<Heading<'a>>,
    /// Inside a fenced code block, fence lines included
    pub in_code: bool,
}

impl<'a> Line<'a> {
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// A thematic break outside code
    pub fn is_rule(&self) -> bool {
        !self.in_code && matches!(self.text.trim(), "---" | "***" | "___")
    }
}

/// Parse an ATX heading; the hashes must be followed by whitespace or end the line
pub fn parse_heading(line: &str) -> Option<Heading<'_>> {
    let trimmed = line.trim_start();
    if line.len() - trimmed.len() > 3 {
        return None;
    }

    let level = trimmed.chars().take_while(|c| *c == '#').count();
    if level == 0 || level > 6 {
        return None;
    }

    let rest = &trimmed[level..];
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let text = rest.trim();
    let text = match text.trim_end_matches('#') {
        stripped if stripped.is_empty() || stripped.ends_with(char::is_whitespace) => stripped.trim_end(),
        _ => text,
    };
    Some(Heading { level, text })
}

fn is_fence(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("```") || trimmed.starts_with("~~~")
}

/// Classify every line of `text`
pub fn scan(text: &str) -> Vec<Line<'_>> {
    let mut in_code = false;

    text.lines()
        .map(|raw| {
            if is_fence(raw) {
                in_code = !in_code;
                return Line { text: raw, heading: None, in_code: true };
            }

            let heading = if in_code { None } else { parse_heading(raw) };
            Line { text: raw, heading, in_code }
        })
        .collect()
}

/// Join lines back into text
pub fn join(lines: &[Line<'_>]) -> String {
    lines.iter().map(|line| line.text).collect::<Vec<_>>().join("\n")
}

/// Whether a heading's text names one of `markers` (lower-case, single-spaced)
pub fn heading_matches(text: &str, markers: &[&str]) -> bool {
    let normalised = WHITESPACE.replace_all(&text.to_lowercase(), " ").into_owned();
    markers.iter().any(|marker| normalised.contains(marker))
}

/// Locate the first level-2-or-deeper heading naming one of `markers` and
/// return the text beneath it, up to the next heading of the same or a higher
/// level. Trailing blank lines and thematic breaks are dropped.
pub fn find_section(body: &str, markers: &[&str]) -> Option<String> {
    let lines = scan(body);

    let (start, level) = lines.iter().enumerate().find_map(|(i, line)| match line.heading {
        Some(h) if h.level >= 2 && heading_matches(h.text, markers) => Some((i, h.level)),
        _ => None,
    })?;

    let rest = &lines[start + 1..];
    let end = rest
        .iter()
        .position(|line| matches!(line.heading, Some(h) if h.level <= level))
        .unwrap_or(rest.len());

    let mut section = &rest[..end];
    while let Some((last, init)) = section.split_last() {
        if last.is_blank() || last.is_rule() {
            section = init;
        } else {
            break;
        }
    }

    Some(join(section))
}

/// Smallest heading level present outside code, if any
pub fn shallowest_heading(lines: &[Line<'_>]) -> Option<usize> {
    lines.iter().filter_map(|line| line.heading.map(|h| h.level)).min()
}

/// How an item's body is terminated besides the next item
#[derive(Debug, Clone, Copy)]
pub struct Boundary {
    /// Headings at or above this level end the item; `None` means any heading
    pub heading_level: Option<usize>,
    /// End the item after this many consecutive blank lines
    pub blank_run: Option<usize>,
}

impl Boundary {
    fn ends_at(&self, line: &Line<'_>) -> bool {
        if line.is_rule() {
            return true;
        }
        match (line.heading, self.heading_level) {
            (Some(_), None) => true,
            (Some(h), Some(level)) => h.level <= level,
            (None, _) => false,
        }
    }
}

/// Split lines into items. `start` recognises a line opening a new item and
/// returns its head plus any text that follows the head on the same line.
/// Lines before the first item are ignored.
pub fn split_items<'a, T, S>(lines: &[Line<'a>], start: S, boundary: Boundary) -> Vec<(T, String)>
where
    S: Fn(&Line<'a>) -> Option<(T, &'a str)>,
{
    let mut items = Vec::new();
    let mut current: Option<(T, Vec<&'a str>)> = None;
    let mut blanks = 0;

    fn flush<T>(items: &mut Vec<(T, String)>, current: &mut Option<(T, Vec<&str>)>) {
        if let Some((head, body)) = current.take() {
            items.push((head, body.join("\n")));
        }
    }

    for line in lines {
        if !line.in_code {
            if let Some((head, seed)) = start(line) {
                flush(&mut items, &mut current);
                current = Some((head, vec![seed]));
                blanks = 0;
                continue;
            }
        }

        let body = match current.as_mut() {
            Some((_, body)) => body,
            None => continue,
        };

        if !line.in_code && boundary.ends_at(line) {
            flush(&mut items, &mut current);
            continue;
        }

        if line.is_blank() && !line.in_code {
            blanks += 1;
            if boundary.blank_run.map_or(false, |limit| blanks >= limit) {
                flush(&mut items, &mut current);
                continue;
            }
        } else {
            blanks = 0;
        }

        body.push(line.text);
    }

    flush(&mut items, &mut current);
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_heading() {
        assert_eq!(parse_heading("## The Recipe"), Some(Heading { level: 2, text: "The Recipe" }));
        assert_eq!(parse_heading("### Step 1 ###"), Some(Heading { level: 3, text: "Step 1" }));
        assert_eq!(parse_heading("### C#"), Some(Heading { level: 3, text: "C#" }));
        assert_eq!(parse_heading("#N/A means not found"), None);
        assert_eq!(parse_heading("####### too deep"), None);
        assert_eq!(parse_heading("    ## indented code"), None);
        assert_eq!(parse_heading("plain"), None);
    }

    #[test]
    fn test_headings_inside_fences_are_ignored() {
        let lines = scan("```\n## not a heading\n```\n## real");
        assert!(lines[1].heading.is_none());
        assert!(lines[1].in_code);
        assert_eq!(lines[3].heading.map(|h| h.text), Some("real"));
    }

    #[test]
    fn test_find_section_stops_at_same_level() {
        let body = "## Intro\nHi\n## The Recipe\n1. one\n### Detail\nmore\n## Next\nafter";
        let section = find_section(body, &["recipe"]).unwrap();
        assert_eq!(section, "1. one\n### Detail\nmore");
    }

    #[test]
    fn test_find_section_is_case_insensitive_and_trims_rule() {
        let body = "## STEP-BY-STEP Guide\n\nDo it.\n\n---\n";
        assert_eq!(find_section(body, &["step-by-step"]).unwrap(), "\nDo it.");
    }

    #[test]
    fn test_find_section_requires_level_two() {
        assert!(find_section("# Recipe Book\ntext", &["recipe"]).is_none());
        assert!(find_section("## Overview\ntext", &["recipe"]).is_none());
    }

    #[test]
    fn test_heading_matches_collapses_spaces() {
        assert!(heading_matches("**Common   Errors** & Fixes", &["common errors"]));
        assert!(!heading_matches("Errors are common", &["common errors"]));
    }

    #[test]
    fn test_split_items_respects_blank_run() {
        let lines = scan("1. a\nmore a\n\n\nstray\n1. b");
        let items = split_items(
            &lines,
            |line| line.text.strip_prefix("1. ").map(|rest| (rest.to_string(), "")),
            Boundary { heading_level: None, blank_run: Some(2) },
        );

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].0, "a");
        assert_eq!(items[0].1.trim(), "more a");
        assert_eq!(items[1].0, "b");
    }
}
