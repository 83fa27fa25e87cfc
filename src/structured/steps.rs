use lazy_static::lazy_static;
use regex::Regex;

use crate::markdown::{clean_text, strip_emphasis};
use crate::structured::sections::{find_section, scan, shallowest_heading, split_items, Boundary};
use crate::structured::types::{first_match, Extraction, HowToStep, Pattern};

lazy_static! {
    static ref NUMBERED_BOLD: Regex = Regex::new(r"^\s*\d+\.\s+\*\*([^*]+)\*\*[:\s]*(.*)$").unwrap();
    static ref STEP_PREFIX: Regex = Regex::new(r"(?i)^step\s*\d+\s*[:.)\-–—]?\s*").unwrap();
}

/// Heading fragments that introduce the instructions section
pub const RECIPE_MARKERS: [&str; 3] = ["recipe", "step-by-step", "step by step"];

/// Step patterns, in the order they are tried
pub const STEP_PATTERNS: [Pattern<HowToStep>; 2] = [
    ("numbered-list", numbered_steps),
    ("sub-headings", heading_steps),
];

const STEP_BOUNDARY_BLANKS: usize = 2;

fn clean_name(raw: &str) -> String {
    let name = strip_emphasis(raw.trim());
    name.trim()
        .trim_end_matches(|c| c == ':' || c == '`')
        .replace('`', "")
        .trim()
        .to_string()
}

fn into_step(name: String, body: &str) -> Option<HowToStep> {
    let text = clean_text(body);
    if name.is_empty() || text.is_empty() {
        return None;
    }
    Some(HowToStep { name, text })
}

/// `1. **Name:** text` items; the bold run is the name, the rest of the item the text
pub fn numbered_steps(section: &str) -> Vec<HowToStep> {
    let lines = scan(section);
    let items = split_items(
        &lines,
        |line| {
            let caps = NUMBERED_BOLD.captures(line.text)?;
            let rest = caps.get(2).map_or("", |m| m.as_str());
            Some((clean_name(&caps[1]), rest))
        },
        Boundary { heading_level: None, blank_run: Some(STEP_BOUNDARY_BLANKS) },
    );

    items
        .into_iter()
        .filter_map(|(name, body)| into_step(name, &body))
        .collect()
}

/// `### Step 1: Name` sub-headings, each followed by its text
pub fn heading_steps(section: &str) -> Vec<HowToStep> {
    let lines = scan(section);
    let level = match shallowest_heading(&lines) {
        Some(level) => level,
        None => return Vec::new(),
    };

    let items = split_items(
        &lines,
        |line| match line.heading {
            Some(h) if h.level == level => {
                let stripped = STEP_PREFIX.replace(h.text, "");
                let name = if stripped.trim().is_empty() { h.text.into() } else { stripped };
                Some((clean_name(&name), ""))
            }
            _ => None,
        },
        Boundary { heading_level: Some(level), blank_run: Some(STEP_BOUNDARY_BLANKS) },
    );

    items
        .into_iter()
        .filter_map(|(name, body)| into_step(name, &body))
        .collect()
}

/// Locate the instructions section and run the step patterns over it
pub fn step_extraction(body: &str) -> Extraction<HowToStep> {
    match find_section(body, &RECIPE_MARKERS) {
        Some(section) => first_match(&section, &STEP_PATTERNS),
        None => Extraction::Empty,
    }
}

/// Steps of the first recognisable instructions section; empty when there is none
pub fn extract_steps(body: &str) -> Vec<HowToStep> {
    step_extraction(body).into_items()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(name: &str, text: &str) -> HowToStep {
        HowToStep { name: name.to_string(), text: text.to_string() }
    }

    #[test]
    fn test_example_scenario() {
        let body = "## The Recipe\n1. **Open the Formula Bar:** Click cell A1 and type the formula.\n2. **Press Enter:** Confirm the formula.";
        assert_eq!(
            extract_steps(body),
            vec![
                step("Open the Formula Bar", "Click cell A1 and type the formula."),
                step("Press Enter", "Confirm the formula."),
            ]
        );
    }

    #[test]
    fn test_three_bold_items_in_order_without_markup() {
        let body = "\
Intro text.

## Recipe

1.  **Select the range** Highlight `A2:A10` with your *mouse*.
2.  **Type the formula:** Enter `=SUM(A2:A10)` in [the bar](https://example.com).
    *   Tip: use **AutoSum** instead.
3.  **Check the result:** The total appears.

## Troubleshooting
Nothing here.
";
        let steps = extract_steps(body);

        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].name, "Select the range");
        assert_eq!(steps[1].name, "Type the formula");
        assert_eq!(steps[2].name, "Check the result");
        assert_eq!(steps[1].text, "Enter =SUM(A2:A10) in the bar. Tip: use AutoSum instead.");
        for s in &steps {
            assert!(!s.text.contains("**"));
            assert!(!s.text.contains('`'));
            assert!(!s.text.contains('\n'));
        }
    }

    #[test]
    fn test_sub_heading_steps_fallback() {
        let body = "\
## Step-by-Step Instructions

### Step 1: Find the Product Name
Use **VLOOKUP** to search the table.

### Step 2 - Return the Price
1. Point at column `C`.

### Step 3
Copy down.
";
        let extraction = step_extraction(body);
        assert_eq!(extraction.pattern(), Some("sub-headings"));
        assert_eq!(
            extraction.into_items(),
            vec![
                step("Find the Product Name", "Use VLOOKUP to search the table."),
                step("Return the Price", "Point at column C."),
                step("Step 3", "Copy down."),
            ]
        );
    }

    #[test]
    fn test_no_section_is_empty() {
        assert!(extract_steps("## Overview\n1. **Do:** it").is_empty());
        assert!(extract_steps("").is_empty());
        assert_eq!(step_extraction("just prose"), Extraction::Empty);
    }

    #[test]
    fn test_steps_without_text_are_dropped() {
        let body = "## The Recipe\n1. **Empty:**\n2. **Full:** Has text.";
        assert_eq!(extract_steps(body), vec![step("Full", "Has text.")]);
    }

    #[test]
    fn test_two_blank_lines_end_a_step() {
        let body = "## The Recipe\n1. **Only:** First line.\n\n\nUnrelated closing remark.";
        assert_eq!(extract_steps(body), vec![step("Only", "First line.")]);
    }

    #[test]
    fn test_code_blocks_do_not_break_steps() {
        let body = "## The Recipe\n1. **Write it:** Enter:\n```\n## =IF(A1>0, 1, 0)\n```\n2. **Done:** Finished.";
        let steps = extract_steps(body);
        assert_eq!(steps.len(), 2);
        assert!(steps[0].text.contains("=IF(A1>0, 1, 0)"));
    }

    #[test]
    fn test_rule_ends_section_items() {
        let body = "## The Recipe\n1. **Go:** Now.\n---\nFooter text";
        assert_eq!(extract_steps(body), vec![step("Go", "Now.")]);
    }
}
