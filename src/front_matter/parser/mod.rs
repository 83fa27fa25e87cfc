use log::debug;
use serde_yaml::{Mapping, Value};

use crate::front_matter::types::FrontMatter;
use crate::utils::error::RecipebookError;

const DELIMITER: &str = "---";

/// Whether a line is a bare `---` delimiter (trailing whitespace allowed)
fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}

/// Split text into its raw metadata block and its body.
///
/// Returns `Ok((None, text))` when the text does not open with a delimiter line.
/// An opening delimiter without a matching closing line is a structural error.
pub fn split_front_matter(text: &str) -> Result<(Option<&str>, &str), RecipebookError> {
    let mut lines = text.split_inclusive('\n');

    match lines.next() {
        Some(first) if is_delimiter(first) => {}
        _ => return Ok((None, text)),
    }

    let block_start = text.split_inclusive('\n').next().map_or(0, str::len);
    let mut offset = block_start;

    for line in lines {
        if is_delimiter(line) {
            let block = &text[block_start..offset];
            let body = &text[offset + line.len()..];
            return Ok((Some(block), body));
        }
        offset += line.len();
    }

    Err(RecipebookError::FrontMatter(
        "missing closing delimiter".to_string(),
    ))
}

/// Rewrite scalar keys (`2024:`, `true:`) as strings and drop keys that
/// cannot name a field, so one odd key does not fail the whole block
fn string_keys(mapping: Mapping) -> Mapping {
    mapping
        .into_iter()
        .filter_map(|(key, value)| {
            let key = match key {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                other => {
                    debug!("Ignoring metadata key {:?}", other);
                    return None;
                }
            };
            Some((Value::String(key), value))
        })
        .collect()
}

/// Decode a raw metadata block
pub fn parse_block(block: &str) -> Result<FrontMatter, RecipebookError> {
    if block.trim().is_empty() {
        return Ok(FrontMatter::default());
    }

    let value: Value = serde_yaml::from_str(block)
        .map_err(|e| RecipebookError::FrontMatter(format!("invalid YAML: {}", e)))?;

    match value {
        Value::Null => Ok(FrontMatter::default()),
        Value::Mapping(mapping) => serde_yaml::from_value(Value::Mapping(string_keys(mapping)))
            .map_err(|e| RecipebookError::FrontMatter(format!("unreadable keys: {}", e))),
        _ => Err(RecipebookError::FrontMatter(
            "block is not a key-value mapping".to_string(),
        )),
    }
}

/// Parse front matter and body from already-cleaned text
pub fn parse(text: &str) -> Result<(FrontMatter, String), RecipebookError> {
    let (block, body) = split_front_matter(text)?;

    match block {
        Some(block) => Ok((parse_block(block)?, body.to_string())),
        None => Ok((FrontMatter::default(), text.to_string())),
    }
}
