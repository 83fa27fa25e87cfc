use serde::Deserialize;
use serde_yaml::Value;

/// Render a YAML scalar as a string; `None` for null, empty strings and collections
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Accepts any YAML value and keeps it only if it is a non-empty scalar.
/// Never fails, so one odd field cannot sink the whole block.
pub fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_to_string(&value))
}

/// Accepts a sequence of scalars; anything that is not a sequence yields no tags.
/// Non-scalar items inside the sequence are skipped.
pub fn deserialize_tag_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Sequence(items) => Ok(Some(items.iter().filter_map(scalar_to_string).collect())),
        _ => Ok(None),
    }
}
