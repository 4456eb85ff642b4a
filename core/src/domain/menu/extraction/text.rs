use serde_json::Value;
use thiserror::Error;

/// Deepest nesting accepted while flattening an external JSON document.
pub const MAX_FLATTEN_DEPTH: usize = 64;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FlattenError {
    #[error("document nested deeper than {0} levels")]
    DepthExceeded(usize),
}

/// Collapses every whitespace run to a single space and trims the ends.
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Appends every scalar leaf of `value` to `out`, depth-first.
///
/// Object values are visited in document order and keys are skipped. `null`
/// leaves contribute nothing.
pub fn flatten_strings(value: &Value, out: &mut Vec<String>) -> Result<(), FlattenError> {
    flatten_at(value, out, 0)
}

fn flatten_at(value: &Value, out: &mut Vec<String>, depth: usize) -> Result<(), FlattenError> {
    if depth > MAX_FLATTEN_DEPTH {
        return Err(FlattenError::DepthExceeded(MAX_FLATTEN_DEPTH));
    }

    match value {
        Value::Null => {}
        Value::String(s) => out.push(s.clone()),
        Value::Number(n) => out.push(n.to_string()),
        Value::Bool(b) => out.push(b.to_string()),
        Value::Array(items) => {
            for item in items {
                flatten_at(item, out, depth + 1)?;
            }
        }
        Value::Object(map) => {
            for item in map.values() {
                flatten_at(item, out, depth + 1)?;
            }
        }
    }

    Ok(())
}

/// Flattens a document into normalized, non-empty lines.
pub fn flatten_to_lines(value: &Value) -> Result<Vec<String>, FlattenError> {
    let mut leaves = Vec::new();
    flatten_strings(value, &mut leaves)?;

    Ok(leaves
        .iter()
        .map(|leaf| normalize_text(leaf))
        .filter(|line| !line.is_empty())
        .collect())
}
