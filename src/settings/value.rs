//! Value coercion plumbing shared by preprocessors, validators, and typed
//! accessors.
//!
//! Settings hold `serde_json::Value` so the snapshot is JSON-serializable by
//! construction. Collaborators frequently deliver strings (environment
//! variables, settings files), so the helpers here normalize string input
//! into the target scalar types.

use std::path::PathBuf;

use serde_json::Value;

/// Parse a boolean from its common string spellings, case-insensitive.
///
/// Accepts `true/false`, `yes/no`, `on/off`, and `1/0`. Returns `None` for
/// anything else.
pub fn str_as_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Coerce a value to a boolean: native booleans pass through, strings go
/// through [`str_as_bool`].
pub fn as_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => str_as_bool(s),
        _ => None,
    }
}

/// Coerce a value to an integer: native integers pass through, strings are
/// parsed.
pub fn as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Coerce a value to a float: native numbers pass through, strings are
/// parsed.
pub fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Borrow a value as a string slice.
pub fn as_str(value: &Value) -> Option<&str> {
    value.as_str()
}

/// Coerce a value to a list of strings.
///
/// Arrays must contain only strings; a bare string becomes a single-element
/// list (comma splitting is a preprocessor concern, not a read concern).
pub fn as_string_list(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect(),
        Value::String(s) => Some(vec![s.clone()]),
        _ => None,
    }
}

/// Split a comma-separated string into trimmed, non-empty parts.
pub fn split_commas(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join path components onto a base, skipping empty parts.
pub fn join_path(base: &str, parts: &[&str]) -> String {
    let mut path = PathBuf::from(base);
    for part in parts {
        if !part.is_empty() {
            path.push(part);
        }
    }
    path.to_string_lossy().into_owned()
}

/// Expand a leading `~` to the user's home directory.
///
/// Returns the input unchanged when it has no `~` prefix or the home
/// directory cannot be determined.
pub fn expand_user(path: &str) -> String {
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home.to_string_lossy().into_owned();
        }
    } else if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest).to_string_lossy().into_owned();
        }
    }
    path.to_string()
}
