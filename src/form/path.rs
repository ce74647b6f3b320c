//! Dotted field paths
//!
//! Form values, touched flags and errors are JSON trees. A field is addressed
//! by a dot-separated path (`address.street`, `tags.0`); array entries are
//! addressed by their index.

use serde_json::{Map, Value};

/// Separator between path segments
pub const PATH_SEPARATOR: &str = ".";

/// Truthiness of a JSON value, as the form provider evaluates flags
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Whether the field at `path` has been touched.
///
/// Descends one segment at a time; a missing segment anywhere along the way
/// means "not touched". The empty path is never touched.
pub fn resolve_touched(touched: &Value, path: &str) -> bool {
    if path.is_empty() {
        return false;
    }
    let mut current = touched;
    for segment in path.split(PATH_SEPARATOR) {
        match child(current, segment) {
            Some(next) => current = next,
            None => return false,
        }
    }
    is_truthy(current)
}

/// Value at `path`, accepting bracket indices (`items[0].name`).
///
/// `None` when any step along the path is missing.
pub fn get_nested_value<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    get_nested_value_with(value, path, PATH_SEPARATOR)
}

/// Same as [`get_nested_value`] with a custom separator
pub fn get_nested_value_with<'a>(value: &'a Value, path: &str, separator: &str) -> Option<&'a Value> {
    let separator = if separator.is_empty() {
        PATH_SEPARATOR
    } else {
        separator
    };
    let normalized = path.replace('[', separator).replace(']', "");
    normalized
        .split(separator)
        .try_fold(value, |current, segment| child(current, segment))
}

/// Error message for the field at `path`.
///
/// Flat keys (`errors["address.street"]`) win over nested lookups. Falsy
/// entries count as no error; non-string entries are reported as JSON text.
pub fn lookup_error(errors: &Value, path: &str) -> Option<String> {
    let entry = match errors {
        Value::Object(map) => map.get(path),
        _ => None,
    }
    .or_else(|| get_nested_value(errors, path))?;

    if !is_truthy(entry) {
        return None;
    }
    match entry {
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}

/// Write `value` at `path`, creating intermediate objects as needed
pub fn set_nested_value(root: &mut Value, path: &str, value: Value) {
    let segments: Vec<&str> = path.split(PATH_SEPARATOR).collect();
    insert_path(root, &segments, value);
}

fn insert_path(root: &mut Value, path: &[&str], value: Value) {
    let Some((head, rest)) = path.split_first() else {
        *root = value;
        return;
    };

    if let Value::Array(items) = root {
        if let Ok(index) = head.parse::<usize>() {
            if items.len() <= index {
                items.resize(index + 1, Value::Null);
            }
            insert_path(&mut items[index], rest, value);
            return;
        }
    }

    if !root.is_object() {
        *root = Value::Object(Map::new());
    }

    if let Value::Object(map) = root {
        let entry = map.entry(head.to_string()).or_insert(Value::Null);
        insert_path(entry, rest, value);
    }
}

fn child<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|index| items.get(index)),
        _ => None,
    }
}
