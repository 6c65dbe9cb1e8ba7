//! Lookup of values in a parsed tree by `/` separated paths.
//!
//! A segment that reads as a non-negative integer indexes into an array,
//! any other segment looks up a key in an object. `a/1` on
//! `{"a": [1, 2, 3]}` selects `2`.

use crate::error::PathError;
use crate::value::{Map, Value};

/// Conversion of a leaf found by [`value_at_path`]. Returns `None` when the
/// value has a different type, in which case the default is used.
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl FromValue for i32 {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_i32()
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(String::from)
    }
}

impl FromValue for Vec<Value> {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_array().cloned()
    }
}

impl FromValue for Map {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_object().cloned()
    }
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

/// Walks `path` from `root`.
///
/// Returns `Ok(None)` when a key is missing or a segment meets a node it
/// cannot descend into. An index past the end of an array is an error.
pub fn lookup<'a>(root: &'a Value, path: &str) -> Result<Option<&'a Value>, PathError> {
    let mut node = root;

    for segment in path.split('/') {
        let next = match (node, segment.parse::<usize>()) {
            (Value::Array(items), Ok(index)) => match items.get(index) {
                Some(item) => Some(item),
                None => {
                    return Err(PathError::IndexOutOfRange {
                        path: path.to_string(),
                        index,
                        len: items.len(),
                    })
                }
            },
            (Value::Object(entries), _) => entries.get(segment),
            _ => None,
        };

        match next {
            Some(value) => node = value,
            None => return Ok(None),
        }
    }

    Ok(Some(node))
}

/// Returns the value at `path` converted to `T`, or `default` when nothing
/// of that type is there.
pub fn value_at_path<T: FromValue>(root: &Value, path: &str, default: T) -> Result<T, PathError> {
    Ok(lookup(root, path)?
        .and_then(T::from_value)
        .unwrap_or(default))
}
