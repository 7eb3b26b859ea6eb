//! Unwrapping of the `meta` / `images` envelopes around API payloads.
//!
//! Missing keys mean "nothing there" and yield an empty collection; present
//! keys of the wrong shape are request failures.

use super::types::ImageMap;
use crate::error::{FigmaError, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Follow `path` into `body` and parse the collection found there.
///
/// The collection may be an object keyed by id (document order is kept) or
/// an array.
pub fn collection<T>(body: Value, path: &[&str]) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    let items = match descend(body, path) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Object(map)) => map.into_iter().map(|(_, v)| v).collect::<Vec<_>>(),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(shape_error(path, "a collection", &other));
        }
    };

    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(FigmaError::from))
        .collect()
}

/// Parse the `images` envelope of a render response.
///
/// Nodes the API failed to render come back as `null` and are left out.
pub fn images(body: Value) -> Result<ImageMap> {
    let entries = match descend(body, &["images"]) {
        None | Some(Value::Null) => return Ok(ImageMap::new()),
        Some(Value::Object(map)) => map,
        Some(other) => return Err(shape_error(&["images"], "an object", &other)),
    };

    let mut images = ImageMap::new();
    for (node_id, url) in entries {
        match url {
            Value::String(url) => {
                images.insert(node_id, url);
            }
            Value::Null => {
                tracing::warn!(node_id = %node_id, "Figma returned no image for node");
            }
            other => return Err(shape_error(&["images", node_id.as_str()], "a URL", &other)),
        }
    }
    Ok(images)
}

fn descend(body: Value, path: &[&str]) -> Option<Value> {
    let mut current = body;
    for key in path {
        current = match current {
            Value::Object(mut map) => map.remove(*key)?,
            _ => return None,
        };
    }
    Some(current)
}

fn shape_error(path: &[&str], expected: &str, found: &Value) -> FigmaError {
    let kind = match found {
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
        Value::Null => "null",
    };
    FigmaError::request_failed(format!(
        "expected {} at '{}', found {}",
        expected,
        path.join("."),
        kind
    ))
}
