use crate::utils::error::{Result, TransformError};
use serde_json::{Number, Value};

/// JSON type name as it appears in validation error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "text",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Walks a dotted field path ("address.zipCode") through nested objects.
pub fn lookup_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in path.split('.') {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Resolves a dotted field path, reporting the exact segment that broke:
/// a missing key names the path up to and including that key, a non-object
/// parent names the parent path.
pub fn require_path<'a>(root: &'a Value, path: &str) -> Result<&'a Value> {
    let mut current = root;
    let mut walked: Vec<&str> = Vec::new();
    for segment in path.split('.') {
        let parent = match current.as_object() {
            Some(object) => object,
            None => {
                let field = if walked.is_empty() {
                    "record".to_string()
                } else {
                    walked.join(".")
                };
                return Err(TransformError::invalid_type(
                    &field,
                    "object",
                    json_type_name(current),
                ));
            }
        };
        walked.push(segment);
        current = parent
            .get(segment)
            .ok_or_else(|| TransformError::missing_field(&walked.join(".")))?;
    }
    Ok(current)
}

pub fn require_text(root: &Value, path: &str) -> Result<String> {
    let value = require_path(root, path)?;
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| TransformError::invalid_type(path, "text", json_type_name(value)))
}

pub fn require_number(root: &Value, path: &str) -> Result<Number> {
    let value = require_path(root, path)?;
    match value {
        Value::Number(number) => Ok(number.clone()),
        other => Err(TransformError::invalid_type(
            path,
            "number",
            json_type_name(other),
        )),
    }
}

/// Accepts integers and whole-valued floats (30 and 30.0, but not 30.5).
pub fn require_whole_number(root: &Value, path: &str) -> Result<i64> {
    let value = require_path(root, path)?;
    let Value::Number(number) = value else {
        return Err(TransformError::invalid_type(
            path,
            "whole number",
            json_type_name(value),
        ));
    };
    if let Some(integer) = number.as_i64() {
        return Ok(integer);
    }
    match number.as_f64() {
        Some(float)
            if float.fract() == 0.0 && float >= i64::MIN as f64 && float < i64::MAX as f64 =>
        {
            Ok(float as i64)
        }
        Some(float) if float.fract() != 0.0 => Err(TransformError::invalid_type(
            path,
            "whole number",
            "fractional number",
        )),
        _ => Err(TransformError::invalid_type(
            path,
            "whole number",
            "out-of-range number",
        )),
    }
}

/// Copies a field of any type, for fields carried through verbatim.
pub fn require_value(root: &Value, path: &str) -> Result<Value> {
    require_path(root, path).map(Value::clone)
}
