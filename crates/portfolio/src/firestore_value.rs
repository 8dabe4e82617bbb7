//! Conversion between plain JSON and Firestore's typed value encoding.
//!
//! Firestore's REST API wraps every value in a single-key object naming its
//! type, e.g. `{"stringValue": "x"}` or `{"arrayValue": {"values": [...]}}`.

use serde_json::{Map, Number, Value, json};

use crate::{errors::StoreError, models::Payload};

/// Encodes a single JSON value.
///
/// Fails on integers outside Firestore's int64 range instead of rounding
/// them to a double.
pub fn encode_value(value: &Value) -> Result<Value, StoreError> {
    Ok(match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) => encode_number(n)?,
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(items) => {
            let values = items
                .iter()
                .map(encode_value)
                .collect::<Result<Vec<_>, _>>()?;
            json!({ "arrayValue": { "values": values } })
        }
        Value::Object(map) => json!({ "mapValue": { "fields": encode_fields(map)? } }),
    })
}

// Firestore integers are int64 and travel as decimal strings.
fn encode_number(n: &Number) -> Result<Value, StoreError> {
    if let Some(i) = n.as_i64() {
        Ok(json!({ "integerValue": i.to_string() }))
    } else if n.is_u64() {
        Err(StoreError::Unrepresentable(format!(
            "integer {n} exceeds the int64 range"
        )))
    } else {
        n.as_f64()
            .map(|f| json!({ "doubleValue": f }))
            .ok_or_else(|| StoreError::Unrepresentable(format!("number {n}")))
    }
}

/// Encodes every field of a document body.
pub fn encode_fields(fields: &Payload) -> Result<Map<String, Value>, StoreError> {
    fields
        .iter()
        .map(|(name, value)| encode_value(value).map(|v| (name.clone(), v)))
        .collect()
}

/// Decodes a single typed value back into plain JSON.
pub fn decode_value(value: &Value) -> Result<Value, StoreError> {
    let obj = value
        .as_object()
        .ok_or_else(|| StoreError::Decode(format!("expected typed value object, got {value}")))?;
    let (kind, inner) = match obj.iter().next() {
        Some(entry) if obj.len() == 1 => entry,
        _ => {
            return Err(StoreError::Decode(format!(
                "expected exactly one value type, got {value}"
            )));
        }
    };

    match kind.as_str() {
        "nullValue" => Ok(Value::Null),
        "booleanValue" => inner
            .as_bool()
            .map(Value::Bool)
            .ok_or_else(|| StoreError::Decode(format!("bad booleanValue {inner}"))),
        "integerValue" => decode_integer(inner),
        "doubleValue" => decode_double(inner),
        "stringValue" | "timestampValue" | "referenceValue" | "bytesValue" => inner
            .as_str()
            .map(|s| Value::String(s.to_string()))
            .ok_or_else(|| StoreError::Decode(format!("bad {kind} {inner}"))),
        "geoPointValue" => Ok(inner.clone()),
        "arrayValue" => {
            let values = match inner.get("values") {
                None => return Ok(Value::Array(Vec::new())),
                Some(Value::Array(values)) => values,
                Some(other) => {
                    return Err(StoreError::Decode(format!("bad arrayValue {other}")));
                }
            };
            values
                .iter()
                .map(decode_value)
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array)
        }
        "mapValue" => match inner.get("fields") {
            None => Ok(Value::Object(Map::new())),
            Some(Value::Object(fields)) => decode_fields(fields).map(Value::Object),
            Some(other) => Err(StoreError::Decode(format!("bad mapValue {other}"))),
        },
        other => Err(StoreError::Decode(format!("unknown value type {other}"))),
    }
}

fn decode_integer(inner: &Value) -> Result<Value, StoreError> {
    let parsed = match inner {
        Value::String(s) => s.parse::<i64>().ok(),
        Value::Number(n) => n.as_i64(),
        _ => None,
    };
    parsed
        .map(|i| Value::Number(i.into()))
        .ok_or_else(|| StoreError::Decode(format!("bad integerValue {inner}")))
}

// Firestore returns non-finite doubles as the strings "NaN", "Infinity" and
// "-Infinity". JSON numbers cannot hold them, so they decode to those strings.
fn decode_double(inner: &Value) -> Result<Value, StoreError> {
    match inner {
        Value::String(s) if matches!(s.as_str(), "NaN" | "Infinity" | "-Infinity") => {
            Ok(Value::String(s.clone()))
        }
        _ => inner
            .as_f64()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| StoreError::Decode(format!("bad doubleValue {inner}"))),
    }
}

/// Decodes the `fields` map of a document.
pub fn decode_fields(fields: &Map<String, Value>) -> Result<Payload, StoreError> {
    fields
        .iter()
        .map(|(name, value)| decode_value(value).map(|v| (name.clone(), v)))
        .collect()
}

/// Decodes a full REST document resource. A document without `fields` is empty.
pub fn decode_document(document: &Value) -> Result<Payload, StoreError> {
    match document.get("fields") {
        None => Ok(Map::new()),
        Some(Value::Object(fields)) => decode_fields(fields),
        Some(other) => Err(StoreError::Decode(format!("bad document fields {other}"))),
    }
}
