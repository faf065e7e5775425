//! Conversion between [`Value`] and JSON.
//!
//! JSON has no symbols, tuples, sets, tags, non-string map keys, or
//! integers beyond double precision, so values that need any of those
//! are encoded as objects with a `"_type"` member:
//!
//! ```text
//! {"_type":"symbol","value":"name"}
//! {"_type":"integer","value":"123456789012345678901"}
//! {"_type":"tuple","elements":[...],"tag":"T"}
//! {"_type":"map","elements":[[k,v],...]}
//! ```
//!
//! The reverse mapping never fails on unfamiliar shapes. An object it
//! does not recognise becomes a plain map, since the input may be
//! arbitrary JSON from elsewhere.

use serde_json::{Map as JsonMap, Number, Value as Json};

use crate::error::{Result, SyntaxError};
use crate::reader::Location;
use crate::symbol::Symbol;
use crate::value::{Integer, Map, OrderedMap, Set, Tuple, Value};

/// Integers in `-MAX_SAFE_INTEGER..=MAX_SAFE_INTEGER` are exact as JSON
/// numbers in every common implementation.
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

const TYPE_KEY: &str = "_type";
const ELEMENTS_KEY: &str = "elements";
const TAG_KEY: &str = "tag";
const VALUE_KEY: &str = "value";

// ---------------------------------------------------------------------------
// Value to JSON
// ---------------------------------------------------------------------------

/// Map `value` to its JSON representation.
pub fn value_to_json(value: &Value) -> Json {
    match value {
        Value::Symbol(s) if s.is_null() => Json::Null,
        Value::Symbol(s) => match s.as_bool() {
            Some(b) => Json::Bool(b),
            None => typed_scalar("symbol", s.name()),
        },
        Value::Integer(i) => match i.to_i64() {
            Some(n) if (-MAX_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&n) => Json::from(n),
            _ => typed_scalar("integer", &i.to_string()),
        },
        Value::String(s) => Json::String(s.clone()),

        Value::Sequence(s) => Json::Array(s.iter().map(value_to_json).collect()),
        Value::TaggedSequence(t, s) => typed_elements("sequence", Some(*t), json_array(s.iter())),
        Value::Tuple(s) => typed_elements("tuple", None, json_array(s.iter())),
        Value::TaggedTuple(t, s) => typed_elements("tuple", Some(*t), json_array(s.iter())),
        Value::Set(s) if s.is_empty() => Json::Object(JsonMap::new()),
        Value::Set(s) => typed_elements("set", None, json_array(s.iter())),
        Value::TaggedSet(t, s) => typed_elements("set", Some(*t), json_array(s.iter())),

        Value::Map(m) if m.is_empty() => Json::Object(JsonMap::new()),
        Value::Map(m) if m.keys().all(Value::is_string) => {
            let mut object = JsonMap::new();
            for (k, v) in m {
                if let Value::String(key) = k {
                    object.insert(key.clone(), value_to_json(v));
                }
            }
            Json::Object(object)
        }
        Value::Map(m) => typed_elements("map", None, json_pairs(m.iter())),
        Value::TaggedMap(t, m) => typed_elements("map", Some(*t), json_pairs(m.iter())),
        Value::OrderedMap(m) => typed_elements("ordered map", None, json_pairs(m.iter())),
        Value::TaggedOrderedMap(t, m) => {
            typed_elements("ordered map", Some(*t), json_pairs(m.iter()))
        }
    }
}

fn json_array<'v>(elements: impl Iterator<Item = &'v Value>) -> Json {
    Json::Array(elements.map(value_to_json).collect())
}

fn json_pairs<'v>(entries: impl Iterator<Item = (&'v Value, &'v Value)>) -> Json {
    Json::Array(
        entries
            .map(|(k, v)| Json::Array(vec![value_to_json(k), value_to_json(v)]))
            .collect(),
    )
}

fn typed_scalar(type_name: &str, value: &str) -> Json {
    let mut object = JsonMap::new();
    object.insert(TYPE_KEY.to_owned(), Json::from(type_name));
    object.insert(VALUE_KEY.to_owned(), Json::from(value));
    Json::Object(object)
}

/// `{"_type":…,"elements":…,"tag":…}`, members in that order.
fn typed_elements(type_name: &str, tag: Option<Symbol>, elements: Json) -> Json {
    let mut object = JsonMap::new();
    object.insert(TYPE_KEY.to_owned(), Json::from(type_name));
    object.insert(ELEMENTS_KEY.to_owned(), elements);
    if let Some(tag) = tag {
        object.insert(TAG_KEY.to_owned(), Json::from(tag.name()));
    }
    Json::Object(object)
}

// ---------------------------------------------------------------------------
// JSON to Value
// ---------------------------------------------------------------------------

/// Map JSON back to a value, reversing [`value_to_json`] where the
/// encoding is recognised.
pub fn json_to_value(json: &Json) -> Value {
    match json {
        Json::Null => Value::null(),
        Json::Bool(b) => Value::from(*b),
        Json::Number(n) => number_to_value(n),
        Json::String(s) => Value::from(s.as_str()),
        Json::Array(elements) => Value::seq(elements.iter().map(json_to_value)),
        Json::Object(object) if object.is_empty() => Value::map([]),
        Json::Object(object) => decode_typed_object(object).unwrap_or_else(|| {
            tracing::trace!(members = object.len(), "treating JSON object as a plain map");
            plain_map(object)
        }),
    }
}

fn number_to_value(n: &Number) -> Value {
    if let Some(small) = n.as_i64() {
        return Value::from(small);
    }
    let text = n.to_string();
    match Integer::from_decimal(&text) {
        Some(integer) => Value::Integer(integer),
        None => {
            tracing::debug!(number = %text, "JSON number is not an integer; keeping its text");
            Value::String(text)
        }
    }
}

fn plain_map(object: &JsonMap<String, Json>) -> Value {
    Value::Map(
        object
            .iter()
            .map(|(k, v)| (Value::from(k.as_str()), json_to_value(v)))
            .collect(),
    )
}

/// Decode an object with a recognised `"_type"`, or `None`.
fn decode_typed_object(object: &JsonMap<String, Json>) -> Option<Value> {
    let type_name = object.get(TYPE_KEY)?.as_str()?;
    // A `"tag"` that is not a string is ignored.
    let tag = match object.get(TAG_KEY) {
        Some(Json::String(name)) => Some(Symbol::new(name)),
        _ => None,
    };

    let value = match type_name {
        "symbol" => return Some(Value::symbol(object.get(VALUE_KEY)?.as_str()?)),
        "integer" => {
            let digits = object.get(VALUE_KEY)?.as_str()?;
            return Integer::from_decimal(digits).map(Value::Integer);
        }
        "sequence" => Value::seq(elements_of(object)?.iter().map(json_to_value)),
        "tuple" => Value::Tuple(elements_of(object)?.iter().map(json_to_value).collect::<Tuple>()),
        "set" => Value::Set(elements_of(object)?.iter().map(json_to_value).collect::<Set>()),
        "map" => Value::Map(pairs_of(object)?.collect::<Map>()),
        "ordered map" => Value::OrderedMap(pairs_of(object)?.collect::<OrderedMap>()),
        _ => return None,
    };

    Some(match tag {
        Some(tag) => value.with_tag(tag),
        None => value,
    })
}

fn elements_of(object: &JsonMap<String, Json>) -> Option<&Vec<Json>> {
    object.get(ELEMENTS_KEY)?.as_array()
}

/// The `[key, value]` pairs of an `"elements"` array, keeping only the
/// first occurrence of each key. `None` unless every element is a
/// two-element array.
fn pairs_of(
    object: &JsonMap<String, Json>,
) -> Option<impl Iterator<Item = (Value, Value)> + '_> {
    let elements = elements_of(object)?;
    let mut pairs = Vec::with_capacity(elements.len());
    for element in elements {
        match element.as_array().map(Vec::as_slice) {
            Some([k, v]) => pairs.push((k, v)),
            _ => return None,
        }
    }

    let mut seen = std::collections::BTreeSet::new();
    Some(pairs.into_iter().filter_map(move |(k, v)| {
        let key = json_to_value(k);
        if seen.contains(&key) {
            None
        } else {
            seen.insert(key.clone());
            Some((key, json_to_value(v)))
        }
    }))
}

// ---------------------------------------------------------------------------
// JSON text
// ---------------------------------------------------------------------------

/// Compact JSON text for `value`.
pub fn to_json_string(value: &Value) -> String {
    value_to_json(value).to_string()
}

/// Indented JSON text for `value`.
pub fn to_json_string_pretty(value: &Value) -> String {
    format!("{:#}", value_to_json(value))
}

/// Parse JSON text and map it to a value.
pub fn from_json_str(text: &str) -> Result<Value> {
    let json: Json = serde_json::from_str(text).map_err(|e| json_syntax_error(text, &e))?;
    Ok(json_to_value(&json))
}

/// Convert a JSON parse error into a [`SyntaxError`] at the same place.
fn json_syntax_error(text: &str, err: &serde_json::Error) -> SyntaxError {
    let line = err.line();
    let byte_column = err.column();

    let line_start: usize = text
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    let byte_offset = (line_start + byte_column.saturating_sub(1)).min(text.len());
    let column = text
        .get(line_start..byte_offset)
        .map(|prefix| prefix.chars().count() + 1)
        .unwrap_or(byte_column.max(1));

    let full = err.to_string();
    let suffix = format!(" at line {} column {}", line, byte_column);
    let message = full.strip_suffix(&suffix).unwrap_or(&full);

    SyntaxError::new(
        Location::new(
            None,
            u32::try_from(line.max(1)).unwrap_or(u32::MAX),
            u32::try_from(column).unwrap_or(u32::MAX),
            byte_offset,
        ),
        format!("Invalid JSON: {}.", message),
    )
}

impl Value {
    pub fn to_json(&self) -> Json {
        value_to_json(self)
    }

    pub fn from_json(json: &Json) -> Value {
        json_to_value(json)
    }
}

#[cfg(test)]
mod json_test;
