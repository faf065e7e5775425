//! Kind-checked accessors.
//!
//! Each accessor checks the kind first and returns a [`ValueError`]
//! naming the expected and actual kinds on mismatch. Accessors for a
//! container kind accept the tagged variant as well.

use crate::error::ValueError;
use crate::symbol::Symbol;
use crate::value::{Integer, Map, OrderedMap, Sequence, Set, Tuple, Value};

type Result<T> = core::result::Result<T, ValueError>;

impl Value {
    fn kind_error(&self, expected: &str) -> ValueError {
        ValueError::wrong_kind(expected, self.kind())
    }

    // ---- Symbol ----

    pub fn symbol_get(&self) -> Result<Symbol> {
        match self {
            Value::Symbol(s) => Ok(*s),
            _ => Err(self.kind_error("symbol")),
        }
    }

    pub fn symbol_name(&self) -> Result<&'static str> {
        Ok(self.symbol_get()?.name())
    }

    pub fn bool_get(&self) -> Result<bool> {
        self.symbol_get()?.as_bool().ok_or_else(|| {
            ValueError::new(format!("expected symbol `true` or `false`, not {}", self))
        })
    }

    // ---- Integer ----

    pub fn integer_get(&self) -> Result<&Integer> {
        match self {
            Value::Integer(i) => Ok(i),
            _ => Err(self.kind_error("integer")),
        }
    }

    pub fn integer_is_negative(&self) -> Result<bool> {
        Ok(self.integer_get()?.is_negative())
    }

    pub fn small_integer_get(&self) -> Result<i64> {
        match self {
            Value::Integer(i) => i.to_i64().ok_or_else(|| self.kind_error("small integer")),
            _ => Err(self.kind_error("small integer")),
        }
    }

    // ---- String ----

    pub fn string_get(&self) -> Result<&str> {
        match self {
            Value::String(s) => Ok(s),
            _ => Err(self.kind_error("string")),
        }
    }

    // ---- Containers ----

    pub fn container_size(&self) -> Result<usize> {
        match self {
            Value::Sequence(s) | Value::TaggedSequence(_, s) => Ok(s.len()),
            Value::Tuple(t) | Value::TaggedTuple(_, t) => Ok(t.len()),
            Value::Set(s) | Value::TaggedSet(_, s) => Ok(s.len()),
            Value::Map(m) | Value::TaggedMap(_, m) => Ok(m.len()),
            Value::OrderedMap(m) | Value::TaggedOrderedMap(_, m) => Ok(m.len()),
            _ => Err(self.kind_error("container")),
        }
    }

    pub fn container_is_empty(&self) -> Result<bool> {
        Ok(self.container_size()? == 0)
    }

    pub fn tagged_container_get_tag(&self) -> Result<Symbol> {
        match self {
            Value::TaggedSequence(t, _)
            | Value::TaggedTuple(t, _)
            | Value::TaggedSet(t, _)
            | Value::TaggedMap(t, _)
            | Value::TaggedOrderedMap(t, _) => Ok(*t),
            _ => Err(self.kind_error("tagged container")),
        }
    }

    pub fn tagged_container_set_tag(&mut self, tag: Symbol) -> Result<()> {
        match self {
            Value::TaggedSequence(t, _)
            | Value::TaggedTuple(t, _)
            | Value::TaggedSet(t, _)
            | Value::TaggedMap(t, _)
            | Value::TaggedOrderedMap(t, _) => {
                *t = tag;
                Ok(())
            }
            _ => Err(self.kind_error("tagged container")),
        }
    }

    // ---- Sequence ----

    pub fn sequence_get(&self) -> Result<&Sequence> {
        match self {
            Value::Sequence(s) | Value::TaggedSequence(_, s) => Ok(s),
            _ => Err(self.kind_error("sequence")),
        }
    }

    pub fn sequence_get_mut(&mut self) -> Result<&mut Sequence> {
        match self {
            Value::Sequence(s) | Value::TaggedSequence(_, s) => Ok(s),
            other => Err(other.kind_error("sequence")),
        }
    }

    pub fn sequence_get_value_at(&self, index: usize) -> Result<&Value> {
        let seq = self.sequence_get()?;
        seq.get(index)
            .ok_or_else(|| missing_index_error("sequence", index, seq.len()))
    }

    pub fn sequence_append(&mut self, value: Value) -> Result<()> {
        self.sequence_get_mut()?.push(value);
        Ok(())
    }

    // ---- Tuple ----

    pub fn tuple_get(&self) -> Result<&Tuple> {
        match self {
            Value::Tuple(t) | Value::TaggedTuple(_, t) => Ok(t),
            _ => Err(self.kind_error("tuple")),
        }
    }

    pub fn tuple_get_mut(&mut self) -> Result<&mut Tuple> {
        match self {
            Value::Tuple(t) | Value::TaggedTuple(_, t) => Ok(t),
            other => Err(other.kind_error("tuple")),
        }
    }

    pub fn tuple_get_value_at(&self, index: usize) -> Result<&Value> {
        let tuple = self.tuple_get()?;
        tuple
            .get(index)
            .ok_or_else(|| missing_index_error("tuple", index, tuple.len()))
    }

    pub fn tuple_append(&mut self, value: Value) -> Result<()> {
        self.tuple_get_mut()?.push(value);
        Ok(())
    }

    // ---- Set ----

    pub fn set_get(&self) -> Result<&Set> {
        match self {
            Value::Set(s) | Value::TaggedSet(_, s) => Ok(s),
            _ => Err(self.kind_error("set")),
        }
    }

    pub fn set_get_mut(&mut self) -> Result<&mut Set> {
        match self {
            Value::Set(s) | Value::TaggedSet(_, s) => Ok(s),
            other => Err(other.kind_error("set")),
        }
    }

    pub fn set_contains(&self, element: &Value) -> Result<bool> {
        Ok(self.set_get()?.contains(element))
    }

    /// The stored element equal to `element`.
    pub fn set_get_value(&self, element: &Value) -> Result<&Value> {
        self.set_get()?.get(element).ok_or_else(|| {
            ValueError::new(format!(
                "expected set to have element {}, but it does not",
                element
            ))
        })
    }

    /// Insert `element`; returns false if it was already present.
    pub fn set_insert(&mut self, element: Value) -> Result<bool> {
        Ok(self.set_get_mut()?.insert(element))
    }

    // ---- Map ----

    pub fn map_get(&self) -> Result<&Map> {
        match self {
            Value::Map(m) | Value::TaggedMap(_, m) => Ok(m),
            _ => Err(self.kind_error("map")),
        }
    }

    pub fn map_get_mut(&mut self) -> Result<&mut Map> {
        match self {
            Value::Map(m) | Value::TaggedMap(_, m) => Ok(m),
            other => Err(other.kind_error("map")),
        }
    }

    pub fn map_contains(&self, key: &Value) -> Result<bool> {
        Ok(self.map_get()?.contains_key(key))
    }

    pub fn map_contains_sym(&self, name: &str) -> Result<bool> {
        self.map_contains(&Value::symbol(name))
    }

    /// The stored key equal to `key`.
    pub fn map_get_key_at(&self, key: &Value) -> Result<&Value> {
        self.map_get()?
            .get_key_value(key)
            .map(|(k, _)| k)
            .ok_or_else(|| missing_key_error("map", key))
    }

    pub fn map_get_value_at(&self, key: &Value) -> Result<&Value> {
        self.map_get()?
            .get(key)
            .ok_or_else(|| missing_key_error("map", key))
    }

    pub fn map_get_value_at_sym(&self, name: &str) -> Result<&Value> {
        self.map_get_value_at(&Value::symbol(name))
    }

    pub fn map_set_value_at(&mut self, key: Value, value: Value) -> Result<Option<Value>> {
        Ok(self.map_get_mut()?.insert(key, value))
    }

    // ---- Ordered map ----

    pub fn ordered_map_get(&self) -> Result<&OrderedMap> {
        match self {
            Value::OrderedMap(m) | Value::TaggedOrderedMap(_, m) => Ok(m),
            _ => Err(self.kind_error("ordered map")),
        }
    }

    pub fn ordered_map_get_mut(&mut self) -> Result<&mut OrderedMap> {
        match self {
            Value::OrderedMap(m) | Value::TaggedOrderedMap(_, m) => Ok(m),
            other => Err(other.kind_error("ordered map")),
        }
    }

    pub fn ordered_map_contains(&self, key: &Value) -> Result<bool> {
        Ok(self.ordered_map_get()?.contains_key(key))
    }

    pub fn ordered_map_get_key_at(&self, key: &Value) -> Result<&Value> {
        self.ordered_map_get()?
            .get_key_value(key)
            .map(|(k, _)| k)
            .ok_or_else(|| missing_key_error("ordered map", key))
    }

    pub fn ordered_map_get_value_at(&self, key: &Value) -> Result<&Value> {
        self.ordered_map_get()?
            .get(key)
            .ok_or_else(|| missing_key_error("ordered map", key))
    }

    pub fn ordered_map_set_value_at(&mut self, key: Value, value: Value) -> Result<Option<Value>> {
        Ok(self.ordered_map_get_mut()?.insert(key, value))
    }

    // ---- Possibly ordered map ----

    /// Look up `key` in a map or ordered map, tagged or not.
    pub fn pomap_get_key_value(&self, key: &Value) -> Result<Option<(&Value, &Value)>> {
        match self {
            Value::Map(m) | Value::TaggedMap(_, m) => Ok(m.get_key_value(key)),
            Value::OrderedMap(m) | Value::TaggedOrderedMap(_, m) => Ok(m.get_key_value(key)),
            _ => Err(self.kind_error("(possibly ordered) map")),
        }
    }
}

pub(crate) fn missing_index_error(what: &str, index: usize, len: usize) -> ValueError {
    ValueError::new(format!(
        "expected {} to have element at index {}, but it only has {} elements",
        what, index, len
    ))
}

pub(crate) fn missing_key_error(what: &str, key: &Value) -> ValueError {
    ValueError::new(format!(
        "expected {} to have key {}, but it does not",
        what, key
    ))
}
