//! Path-tracking navigation over a [`Value`].
//!
//! A [`PathParser`] points at one value inside a top-level value and
//! remembers the steps taken to get there. Every failed check produces a
//! [`PathError`] naming that path, so code that deserializes a value
//! into its own types gets messages like
//!
//! ```text
//! At GDV path <top>.seq[3][0]: expected symbol, not small integer
//! ```
//!
//! without doing any bookkeeping of its own.

mod convert;

use core::fmt;
use core::sync::atomic::{AtomicBool, Ordering};

use smallvec::SmallVec;

use crate::error::{PathError, ValueError};
use crate::symbol::Symbol;
use crate::value::access::missing_key_error;
use crate::value::{Integer, Map, OrderedMap, Sequence, Set, Tuple, Value, ValueKind};
use crate::writer::WriteOptions;

pub use convert::{FromParser, parse_opt_to, parse_to};

type Result<T> = core::result::Result<T, PathError>;

/// When set, every newly constructed parser replays its path.
static SELF_CHECK_ON_CONSTRUCT: AtomicBool = AtomicBool::new(false);

// ============================================================================
// Navigation steps
// ============================================================================

/// One step from a container to one of its children.
#[derive(Debug, Clone, Copy)]
pub enum NavStep<'a> {
    /// Element of a sequence or tuple.
    Index(usize),

    /// An element of a set, or a key of a map. The reference is to the
    /// element stored in the container.
    Key(&'a Value),

    /// The value a map associates with the stored key.
    Value(&'a Value),
}

impl<'a> NavStep<'a> {
    /// Apply this step to `parent`, or `None` if it does not lead
    /// anywhere from there.
    pub fn child_of(&self, parent: &'a Value) -> Option<&'a Value> {
        match (*self, parent) {
            (NavStep::Index(i), Value::Sequence(s) | Value::TaggedSequence(_, s)) => s.get(i),
            (NavStep::Index(i), Value::Tuple(t) | Value::TaggedTuple(_, t)) => t.get(i),
            (NavStep::Key(k), Value::Set(s) | Value::TaggedSet(_, s)) => s.get(k),
            (NavStep::Key(k), Value::Map(m) | Value::TaggedMap(_, m)) => {
                m.get_key_value(k).map(|(key, _)| key)
            }
            (NavStep::Key(k), Value::OrderedMap(m) | Value::TaggedOrderedMap(_, m)) => {
                m.get_key_value(k).map(|(key, _)| key)
            }
            (NavStep::Value(k), Value::Map(m) | Value::TaggedMap(_, m)) => m.get(k),
            (NavStep::Value(k), Value::OrderedMap(m) | Value::TaggedOrderedMap(_, m)) => m.get(k),
            _ => None,
        }
    }
}

impl fmt::Display for NavStep<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Paths are for people, so large integers appear in decimal.
        let options = WriteOptions::default().with_large_integers_as_decimal(true);
        match self {
            NavStep::Index(i) => write!(f, "[{}]", i),
            NavStep::Key(k) => write!(f, "@{}", k.to_string_with(&options)),
            NavStep::Value(k) => write!(f, ".{}", k.to_string_with(&options)),
        }
    }
}

// ============================================================================
// PathParser
// ============================================================================

/// A position inside a top-level value, plus the path that reached it.
#[derive(Debug, Clone)]
pub struct PathParser<'a> {
    top: &'a Value,
    value: &'a Value,
    path: SmallVec<[NavStep<'a>; 8]>,
}

/// Relay a query that holds for any kind of value.
macro_rules! relay_queries {
    ($($name:ident -> $ret:ty),* $(,)?) => {
        $(
            pub fn $name(&self) -> $ret {
                self.value.$name()
            }
        )*
    };
}

/// Relay a kind-checked accessor, attaching the path to any failure.
macro_rules! relay_accessors {
    ($($name:ident ( $($arg:ident : $argty:ty),* ) -> $ret:ty),* $(,)?) => {
        $(
            pub fn $name(&self, $($arg: $argty),*) -> Result<$ret> {
                self.lift(self.value.$name($($arg),*))
            }
        )*
    };
}

/// Define `check_is_*` in terms of an `is_*` query.
macro_rules! define_checks {
    ($($check:ident => $query:ident, $desc:literal);* $(;)?) => {
        $(
            pub fn $check(&self) -> Result<()> {
                self.check(self.value.$query(), $desc)
            }
        )*
    };
}

impl<'a> PathParser<'a> {
    /// Start at the top of `top`, with an empty path.
    pub fn new(top: &'a Value) -> Self {
        Self::construct(PathParser {
            top,
            value: top,
            path: SmallVec::new(),
        })
    }

    /// Turn on (or off) path replay for every parser constructed
    /// afterwards, process-wide. Meant for tests.
    pub fn set_self_check_on_construct(enabled: bool) {
        SELF_CHECK_ON_CONSTRUCT.store(enabled, Ordering::Relaxed);
    }

    fn construct(parser: PathParser<'a>) -> Self {
        if SELF_CHECK_ON_CONSTRUCT.load(Ordering::Relaxed) {
            if let Err(err) = parser.self_check() {
                panic!("{}", err);
            }
        }
        parser
    }

    /// A parser for `child`, reached from here by `step`.
    fn descend(&self, step: NavStep<'a>, child: &'a Value) -> Self {
        let mut path = self.path.clone();
        path.push(step);
        Self::construct(PathParser {
            top: self.top,
            value: child,
            path,
        })
    }

    /// Walk the path from the top and confirm it arrives at exactly the
    /// current value.
    pub fn self_check(&self) -> Result<()> {
        let mut current = self.top;
        for (i, step) in self.path.iter().enumerate() {
            current = step.child_of(current).ok_or_else(|| {
                PathError::new(
                    self.path_string(),
                    format!("step {} ({}) does not apply to its parent", i, step),
                )
            })?;
        }
        if core::ptr::eq(current, self.value) {
            Ok(())
        } else {
            Err(self.error("path does not lead to the current value"))
        }
    }

    // ---- Position ----

    pub fn top(&self) -> &'a Value {
        self.top
    }

    pub fn value(&self) -> &'a Value {
        self.value
    }

    pub fn path(&self) -> &[NavStep<'a>] {
        &self.path
    }

    /// The current value as GDVN.
    pub fn value_gdvn(&self) -> String {
        self.value.to_string()
    }

    /// `<top>` followed by each step.
    pub fn path_string(&self) -> String {
        let mut s = String::from("<top>");
        for step in &self.path {
            s.push_str(&step.to_string());
        }
        s
    }

    /// An error at the current path.
    pub fn error(&self, message: impl Into<String>) -> PathError {
        PathError::new(self.path_string(), message)
    }

    fn lift<T>(&self, result: core::result::Result<T, ValueError>) -> Result<T> {
        result.map_err(|e| self.error(e.message))
    }

    fn kind_error(&self, desc: &str) -> PathError {
        self.error(ValueError::wrong_kind(desc, self.kind()).message)
    }

    fn check(&self, ok: bool, desc: &str) -> Result<()> {
        if ok { Ok(()) } else { Err(self.kind_error(desc)) }
    }

    // ---- Queries ----

    relay_queries! {
        kind -> ValueKind,
        kind_name -> &'static str,
        kind_common_name -> &'static str,
        super_kind -> ValueKind,
        is_symbol -> bool,
        is_null -> bool,
        is_bool -> bool,
        is_integer -> bool,
        is_small_integer -> bool,
        is_string -> bool,
        is_sequence -> bool,
        is_tagged_sequence -> bool,
        is_tuple -> bool,
        is_tagged_tuple -> bool,
        is_set -> bool,
        is_tagged_set -> bool,
        is_map -> bool,
        is_tagged_map -> bool,
        is_ordered_map -> bool,
        is_tagged_ordered_map -> bool,
        is_pomap -> bool,
        is_tagged_pomap -> bool,
        is_container -> bool,
        is_tagged_container -> bool,
        is_ordered_container -> bool,
        is_unordered_container -> bool,
    }

    // ---- Checks ----

    /// Fail unless the current value has exactly `kind`.
    pub fn check_kind(&self, kind: ValueKind) -> Result<()> {
        self.check(self.kind() == kind, kind.common_name())
    }

    pub fn check_is_symbol(&self) -> Result<()> {
        self.check_kind(ValueKind::Symbol)
    }

    define_checks! {
        check_is_integer => is_integer, "integer";
        check_is_small_integer => is_small_integer, "small integer";
        check_is_string => is_string, "string";
        check_is_container => is_container, "container";
        check_is_sequence => is_sequence, "sequence";
        check_is_tuple => is_tuple, "tuple";
        check_is_set => is_set, "set";
        check_is_map => is_map, "map";
        check_is_ordered_map => is_ordered_map, "ordered map";
        check_is_pomap => is_pomap, "(possibly ordered) map";
        check_is_tagged_container => is_tagged_container, "tagged container";
        check_is_tagged_map => is_tagged_map, "tagged map";
        check_is_tagged_ordered_map => is_tagged_ordered_map, "tagged ordered map";
    }

    // ---- Scalars and whole containers ----

    relay_accessors! {
        symbol_get() -> Symbol,
        symbol_name() -> &'static str,
        integer_get() -> &'a Integer,
        integer_is_negative() -> bool,
        small_integer_get() -> i64,
        string_get() -> &'a str,
        container_size() -> usize,
        container_is_empty() -> bool,
        sequence_get() -> &'a Sequence,
        tuple_get() -> &'a Tuple,
        set_get() -> &'a Set,
        set_contains(element: &Value) -> bool,
        map_get() -> &'a Map,
        map_contains(key: &Value) -> bool,
        map_contains_sym(name: &str) -> bool,
        ordered_map_get() -> &'a OrderedMap,
        ordered_map_contains(key: &Value) -> bool,
        tagged_container_get_tag() -> Symbol,
    }

    pub fn ordered_map_contains_sym(&self, name: &str) -> Result<bool> {
        self.ordered_map_contains(&Value::symbol(name))
    }

    pub fn tagged_container_get_tag_name(&self) -> Result<&'static str> {
        Ok(self.tagged_container_get_tag()?.name())
    }

    // ---- Descending ----

    pub fn sequence_get_value_at(&self, index: usize) -> Result<PathParser<'a>> {
        let child = self.lift(self.value.sequence_get_value_at(index))?;
        Ok(self.descend(NavStep::Index(index), child))
    }

    pub fn tuple_get_value_at(&self, index: usize) -> Result<PathParser<'a>> {
        let child = self.lift(self.value.tuple_get_value_at(index))?;
        Ok(self.descend(NavStep::Index(index), child))
    }

    /// Navigate to the stored set element equal to `element`.
    pub fn set_get_value(&self, element: &Value) -> Result<PathParser<'a>> {
        let stored = self.lift(self.value.set_get_value(element))?;
        Ok(self.descend(NavStep::Key(stored), stored))
    }

    /// Navigate to the stored map key equal to `key`.
    pub fn map_get_key_at(&self, key: &Value) -> Result<PathParser<'a>> {
        let stored = self.lift(self.value.map_get_key_at(key))?;
        Ok(self.descend(NavStep::Key(stored), stored))
    }

    pub fn map_get_value_at(&self, key: &Value) -> Result<PathParser<'a>> {
        self.map_get_value_at_opt(key)?
            .ok_or_else(|| self.error(missing_key_error("map", key).message))
    }

    pub fn map_get_value_at_sym(&self, name: &str) -> Result<PathParser<'a>> {
        self.map_get_value_at(&Value::symbol(name))
    }

    pub fn map_get_value_at_str(&self, text: &str) -> Result<PathParser<'a>> {
        self.map_get_value_at(&Value::from(text))
    }

    /// Like [`Self::map_get_value_at`], but a missing key is `None`. A
    /// value that is not a map is still an error.
    pub fn map_get_value_at_opt(&self, key: &Value) -> Result<Option<PathParser<'a>>> {
        let map = self.map_get()?;
        Ok(map
            .get_key_value(key)
            .map(|(stored, child)| self.descend(NavStep::Value(stored), child)))
    }

    pub fn map_get_value_at_sym_opt(&self, name: &str) -> Result<Option<PathParser<'a>>> {
        self.map_get_value_at_opt(&Value::symbol(name))
    }

    pub fn map_get_value_at_str_opt(&self, text: &str) -> Result<Option<PathParser<'a>>> {
        self.map_get_value_at_opt(&Value::from(text))
    }

    pub fn ordered_map_get_key_at(&self, key: &Value) -> Result<PathParser<'a>> {
        let stored = self.lift(self.value.ordered_map_get_key_at(key))?;
        Ok(self.descend(NavStep::Key(stored), stored))
    }

    pub fn ordered_map_get_value_at(&self, key: &Value) -> Result<PathParser<'a>> {
        let map = self.ordered_map_get()?;
        match map.get_key_value(key) {
            Some((stored, child)) => Ok(self.descend(NavStep::Value(stored), child)),
            None => Err(self.error(missing_key_error("ordered map", key).message)),
        }
    }

    pub fn ordered_map_get_value_at_sym(&self, name: &str) -> Result<PathParser<'a>> {
        self.ordered_map_get_value_at(&Value::symbol(name))
    }

    /// Parsers for each element of a sequence or tuple, in order.
    pub fn elements(&self) -> Result<Vec<PathParser<'a>>> {
        let elements: &'a [Value] = match self.value {
            Value::Sequence(s) | Value::TaggedSequence(_, s) => s.as_slice(),
            Value::Tuple(t) | Value::TaggedTuple(_, t) => t.as_slice(),
            _ => return Err(self.kind_error("sequence or tuple")),
        };
        Ok(elements
            .iter()
            .enumerate()
            .map(|(i, child)| self.descend(NavStep::Index(i), child))
            .collect())
    }

    /// Parsers for each key and its value, in the container's order, for
    /// a map or ordered map.
    pub fn entries(&self) -> Result<Vec<(PathParser<'a>, PathParser<'a>)>> {
        let pairs: Vec<(&'a Value, &'a Value)> = match self.value {
            Value::Map(m) | Value::TaggedMap(_, m) => m.iter().collect(),
            Value::OrderedMap(m) | Value::TaggedOrderedMap(_, m) => m.iter().collect(),
            _ => return Err(self.kind_error("(possibly ordered) map")),
        };
        Ok(pairs
            .into_iter()
            .map(|(k, v)| {
                (
                    self.descend(NavStep::Key(k), k),
                    self.descend(NavStep::Value(k), v),
                )
            })
            .collect())
    }

    // ---- Tags ----

    /// Fail unless the current value is a tagged container with tag
    /// `name`.
    pub fn check_container_tag(&self, name: &str) -> Result<()> {
        let actual = self.tagged_container_get_tag()?;
        if actual.name() == name {
            Ok(())
        } else {
            Err(self.error(format!(
                "expected container to have tag {}, but it instead has tag {}",
                Symbol::new(name),
                actual
            )))
        }
    }

    pub fn check_tagged_map_tag(&self, name: &str) -> Result<()> {
        self.check_is_tagged_map()?;
        self.check_container_tag(name)
    }

    pub fn check_tagged_ordered_map_tag(&self, name: &str) -> Result<()> {
        self.check_is_tagged_ordered_map()?;
        self.check_container_tag(name)
    }
}

#[cfg(test)]
mod parser_test;
