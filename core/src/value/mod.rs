//! The [`Value`] data model.

pub(crate) mod access;
mod containers;
mod integer;
mod kind;
mod to_value;

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use std::collections::{BTreeMap, BTreeSet};

use num_bigint::BigInt;

use crate::symbol::Symbol;

pub use containers::{OrderedMap, Tuple};
pub use integer::Integer;
pub use kind::ValueKind;
pub use to_value::ToValue;

pub type Sequence = Vec<Value>;
pub type Set = BTreeSet<Value>;
pub type Map = BTreeMap<Value, Value>;

/// A general data value.
///
/// Each tagged variant pairs a tag symbol with the payload of the
/// corresponding untagged variant. Containers own their elements, so a
/// value is always a tree.
#[derive(Clone)]
pub enum Value {
    Symbol(Symbol),
    Integer(Integer),
    String(String),
    Sequence(Sequence),
    TaggedSequence(Symbol, Sequence),
    Tuple(Tuple),
    TaggedTuple(Symbol, Tuple),
    Set(Set),
    TaggedSet(Symbol, Set),
    Map(Map),
    TaggedMap(Symbol, Map),
    OrderedMap(OrderedMap),
    TaggedOrderedMap(Symbol, OrderedMap),
}

impl Value {
    // ============================================================================
    // Construction
    // ============================================================================

    /// The default value of `kind`: `null`, `0`, `""`, or an empty
    /// container. Tagged kinds get the `null` tag.
    pub fn new(kind: ValueKind) -> Self {
        let tag = Symbol::null();
        match kind {
            ValueKind::Symbol => Value::Symbol(Symbol::null()),
            ValueKind::Integer | ValueKind::SmallInteger => Value::Integer(Integer::default()),
            ValueKind::String => Value::String(String::new()),
            ValueKind::Sequence => Value::Sequence(Sequence::new()),
            ValueKind::TaggedSequence => Value::TaggedSequence(tag, Sequence::new()),
            ValueKind::Tuple => Value::Tuple(Tuple::new()),
            ValueKind::TaggedTuple => Value::TaggedTuple(tag, Tuple::new()),
            ValueKind::Set => Value::Set(Set::new()),
            ValueKind::TaggedSet => Value::TaggedSet(tag, Set::new()),
            ValueKind::Map => Value::Map(Map::new()),
            ValueKind::TaggedMap => Value::TaggedMap(tag, Map::new()),
            ValueKind::OrderedMap => Value::OrderedMap(OrderedMap::new()),
            ValueKind::TaggedOrderedMap => Value::TaggedOrderedMap(tag, OrderedMap::new()),
        }
    }

    pub fn null() -> Self {
        Value::Symbol(Symbol::null())
    }

    pub fn symbol(name: &str) -> Self {
        Value::Symbol(Symbol::new(name))
    }

    /// A sequence of the given elements.
    pub fn seq<I: IntoIterator<Item = Value>>(elements: I) -> Self {
        Value::Sequence(elements.into_iter().collect())
    }

    pub fn tuple<I: IntoIterator<Item = Value>>(elements: I) -> Self {
        Value::Tuple(elements.into_iter().collect())
    }

    pub fn set<I: IntoIterator<Item = Value>>(elements: I) -> Self {
        Value::Set(elements.into_iter().collect())
    }

    pub fn map<I: IntoIterator<Item = (Value, Value)>>(entries: I) -> Self {
        Value::Map(entries.into_iter().collect())
    }

    pub fn ordered_map<I: IntoIterator<Item = (Value, Value)>>(entries: I) -> Self {
        Value::OrderedMap(entries.into_iter().collect())
    }

    /// Attach `tag` to an untagged container, or replace the tag of a
    /// tagged one. Scalars are returned unchanged.
    pub fn with_tag(self, tag: Symbol) -> Self {
        match self {
            Value::Sequence(s) | Value::TaggedSequence(_, s) => Value::TaggedSequence(tag, s),
            Value::Tuple(t) | Value::TaggedTuple(_, t) => Value::TaggedTuple(tag, t),
            Value::Set(s) | Value::TaggedSet(_, s) => Value::TaggedSet(tag, s),
            Value::Map(m) | Value::TaggedMap(_, m) => Value::TaggedMap(tag, m),
            Value::OrderedMap(m) | Value::TaggedOrderedMap(_, m) => {
                Value::TaggedOrderedMap(tag, m)
            }
            scalar => scalar,
        }
    }

    /// Remove the tag from a tagged container, returning the tag and the
    /// untagged container. Untagged values yield `None` for the tag.
    pub fn into_untagged(self) -> (Option<Symbol>, Value) {
        match self {
            Value::TaggedSequence(t, s) => (Some(t), Value::Sequence(s)),
            Value::TaggedTuple(t, s) => (Some(t), Value::Tuple(s)),
            Value::TaggedSet(t, s) => (Some(t), Value::Set(s)),
            Value::TaggedMap(t, m) => (Some(t), Value::Map(m)),
            Value::TaggedOrderedMap(t, m) => (Some(t), Value::OrderedMap(m)),
            other => (None, other),
        }
    }

    // ============================================================================
    // Kind queries
    // ============================================================================

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Symbol(_) => ValueKind::Symbol,
            Value::Integer(Integer::Small(_)) => ValueKind::SmallInteger,
            Value::Integer(i) => {
                if i.to_i64().is_some() {
                    ValueKind::SmallInteger
                } else {
                    ValueKind::Integer
                }
            }
            Value::String(_) => ValueKind::String,
            Value::Sequence(_) => ValueKind::Sequence,
            Value::TaggedSequence(..) => ValueKind::TaggedSequence,
            Value::Tuple(_) => ValueKind::Tuple,
            Value::TaggedTuple(..) => ValueKind::TaggedTuple,
            Value::Set(_) => ValueKind::Set,
            Value::TaggedSet(..) => ValueKind::TaggedSet,
            Value::Map(_) => ValueKind::Map,
            Value::TaggedMap(..) => ValueKind::TaggedMap,
            Value::OrderedMap(_) => ValueKind::OrderedMap,
            Value::TaggedOrderedMap(..) => ValueKind::TaggedOrderedMap,
        }
    }

    pub fn super_kind(&self) -> ValueKind {
        self.kind().super_kind()
    }

    pub fn kind_name(&self) -> &'static str {
        self.kind().name()
    }

    pub fn kind_common_name(&self) -> &'static str {
        self.kind().common_name()
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self, Value::Symbol(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Symbol(s) if s.is_null())
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Symbol(s) if s.is_bool())
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    pub fn is_small_integer(&self) -> bool {
        self.kind() == ValueKind::SmallInteger
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Sequence, tagged or not.
    pub fn is_sequence(&self) -> bool {
        self.super_kind() == ValueKind::Sequence
    }

    pub fn is_tagged_sequence(&self) -> bool {
        self.kind() == ValueKind::TaggedSequence
    }

    pub fn is_tuple(&self) -> bool {
        self.super_kind() == ValueKind::Tuple
    }

    pub fn is_tagged_tuple(&self) -> bool {
        self.kind() == ValueKind::TaggedTuple
    }

    pub fn is_set(&self) -> bool {
        self.super_kind() == ValueKind::Set
    }

    pub fn is_tagged_set(&self) -> bool {
        self.kind() == ValueKind::TaggedSet
    }

    pub fn is_map(&self) -> bool {
        self.super_kind() == ValueKind::Map
    }

    pub fn is_tagged_map(&self) -> bool {
        self.kind() == ValueKind::TaggedMap
    }

    pub fn is_ordered_map(&self) -> bool {
        self.super_kind() == ValueKind::OrderedMap
    }

    pub fn is_tagged_ordered_map(&self) -> bool {
        self.kind() == ValueKind::TaggedOrderedMap
    }

    /// Map or ordered map ("possibly ordered" map), tagged or not.
    pub fn is_pomap(&self) -> bool {
        self.is_map() || self.is_ordered_map()
    }

    pub fn is_tagged_pomap(&self) -> bool {
        self.is_tagged_map() || self.is_tagged_ordered_map()
    }

    pub fn is_container(&self) -> bool {
        self.kind().is_container()
    }

    pub fn is_tagged_container(&self) -> bool {
        self.kind().is_tagged()
    }

    /// Containers whose element order is extrinsic.
    pub fn is_ordered_container(&self) -> bool {
        self.is_sequence() || self.is_tuple() || self.is_ordered_map()
    }

    /// Containers whose element order is the value order.
    pub fn is_unordered_container(&self) -> bool {
        self.is_set() || self.is_map()
    }
}

// ============================================================================
// Conversions into Value
// ============================================================================

impl Default for Value {
    fn default() -> Self {
        Value::null()
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Symbol(Symbol::from_bool(b))
    }
}

impl From<Symbol> for Value {
    fn from(s: Symbol) -> Self {
        Value::Symbol(s)
    }
}

impl From<Integer> for Value {
    fn from(i: Integer) -> Self {
        Value::Integer(i)
    }
}

impl From<BigInt> for Value {
    fn from(i: BigInt) -> Self {
        Value::Integer(Integer::from_bigint(i))
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Integer(Integer::from(n))
                }
            }
        )*
    };
}

impl_from_int!(i32, i64, u32, u64, usize);

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Sequence> for Value {
    fn from(s: Sequence) -> Self {
        Value::Sequence(s)
    }
}

impl From<Tuple> for Value {
    fn from(t: Tuple) -> Self {
        Value::Tuple(t)
    }
}

impl From<Set> for Value {
    fn from(s: Set) -> Self {
        Value::Set(s)
    }
}

impl From<Map> for Value {
    fn from(m: Map) -> Self {
        Value::Map(m)
    }
}

impl From<OrderedMap> for Value {
    fn from(m: OrderedMap) -> Self {
        Value::OrderedMap(m)
    }
}

// ============================================================================
// Comparison
// ============================================================================

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare kinds first; the two integer kinds share a rank.
        match self.kind().sort_rank().cmp(&other.kind().sort_rank()) {
            Ordering::Equal => {}
            ord => return ord,
        }

        // Same kind, compare contents. Tagged containers compare tags
        // before payloads.
        match (self, other) {
            (Value::Symbol(a), Value::Symbol(b)) => a.cmp(b),
            (Value::Integer(a), Value::Integer(b)) => a.cmp(b),
            (Value::String(a), Value::String(b)) => a.as_bytes().cmp(b.as_bytes()),
            (Value::Sequence(a), Value::Sequence(b)) => a.cmp(b),
            (Value::TaggedSequence(ta, a), Value::TaggedSequence(tb, b)) => {
                ta.cmp(tb).then_with(|| a.cmp(b))
            }
            (Value::Tuple(a), Value::Tuple(b)) => a.cmp(b),
            (Value::TaggedTuple(ta, a), Value::TaggedTuple(tb, b)) => {
                ta.cmp(tb).then_with(|| a.cmp(b))
            }
            (Value::Set(a), Value::Set(b)) => a.cmp(b),
            (Value::TaggedSet(ta, a), Value::TaggedSet(tb, b)) => {
                ta.cmp(tb).then_with(|| a.cmp(b))
            }
            (Value::Map(a), Value::Map(b)) => a.cmp(b),
            (Value::TaggedMap(ta, a), Value::TaggedMap(tb, b)) => {
                ta.cmp(tb).then_with(|| a.cmp(b))
            }
            (Value::OrderedMap(a), Value::OrderedMap(b)) => a.cmp(b),
            (Value::TaggedOrderedMap(ta, a), Value::TaggedOrderedMap(tb, b)) => {
                ta.cmp(tb).then_with(|| a.cmp(b))
            }
            // Equal ranks imply matching variants.
            _ => Ordering::Equal,
        }
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind().sort_rank().hash(state);
        match self {
            Value::Symbol(s) => s.hash(state),
            Value::Integer(i) => i.hash(state),
            Value::String(s) => s.hash(state),
            Value::Sequence(s) => s.hash(state),
            Value::TaggedSequence(t, s) => (t, s).hash(state),
            Value::Tuple(s) => s.hash(state),
            Value::TaggedTuple(t, s) => (t, s).hash(state),
            Value::Set(s) => s.hash(state),
            Value::TaggedSet(t, s) => (t, s).hash(state),
            Value::Map(m) => m.hash(state),
            Value::TaggedMap(t, m) => (t, m).hash(state),
            Value::OrderedMap(m) => m.hash(state),
            Value::TaggedOrderedMap(t, m) => (t, m).hash(state),
        }
    }
}

// ============================================================================
// Formatting
// ============================================================================

/// Compact GDVN.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::writer::Writer::new(f, crate::writer::WriteOptions::default()).write(self)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
