use core::fmt;

/// Possible kinds of [`crate::Value`].
///
/// The order of the variants is also the order in which values of
/// different kinds sort, *except* that `Integer` and `SmallInteger` sort
/// together by numeric value:
///
/// ```text
/// large neg < small neg < 0 < small pos < large pos
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueKind {
    // ---- Scalars ----
    /// Identifier-like name, including `null`, `false`, and `true`.
    Symbol,

    /// Integer that does not fit in an `i64`.
    Integer,

    /// Integer that fits in an `i64`. Logically a subclass of `Integer`.
    SmallInteger,

    /// UTF-8 text.
    String,

    // ---- Containers ----
    Sequence,
    TaggedSequence,

    /// Positional record; stored like a sequence but kept distinct.
    Tuple,
    TaggedTuple,

    Set,
    TaggedSet,

    /// Key/value pairs in key order.
    Map,
    TaggedMap,

    /// Key/value pairs in insertion order.
    OrderedMap,
    TaggedOrderedMap,
}

impl ValueKind {
    pub const ALL: [ValueKind; 14] = [
        ValueKind::Symbol,
        ValueKind::Integer,
        ValueKind::SmallInteger,
        ValueKind::String,
        ValueKind::Sequence,
        ValueKind::TaggedSequence,
        ValueKind::Tuple,
        ValueKind::TaggedTuple,
        ValueKind::Set,
        ValueKind::TaggedSet,
        ValueKind::Map,
        ValueKind::TaggedMap,
        ValueKind::OrderedMap,
        ValueKind::TaggedOrderedMap,
    ];

    /// The variant name, e.g. `"TaggedMap"`.
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Symbol => "Symbol",
            ValueKind::Integer => "Integer",
            ValueKind::SmallInteger => "SmallInteger",
            ValueKind::String => "String",
            ValueKind::Sequence => "Sequence",
            ValueKind::TaggedSequence => "TaggedSequence",
            ValueKind::Tuple => "Tuple",
            ValueKind::TaggedTuple => "TaggedTuple",
            ValueKind::Set => "Set",
            ValueKind::TaggedSet => "TaggedSet",
            ValueKind::Map => "Map",
            ValueKind::TaggedMap => "TaggedMap",
            ValueKind::OrderedMap => "OrderedMap",
            ValueKind::TaggedOrderedMap => "TaggedOrderedMap",
        }
    }

    /// How the kind is described in prose, e.g. `"tagged map"`.
    pub fn common_name(self) -> &'static str {
        match self {
            ValueKind::Symbol => "symbol",
            ValueKind::Integer => "integer",
            ValueKind::SmallInteger => "small integer",
            ValueKind::String => "string",
            ValueKind::Sequence => "sequence",
            ValueKind::TaggedSequence => "tagged sequence",
            ValueKind::Tuple => "tuple",
            ValueKind::TaggedTuple => "tagged tuple",
            ValueKind::Set => "set",
            ValueKind::TaggedSet => "tagged set",
            ValueKind::Map => "map",
            ValueKind::TaggedMap => "tagged map",
            ValueKind::OrderedMap => "ordered map",
            ValueKind::TaggedOrderedMap => "tagged ordered map",
        }
    }

    /// Fold `SmallInteger` into `Integer` and each tagged kind into its
    /// untagged counterpart.
    pub fn super_kind(self) -> ValueKind {
        match self {
            ValueKind::SmallInteger => ValueKind::Integer,
            ValueKind::TaggedSequence => ValueKind::Sequence,
            ValueKind::TaggedTuple => ValueKind::Tuple,
            ValueKind::TaggedSet => ValueKind::Set,
            ValueKind::TaggedMap => ValueKind::Map,
            ValueKind::TaggedOrderedMap => ValueKind::OrderedMap,
            other => other,
        }
    }

    /// The tagged counterpart of an untagged container kind.
    pub fn tagged(self) -> Option<ValueKind> {
        match self.super_kind() {
            ValueKind::Sequence => Some(ValueKind::TaggedSequence),
            ValueKind::Tuple => Some(ValueKind::TaggedTuple),
            ValueKind::Set => Some(ValueKind::TaggedSet),
            ValueKind::Map => Some(ValueKind::TaggedMap),
            ValueKind::OrderedMap => Some(ValueKind::TaggedOrderedMap),
            _ => None,
        }
    }

    pub fn is_container(self) -> bool {
        self >= ValueKind::Sequence
    }

    pub fn is_tagged(self) -> bool {
        matches!(
            self,
            ValueKind::TaggedSequence
                | ValueKind::TaggedTuple
                | ValueKind::TaggedSet
                | ValueKind::TaggedMap
                | ValueKind::TaggedOrderedMap
        )
    }

    /// Position in the cross-kind sort order. The two integer kinds share
    /// a rank.
    pub(crate) fn sort_rank(self) -> u8 {
        match self {
            ValueKind::SmallInteger => ValueKind::Integer as u8,
            other => other as u8,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.common_name())
    }
}
