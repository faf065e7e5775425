//! Conversion from a navigated value into Rust types.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use num_traits::ToPrimitive;

use crate::error::PathError;
use crate::parser::PathParser;
use crate::symbol::Symbol;
use crate::value::{Integer, Value};

/// A type that can be built from the value a [`PathParser`] points at.
///
/// Implementations for user types typically navigate with the parser's
/// `map_get_value_at_sym` and friends, so any error they raise names the
/// offending path:
///
/// ```
/// use gdv_core::{FromParser, PathError, PathParser, parse_to};
///
/// struct Point { x: i32, y: i32 }
///
/// impl FromParser for Point {
///     fn from_parser(p: &PathParser<'_>) -> Result<Self, PathError> {
///         p.check_tagged_map_tag("Point")?;
///         Ok(Point {
///             x: parse_to(&p.map_get_value_at_sym("x")?)?,
///             y: parse_to(&p.map_get_value_at_sym("y")?)?,
///         })
///     }
/// }
/// ```
pub trait FromParser: Sized {
    fn from_parser(p: &PathParser<'_>) -> Result<Self, PathError>;
}

/// Convert the value at `p` to `T`.
pub fn parse_to<T: FromParser>(p: &PathParser<'_>) -> Result<T, PathError> {
    T::from_parser(p)
}

/// Convert the value at `p` to `T`, or yield `T::default()` when there is
/// no value, as for an absent optional map entry.
pub fn parse_opt_to<T: FromParser + Default>(p: Option<PathParser<'_>>) -> Result<T, PathError> {
    match p {
        Some(p) => T::from_parser(&p),
        None => Ok(T::default()),
    }
}

impl FromParser for bool {
    fn from_parser(p: &PathParser<'_>) -> Result<Self, PathError> {
        p.check_is_symbol()?;
        match p.symbol_name()? {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(p.error(format!(
                "expected symbol `true` or `false`, not {}",
                p.value_gdvn()
            ))),
        }
    }
}

macro_rules! from_parser_for_int {
    ($($t:ty),*) => {
        $(
            impl FromParser for $t {
                fn from_parser(p: &PathParser<'_>) -> Result<Self, PathError> {
                    let n = p.small_integer_get()?;
                    <$t>::try_from(n).map_err(|_| {
                        p.error(format!(
                            "number too large to represent as `{}`: {}",
                            stringify!($t),
                            p.value_gdvn()
                        ))
                    })
                }
            }
        )*
    };
}

from_parser_for_int!(i32, u32, usize);

impl FromParser for i64 {
    fn from_parser(p: &PathParser<'_>) -> Result<Self, PathError> {
        p.small_integer_get()
    }
}

/// Also accepts values past `i64::MAX`, which are stored as large
/// integers.
impl FromParser for u64 {
    fn from_parser(p: &PathParser<'_>) -> Result<Self, PathError> {
        p.integer_get()?.to_bigint().to_u64().ok_or_else(|| {
            p.error(format!(
                "number too large to represent as `u64`: {}",
                p.value_gdvn()
            ))
        })
    }
}

impl FromParser for Integer {
    fn from_parser(p: &PathParser<'_>) -> Result<Self, PathError> {
        p.integer_get().cloned()
    }
}

impl FromParser for String {
    fn from_parser(p: &PathParser<'_>) -> Result<Self, PathError> {
        p.string_get().map(str::to_owned)
    }
}

impl FromParser for Symbol {
    fn from_parser(p: &PathParser<'_>) -> Result<Self, PathError> {
        p.symbol_get()
    }
}

impl FromParser for Value {
    fn from_parser(p: &PathParser<'_>) -> Result<Self, PathError> {
        Ok(p.value().clone())
    }
}

/// From a sequence, element by element.
impl<T: FromParser> FromParser for Vec<T> {
    fn from_parser(p: &PathParser<'_>) -> Result<Self, PathError> {
        let len = p.sequence_get()?.len();
        (0..len)
            .map(|i| T::from_parser(&p.sequence_get_value_at(i)?))
            .collect()
    }
}

/// From a sequence, like `Vec`.
impl<T: FromParser> FromParser for VecDeque<T> {
    fn from_parser(p: &PathParser<'_>) -> Result<Self, PathError> {
        Vec::from_parser(p).map(VecDeque::from)
    }
}

/// From a set.
impl<T: FromParser + Ord> FromParser for BTreeSet<T> {
    fn from_parser(p: &PathParser<'_>) -> Result<Self, PathError> {
        p.set_get()?
            .iter()
            .map(|element| T::from_parser(&p.set_get_value(element)?))
            .collect()
    }
}

/// From a map, converting keys and values independently.
impl<K: FromParser + Ord, V: FromParser> FromParser for BTreeMap<K, V> {
    fn from_parser(p: &PathParser<'_>) -> Result<Self, PathError> {
        p.map_get()?
            .keys()
            .map(|key| {
                Ok((
                    K::from_parser(&p.map_get_key_at(key)?)?,
                    V::from_parser(&p.map_get_value_at(key)?)?,
                ))
            })
            .collect()
    }
}

/// `null` is `None`; anything else must convert to `T`.
impl<T: FromParser> FromParser for Option<T> {
    fn from_parser(p: &PathParser<'_>) -> Result<Self, PathError> {
        if p.is_null() {
            Ok(None)
        } else {
            T::from_parser(p).map(Some)
        }
    }
}

impl<T: FromParser> FromParser for Box<T> {
    fn from_parser(p: &PathParser<'_>) -> Result<Self, PathError> {
        T::from_parser(p).map(Box::new)
    }
}
