//! Building values from Rust data.
//!
//! [`ToValue`] is the inverse of [`FromParser`](crate::FromParser): for
//! the types both traits cover, `parse_to::<T>` on the result of
//! `to_value` gives back an equal `T`.
//!
//! | Rust type | Value |
//! |---|---|
//! | `bool` | symbol `true` / `false` |
//! | integers, [`Integer`] | integer |
//! | `String`, `&str` | string |
//! | [`Symbol`] | symbol |
//! | `Vec<T>`, `VecDeque<T>`, `[T]` | sequence |
//! | `BTreeSet<T>` | set |
//! | `BTreeMap<K, V>` | map |
//! | `Option<T>` | `null` when `None` |
//! | `Box<T>` | whatever `T` gives |

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::symbol::Symbol;
use crate::value::{Integer, Value};

/// A type that can be converted into a [`Value`].
pub trait ToValue {
    fn to_value(&self) -> Value;
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::from(*self)
    }
}

macro_rules! to_value_for_int {
    ($($t:ty),*) => {
        $(
            impl ToValue for $t {
                fn to_value(&self) -> Value {
                    Value::from(*self)
                }
            }
        )*
    };
}

to_value_for_int!(i32, i64, u32, u64, usize);

impl ToValue for Integer {
    fn to_value(&self) -> Value {
        Value::Integer(self.clone())
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::from(self)
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::from(self.as_str())
    }
}

impl ToValue for Symbol {
    fn to_value(&self) -> Value {
        Value::Symbol(*self)
    }
}

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Value {
        Value::seq(self.iter().map(ToValue::to_value))
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: ToValue> ToValue for VecDeque<T> {
    fn to_value(&self) -> Value {
        Value::seq(self.iter().map(ToValue::to_value))
    }
}

/// Distinct elements may map to equal values; later ones are dropped.
impl<T: ToValue> ToValue for BTreeSet<T> {
    fn to_value(&self) -> Value {
        Value::set(self.iter().map(ToValue::to_value))
    }
}

impl<K: ToValue, V: ToValue> ToValue for BTreeMap<K, V> {
    fn to_value(&self) -> Value {
        Value::map(self.iter().map(|(k, v)| (k.to_value(), v.to_value())))
    }
}

/// `None` is `null`, which is only unambiguous when `T` never maps to
/// `null` itself.
impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::null(),
        }
    }
}

impl<T: ToValue + ?Sized> ToValue for Box<T> {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}
