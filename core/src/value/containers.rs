//! Container payloads that are not plain std collections.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Deref, DerefMut};

use hashbrown::HashMap;

use crate::value::Value;

/// Ordered list of values with positional-record meaning.
///
/// Stored like a sequence, but a distinct kind so that readers can tell
/// a record from a homogeneous list.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tuple(pub Vec<Value>);

impl Tuple {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn into_inner(self) -> Vec<Value> {
        self.0
    }
}

impl Deref for Tuple {
    type Target = Vec<Value>;

    fn deref(&self) -> &Vec<Value> {
        &self.0
    }
}

impl DerefMut for Tuple {
    fn deref_mut(&mut self) -> &mut Vec<Value> {
        &mut self.0
    }
}

impl From<Vec<Value>> for Tuple {
    fn from(elements: Vec<Value>) -> Self {
        Self(elements)
    }
}

impl FromIterator<Value> for Tuple {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Tuple {
    type Item = &'a Value;
    type IntoIter = core::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Map whose entries keep their insertion order.
///
/// Entries live in a vector in extrinsic order; a hash index maps each
/// key to its position.
#[derive(Clone, Default)]
pub struct OrderedMap {
    entries: Vec<(Value, Value)>,
    index: HashMap<Value, usize>,
}

impl OrderedMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert or replace. A replaced entry keeps its position.
    /// Returns the previous value, if any.
    pub fn insert(&mut self, key: Value, value: Value) -> Option<Value> {
        if let Some(&pos) = self.index.get(&key) {
            return Some(core::mem::replace(&mut self.entries[pos].1, value));
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    pub fn contains_key(&self, key: &Value) -> bool {
        self.index.contains_key(key)
    }

    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.get_key_value(key).map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &Value) -> Option<&mut Value> {
        let pos = *self.index.get(key)?;
        Some(&mut self.entries[pos].1)
    }

    /// The stored key equal to `key`, and its value.
    pub fn get_key_value(&self, key: &Value) -> Option<(&Value, &Value)> {
        let pos = *self.index.get(key)?;
        let (k, v) = &self.entries[pos];
        Some((k, v))
    }

    /// The entry at `index` in extrinsic order.
    pub fn entry_at_index(&self, index: usize) -> Option<(&Value, &Value)> {
        self.entries.get(index).map(|(k, v)| (k, v))
    }

    pub fn value_at_index(&self, index: usize) -> Option<&Value> {
        self.entries.get(index).map(|(_, v)| v)
    }

    pub fn remove(&mut self, key: &Value) -> Option<Value> {
        let pos = self.index.remove(key)?;
        let (_, value) = self.entries.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        Some(value)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&Value, &Value)> + ExactSizeIterator {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }
}

impl FromIterator<(Value, Value)> for OrderedMap {
    fn from_iter<I: IntoIterator<Item = (Value, Value)>>(iter: I) -> Self {
        let mut map = OrderedMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

/// Entries in extrinsic order; the index is derived state.
impl fmt::Debug for OrderedMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl PartialEq for OrderedMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for OrderedMap {}

impl PartialOrd for OrderedMap {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Lexicographic over entries in extrinsic order, keys before values.
impl Ord for OrderedMap {
    fn cmp(&self, other: &Self) -> Ordering {
        self.entries.cmp(&other.entries)
    }
}

impl Hash for OrderedMap {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.entries.hash(state);
    }
}
