//! Interned symbol names.
//!
//! Every [`Symbol`] is a small id into one process-wide, append-only
//! [`SymbolTable`]. Equal names always receive equal ids, so symbol
//! equality is an id comparison, while ordering goes by name.
//!
//! The names `null`, `false`, and `true` are interned when the table is
//! created, so [`Symbol::null`] and friends never touch the table.

use core::cmp::Ordering;
use core::fmt;
use std::sync::Mutex;

use hashbrown::HashMap;
use once_cell::sync::Lazy;
use static_assertions::const_assert_eq;

/// Index of a name in the [`SymbolTable`].
pub type SymbolId = u32;

/// Append-only table mapping names to stable ids.
///
/// Names are stored as leaked `&'static str` because entries live for
/// the rest of the process anyway, which lets lookups hand out plain
/// references.
#[derive(Debug)]
pub struct SymbolTable {
    names: Vec<&'static str>,
    ids: HashMap<&'static str, SymbolId>,
}

/// Names that are interned first, in this order.
const RESERVED: [&str; 3] = ["null", "false", "true"];

impl SymbolTable {
    /// Create a table holding only the reserved names.
    pub fn new() -> Self {
        let mut table = Self {
            names: Vec::new(),
            ids: HashMap::new(),
        };
        for name in RESERVED {
            table.intern(name);
        }
        table
    }

    /// Return the id for `text`, adding it if it is new.
    ///
    /// # Panics
    ///
    /// If `text` is new and every [`SymbolId`] is already taken.
    pub fn intern(&mut self, text: &str) -> SymbolId {
        match self.try_intern(text) {
            Some(id) => id,
            None => panic!("symbol table is full; cannot intern {:?}", text),
        }
    }

    /// Like [`intern`](Self::intern), but `None` when the table is full.
    pub fn try_intern(&mut self, text: &str) -> Option<SymbolId> {
        if let Some(&id) = self.ids.get(text) {
            return Some(id);
        }

        let id = next_id(self.names.len())?;
        let name: &'static str = Box::leak(text.to_owned().into_boxed_str());
        tracing::trace!(name, id, "interned new symbol");
        self.names.push(name);
        self.ids.insert(name, id);
        Some(id)
    }

    /// Return the id for `text` if it has already been interned.
    pub fn lookup_id(&self, text: &str) -> Option<SymbolId> {
        self.ids.get(text).copied()
    }

    /// Return the name for `id`.
    pub fn lookup_text(&self, id: SymbolId) -> Option<&'static str> {
        self.names.get(id as usize).copied()
    }

    /// Number of interned names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

/// The id of the entry after `len` existing ones, if there is one.
fn next_id(len: usize) -> Option<SymbolId> {
    SymbolId::try_from(len).ok()
}

static GLOBAL_TABLE: Lazy<Mutex<SymbolTable>> = Lazy::new(|| Mutex::new(SymbolTable::new()));

/// Run `f` with the process-wide table locked.
///
/// A poisoned lock is recovered, since the table is never left in an
/// inconsistent state between its own statements.
pub fn with_global_table<R>(f: impl FnOnce(&mut SymbolTable) -> R) -> R {
    let mut guard = match GLOBAL_TABLE.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    f(&mut guard)
}

/// An interned name.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol {
    id: SymbolId,
}

const_assert_eq!(core::mem::size_of::<Symbol>(), 4);

impl Symbol {
    const NULL_ID: SymbolId = 0;
    const FALSE_ID: SymbolId = 1;
    const TRUE_ID: SymbolId = 2;

    /// Intern `name` and return its symbol.
    pub fn new(name: &str) -> Self {
        Self {
            id: with_global_table(|table| table.intern(name)),
        }
    }

    pub const fn null() -> Self {
        Self { id: Self::NULL_ID }
    }

    pub const fn from_bool(b: bool) -> Self {
        Self {
            id: if b { Self::TRUE_ID } else { Self::FALSE_ID },
        }
    }

    pub const fn id(self) -> SymbolId {
        self.id
    }

    pub fn name(self) -> &'static str {
        with_global_table(|table| table.lookup_text(self.id)).unwrap_or("")
    }

    pub const fn is_null(self) -> bool {
        self.id == Self::NULL_ID
    }

    pub const fn is_bool(self) -> bool {
        self.id == Self::TRUE_ID || self.id == Self::FALSE_ID
    }

    /// `Some(b)` if this is `true` or `false`.
    pub const fn as_bool(self) -> Option<bool> {
        match self.id {
            Self::TRUE_ID => Some(true),
            Self::FALSE_ID => Some(false),
            _ => None,
        }
    }
}

impl Default for Symbol {
    fn default() -> Self {
        Self::null()
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Symbol {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.id == other.id {
            return Ordering::Equal;
        }
        let (a, b) = with_global_table(|table| {
            (table.lookup_text(self.id), table.lookup_text(other.id))
        });
        a.unwrap_or("").cmp(b.unwrap_or(""))
    }
}

/// True if `name` can be written without backticks.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if is_identifier_start(c) => chars.all(is_identifier_continue),
        _ => false,
    }
}

pub(crate) fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub(crate) fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// GDVN form: the bare name, or a backtick-quoted one.
impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name();
        if is_identifier(name) {
            f.write_str(name)
        } else {
            crate::writer::escape::write_quoted(f, name, '`')
        }
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self)
    }
}
