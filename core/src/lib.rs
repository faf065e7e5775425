//! General Data Values: a structured-data value type and its textual
//! interchange machinery.
//!
//! The central type is [`Value`], a tagged union of symbols, integers,
//! strings, and five container shapes. Around it sit the GDVN
//! [`reader`] and [`writer`], a [`json`] bridge, and a path-tracking
//! [`parser`] that produces navigable shape-mismatch errors.

pub mod error;
pub mod json;
pub mod parser;
pub mod reader;
pub mod symbol;
pub mod value;
pub mod writer;

pub use error::{Error, PathError, Result, SyntaxError, ValueError};
pub use parser::{FromParser, NavStep, PathParser, parse_opt_to, parse_to};
pub use reader::{DEFAULT_MAX_DEPTH, Location, ReadOptions, Reader};
pub use symbol::{Symbol, SymbolId, SymbolTable};
pub use value::{Integer, Map, OrderedMap, Sequence, Set, ToValue, Tuple, Value, ValueKind};
pub use writer::{WriteOptions, Writer};

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    ///
    /// # Example
    /// ```ignore
    /// #[test]
    /// fn test_layout() {
    ///     test_utils::init_test_logging();
    ///     // ... your test code
    /// }
    /// ```
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
