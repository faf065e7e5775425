//! GDV - General Data Values
//!
//! # Overview
//!
//! GDV is a data model and text format for structured data. A [`Value`]
//! is a symbol, an integer of any size, a string, or one of five
//! containers: sequence `[...]`, tuple `(...)`, set `{{...}}`, map
//! `{k:v}`, and ordered map `[k:v]`. Any container may carry a symbol
//! tag, as in `Point{x:1 y:2}`. The text format is called GDVN.
//!
//! # Quick Start
//!
//! ```
//! use gdv::{PathParser, Value, WriteOptions, parse_to};
//!
//! // Read GDVN text.
//! let value = Value::read_from_string("Point{y:2, x:1} // comment").unwrap();
//!
//! // Maps are kept sorted, so the output is canonical.
//! assert_eq!(value.to_string(), "Point{x:1 y:2}");
//!
//! // Navigate with a path-tracking parser.
//! let p = PathParser::new(&value);
//! p.check_tagged_map_tag("Point").unwrap();
//! let x: i32 = parse_to(&p.map_get_value_at_sym("x").unwrap()).unwrap();
//! assert_eq!(x, 1);
//!
//! // Errors name the path that led to the problem.
//! let err = p.map_get_value_at_sym("y").unwrap().string_get().unwrap_err();
//! assert_eq!(err.to_string(), "At GDV path <top>.y: expected string, not small integer");
//! ```
//!
//! # JSON
//!
//! ```
//! use gdv::Value;
//! use gdv::json::{from_json_str, to_json_string};
//!
//! let value = Value::read_from_string(r#"{"a":[1 2] "b":null}"#).unwrap();
//! assert_eq!(to_json_string(&value), r#"{"a":[1,2],"b":null}"#);
//! assert_eq!(from_json_str(r#"{"a":[1,2],"b":null}"#).unwrap(), value);
//! ```

// Error rendering utilities
pub mod error_renderer;
pub use error_renderer::{CharSet, RenderConfig, render_error, render_error_to};

// Re-export the data model and its machinery from gdv_core
pub use gdv_core::{
    Error, FromParser, Integer, Location, Map, NavStep, OrderedMap, PathError, PathParser,
    ReadOptions, Reader, Result, Sequence, Set, Symbol, SymbolId, SymbolTable, SyntaxError,
    ToValue, Tuple, Value, ValueError, ValueKind, WriteOptions, Writer, parse_opt_to, parse_to,
};
pub use gdv_core::{json, parser, reader, symbol, value, writer};
