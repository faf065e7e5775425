//! Error rendering using ariadne.
//!
//! Syntax errors are drawn against the source text they came from, with a
//! label at the offending position. Other errors carry no location and
//! are printed as a single line.

use ariadne::{IndexType, Label, Report, ReportKind, Source};
use gdv_core::{Error, SyntaxError};
use std::io::Write;

/// Character set for rendering error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Use Unicode characters for rich visual output.
    #[default]
    Unicode,
    /// Use ASCII-only characters for compatibility.
    Ascii,
}

/// Configuration for error rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig<'a> {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// The filename to display in error messages. When absent, the file
    /// name recorded in the error's location is used, then "<unknown>".
    pub filename: Option<&'a str>,
    /// The character set to use for rendering.
    pub charset: CharSet,
}

impl Default for RenderConfig<'_> {
    fn default() -> Self {
        Self {
            color: true,
            filename: None,
            charset: CharSet::Unicode,
        }
    }
}

/// Render `error`, which arose while reading `source`, to stderr using
/// the default configuration.
pub fn render_error(error: &Error, source: &str) {
    render_error_to(error, source, &mut std::io::stderr(), &RenderConfig::default()).ok();
}

/// Render `error`, which arose while reading `source`, to `writer`.
///
/// # Example
/// ```
/// use gdv::{RenderConfig, Value, render_error_to};
///
/// let source = "[1 2";
/// let err = Value::read_from_string(source).unwrap_err();
///
/// let mut buf = Vec::new();
/// let config = RenderConfig { color: false, ..Default::default() };
/// render_error_to(&err, source, &mut buf, &config).unwrap();
/// assert!(String::from_utf8_lossy(&buf).contains("at end of sequence"));
/// ```
pub fn render_error_to(
    error: &Error,
    source: &str,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> std::io::Result<()> {
    match error {
        Error::Syntax(syntax) => render_syntax_error(syntax, source, writer, config),
        other => writeln!(writer, "Error: {}", other),
    }
}

fn render_syntax_error(
    error: &SyntaxError,
    source: &str,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> std::io::Result<()> {
    let filename = config
        .filename
        .or(error.location.file_name.as_deref())
        .unwrap_or("<unknown>");

    let ariadne_charset = match config.charset {
        CharSet::Unicode => ariadne::CharSet::Unicode,
        CharSet::Ascii => ariadne::CharSet::Ascii,
    };
    let ariadne_config = ariadne::Config::default()
        .with_color(config.color)
        .with_char_set(ariadne_charset)
        .with_index_type(IndexType::Byte);

    // Locations point between characters, so the label is empty.
    let offset = error.location.byte_offset.min(source.len());
    let span = offset..offset;

    Report::build(ReportKind::Error, (filename, span.clone()))
        .with_message(&error.message)
        .with_config(ariadne_config)
        .with_label(Label::new((filename, span)).with_message(&error.message))
        .finish()
        .write((filename, Source::from(source)), &mut *writer)
}
