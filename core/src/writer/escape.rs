//! Quoting of strings and symbol names.
//!
//! Everything written here reads back through the reader's escape
//! decoding unchanged.

use core::fmt;

/// Write `text` between `quote` characters, escaping backslashes, the
/// quote character, and control characters.
pub fn write_quoted<W: fmt::Write + ?Sized>(out: &mut W, text: &str, quote: char) -> fmt::Result {
    out.write_char(quote)?;
    for c in text.chars() {
        match c {
            '\\' => out.write_str("\\\\")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\t' => out.write_str("\\t")?,
            '\x07' => out.write_str("\\a")?,
            '\x08' => out.write_str("\\b")?,
            '\x0B' => out.write_str("\\v")?,
            '\x0C' => out.write_str("\\f")?,
            c if c == quote => {
                out.write_char('\\')?;
                out.write_char(c)?;
            }
            // C0 and C1 controls, and DEL.
            c if c.is_control() && (c as u32) < 0x100 => write!(out, "\\x{:02X}", c as u32)?,
            c => out.write_char(c)?,
        }
    }
    out.write_char(quote)
}

/// `text` as a double-quoted GDVN string.
pub fn double_quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    // Writing to a String cannot fail.
    let _ = write_quoted(&mut out, text, '"');
    out
}
