//! GDVN text writer.
//!
//! Compact mode writes everything on one line. Indentation mode lays a
//! value out against a target line width: before committing a value to
//! the current line, the writer renders it with indentation disabled
//! into a [`CountingSink`], stopping as soon as the line capacity is
//! exceeded. A value that fits is written inline along with all of its
//! descendants; otherwise its elements go one per line, one level
//! deeper, with the closing delimiter on its own line.

mod counting;
pub mod escape;
mod options;

use core::fmt::{self, Write as _};
use std::io;

use crate::symbol::Symbol;
use crate::value::{Integer, Value};

pub use counting::CountingSink;
pub use options::WriteOptions;

/// Outcome of a trial write: `Ok(false)` means a speculative write ran
/// past the line capacity and stopped early.
type Fit = Result<bool, fmt::Error>;

enum Sink<'w> {
    Real(&'w mut dyn fmt::Write),
    Counting(CountingSink),
}

impl fmt::Write for Sink<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        match self {
            Sink::Real(out) => out.write_str(s),
            Sink::Counting(counter) => counter.write_str(s),
        }
    }
}

/// One element of a container: a plain value, or a map entry.
#[derive(Clone, Copy)]
enum Item<'v> {
    Value(&'v Value),
    Entry(&'v Value, &'v Value),
}

/// Writes values as GDVN.
pub struct Writer<'w> {
    sink: Sink<'w>,
    options: WriteOptions,

    /// Characters that must still fit on the current line after the
    /// value being written, such as a `:` after a map key.
    num_extra_chars: usize,
}

impl<'w> Writer<'w> {
    pub fn new(out: &'w mut dyn fmt::Write, options: WriteOptions) -> Self {
        Self {
            sink: Sink::Real(out),
            options,
            num_extra_chars: 0,
        }
    }

    pub fn options(&self) -> &WriteOptions {
        &self.options
    }

    pub fn write(&mut self, value: &Value) -> fmt::Result {
        self.try_write(value, false).map(|_| ())
    }

    fn using_indentation(&self) -> bool {
        self.options.enable_indentation
    }

    fn put(&mut self, s: &str) -> fmt::Result {
        self.sink.write_str(s)
    }

    fn exceeded_speculative_capacity(&self) -> bool {
        let Sink::Counting(counter) = &self.sink else {
            return false;
        };
        let capacity = self.options.line_capacity() - self.num_extra_chars as i64;
        capacity < 0 || capacity < counter.count() as i64
    }

    fn start_new_indented_line(&mut self) -> fmt::Result {
        self.sink.write_char('\n')?;
        for _ in 0..self.options.current_indentation_space_count() {
            self.sink.write_char(' ')?;
        }
        Ok(())
    }

    /// Trial-render with `f` on a counting writer that has indentation
    /// disabled and `extra` more trailing characters to reserve.
    fn fits_on_line(
        &self,
        extra: usize,
        indent_delta: usize,
        f: impl FnOnce(&mut Writer<'_>) -> Fit,
    ) -> bool {
        let mut trial = Writer {
            sink: Sink::Counting(CountingSink::default()),
            options: WriteOptions {
                enable_indentation: false,
                indent_level: self.options.indent_level + indent_delta,
                ..self.options.clone()
            },
            num_extra_chars: self.num_extra_chars + extra,
        };
        let fits = matches!(f(&mut trial), Ok(true));
        tracing::trace!(
            fits,
            extra = trial.num_extra_chars,
            indent_level = trial.options.indent_level,
            "speculative fit"
        );
        fits
    }

    fn value_fits_on_line(&self, value: &Value) -> bool {
        self.fits_on_line(0, 0, |w| w.try_write(value, false))
    }

    fn try_write_item(&mut self, item: Item<'_>) -> Fit {
        match item {
            Item::Value(value) => self.try_write(value, false),
            Item::Entry(key, value) => self.try_write_entry(key, value),
        }
    }

    /// Write `value`, inline if it fits unless `force_line_breaks`.
    fn try_write(&mut self, value: &Value, force_line_breaks: bool) -> Fit {
        let saved = self.options.enable_indentation;
        if !force_line_breaks && self.using_indentation() && self.value_fits_on_line(value) {
            self.options.enable_indentation = false;
        }
        let result = self.write_value(value);
        self.options.enable_indentation = saved;
        result
    }

    fn write_value(&mut self, value: &Value) -> Fit {
        match value {
            Value::Symbol(symbol) => write!(self.sink, "{}", symbol)?,
            Value::Integer(integer) => self.write_integer(integer)?,
            Value::String(text) => escape::write_quoted(&mut self.sink, text, '"')?,

            Value::Sequence(s) => return self.write_items(None, "[", "]", s.iter()),
            Value::TaggedSequence(t, s) => return self.write_items(Some(*t), "[", "]", s.iter()),
            Value::Tuple(s) => return self.write_items(None, "(", ")", s.iter()),
            Value::TaggedTuple(t, s) => return self.write_items(Some(*t), "(", ")", s.iter()),
            Value::Set(s) => return self.write_items(None, "{{", "}}", s.iter()),
            Value::TaggedSet(t, s) => return self.write_items(Some(*t), "{{", "}}", s.iter()),

            Value::Map(m) => return self.write_entries(None, "{", "}", m.iter()),
            Value::TaggedMap(t, m) => return self.write_entries(Some(*t), "{", "}", m.iter()),
            Value::OrderedMap(m) | Value::TaggedOrderedMap(_, m) if m.is_empty() => {
                if let Value::TaggedOrderedMap(t, _) = value {
                    write!(self.sink, "{}", t)?;
                }
                self.put("[:]")?;
            }
            Value::OrderedMap(m) => return self.write_entries(None, "[", "]", m.iter()),
            Value::TaggedOrderedMap(t, m) => {
                return self.write_entries(Some(*t), "[", "]", m.iter());
            }
        }
        Ok(!self.exceeded_speculative_capacity())
    }

    fn write_integer(&mut self, integer: &Integer) -> fmt::Result {
        match integer.to_i64() {
            Some(small) => write!(self.sink, "{}", small),
            None if self.options.write_large_integers_as_decimal => {
                write!(self.sink, "{}", integer)
            }
            None => self.put(&integer.to_radix_string(16, "0x")),
        }
    }

    fn write_items<'v>(
        &mut self,
        tag: Option<Symbol>,
        open: &str,
        close: &str,
        items: impl Iterator<Item = &'v Value>,
    ) -> Fit {
        self.write_container(tag, open, close, items.map(Item::Value))
    }

    fn write_entries<'v>(
        &mut self,
        tag: Option<Symbol>,
        open: &str,
        close: &str,
        entries: impl Iterator<Item = (&'v Value, &'v Value)>,
    ) -> Fit {
        self.write_container(tag, open, close, entries.map(|(k, v)| Item::Entry(k, v)))
    }

    fn write_container<'v>(
        &mut self,
        tag: Option<Symbol>,
        open: &str,
        close: &str,
        items: impl Iterator<Item = Item<'v>>,
    ) -> Fit {
        if let Some(tag) = tag {
            write!(self.sink, "{}", tag)?;
        }
        self.put(open)?;
        if self.exceeded_speculative_capacity() {
            return Ok(false);
        }

        let saved_indent_level = self.options.indent_level;
        if self.using_indentation() {
            self.options.indent_level += 1;
        }

        let mut count = 0;
        for item in items {
            if self.using_indentation() {
                self.start_new_indented_line()?;
            } else if count > 0 {
                self.put(" ")?;
            } else if needs_separating_space(open, item) {
                // `{` followed by `{` would start a set.
                self.put(" ")?;
            }
            count += 1;

            if !self.try_write_item(item)? {
                self.options.indent_level = saved_indent_level;
                return Ok(false);
            }
        }

        self.options.indent_level = saved_indent_level;
        if self.using_indentation() && count > 0 {
            self.start_new_indented_line()?;
        }

        self.put(close)?;
        Ok(!self.exceeded_speculative_capacity())
    }

    /// Write a `key:value` map entry using the first applicable layout:
    ///
    /// 1. Indentation is off, or the whole entry fits on the line:
    ///
    ///    ```text
    ///    key:value
    ///    ```
    ///
    /// 2. `key:` fits, and the value fits on the next line one level
    ///    deeper:
    ///
    ///    ```text
    ///    key:
    ///      value
    ///    ```
    ///
    /// 3. The value is a container whose opening delimiter fits after
    ///    `key:`. Its elements are indented by the container itself and
    ///    its closing delimiter lines up with the key:
    ///
    ///    ```text
    ///    key:[
    ///      element
    ///    ]
    ///    ```
    ///
    /// 4. Otherwise the key is split across lines and the value follows
    ///    on the next line.
    fn try_write_entry(&mut self, key: &Value, value: &Value) -> Fit {
        let case = if !self.using_indentation() {
            1
        } else if self.fits_on_line(0, 0, |w| w.try_write_entry(key, value)) {
            1
        } else if self.fits_on_line(1, 0, |w| w.try_write(key, false))
            && self.fits_on_line(0, 1, |w| w.try_write(value, false))
        {
            2
        } else if value.is_container()
            && self.fits_on_line(1 + open_delim_length(value), 0, |w| w.try_write(key, false))
        {
            3
        } else {
            4
        };
        if self.using_indentation() {
            tracing::debug!(case, indent_level = self.options.indent_level, "map entry layout");
        }

        // Key.
        let saved_extra = self.num_extra_chars;
        let saved_indentation = self.options.enable_indentation;
        if case != 1 {
            // The colon follows the key's last line.
            self.num_extra_chars += 1;
        }
        if case == 2 || case == 3 {
            self.options.enable_indentation = false;
            if case == 3 {
                self.num_extra_chars += open_delim_length(value);
            }
        }
        let key_fit = self.try_write(key, false)?;
        self.num_extra_chars = saved_extra;
        self.options.enable_indentation = saved_indentation;
        if !key_fit {
            return Ok(false);
        }
        self.put(":")?;

        // Value.
        let saved_indent_level = self.options.indent_level;
        if self.using_indentation() && case != 3 {
            self.options.indent_level += 1;
        }
        if case == 1 {
            self.options.enable_indentation = false;
        }
        if case == 2 || case == 4 {
            self.start_new_indented_line()?;
        }
        let value_fit = self.try_write(value, case == 3);
        self.options.indent_level = saved_indent_level;
        self.options.enable_indentation = saved_indentation;
        value_fit
    }
}

/// True when the first entry of a map would otherwise put two `{`
/// characters next to each other.
fn needs_separating_space(open: &str, item: Item<'_>) -> bool {
    match item {
        Item::Entry(key, _) => {
            open == "{" && matches!(key, Value::Map(_) | Value::Set(_))
        }
        Item::Value(_) => false,
    }
}

/// Length of the text that opens `value`, including any tag.
fn open_delim_length(value: &Value) -> usize {
    let tag_length = match value.tagged_container_get_tag() {
        Ok(tag) => tag.to_string().chars().count(),
        Err(_) => 0,
    };
    let delimiter = match value {
        Value::Set(_) | Value::TaggedSet(..) => 2,
        v if v.is_container() => 1,
        _ => 0,
    };
    tag_length + delimiter
}

impl Value {
    /// Render with `options`.
    pub fn to_string_with(&self, options: &WriteOptions) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = self.write_to(&mut out, options);
        out
    }

    /// Compact single-line GDVN, as also produced by `Display`.
    pub fn as_gdvn(&self) -> String {
        self.to_string_with(&WriteOptions::default())
    }

    /// GDVN laid out over multiple lines with the default width, without
    /// a trailing newline.
    pub fn as_lines_string(&self) -> String {
        self.to_string_with(&WriteOptions::lines())
    }

    pub fn write_to(&self, out: &mut dyn fmt::Write, options: &WriteOptions) -> fmt::Result {
        Writer::new(out, options.clone()).write(self)
    }

    /// Write to a byte stream.
    pub fn write_to_io(&self, out: &mut dyn io::Write, options: &WriteOptions) -> io::Result<()> {
        out.write_all(self.to_string_with(options).as_bytes())
    }

    /// Write in indentation mode followed by a newline.
    pub fn write_lines(&self, out: &mut dyn io::Write, options: &WriteOptions) -> io::Result<()> {
        let options = options.clone().with_indentation(true);
        self.write_to_io(out, &options)?;
        out.write_all(b"\n")
    }
}
