//! GDVN text reader.
//!
//! A hand-written recursive-descent reader that pulls one character at
//! a time from a byte stream, decoding UTF-8 as it goes. Every consumed
//! character advances a [`Location`], and every character that is put
//! back undoes exactly that advance, so errors report the line, column
//! and byte offset of the offending character.
//!
//! There is no recovery: after an error the reader should be dropped.

mod location;

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use smallvec::SmallVec;

use crate::error::{Error, Result, SyntaxError};
use crate::symbol::{Symbol, is_identifier_continue, is_identifier_start};
use crate::value::{Integer, Map, OrderedMap, Sequence, Set, Tuple, Value};
use crate::writer::WriteOptions;

pub use location::Location;

/// Default maximum nesting depth of containers.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// More newlines than this are never put back at once.
const LINE_END_HISTORY: usize = 4;

/// Duplicate keys in error messages are cut to this many characters.
const MAX_DUPLICATE_KEY_CHARS: usize = 60;

/// Options controlling a [`Reader`].
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// Name of the source, used in error locations.
    pub file_name: Option<String>,

    /// Containers nested deeper than this are rejected.
    pub max_depth: usize,
}

impl ReadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            file_name: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Which flavor of quoted text is being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quoted {
    String,
    Symbol,
}

impl Quoted {
    fn delimiter(self) -> char {
        match self {
            Quoted::String => '"',
            Quoted::Symbol => '`',
        }
    }

    fn description(self) -> &'static str {
        match self {
            Quoted::String => "double-quoted string",
            Quoted::Symbol => "backtick-quoted symbol",
        }
    }
}

/// Keyed containers the reader can fill while checking for duplicates.
trait KeyedBuilder {
    fn contains(&self, key: &Value) -> bool;
    fn add(&mut self, key: Value, value: Value);
}

impl KeyedBuilder for Map {
    fn contains(&self, key: &Value) -> bool {
        self.contains_key(key)
    }

    fn add(&mut self, key: Value, value: Value) {
        self.insert(key, value);
    }
}

impl KeyedBuilder for OrderedMap {
    fn contains(&self, key: &Value) -> bool {
        self.contains_key(key)
    }

    fn add(&mut self, key: Value, value: Value) {
        self.insert(key, value);
    }
}

/// Reads GDVN values from a byte stream.
pub struct Reader<R> {
    input: BufReader<R>,

    /// Characters that were read and then put back, most recent last.
    /// `None` is end of input.
    putback: SmallVec<[Option<char>; 2]>,

    /// Location of the next character to be read.
    location: Location,

    /// Columns of the most recent newlines, most recent last, so that
    /// backing up over a newline lands on the previous line's end.
    line_ends: SmallVec<[u32; LINE_END_HISTORY]>,

    depth: usize,
    max_depth: usize,
}

impl<R: Read> Reader<R> {
    pub fn new(source: R, options: ReadOptions) -> Self {
        Self {
            input: BufReader::new(source),
            putback: SmallVec::new(),
            location: Location::start(options.file_name),
            line_ends: SmallVec::new(),
            depth: 0,
            max_depth: options.max_depth,
        }
    }

    /// Location of the next character to be read.
    pub fn location(&self) -> &Location {
        &self.location
    }

    // ---- Errors ----

    /// An error located at the character `c`, which has just been read.
    fn error_at_char(&self, c: Option<char>, message: impl Into<String>) -> Error {
        let mut location = self.location.clone();
        back_up(&mut location, c, &self.line_ends);
        Error::Syntax(SyntaxError::new(location, message))
    }

    fn err_unexpected_char(&self, c: Option<char>, looking_for: &str) -> Error {
        self.err_unexpected_char_in_ctx(c, &format!("while {}", looking_for))
    }

    fn err_unexpected_char_in_ctx(&self, c: Option<char>, context: &str) -> Error {
        let message = match c {
            None => format!("Unexpected end of file {}.", context),
            Some(c) if c == ' ' || c.is_ascii_graphic() => {
                format!("Unexpected '{}' {}.", c, context)
            }
            Some(c) => format!(
                "Unexpected unprintable character code {} (0x{:02x}) {}.",
                c as u32, c as u32, context
            ),
        };
        self.error_at_char(c, message)
    }

    // ---- Character input ----

    fn read_byte(&mut self) -> Result<Option<u8>> {
        let next = self.input.fill_buf().map(|buf| buf.first().copied())?;
        if next.is_some() {
            self.input.consume(1);
        }
        Ok(next)
    }

    /// Decode one UTF-8 character from the underlying stream.
    fn decode_char(&mut self) -> Result<Option<char>> {
        let Some(lead) = self.read_byte()? else {
            return Ok(None);
        };
        if lead.is_ascii() {
            return Ok(Some(char::from(lead)));
        }

        let width = match lead {
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => return Err(self.invalid_utf8(lead)),
        };
        let mut bytes = [lead, 0, 0, 0];
        for slot in bytes.iter_mut().take(width).skip(1) {
            match self.read_byte()? {
                Some(b) => *slot = b,
                None => return Err(self.invalid_utf8(lead)),
            }
        }
        match core::str::from_utf8(&bytes[..width]) {
            Ok(text) => Ok(text.chars().next()),
            Err(_) => Err(self.invalid_utf8(lead)),
        }
    }

    fn invalid_utf8(&self, lead: u8) -> Error {
        Error::Syntax(SyntaxError::new(
            self.location.clone(),
            format!("Invalid UTF-8 sequence starting with byte 0x{:02x}.", lead),
        ))
    }

    /// Read the next character, advancing the location even at end of
    /// input.
    fn read_char(&mut self) -> Result<Option<char>> {
        let c = match self.putback.pop() {
            Some(c) => c,
            None => self.decode_char()?,
        };
        if c == Some('\n') {
            if self.line_ends.len() == LINE_END_HISTORY {
                self.line_ends.remove(0);
            }
            self.line_ends.push(self.location.column);
        }
        self.location.increment_for_char(c);
        Ok(c)
    }

    fn read_char_not_eof(&mut self, looking_for: &str) -> Result<char> {
        match self.read_char()? {
            Some(c) => Ok(c),
            None => Err(self.err_unexpected_char(None, looking_for)),
        }
    }

    fn read_expect_char(&mut self, expected: char, looking_for: &str) -> Result<()> {
        let c = self.read_char()?;
        self.process_expect_char(c, expected, looking_for)
    }

    fn process_expect_char(
        &self,
        actual: Option<char>,
        expected: char,
        looking_for: &str,
    ) -> Result<()> {
        if actual == Some(expected) {
            Ok(())
        } else {
            Err(self.err_unexpected_char(actual, looking_for))
        }
    }

    /// Undo the most recent [`Self::read_char`] that returned `c`.
    fn putback(&mut self, c: Option<char>) {
        self.putback.push(c);
        back_up(&mut self.location, c, &self.line_ends);
        if c == Some('\n') {
            self.line_ends.pop();
        }
    }

    fn is_allowed_after_value(c: Option<char>) -> bool {
        matches!(
            c,
            None | Some(' ' | '\t' | '\n' | '\r' | ',' | ':' | ']' | '}' | ')' | '/')
        )
    }

    fn check_allowed_after_value(&mut self) -> Result<()> {
        let c = self.read_char()?;
        if !Self::is_allowed_after_value(c) {
            return Err(self.err_unexpected_char_in_ctx(
                c,
                "after a value; every value must be followed by EOF, whitespace, \
                 ',', ':', ']', '}', or ')'",
            ));
        }
        self.putback(c);
        Ok(())
    }

    // ---- Whitespace and comments ----

    /// Skip whitespace and comments, returning the first other
    /// character (consumed).
    fn skip_whitespace_and_comments(&mut self) -> Result<Option<char>> {
        loop {
            match self.read_char()? {
                Some(' ' | '\t' | '\n' | '\r' | ',') => {}
                Some('/') => match self.read_char()? {
                    Some('/') => loop {
                        match self.read_char()? {
                            None => return Ok(None),
                            Some('\n') => break,
                            Some(_) => {}
                        }
                    },
                    Some('*') => self.skip_block_comment()?,
                    other => {
                        return Err(
                            self.err_unexpected_char(other, "looking for character after '/'")
                        );
                    }
                },
                other => return Ok(other),
            }
        }
    }

    /// Skip the rest of a `/* */` comment whose opener has been read.
    /// Comments nest.
    fn skip_block_comment(&mut self) -> Result<()> {
        // Child comment counts, one entry per open comment.
        let mut open: SmallVec<[usize; 4]> = SmallVec::new();
        open.push(0);

        loop {
            match self.read_comment_char(&open)? {
                '/' => {
                    let c = self.read_comment_char(&open)?;
                    if c == '*' {
                        if let Some(children) = open.last_mut() {
                            *children += 1;
                        }
                        open.push(0);
                    } else {
                        self.putback(Some(c));
                    }
                }
                '*' => loop {
                    match self.read_comment_char(&open)? {
                        '/' => {
                            open.pop();
                            if open.is_empty() {
                                return Ok(());
                            }
                            break;
                        }
                        '*' => {}
                        _ => break,
                    }
                },
                _ => {}
            }
        }
    }

    fn read_comment_char(&mut self, open: &[usize]) -> Result<char> {
        if let Some(c) = self.read_char()? {
            return Ok(c);
        }

        let mut looking_for = String::from("inside \"/*\" comment, ");
        let nesting = open.len().saturating_sub(1);
        if nesting > 0 {
            looking_for.push_str(&format!(
                "nested inside {} other comments of the same kind, ",
                nesting
            ));
        }
        let children = open.last().copied().unwrap_or(0);
        if children > 0 {
            looking_for.push_str(&format!("which contains {} child comments, ", children));
        }
        looking_for.push_str("looking for corresponding \"*/\"");
        Err(self.err_unexpected_char(None, &looking_for))
    }

    // ---- Values ----

    /// Read the next value.
    ///
    /// Returns `None` at end of input, or at a closing delimiter, which
    /// is left unread.
    pub fn read_next_value(&mut self) -> Result<Option<Value>> {
        let c = self.skip_whitespace_and_comments()?;
        let value = match c {
            None | Some(']' | '}' | ')') => {
                self.putback(c);
                return Ok(None);
            }
            Some('[') => self.read_bracket_container(None)?,
            Some('{') => self.read_brace_container(None)?,
            Some('(') => self.read_tuple(None)?,
            Some('"') => Value::String(self.read_quoted(Quoted::String)?),
            Some('`') => {
                let name = self.read_quoted(Quoted::Symbol)?;
                self.read_symbol_or_tagged_container(&name)?
            }
            Some(c) if c == '-' || c.is_ascii_digit() => self.read_integer(c)?,
            Some(c) if is_identifier_start(c) => {
                let name = self.read_identifier(c)?;
                self.read_symbol_or_tagged_container(&name)?
            }
            other => {
                return Err(self.err_unexpected_char(other, "looking for the start of a value"));
            }
        };

        self.check_allowed_after_value()?;
        Ok(Some(value))
    }

    /// Read one value and then require end of input.
    pub fn read_exactly_one_value(&mut self) -> Result<Value> {
        let Some(value) = self.read_next_value()? else {
            // End of input or a closing delimiter; re-read to say which.
            let c = self.read_char()?;
            return Err(self.err_unexpected_char(c, "looking for the start of a value"));
        };
        self.read_expect_eof()?;
        Ok(value)
    }

    fn read_expect_eof(&mut self) -> Result<()> {
        let c = self.skip_whitespace_and_comments()?;
        if c.is_some() {
            return Err(self.err_unexpected_char(
                c,
                "looking for the end of a file that should only have one value",
            ));
        }
        Ok(())
    }

    fn enter_container(&mut self, open: char) -> Result<()> {
        if self.depth >= self.max_depth {
            return Err(self.error_at_char(
                Some(open),
                format!("nesting depth exceeds maximum of {}", self.max_depth),
            ));
        }
        self.depth += 1;
        Ok(())
    }

    fn leave_container(&mut self) {
        self.depth -= 1;
    }

    /// After a symbol name, a directly following `[`, `{`, or `(` makes
    /// it the tag of a container.
    fn read_symbol_or_tagged_container(&mut self, name: &str) -> Result<Value> {
        let c = self.read_char()?;
        let tag = || Symbol::new(name);
        match c {
            Some('[') => self.read_bracket_container(Some(tag())),
            Some('{') => self.read_brace_container(Some(tag())),
            Some('(') => self.read_tuple(Some(tag())),
            _ => {
                self.putback(c);
                Ok(Value::Symbol(tag()))
            }
        }
    }

    fn read_identifier(&mut self, first: char) -> Result<String> {
        let mut name = String::new();
        name.push(first);
        loop {
            match self.read_char()? {
                Some(c) if is_identifier_continue(c) => name.push(c),
                other => {
                    self.putback(other);
                    return Ok(name);
                }
            }
        }
    }

    fn read_integer(&mut self, first: char) -> Result<Value> {
        let negative = first == '-';
        let first_digit = if negative {
            let c = self.read_char()?;
            match c {
                Some(d) if d.is_ascii_digit() => d,
                _ => {
                    return Err(self.err_unexpected_char(
                        c,
                        "looking for digit after minus sign that starts an integer",
                    ));
                }
            }
        } else {
            first
        };

        let mut radix = 10;
        let mut digits = String::new();
        if first_digit == '0' {
            let c = self.read_char()?;
            let prefixed = match c {
                Some('x' | 'X') => Some(16),
                Some('o' | 'O') => Some(8),
                Some('b' | 'B') => Some(2),
                _ => None,
            };
            match prefixed {
                Some(r) => radix = r,
                None => {
                    self.putback(c);
                    digits.push('0');
                }
            }
        } else {
            digits.push(first_digit);
        }

        loop {
            match self.read_char()? {
                Some(c) if c.is_digit(radix) => digits.push(c),
                other => {
                    if digits.is_empty() {
                        return Err(self.err_unexpected_char(
                            other,
                            "looking for digits after radix prefix",
                        ));
                    }
                    self.putback(other);
                    break;
                }
            }
        }

        Integer::from_digits(radix, &digits, negative)
            .map(Value::Integer)
            .ok_or_else(|| self.error_at_char(None, format!("Invalid integer digits \"{}\".", digits)))
    }

    /// Read quoted text after its opening delimiter, decoding escapes.
    fn read_quoted(&mut self, quoted: Quoted) -> Result<String> {
        let what = quoted.description();
        let close = quoted.delimiter();
        let looking_for_close = format!("looking for closing '{}' in {}", close, what);
        let mut text = String::new();

        loop {
            let c = self.read_char_not_eof(&looking_for_close)?;
            if c == close {
                return Ok(text);
            }
            if c != '\\' {
                text.push(c);
                continue;
            }

            let escaped =
                self.read_char_not_eof(&format!("looking for character after '\\' in {}", what))?;
            let decoded = match escaped {
                '\\' | '"' | '\'' | '/' => escaped,
                '`' if quoted == Quoted::Symbol => escaped,
                'a' => '\x07',
                'b' => '\x08',
                'f' => '\x0C',
                'n' => '\n',
                'r' => '\r',
                't' => '\t',
                'v' => '\x0B',
                'x' => {
                    let hi = self.read_hex_digit(what)?;
                    let lo = self.read_hex_digit(what)?;
                    char::from(((hi << 4) | lo) as u8)
                }
                'u' => self.read_unicode_escape(what)?,
                other => {
                    return Err(self.err_unexpected_char(
                        Some(other),
                        &format!("looking for the character after a '\\' in a {}", what),
                    ));
                }
            };
            text.push(decoded);
        }
    }

    fn read_hex_digit(&mut self, what: &str) -> Result<u32> {
        let c = self.read_char()?;
        match c.and_then(|c| c.to_digit(16)) {
            Some(d) => Ok(d),
            None => Err(self.err_unexpected_char(
                c,
                &format!("looking for hex digit in escape sequence in {}", what),
            )),
        }
    }

    /// The code unit or code point after `\u`: four hex digits, or one
    /// to six inside braces.
    fn read_code_unit(&mut self, what: &str) -> Result<u32> {
        let c = self.read_char()?;
        if c != Some('{') {
            self.putback(c);
            let mut unit = 0;
            for _ in 0..4 {
                unit = (unit << 4) | self.read_hex_digit(what)?;
            }
            return Ok(unit);
        }

        let mut code = 0u32;
        let mut count = 0;
        loop {
            let c = self.read_char()?;
            match c {
                Some('}') if count > 0 => return Ok(code),
                Some(d) if count < 6 && d.is_ascii_hexdigit() => {
                    code = (code << 4) | d.to_digit(16).unwrap_or(0);
                    count += 1;
                }
                _ => {
                    return Err(self.err_unexpected_char(
                        c,
                        &format!("looking for hex digit or '}}' in \"\\u{{\" escape in {}", what),
                    ));
                }
            }
        }
    }

    fn read_unicode_escape(&mut self, what: &str) -> Result<char> {
        let unit = self.read_code_unit(what)?;
        let code = match unit {
            0xD800..=0xDBFF => {
                let looking_for = format!(
                    "looking for \"\\u\" low surrogate after high surrogate in {}",
                    what
                );
                self.read_expect_char('\\', &looking_for)?;
                self.read_expect_char('u', &looking_for)?;
                let low = self.read_code_unit(what)?;
                if !(0xDC00..=0xDFFF).contains(&low) {
                    return Err(self.error_at_char(
                        None,
                        format!(
                            "Escape 0x{:04X} after high surrogate 0x{:04X} is not a low surrogate.",
                            low, unit
                        ),
                    ));
                }
                0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00)
            }
            0xDC00..=0xDFFF => {
                return Err(self.error_at_char(
                    None,
                    format!("Unpaired low surrogate 0x{:04X} in {}.", unit, what),
                ));
            }
            other => other,
        };
        char::from_u32(code).ok_or_else(|| {
            self.error_at_char(
                None,
                format!("Code point 0x{:X} in {} is too large.", code, what),
            )
        })
    }

    /// After `[`: a sequence, or an ordered map if the first element is
    /// followed by `:`.
    fn read_bracket_container(&mut self, tag: Option<Symbol>) -> Result<Value> {
        self.enter_container('[')?;

        let c = self.skip_whitespace_and_comments()?;
        if c == Some(':') {
            let close = self.skip_whitespace_and_comments()?;
            self.process_expect_char(close, ']', "looking for ']' after ':' in empty ordered map")?;
            self.leave_container();
            return Ok(tagged(tag, Value::OrderedMap(OrderedMap::new())));
        }
        self.putback(c);

        let Some(first) = self.read_next_value()? else {
            self.read_expect_char(']', "looking for ']' at end of sequence")?;
            self.leave_container();
            return Ok(tagged(tag, Value::Sequence(Sequence::new())));
        };

        let c = self.skip_whitespace_and_comments()?;
        let value = if c == Some(':') {
            tracing::trace!(depth = self.depth, "reading ordered map");
            let mut map = OrderedMap::new();
            let first_value = self.read_map_value()?;
            map.add(first, first_value);
            self.read_map_entries(&mut map, ']', "looking for ']' at end of ordered map")?;
            Value::OrderedMap(map)
        } else {
            tracing::trace!(depth = self.depth, "reading sequence");
            self.putback(c);
            let mut seq = vec![first];
            while let Some(next) = self.read_next_value()? {
                seq.push(next);
            }
            self.read_expect_char(']', "looking for ']' at end of sequence")?;
            Value::Sequence(seq)
        };

        self.leave_container();
        Ok(tagged(tag, value))
    }

    /// After `{`: a `{{ }}` set, a map, or a single-brace set whose
    /// first element is not followed by `:`.
    fn read_brace_container(&mut self, tag: Option<Symbol>) -> Result<Value> {
        self.enter_container('{')?;

        let c = self.read_char()?;
        if c == Some('{') {
            let set = self.read_double_brace_set()?;
            self.leave_container();
            return Ok(tagged(tag, Value::Set(set)));
        }
        self.putback(c);

        let c = self.skip_whitespace_and_comments()?;
        if c == Some(':') {
            let close = self.skip_whitespace_and_comments()?;
            self.process_expect_char(close, '}', "looking for '}' after ':' in empty map")?;
            self.leave_container();
            return Ok(tagged(tag, Value::Map(Map::new())));
        }
        self.putback(c);

        let first_location = self.location.clone();
        let Some(first) = self.read_next_value()? else {
            self.read_expect_char('}', "looking for '}' at end of map")?;
            self.leave_container();
            return Ok(tagged(tag, Value::Map(Map::new())));
        };

        let c = self.skip_whitespace_and_comments()?;
        let value = if c == Some(':') {
            tracing::trace!(depth = self.depth, "reading map");
            let mut map = Map::new();
            let first_value = self.read_map_value()?;
            map.add(first, first_value);
            self.read_map_entries(&mut map, '}', "looking for '}' at end of map")?;
            Value::Map(map)
        } else {
            tracing::trace!(depth = self.depth, "reading single-brace set");
            self.putback(c);
            let mut set = Set::new();
            self.insert_set_element(&mut set, first, first_location)?;
            self.read_set_elements(&mut set)?;
            self.read_expect_char('}', "looking for '}' at end of set")?;
            Value::Set(set)
        };

        self.leave_container();
        Ok(tagged(tag, value))
    }

    /// After `{{`.
    fn read_double_brace_set(&mut self) -> Result<Set> {
        tracing::trace!(depth = self.depth, "reading set");
        let mut set = Set::new();
        self.read_set_elements(&mut set)?;
        self.read_expect_char('}', "looking for \"}}\" at end of set")?;
        self.read_expect_char('}', "looking for '}' immediately after '}' at end of set")?;
        Ok(set)
    }

    fn read_set_elements(&mut self, set: &mut Set) -> Result<()> {
        loop {
            let c = self.skip_whitespace_and_comments()?;
            self.putback(c);
            let location = self.location.clone();
            match self.read_next_value()? {
                Some(element) => self.insert_set_element(set, element, location)?,
                None => return Ok(()),
            }
        }
    }

    fn insert_set_element(&self, set: &mut Set, element: Value, location: Location) -> Result<()> {
        if set.contains(&element) {
            return Err(duplicate_error(location, "set element", &element));
        }
        set.insert(element);
        Ok(())
    }

    /// After `(`.
    fn read_tuple(&mut self, tag: Option<Symbol>) -> Result<Value> {
        self.enter_container('(')?;
        tracing::trace!(depth = self.depth, "reading tuple");
        let mut tuple = Tuple::new();
        while let Some(next) = self.read_next_value()? {
            tuple.push(next);
        }
        self.read_expect_char(')', "looking for ')' at end of tuple")?;
        self.leave_container();
        Ok(tagged(tag, Value::Tuple(tuple)))
    }

    /// The value of a map entry whose `:` has been read.
    fn read_map_value(&mut self) -> Result<Value> {
        match self.read_next_value()? {
            Some(value) => Ok(value),
            None => {
                let c = self.read_char()?;
                Err(self.err_unexpected_char(c, "looking for value after ':' in map entry"))
            }
        }
    }

    /// Read `key:value` entries up to and including `close`.
    fn read_map_entries<M: KeyedBuilder>(
        &mut self,
        map: &mut M,
        close: char,
        end_message: &str,
    ) -> Result<()> {
        loop {
            let c = self.skip_whitespace_and_comments()?;
            self.putback(c);
            let key_location = self.location.clone();

            let Some(key) = self.read_next_value()? else {
                return self.read_expect_char(close, end_message);
            };

            let colon = self.skip_whitespace_and_comments()?;
            self.process_expect_char(colon, ':', "looking for ':' in map entry")?;
            let value = self.read_map_value()?;

            if map.contains(&key) {
                return Err(duplicate_error(key_location, "map key", &key));
            }
            map.add(key, value);
        }
    }
}

/// Step `location` back over `c`, the character just read.
fn back_up(location: &mut Location, c: Option<char>, line_ends: &[u32]) {
    location.decrement_for_char(c);
    if c == Some('\n') {
        if let Some(&column) = line_ends.last() {
            location.column = column;
        }
    }
}

fn tagged(tag: Option<Symbol>, value: Value) -> Value {
    match tag {
        Some(tag) => value.with_tag(tag),
        None => value,
    }
}

fn duplicate_error(location: Location, what: &str, key: &Value) -> Error {
    let mut text = key.to_string_with(&WriteOptions::default());
    if text.chars().count() > MAX_DUPLICATE_KEY_CHARS {
        text = text.chars().take(MAX_DUPLICATE_KEY_CHARS - 3).collect();
        text.push_str("...");
    }
    Error::Syntax(SyntaxError::new(
        location,
        format!("Duplicate {}: {}", what, text),
    ))
}

impl Value {
    /// Parse exactly one value from GDVN text.
    pub fn read_from_string(text: &str) -> Result<Value> {
        Reader::new(text.as_bytes(), ReadOptions::default()).read_exactly_one_value()
    }

    /// Parse exactly one value from a GDVN file.
    pub fn read_from_file(path: impl AsRef<Path>) -> Result<Value> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let options = ReadOptions::default().with_file_name(path.display().to_string());
        Reader::new(file, options).read_exactly_one_value()
    }

    /// Read the next value from `reader`, if there is one.
    pub fn read_next_from_reader<R: Read>(reader: &mut Reader<R>) -> Result<Option<Value>> {
        reader.read_next_value()
    }
}
