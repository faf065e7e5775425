use core::fmt;

/// A position in a named or unnamed source.
///
/// Lines and columns are 1-based; the column counts characters. A
/// newline sits at the column just past its line's last character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub file_name: Option<String>,
    pub line: u32,
    pub column: u32,
    /// 0-based byte offset from the start of the source.
    pub byte_offset: usize,
}

impl Location {
    pub fn new(file_name: Option<String>, line: u32, column: u32, byte_offset: usize) -> Self {
        Self {
            file_name,
            line,
            column,
            byte_offset,
        }
    }

    /// The start of a source.
    pub fn start(file_name: Option<String>) -> Self {
        Self::new(file_name, 1, 1, 0)
    }

    /// Advance past `c`. End of input (`None`) advances the column only,
    /// so that it can be put back uniformly.
    pub fn increment_for_char(&mut self, c: Option<char>) {
        match c {
            Some('\n') => {
                self.line += 1;
                self.column = 1;
            }
            _ => self.column += 1,
        }
        if let Some(c) = c {
            self.byte_offset += c.len_utf8();
        }
    }

    /// Undo [`Self::increment_for_char`]. Backing up over a newline
    /// cannot know the previous line's length and leaves the column at 0
    /// for the caller to restore.
    pub fn decrement_for_char(&mut self, c: Option<char>) {
        match c {
            Some('\n') => {
                self.line = self.line.saturating_sub(1).max(1);
                self.column = 0;
            }
            _ => self.decrement_column(),
        }
        if let Some(c) = c {
            self.byte_offset = self.byte_offset.saturating_sub(c.len_utf8());
        }
    }

    /// Decrement the column unless it is already zero.
    pub fn decrement_column(&mut self) {
        self.column = self.column.saturating_sub(1);
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::start(None)
    }
}

/// `name:line:col`, or `line:col` when the source has no name.
impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.file_name {
            write!(f, "{}:", name)?;
        }
        write!(f, "{}:{}", self.line, self.column)
    }
}
