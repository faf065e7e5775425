/// Options for writing a value as GDVN text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOptions {
    /// Use newlines and indentation to show structure and to try to
    /// stay within [`Self::target_line_width`]. Otherwise everything is
    /// written on one line.
    pub enable_indentation: bool,

    /// Current indentation level. A new line is indented by
    /// `indent_level * spaces_per_indent_level` spaces.
    pub indent_level: usize,

    pub spaces_per_indent_level: usize,

    /// Target line width in characters when indenting. Zero takes every
    /// possible line break.
    pub target_line_width: usize,

    /// Write integers too large for 64 bits in decimal instead of `0x`
    /// hexadecimal.
    pub write_large_integers_as_decimal: bool,
}

impl WriteOptions {
    pub const DEFAULT_SPACES_PER_INDENT_LEVEL: usize = 2;
    pub const DEFAULT_TARGET_LINE_WIDTH: usize = 72;

    pub fn new() -> Self {
        Self::default()
    }

    /// Default options with indentation enabled.
    pub fn lines() -> Self {
        Self::default().with_indentation(true)
    }

    pub fn with_indentation(mut self, enable: bool) -> Self {
        self.enable_indentation = enable;
        self
    }

    pub fn with_indent_level(mut self, level: usize) -> Self {
        self.indent_level = level;
        self
    }

    pub fn with_spaces_per_indent_level(mut self, spaces: usize) -> Self {
        self.spaces_per_indent_level = spaces;
        self
    }

    pub fn with_target_line_width(mut self, width: usize) -> Self {
        self.target_line_width = width;
        self
    }

    pub fn with_large_integers_as_decimal(mut self, decimal: bool) -> Self {
        self.write_large_integers_as_decimal = decimal;
        self
    }

    /// Number of spaces for the current indentation level.
    pub fn current_indentation_space_count(&self) -> usize {
        self.indent_level * self.spaces_per_indent_level
    }

    /// Characters that fit between the current indentation and the
    /// target width. Negative when the indentation alone is too wide.
    pub fn line_capacity(&self) -> i64 {
        self.target_line_width as i64 - self.current_indentation_space_count() as i64
    }
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            enable_indentation: false,
            indent_level: 0,
            spaces_per_indent_level: Self::DEFAULT_SPACES_PER_INDENT_LEVEL,
            target_line_width: Self::DEFAULT_TARGET_LINE_WIDTH,
            write_large_integers_as_decimal: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_capacity() {
        let options = WriteOptions::lines()
            .with_target_line_width(10)
            .with_indent_level(2)
            .with_spaces_per_indent_level(3);
        assert_eq!(options.current_indentation_space_count(), 6);
        assert_eq!(options.line_capacity(), 4);
        assert_eq!(options.with_indent_level(5).line_capacity(), -5);
    }
}
