use core::fmt;

/// A sink that discards its input and counts characters.
#[derive(Debug, Default)]
pub struct CountingSink {
    count: usize,
}

impl CountingSink {
    pub fn count(&self) -> usize {
        self.count
    }
}

impl fmt::Write for CountingSink {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.count += s.chars().count();
        Ok(())
    }

    fn write_char(&mut self, _: char) -> fmt::Result {
        self.count += 1;
        Ok(())
    }
}
