//! Source Writer
//!
//! Line-oriented text accumulation with indentation management.

/// Accumulates generated source text.
///
/// Indentation is four spaces per level and is applied to the first write
/// of each line. The writer reproduces exactly what it is told: blank
/// lines are kept as-is and no trailing newline is appended by
/// [`SourceWriter::finish`].
#[derive(Debug)]
pub struct SourceWriter {
    output: String,
    indent_level: usize,
    at_line_start: bool,
}

impl Default for SourceWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceWriter {
    const INDENT: &'static str = "    ";

    /// Creates an empty writer.
    pub fn new() -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            at_line_start: true,
        }
    }

    /// Writes text, indenting first when at the start of a line.
    pub fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.at_line_start {
            for _ in 0..self.indent_level {
                self.output.push_str(Self::INDENT);
            }
            self.at_line_start = false;
        }
        self.output.push_str(text);
    }

    /// Writes one full line: indentation, `text`, newline.
    pub fn line(&mut self, text: &str) {
        self.write(text);
        self.newline();
    }

    /// Writes every line of `text` at the current indentation.
    pub fn block(&mut self, text: &str) {
        for line in text.lines() {
            self.line(line);
        }
    }

    /// Ends the current line.
    pub fn newline(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }

    /// Writes an empty line. Never indented.
    pub fn blank_line(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }

    /// Increases the indentation level.
    pub fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decreases the indentation level.
    pub fn decrease_indent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Consumes the writer and returns the accumulated text.
    pub fn finish(self) -> String {
        self.output
    }
}
