//! Indentation-aware line buffer.
//!
//! A [`LineBuffer`] records each line together with the indent level that was
//! active when it was appended. Nothing reaches the sink until
//! [`LineBuffer::flush`], which expands indent levels using the indent unit
//! (see [`crate::indent_unit`]).

use std::borrow::Cow;
use std::fmt::{self, Display};
use std::io::{self, Write};

use crate::error::FlushError;
use crate::indent::indent_unit;

/// One formatted, not-yet-written line.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SourceLine {
    indent: usize,
    text: String,
}

impl SourceLine {
    /// Indent level the line was recorded at.
    #[inline]
    pub fn indent(&self) -> usize {
        self.indent
    }

    /// Line text, without indentation or terminator.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Write `unit` repeated `indent` times, the text, then `\n`.
    fn write_to<W: Write>(&self, unit: &str, out: &mut W) -> io::Result<()> {
        for _ in 0..self.indent {
            out.write_all(unit.as_bytes())?;
        }
        out.write_all(self.text.as_bytes())?;
        out.write_all(b"\n")
    }

    /// Number of bytes [`Self::write_to`] produces.
    fn rendered_len(&self, unit: &str) -> usize {
        self.indent * unit.len() + self.text.len() + 1
    }
}

/// Ordered buffer of source lines bound to an output sink.
///
/// Lines are formatted when appended, so later changes to the values used
/// to build a line never affect it. Flushing writes every recorded line; it
/// keeps no "already flushed" state, so a second flush writes them again.
pub struct LineBuffer<W: Write> {
    lines: Vec<SourceLine>,
    /// Current indentation level, read by every append.
    indent: usize,
    sink: W,
    /// Per-buffer indent unit; `None` uses the process-wide unit.
    indent_unit: Option<Cow<'static, str>>,
}

impl<W: Write> LineBuffer<W> {
    /// Create an empty buffer that flushes into `sink`.
    pub fn new(sink: W) -> Self {
        Self {
            lines: Vec::new(),
            indent: 0,
            sink,
            indent_unit: None,
        }
    }

    /// Create an empty buffer that expands indentation with `unit` instead of
    /// the process-wide indent unit.
    pub fn with_indent_unit(sink: W, unit: impl Into<Cow<'static, str>>) -> Self {
        Self {
            indent_unit: Some(unit.into()),
            ..Self::new(sink)
        }
    }

    /// Append a line at the current indent level.
    ///
    /// Accepts anything `Display`, typically `format_args!(..)` or a `&str`.
    pub fn append_line(&mut self, line: impl Display) {
        self.lines.push(SourceLine {
            indent: self.indent,
            text: line.to_string(),
        });
    }

    /// Increase indentation level.
    pub fn indent(&mut self) {
        self.indent += 1;
    }

    /// Decrease indentation level.
    ///
    /// At level 0 this does nothing: an unmatched unindent in a generator
    /// must not abort code generation.
    pub fn unindent(&mut self) {
        if self.indent == 0 {
            tracing::trace!("unindent at level 0 ignored");
            return;
        }
        self.indent -= 1;
    }

    /// Append a line, then indent. The line uses the level before the indent.
    pub fn append_line_then_indent(&mut self, line: impl Display) {
        self.append_line(line);
        self.indent();
    }

    /// Unindent, then append a line. The line uses the level after the unindent.
    pub fn unindent_then_append_line(&mut self, line: impl Display) {
        self.unindent();
        self.append_line(line);
    }

    /// Current indentation level.
    #[inline]
    pub fn indent_level(&self) -> usize {
        self.indent
    }

    /// Number of recorded lines.
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if no lines have been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Recorded lines in emission order.
    pub fn lines(&self) -> impl ExactSizeIterator<Item = &SourceLine> {
        self.lines.iter()
    }

    /// The bound sink.
    pub fn sink(&self) -> &W {
        &self.sink
    }

    /// Consume the buffer and return the sink, e.g. a `Vec<u8>` after flushing.
    pub fn into_sink(self) -> W {
        self.sink
    }

    /// Render all lines to a string without touching the sink.
    pub fn render(&self) -> String {
        let unit = self.resolved_indent_unit();
        let len = self.lines.iter().map(|l| l.rendered_len(&unit)).sum();
        let mut out = String::with_capacity(len);
        for line in &self.lines {
            for _ in 0..line.indent {
                out.push_str(&unit);
            }
            out.push_str(&line.text);
            out.push('\n');
        }
        out
    }

    /// Write every line to the sink in insertion order.
    ///
    /// Stops at the first write failure. Lines written before the failure are
    /// left in the sink.
    pub fn flush(&mut self) -> Result<(), FlushError> {
        let unit = self.resolved_indent_unit();
        tracing::debug!(lines = self.lines.len(), "flushing line buffer");

        let mut bytes = 0;
        for (index, line) in self.lines.iter().enumerate() {
            if let Err(source) = line.write_to(&unit, &mut self.sink) {
                tracing::debug!(line = index, error = %source, "sink write failed");
                return Err(FlushError::Write {
                    line: index,
                    source,
                });
            }
            bytes += line.rendered_len(&unit);
        }
        self.sink
            .flush()
            .map_err(|source| FlushError::Flush { source })?;

        tracing::trace!(bytes, "line buffer flushed");
        Ok(())
    }

    /// Snapshot of the indent unit used for one flush or render.
    fn resolved_indent_unit(&self) -> Cow<'static, str> {
        match &self.indent_unit {
            Some(unit) => unit.clone(),
            None => indent_unit(),
        }
    }
}

impl<W: Write> fmt::Debug for LineBuffer<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineBuffer")
            .field("lines", &self.lines)
            .field("indent", &self.indent)
            .field("indent_unit", &self.indent_unit)
            .finish_non_exhaustive()
    }
}
