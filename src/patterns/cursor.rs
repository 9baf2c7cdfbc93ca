//! Cursor operations over the raw lines of one log file

use crate::patterns::{FieldMap, LinePattern};
use crate::{parse_error, Result};

/// An index cursor over the remaining lines of a log, with O(1) peek and
/// advance. All scan operations of a format parser share one cursor, so a
/// consumed line is never seen twice.
pub struct LineCursor<'a> {
    lines: &'a [String],
    pos: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(lines: &'a [String]) -> Self {
        Self { lines, pos: 0 }
    }

    /// 1-based number of the line the next operation would look at
    pub fn line_number(&self) -> usize {
        self.pos + 1
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.lines.len()
    }

    /// The next line, without consuming it
    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).map(|l| l.as_str())
    }

    fn advance(&mut self) -> Option<&'a str> {
        let line = self.peek();
        if line.is_some() {
            self.pos += 1;
        }
        line
    }

    /// Pop and discard lines until one matches `pattern`; the matching line
    /// is consumed and its fields returned. `Ok(None)` means the stream ran
    /// out first, which is the expected way for a scan loop to terminate at
    /// end-of-log.
    pub fn until(&mut self, pattern: &LinePattern) -> Result<Option<FieldMap>> {
        while let Some(line) = self.advance() {
            if let Some(fields) = pattern.parse_line(line)? {
                return Ok(Some(fields));
            }
        }
        Ok(None)
    }

    /// Pop exactly one line, which must match `pattern`. A non-matching
    /// line or an empty stream means the log is malformed or truncated.
    pub fn take(&mut self, pattern: &LinePattern) -> Result<FieldMap> {
        let number = self.line_number();
        match self.advance() {
            None => Err(parse_error(
                format!("unexpected end of input, expected {:?}", pattern.pattern()),
                Some(number),
                None,
            )),
            Some(line) => pattern.parse_line(line)?.ok_or_else(|| {
                parse_error(
                    format!("line does not match {:?}", pattern.pattern()),
                    Some(number),
                    Some(line),
                )
            }),
        }
    }

    /// Pop consecutive lines matching any of `patterns` (first match wins)
    /// and return their fields in order. The first line that matches none
    /// of the candidates is left unconsumed for the next operation.
    pub fn take_while(&mut self, patterns: &[&LinePattern]) -> Result<Vec<FieldMap>> {
        let mut matches = Vec::new();
        'lines: while let Some(line) = self.peek() {
            for pattern in patterns {
                if let Some(fields) = pattern.parse_line(line)? {
                    self.pos += 1;
                    matches.push(fields);
                    continue 'lines;
                }
            }
            break;
        }
        Ok(matches)
    }
}
