use crate::error::ParseError;

/// Reads physical lines from a source string.
///
/// A physical line ends at `'\n'`; a trailing `'\r'` is stripped so CRLF
/// sources behave like LF sources. Line numbers are 1-based. A trailing
/// newline at the very end of the input does not produce an extra empty
/// line.
pub struct PhysLineReader<'a> {
    remaining: Option<&'a str>,
    number:    usize,
}

impl<'a> PhysLineReader<'a> {
    /// Creates a reader positioned at line 1 of `source`.
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self { remaining: Some(source), number: 0 }
    }
}

impl<'a> Iterator for PhysLineReader<'a> {
    type Item = (&'a str, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.remaining?;
        if rest.is_empty() {
            self.remaining = None;
            return None;
        }

        let line = match rest.find('\n') {
            Some(index) => {
                self.remaining = Some(&rest[index + 1..]);
                &rest[..index]
            },
            None => {
                self.remaining = None;
                rest
            },
        };

        self.number += 1;
        Some((line.strip_suffix('\r').unwrap_or(line), self.number))
    }
}

/// A logical line: one or more physical lines joined by trailing-backslash
/// continuations, trimmed of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// The joined, trimmed line content.
    pub text:   String,
    /// The number of the first physical line.
    pub number: usize,
}

/// Joins physical lines into logical lines.
///
/// Comments are handled per physical line, before continuation: a physical
/// line whose first non-whitespace character is `#` is blanked, so a
/// backslash inside a comment never continues the line, and a continued
/// line followed by a comment simply picks up nothing. After comment
/// blanking, a line ending in a backslash has the backslash removed and the
/// next physical line appended with no separator.
pub struct LogicalLineReader<'a> {
    physical: PhysLineReader<'a>,
}

impl<'a> LogicalLineReader<'a> {
    /// Creates a reader over `source`.
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self { physical: PhysLineReader::new(source) }
    }
}

impl Iterator for LogicalLineReader<'_> {
    type Item = Result<LogicalLine, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let (first, number) = self.physical.next()?;
        let mut current = blank_comment(first);
        let mut buffer = String::new();

        loop {
            if let Some(stem) = current.strip_suffix('\\') {
                buffer.push_str(stem);
                match self.physical.next() {
                    Some((line, _)) => current = blank_comment(line),
                    None => return Some(Err(ParseError::EofAfterLineContinuation)),
                }
            } else {
                buffer.push_str(current);
                break;
            }
        }

        Some(Ok(LogicalLine { text: buffer.trim().to_string(), number }))
    }
}

/// Returns the empty string for comment lines and the line itself otherwise.
fn blank_comment(line: &str) -> &str {
    if line.trim_start().starts_with('#') {
        ""
    } else {
        line
    }
}
