use std::{iter::Peekable, str::Chars};

use crate::error::ParseError;

/// A character-level scanner over one logical line.
///
/// Provides the low-level reads the tokenizer is built from: whitespace
/// skipping, bare words, quoted strings, and escape sequences. The scanner
/// carries the physical line number so every error it produces is located.
pub struct CharScanner<'a> {
    chars: Peekable<Chars<'a>>,
    line:  usize,
}

impl<'a> CharScanner<'a> {
    /// Creates a scanner over `text`, reporting errors against `line`.
    #[must_use]
    pub fn new(text: &'a str, line: usize) -> Self {
        Self { chars: text.chars().peekable(), line }
    }

    /// Returns the line number used for error reporting.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Peeks at the next character without consuming it.
    pub fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    /// Consumes and returns the next character.
    pub fn advance(&mut self) -> Option<char> {
        self.chars.next()
    }

    /// Consumes characters up to the next non-whitespace character.
    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Reads a bare word, expanding escapes and terminating at whitespace, a
    /// `)`, or the end of the line. The terminator is left unconsumed.
    ///
    /// Returns the word and whether any escape was expanded; a word with an
    /// expanded escape no longer counts as bare.
    ///
    /// # Errors
    /// Propagates escape-sequence errors.
    pub fn read_bare(&mut self) -> Result<(String, bool), ParseError> {
        let mut word = String::new();
        let mut escaped = false;
        while let Some(next) = self.peek() {
            if next.is_whitespace() || next == ')' {
                break;
            }
            self.advance();
            if next == '\\' {
                word.push(self.read_escape()?);
                escaped = true;
            } else {
                word.push(next);
            }
        }
        Ok((word, escaped))
    }

    /// Reads a quoted string whose opening delimiter has already been
    /// consumed, expanding escapes and terminating at an unescaped
    /// `delimiter`.
    ///
    /// # Errors
    /// Returns `ParseError::MissingEndQuote` if the line ends first, and
    /// propagates escape-sequence errors.
    pub fn read_quoted(&mut self, delimiter: char) -> Result<String, ParseError> {
        let mut text = String::new();
        loop {
            match self.advance() {
                None => return Err(ParseError::MissingEndQuote { line: self.line }),
                Some('\\') => text.push(self.read_escape()?),
                Some(next) if next == delimiter => return Ok(text),
                Some(next) => text.push(next),
            }
        }
    }

    /// Reads one escape sequence; the leading backslash has already been
    /// consumed.
    ///
    /// Recognized forms: the control escapes `\a \b \f \n \r \t \v`, the
    /// literal escapes `\( \) \? \' \" \\` and escaped space, `\xHH`,
    /// `\uHHHH`, `\UHHHHHHHH`, and one to three octal digits starting with
    /// `0`–`7`.
    ///
    /// # Errors
    /// `ParseError::EscapeCodeUnderflow` when the line ends inside the
    /// sequence, `ParseError::InvalidEscape` for unknown escape characters,
    /// digits that do not parse, and out-of-range code points.
    pub fn read_escape(&mut self) -> Result<char, ParseError> {
        let Some(first) = self.advance() else {
            return Err(ParseError::EscapeCodeUnderflow { line: self.line });
        };
        match first {
            '(' | ')' | '?' | '\'' | '"' | ' ' | '\\' => Ok(first),
            'a' => Ok('\u{07}'),
            'b' => Ok('\u{08}'),
            'f' => Ok('\u{0C}'),
            'n' => Ok('\n'),
            'r' => Ok('\r'),
            't' => Ok('\t'),
            'v' => Ok('\u{0B}'),
            'x' => self.read_numeric_escape(2),
            'u' => self.read_numeric_escape(4),
            'U' => self.read_numeric_escape(8),
            '0'..='7' => self.read_octal_escape(first),
            other => Err(ParseError::InvalidEscape { sequence: other.to_string(),
                                                     line:     self.line, }),
        }
    }

    /// Reads exactly `digits` hexadecimal digits and converts them to a code
    /// point.
    fn read_numeric_escape(&mut self, digits: usize) -> Result<char, ParseError> {
        let mut text = String::with_capacity(digits);
        for _ in 0..digits {
            match self.advance() {
                Some(next) => text.push(next),
                None => return Err(ParseError::EscapeCodeUnderflow { line: self.line }),
            }
        }

        let code = u32::from_str_radix(&text, 16).map_err(|_| {
                       ParseError::InvalidEscape { sequence: text.clone(),
                                                   line:     self.line, }
                   })?;
        char::from_u32(code).ok_or(ParseError::InvalidEscape { sequence: text,
                                                               line:     self.line, })
    }

    /// Reads up to two more octal digits after `first` and converts the run
    /// to a code point. Values above `0o377` do not fit a byte and are
    /// rejected.
    fn read_octal_escape(&mut self, first: char) -> Result<char, ParseError> {
        let mut text = String::with_capacity(3);
        text.push(first);
        while text.len() < 3 && self.peek().is_some_and(|next| ('0'..='7').contains(&next)) {
            if let Some(next) = self.advance() {
                text.push(next);
            }
        }

        let code = u32::from_str_radix(&text, 8).map_err(|_| {
                       ParseError::InvalidEscape { sequence: text.clone(),
                                                   line:     self.line, }
                   })?;
        if code > 0xFF {
            return Err(ParseError::InvalidEscape { sequence: text,
                                                   line:     self.line, });
        }
        char::from_u32(code).ok_or(ParseError::InvalidEscape { sequence: text,
                                                               line:     self.line, })
    }
}
