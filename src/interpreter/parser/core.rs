use crate::{
    ast::Runnable,
    error::ParseError,
    interpreter::{
        lexer::tokens::LexicalLine,
        parser::{
            branch::IfScanner,
            catch::TryScanner,
            loops::{ForScanner, WhileScanner},
        },
    },
};

/// Builds the runnable tree for a whole script.
///
/// Feeds every classified line, with its context string, through a
/// top-level [`BodyScanner`] and finishes it at end of input.
///
/// # Parameters
/// - `lines`: The classified lines, as produced by `tokenize`.
/// - `contexts`: One display context per line (e.g. `"line 7"`).
///
/// # Errors
/// Returns the first structural error: a stray `}`, invalid tokens around a
/// block, or an unterminated block at EOF. The two slices must be the same
/// length.
pub fn scan_all(lines: &[LexicalLine], contexts: &[String]) -> Result<Runnable, ParseError> {
    if lines.len() != contexts.len() {
        return Err(ParseError::ContextMismatch);
    }

    let mut scanner = BodyScanner::new(false);
    for (line, context) in lines.iter().zip(contexts) {
        scanner.feed(line, context)?;
    }
    scanner.finish()
}

/// A stateful consumer of classified lines that accumulates the runnables
/// of one block body.
///
/// A body scanner opened with `expects_close` completes when it sees a line
/// that closes a block; the close line's remaining tokens are left for the
/// enclosing construct to interpret (`else`, `catch`, or nothing). The
/// top-level scanner instead completes at end of input and treats a close
/// line as an error.
///
/// While a nested block is open, every line is first offered to its
/// scanner; completed blocks are appended to the body.
pub struct BodyScanner {
    items:         Vec<Runnable>,
    expects_close: bool,
    sub:           Option<Box<BlockScanner>>,
}

/// The block constructs a body scanner can have open at its top.
enum BlockScanner {
    If(IfScanner),
    While(WhileScanner),
    For(ForScanner),
    Try(TryScanner),
}

impl BlockScanner {
    fn feed(&mut self,
            line: &LexicalLine,
            context: &str)
            -> Result<Option<Runnable>, ParseError> {
        match self {
            Self::If(scanner) => scanner.feed(line, context),
            Self::While(scanner) => scanner.feed(line, context),
            Self::For(scanner) => scanner.feed(line, context),
            Self::Try(scanner) => scanner.feed(line, context),
        }
    }
}

impl BodyScanner {
    /// Creates a body scanner. `expects_close` selects between a block body
    /// (completed by a `}` line) and the top-level script body (completed at
    /// end of input).
    #[must_use]
    pub fn new(expects_close: bool) -> Self {
        Self { items: Vec::new(), expects_close, sub: None }
    }

    /// Consumes one line.
    ///
    /// Returns the completed body when the line closes this block;
    /// otherwise `None`.
    ///
    /// # Errors
    /// Structural errors from this body or any construct open inside it.
    pub fn feed(&mut self,
                line: &LexicalLine,
                context: &str)
                -> Result<Option<Runnable>, ParseError> {
        if line.is_blank() {
            return Ok(None);
        }

        if let Some(sub) = &mut self.sub {
            if let Some(block) = sub.feed(line, context)? {
                self.sub = None;
                self.items.push(block);
            }
            return Ok(None);
        }

        if line.closes_block {
            if self.expects_close {
                return Ok(Some(Runnable::Sequence(std::mem::take(&mut self.items))));
            }
            return Err(ParseError::UnexpectedCloseBrace { context: context.to_string() });
        }

        if line.opens_block {
            let scanner = match line.tokens[0].text() {
                "if" => BlockScanner::If(IfScanner::new(line, context)),
                "while" => BlockScanner::While(WhileScanner::new(line, context)),
                "for" => BlockScanner::For(ForScanner::new(line, context)?),
                "try" => BlockScanner::Try(TryScanner::new(line, context)?),
                keyword => {
                    // else and catch are only valid on close lines; def is
                    // reserved but not implemented.
                    return Err(ParseError::UnexpectedKeyword { keyword: keyword.to_string(),
                                                               context: context.to_string(), });
                },
            };
            self.sub = Some(Box::new(scanner));
            return Ok(None);
        }

        self.items.push(Self::statement(line, context)?);
        Ok(None)
    }

    /// Signals end of input.
    ///
    /// # Errors
    /// Returns `missing '}' at EOF` if any block is still open.
    ///
    /// # Returns
    /// The accumulated body as a sequence.
    pub fn finish(&mut self) -> Result<Runnable, ParseError> {
        if self.sub.is_some() || self.expects_close {
            return Err(ParseError::MissingCloseBrace);
        }
        Ok(Runnable::Sequence(std::mem::take(&mut self.items)))
    }

    /// Lowers a plain (non-block) line, giving the loop-control and return
    /// keywords their own nodes.
    fn statement(line: &LexicalLine, context: &str) -> Result<Runnable, ParseError> {
        let Some(first) = line.tokens.first() else {
            return Ok(line.runnable(context));
        };

        if first.is_bare("break") {
            if line.tokens.len() > 1 {
                return Err(ParseError::UnexpectedTokens { construct: "'break'",
                                                          context:   context.to_string(), });
            }
            return Ok(Runnable::Break { context: context.to_string() });
        }

        if first.is_bare("continue") {
            if line.tokens.len() > 1 {
                return Err(ParseError::UnexpectedTokens { construct: "'continue'",
                                                          context:   context.to_string(), });
            }
            return Ok(Runnable::Continue { context: context.to_string() });
        }

        if first.is_bare("return") {
            let arguments = line.tokens[1..].iter()
                                            .map(|token| token.runnable(context))
                                            .collect();
            return Ok(Runnable::Return { arguments,
                                         context: context.to_string() });
        }

        Ok(line.runnable(context))
    }
}
