use crate::{
    ast::Runnable,
    error::ParseError,
    interpreter::{lexer::tokens::LexicalLine, parser::core::BodyScanner},
};

/// Scans a `try` block with its optional catch clause.
///
/// Started by a bare `try {` line. The line closing the guarded body may be
/// a bare `}` (no catch), `} catch {` (catch without a variable), or
/// `} catch <var> {` (the exception message is bound to the variable). A
/// catch body always closes with a bare `}`.
pub struct TryScanner {
    body:          BodyScanner,
    try_block:     Option<Runnable>,
    variable:      Option<Runnable>,
    catch_context: String,
}

impl TryScanner {
    /// Starts scanning from the opening line.
    ///
    /// # Errors
    /// The `try` keyword takes no arguments.
    pub fn new(line: &LexicalLine, context: &str) -> Result<Self, ParseError> {
        if line.tokens.len() != 1 {
            return Err(ParseError::UnexpectedTokens { construct: "'try'",
                                                      context:   context.to_string(), });
        }
        Ok(Self { body:          BodyScanner::new(true),
                  try_block:     None,
                  variable:      None,
                  catch_context: context.to_string(), })
    }

    /// Consumes one line, returning the completed block once the guarded
    /// body (and the catch body, if one was opened) closes.
    ///
    /// # Errors
    /// Invalid tokens on either closing line.
    pub fn feed(&mut self,
                line: &LexicalLine,
                context: &str)
                -> Result<Option<Runnable>, ParseError> {
        let Some(block) = self.body.feed(line, context)? else {
            return Ok(None);
        };

        if let Some(try_block) = self.try_block.take() {
            // The catch body must close the whole statement.
            if !line.tokens.is_empty() || line.opens_block {
                return Err(ParseError::UnexpectedTokens { construct: "catch block",
                                                          context:   context.to_string(), });
            }
            return Ok(Some(Runnable::Try { body:     Box::new(try_block),
                                           catch:    Box::new(block),
                                           variable: self.variable.take().map(Box::new),
                                           context:  self.catch_context.clone(), }));
        }

        // The guarded body just closed; a bare } means there is no catch.
        if line.tokens.is_empty() && !line.opens_block {
            return Ok(Some(Runnable::Try { body:     Box::new(block),
                                           catch:    Box::new(Runnable::Sequence(Vec::new())),
                                           variable: None,
                                           context:  context.to_string(), }));
        }

        if !line.opens_block || !line.tokens[0].is_bare("catch") || line.tokens.len() > 2 {
            return Err(ParseError::UnexpectedTokens { construct: "try block",
                                                      context:   context.to_string(), });
        }

        if line.tokens.len() == 2 {
            self.variable = Some(line.tokens[1].runnable(context));
        }
        self.catch_context = context.to_string();
        self.try_block = Some(block);
        self.body = BodyScanner::new(true);
        Ok(None)
    }
}
