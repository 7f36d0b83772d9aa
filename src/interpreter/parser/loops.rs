use crate::{
    ast::{Runnable, condition_from_tokens},
    error::ParseError,
    interpreter::{lexer::tokens::LexicalLine, parser::core::BodyScanner},
};

/// Scans a `while` loop: `while <cond> {`, a body, and a bare `}` line.
pub struct WhileScanner {
    condition: Runnable,
    body:      BodyScanner,
}

impl WhileScanner {
    /// Starts scanning from the opening line; its tokens after `while` form
    /// the condition.
    #[must_use]
    pub fn new(line: &LexicalLine, context: &str) -> Self {
        Self { condition: condition_from_tokens(&line.tokens[1..], context),
               body:      BodyScanner::new(true), }
    }

    /// Consumes one line, returning the completed loop once its body
    /// closes.
    ///
    /// # Errors
    /// The closing line must be a bare `}` with no other tokens.
    pub fn feed(&mut self,
                line: &LexicalLine,
                context: &str)
                -> Result<Option<Runnable>, ParseError> {
        let Some(body) = self.body.feed(line, context)? else {
            return Ok(None);
        };

        if !line.tokens.is_empty() || line.opens_block {
            return Err(ParseError::UnexpectedTokens { construct: "while block",
                                                      context:   context.to_string(), });
        }
        Ok(Some(Runnable::While { condition: Box::new(self.condition.clone()),
                                  body:      Box::new(body), }))
    }
}

/// Scans a `for` loop: `for <expr> {` or `for <var> <expr> {`, a body, and
/// a bare `}` line.
pub struct ForScanner {
    variable:   Option<Runnable>,
    expression: Runnable,
    context:    String,
    body:       BodyScanner,
}

impl ForScanner {
    /// Starts scanning from the opening line.
    ///
    /// # Errors
    /// The header must carry one or two tokens after `for`.
    pub fn new(line: &LexicalLine, context: &str) -> Result<Self, ParseError> {
        let (variable, expression) = match line.tokens.len() {
            2 => (None, line.tokens[1].runnable(context)),
            3 => (Some(line.tokens[1].runnable(context)), line.tokens[2].runnable(context)),
            _ => return Err(ParseError::ForHeader { context: context.to_string() }),
        };
        Ok(Self { variable,
                  expression,
                  context: context.to_string(),
                  body: BodyScanner::new(true) })
    }

    /// Consumes one line, returning the completed loop once its body
    /// closes.
    ///
    /// # Errors
    /// The closing line must be a bare `}` with no other tokens.
    pub fn feed(&mut self,
                line: &LexicalLine,
                context: &str)
                -> Result<Option<Runnable>, ParseError> {
        let Some(body) = self.body.feed(line, context)? else {
            return Ok(None);
        };

        if !line.tokens.is_empty() || line.opens_block {
            return Err(ParseError::UnexpectedTokens { construct: "for block",
                                                      context:   context.to_string(), });
        }
        Ok(Some(Runnable::For { variable:   self.variable.clone().map(Box::new),
                                expression: Box::new(self.expression.clone()),
                                body:       Box::new(body),
                                context:    self.context.clone(), }))
    }
}
