use crate::{
    ast::{Runnable, condition_from_tokens},
    error::ParseError,
    interpreter::{lexer::tokens::LexicalLine, parser::core::BodyScanner},
};

/// Scans an `if` statement.
///
/// Started by an `if <cond> {` line. Each branch body ends at a close line,
/// whose remaining tokens select what happens next: nothing terminates the
/// statement, `else {` begins the final unconditional branch, and
/// `else if <cond> {` begins another conditional branch. Anything else is
/// an error, as is any `else` after the unconditional branch.
pub struct IfScanner {
    conditions: Vec<Runnable>,
    branches:   Vec<Runnable>,
    body:       BodyScanner,
    saw_else:   bool,
}

impl IfScanner {
    /// Starts scanning from the opening line; its tokens after `if` form
    /// the first condition.
    #[must_use]
    pub fn new(line: &LexicalLine, context: &str) -> Self {
        Self { conditions: vec![condition_from_tokens(&line.tokens[1..], context)],
               branches:   Vec::new(),
               body:       BodyScanner::new(true),
               saw_else:   false, }
    }

    /// Consumes one line, returning the completed `if` runnable once its
    /// final branch closes.
    ///
    /// # Errors
    /// Invalid tokens on a branch-closing line, or a second `else`.
    pub fn feed(&mut self,
                line: &LexicalLine,
                context: &str)
                -> Result<Option<Runnable>, ParseError> {
        let Some(branch) = self.body.feed(line, context)? else {
            return Ok(None);
        };
        self.branches.push(branch);

        // The close line decides whether the statement continues.
        if line.tokens.is_empty() && !line.opens_block {
            return Ok(Some(Runnable::If { conditions: std::mem::take(&mut self.conditions),
                                          branches:   std::mem::take(&mut self.branches), }));
        }

        if !line.opens_block || !line.tokens[0].is_bare("else") {
            return Err(ParseError::UnexpectedTokens { construct: "if branch",
                                                      context:   context.to_string(), });
        }
        if self.saw_else {
            return Err(ParseError::DuplicateElse { context: context.to_string() });
        }

        if line.tokens.len() == 1 {
            // } else {
            self.saw_else = true;
        } else if line.tokens[1].is_bare("if") {
            // } else if <cond> {
            self.conditions.push(condition_from_tokens(&line.tokens[2..], context));
        } else {
            return Err(ParseError::UnexpectedTokens { construct: "'else'",
                                                      context:   context.to_string(), });
        }

        self.body = BodyScanner::new(true);
        Ok(None)
    }
}
