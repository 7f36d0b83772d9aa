use crate::interpreter::{
    lexer::tokens::{LexicalLine, Token},
    value::core::Value,
};

/// Represents one executable node of a parsed script.
///
/// The structural scanner lowers classified lines into this tree, and the
/// evaluator walks it. Nodes are immutable once built. Every node evaluates
/// to a [`Value`] or escapes with a breakout; the `context` fields carry the
/// human-readable source location (`"line N"`) used when a breakout reaches
/// the top level.
#[derive(Debug, Clone)]
pub enum Runnable {
    /// A literal value. Never fails.
    Value(Value),
    /// A command invocation. The name itself is a runnable, since a nested
    /// command may compute it.
    Command {
        /// Evaluates to the command name.
        name:      Box<Runnable>,
        /// Evaluated left to right before dispatch.
        arguments: Vec<Runnable>,
        /// Source location for error reporting.
        context:   String,
    },
    /// Zero or more nodes run in order, evaluating to the last node's value.
    Sequence(Vec<Runnable>),
    /// A condition from an `if` or `while` header.
    ///
    /// Empty conditions are true; a single argument is tested for
    /// truthiness; with more arguments, all string renditions must equal
    /// the first.
    Condition {
        /// The condition's argument runnables.
        arguments: Vec<Runnable>,
        /// Set when the condition was prefixed with the bare word `not`.
        negated:   bool,
    },
    /// An `if` statement with any number of `else if` branches and an
    /// optional trailing `else`.
    If {
        /// One condition per conditional branch.
        conditions: Vec<Runnable>,
        /// Either one branch per condition, or one more for the `else`.
        branches:   Vec<Runnable>,
    },
    /// A `while` loop.
    While {
        /// The loop condition.
        condition: Box<Runnable>,
        /// The loop body.
        body:      Box<Runnable>,
    },
    /// A `for` loop over the array rendition of an expression.
    For {
        /// Evaluates to the loop variable name; evaluated once at entry.
        variable:   Option<Box<Runnable>>,
        /// Evaluates to the iterated value.
        expression: Box<Runnable>,
        /// The loop body.
        body:       Box<Runnable>,
        /// Source location for error reporting.
        context:    String,
    },
    /// A `try` block with an optional catch body and catch variable.
    Try {
        /// The guarded body.
        body:     Box<Runnable>,
        /// The catch body; an empty sequence when no catch was written.
        catch:    Box<Runnable>,
        /// Evaluates to the variable that receives the exception message.
        variable: Option<Box<Runnable>>,
        /// Source location of the catch clause.
        context:  String,
    },
    /// A `break` statement.
    Break {
        /// Source location for error reporting.
        context: String,
    },
    /// A `continue` statement.
    Continue {
        /// Source location for error reporting.
        context: String,
    },
    /// A `return` statement. Its arguments are joined with single spaces.
    Return {
        /// The returned expressions.
        arguments: Vec<Runnable>,
        /// Source location for error reporting.
        context:   String,
    },
}

impl Token {
    /// Lowers the token to a runnable: literal text becomes a value node and
    /// a nested command becomes a command node.
    #[must_use]
    pub fn runnable(&self, context: &str) -> Runnable {
        match self {
            Self::Bare(text) | Self::Quoted(text) => Runnable::Value(Value::from(text.as_str())),
            Self::Nested(tokens) => command_from_tokens(tokens, context),
        }
    }
}

impl LexicalLine {
    /// Lowers the line to a command runnable. A blank line lowers to the
    /// empty value.
    #[must_use]
    pub fn runnable(&self, context: &str) -> Runnable {
        command_from_tokens(&self.tokens, context)
    }
}

/// Builds a command runnable from a token list: the first token names the
/// command and the rest are its arguments. An empty list lowers to the
/// empty value.
#[must_use]
pub fn command_from_tokens(tokens: &[Token], context: &str) -> Runnable {
    let Some((name, arguments)) = tokens.split_first() else {
        return Runnable::Value(Value::empty());
    };
    Runnable::Command { name:      Box::new(name.runnable(context)),
                        arguments: arguments.iter()
                                            .map(|token| token.runnable(context))
                                            .collect(),
                        context:   context.to_string(), }
}

/// Builds a condition runnable from the tail tokens of an `if` or `while`
/// header. A leading bare `not` complements the condition over the
/// remaining tokens.
#[must_use]
pub fn condition_from_tokens(tokens: &[Token], context: &str) -> Runnable {
    let (negated, tokens) = match tokens.split_first() {
        Some((first, rest)) if first.is_bare("not") => (true, rest),
        _ => (false, tokens),
    };
    Runnable::Condition { arguments: tokens.iter()
                                           .map(|token| token.runnable(context))
                                           .collect(),
                          negated }
}
