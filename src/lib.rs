//! # pragmash
//!
//! pragmash is a small shell-like scripting language in which every value
//! is a newline-delimited string that can also be read as an array, a
//! boolean, or an arbitrary-precision number. This crate implements the
//! core interpreter: the lexer, the structural parser, the value model,
//! the tree-walking evaluator, and the standard command dispatcher.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed code.
///
/// This module declares the `Runnable` enum whose variants represent every
/// executable construct of the language, plus the lowering from lexical
/// tokens and lines into runnables. The tree is built by the structural
/// scanner and walked by the evaluator.
///
/// # Responsibilities
/// - Defines command, sequence, condition, branch, loop, try, and control
///   nodes.
/// - Attaches context strings to the nodes that can raise errors.
/// - Lowers tokens and lines, including the `$name` and condition forms.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or running code. Parse errors carry line numbers or context strings;
/// runtime errors carry stable messages that double as the exception text
/// scripts can catch.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, runtime).
/// - Keeps the externally visible wording stable.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of script execution.
///
/// This module ties together lexing, parsing, evaluation, the value model,
/// and the command dispatcher to provide a complete runtime for the
/// language. It exposes the components an embedding host needs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, runner.
/// - Provides the dispatcher interface hosts can implement.
/// - Manages the flow of values and breakouts between phases.
pub mod interpreter;
/// General utilities shared across the interpreter.
///
/// Helpers that do not belong to a single phase, such as checked numeric
/// conversions used by command handlers.
pub mod util;

pub use crate::{
    ast::Runnable,
    error::{ParseError, RuntimeError},
    interpreter::{
        evaluator::breakout::{Breakout, Outcome},
        lexer::tokens::{LexicalLine, Token, tokenize},
        parser::core::scan_all,
        runner::core::{Runner, StdRunner},
        value::{core::Value, number::Number},
    },
};

/// Parses a whole script into a runnable tree.
///
/// This is the composition of [`tokenize`] and [`scan_all`]: the source is
/// split into classified logical lines with `"line N"` contexts, and the
/// lines are assembled into a single runnable sequence.
///
/// # Errors
/// Returns the first lexical or structural error; parsing does not
/// recover.
///
/// # Examples
/// ```
/// use pragmash::{StdRunner, parse_script};
///
/// let script = parse_script("set x 7\nreturn (+ $x 1)").unwrap();
///
/// let mut runner = StdRunner::with_output(Vec::new());
/// let breakout = script.run(&mut runner).unwrap_err();
/// assert_eq!(breakout.value().unwrap().as_str(), "8");
/// ```
pub fn parse_script(source: &str) -> Result<Runnable, ParseError> {
    let (lines, contexts) = tokenize(source)?;
    scan_all(&lines, &contexts)
}
