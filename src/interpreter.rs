/// The evaluator executes the runnable tree and routes control signals.
///
/// The evaluator walks the tree built by the parser, runs commands through
/// the dispatcher, and propagates the four-variant breakout signal
/// (exception, break, continue, return) that replaces host-language
/// exceptions. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Implements the `run` protocol for every node.
/// - Enforces left-to-right, source-order evaluation.
/// - Absorbs breakouts exactly where the language says to (loops for
///   break/continue, `try` for exceptions).
pub mod evaluator;
/// The lexer turns raw source into classified logical lines.
///
/// The lexer layers physical line reading, comment and continuation
/// handling, character-level tokenization with escapes and nested
/// commands, and block open/close classification. This is the first stage
/// of interpretation.
///
/// # Responsibilities
/// - Splits the source into logical lines with stable line numbers.
/// - Produces bare, quoted, and nested tokens, tracking bareness for the
///   classifier.
/// - Reports lexical errors with their line numbers.
pub mod lexer;
/// The parser assembles classified lines into the runnable tree.
///
/// The structural scanner consumes one line at a time and maintains a
/// stack of open constructs, so `if`/`while`/`for`/`try` blocks nest
/// without lookahead. This enables the runner to execute scripts as plain
/// trees.
///
/// # Responsibilities
/// - Builds `if`/`else if`/`else`, `while`, `for`, and `try`/`catch`
///   blocks from open and close lines.
/// - Lowers `break`, `continue`, and `return` lines to control nodes.
/// - Validates block punctuation, reporting errors with context info.
pub mod parser;
/// The runner dispatches commands and owns the variable store.
///
/// Defines the dispatcher interface the evaluator calls through, plus the
/// standard implementation: a command table with operator rewrites, the
/// global variable namespace, and the built-in command set.
///
/// # Responsibilities
/// - Maps command names (and operator spellings) to handlers.
/// - Handles `get` and `set` directly.
/// - Writes command output to a configurable sink.
pub mod runner;
/// The value module defines the runtime data types for evaluation.
///
/// Declares the polymorphic string value with its cached array, boolean,
/// and numeric renditions, and the arbitrary-precision number type with
/// its promotion rules.
///
/// # Responsibilities
/// - Keeps the string, array, boolean, and numeric renditions consistent.
/// - Caches derived renditions so conversions happen at most once.
/// - Implements exact integer arithmetic with float contagion.
pub mod value;
