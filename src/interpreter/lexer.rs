/// Physical and logical line reading.
///
/// Splits raw source into physical lines (normalizing CRLF), blanks comment
/// lines, and joins trailing-backslash continuations into logical lines
/// with 1-based first-line numbers.
pub mod lines;
/// The character scanner.
///
/// Low-level reads over one logical line: bare words, quoted strings, and
/// the full escape-sequence table.
pub mod scanner;
/// Tokens and lexical lines.
///
/// Defines the `Token` and `LexicalLine` types, the block open/close
/// classifier, and the `tokenize` entry point that turns a whole script
/// into classified lines plus error contexts.
pub mod tokens;
