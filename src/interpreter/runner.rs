/// The dispatcher itself.
///
/// Defines the `Runner` trait the evaluator is written against, the
/// `StdRunner` implementation with its command table, variable store, and
/// operator rewrites, and the argument-count helper shared by handlers.
pub mod core;
/// Arithmetic, comparison, and logic commands.
pub mod ops;
/// Array commands.
pub mod collection;
/// Output and exception commands.
pub mod io;
