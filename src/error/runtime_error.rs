#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can be produced by command handlers or by value
/// coercions at run time.
///
/// Runtime errors carry no source location of their own; the evaluator wraps
/// them into an exception breakout tagged with the context of the command
/// that raised them.
pub enum RuntimeError {
    /// The dispatcher had no handler for the command name.
    UnknownCommand {
        /// The name that was looked up.
        name: String,
    },
    /// A fixed-arity command received the wrong number of arguments.
    ExpectedArguments {
        /// The number of arguments the command requires.
        count: usize,
    },
    /// A variable was read before it was set.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// Attempted to divide (or take a remainder) by zero.
    DivisionByZero,
    /// A string could not be parsed as an integer.
    InvalidInteger {
        /// The text that failed to parse.
        text: String,
    },
    /// A string could not be parsed as a number.
    InvalidNumber {
        /// The text that failed to parse.
        text: String,
    },
    /// An array subscript was outside the bounds of the array.
    SubscriptOutOfBounds {
        /// The index that was requested.
        index: i64,
    },
    /// A `range` command was given a zero step.
    ZeroStep,
    /// A `range` command was given an unsupported number of arguments.
    RangeArguments {
        /// The number of arguments that were supplied.
        count: usize,
    },
    /// Writing to the output sink failed.
    OutputFailed {
        /// Details reported by the sink.
        message: String,
    },
    /// A `break` escaped to the top level without an enclosing loop.
    BreakWithoutLoop,
    /// A `continue` escaped to the top level without an enclosing loop.
    ContinueWithoutLoop,
    /// A `return` escaped to a host that expected none.
    NothingToReturn,
    /// An error raised by the `throw` command, carrying its message verbatim.
    Thrown {
        /// The thrown message.
        message: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCommand { name } => write!(f, "unknown command: {name}"),

            Self::ExpectedArguments { count } => write!(f, "expected {count} argument(s)"),

            Self::UndefinedVariable { name } => write!(f, "variable undefined: {name}"),

            Self::DivisionByZero => write!(f, "division by zero"),

            Self::InvalidInteger { text } => write!(f, "invalid integer: {text}"),

            Self::InvalidNumber { text } => write!(f, "invalid number: {text}"),

            Self::SubscriptOutOfBounds { index } => {
                write!(f, "subscript out of bounds: {index}")
            },

            Self::ZeroStep => write!(f, "step cannot be 0"),

            Self::RangeArguments { count } => write!(f, "range cannot take {count} arguments"),

            Self::OutputFailed { message } => write!(f, "{message}"),

            Self::BreakWithoutLoop => write!(f, "break without loop"),

            Self::ContinueWithoutLoop => write!(f, "continue without loop"),

            Self::NothingToReturn => write!(f, "nothing to return to"),

            Self::Thrown { message } => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for RuntimeError {}
