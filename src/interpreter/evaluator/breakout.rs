use crate::{error::RuntimeError, interpreter::value::core::Value};

/// Represents a non-local control signal propagating up the runnable tree.
///
/// Breakouts carry exceptions, loop control, and return values through the
/// same channel: every node evaluates to either a value or a breakout, and
/// each construct absorbs exactly the kinds it is specified to absorb
/// (loops take breaks and continues, `try` takes exceptions, nothing takes
/// returns). A breakout that reaches the top level is reported through
/// [`error`](Self::error): the non-exception kinds map to fixed messages so
/// that, for example, a stray `break` surfaces as `break without loop`.
#[derive(Debug, Clone)]
pub enum Breakout {
    /// A failing command or coercion, tagged with the raising context.
    Exception {
        /// Source location of the raising command.
        context: String,
        /// The underlying error.
        error:   RuntimeError,
    },
    /// A `break` travelling to the nearest enclosing loop.
    Break {
        /// Source location of the `break`.
        context: String,
    },
    /// A `continue` travelling to the nearest enclosing loop.
    Continue {
        /// Source location of the `continue`.
        context: String,
    },
    /// A `return` travelling to the script boundary.
    Return {
        /// Source location of the `return`.
        context: String,
        /// The returned value.
        value:   Value,
    },
}

impl Breakout {
    /// Returns the source context the breakout was raised at.
    #[must_use]
    pub fn context(&self) -> &str {
        match self {
            Self::Exception { context, .. }
            | Self::Break { context }
            | Self::Continue { context }
            | Self::Return { context, .. } => context,
        }
    }

    /// Returns the error the breakout stands for if it escapes to the top
    /// level.
    #[must_use]
    pub fn error(&self) -> RuntimeError {
        match self {
            Self::Exception { error, .. } => error.clone(),
            Self::Break { .. } => RuntimeError::BreakWithoutLoop,
            Self::Continue { .. } => RuntimeError::ContinueWithoutLoop,
            Self::Return { .. } => RuntimeError::NothingToReturn,
        }
    }

    /// Returns the carried value, which only return breakouts have.
    #[must_use]
    pub const fn value(&self) -> Option<&Value> {
        match self {
            Self::Return { value, .. } => Some(value),
            _ => None,
        }
    }
}

/// Result type used by the evaluator: every node evaluates to a value or
/// escapes with a breakout.
pub type Outcome = Result<Value, Breakout>;
