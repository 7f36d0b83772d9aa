use std::{
    collections::HashMap,
    io::{self, Write},
};

use crate::{error::RuntimeError, interpreter::value::core::Value};

/// The command dispatcher interface the evaluator runs against.
///
/// This is the only coupling between the evaluator and the outside world:
/// every command invocation, including the variable accesses behind `get`,
/// `set`, loop variables, and catch variables, goes through
/// [`run_command`](Self::run_command). A host embedding the interpreter can
/// supply its own implementation.
pub trait Runner {
    /// Executes a command by name.
    ///
    /// # Errors
    /// An error for unknown commands or failing handlers; the evaluator
    /// wraps it into an exception breakout with the calling context.
    fn run_command(&mut self, name: &str, args: &[Value]) -> Result<Value, RuntimeError>;
}

/// Result type shared by all command handlers.
pub type CommandResult = Result<Value, RuntimeError>;

type CommandFn<W> = fn(&mut StdRunner<W>, &[Value]) -> CommandResult;

/// The standard command dispatcher.
///
/// Owns the script's single global variable namespace and a table mapping
/// command names to handlers. `get` and `set` are handled by the
/// dispatcher itself rather than through the table, and operator spellings
/// (`+`, `[]`, `<=`, …) are rewritten to their command names before
/// lookup.
///
/// Output-producing commands (`puts`, `print`) write to the sink the
/// runner was built with: standard output in the CLI, and any other
/// `Write` implementation for hosts and tests.
pub struct StdRunner<W: Write> {
    commands:  HashMap<&'static str, CommandFn<W>>,
    variables: HashMap<String, Value>,
    output:    W,
}

impl StdRunner<io::Stdout> {
    /// Creates a runner writing to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl Default for StdRunner<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> StdRunner<W> {
    /// Creates a runner writing command output to `output`.
    #[must_use]
    pub fn with_output(output: W) -> Self {
        let mut commands: HashMap<&'static str, CommandFn<W>> = HashMap::new();

        commands.insert("add", Self::add);
        commands.insert("sub", Self::sub);
        commands.insert("mul", Self::mul);
        commands.insert("div", Self::div);
        commands.insert("mod", Self::modulo);
        commands.insert("pow", Self::pow);
        commands.insert("lt", Self::less);
        commands.insert("le", Self::less_equal);
        commands.insert("gt", Self::greater);
        commands.insert("ge", Self::greater_equal);
        commands.insert("eq", Self::equal);
        commands.insert("not", Self::not);
        commands.insert("and", Self::and);
        commands.insert("or", Self::or);

        commands.insert("arr", Self::arr);
        commands.insert("range", Self::range);
        commands.insert("subscript", Self::subscript);
        commands.insert("len", Self::len);
        commands.insert("count", Self::count);

        commands.insert("echo", Self::echo);
        commands.insert("puts", Self::puts);
        commands.insert("print", Self::print);
        commands.insert("throw", Self::throw);

        Self { commands,
               variables: HashMap::new(),
               output }
    }

    /// Sets a variable, creating it if necessary.
    pub fn set_variable(&mut self, name: &str, value: Value) {
        self.variables.insert(name.to_string(), value);
    }

    /// Returns a variable's value if it is defined.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Consumes the runner and returns its output sink.
    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes `text` to the output sink, with or without a trailing
    /// newline.
    pub(crate) fn write_output(&mut self, text: &str, newline: bool) -> CommandResult {
        let result = if newline {
            writeln!(self.output, "{text}")
        } else {
            write!(self.output, "{text}")
        };
        result.map_err(|error| RuntimeError::OutputFailed { message: error.to_string() })?;
        Ok(Value::empty())
    }

    /// The `get` command: reads a variable.
    fn get(&mut self, args: &[Value]) -> CommandResult {
        let [name] = expect_args(args)?;
        match self.variables.get(name.as_str()) {
            Some(value) => Ok(value.clone()),
            None => Err(RuntimeError::UndefinedVariable { name: name.as_str().to_string() }),
        }
    }

    /// The `set` command: writes a variable.
    fn set(&mut self, args: &[Value]) -> CommandResult {
        let [name, value] = expect_args(args)?;
        self.variables.insert(name.as_str().to_string(), value.clone());
        Ok(Value::empty())
    }
}

impl<W: Write> Runner for StdRunner<W> {
    fn run_command(&mut self, name: &str, args: &[Value]) -> Result<Value, RuntimeError> {
        let name = rewrite_operator(name);
        match name {
            "get" => self.get(args),
            "set" => self.set(args),
            _ => match self.commands.get(name).copied() {
                Some(handler) => handler(self, args),
                None => Err(RuntimeError::UnknownCommand { name: name.to_string() }),
            },
        }
    }
}

/// Rewrites operator spellings to the command names that implement them.
/// Every other name passes through unchanged.
#[must_use]
pub fn rewrite_operator(name: &str) -> &str {
    match name {
        "+" => "add",
        "-" => "sub",
        "*" => "mul",
        "/" => "div",
        "%" => "mod",
        "**" => "pow",
        "[]" => "subscript",
        "<" => "lt",
        "<=" => "le",
        ">" => "gt",
        ">=" => "ge",
        "=" => "eq",
        "&&" => "and",
        "||" => "or",
        other => other,
    }
}

/// Checks a fixed argument count, exposing the arguments as an array.
///
/// # Errors
/// Returns `expected N argument(s)` when the count does not match.
pub fn expect_args<const N: usize>(args: &[Value]) -> Result<&[Value; N], RuntimeError> {
    args.try_into()
        .map_err(|_| RuntimeError::ExpectedArguments { count: N })
}
