use std::io::Write;

use crate::{
    error::RuntimeError,
    interpreter::{
        runner::core::{CommandResult, StdRunner},
        value::core::Value,
    },
};

impl<W: Write> StdRunner<W> {
    /// The `echo` command: its arguments joined with single spaces.
    pub(crate) fn echo(_: &mut Self, args: &[Value]) -> CommandResult {
        Ok(Value::from(join_args(args)))
    }

    /// The `puts` command: writes its arguments, joined with spaces, to the
    /// output sink followed by a newline.
    pub(crate) fn puts(runner: &mut Self, args: &[Value]) -> CommandResult {
        runner.write_output(&join_args(args), true)
    }

    /// The `print` command: like `puts`, without the newline.
    pub(crate) fn print(runner: &mut Self, args: &[Value]) -> CommandResult {
        runner.write_output(&join_args(args), false)
    }

    /// The `throw` command: raises an exception whose message is the
    /// arguments joined with spaces.
    pub(crate) fn throw(_: &mut Self, args: &[Value]) -> CommandResult {
        Err(RuntimeError::Thrown { message: join_args(args) })
    }
}

fn join_args(args: &[Value]) -> String {
    args.iter()
        .map(Value::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}
