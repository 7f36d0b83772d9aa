use std::io::Write;

use crate::{
    error::RuntimeError,
    interpreter::{
        runner::core::{CommandResult, StdRunner, expect_args},
        value::{core::Value, number::Number},
    },
    util::num::{index_to_usize, int_argument},
};

impl<W: Write> StdRunner<W> {
    /// The `arr` command: joins its arguments with newlines, building an
    /// array value.
    pub(crate) fn arr(_: &mut Self, args: &[Value]) -> CommandResult {
        let joined = args.iter()
                         .map(Value::as_str)
                         .collect::<Vec<_>>()
                         .join("\n");
        Ok(Value::from(joined))
    }

    /// The `range` command: a newline-delimited run of integers.
    ///
    /// One argument counts up from 0, two give a half-open `start..end`,
    /// and a third supplies the step. An empty range yields the empty
    /// value.
    pub(crate) fn range(_: &mut Self, args: &[Value]) -> CommandResult {
        let parsed = args.iter()
                         .map(int_argument)
                         .collect::<Result<Vec<_>, _>>()?;
        let (start, end, step) = match parsed.as_slice() {
            [end] => (0, *end, 1),
            [start, end] => (*start, *end, 1),
            [start, end, step] => (*start, *end, *step),
            _ => return Err(RuntimeError::RangeArguments { count: parsed.len() }),
        };
        if step == 0 {
            return Err(RuntimeError::ZeroStep);
        }

        let mut pieces = Vec::new();
        let mut current = start;
        while (step > 0 && current < end) || (step < 0 && current > end) {
            pieces.push(current.to_string());
            current += step;
        }
        Ok(Value::from(pieces.join("\n")))
    }

    /// The `subscript` command (`[]`): one element of an array, by
    /// zero-based index.
    pub(crate) fn subscript(_: &mut Self, args: &[Value]) -> CommandResult {
        let [list, index] = expect_args(args)?;
        let index = int_argument(index)?;
        let items = list.array();
        match index_to_usize(index).and_then(|i| items.get(i)) {
            Some(item) => Ok(item.clone()),
            None => Err(RuntimeError::SubscriptOutOfBounds { index }),
        }
    }

    /// The `len` command: the length of a string in bytes.
    pub(crate) fn len(_: &mut Self, args: &[Value]) -> CommandResult {
        let [value] = expect_args(args)?;
        Ok(Value::from(Number::from_bigint(value.as_str().len().into())))
    }

    /// The `count` command: the total number of array elements across all
    /// arguments.
    pub(crate) fn count(_: &mut Self, args: &[Value]) -> CommandResult {
        let total: usize = args.iter().map(|arg| arg.array().len()).sum();
        Ok(Value::from(Number::from_bigint(total.into())))
    }
}
