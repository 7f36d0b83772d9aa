use std::{cmp::Ordering, io::Write};

use crate::{
    error::RuntimeError,
    interpreter::{
        runner::core::{CommandResult, StdRunner, expect_args},
        value::{core::Value, number::Number},
    },
};

impl<W: Write> StdRunner<W> {
    /// The `add` command (`+`): sums any number of numbers. No arguments
    /// sum to 0.
    pub(crate) fn add(_: &mut Self, args: &[Value]) -> CommandResult {
        let mut sum = Number::from_int(0);
        for arg in args {
            sum = sum.add(&arg.number()?);
        }
        Ok(Value::from(sum))
    }

    /// The `sub` command (`-`): subtracts the second number from the first.
    pub(crate) fn sub(_: &mut Self, args: &[Value]) -> CommandResult {
        let [left, right] = expect_args(args)?;
        Ok(Value::from(left.number()?.sub(&right.number()?)))
    }

    /// The `mul` command (`*`): multiplies any number of numbers. No
    /// arguments multiply to 1.
    pub(crate) fn mul(_: &mut Self, args: &[Value]) -> CommandResult {
        let mut product = Number::from_int(1);
        for arg in args {
            product = product.mul(&arg.number()?);
        }
        Ok(Value::from(product))
    }

    /// The `div` command (`/`): divides the first number by the second.
    /// Exact integer division stays integer; division by zero is an error.
    pub(crate) fn div(_: &mut Self, args: &[Value]) -> CommandResult {
        let [left, right] = expect_args(args)?;
        Ok(Value::from(left.number()?.div(&right.number()?)?))
    }

    /// The `mod` command (`%`): the remainder of dividing the first number
    /// by the second.
    pub(crate) fn modulo(_: &mut Self, args: &[Value]) -> CommandResult {
        let [left, right] = expect_args(args)?;
        Ok(Value::from(left.number()?.modulo(&right.number()?)?))
    }

    /// The `pow` command (`**`): raises the first number to the second.
    pub(crate) fn pow(_: &mut Self, args: &[Value]) -> CommandResult {
        let [left, right] = expect_args(args)?;
        Ok(Value::from(left.number()?.pow(&right.number()?)))
    }

    /// The `lt` command (`<`).
    pub(crate) fn less(_: &mut Self, args: &[Value]) -> CommandResult {
        Ok(Value::from(compare(args)? == Ordering::Less))
    }

    /// The `le` command (`<=`).
    pub(crate) fn less_equal(_: &mut Self, args: &[Value]) -> CommandResult {
        Ok(Value::from(compare(args)? != Ordering::Greater))
    }

    /// The `gt` command (`>`).
    pub(crate) fn greater(_: &mut Self, args: &[Value]) -> CommandResult {
        Ok(Value::from(compare(args)? == Ordering::Greater))
    }

    /// The `ge` command (`>=`).
    pub(crate) fn greater_equal(_: &mut Self, args: &[Value]) -> CommandResult {
        Ok(Value::from(compare(args)? != Ordering::Less))
    }

    /// The `eq` command (`=`): true when every argument's string rendition
    /// equals the first.
    pub(crate) fn equal(_: &mut Self, args: &[Value]) -> CommandResult {
        let equal = match args.split_first() {
            Some((first, rest)) => rest.iter().all(|arg| arg.as_str() == first.as_str()),
            None => true,
        };
        Ok(Value::from(equal))
    }

    /// The `not` command: the complement of the condition forms. One
    /// argument tests truthiness; more arguments test inequality with the
    /// first.
    pub(crate) fn not(_: &mut Self, args: &[Value]) -> CommandResult {
        let result = match args.split_first() {
            None => false,
            Some((first, [])) => !first.boolean(),
            Some((first, rest)) => rest.iter().any(|arg| arg.as_str() != first.as_str()),
        };
        Ok(Value::from(result))
    }

    /// The `and` command (`&&`): true when every argument is truthy.
    pub(crate) fn and(_: &mut Self, args: &[Value]) -> CommandResult {
        Ok(Value::from(args.iter().all(Value::boolean)))
    }

    /// The `or` command (`||`): the first truthy argument, or the empty
    /// value.
    pub(crate) fn or(_: &mut Self, args: &[Value]) -> CommandResult {
        for arg in args {
            if arg.boolean() {
                return Ok(arg.clone());
            }
        }
        Ok(Value::empty())
    }
}

/// Compares exactly two numeric arguments.
fn compare(args: &[Value]) -> Result<Ordering, RuntimeError> {
    let [left, right] = expect_args(args)?;
    Ok(left.number()?.compare(&right.number()?))
}
