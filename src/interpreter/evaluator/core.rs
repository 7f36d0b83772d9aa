use crate::{
    ast::Runnable,
    interpreter::{
        evaluator::breakout::{Breakout, Outcome},
        runner::core::Runner,
        value::core::Value,
    },
};

impl Runnable {
    /// Evaluates the node against a command dispatcher.
    ///
    /// Evaluation is synchronous and strictly ordered: command arguments
    /// run left to right, sequence children run in source order, and loop
    /// iterations run in array order. Each construct absorbs exactly the
    /// breakouts it owns (break and continue for loops, exceptions for
    /// `try`) and propagates everything else unchanged.
    ///
    /// # Parameters
    /// - `runner`: The dispatcher used to execute commands and hold
    ///   variables.
    ///
    /// # Returns
    /// The node's value, or the breakout that escaped it.
    pub fn run(&self, runner: &mut dyn Runner) -> Outcome {
        match self {
            Self::Value(value) => Ok(value.clone()),

            Self::Command { name, arguments, context } => {
                Self::run_command(name, arguments, context, runner)
            },

            Self::Sequence(items) => {
                let mut result = Value::empty();
                for item in items {
                    result = item.run(runner)?;
                }
                Ok(result)
            },

            Self::Condition { arguments, negated } => {
                let result = Self::run_condition(arguments, runner)?;
                Ok(Value::from(result != *negated))
            },

            Self::If { conditions, branches } => {
                for (condition, branch) in conditions.iter().zip(branches) {
                    if condition.run(runner)?.boolean() {
                        return branch.run(runner);
                    }
                }
                // The unconditional branch, when there is one.
                if branches.len() > conditions.len() {
                    return branches[conditions.len()].run(runner);
                }
                Ok(Value::empty())
            },

            Self::While { condition, body } => {
                while condition.run(runner)?.boolean() {
                    match body.run(runner) {
                        Ok(_) | Err(Breakout::Continue { .. }) => {},
                        Err(Breakout::Break { .. }) => break,
                        Err(other) => return Err(other),
                    }
                }
                Ok(Value::empty())
            },

            Self::For { variable, expression, body, context } => {
                Self::run_for(variable.as_deref(), expression, body, context, runner)
            },

            Self::Try { body, catch, variable, context } => {
                match body.run(runner) {
                    Ok(_) => Ok(Value::empty()),
                    Err(Breakout::Exception { error, .. }) => {
                        if let Some(variable) = variable {
                            let name = variable.run(runner)?;
                            let message = Value::from(error.to_string());
                            runner.run_command("set", &[name, message])
                                  .map_err(|error| Breakout::Exception { context: context.clone(),
                                                                         error })?;
                        }
                        catch.run(runner)
                    },
                    // Break, continue, and return pass through try so that
                    // loop control and returns inside a try still work.
                    Err(other) => Err(other),
                }
            },

            Self::Break { context } => Err(Breakout::Break { context: context.clone() }),

            Self::Continue { context } => Err(Breakout::Continue { context: context.clone() }),

            Self::Return { arguments, context } => {
                let value = if let [argument] = arguments.as_slice() {
                    argument.run(runner)?
                } else {
                    let mut parts = Vec::with_capacity(arguments.len());
                    for argument in arguments {
                        parts.push(argument.run(runner)?.as_str().to_string());
                    }
                    Value::from(parts.join(" "))
                };
                Err(Breakout::Return { context: context.clone(),
                                       value })
            },
        }
    }

    /// Evaluates a command node: the name, then each argument, then the
    /// dispatch itself. A dispatcher error becomes an exception tagged with
    /// the node's context.
    fn run_command(name: &Runnable,
                   arguments: &[Runnable],
                   context: &str,
                   runner: &mut dyn Runner)
                   -> Outcome {
        let name = name.run(runner)?;
        let mut args = Vec::with_capacity(arguments.len());
        for argument in arguments {
            args.push(argument.run(runner)?);
        }
        runner.run_command(name.as_str(), &args)
              .map_err(|error| Breakout::Exception { context: context.to_string(),
                                                     error })
    }

    /// Evaluates a condition's arguments.
    ///
    /// Empty conditions are true. A single argument is true when its
    /// boolean rendition is. With more arguments, all string renditions
    /// must equal the first; evaluation stops at the first mismatch.
    fn run_condition(arguments: &[Runnable], runner: &mut dyn Runner) -> Result<bool, Breakout> {
        let Some((first, rest)) = arguments.split_first() else {
            return Ok(true);
        };

        let first = first.run(runner)?;
        if rest.is_empty() {
            return Ok(first.boolean());
        }

        for argument in rest {
            if argument.run(runner)?.as_str() != first.as_str() {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Evaluates a `for` loop.
    ///
    /// The iterated expression and the variable-name expression are each
    /// evaluated once, before the first iteration. Each iteration sets the
    /// variable (when there is one) through the dispatcher and runs the
    /// body.
    fn run_for(variable: Option<&Runnable>,
               expression: &Runnable,
               body: &Runnable,
               context: &str,
               runner: &mut dyn Runner)
               -> Outcome {
        let items = expression.run(runner)?;
        let variable = match variable {
            Some(variable) => Some(variable.run(runner)?),
            None => None,
        };

        for item in items.array() {
            if let Some(name) = &variable {
                runner.run_command("set", &[name.clone(), item.clone()])
                      .map_err(|error| Breakout::Exception { context: context.to_string(),
                                                             error })?;
            }
            match body.run(runner) {
                Ok(_) | Err(Breakout::Continue { .. }) => {},
                Err(Breakout::Break { .. }) => break,
                Err(other) => return Err(other),
            }
        }
        Ok(Value::empty())
    }
}
