use pragmash::{Breakout, RuntimeError, StdRunner, parse_script};

fn assert_output(source: &str, expected: &str) {
    let script = parse_script(source).unwrap_or_else(|e| panic!("Script failed to parse: {e}"));
    let mut runner = StdRunner::with_output(Vec::new());
    if let Err(breakout) = script.run(&mut runner) {
        panic!("Script failed at {}: {}", breakout.context(), breakout.error());
    }
    let output = String::from_utf8(runner.into_output()).expect("output should be UTF-8");
    assert_eq!(output, expected, "unexpected output for script:\n{source}");
}

fn run_for_error(source: &str) -> Breakout {
    let script = parse_script(source).unwrap_or_else(|e| panic!("Script failed to parse: {e}"));
    let mut runner = StdRunner::with_output(Vec::new());
    match script.run(&mut runner) {
        Ok(_) => panic!("Script succeeded but was expected to fail:\n{source}"),
        Err(breakout) => breakout,
    }
}

fn assert_parse_error(source: &str, expected: &str) {
    let error = parse_script(source).expect_err("script should not parse");
    assert_eq!(error.to_string(), expected);
}

#[test]
fn while_loop_counts() {
    assert_output("set x 0\nwhile (< $x 3) {\nputs $x\nset x (+ $x 1)\n}", "0\n1\n2\n");
}

#[test]
fn for_loop_over_range() {
    assert_output("for y (range 1 4) {\nputs $y\n}", "1\n2\n3\n");
}

#[test]
fn for_loop_without_variable() {
    assert_output("for (range 3) {\nputs tick\n}", "tick\ntick\ntick\n");
}

#[test]
fn if_else_branches() {
    assert_output("if (= 1 1) {\nputs yes\n} else {\nputs no\n}", "yes\n");
    assert_output("if (= 1 2) {\nputs yes\n} else if (= 1 1) {\nputs maybe\n} else {\nputs no\n}",
                  "maybe\n");
    assert_output("if (= 1 2) {\nputs yes\n} else if (= 1 3) {\nputs maybe\n} else {\nputs no\n}",
                  "no\n");
    assert_output("if (= 1 2) {\nputs yes\n}", "");
}

#[test]
fn negated_and_chained_conditions() {
    assert_output("if not (= 1 2) {\nputs yes\n}", "yes\n");
    assert_output("if 1 1 1 {\nputs same\n} else {\nputs diff\n}", "same\n");
    assert_output("if 1 1 2 {\nputs same\n} else {\nputs diff\n}", "diff\n");
}

#[test]
fn try_catches_thrown_exception() {
    assert_output("try {\nthrow oops\n} catch e {\nputs $e\n}", "oops\n");
    assert_output("try {\nthrow oops bad\n} catch e {\nputs $e\n}", "oops bad\n");
    assert_output("try {\nputs fine\n} catch e {\nputs $e\n}", "fine\n");
}

#[test]
fn try_without_catch_swallows_exception() {
    assert_output("try {\nthrow oops\n}\nputs after", "after\n");
}

#[test]
fn arithmetic_and_number_formatting() {
    assert_output("puts (+ 2 3)", "5\n");
    assert_output("puts (+ 2 3.0)", "5.0\n");
    assert_output("puts (/ 6 3)", "2\n");
    assert_output("puts (/ 7 2)", "3.5\n");
    assert_output("puts (- 10 4)", "6\n");
    assert_output("puts (* 6 7)", "42\n");
    assert_output("puts (% 17 5)", "2\n");
    assert_output("puts (** 2 10)", "1024\n");
}

#[test]
fn big_integer_arithmetic_is_exact() {
    assert_output("puts (* 99999999999999999999 99999999999999999999)",
                  "9999999999999999999800000000000000000001\n");
    assert_output("puts (+ 18446744073709551615 1)", "18446744073709551616\n");
}

#[test]
fn subscript_reads_array_elements() {
    assert_output("set xs (arr a b c)\nputs ([] $xs 1)", "b\n");

    let breakout = run_for_error("set xs (arr a b c)\n[] $xs 9");
    assert_eq!(breakout.error(), RuntimeError::SubscriptOutOfBounds { index: 9 });
    assert_eq!(breakout.context(), "line 2");
}

#[test]
fn break_stops_the_loop() {
    assert_output("for v (range 5) {\nif (= $v 3) {\nbreak\n}\nputs $v\n}", "0\n1\n2\n");
}

#[test]
fn break_escapes_only_one_loop() {
    let source = "set i 0\nwhile (< $i 2) {\nset i (+ $i 1)\nwhile (= 1 1) {\nbreak\n}\nputs A\n}";
    assert_output(source, "A\nA\n");
}

#[test]
fn continue_skips_to_the_next_iteration() {
    assert_output("for v (range 4) {\nif (= $v 1) {\ncontinue\n}\nputs $v\n}", "0\n2\n3\n");
}

#[test]
fn for_runs_body_once_per_element() {
    let script = parse_script("set n 0\nfor v (arr a b c) {\nset n (+ $n 1)\n}").unwrap();
    let mut runner = StdRunner::with_output(Vec::new());
    script.run(&mut runner).unwrap();
    assert_eq!(runner.variable("n").unwrap().as_str(), "3");
    assert_eq!(runner.variable("v").unwrap().as_str(), "c");
}

#[test]
fn for_variable_name_is_evaluated_once() {
    let source = "set name v\nfor (get name) (range 3) {\nset name w\n}";
    let script = parse_script(source).unwrap();
    let mut runner = StdRunner::with_output(Vec::new());
    script.run(&mut runner).unwrap();
    // The loop keeps writing v even though name changes mid-loop.
    assert_eq!(runner.variable("v").unwrap().as_str(), "2");
    assert!(runner.variable("w").is_none());
}

#[test]
fn for_over_empty_array_never_runs() {
    assert_output("for v (arr) {\nputs $v\n}\nputs done", "done\n");
}

#[test]
fn return_joins_its_arguments() {
    let breakout = run_for_error("return a b c");
    assert_eq!(breakout.value().unwrap().as_str(), "a b c");

    let breakout = run_for_error("set xs (arr a b)\nreturn $xs");
    assert_eq!(breakout.value().unwrap().as_str(), "a\nb");
}

#[test]
fn return_propagates_through_try() {
    let breakout = run_for_error("try {\nreturn x\n} catch e {\nputs $e\n}");
    assert!(matches!(breakout, Breakout::Return { .. }));
    assert_eq!(breakout.value().unwrap().as_str(), "x");
}

#[test]
fn stray_loop_controls_become_errors() {
    let breakout = run_for_error("break");
    assert_eq!(breakout.error(), RuntimeError::BreakWithoutLoop);
    assert_eq!(breakout.error().to_string(), "break without loop");

    let breakout = run_for_error("continue");
    assert_eq!(breakout.error(), RuntimeError::ContinueWithoutLoop);

    let breakout = run_for_error("return x");
    assert_eq!(breakout.error(), RuntimeError::NothingToReturn);
}

#[test]
fn division_by_zero_is_an_exception() {
    let breakout = run_for_error("puts (/ 1 0)");
    assert_eq!(breakout.error(), RuntimeError::DivisionByZero);
    assert_eq!(breakout.context(), "line 1");
}

#[test]
fn unknown_commands_are_exceptions() {
    let breakout = run_for_error("florp 1 2");
    assert_eq!(breakout.error().to_string(), "unknown command: florp");
}

#[test]
fn undefined_variables_are_exceptions() {
    let breakout = run_for_error("puts $nope");
    assert_eq!(breakout.error().to_string(), "variable undefined: nope");
}

#[test]
fn wrong_arity_is_an_exception() {
    let breakout = run_for_error("set x");
    assert_eq!(breakout.error(), RuntimeError::ExpectedArguments { count: 2 });
    assert_eq!(breakout.error().to_string(), "expected 2 argument(s)");
}

#[test]
fn command_names_can_be_computed() {
    assert_output("set cmd puts\n(get cmd) hello", "hello\n");
}

#[test]
fn echo_and_logic_commands() {
    assert_output("puts (echo a b c)", "a b c\n");
    assert_output("puts (&& true true)", "true\n");
    assert_output("puts (|| \"\" fallback)", "fallback\n");
    assert_output("if (not (= 1 2)) {\nputs yes\n}", "yes\n");
}

#[test]
fn len_and_count_commands() {
    assert_output("puts (len abcd)", "4\n");
    assert_output("puts (count (arr a b c))", "3\n");
    assert_output("puts (count (arr a b) (arr c))", "3\n");
    assert_output("puts (count \"\")", "0\n");
}

#[test]
fn unterminated_string_is_a_parse_error() {
    assert_parse_error("puts \"hello", "line 1: missing string terminator");
}

#[test]
fn unclosed_block_is_a_parse_error() {
    assert_parse_error("if x {\necho y", "missing '}' at EOF");
}

#[test]
fn empty_parens_are_a_parse_error() {
    assert_parse_error("()", "line 1: a nested command must contain tokens");
}

#[test]
fn missing_whitespace_is_a_parse_error() {
    assert_parse_error("\"a\"b", "line 1: missing whitespace between tokens");
}

#[test]
fn stray_close_brace_is_a_parse_error() {
    assert_parse_error("}", "unexpected '}' at line 1");
}

#[test]
fn stray_else_is_a_parse_error() {
    assert_parse_error("else {\nputs x\n}", "unexpected 'else' at line 1");
}

#[test]
fn def_is_reserved() {
    assert_parse_error("def f {\nputs x\n}", "unexpected 'def' at line 1");
}

#[test]
fn second_else_is_a_parse_error() {
    let source = "if x {\nputs a\n} else {\nputs b\n} else {\nputs c\n}";
    assert_parse_error(source, "'else' after unconditional branch at line 5");
}

#[test]
fn break_takes_no_arguments() {
    assert_parse_error("while x {\nbreak now\n}", "unexpected tokens after 'break' at line 2");
}
