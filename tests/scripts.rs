use std::fs;

use pragmash::{Breakout, StdRunner, parse_script};
use walkdir::WalkDir;

/// Parses and runs one script, treating a top-level return as success.
fn run_script(path: &str, source: &str) {
    let script = parse_script(source).unwrap_or_else(|e| panic!("{path} failed to parse: {e}"));
    let mut runner = StdRunner::with_output(Vec::new());
    match script.run(&mut runner) {
        Ok(_) | Err(Breakout::Return { .. }) => {},
        Err(breakout) => panic!("{path} failed at {}: {}", breakout.context(), breakout.error()),
    }
}

#[test]
fn demo_scripts_run_cleanly() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| {
                                 e.path().extension().is_some_and(|ext| ext == "pragmash")
                             })
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        run_script(&path.display().to_string(), &source);
        count += 1;
    }

    assert!(count > 0, "No demo scripts found in demos/");
}

#[test]
fn example_script_works() {
    let source = fs::read_to_string("tests/example.pragmash").expect("missing file");
    run_script("tests/example.pragmash", &source);
}

#[test]
fn example_script_prints_its_report() {
    let source = fs::read_to_string("tests/example.pragmash").expect("missing file");
    let script = parse_script(&source).expect("example should parse");
    let mut runner = StdRunner::with_output(Vec::new());
    script.run(&mut runner).expect("example should run");

    let output = String::from_utf8(runner.into_output()).expect("output should be UTF-8");
    assert!(output.ends_with("all checks passed\n"), "unexpected output:\n{output}");
}
