use std::{fs, path::PathBuf, process};

use clap::Parser;
use pragmash::{Breakout, StdRunner, Value, parse_script};

/// pragmash runs shell-like scripts in which every value is a
/// newline-delimited string.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the script to execute.
    script: PathBuf,

    /// Arguments exposed to the script through $ARGV.
    args: Vec<String>,
}

fn main() {
    let args = Args::parse();

    let source = fs::read_to_string(&args.script).unwrap_or_else(|_| {
                     eprintln!("Failed to read the script '{}'. Perhaps this file does not exist?",
                               args.script.display());
                     process::exit(1);
                 });

    let script = parse_script(&source).unwrap_or_else(|e| {
                     eprintln!("{e}");
                     process::exit(1);
                 });

    let dir = args.script
                  .parent()
                  .map_or_else(|| ".".to_string(), |p| p.display().to_string());
    let mut runner = StdRunner::new();
    runner.set_variable("ARGV", Value::from(args.args.join("\n")));
    runner.set_variable("DIR", Value::from(dir));

    match script.run(&mut runner) {
        Ok(_) => {},
        // A return that reaches the top level is a successful result.
        Err(Breakout::Return { value, .. }) => println!("{value}"),
        Err(breakout) => {
            eprintln!("exception at {}: {}", breakout.context(), breakout.error());
            process::exit(1);
        },
    }
}
