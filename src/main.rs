use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use clap::Parser;
use runa::run_program;

/// runa is a small statically typed, expression oriented scripting
/// language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a script to run. Without a path, runa starts a REPL.
    path: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    match args.path {
        Some(path) => run_file(&path),
        None => repl(),
    }
}

/// Reads the script at `path` and runs it through the whole pipeline.
///
/// Evaluator output goes to stdout and error lines to stderr; any
/// pipeline error exits with a non-zero status.
fn run_file(path: &PathBuf) {
    let source = fs::read_to_string(path).unwrap_or_else(|_| {
                     eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                               path.display());
                     std::process::exit(1);
                 });

    let mut stdout = io::stdout().lock();
    if let Err(e) = run_program(&source, &path.display().to_string(), &mut stdout) {
        drop(stdout);
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Runs the read-eval-print loop.
///
/// Each input line goes through the full pipeline with the file name
/// `"repl"` and a fresh interpreter; a line that fails any pass is
/// reported and discarded. End of input or a read error exits the loop.
fn repl() {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            return;
        }

        let Some(Ok(line)) = lines.next() else {
            return;
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = run_program(&line, "repl", &mut stdout) {
            drop(stdout);
            eprintln!("{e}");
        }
    }
}
