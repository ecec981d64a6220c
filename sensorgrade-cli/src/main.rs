//! Command-line front end for the sensor log grader
//!
//! All grading semantics live in `sensorgrade-core`; this binary only
//! parses the argument, drives the file grader, and prints findings one
//! per line. Fatal errors are reported in the log format's own diagnostic
//! shape, `Invalid Input at line <N>`, on the same stream as results.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use sensorgrade_core::report::grade_file;

/// Grade sensor accuracy from a plain-text readings log
#[derive(Parser, Debug)]
#[command(name = "sensorgrade", version, about, long_about = None)]
struct Args {
    /// Path to the sensor log
    #[arg(default_value = "logs.txt")]
    log: PathBuf,
}

fn main() {
    // Reset SIGPIPE to default behavior to prevent panic on broken pipe
    // (e.g., when piping to `head` or `less` that exits early)
    #[cfg(unix)]
    reset_sigpipe();

    let args = Args::parse();

    if let Err(e) = grade_file(&args.log, &mut |finding| println!("{finding}")) {
        println!("Invalid Input at line {}", e.line());
        process::exit(1);
    }
}

#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}
