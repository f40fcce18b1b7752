//! The `monkey` binary: REPL by default, file runner with an argument.

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use monkey_drv::{repl, DriverError};

#[derive(Parser)]
#[command(name = "monkey", version, about = "The Monkey programming language")]
struct Cli {
    /// Source file to run; starts the REPL when omitted.
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.file {
        Some(path) => run_file(&path),
        None => run_repl(),
    }
}

fn run_file(path: &Path) -> ExitCode {
    match monkey_drv::run_file(path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err @ DriverError::Io(_)) => {
            eprintln!("monkey: {}", err);
            ExitCode::from(2)
        },
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::from(1)
        },
    }
}

fn run_repl() -> ExitCode {
    let user = std::env::var("USER").unwrap_or_else(|_| "friend".to_string());
    println!("Hello {}! This is the Monkey programming language!", user);
    println!("Feel free to type in commands");

    let stdin = io::stdin();
    let stdout = io::stdout();

    match repl::start(stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("monkey: {:#}", err);
            ExitCode::from(2)
        },
    }
}
