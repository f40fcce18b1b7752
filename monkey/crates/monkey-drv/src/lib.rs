//! monkey-drv - Interpreter driver.
//!
//! Orchestrates the pipeline phases:
//!
//! ```text
//! Source text
//!      |
//!      v
//!  [monkey-lex] --> token stream
//!      |
//!      v
//!  [monkey-par] --> Program AST (+ accumulated parse errors)
//!      |
//!      v
//!  [monkey-eval] --> Value (against a monkey-obj environment)
//! ```
//!
//! The evaluator is only invoked when the parser recorded no errors.
//! [`repl`] wires the pipeline to an interactive session; [`run_file`]
//! runs a whole file as one program.

pub mod error;
pub mod repl;

pub use error::{DriverError, Result};

use std::path::Path;

use monkey_eval::eval_program;
use monkey_lex::Lexer;
use monkey_obj::{Env, Environment, Value};
use monkey_par::ast::Program;
use monkey_par::Parser;
use monkey_util::Handler;

/// Lexes and parses source text.
///
/// Returns the program, or the accumulated parser error messages if any
/// were recorded.
pub fn parse_source(source: &str) -> std::result::Result<Program, Vec<String>> {
    let handler = Handler::new();
    let mut parser = Parser::new(Lexer::new(source), &handler);
    let program = parser.parse_program();

    if handler.has_errors() {
        Err(parser.errors())
    } else {
        Ok(program)
    }
}

/// Runs source text against an existing environment.
///
/// `Ok(None)` means the program produced no value (for example, a lone
/// `let` statement). Runtime errors come back as `Ok(Some(Value::Error))`
/// like any other value; only parse failures are `Err`.
pub fn eval_source(source: &str, env: &Env) -> std::result::Result<Option<Value>, Vec<String>> {
    let program = parse_source(source)?;
    Ok(eval_program(&program, env))
}

/// Runs a source file as a single program in a fresh environment.
///
/// Output happens through the program's own `puts` calls; the final
/// value is discarded. Parse errors and runtime error values are
/// converted to [`DriverError`]s for the binary to report.
pub fn run_file(path: &Path) -> Result<()> {
    let source = std::fs::read_to_string(path)?;
    let env = Environment::new();

    match eval_source(&source, &env) {
        Err(errors) => Err(DriverError::Parse(errors)),
        Ok(Some(Value::Error(message))) => Err(DriverError::Runtime(message)),
        Ok(_) => Ok(()),
    }
}
