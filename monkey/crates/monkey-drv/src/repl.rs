//! The interactive read-eval-print loop.
//!
//! Reads a line, lexes and parses it, prints parser errors if any were
//! recorded, and otherwise evaluates the program against an environment
//! that persists across lines. A non-absent result is printed through
//! `inspect()`.

use std::io::{BufRead, Write};

use anyhow::Context;

use monkey_eval::eval_program;
use monkey_lex::Lexer;
use monkey_obj::Environment;
use monkey_par::Parser;
use monkey_util::Handler;

/// The interactive prompt.
pub const PROMPT: &str = ">> ";

/// Runs the REPL until `input` is exhausted.
pub fn start(input: impl BufRead, mut output: impl Write) -> anyhow::Result<()> {
    let env = Environment::new();
    let mut lines = input.lines();

    loop {
        write!(output, "{}", PROMPT).context("failed to write prompt")?;
        output.flush().context("failed to flush output")?;

        let Some(line) = lines.next() else {
            // End of input: leave the prompt on its own line.
            writeln!(output)?;
            return Ok(());
        };
        let line = line.context("failed to read input line")?;

        let handler = Handler::new();
        let mut parser = Parser::new(Lexer::new(&line), &handler);
        let program = parser.parse_program();

        if handler.has_errors() {
            print_parser_errors(&mut output, &parser.errors())?;
            continue;
        }

        if let Some(value) = eval_program(&program, &env) {
            writeln!(output, "{}", value.inspect()).context("failed to write result")?;
        }
    }
}

fn print_parser_errors(output: &mut impl Write, errors: &[String]) -> anyhow::Result<()> {
    writeln!(output, "Woops! We ran into some monkey business here!")?;
    writeln!(output, " parser errors:")?;
    for error in errors {
        writeln!(output, "\t{}", error)?;
    }
    Ok(())
}
