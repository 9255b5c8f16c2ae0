//! File-driven utilities: divide two numbers from a file and print a file
//! with retry on lock.

use std::path::Path;
use std::thread;

use crate::cli::core::{CommandError, CommandResult};
use crate::cli::io as cli_io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::{CliMode, ShellContext};
use crate::core::divide;
use crate::core::reader::{self, LOCKED_RETRY_DELAY};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "divide",
            "Divide two numbers read from a file",
            "divide [file]",
            cmd_divide,
        ),
        CommandEntry::new(
            "read",
            "Print a text file, retrying while it is locked",
            "read [file]",
            cmd_read,
        ),
    ]
}

fn cmd_divide(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(path) = args.first() {
        return divide_once(Path::new(path));
    }
    require_interactive(context, "divide")?;

    // Re-prompt until a division succeeds, reporting each failure.
    loop {
        let path = cli_io::prompt_text(&context.theme, "Path to a file with two numbers")?;
        match divide_once(Path::new(path.trim())) {
            Ok(()) => return Ok(()),
            Err(err) => cli_io::print_error(err.to_string()),
        }
    }
}

fn divide_once(path: &Path) -> CommandResult {
    let (dividend, divisor) = divide::load_operands(path)?;
    let quotient = divide::divide(dividend, divisor)?;
    cli_io::print_success(format!("{} / {} = {}", dividend, divisor, quotient));
    Ok(())
}

fn cmd_read(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(path) = args.first() {
        return read_once(Path::new(path));
    }
    require_interactive(context, "read")?;

    loop {
        let path = cli_io::prompt_text(&context.theme, "Path to a file to print")?;
        match read_once(Path::new(path.trim())) {
            Ok(()) => return Ok(()),
            Err(CommandError::File(err)) if err.is_retryable() => {
                cli_io::print_warning(format!(
                    "{}; trying again in {} seconds",
                    err,
                    LOCKED_RETRY_DELAY.as_secs()
                ));
                thread::sleep(LOCKED_RETRY_DELAY);
            }
            Err(err) => cli_io::print_error(err.to_string()),
        }
    }
}

fn read_once(path: &Path) -> CommandResult {
    let lines = reader::read_lines(path)?;
    output::section("File contents");
    for line in lines {
        cli_io::print_info(line);
    }
    Ok(())
}

fn require_interactive(context: &ShellContext, command: &str) -> CommandResult {
    if context.mode() == CliMode::Script {
        return Err(CommandError::InvalidArguments(format!(
            "usage: {command} <file> (prompting is unavailable in script mode)"
        )));
    }
    Ok(())
}
