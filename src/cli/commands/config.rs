use crate::cli::core::{CommandError, CommandResult};
use crate::cli::io as cli_io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "Show or update CLI preferences",
        "config [<key> <value>]",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        output::section("Configuration");
        cli_io::print_info(format!("  locale:   {}", context.config.locale));
        cli_io::print_info(format!("  currency: {}", context.config.currency));
        cli_io::print_info(format!("  plain:    {}", context.config.plain_output));
        cli_io::print_info(format!("  quiet:    {}", context.config.quiet));
        return Ok(());
    }

    let [key, value] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: config [<key> <value>]".into(),
        ));
    };

    match *key {
        "locale" => context.config.locale = value.to_string(),
        "currency" => context.config.currency = value.to_uppercase(),
        "plain" => context.config.plain_output = parse_flag(value)?,
        "quiet" => context.config.quiet = parse_flag(value)?,
        other => {
            return Err(CommandError::InvalidArguments(format!(
                "unknown config key `{}`; expected locale, currency, plain, or quiet",
                other
            )))
        }
    }

    cli_io::apply_config(&context.config);
    context.persist_config()?;
    cli_io::print_success("Configuration updated.");
    Ok(())
}

fn parse_flag(value: &str) -> Result<bool, CommandError> {
    match value.to_lowercase().as_str() {
        "true" | "on" | "yes" => Ok(true),
        "false" | "off" | "no" => Ok(false),
        other => Err(CommandError::InvalidArguments(format!(
            "`{}` is not a boolean value",
            other
        ))),
    }
}
