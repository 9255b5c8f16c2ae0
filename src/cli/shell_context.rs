//! Shared runtime state for CLI interactions and command execution.

use std::sync::Arc;

use dialoguer::theme::ColorfulTheme;
use strsim::levenshtein;

use crate::cli::commands;
use crate::cli::core::{CliError, CommandError, LoopControl};
use crate::cli::io as cli_io;
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::config::{Config, ConfigManager};
use crate::core::Bank;
use crate::time::{Clock, SystemClock};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub bank: Bank,
    pub clock: Arc<dyn Clock>,
    pub theme: ColorfulTheme,
    pub config: Config,
    pub config_manager: ConfigManager,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let config_manager = ConfigManager::new()?;
        let config = config_manager.load()?;
        cli_io::apply_config(&config);

        Ok(Self {
            mode,
            registry,
            bank: Bank::new(),
            clock: Arc::new(SystemClock),
            theme: ColorfulTheme::default(),
            config,
            config_manager,
            last_command: None,
            running: true,
        })
    }

    pub(crate) fn mode(&self) -> CliMode {
        self.mode
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn prompt(&self) -> String {
        "teller> ".to_string()
    }

    /// Renders a monetary value with the configured currency code.
    pub(crate) fn format_amount(&self, value: f64) -> String {
        format!("{:.2} {}", value, self.config.currency)
    }

    pub(crate) fn persist_config(&self) -> Result<(), CommandError> {
        self.config_manager
            .save(&self.config)
            .map_err(CommandError::from)
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.registry.handler(command) else {
            cli_io::print_warning(format!("Unknown command `{}`.", raw));
            self.suggest_command(raw);
            return Ok(LoopControl::Continue);
        };

        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        let needle = input.to_lowercase();
        let mut suggestions: Vec<(usize, &'static str)> = self
            .registry
            .names()
            .map(|name| (levenshtein(name, &needle), name))
            .collect();
        suggestions.sort_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = suggestions.first() {
            if *distance <= 3 {
                cli_io::print_info(format!("Suggestion: `{}`?", best));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(cli_io::confirm_action(&self.theme, "Exit shell?", true)?)
    }

    /// Reports a command failure without leaving the shell loop.
    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(message);
                cli_io::print_info("Use `help <command>` for usage details.");
                Ok(())
            }
            other => {
                cli_io::print_error(other.to_string());
                Ok(())
            }
        }
    }
}
