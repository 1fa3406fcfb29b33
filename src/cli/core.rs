//! Core CLI loop state, dispatch, and error reporting.

use std::io;

use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use strsim::levenshtein;
use thiserror::Error;

use crate::{
    config::{Config, ConfigManager},
    errors::{ConfigError, LedgerError},
    ledger::Ledger,
};

use super::commands::{self, CommandRegistry};
use super::forms::FormError;
use super::output::{self, OutputPreferences};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// Failures that abort the shell.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
}

/// Failures scoped to one command; reported and the loop continues.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

pub type CommandResult = Result<(), CommandError>;

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub ledger: Ledger,
    pub config: Config,
    pub theme: ColorfulTheme,
}

impl ShellContext {
    /// Loads the user configuration and opens the configured ledger file.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config = ConfigManager::new().load()?;
        let path = config.resolve_storage_path();
        let ledger = Ledger::open_with_policy(path, config.load_policy)?;
        Ok(Self::with_ledger(mode, ledger, config))
    }

    pub fn with_ledger(mode: CliMode, ledger: Ledger, config: Config) -> Self {
        output::set_preferences(OutputPreferences {
            color_enabled: config.ui_color_enabled && mode == CliMode::Interactive,
        });
        Self {
            mode,
            registry: CommandRegistry::new(commands::all_definitions()),
            ledger,
            config,
            theme: ColorfulTheme::default(),
        }
    }

    pub(crate) fn prompt(&self) -> String {
        "expenses> ".to_string()
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.registry.get(command).map(|definition| definition.handler) else {
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
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let mut suggestions: Vec<_> = self
            .registry
            .names()
            .map(|key| (levenshtein(key, input), key))
            .collect();
        suggestions.sort_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = suggestions.first() {
            if *distance <= 3 {
                output::info(format!("Suggestion: `{}`?", best));
            }
        }
    }

    /// Yes/no question. Script runs have no one to ask and always proceed.
    pub(crate) fn confirm(&self, question: &str, default: bool) -> Result<bool, dialoguer::Error> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Confirm::with_theme(&self.theme)
            .with_prompt(question)
            .default(default)
            .interact()
    }

    /// Reads one raw expense field. Blank answers pass through so the entry
    /// form can reject them with its own message.
    pub(crate) fn ask_field(&self, label: &str) -> Result<String, dialoguer::Error> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
            }
            other => output::error(other),
        }
    }

    #[cfg(test)]
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        super::shell::handle_line(self, line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Record;
    use tempfile::TempDir;

    fn script_context() -> (ShellContext, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let ledger = Ledger::open(temp.path().join("expenses.json"));
        let context = ShellContext::with_ledger(CliMode::Script, ledger, Config::default());
        (context, temp)
    }

    #[test]
    fn add_then_clear_through_commands() {
        let (mut context, _guard) = script_context();
        context
            .process_line(r#"add 12.5 Food "Lunch""#)
            .expect("add food");
        context.process_line("add 40 Transit").expect("add transit");
        assert_eq!(
            context.ledger.list(),
            &[
                Record::new(12.5, "Food", "Lunch"),
                Record::new(40.0, "Transit", "")
            ]
        );

        context.process_line("clear").expect("clear");
        assert!(context.ledger.is_empty());
    }

    #[test]
    fn invalid_amount_is_a_form_error() {
        let (mut context, _guard) = script_context();
        let err = context.process_line("add abc Food").unwrap_err();
        assert!(matches!(err, CommandError::Form(FormError::InvalidAmount)));
        assert!(context.ledger.is_empty());
    }

    #[test]
    fn missing_fields_in_script_mode_are_rejected() {
        let (mut context, _guard) = script_context();
        let err = context.process_line("add").unwrap_err();
        assert!(matches!(err, CommandError::Form(FormError::MissingRequired)));
    }

    #[test]
    fn exit_stops_the_loop() {
        let (mut context, _guard) = script_context();
        let control = context.process_line("quit").expect("quit");
        assert_eq!(control, LoopControl::Exit);
    }

    #[test]
    fn unknown_commands_do_not_fail() {
        let (mut context, _guard) = script_context();
        let control = context.process_line("lst").expect("unknown");
        assert_eq!(control, LoopControl::Continue);
    }
}
