use std::collections::HashMap;

use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::forms::EntryForm;
use crate::cli::output;
use crate::cli::table::expense_table;

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

#[derive(Clone)]
pub struct CommandDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandDefinition {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
        }
    }
}

pub struct CommandRegistry {
    commands: HashMap<&'static str, CommandDefinition>,
    order: Vec<&'static str>,
}

impl CommandRegistry {
    pub fn new(definitions: Vec<CommandDefinition>) -> Self {
        let mut commands = HashMap::new();
        let mut order = Vec::new();
        for definition in definitions {
            order.push(definition.name);
            commands.insert(definition.name, definition);
        }
        Self { commands, order }
    }

    pub fn get(&self, name: &str) -> Option<&CommandDefinition> {
        self.commands.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandDefinition> {
        self.order
            .iter()
            .filter_map(move |name| self.commands.get(name))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }
}

pub(crate) fn all_definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "add",
            "Record a new expense",
            "add <amount> <category> [description...]",
            cmd_add,
        ),
        CommandDefinition::new("list", "Show all recorded expenses", "list", cmd_list),
        CommandDefinition::new("clear", "Delete every recorded expense", "clear", cmd_clear),
        CommandDefinition::new("path", "Show the expense file location", "path", cmd_path),
        CommandDefinition::new("help", "Show available commands", "help [command]", cmd_help),
        CommandDefinition::new("exit", "Leave the shell", "exit", cmd_exit),
        CommandDefinition::new("quit", "Leave the shell", "quit", cmd_exit),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let form = if args.is_empty() && context.mode == CliMode::Interactive {
        EntryForm::new(
            context.ask_field("Amount")?,
            context.ask_field("Category")?,
            context.ask_field("Description")?,
        )
    } else {
        EntryForm::from_args(args)
    };

    let record = form.validate()?;
    context.ledger.append(record)?;
    output::success(format!(
        "Expense added ({} total).",
        context.ledger.len()
    ));
    Ok(())
}

fn cmd_list(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_no_args("list", args)?;
    if context.ledger.is_empty() {
        output::info("No expenses recorded.");
        return Ok(());
    }
    output::plain(expense_table(context.ledger.list()).render());
    Ok(())
}

fn cmd_clear(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_no_args("clear", args)?;
    if !context.confirm("Are you sure you want to clear all expenses?", false)? {
        output::info("Clear cancelled.");
        return Ok(());
    }
    context.ledger.clear()?;
    output::success("All expenses cleared.");
    Ok(())
}

fn cmd_path(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    expect_no_args("path", args)?;
    output::plain(context.ledger.path().display());
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        let name = name.to_lowercase();
        let Some(definition) = context.registry.get(&name) else {
            return Err(CommandError::InvalidArguments(format!(
                "Unknown command `{name}`."
            )));
        };
        output::plain(format!(
            "{}\n  usage: {}",
            definition.description, definition.usage
        ));
        return Ok(());
    }

    let width = context
        .registry
        .names()
        .map(str::len)
        .max()
        .unwrap_or_default();
    let lines: Vec<String> = context
        .registry
        .iter()
        .map(|definition| {
            format!(
                "  {:width$}  {}",
                definition.name,
                definition.description,
                width = width
            )
        })
        .collect();
    output::plain(format!("Available commands:\n{}", lines.join("\n")));
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}

fn expect_no_args(command: &str, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        Ok(())
    } else {
        Err(CommandError::InvalidArguments(format!(
            "`{command}` takes no arguments."
        )))
    }
}
