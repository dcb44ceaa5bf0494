//! REPL command table.

use super::error::CliError;
use super::{App, Reply};

/// Handler run when a command word is entered.
pub type Handler = fn(&mut App) -> Result<Reply, CliError>;

/// A named REPL command.
#[derive(Clone, Copy)]
pub struct Command {
    pub name: &'static str,
    pub description: &'static str,
    pub handler: Handler,
}

const COMMANDS: &[Command] = &[
    Command {
        name: "help",
        description: "Displays this help message.",
        handler: App::help,
    },
    Command {
        name: "history",
        description: "Shows the calculation history.",
        handler: App::show_history,
    },
    Command {
        name: "undo",
        description: "Undoes the last calculation.",
        handler: App::undo,
    },
    Command {
        name: "redo",
        description: "Redoes the last undone calculation.",
        handler: App::redo,
    },
    Command {
        name: "save",
        description: "Saves the current history to the configured CSV file.",
        handler: App::save,
    },
    Command {
        name: "load",
        description: "Loads history from the configured CSV file.",
        handler: App::load,
    },
    Command {
        name: "exit",
        description: "Exits the calculator.",
        handler: App::exit,
    },
];

/// Fixed command set, in help order.
#[derive(Clone, Copy)]
pub struct CommandTable {
    commands: &'static [Command],
}

impl Default for CommandTable {
    fn default() -> Self {
        Self {
            commands: COMMANDS,
        }
    }
}

impl CommandTable {
    pub fn get(&self, name: &str) -> Option<&'static Command> {
        self.commands.iter().find(|command| command.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Command> {
        self.commands.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_commands_in_help_order() {
        let names: Vec<_> = CommandTable::default().iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec!["help", "history", "undo", "redo", "save", "load", "exit"]
        );
    }

    #[test]
    fn lookup_by_name() {
        let table = CommandTable::default();
        assert_eq!(table.get("undo").map(|c| c.name), Some("undo"));
        assert!(table.get("add").is_none());
    }
}
