//! Interactive read-eval-print loop.
//!
//! [`App`] wires the calculator to a shared history and the standard
//! observers, then interprets one line at a time: either a command word
//! from the [`CommandTable`] or `<operation> <a> <b>`.

mod commands;
pub mod error;
mod input;

pub use commands::{Command, CommandTable};
pub use error::{CliError, ValidationError};
pub use input::{parse_decimal, parse_request, tokenize, Request};

use crate::calculator::Calculator;
use crate::config::Config;
use crate::core::{History, SharedHistory};
use crate::observer::{AutoSaveObserver, HistoryRecorder, LoggingObserver};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info};

const PROMPT: &str = ">>> ";
const GOODBYE: &str = "Exiting. Goodbye!";

/// What the loop should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this text and prompt again
    Output(String),
    /// Prompt again without printing
    Silent,
    /// Print this text and stop
    Exit(String),
}

/// The calculator application behind the prompt.
pub struct App {
    calculator: Calculator,
    history: SharedHistory,
    config: Config,
    commands: CommandTable,
}

impl App {
    /// Build the application and attach, in order, the history recorder,
    /// the logging observer and the auto-save observer.
    pub fn new(config: Config) -> Result<Self, CliError> {
        let history: SharedHistory = Arc::new(Mutex::new(History::new()));
        let logger =
            LoggingObserver::open(&config.log_file).map_err(|source| CliError::LogFile {
                path: config.log_file.clone(),
                source,
            })?;

        let mut calculator = Calculator::new();
        calculator.attach(Arc::new(HistoryRecorder::new(Arc::clone(&history))));
        calculator.attach(Arc::new(logger));
        calculator.attach(Arc::new(AutoSaveObserver::new(
            Arc::clone(&history),
            config.history_file.clone(),
        )));

        info!(
            log_file = %config.log_file.display(),
            history_file = %config.history_file.display(),
            "calculator ready"
        );

        Ok(Self {
            calculator,
            history,
            config,
            commands: CommandTable::default(),
        })
    }

    pub fn history(&self) -> &SharedHistory {
        &self.history
    }

    /// Handle one input line.
    pub fn execute(&mut self, line: &str) -> Result<Reply, CliError> {
        let tokens = tokenize(line);
        let Some((first, rest)) = tokens.split_first() else {
            return Ok(Reply::Silent);
        };

        if let Some(command) = self.commands.get(first) {
            if !rest.is_empty() {
                return Err(ValidationError::UnexpectedArguments(command.name.to_string()).into());
            }
            debug!(command = command.name, "running command");
            return (command.handler)(self);
        }

        let request = parse_request(&tokens)?;
        let calculation = self
            .calculator
            .calculate(request.a, request.b, &request.operation)?;
        Ok(Reply::Output(format!("Result: {}", calculation.result)))
    }

    /// Run the prompt loop until `exit` or end of input.
    pub fn run(&mut self) -> Result<(), CliError> {
        let mut editor = DefaultEditor::new()?;

        println!("Welcome to the Advanced Calculator!");
        if let Reply::Output(help) = self.help()? {
            println!("{help}");
        }

        loop {
            match editor.readline(PROMPT) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        editor.add_history_entry(line.as_str())?;
                    }
                    match self.execute(&line) {
                        Ok(Reply::Output(text)) => println!("{text}"),
                        Ok(Reply::Silent) => {}
                        Ok(Reply::Exit(text)) => {
                            println!("{text}");
                            break;
                        }
                        Err(err) => println!("Error: {err}"),
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("{GOODBYE}");
                    break;
                }
                Err(err) => return Err(err.into()),
            }
        }

        Ok(())
    }

    fn lock_history(&self) -> Result<MutexGuard<'_, History>, CliError> {
        self.history
            .lock()
            .map_err(|err| CliError::HistoryUnavailable(err.to_string()))
    }

    fn help(&mut self) -> Result<Reply, CliError> {
        let mut lines = vec!["Available commands:".to_string()];
        lines.extend(
            self.commands
                .iter()
                .map(|command| format!("  {}: {}", command.name, command.description)),
        );
        let operations: Vec<_> = self.calculator.registry().names().collect();
        lines.push(format!("Operations: {}", operations.join(", ")));
        lines.push("Usage: <operation> <a> <b>".to_string());
        Ok(Reply::Output(lines.join("\n")))
    }

    fn show_history(&mut self) -> Result<Reply, CliError> {
        let history = self.lock_history()?;
        if history.is_empty() {
            return Ok(Reply::Output("History is empty.".to_string()));
        }
        let lines: Vec<String> = history
            .calculations()
            .iter()
            .map(ToString::to_string)
            .collect();
        Ok(Reply::Output(lines.join("\n")))
    }

    fn undo(&mut self) -> Result<Reply, CliError> {
        let outcome = self.lock_history()?.undo();
        Ok(Reply::Output(outcome.to_string()))
    }

    fn redo(&mut self) -> Result<Reply, CliError> {
        let outcome = self.lock_history()?.redo();
        Ok(Reply::Output(outcome.to_string()))
    }

    fn save(&mut self) -> Result<Reply, CliError> {
        let outcome = self.lock_history()?.save(&self.config.history_file)?;
        Ok(Reply::Output(outcome.to_string()))
    }

    fn load(&mut self) -> Result<Reply, CliError> {
        let outcome = self.lock_history()?.load(&self.config.history_file)?;
        Ok(Reply::Output(outcome.to_string()))
    }

    fn exit(&mut self) -> Result<Reply, CliError> {
        Ok(Reply::Exit(GOODBYE.to_string()))
    }
}
