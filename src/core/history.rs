//! Undoable calculation history.
//!
//! `History` is the caretaker of the memento pattern: it owns the live
//! calculation sequence plus two stacks of [`Snapshot`]s that implement a
//! linear undo/redo timeline.

use super::calculation::Calculation;
use super::memento::Snapshot;
use crate::persistence::{self, PersistenceError};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

/// History shared between the REPL and the observers that read or record it.
pub type SharedHistory = Arc<Mutex<History>>;

/// Informational result of a history operation.
///
/// "Nothing to undo" and friends are expected states, not faults, so they
/// are returned as values rather than errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HistoryOutcome {
    Undone,
    NothingToUndo,
    Redone,
    NothingToRedo,
    Saved { path: PathBuf, rows: usize },
    NothingToSave,
    Loaded { path: PathBuf, rows: usize },
    NoHistoryFile { path: PathBuf },
}

impl fmt::Display for HistoryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undone => write!(f, "Last calculation undone."),
            Self::NothingToUndo => write!(f, "Nothing to undo."),
            Self::Redone => write!(f, "Last calculation redone."),
            Self::NothingToRedo => write!(f, "Nothing to redo."),
            Self::Saved { path, rows } => {
                write!(f, "History saved to {} ({} rows).", path.display(), rows)
            }
            Self::NothingToSave => write!(f, "History is empty. Nothing to save."),
            Self::Loaded { path, rows } => {
                write!(f, "Loaded {} calculations from {}.", rows, path.display())
            }
            Self::NoHistoryFile { path } => {
                write!(f, "No history file found at {}.", path.display())
            }
        }
    }
}

/// Live calculation sequence with undo/redo snapshots.
///
/// Invariants held after every public method returns:
///
/// - the undo stack is never empty; its bottom entry is the baseline state
///   (empty at construction, the loaded rows after [`History::load`])
/// - `calculations()` equals the state captured by the top of the undo stack
/// - any [`History::add_calculation`] clears the redo stack
///
/// # Example
///
/// ```rust
/// use recalc::core::{Calculation, History, HistoryOutcome};
/// use rust_decimal::Decimal;
///
/// let mut history = History::new();
/// history.add_calculation(Calculation::new(
///     Decimal::from(10),
///     Decimal::from(5),
///     "add",
///     Decimal::from(15),
/// ));
///
/// assert_eq!(history.len(), 1);
/// assert_eq!(history.undo(), HistoryOutcome::Undone);
/// assert!(history.is_empty());
/// assert_eq!(history.undo(), HistoryOutcome::NothingToUndo);
/// assert_eq!(history.redo(), HistoryOutcome::Redone);
/// assert_eq!(history.len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct History {
    calculations: Vec<Calculation>,
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Create an empty history whose undo stack holds the empty baseline.
    pub fn new() -> Self {
        Self::with_baseline(Vec::new())
    }

    fn with_baseline(calculations: Vec<Calculation>) -> Self {
        let baseline = Snapshot::capture(&calculations);
        Self {
            calculations,
            undo_stack: vec![baseline],
            redo_stack: Vec::new(),
        }
    }

    /// Append a calculation, forking the timeline.
    pub fn add_calculation(&mut self, calculation: Calculation) {
        debug!(calculation = %calculation, "recording calculation");
        self.calculations.push(calculation);
        self.redo_stack.clear();
        self.undo_stack.push(Snapshot::capture(&self.calculations));
    }

    /// Step back to the previous snapshot.
    pub fn undo(&mut self) -> HistoryOutcome {
        if self.undo_stack.len() <= 1 {
            info!("nothing to undo");
            return HistoryOutcome::NothingToUndo;
        }

        if let Some(current) = self.undo_stack.pop() {
            self.redo_stack.push(current);
        }
        self.restore_top();
        debug!(
            len = self.calculations.len(),
            redo_depth = self.redo_stack.len(),
            "undone"
        );
        HistoryOutcome::Undone
    }

    /// Re-apply the most recently undone snapshot.
    pub fn redo(&mut self) -> HistoryOutcome {
        let Some(snapshot) = self.redo_stack.pop() else {
            info!("nothing to redo");
            return HistoryOutcome::NothingToRedo;
        };

        self.undo_stack.push(snapshot);
        self.restore_top();
        debug!(
            len = self.calculations.len(),
            redo_depth = self.redo_stack.len(),
            "redone"
        );
        HistoryOutcome::Redone
    }

    fn restore_top(&mut self) {
        if let Some(top) = self.undo_stack.last() {
            self.calculations = top.restore();
        }
    }

    /// Write the live sequence to a CSV file at `path`, replacing it.
    ///
    /// An empty history writes nothing and reports [`HistoryOutcome::NothingToSave`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<HistoryOutcome, PersistenceError> {
        let path = path.as_ref();
        if self.calculations.is_empty() {
            info!("history is empty, nothing to save");
            return Ok(HistoryOutcome::NothingToSave);
        }

        persistence::write_calculations(path, &self.calculations)?;
        info!(path = %path.display(), rows = self.calculations.len(), "history saved");
        Ok(HistoryOutcome::Saved {
            path: path.to_path_buf(),
            rows: self.calculations.len(),
        })
    }

    /// Replace the live sequence with the rows of the CSV file at `path`.
    ///
    /// A successful load becomes the new undo baseline and discards both
    /// stacks. A missing file is reported, not raised. Any read or parse
    /// failure returns an error and leaves the history untouched.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<HistoryOutcome, PersistenceError> {
        let path = path.as_ref();
        if !path.exists() {
            info!(path = %path.display(), "no history file found");
            return Ok(HistoryOutcome::NoHistoryFile {
                path: path.to_path_buf(),
            });
        }

        let loaded = persistence::read_calculations(path)?;
        let rows = loaded.len();
        *self = Self::with_baseline(loaded);
        info!(path = %path.display(), rows, "history loaded");
        Ok(HistoryOutcome::Loaded {
            path: path.to_path_buf(),
            rows,
        })
    }

    /// The live calculation sequence, oldest first.
    pub fn calculations(&self) -> &[Calculation] {
        &self.calculations
    }

    pub fn len(&self) -> usize {
        self.calculations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calculations.is_empty()
    }

    /// Number of snapshots on the undo stack, baseline included.
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn can_undo(&self) -> bool {
        self.undo_stack.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}
