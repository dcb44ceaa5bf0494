//! Core calculator state.
//!
//! This module contains the data model and the undo/redo machinery:
//! - `Calculation`: immutable record of one executed operation
//! - `Snapshot`: independently owned copy of the history at one point
//! - `History`: the live sequence plus undo/redo snapshot stacks
//!
//! Nothing here knows about operations or observers.

mod calculation;
mod history;
mod memento;

pub use calculation::Calculation;
pub use history::{History, HistoryOutcome, SharedHistory};
pub use memento::Snapshot;
