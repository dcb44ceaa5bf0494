//! Observer error types.

use crate::persistence::PersistenceError;
use std::fmt;
use thiserror::Error;

/// Errors an observer can report from [`receive`](super::CalculationObserver::receive)
#[derive(Debug, Error)]
pub enum ObserverError {
    /// Writing to the observer's sink failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Rewriting the history file failed
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// The shared history was poisoned by a panic elsewhere
    #[error("History is unavailable: {0}")]
    HistoryUnavailable(String),
}

/// One observer's failure during a fan-out.
#[derive(Debug)]
pub struct ObserverFailure {
    pub observer: String,
    pub error: ObserverError,
}

impl fmt::Display for ObserverFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.observer, self.error)
    }
}

/// Every failure collected from one notification.
///
/// A failing observer does not stop the fan-out; the remaining observers
/// still run and their failures are gathered here.
#[derive(Debug)]
pub struct NotifyError {
    pub failures: Vec<ObserverFailure>,
}

impl fmt::Display for NotifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} observer(s) failed", self.failures.len())?;
        for failure in &self.failures {
            write!(f, "; {failure}")?;
        }
        Ok(())
    }
}

impl std::error::Error for NotifyError {}
