//! File-backed persistence for the expense log.
//!
//! Reading never fails from the caller's point of view: a missing, unreadable or
//! corrupt file is an empty log. Writing can fail, and the failure is handed
//! back so the caller can warn about it, but it never undoes an append.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;

use crate::{EngineError, ExpenseLog, ExpenseRecord, ResultEngine};

/// Storage location used when nothing else is configured.
pub const DEFAULT_DATA_FILE: &str = "expenses.json";

/// Expense storage bound to a single JSON file.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

/// Result of [`Store::append`]: the grown log plus the outcome of saving it.
#[derive(Debug)]
pub struct AppendOutcome {
    pub log: ExpenseLog,
    pub persisted: ResultEngine<()>,
}

impl AppendOutcome {
    /// The save failure to report, if any.
    pub fn warning(&self) -> Option<&EngineError> {
        self.persisted.as_ref().err()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the log from disk, degrading to an empty log on any problem.
    pub fn load(&self) -> ExpenseLog {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no expense file yet");
                return ExpenseLog::default();
            }
            Err(err) => {
                tracing::warn!(path = %self.path.display(), "cannot read expense file: {err}");
                return ExpenseLog::default();
            }
        };

        match serde_json::from_str::<Value>(&content) {
            Ok(value) => ExpenseLog::from_value(&value),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), "corrupt expense file: {err}");
                ExpenseLog::default()
            }
        }
    }

    /// Overwrites the backing file with the whole log.
    pub fn persist(&self, log: &ExpenseLog) -> ResultEngine<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let payload = serde_json::to_string_pretty(log)?;
        fs::write(&self.path, payload)?;
        tracing::debug!(path = %self.path.display(), records = log.len(), "expenses saved");
        Ok(())
    }

    /// Appends a new expense stamped with the current time and saves the log.
    ///
    /// # Contract
    ///
    /// The caller guarantees `amount > 0` (and finite) and a `category` that
    /// is not blank. Nothing here checks it: input validation belongs to
    /// whoever collects the input.
    ///
    /// The record stays in the returned log even when saving fails; see
    /// [`AppendOutcome::warning`].
    pub fn append(&self, mut log: ExpenseLog, amount: f64, category: &str) -> AppendOutcome {
        let record = ExpenseRecord::now(amount, category);
        tracing::debug!(%record, "expense appended");
        log.push(record);
        let persisted = self.persist(&log);
        if let Err(err) = &persisted {
            tracing::warn!(path = %self.path.display(), "failed to save expenses: {err}");
        }
        AppendOutcome { log, persisted }
    }
}
