//! Expense tracking engine.
//!
//! The engine owns nothing global: the caller loads an [`ExpenseLog`] from a
//! [`Store`], passes it back into [`Store::append`] to record an expense, and
//! asks [`total`] for the sum whenever it needs one.
//!
//! ```no_run
//! use engine::{Store, total};
//!
//! let store = Store::new("expenses.json");
//! let log = store.load();
//! let outcome = store.append(log, 12.5, "Food");
//! if let Some(err) = outcome.warning() {
//!     eprintln!("not saved: {err}");
//! }
//! println!("{:.2}", total(&outcome.log));
//! ```
pub use aggregate::total;
pub use error::{EngineError, RecordRejection};
pub use log::ExpenseLog;
pub use record::{ExpenseRecord, TIMESTAMP_FORMAT};
pub use store::{AppendOutcome, DEFAULT_DATA_FILE, Store};

mod aggregate;
mod error;
mod log;
mod record;
mod store;

pub type ResultEngine<T> = Result<T, EngineError>;
