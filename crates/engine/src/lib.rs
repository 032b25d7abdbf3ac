//! Core expense ledger: an ordered list of records backed by a flat CSV file
//! (or nothing at all), plus the aggregates the dashboards render.
//!
//! The ledger recomputes nothing incrementally: every mutation appends or
//! removes whole records and rewrites the backing file, and [`Ledger::summary`]
//! folds over the full list on demand. With a handful of rows that is the
//! entire cost model.

pub use category::Category;
pub use error::EngineError;
pub use expense::{Expense, NewExpense};
pub use money::Money;
pub use stats::Summary;
pub use store::Store;

mod category;
mod error;
mod expense;
mod money;
mod stats;
mod store;

pub type ResultEngine<T> = Result<T, EngineError>;

/// The record store. Owns the full ordered list of expenses and the
/// persistence target.
#[derive(Debug)]
pub struct Ledger {
    store: Store,
    expenses: Vec<Expense>,
}

impl Ledger {
    /// Opens a ledger on the given store, loading any existing records.
    pub fn open(store: Store) -> ResultEngine<Self> {
        let expenses = store.load()?;
        tracing::info!(rows = expenses.len(), "ledger loaded");
        Ok(Self { store, expenses })
    }

    /// An empty ledger with no persistence (the session-memory variant).
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            store: Store::Memory,
            expenses: Vec::new(),
        }
    }

    /// Validates and appends a record, then rewrites the backing file.
    /// Returns the row index of the new record.
    pub fn add(&mut self, submission: NewExpense) -> ResultEngine<usize> {
        let expense = submission.validate()?;
        self.expenses.push(expense);
        if let Err(err) = self.store.persist(&self.expenses) {
            self.expenses.pop();
            return Err(err);
        }
        Ok(self.expenses.len() - 1)
    }

    /// Removes the record at `index` (positional, indices shift down) and
    /// rewrites the backing file. Returns the removed record.
    pub fn remove(&mut self, index: usize) -> ResultEngine<Expense> {
        if index >= self.expenses.len() {
            return Err(EngineError::IndexOutOfRange {
                index,
                len: self.expenses.len(),
            });
        }
        let removed = self.expenses.remove(index);
        if let Err(err) = self.store.persist(&self.expenses) {
            self.expenses.insert(index, removed);
            return Err(err);
        }
        Ok(removed)
    }

    /// Removes every record. Returns how many were removed.
    pub fn clear(&mut self) -> ResultEngine<usize> {
        let removed = std::mem::take(&mut self.expenses);
        if let Err(err) = self.store.persist(&self.expenses) {
            self.expenses = removed;
            return Err(err);
        }
        Ok(removed.len())
    }

    /// All records, in insertion order.
    #[must_use]
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Aggregates for the dashboard: total, count, average, per-category and
    /// per-month sums.
    #[must_use]
    pub fn summary(&self) -> Summary {
        stats::summarize(&self.expenses)
    }

    /// The current records serialized in the data-file format, for the
    /// download affordance.
    pub fn export_csv(&self) -> ResultEngine<Vec<u8>> {
        store::export_csv(&self.expenses)
    }
}
