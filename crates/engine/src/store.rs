//! Flat-file persistence for the ledger.
//!
//! The data file is comma-separated with a `Date,Category,Description,Amount`
//! header row and is rewritten in full on every mutation. A missing file
//! means an empty ledger; a malformed row is a load error (there is no
//! corruption recovery).

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Category, Expense, Money, ResultEngine};

/// Where the ledger keeps its records.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Store {
    /// Process-local only; records are lost on restart.
    Memory,
    /// Backed by a CSV file, rewritten in full on every mutation.
    Csv(PathBuf),
}

impl Store {
    #[must_use]
    pub fn csv(path: impl Into<PathBuf>) -> Self {
        Self::Csv(path.into())
    }

    /// Loads all records. A missing file yields an empty list.
    pub fn load(&self) -> ResultEngine<Vec<Expense>> {
        let Store::Csv(path) = self else {
            return Ok(Vec::new());
        };
        if !path.exists() {
            return Ok(Vec::new());
        }
        read_csv(path)
    }

    /// Rewrites the backing file with the given records. No-op for the
    /// in-memory variant.
    pub fn persist(&self, expenses: &[Expense]) -> ResultEngine<()> {
        let Store::Csv(path) = self else {
            return Ok(());
        };

        let mut writer = csv::Writer::from_path(path)?;
        for expense in expenses {
            writer.serialize(Row::from(expense))?;
        }
        writer.flush()?;
        tracing::debug!(rows = expenses.len(), path = %path.display(), "data file rewritten");
        Ok(())
    }
}

/// One line of the data file. `Category` and `Amount` stay raw strings so
/// loading goes through the same parsers as form input: category lookup is
/// case-insensitive and rejects names outside the set, amounts are plain
/// decimals, never raw paise.
#[derive(Debug, Serialize, Deserialize)]
struct Row {
    #[serde(rename = "Date")]
    date: NaiveDate,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Amount")]
    amount: String,
}

impl From<&Expense> for Row {
    fn from(expense: &Expense) -> Self {
        Row {
            date: expense.date,
            category: expense.category.as_str().to_string(),
            description: expense.description.clone(),
            amount: expense.amount.to_decimal_string(),
        }
    }
}

impl Row {
    fn into_expense(self) -> ResultEngine<Expense> {
        let category: Category = self.category.parse()?;
        let amount: Money = self.amount.parse()?;
        Ok(Expense {
            date: self.date,
            category,
            description: self.description,
            amount,
        })
    }
}

fn read_csv(path: &Path) -> ResultEngine<Vec<Expense>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut expenses = Vec::new();
    for row in reader.deserialize::<Row>() {
        expenses.push(row?.into_expense()?);
    }
    Ok(expenses)
}

/// Serializes records to CSV bytes in the data-file format. Used for the
/// download affordance.
pub fn export_csv(expenses: &[Expense]) -> ResultEngine<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(vec![]);
    for expense in expenses {
        writer.serialize(Row::from(expense))?;
    }
    writer
        .into_inner()
        .map_err(|err| crate::EngineError::Io(err.into_error()))
}
