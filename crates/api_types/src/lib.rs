use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Expense category as carried on the wire. Mapped to/from the engine's
/// enum by the server handlers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Food,
    Travel,
    Bills,
    Shopping,
    Entertainment,
    #[default]
    Other,
}

pub mod expense {
    use super::*;

    /// Request body for adding an expense.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseNew {
        /// Calendar date, `YYYY-MM-DD`.
        pub date: NaiveDate,
        pub category: Category,
        pub description: String,
        /// Amount in paise. Must be > 0.
        pub amount_minor: i64,
    }

    /// One record as rendered in the table.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseView {
        /// Current row index. Indices shift down after a delete, so clients
        /// must use indices from a fresh listing.
        pub index: usize,
        pub date: NaiveDate,
        pub category: Category,
        pub description: String,
        pub amount_minor: i64,
    }

    /// Response body for the full listing.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseListResponse {
        pub expenses: Vec<ExpenseView>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseCreated {
        pub index: usize,
    }

    /// Response body after a clear-all.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpensesCleared {
        pub removed: usize,
    }
}

pub mod stats {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategoryTotal {
        pub category: Category,
        pub amount_minor: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct MonthTotal {
        /// `YYYY-MM` key.
        pub month: String,
        pub amount_minor: i64,
    }

    /// Aggregate dashboard figures.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct Summary {
        pub total_minor: i64,
        pub count: usize,
        pub average_minor: i64,
        /// Largest category first.
        pub by_category: Vec<CategoryTotal>,
        /// Oldest month first.
        pub by_month: Vec<MonthTotal>,
    }
}
