//! Aggregates over the record list: grand total, per-category and per-month
//! sums. These back the dashboard metrics and charts.

use std::collections::{BTreeMap, HashMap};

use crate::{Category, Expense, Money};

/// Aggregate report over the whole ledger.
///
/// Both breakdowns partition the records, so each one sums back to `total`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: Money,
    pub count: usize,
    pub average: Money,
    /// Per-category sums, largest first.
    pub by_category: Vec<(Category, Money)>,
    /// Per-month (`YYYY-MM`) sums, oldest first.
    pub by_month: Vec<(String, Money)>,
}

pub fn summarize(expenses: &[Expense]) -> Summary {
    let total: Money = expenses.iter().map(|e| e.amount).sum();
    let count = expenses.len();
    let average = if count == 0 {
        Money::ZERO
    } else {
        Money::new(total.paise() / count as i64)
    };

    let mut categories: HashMap<Category, Money> = HashMap::new();
    for expense in expenses {
        *categories.entry(expense.category).or_insert(Money::ZERO) += expense.amount;
    }
    let mut by_category: Vec<_> = categories.into_iter().collect();
    by_category.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.as_str().cmp(b.0.as_str())));

    let mut months: BTreeMap<String, Money> = BTreeMap::new();
    for expense in expenses {
        *months.entry(expense.month_key()).or_insert(Money::ZERO) += expense.amount;
    }
    let by_month = months.into_iter().collect();

    Summary {
        total,
        count,
        average,
        by_category,
        by_month,
    }
}
