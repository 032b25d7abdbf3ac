use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Category, EngineError, Money, ResultEngine};

/// A single recorded transaction entry.
///
/// Records live in an ordered sequence (insertion order) and are addressed
/// positionally; there is no stable identifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub date: NaiveDate,
    pub category: Category,
    pub description: String,
    pub amount: Money,
}

impl Expense {
    /// The `YYYY-MM` key used for per-month aggregation.
    #[must_use]
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}

/// Form input for a new expense, validated before it becomes an [`Expense`].
#[derive(Clone, Debug)]
pub struct NewExpense {
    pub date: NaiveDate,
    pub category: Category,
    pub description: String,
    pub amount: Money,
}

impl NewExpense {
    /// Validates the submission and produces the record to append.
    ///
    /// Rejections (surfaced inline by the frontends):
    /// - empty or whitespace-only description
    /// - amount of zero (negative amounts cannot be constructed from input,
    ///   but a raw value is checked anyway)
    pub fn validate(self) -> ResultEngine<Expense> {
        let description = self.description.trim().to_string();
        if description.is_empty() {
            return Err(EngineError::InvalidDescription(
                "description must not be empty".to_string(),
            ));
        }

        if self.amount.paise() <= 0 {
            return Err(EngineError::InvalidAmount(
                "amount must be greater than zero".to_string(),
            ));
        }

        Ok(Expense {
            date: self.date,
            category: self.category,
            description,
            amount: self.amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(description: &str, paise: i64) -> NewExpense {
        NewExpense {
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            category: Category::Food,
            description: description.to_string(),
            amount: Money::new(paise),
        }
    }

    #[test]
    fn validate_trims_description() {
        let expense = submission("  lunch  ", 250).validate().unwrap();
        assert_eq!(expense.description, "lunch");
    }

    #[test]
    fn validate_rejects_empty_description() {
        assert!(matches!(
            submission("   ", 250).validate(),
            Err(EngineError::InvalidDescription(_))
        ));
    }

    #[test]
    fn validate_rejects_non_positive_amount() {
        assert!(matches!(
            submission("lunch", 0).validate(),
            Err(EngineError::InvalidAmount(_))
        ));
        assert!(matches!(
            submission("lunch", -100).validate(),
            Err(EngineError::InvalidAmount(_))
        ));
    }

    #[test]
    fn month_key_uses_year_and_month() {
        let expense = submission("lunch", 250).validate().unwrap();
        assert_eq!(expense.month_key(), "2024-03");
    }
}
