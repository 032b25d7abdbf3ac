//! State and parsing for the add-expense form.

use chrono::NaiveDate;
use engine::{Category, Money, NewExpense};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Date,
    Category,
    Description,
    Amount,
}

impl FormField {
    pub fn next(self) -> FormField {
        match self {
            Self::Date => Self::Category,
            Self::Category => Self::Description,
            Self::Description => Self::Amount,
            Self::Amount => Self::Date,
        }
    }
}

/// In-progress form input. Date and amount stay raw strings until submission
/// so the user can type freely; category cycles through the closed set.
#[derive(Debug)]
pub struct ExpenseForm {
    pub date: String,
    pub category: Category,
    pub description: String,
    pub amount: String,
    pub focus: FormField,
    pub message: Option<String>,
}

impl ExpenseForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            date: today.format("%Y-%m-%d").to_string(),
            category: Category::default(),
            description: String::new(),
            amount: String::new(),
            focus: FormField::Date,
            message: None,
        }
    }

    pub fn advance_focus(&mut self) {
        self.focus = self.focus.next();
    }

    /// The text buffer under focus; `None` while the category picker is
    /// focused.
    pub fn active_field_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Date => Some(&mut self.date),
            FormField::Category => None,
            FormField::Description => Some(&mut self.description),
            FormField::Amount => Some(&mut self.amount),
        }
    }

    pub fn cycle_category_next(&mut self) {
        self.category = self.category.next();
    }

    pub fn cycle_category_prev(&mut self) {
        self.category = self.category.prev();
    }

    /// Parses the raw input into a submission. Engine-level validation
    /// (empty description, zero amount) happens in `Ledger::add`.
    pub fn parse(&self) -> Result<NewExpense, String> {
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| "Enter the date as YYYY-MM-DD.".to_string())?;

        let amount: Money = self
            .amount
            .parse()
            .map_err(|err: engine::EngineError| err.to_string())?;

        Ok(NewExpense {
            date,
            category: self.category,
            description: self.description.clone(),
            amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ExpenseForm {
        let mut form = ExpenseForm::new(NaiveDate::from_ymd_opt(2024, 5, 12).unwrap());
        form.description = "chai".to_string();
        form.amount = "20.00".to_string();
        form
    }

    #[test]
    fn new_form_prefills_today() {
        let form = ExpenseForm::new(NaiveDate::from_ymd_opt(2024, 5, 12).unwrap());
        assert_eq!(form.date, "2024-05-12");
        assert_eq!(form.focus, FormField::Date);
    }

    #[test]
    fn parse_builds_a_submission() {
        let submission = filled_form().parse().unwrap();
        assert_eq!(submission.amount, Money::new(2000));
        assert_eq!(submission.description, "chai");
    }

    #[test]
    fn parse_rejects_bad_date() {
        let mut form = filled_form();
        form.date = "12-05-2024".to_string();
        assert!(form.parse().is_err());
    }

    #[test]
    fn parse_rejects_bad_amount() {
        let mut form = filled_form();
        form.amount = "twenty".to_string();
        assert!(form.parse().is_err());
    }

    #[test]
    fn focus_cycles_through_all_fields() {
        let mut field = FormField::Date;
        for _ in 0..4 {
            field = field.next();
        }
        assert_eq!(field, FormField::Date);
    }
}
