use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::EngineError;

/// Expense category, drawn from a fixed closed set.
///
/// The variants match the values stored in the `Category` column of the data
/// file; serde uses the variant names verbatim so a serialized category is
/// always a member of the set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Travel,
    Bills,
    Shopping,
    Entertainment,
    #[default]
    Other,
}

impl Category {
    /// All categories, in the order offered by the entry form.
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Travel,
        Category::Bills,
        Category::Shopping,
        Category::Entertainment,
        Category::Other,
    ];

    /// Returns the canonical name, as written to the data file.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Travel => "Travel",
            Self::Bills => "Bills",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::Other => "Other",
        }
    }

    /// The category after `self` in form order, wrapping around.
    #[must_use]
    pub fn next(self) -> Category {
        let pos = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }

    /// The category before `self` in form order, wrapping around.
    #[must_use]
    pub fn prev(self) -> Category {
        let pos = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(pos + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = EngineError;

    /// Case-insensitive lookup in the closed set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| EngineError::UnknownCategory(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!(" BILLS ".parse::<Category>().unwrap(), Category::Bills);
    }

    #[test]
    fn parse_rejects_names_outside_the_set() {
        assert!(matches!(
            "Groceries".parse::<Category>(),
            Err(EngineError::UnknownCategory(_))
        ));
    }

    #[test]
    fn next_and_prev_wrap() {
        assert_eq!(Category::Other.next(), Category::Food);
        assert_eq!(Category::Food.prev(), Category::Other);
        for category in Category::ALL {
            assert_eq!(category.next().prev(), category);
        }
    }
}
