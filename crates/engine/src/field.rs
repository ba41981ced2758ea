use std::fmt;

/// Number of expense categories on the form.
pub const EXPENSE_COUNT: usize = 6;

/// Number of input slots on the form (balance + expenses).
pub const FIELD_COUNT: usize = EXPENSE_COUNT + 1;

/// A closed set of monthly expense categories.
///
/// The order of [`ExpenseCategory::ALL`] is the order in which the categories
/// appear on the form and the order expected by
/// [`compute_leftover`](crate::compute_leftover).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExpenseCategory {
    Grocery,
    Electricity,
    Water,
    Gas,
    Fuel,
    Internet,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; EXPENSE_COUNT] = [
        Self::Grocery,
        Self::Electricity,
        Self::Water,
        Self::Gas,
        Self::Fuel,
        Self::Internet,
    ];

    /// Position of the category inside [`ExpenseCategory::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Grocery => 0,
            Self::Electricity => 1,
            Self::Water => 2,
            Self::Gas => 3,
            Self::Fuel => 4,
            Self::Internet => 5,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        Field::from(self).label()
    }
}

/// One input slot of the form: the balance or an expense category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Balance,
    Expense(ExpenseCategory),
}

impl Field {
    /// All fields in tab order.
    pub const ALL: [Field; FIELD_COUNT] = [
        Self::Balance,
        Self::Expense(ExpenseCategory::Grocery),
        Self::Expense(ExpenseCategory::Electricity),
        Self::Expense(ExpenseCategory::Water),
        Self::Expense(ExpenseCategory::Gas),
        Self::Expense(ExpenseCategory::Fuel),
        Self::Expense(ExpenseCategory::Internet),
    ];

    /// Position of the field inside [`Field::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Balance => 0,
            Self::Expense(category) => category.index() + 1,
        }
    }

    /// Returns the expense category, `None` for the balance.
    #[must_use]
    pub const fn category(self) -> Option<ExpenseCategory> {
        match self {
            Self::Balance => None,
            Self::Expense(category) => Some(category),
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Balance => "Balance",
            Self::Expense(ExpenseCategory::Grocery) => "Grocery",
            Self::Expense(ExpenseCategory::Electricity) => "Electricity",
            Self::Expense(ExpenseCategory::Water) => "Water",
            Self::Expense(ExpenseCategory::Gas) => "Gas",
            Self::Expense(ExpenseCategory::Fuel) => "Fuel",
            Self::Expense(ExpenseCategory::Internet) => "Internet",
        }
    }

    /// Single-width glyph drawn next to the label.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Balance => "$",
            Self::Expense(ExpenseCategory::Grocery) => "⊞",
            Self::Expense(ExpenseCategory::Electricity) => "ϟ",
            Self::Expense(ExpenseCategory::Water) => "≈",
            Self::Expense(ExpenseCategory::Gas) => "♨",
            Self::Expense(ExpenseCategory::Fuel) => "◈",
            Self::Expense(ExpenseCategory::Internet) => "⇅",
        }
    }

    /// Next field in tab order, `None` after the last one.
    #[must_use]
    pub fn next(self) -> Option<Field> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// Previous field in tab order, `None` before the first one.
    #[must_use]
    pub fn prev(self) -> Option<Field> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    #[must_use]
    pub fn first() -> Field {
        Self::Balance
    }

    #[must_use]
    pub fn last() -> Field {
        Self::Expense(ExpenseCategory::Internet)
    }
}

impl From<ExpenseCategory> for Field {
    fn from(value: ExpenseCategory) -> Self {
        Self::Expense(value)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_order_starts_with_balance_and_follows_categories() {
        assert_eq!(Field::ALL[0], Field::Balance);
        for (i, category) in ExpenseCategory::ALL.iter().enumerate() {
            assert_eq!(Field::ALL[i + 1], Field::from(*category));
        }
    }

    #[test]
    fn index_matches_position() {
        for (i, field) in Field::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn next_and_prev_walk_the_chain() {
        assert_eq!(
            Field::Balance.next(),
            Some(Field::Expense(ExpenseCategory::Grocery))
        );
        assert_eq!(Field::last().next(), None);
        assert_eq!(Field::first().prev(), None);
        assert_eq!(
            Field::Expense(ExpenseCategory::Water).prev(),
            Some(Field::Expense(ExpenseCategory::Electricity))
        );
    }

    #[test]
    fn category_is_none_only_for_balance() {
        assert_eq!(Field::Balance.category(), None);
        assert_eq!(
            Field::Expense(ExpenseCategory::Fuel).category(),
            Some(ExpenseCategory::Fuel)
        );
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Field::Balance.to_string(), "Balance");
        assert_eq!(ExpenseCategory::Internet.to_string(), "Internet");
    }
}
