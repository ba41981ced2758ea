use crate::{EXPENSE_COUNT, ExpenseCategory, FIELD_COUNT, Field, compute_leftover};

/// Everything the user entered during one session of the form.
///
/// The store keeps raw text only. Values are never validated on write; the
/// leftover is derived on demand by [`FormState::leftover`].
///
/// Every write bumps [`FormState::revision`] and records the written field in
/// [`FormState::last_changed`], so a renderer can tell what moved since its
/// last frame.
///
/// # Examples
///
/// ```rust
/// use expense_engine::{ExpenseCategory, Field, FormState};
///
/// let mut form = FormState::new();
/// form.set_field(Field::Balance, "1000");
/// form.set_field(ExpenseCategory::Grocery.into(), "250");
///
/// assert_eq!(form.leftover(), 750.0);
/// assert!(!form.is_acknowledgement_visible());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    values: [String; FIELD_COUNT],
    acknowledgement_visible: bool,
    revision: u64,
    last_changed: Option<Field>,
}

impl FormState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the text of `field`.
    pub fn set_field(&mut self, field: Field, text: impl Into<String>) {
        self.values[field.index()] = text.into();
        self.revision = self.revision.wrapping_add(1);
        self.last_changed = Some(field);
    }

    /// Current text of `field`, empty if it was never set.
    #[must_use]
    pub fn field(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    #[must_use]
    pub fn expense(&self, category: ExpenseCategory) -> &str {
        self.field(category.into())
    }

    /// Expense texts in [`ExpenseCategory::ALL`] order.
    #[must_use]
    pub fn expense_texts(&self) -> [&str; EXPENSE_COUNT] {
        ExpenseCategory::ALL.map(|category| self.expense(category))
    }

    /// Balance minus every expense, computed from the current values.
    #[must_use]
    pub fn leftover(&self) -> f64 {
        compute_leftover(self.field(Field::Balance), &self.expense_texts())
    }

    pub fn show_acknowledgement(&mut self) {
        self.acknowledgement_visible = true;
    }

    pub fn hide_acknowledgement(&mut self) {
        self.acknowledgement_visible = false;
    }

    #[must_use]
    pub fn is_acknowledgement_visible(&self) -> bool {
        self.acknowledgement_visible
    }

    /// Number of writes applied so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn last_changed(&self) -> Option<Field> {
        self.last_changed
    }
}
