//! Core of the expense calculator: the form store and the pure functions that
//! turn its raw text into a leftover amount.
//!
//! Nothing here does I/O. A front-end owns one [`FormState`], writes every
//! keystroke into it and asks it (or [`compute_leftover`]) for the result
//! whenever it needs to draw.

pub use acknowledgement::{
    Acknowledgement, AcknowledgementMode, PLACEHOLDER_MESSAGE, acknowledgement,
};
pub use amount::{parse_amount, try_parse_amount};
pub use error::EngineError;
pub use field::{EXPENSE_COUNT, ExpenseCategory, FIELD_COUNT, Field};
pub use form::FormState;
pub use leftover::compute_leftover;

mod acknowledgement;
mod amount;
mod error;
mod field;
mod form;
mod leftover;
