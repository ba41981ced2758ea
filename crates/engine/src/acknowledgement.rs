//! Content of the confirmation overlay shown after a calculation.
use std::fmt;

use serde::Deserialize;

use crate::FormState;

/// Text shown when the overlay runs in [`AcknowledgementMode::Placeholder`].
pub const PLACEHOLDER_MESSAGE: &str = "This is a minimal dialog";

/// What the overlay displays once the user asks for a calculation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AcknowledgementMode {
    /// Static confirmation text, the leftover is not shown.
    #[default]
    Placeholder,
    /// The leftover computed from the current form values.
    Leftover,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Acknowledgement {
    Placeholder,
    Leftover(f64),
}

impl Acknowledgement {
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Acknowledgement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Placeholder => f.write_str(PLACEHOLDER_MESSAGE),
            Self::Leftover(amount) => write!(f, "Left over: {amount}"),
        }
    }
}

/// Decides the overlay content for the current form.
///
/// The leftover is computed on every call, never cached.
#[must_use]
pub fn acknowledgement(form: &FormState, mode: AcknowledgementMode) -> Acknowledgement {
    match mode {
        AcknowledgementMode::Placeholder => Acknowledgement::Placeholder,
        AcknowledgementMode::Leftover => Acknowledgement::Leftover(form.leftover()),
    }
}
