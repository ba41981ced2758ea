//! The module contains the error the engine can throw.
//!
//! The only one is [`InvalidAmount`], returned by the strict amount parser when
//! a field does not hold a finite decimal number. The lenient pipeline never
//! lets it escape.
//!
//!  [`InvalidAmount`]: EngineError::InvalidAmount
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}
