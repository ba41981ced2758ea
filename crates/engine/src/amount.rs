use crate::EngineError;

/// Parses a field value as a decimal amount.
///
/// Surrounding whitespace is ignored. Accepts an optional leading `+`/`-`,
/// an optional fractional part and an optional exponent (`1e3`).
///
/// Validation rules:
/// - rejects empty strings
/// - rejects anything that is not a decimal number (`abc`, `1,5`, `1.2.3`)
/// - rejects non-finite values (`NaN`, `inf`, overflowing exponents)
///
/// # Examples
///
/// ```rust
/// use expense_engine::try_parse_amount;
///
/// assert_eq!(try_parse_amount("12.5").unwrap(), 12.5);
/// assert!(try_parse_amount("twelve").is_err());
/// ```
pub fn try_parse_amount(text: &str) -> Result<f64, EngineError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidAmount("empty amount".to_string()));
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| EngineError::InvalidAmount(format!("\"{trimmed}\" is not a number")))?;

    if !value.is_finite() {
        return Err(EngineError::InvalidAmount(format!(
            "\"{trimmed}\" is not a finite number"
        )));
    }

    Ok(value)
}

/// Lenient variant of [`try_parse_amount`]: anything that does not parse is
/// worth `0.0`.
///
/// An empty or invalid field means "nothing entered yet", so it contributes
/// nothing to the total.
///
/// ```rust
/// use expense_engine::parse_amount;
///
/// assert_eq!(parse_amount(""), 0.0);
/// assert_eq!(parse_amount("-3"), -3.0);
/// ```
#[must_use]
pub fn parse_amount(text: &str) -> f64 {
    try_parse_amount(text).unwrap_or(0.0)
}
