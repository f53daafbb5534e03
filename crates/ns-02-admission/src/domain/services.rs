//! Domain services: input checks applied before a submission reaches the ledger.

use super::errors::AdmissionError;

/// Submitter recorded when none is given.
pub const ANONYMOUS: &str = "anonymous";

/// Reject values that are empty after trimming whitespace.
///
/// The value itself is passed on untrimmed.
pub fn validate_value(value: &str) -> Result<&str, AdmissionError> {
    if value.trim().is_empty() {
        return Err(AdmissionError::EmptyValue);
    }
    Ok(value)
}

/// The submitter name to record, defaulting to [`ANONYMOUS`].
pub fn submitter_or_anonymous(submitter: Option<&str>) -> &str {
    match submitter.map(str::trim) {
        Some(name) if !name.is_empty() => name,
        _ => ANONYMOUS,
    }
}
