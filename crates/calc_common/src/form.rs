//! Calculator form state
//!
//! Every calculator page follows the same cycle:
//! idle -> loading -> (success | error) -> idle.
//!
//! A successful response replaces the result. Errors only touch the error
//! message, so the last good result stays on screen underneath it.

use thiserror::Error;

/// Shown for any failure to reach the calculation service
pub const CONNECTION_ERROR: &str = "Failed to connect. Make sure the calculation server is running.";

/// Local validation failure; the request is never sent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{field} must be a number (got '{value}')")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{field} must be a whole number (got '{value}')")]
    InvalidInteger { field: &'static str, value: String },
}

/// Non-empty after trimming, or `MissingField`
pub fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FormError::MissingField(field))
    } else {
        Ok(trimmed)
    }
}

/// Required finite decimal number
pub fn parse_number(field: &'static str, value: &str) -> Result<f64, FormError> {
    let text = required(field, value)?;
    text.parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| FormError::InvalidNumber {
            field,
            value: text.to_string(),
        })
}

/// Required whole number
pub fn parse_integer(field: &'static str, value: &str) -> Result<i64, FormError> {
    let text = required(field, value)?;
    text.parse::<i64>().map_err(|_| FormError::InvalidInteger {
        field,
        value: text.to_string(),
    })
}

/// How one round trip to the service ended
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<R> {
    /// Response carried a result
    Success(R),
    /// Response carried an `error` field
    Rejected(String),
    /// Service could not be reached or answered garbage
    Unreachable(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState<R> {
    loading: bool,
    result: Option<R>,
    error: Option<String>,
}

impl<R> Default for FormState<R> {
    fn default() -> Self {
        Self {
            loading: false,
            result: None,
            error: None,
        }
    }
}

impl<R> FormState<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submission accepted: enter loading and clear the previous error
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply the outcome of the round trip and return to idle
    pub fn complete(&mut self, outcome: Outcome<R>) {
        match outcome {
            Outcome::Success(result) => self.result = Some(result),
            Outcome::Rejected(message) => self.error = Some(message),
            Outcome::Unreachable(_) => self.error = Some(CONNECTION_ERROR.to_string()),
        }
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn result(&self) -> Option<&R> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_success() {
        let mut state: FormState<u32> = FormState::new();
        assert!(!state.is_loading());

        state.begin();
        assert!(state.is_loading());

        state.complete(Outcome::Success(7));
        assert!(!state.is_loading());
        assert_eq!(state.result(), Some(&7));
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_rejection_keeps_previous_result() {
        let mut state = FormState::new();
        state.begin();
        state.complete(Outcome::Success("first"));

        state.begin();
        state.complete(Outcome::Rejected("CGPA must be between 0 and 10".to_string()));

        assert_eq!(state.result(), Some(&"first"));
        assert_eq!(state.error(), Some("CGPA must be between 0 and 10"));
    }

    #[test]
    fn test_success_replaces_result_and_clears_error() {
        let mut state = FormState::new();
        state.begin();
        state.complete(Outcome::Success(1));
        state.begin();
        state.complete(Outcome::Rejected("bad".to_string()));

        state.begin();
        assert_eq!(state.error(), None);
        state.complete(Outcome::Success(2));
        assert_eq!(state.result(), Some(&2));
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_unreachable_shows_generic_message() {
        let mut state: FormState<u32> = FormState::new();
        state.begin();
        state.complete(Outcome::Unreachable("connection refused (os error 111)".to_string()));
        assert_eq!(state.error(), Some(CONNECTION_ERROR));
        assert_eq!(state.result(), None);
    }

    #[test]
    fn test_field_parsing() {
        assert_eq!(required("Amount", "  "), Err(FormError::MissingField("Amount")));
        assert_eq!(parse_number("Amount", " 12.5 "), Ok(12.5));
        assert!(matches!(
            parse_number("Amount", "12,5"),
            Err(FormError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_number("Amount", "NaN"),
            Err(FormError::InvalidNumber { .. })
        ));
        assert_eq!(parse_integer("Tenure", "240"), Ok(240));
        assert!(matches!(
            parse_integer("Tenure", "24.5"),
            Err(FormError::InvalidInteger { .. })
        ));
        assert_eq!(parse_integer("Tenure", ""), Err(FormError::MissingField("Tenure")));
    }
}
