//! Error types shared by the daemon and the client.
//!
//! `CalcError` is the only error the calculation endpoints ever report. Its
//! `Display` output is the message sent back in `{"error": ...}`, so the
//! wording here is user-facing.

use thiserror::Error;

/// Validation and computation failures of the calculators
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("Empty request body")]
    EmptyBody,

    #[error("Invalid JSON body: {0}")]
    InvalidJson(String),

    #[error("`{0}` field is required")]
    MissingField(&'static str),

    #[error("`{0}` must be a number")]
    NotANumber(&'static str),

    #[error("`{0}` must be an integer")]
    NotAnInteger(&'static str),

    #[error("`{0}` must be a string")]
    NotAString(&'static str),

    #[error("Invalid date of birth '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Date of birth cannot be in the future")]
    DobInFuture,

    #[error("CGPA must be between 0 and 10")]
    CgpaOutOfRange,

    #[error("Amount cannot be negative")]
    NegativeAmount,

    #[error("GST rate must be between 0 and 100")]
    GstRateOutOfRange,

    #[error("Principal must be greater than 0")]
    NonPositivePrincipal,

    #[error("Interest rate cannot be negative")]
    NegativeInterestRate,

    #[error("Tenure must be greater than 0 months")]
    NonPositiveTenure,

    #[error("Result is out of range for the given values")]
    OutOfRange,
}

/// Catalog lookup errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Unknown category '{0}' (expected one of: All, Personal, Education, Business, Finance)")]
    UnknownCategory(String),
}
