/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/

//! Error types for request validation, dispatch and response handling.

use reqwest::StatusCode;
use std::fmt;

/// Result alias used across the crate
pub type TradeItResult<T> = Result<T, AppError>;

/// Field-level problem found inside a single order leg
#[derive(Debug, Clone, PartialEq)]
pub enum LegError {
    /// The instrument identifier (`pair`) is empty
    MissingInstrument,
    /// The amount is zero, negative or not a finite number
    NonPositiveQuantity(f64),
    /// A limit or stop leg has no `rate`
    MissingPrice,
    /// A market leg carries a `rate`
    UnexpectedPrice(f64),
    /// The `rate` is zero, negative or not a finite number
    InvalidPrice(f64),
    /// An enumerated leg field holds a value outside its domain
    InvalidEnumValue {
        /// Wire name of the field
        field: &'static str,
        /// The rejected value
        value: String,
        /// Values accepted by the broker
        allowed: &'static [&'static str],
    },
}

impl fmt::Display for LegError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LegError::MissingInstrument => write!(f, "pair is required"),
            LegError::NonPositiveQuantity(amount) => {
                write!(f, "amount must be greater than zero, got {amount}")
            }
            LegError::MissingPrice => write!(f, "rate is required for limit and stop legs"),
            LegError::UnexpectedPrice(rate) => {
                write!(f, "rate must not be set for market legs, got {rate}")
            }
            LegError::InvalidPrice(rate) => {
                write!(f, "rate must be greater than zero, got {rate}")
            }
            LegError::InvalidEnumValue {
                field,
                value,
                allowed,
            } => write!(
                f,
                "{field} has invalid value '{value}' (expected one of: {})",
                allowed.join(", ")
            ),
        }
    }
}

/// A single violated field constraint on a request
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A required field is absent or empty
    MissingRequiredField {
        /// Wire name of the field
        field: &'static str,
    },
    /// An enumerated field holds a value outside its domain
    InvalidEnumValue {
        /// Wire name of the field
        field: &'static str,
        /// The rejected value
        value: String,
        /// Values accepted by the broker
        allowed: &'static [&'static str],
    },
    /// The requested page is lower than 1
    InvalidPage(i32),
    /// An order was built without any legs
    EmptyOrderLegs,
    /// One leg failed its own checks; `errors` lists every failure of that leg
    InvalidLeg {
        /// Zero-based position of the leg in `orderLegs`
        index: usize,
        /// Every failure found on the leg
        errors: Vec<LegError>,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingRequiredField { field } => {
                write!(f, "missing required field: {field}")
            }
            ValidationError::InvalidEnumValue {
                field,
                value,
                allowed,
            } => write!(
                f,
                "invalid value '{value}' for {field} (expected one of: {})",
                allowed.join(", ")
            ),
            ValidationError::InvalidPage(page) => {
                write!(f, "invalid page {page}: pages start at 1")
            }
            ValidationError::EmptyOrderLegs => write!(f, "order must contain at least one leg"),
            ValidationError::InvalidLeg { index, errors } => {
                let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
                write!(f, "invalid order leg {index}: {}", details.join(", "))
            }
        }
    }
}

/// Every violation found by one `validate()` pass
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Creates an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a violation
    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    /// Returns `true` when no violation was recorded
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of recorded violations
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the recorded violations in detection order
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    /// Returns `true` if any recorded violation satisfies `predicate`
    pub fn contains(&self, predicate: impl Fn(&ValidationError) -> bool) -> bool {
        self.0.iter().any(predicate)
    }

    /// Turns the collection into `Ok(())` when empty, or `Err(self)` otherwise
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self(errors)
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// The request failed one or more field constraints
    Validation(ValidationErrors),
    /// `to_payload` was called on a request that has not passed `validate`
    NotValidated,
    /// The gateway answered with an `ERROR` status
    Broker {
        /// Broker error code, when provided
        code: Option<i64>,
        /// Short human readable message
        short_message: String,
        /// Detailed messages
        long_messages: Vec<String>,
    },
    /// The gateway rejected the session
    Unauthorized,
    /// The gateway returned an unexpected HTTP status
    Unexpected(StatusCode),
    /// Caller supplied an unusable argument
    InvalidInput(String),
    /// A response body did not match the expected shape
    Deserialization(String),
    /// JSON encoding or decoding failed
    Json(serde_json::Error),
    /// HTTP layer failure
    Network(reqwest::Error),
    /// I/O failure
    Io(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(errors) => write!(f, "validation failed: {errors}"),
            AppError::NotValidated => write!(f, "request serialized before successful validation"),
            AppError::Broker {
                code,
                short_message,
                long_messages,
            } => {
                write!(f, "broker error")?;
                if let Some(code) = code {
                    write!(f, " {code}")?;
                }
                write!(f, ": {short_message}")?;
                if !long_messages.is_empty() {
                    write!(f, " ({})", long_messages.join(" "))?;
                }
                Ok(())
            }
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::Unexpected(status) => write!(f, "unexpected http status: {status}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Validation(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Network(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(errors)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}
