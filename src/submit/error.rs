//! Error types for form submissions

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Result type alias for submission operations.
pub type SubmitResult<T> = Result<T, SubmitError>;

/// A single rejected field
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

/// Every rejected field of a submission, in form order
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("{} invalid field(s)", .errors.len())]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: &str) {
        self.errors.push(ValidationError {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// First message per field
    pub fn fields(&self) -> IndexMap<&str, &str> {
        let mut fields = IndexMap::new();
        for error in &self.errors {
            fields
                .entry(error.field.as_str())
                .or_insert(error.message.as_str());
        }
        fields
    }

    /// `Ok(())` when nothing was rejected
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields().serialize(serializer)
    }
}

/// Errors that can occur while delivering a submission.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// Submission failed field validation
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// Writing to the transport failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The transport refused the submission
    #[error("Submission rejected: {0}")]
    Rejected(String),
}
