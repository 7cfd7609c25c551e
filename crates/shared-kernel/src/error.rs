// crates/shared-kernel/src/error.rs
use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum DeliveryQueryError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<DeliveryQueryError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Failed to parse {format} input: {details}")]
    Serialization { format: String, details: String },
}

pub type Result<T> = std::result::Result<T, DeliveryQueryError>;

/// Domain-layer specific errors.
///
/// Query operations themselves are total; these only surface when a caller
/// asks for up-front validation of its inputs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid paging: {field} must be at least 1, got {value}")]
    InvalidPaging { field: String, value: usize },

    #[error("Invalid page specification '{spec}': {details}")]
    InvalidPageSpec { spec: String, details: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

impl From<serde_json::Error> for DeliveryQueryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<DeliveryQueryError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| DeliveryQueryError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| DeliveryQueryError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
