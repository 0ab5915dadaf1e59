use thiserror::Error;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Empty not allowed")]
    Empty,
    #[error("Minimum length not met. {min} required but found {actual}")]
    MinNotMet { min: usize, actual: usize },
    #[error("Maximum length exceeded. {max} allowed but found {actual}")]
    MaxExceeded { max: usize, actual: usize },
    #[error("Invalid format: {0}")]
    InvalidFormat(&'static str),
}

/// Raised for every response whose status code is not a success.
///
/// Displays as the message alone so it can be shown to the user unchanged
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

impl ApiError {
    pub fn new<S: Into<String>>(status: u16, message: S) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Returns `true` if the server rejected the credentials (expired or
    /// invalid token). Handled the same as any other failure
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }
}

#[derive(Debug, Error)]
#[error("The user has not logged in")]
pub struct NotLoggedInError;

#[derive(Debug, Error)]
#[error("No organization is selected")]
pub struct NoOrganizationSelectedError;
