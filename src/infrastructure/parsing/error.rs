//! Parsing error types

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ParsingError {
    #[error("Invalid CSS selector: {selector} - {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("Invalid pattern: {pattern} - {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl ParsingError {
    /// Create an invalid selector error
    pub fn invalid_selector(selector: &str, reason: impl ToString) -> Self {
        Self::InvalidSelector {
            selector: selector.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an invalid pattern error
    pub fn invalid_pattern(pattern: &str, reason: impl ToString) -> Self {
        Self::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type ParsingResult<T> = Result<T, ParsingError>;
