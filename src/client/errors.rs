//! Client-side error kinds
//!
//! Three failure families, per the form's behavior: validation problems
//! never reach the network, server rejections carry the server's text, and
//! transport problems collapse to a generic retry message. None of them is
//! fatal; the wizard stays usable and the user may retry.

use thiserror::Error;

use crate::wizard::ValidationResult;

/// Errors surfaced by the request layer
#[derive(Debug, Error)]
pub enum ClientError {
    /// Required fields missing or malformed; enumerated in fixed order and
    /// never sent to the network
    #[error("{0}")]
    Validation(ValidationResult),

    /// The server answered with `success: false` or a non-2xx status
    #[error("{message}")]
    Rejected { message: String },

    /// Network failure or a non-JSON response
    #[error("Transport error: {0}")]
    Transport(String),

    /// A submission is already in flight; the trigger should have been
    /// disabled
    #[error("A request is already in progress")]
    Busy,
}

impl ClientError {
    /// The enumerated missing items, when this is a validation error
    pub fn missing_items(&self) -> Option<&[String]> {
        match self {
            ClientError::Validation(result) => Some(&result.missing_items),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::validate_submission;

    #[test]
    fn test_validation_error_display_enumerates_items() {
        let err = ClientError::Validation(validate_submission("", false));
        let text = err.to_string();
        assert!(text.contains("OpenRouter API token"));
        assert!(text.contains("terms and conditions acceptance"));
        assert_eq!(err.missing_items().unwrap().len(), 2);
    }

    #[test]
    fn test_rejected_error_carries_server_text() {
        let err = ClientError::Rejected {
            message: "model unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "model unavailable");
        assert!(err.missing_items().is_none());
    }
}
