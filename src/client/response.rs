//! Wire contract for the generation server
//!
//! Every endpoint answers with the same JSON envelope. Failure text may
//! arrive in either `error` or `message` depending on the server build, so
//! the client accepts both and prefers `error`.

use serde::Deserialize;

/// Fallback text when a failed reply carries no usable message
pub const GENERIC_FAILURE: &str = "An error occurred. Please try again.";

/// JSON envelope returned by `/generate` and `/deploy`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerReply {
    #[serde(default)]
    pub success: bool,
    /// Generated page markup (`/generate` success)
    #[serde(default)]
    pub html: Option<String>,
    /// Deployment URL (`/deploy` success)
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ServerReply {
    /// Human-readable failure text: `error` first, then `message`, then a
    /// generic retry line.
    pub fn failure_message(&self) -> String {
        self.error
            .clone()
            .or_else(|| self.message.clone())
            .unwrap_or_else(|| GENERIC_FAILURE.to_string())
    }

    /// Take the generation payload out of the envelope
    pub fn take_html(&mut self) -> Option<String> {
        self.html.take()
    }

    /// Take the deployment payload out of the envelope
    pub fn take_url(&mut self) -> Option<String> {
        self.url.take()
    }
}

/// Result of a completed generation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// The server produced a page; the HTML has been handed to the preview
    /// surface by the caller.
    Generated { html: String },
    /// The reply arrived after the wizard moved on and was discarded
    Stale,
}

/// Result of a completed deployment call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeploymentOutcome {
    Deployed { url: String },
    /// The reply arrived after the wizard moved on and was discarded
    Stale,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_error_field() {
        let reply: ServerReply =
            serde_json::from_str(r#"{"success": false, "error": "quota exceeded"}"#).unwrap();
        assert_eq!(reply.failure_message(), "quota exceeded");
    }

    #[test]
    fn test_accepts_message_field() {
        let reply: ServerReply =
            serde_json::from_str(r#"{"success": false, "message": "bad token"}"#).unwrap();
        assert_eq!(reply.failure_message(), "bad token");
    }

    #[test]
    fn test_error_preferred_over_message() {
        let reply: ServerReply = serde_json::from_str(
            r#"{"success": false, "error": "primary", "message": "secondary"}"#,
        )
        .unwrap();
        assert_eq!(reply.failure_message(), "primary");
    }

    #[test]
    fn test_generic_fallback() {
        let reply: ServerReply = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert_eq!(reply.failure_message(), GENERIC_FAILURE);
    }

    #[test]
    fn test_success_reply_shapes() {
        let reply: ServerReply =
            serde_json::from_str(r#"{"success": true, "html": "<html></html>"}"#).unwrap();
        assert!(reply.success);
        assert_eq!(reply.html.as_deref(), Some("<html></html>"));

        let reply: ServerReply =
            serde_json::from_str(r#"{"success": true, "url": "https://site.vercel.app"}"#).unwrap();
        assert_eq!(reply.url.as_deref(), Some("https://site.vercel.app"));
    }

    #[test]
    fn test_missing_success_field_is_failure() {
        let reply: ServerReply = serde_json::from_str("{}").unwrap();
        assert!(!reply.success);
    }
}
