//! Request objects for the application layer

use std::path::PathBuf;

use crate::application::errors::ValidationError;
use crate::wizard::{ContentBounds, is_valid_content_length};

/// Everything needed to run the wizard end to end and generate a site
#[derive(Debug, Clone)]
pub struct GenerateWebsiteRequest {
    /// Website type key (`cv`, `blog`, `portfolio`, ...)
    pub website_type: String,
    /// Content text for step 2
    pub content: String,
    /// Style template key; `None` with `random_style` picks one
    pub style: Option<String>,
    /// Pick the style uniformly at random from the catalog
    pub random_style: bool,
    /// Overrides the auto-filled style description
    pub style_description: Option<String>,
    /// OpenRouter API token
    pub api_token: String,
    /// Terms and conditions acceptance
    pub accept_terms: bool,
    /// Profile photo, only used for CV websites
    pub photo_path: Option<PathBuf>,
    /// Where to save the generated HTML
    pub output_path: Option<PathBuf>,
}

impl GenerateWebsiteRequest {
    /// Step-level gating that must pass before the wizard can reach the
    /// final step. Token and terms are deliberately not checked here:
    /// the submission-time composite check owns those, including the
    /// fixed enumeration order.
    pub fn validate(&self, bounds: ContentBounds) -> Result<(), ValidationError> {
        if self.website_type.trim().is_empty() {
            return Err(ValidationError::MissingField("website type".to_string()));
        }

        if !is_valid_content_length(&self.content, bounds) {
            return Err(ValidationError::ContentOutOfBounds {
                length: self.content.chars().count(),
                min: bounds.min,
                max: bounds.max,
            });
        }

        match (&self.style, self.random_style) {
            (Some(_), true) => Err(ValidationError::ConflictingStyleChoice),
            (None, false) => Err(ValidationError::MissingField("style template".to_string())),
            _ => Ok(()),
        }
    }
}

/// Everything needed to deploy a generated site
#[derive(Debug, Clone)]
pub struct DeployWebsiteRequest {
    /// Vercel API token
    pub vercel_token: String,
    /// HTML to upload; when absent the server deploys its own copy
    pub html_path: Option<PathBuf>,
}
