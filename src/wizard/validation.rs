//! Field validators for the wizard form
//!
//! Validators are pure predicates; callers reflect validity in the UI and
//! gate step navigation. The composite submission check enumerates missing
//! items in a fixed order so the failure dialog reads the same every time.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Token pattern: at least 10 characters from `[A-Za-z0-9_-]`, anchored at
/// the start only. Trailing characters outside the set are tolerated, so
/// `"abcdefghij!!!"` is a valid token. The open end is intentional and
/// matches the served form.
static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{10,}").expect("token pattern must compile"));

/// Missing-item label for an absent API token
pub const MISSING_TOKEN: &str = "OpenRouter API token";
/// Missing-item label for a malformed API token
pub const MISSING_TOKEN_FORMAT: &str = "valid OpenRouter API token format";
/// Missing-item label for unaccepted terms
pub const MISSING_TERMS: &str = "terms and conditions acceptance";
/// Missing-item label for an absent deployment token
pub const MISSING_VERCEL_TOKEN: &str = "Vercel API token";

/// Inclusive content length bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentBounds {
    pub min: usize,
    pub max: usize,
}

impl ContentBounds {
    /// Canonical bounds profile
    pub const STANDARD: ContentBounds = ContentBounds { min: 20, max: 4000 };
    /// Legacy profile kept for callers that explicitly declare it
    pub const COMPACT: ContentBounds = ContentBounds { min: 50, max: 2500 };
}

/// Named bounds profile, selectable from settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundsProfile {
    #[default]
    Standard,
    Compact,
}

impl BoundsProfile {
    pub fn bounds(&self) -> ContentBounds {
        match self {
            BoundsProfile::Standard => ContentBounds::STANDARD,
            BoundsProfile::Compact => ContentBounds::COMPACT,
        }
    }
}

impl FromStr for BoundsProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(BoundsProfile::Standard),
            "compact" => Ok(BoundsProfile::Compact),
            other => Err(format!(
                "unknown bounds profile '{other}' (expected 'standard' or 'compact')"
            )),
        }
    }
}

impl fmt::Display for BoundsProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundsProfile::Standard => write!(f, "standard"),
            BoundsProfile::Compact => write!(f, "compact"),
        }
    }
}

/// True when the token starts with a run of 10+ characters from
/// `[A-Za-z0-9_-]`
pub fn is_valid_token(token: &str) -> bool {
    TOKEN_PATTERN.is_match(token)
}

/// True when the content length is within the inclusive bounds
pub fn is_valid_content_length(text: &str, bounds: ContentBounds) -> bool {
    let length = text.chars().count();
    bounds.min <= length && length <= bounds.max
}

/// Identity of the terms checkbox state
pub fn is_terms_accepted(checked: bool) -> bool {
    checked
}

/// Character-counter zone for content input feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthZone {
    /// Below the minimum; no signal yet
    Neutral,
    /// Within bounds
    Ok,
    /// Above 70% of the maximum
    Warning,
    /// Above 90% of the maximum
    Danger,
}

/// Zone for the current content length, matching the form's counter colors
pub fn length_zone(length: usize, bounds: ContentBounds) -> LengthZone {
    if length * 10 > bounds.max * 9 {
        LengthZone::Danger
    } else if length * 10 > bounds.max * 7 {
        LengthZone::Warning
    } else if length >= bounds.min {
        LengthZone::Ok
    } else {
        LengthZone::Neutral
    }
}

/// Outcome of a validation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Missing or invalid items, in enumeration order
    pub missing_items: Vec<String>,
}

impl ValidationResult {
    fn from_items(missing_items: Vec<String>) -> Self {
        Self {
            is_valid: missing_items.is_empty(),
            missing_items,
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid {
            write!(f, "all required fields present")
        } else {
            write!(
                f,
                "Please provide the following: {}",
                self.missing_items.join(", ")
            )
        }
    }
}

/// Composite check run before the generation request.
///
/// Enumerates problems in fixed order: token presence, token format, terms
/// acceptance. Content length is a step-2 gate and is not re-checked here.
pub fn validate_submission(token: &str, terms_accepted: bool) -> ValidationResult {
    let mut missing_items = Vec::new();

    let token = token.trim();
    if token.is_empty() {
        missing_items.push(MISSING_TOKEN.to_string());
    } else if !is_valid_token(token) {
        missing_items.push(MISSING_TOKEN_FORMAT.to_string());
    }

    if !is_terms_accepted(terms_accepted) {
        missing_items.push(MISSING_TERMS.to_string());
    }

    ValidationResult::from_items(missing_items)
}

/// Check run before the deployment request
pub fn validate_deployment(token: &str) -> ValidationResult {
    let mut missing_items = Vec::new();
    if token.trim().is_empty() {
        missing_items.push(MISSING_VERCEL_TOKEN.to_string());
    }
    ValidationResult::from_items(missing_items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_leading_run_suffices() {
        assert!(is_valid_token("abcdefghij"));
        assert!(is_valid_token("abcdefghij!!!"));
        assert!(is_valid_token("sk-or-v1-0123456789abcdef"));
        assert!(is_valid_token("ABC_def-123x"));
    }

    #[test]
    fn test_token_rejects_short_or_empty() {
        assert!(!is_valid_token(""));
        assert!(!is_valid_token("abc"));
        assert!(!is_valid_token("abcdefghi"));
        // nine qualifying characters, then a breaker
        assert!(!is_valid_token("abcdefghi!j"));
        assert!(!is_valid_token("!abcdefghij"));
    }

    #[test]
    fn test_content_length_bounds() {
        let bounds = ContentBounds::STANDARD;
        assert!(!is_valid_content_length(&"x".repeat(19), bounds));
        assert!(is_valid_content_length(&"x".repeat(20), bounds));
        assert!(is_valid_content_length(&"x".repeat(4000), bounds));
        assert!(!is_valid_content_length(&"x".repeat(4001), bounds));

        let compact = ContentBounds::COMPACT;
        assert!(!is_valid_content_length(&"x".repeat(49), compact));
        assert!(is_valid_content_length(&"x".repeat(50), compact));
        assert!(!is_valid_content_length(&"x".repeat(2501), compact));
    }

    #[test]
    fn test_length_zone_thresholds() {
        let bounds = ContentBounds::STANDARD;
        assert_eq!(length_zone(0, bounds), LengthZone::Neutral);
        assert_eq!(length_zone(19, bounds), LengthZone::Neutral);
        assert_eq!(length_zone(20, bounds), LengthZone::Ok);
        assert_eq!(length_zone(2800, bounds), LengthZone::Ok);
        assert_eq!(length_zone(2801, bounds), LengthZone::Warning);
        assert_eq!(length_zone(3600, bounds), LengthZone::Warning);
        assert_eq!(length_zone(3601, bounds), LengthZone::Danger);
        assert_eq!(length_zone(4200, bounds), LengthZone::Danger);
    }

    #[test]
    fn test_validate_submission_order() {
        let result = validate_submission("", false);
        assert!(!result.is_valid);
        assert_eq!(result.missing_items, vec![MISSING_TOKEN, MISSING_TERMS]);

        let result = validate_submission("short", false);
        assert_eq!(
            result.missing_items,
            vec![MISSING_TOKEN_FORMAT, MISSING_TERMS]
        );

        let result = validate_submission("abcdefghij", true);
        assert!(result.is_valid);
        assert!(result.missing_items.is_empty());
    }

    #[test]
    fn test_validate_submission_trims_token() {
        assert!(validate_submission("  abcdefghij  ", true).is_valid);
        assert_eq!(
            validate_submission("   ", true).missing_items,
            vec![MISSING_TOKEN]
        );
    }

    #[test]
    fn test_validate_deployment() {
        assert!(!validate_deployment("").is_valid);
        assert_eq!(
            validate_deployment(" ").missing_items,
            vec![MISSING_VERCEL_TOKEN]
        );
        assert!(validate_deployment("vercel_tok_123").is_valid);
    }

    #[test]
    fn test_bounds_profile_from_str() {
        assert_eq!(
            BoundsProfile::from_str("standard").unwrap(),
            BoundsProfile::Standard
        );
        assert_eq!(
            BoundsProfile::from_str("COMPACT").unwrap(),
            BoundsProfile::Compact
        );
        assert!(BoundsProfile::from_str("roomy").is_err());
    }
}
