//! Form state and the submission snapshot
//!
//! [`WizardForm`] holds the free-text fields the user fills in;
//! [`FormSnapshot`] is the read-only aggregate captured at submission time
//! and handed to the network layer. Snapshots are built fresh on every
//! attempt and never persisted.

use std::fmt;

use zeroize::Zeroize;

use crate::wizard::photo::ProfilePhoto;
use crate::wizard::selection::SelectionRegistry;

/// OpenRouter API token with memory clearing on drop
#[derive(Clone, Default)]
pub struct ApiToken {
    value: String,
}

impl ApiToken {
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Get the token value (limited access)
    pub fn expose_secret(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiToken").field("value", &"***").finish()
    }
}

impl From<&str> for ApiToken {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ApiToken {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl Zeroize for ApiToken {
    fn zeroize(&mut self) {
        self.value.zeroize();
    }
}

impl Drop for ApiToken {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

/// The user-entered form fields
#[derive(Debug, Clone, Default)]
pub struct WizardForm {
    /// Content text entered in step 2
    pub content: String,
    /// Style description, auto-filled on style selection and editable
    pub style_description: String,
    /// OpenRouter API token from step 4
    pub api_token: ApiToken,
    /// Terms checkbox state
    pub terms_accepted: bool,
    /// Captured profile photo, only meaningful for CV websites
    pub photo: Option<ProfilePhoto>,
}

impl WizardForm {
    /// Reset every field to its initial state
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Read-only aggregate of all field values at submission time
#[derive(Debug, Clone)]
pub struct FormSnapshot {
    pub website_type: String,
    pub content: String,
    /// Style key, suffixed with `": <description>"` when one exists
    pub style: String,
    pub api_token: String,
    pub terms_accepted: bool,
    /// Present only for CV websites with a captured photo
    pub profile_image: Option<ProfilePhoto>,
    /// Serialized palette, present only when a style derived one
    pub color_palette: Option<String>,
}

impl FormSnapshot {
    /// Capture the current wizard state.
    ///
    /// Optional fields are simply omitted when their preconditions do not
    /// hold; building never fails.
    pub fn build(selections: &SelectionRegistry, form: &WizardForm) -> FormSnapshot {
        let website_type = selections.website_type().unwrap_or_default().to_string();

        let style_key = selections.style().unwrap_or_default();
        let style = if form.style_description.is_empty() {
            style_key.to_string()
        } else {
            format!("{}: {}", style_key, form.style_description)
        };

        let profile_image = if website_type.eq_ignore_ascii_case("cv") {
            form.photo.clone()
        } else {
            None
        };

        let color_palette = selections
            .palette()
            .and_then(|palette| serde_json::to_string(palette).ok());

        FormSnapshot {
            website_type,
            content: form.content.clone(),
            style,
            api_token: form.api_token.expose_secret().to_string(),
            terms_accepted: form.terms_accepted,
            profile_image,
            color_palette,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::selection::SelectionKind;

    fn filled_form() -> WizardForm {
        WizardForm {
            content: "A long enough piece of content".to_string(),
            style_description: String::new(),
            api_token: ApiToken::new("abcdefghij"),
            terms_accepted: true,
            photo: None,
        }
    }

    #[test]
    fn test_style_joined_with_description() {
        let mut selections = SelectionRegistry::new();
        let mut form = filled_form();

        selections.select(SelectionKind::StyleTemplate, "tech-startup");
        let snapshot = FormSnapshot::build(&selections, &form);
        assert_eq!(snapshot.style, "tech-startup");

        form.style_description = "with neon highlights".to_string();
        let snapshot = FormSnapshot::build(&selections, &form);
        assert_eq!(snapshot.style, "tech-startup: with neon highlights");
    }

    #[test]
    fn test_photo_only_for_cv() {
        let mut selections = SelectionRegistry::new();
        let mut form = filled_form();
        form.photo = Some(ProfilePhoto::from_bytes("me.png", vec![1, 2, 3]).unwrap());

        selections.select(SelectionKind::WebsiteType, "blog");
        let snapshot = FormSnapshot::build(&selections, &form);
        assert!(snapshot.profile_image.is_none());

        selections.select(SelectionKind::WebsiteType, "CV");
        let snapshot = FormSnapshot::build(&selections, &form);
        assert!(snapshot.profile_image.is_some());
    }

    #[test]
    fn test_no_photo_for_cv_without_capture() {
        let mut selections = SelectionRegistry::new();
        selections.select(SelectionKind::WebsiteType, "cv");
        let snapshot = FormSnapshot::build(&selections, &filled_form());
        assert!(snapshot.profile_image.is_none());
    }

    #[test]
    fn test_palette_only_when_derived() {
        let mut selections = SelectionRegistry::new();
        let snapshot = FormSnapshot::build(&selections, &filled_form());
        assert!(snapshot.color_palette.is_none());

        selections.select(SelectionKind::StyleTemplate, "tech-startup");
        let snapshot = FormSnapshot::build(&selections, &filled_form());
        let palette = snapshot.color_palette.unwrap();
        assert!(palette.contains("\"primary\":\"#1abc9c\""));
    }

    #[test]
    fn test_build_tolerates_empty_state() {
        let selections = SelectionRegistry::new();
        let snapshot = FormSnapshot::build(&selections, &WizardForm::default());
        assert_eq!(snapshot.website_type, "");
        assert_eq!(snapshot.style, "");
        assert!(!snapshot.terms_accepted);
        assert!(snapshot.profile_image.is_none());
        assert!(snapshot.color_palette.is_none());
    }

    #[test]
    fn test_api_token_debug_is_redacted() {
        let token = ApiToken::new("abcdefghij_secret");
        let debug = format!("{token:?}");
        assert!(!debug.contains("secret"));
        assert!(debug.contains("***"));
    }
}
