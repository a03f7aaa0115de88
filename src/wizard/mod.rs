//! Headless wizard engine
//!
//! Step tracking, selections, field validation, and snapshot assembly for
//! the five-step website form. Nothing in this module touches the network;
//! the [`client`](crate::client) layer consumes the snapshots built here.

pub mod language;
pub mod photo;
pub mod selection;
pub mod snapshot;
pub mod step;
pub mod styles;
pub mod validation;

pub use language::{ContentLanguage, detect_language};
pub use photo::{MAX_PHOTO_BYTES, PhotoError, ProfilePhoto};
pub use selection::{SelectionKind, SelectionRegistry};
pub use snapshot::{ApiToken, FormSnapshot, WizardForm};
pub use step::{StepController, StepPhase, WizardStep};
pub use styles::{ColorPalette, StyleProfile, StyleTemplate, UnknownStyle};
pub use validation::{
    BoundsProfile, ContentBounds, LengthZone, ValidationResult, is_terms_accepted, is_valid_token,
    is_valid_content_length, length_zone, validate_deployment, validate_submission,
};

/// The whole client-side wizard state: step position, selections, and the
/// editable form fields.
#[derive(Debug, Clone, Default)]
pub struct Wizard {
    pub steps: StepController,
    pub selections: SelectionRegistry,
    pub form: WizardForm,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the website type choice
    pub fn select_website_type(&mut self, value: &str) {
        self.selections.select(SelectionKind::WebsiteType, value);
    }

    /// Record the style choice and auto-fill the description field when the
    /// key is in the catalog. An unknown key keeps the previous description.
    pub fn select_style(&mut self, value: &str) -> Option<StyleProfile> {
        let profile = self.selections.select(SelectionKind::StyleTemplate, value);
        if let Some(profile) = &profile {
            self.form.style_description = profile.description.to_string();
        }
        profile
    }

    /// Pick a style uniformly at random, select it, and auto-fill its
    /// description. Returns the choice so the host can scroll it into view.
    pub fn random_style(&mut self) -> StyleTemplate {
        let style = self.selections.random_style();
        self.form.style_description = style.profile().description.to_string();
        style
    }

    /// Capture the current state for submission
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot::build(&self.selections, &self.form)
    }

    /// "Try again": back to step 1 with selections and form cleared.
    /// The preview surface is owned by the session and cleared alongside.
    pub fn reset(&mut self) {
        self.steps.reset();
        self.selections.clear();
        self.form.clear();
    }
}
