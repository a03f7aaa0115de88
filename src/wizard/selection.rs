//! Mutually-exclusive wizard selections
//!
//! One selection per kind (website type, style template); picking a new
//! value replaces the old one. Selecting a known style also derives its
//! [`StyleProfile`]; unknown style keys record the raw value but leave the
//! derived fields untouched.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::wizard::styles::{ColorPalette, StyleProfile, StyleTemplate};

/// The selection kinds the wizard tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionKind {
    WebsiteType,
    StyleTemplate,
}

/// Holds the wizard's single-choice selections and their derived state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionRegistry {
    website_type: Option<String>,
    style: Option<String>,
    derived: Option<StyleProfile>,
}

impl SelectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the selection for a kind, replacing any prior value.
    ///
    /// Returns the derived style profile when a known style template key
    /// was selected, `None` otherwise. Unknown style keys are recorded
    /// as-is and leave the previously derived profile unchanged.
    pub fn select(&mut self, kind: SelectionKind, value: &str) -> Option<StyleProfile> {
        match kind {
            SelectionKind::WebsiteType => {
                self.website_type = Some(value.to_string());
                None
            }
            SelectionKind::StyleTemplate => {
                self.style = Some(value.to_string());
                match value.parse::<StyleTemplate>() {
                    Ok(style) => {
                        let profile = style.profile();
                        self.derived = Some(profile);
                        Some(profile)
                    }
                    Err(_) => {
                        debug!(style = %value, "Selected style has no catalog entry");
                        None
                    }
                }
            }
        }
    }

    /// Pick a style uniformly at random from the catalog and select it.
    ///
    /// Returns the chosen style so the host can bring its visual element
    /// into view; that scroll is a UI effect, not a data concern.
    pub fn random_style(&mut self) -> StyleTemplate {
        self.random_style_with(&mut rand::thread_rng())
    }

    /// Random style pick with a caller-supplied RNG (deterministic tests)
    pub fn random_style_with<R: Rng>(&mut self, rng: &mut R) -> StyleTemplate {
        let style = *StyleTemplate::all()
            .choose(rng)
            .unwrap_or(&StyleTemplate::ModernMinimal);
        self.select(SelectionKind::StyleTemplate, style.key());
        style
    }

    /// The selected website type, if any
    pub fn website_type(&self) -> Option<&str> {
        self.website_type.as_deref()
    }

    /// The selected style key, if any
    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    /// Derived profile from the last known style selection
    pub fn style_profile(&self) -> Option<&StyleProfile> {
        self.derived.as_ref()
    }

    /// Palette for the current style selection, when one was derived
    pub fn palette(&self) -> Option<&ColorPalette> {
        self.derived.as_ref().map(|profile| &profile.palette)
    }

    /// Whether the profile-photo capture section is visible.
    ///
    /// Pure function of the websiteType selection: visible exactly when the
    /// value equals `"cv"` case-insensitively. Re-evaluated on every
    /// selection change.
    pub fn shows_photo_section(&self) -> bool {
        self.website_type
            .as_deref()
            .is_some_and(|value| value.eq_ignore_ascii_case("cv"))
    }

    /// Drop both selections and the derived profile
    pub fn clear(&mut self) {
        self.website_type = None;
        self.style = None;
        self.derived = None;
    }
}
