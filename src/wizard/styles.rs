//! Style template catalog
//!
//! Every selectable style maps to a fixed profile: the auto-filled
//! description shown in the style step and the color palette forwarded to
//! the generation endpoint. The catalog is a closed enum so adding a style
//! is a single-point change.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Color palette derived from a style selection.
///
/// Serialized as a JSON object when attached to the generation payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorPalette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub background: &'static str,
    pub text: &'static str,
    pub accent: &'static str,
}

/// Derived state produced by selecting a known style template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleProfile {
    /// Auto-filled style description
    pub description: &'static str,
    /// Palette sent alongside the generation request
    pub palette: ColorPalette,
}

/// The selectable style templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleTemplate {
    ModernMinimal,
    BoldCreative,
    ElegantProfessional,
    TechStartup,
    ArtisticPortfolio,
    CorporateClean,
}

impl StyleTemplate {
    /// The kebab-case key used in selections and on the wire
    pub fn key(&self) -> &'static str {
        match self {
            StyleTemplate::ModernMinimal => "modern-minimal",
            StyleTemplate::BoldCreative => "bold-creative",
            StyleTemplate::ElegantProfessional => "elegant-professional",
            StyleTemplate::TechStartup => "tech-startup",
            StyleTemplate::ArtisticPortfolio => "artistic-portfolio",
            StyleTemplate::CorporateClean => "corporate-clean",
        }
    }

    /// All known styles, in presentation order
    pub fn all() -> &'static [StyleTemplate] {
        &[
            StyleTemplate::ModernMinimal,
            StyleTemplate::BoldCreative,
            StyleTemplate::ElegantProfessional,
            StyleTemplate::TechStartup,
            StyleTemplate::ArtisticPortfolio,
            StyleTemplate::CorporateClean,
        ]
    }

    /// The fixed profile (description + palette) for this style
    pub fn profile(&self) -> StyleProfile {
        match self {
            StyleTemplate::ModernMinimal => StyleProfile {
                description: "Clean, minimalist design with ample whitespace and focused \
                              content presentation.",
                palette: ColorPalette {
                    primary: "#3498db",
                    secondary: "#ecf0f1",
                    background: "#ffffff",
                    text: "#2c3e50",
                    accent: "#bdc3c7",
                },
            },
            StyleTemplate::BoldCreative => StyleProfile {
                description: "Vibrant colors, dynamic layouts, and creative elements for a \
                              strong visual impact.",
                palette: ColorPalette {
                    primary: "#e74c3c",
                    secondary: "#f39c12",
                    background: "#f9f9f9",
                    text: "#34495e",
                    accent: "#9b59b6",
                },
            },
            StyleTemplate::ElegantProfessional => StyleProfile {
                description: "Sophisticated and refined design with premium feel for \
                              professional presence.",
                palette: ColorPalette {
                    primary: "#2c3e50",
                    secondary: "#7f8c8d",
                    background: "#f5f5f5",
                    text: "#2c3e50",
                    accent: "#d4af37",
                },
            },
            StyleTemplate::TechStartup => StyleProfile {
                description: "Modern, cutting-edge design with tech-focused elements and \
                              innovative layout.",
                palette: ColorPalette {
                    primary: "#1abc9c",
                    secondary: "#3498db",
                    background: "#ecf0f1",
                    text: "#2c3e50",
                    accent: "#9b59b6",
                },
            },
            StyleTemplate::ArtisticPortfolio => StyleProfile {
                description: "Creative, gallery-style layout showcasing visual work with \
                              artistic flair.",
                palette: ColorPalette {
                    primary: "#9b59b6",
                    secondary: "#3498db",
                    background: "#ffffff",
                    text: "#34495e",
                    accent: "#e74c3c",
                },
            },
            StyleTemplate::CorporateClean => StyleProfile {
                description: "Professional, structured design with clear hierarchy ideal \
                              for business use.",
                palette: ColorPalette {
                    primary: "#34495e",
                    secondary: "#2980b9",
                    background: "#ecf0f1",
                    text: "#2c3e50",
                    accent: "#7f8c8d",
                },
            },
        }
    }
}

impl fmt::Display for StyleTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for StyleTemplate {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "modern-minimal" => Ok(StyleTemplate::ModernMinimal),
            "bold-creative" => Ok(StyleTemplate::BoldCreative),
            "elegant-professional" => Ok(StyleTemplate::ElegantProfessional),
            "tech-startup" => Ok(StyleTemplate::TechStartup),
            "artistic-portfolio" => Ok(StyleTemplate::ArtisticPortfolio),
            "corporate-clean" => Ok(StyleTemplate::CorporateClean),
            _ => Err(UnknownStyle(s.to_string())),
        }
    }
}

/// Raised when a style key is not part of the catalog
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown style template: {0}")]
pub struct UnknownStyle(pub String);
