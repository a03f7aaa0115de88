//! Content language heuristic
//!
//! The form echoed a detected language next to the content box. Detection
//! counts Indonesian function words with word-boundary matching; more than
//! two hits classifies the text as Indonesian, anything else falls back to
//! English.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

static INDONESIAN_WORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:yang|dan|dengan|untuk|pada|adalah|ini|dari|dalam|akan)\b")
        .expect("word list pattern must compile")
});

/// Detected content language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentLanguage {
    English,
    Indonesian,
}

impl ContentLanguage {
    /// Two-letter code used by the server
    pub fn code(&self) -> &'static str {
        match self {
            ContentLanguage::English => "en",
            ContentLanguage::Indonesian => "id",
        }
    }
}

impl fmt::Display for ContentLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentLanguage::English => write!(f, "English (EN)"),
            ContentLanguage::Indonesian => write!(f, "Indonesian (ID)"),
        }
    }
}

/// Classify content as Indonesian or English.
///
/// Counts total occurrences, not distinct words, the way the form did.
pub fn detect_language(text: &str) -> ContentLanguage {
    let hits = INDONESIAN_WORDS.find_iter(text).count();
    if hits > 2 {
        ContentLanguage::Indonesian
    } else {
        ContentLanguage::English
    }
}
