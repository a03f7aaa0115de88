//! Isolated rendering surface for generated HTML
//!
//! Generated markup is untrusted and never written into shared output
//! directly. The surface stages it behind a revocable temp-file handle,
//! the file-system analog of a blob object URL: create on stage, hand the
//! path to the consumer, revoke exactly once after the consumer has loaded
//! it. Exporting copies the markup to a caller-chosen path instead.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::core::error::{Error, Result};

/// Holds the generated page and its staged preview handle
#[derive(Debug, Default)]
pub struct PreviewSurface {
    html: Option<String>,
    handle: Option<NamedTempFile>,
}

impl PreviewSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display new content. Any previously staged handle is revoked first;
    /// the next [`stage`](Self::stage) call creates a fresh one.
    pub fn show(&mut self, html: String) {
        self.release_handle();
        self.html = Some(html);
    }

    /// The displayed markup, if any
    pub fn html(&self) -> Option<&str> {
        self.html.as_deref()
    }

    pub fn has_content(&self) -> bool {
        self.html.is_some()
    }

    /// Stage the content into a temp file and return its path.
    ///
    /// Repeated calls while a handle is live return the same path.
    pub fn stage(&mut self) -> Result<&Path> {
        let html = self
            .html
            .as_ref()
            .ok_or_else(|| Error::config("No website has been generated yet"))?;

        if self.handle.is_none() {
            let mut file = tempfile::Builder::new()
                .prefix("webwizard-preview-")
                .suffix(".html")
                .tempfile()?;
            file.write_all(html.as_bytes())?;
            file.flush()?;
            debug!(path = %file.path().display(), "Staged preview");
            self.handle = Some(file);
        }

        // handle was just populated above when absent
        match &self.handle {
            Some(file) => Ok(file.path()),
            None => Err(Error::config("Preview handle unavailable")),
        }
    }

    /// Revoke the staged handle. Safe to call again; only the first call
    /// deletes the file.
    pub fn release_handle(&mut self) {
        if let Some(handle) = self.handle.take() {
            debug!(path = %handle.path().display(), "Releasing preview handle");
            drop(handle);
        }
    }

    /// Write the markup to a persistent path (the "download HTML" action)
    pub fn export_to(&self, path: &Path) -> Result<()> {
        let html = self
            .html
            .as_ref()
            .ok_or_else(|| Error::config("No website has been generated yet"))?;
        std::fs::write(path, html)?;
        Ok(())
    }

    /// Drop the content and revoke any staged handle ("try again")
    pub fn clear(&mut self) {
        self.release_handle();
        self.html = None;
    }
}
