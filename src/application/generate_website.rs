//! The end-to-end generation flow
//!
//! Walks the wizard through its five steps the way a user would: each
//! advance is gated on the relevant validator, the snapshot is built on
//! the last step, and a successful reply lands on the preview step with
//! the page staged behind a revocable handle.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::commands::GenerateWebsiteRequest;
use crate::application::errors::ApplicationError;
use crate::application::session::WizardSession;
use crate::client::backend::{HttpWizardBackend, WizardBackend};
use crate::client::response::GenerationOutcome;
use crate::core::config::Settings;
use crate::wizard::{
    ApiToken, ContentBounds, ContentLanguage, ProfilePhoto, detect_language, length_zone,
};

/// What the flow produced
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Language detected in the content
    pub language: ContentLanguage,
    /// Style key that was submitted
    pub style: String,
    /// Size of the generated page
    pub html_bytes: usize,
    /// Where the page was exported, when requested
    pub output_path: Option<PathBuf>,
}

/// Run the generation flow against the configured server
pub async fn generate_website(
    settings: &Settings,
    request: GenerateWebsiteRequest,
) -> Result<GenerationReport, ApplicationError> {
    let backend = Arc::new(HttpWizardBackend::new(settings.base_url.clone()));
    run_generation_flow(backend, settings.content_bounds.bounds(), request).await
}

/// Flow body with an injectable backend
pub async fn run_generation_flow(
    backend: Arc<dyn WizardBackend>,
    bounds: ContentBounds,
    request: GenerateWebsiteRequest,
) -> Result<GenerationReport, ApplicationError> {
    request.validate(bounds)?;

    let mut session = WizardSession::new(backend);
    let wizard = &mut session.wizard;

    // Step 1: website type
    wizard.select_website_type(&request.website_type);
    debug!(step = 1, website_type = %request.website_type, "Website type selected");
    if wizard.selections.shows_photo_section() {
        debug!("Profile photo section revealed");
    }
    wizard.steps.advance();

    // Step 2: content; the bounds gate already passed in validate()
    wizard.form.content = request.content.clone();
    let language = detect_language(&wizard.form.content);
    let zone = length_zone(wizard.form.content.chars().count(), bounds);
    info!(language = %language, zone = ?zone, "Content accepted");
    wizard.steps.advance();

    // Step 3: style template
    let style = if request.random_style {
        let style = wizard.random_style();
        info!(style = %style, "Random style selected; bringing its card into view");
        style.key().to_string()
    } else {
        // validate() guarantees the key is present; unknown keys are
        // forwarded as-is with no derived palette
        let key = request.style.clone().unwrap_or_default();
        if wizard.select_style(&key).is_none() {
            warn!(style = %key, "Style is not in the catalog; no palette will be sent");
        }
        key
    };
    if let Some(description) = &request.style_description {
        wizard.form.style_description = description.clone();
    }
    wizard.steps.advance();

    // Step 4: credentials and optional photo
    wizard.form.api_token = ApiToken::new(request.api_token.clone());
    wizard.form.terms_accepted = request.accept_terms;
    if let Some(path) = &request.photo_path {
        if wizard.selections.shows_photo_section() {
            wizard.form.photo = Some(ProfilePhoto::from_path(path).await?);
        } else {
            warn!(
                path = %path.display(),
                "Ignoring photo: the capture section only appears for CV websites"
            );
        }
    }

    // Step 5 is reached by the session on success
    let outcome = session.run_generation().await?;
    let GenerationOutcome::Generated { html } = outcome else {
        return Err(ApplicationError::Cancelled);
    };

    let preview_path = session.preview.stage()?.to_path_buf();
    info!(path = %preview_path.display(), "Preview staged");

    if let Some(output) = &request.output_path {
        session.preview.export_to(output)?;
        info!(path = %output.display(), "Generated HTML exported");
    }

    // the consumer is done with the staged copy; revoke the handle
    session.preview.release_handle();

    Ok(GenerationReport {
        language,
        style,
        html_bytes: html.len(),
        output_path: request.output_path.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::errors::ClientError;
    use crate::client::response::ServerReply;
    use crate::wizard::FormSnapshot;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records the snapshot it was handed and answers with a fixed page
    struct RecordingBackend {
        seen: Mutex<Option<FormSnapshot>>,
    }

    impl RecordingBackend {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                seen: Mutex::new(None),
            })
        }
    }

    #[async_trait]
    impl WizardBackend for RecordingBackend {
        async fn generate(&self, snapshot: &FormSnapshot) -> Result<ServerReply, ClientError> {
            *self.seen.lock().unwrap() = Some(snapshot.clone());
            Ok(ServerReply {
                success: true,
                html: Some("<html>generated</html>".to_string()),
                ..Default::default()
            })
        }

        async fn deploy(&self, _: &str, _: Option<&str>) -> Result<ServerReply, ClientError> {
            Ok(ServerReply::default())
        }

        async fn fetch_preview(&self) -> Result<String, ClientError> {
            Ok(String::new())
        }
    }

    fn request() -> GenerateWebsiteRequest {
        GenerateWebsiteRequest {
            website_type: "blog".to_string(),
            content: "Weekly posts about systems programming and coffee.".to_string(),
            style: Some("tech-startup".to_string()),
            random_style: false,
            style_description: None,
            api_token: "abcdefghij".to_string(),
            accept_terms: true,
            photo_path: None,
            output_path: None,
        }
    }

    #[tokio::test]
    async fn test_flow_submits_expected_snapshot() {
        let backend = RecordingBackend::new();
        let report = run_generation_flow(backend.clone(), ContentBounds::STANDARD, request())
            .await
            .unwrap();

        assert_eq!(report.style, "tech-startup");
        assert_eq!(report.html_bytes, "<html>generated</html>".len());
        assert_eq!(report.language, ContentLanguage::English);

        let seen = backend.seen.lock().unwrap().clone().unwrap();
        assert_eq!(seen.website_type, "blog");
        assert!(seen.style.starts_with("tech-startup: Modern"));
        assert!(seen.color_palette.is_some());
        assert!(seen.profile_image.is_none());
        assert!(seen.terms_accepted);
    }

    #[tokio::test]
    async fn test_flow_rejects_out_of_bounds_content() {
        let backend = RecordingBackend::new();
        let mut req = request();
        req.content = "too short".to_string();

        let err = run_generation_flow(backend.clone(), ContentBounds::STANDARD, req)
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Validation(_)));
        assert!(backend.seen.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_flow_exports_when_asked() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("site.html");
        let mut req = request();
        req.output_path = Some(out.clone());

        let report = run_generation_flow(RecordingBackend::new(), ContentBounds::STANDARD, req)
            .await
            .unwrap();
        assert_eq!(report.output_path.as_deref(), Some(out.as_path()));
        assert_eq!(
            std::fs::read_to_string(&out).unwrap(),
            "<html>generated</html>"
        );
    }

    #[tokio::test]
    async fn test_flow_random_style_comes_from_catalog() {
        let backend = RecordingBackend::new();
        let mut req = request();
        req.style = None;
        req.random_style = true;

        let report = run_generation_flow(backend.clone(), ContentBounds::STANDARD, req)
            .await
            .unwrap();
        let seen = backend.seen.lock().unwrap().clone().unwrap();
        assert!(seen.style.starts_with(&report.style));
        assert!(seen.color_palette.is_some());
    }

    #[tokio::test]
    async fn test_flow_ignores_photo_for_non_cv() {
        let dir = tempfile::tempdir().unwrap();
        let photo = dir.path().join("me.png");
        std::fs::write(&photo, b"fake image bytes").unwrap();

        let backend = RecordingBackend::new();
        let mut req = request();
        req.photo_path = Some(photo);

        run_generation_flow(backend.clone(), ContentBounds::STANDARD, req)
            .await
            .unwrap();
        let seen = backend.seen.lock().unwrap().clone().unwrap();
        assert!(seen.profile_image.is_none());
    }

    #[tokio::test]
    async fn test_flow_attaches_photo_for_cv() {
        let dir = tempfile::tempdir().unwrap();
        let photo = dir.path().join("me.png");
        std::fs::write(&photo, b"fake image bytes").unwrap();

        let backend = RecordingBackend::new();
        let mut req = request();
        req.website_type = "cv".to_string();
        req.photo_path = Some(photo);

        run_generation_flow(backend.clone(), ContentBounds::STANDARD, req)
            .await
            .unwrap();
        let seen = backend.seen.lock().unwrap().clone().unwrap();
        let image = seen.profile_image.unwrap();
        assert_eq!(image.mime(), "image/png");
        assert_eq!(image.bytes(), b"fake image bytes");
    }
}
