//! Wizard session: engine, orchestrator, and preview surface wired together
//!
//! The session owns the pieces the form page owned and routes outcomes
//! between them: a successful generation lands the wizard on the preview
//! step with the HTML shown on the surface; a reset clears all three.

use std::sync::Arc;

use tracing::info;

use crate::client::backend::WizardBackend;
use crate::client::errors::ClientError;
use crate::client::orchestrator::RequestOrchestrator;
use crate::client::preview::PreviewSurface;
use crate::client::response::{DeploymentOutcome, GenerationOutcome};
use crate::wizard::{Wizard, WizardStep};

/// One user's wizard run
pub struct WizardSession {
    pub wizard: Wizard,
    pub preview: PreviewSurface,
    orchestrator: RequestOrchestrator,
}

impl WizardSession {
    pub fn new(backend: Arc<dyn WizardBackend>) -> Self {
        Self {
            wizard: Wizard::new(),
            preview: PreviewSurface::new(),
            orchestrator: RequestOrchestrator::new(backend),
        }
    }

    /// Whether a submission is in flight (callers disable triggers on this)
    pub fn is_busy(&self) -> bool {
        self.orchestrator.is_busy()
    }

    /// Snapshot the form and submit it. On success the wizard moves to the
    /// preview step and the surface shows the returned page; a stale reply
    /// changes nothing.
    pub async fn run_generation(&mut self) -> Result<GenerationOutcome, ClientError> {
        let snapshot = self.wizard.snapshot();
        let outcome = self.orchestrator.submit_generation(&snapshot).await?;
        if let GenerationOutcome::Generated { html } = &outcome {
            self.preview.show(html.clone());
            self.wizard.steps.go_to(WizardStep::Preview);
        }
        Ok(outcome)
    }

    /// Deploy the given HTML (or the server's copy when `None`)
    pub async fn run_deployment(
        &mut self,
        token: &str,
        html: Option<&str>,
    ) -> Result<DeploymentOutcome, ClientError> {
        self.orchestrator.submit_deployment(token, html).await
    }

    /// Fetch the previously generated page into the surface
    pub async fn load_preview(&mut self) -> Result<(), ClientError> {
        let html = self.orchestrator.fetch_preview().await?;
        self.preview.show(html);
        Ok(())
    }

    /// "Try again": step 1, selections and form cleared, preview dropped,
    /// and any in-flight reply invalidated.
    pub fn reset(&mut self) {
        info!("Resetting wizard session");
        self.wizard.reset();
        self.preview.clear();
        self.orchestrator.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::response::ServerReply;
    use crate::wizard::{ApiToken, FormSnapshot};
    use async_trait::async_trait;

    struct FixedBackend {
        html: String,
    }

    #[async_trait]
    impl WizardBackend for FixedBackend {
        async fn generate(&self, _: &FormSnapshot) -> Result<ServerReply, ClientError> {
            Ok(ServerReply {
                success: true,
                html: Some(self.html.clone()),
                ..Default::default()
            })
        }

        async fn deploy(&self, _: &str, _: Option<&str>) -> Result<ServerReply, ClientError> {
            Ok(ServerReply {
                success: true,
                url: Some("https://site.vercel.app".to_string()),
                ..Default::default()
            })
        }

        async fn fetch_preview(&self) -> Result<String, ClientError> {
            Ok(self.html.clone())
        }
    }

    fn ready_session() -> WizardSession {
        let mut session = WizardSession::new(Arc::new(FixedBackend {
            html: "<html>site</html>".to_string(),
        }));
        session.wizard.select_website_type("blog");
        session.wizard.select_style("modern-minimal");
        session.wizard.form.content = "Content long enough for the gate.".to_string();
        session.wizard.form.api_token = ApiToken::new("abcdefghij");
        session.wizard.form.terms_accepted = true;
        session
    }

    #[tokio::test]
    async fn test_generation_lands_on_preview_step() {
        let mut session = ready_session();
        let outcome = session.run_generation().await.unwrap();
        assert!(matches!(outcome, GenerationOutcome::Generated { .. }));
        assert_eq!(session.wizard.steps.current(), WizardStep::Preview);
        assert_eq!(session.preview.html(), Some("<html>site</html>"));
        assert!(!session.is_busy());
    }

    #[tokio::test]
    async fn test_reset_clears_preview_and_selections() {
        let mut session = ready_session();
        session.run_generation().await.unwrap();

        session.reset();
        assert_eq!(session.wizard.steps.current(), WizardStep::WebsiteType);
        assert!(session.wizard.selections.website_type().is_none());
        assert!(!session.preview.has_content());
    }

    #[tokio::test]
    async fn test_load_preview_fills_surface() {
        let mut session = ready_session();
        session.load_preview().await.unwrap();
        assert_eq!(session.preview.html(), Some("<html>site</html>"));
    }
}
