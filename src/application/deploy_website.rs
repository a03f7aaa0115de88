//! The deployment flow
//!
//! Uploads a generated page (or lets the server deploy its own copy) and
//! reports the resulting URL.

use std::sync::Arc;

use tracing::info;

use crate::application::commands::DeployWebsiteRequest;
use crate::application::errors::ApplicationError;
use crate::application::session::WizardSession;
use crate::client::backend::{HttpWizardBackend, WizardBackend};
use crate::client::response::DeploymentOutcome;
use crate::core::config::Settings;

/// What the deployment produced
#[derive(Debug, Clone)]
pub struct DeploymentReport {
    /// Where the site now lives
    pub url: String,
}

/// Run the deployment flow against the configured server
pub async fn deploy_website(
    settings: &Settings,
    request: DeployWebsiteRequest,
) -> Result<DeploymentReport, ApplicationError> {
    let backend = Arc::new(HttpWizardBackend::new(settings.base_url.clone()));
    run_deployment_flow(backend, request).await
}

/// Flow body with an injectable backend
pub async fn run_deployment_flow(
    backend: Arc<dyn WizardBackend>,
    request: DeployWebsiteRequest,
) -> Result<DeploymentReport, ApplicationError> {
    let html = match &request.html_path {
        Some(path) => Some(tokio::fs::read_to_string(path).await?),
        None => None,
    };

    let mut session = WizardSession::new(backend);
    let outcome = session
        .run_deployment(&request.vercel_token, html.as_deref())
        .await?;

    match outcome {
        DeploymentOutcome::Deployed { url } => {
            info!(url = %url, "Website deployed");
            Ok(DeploymentReport { url })
        }
        DeploymentOutcome::Stale => Err(ApplicationError::Cancelled),
    }
}
