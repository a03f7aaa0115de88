//! HTTP transport to the generation server
//!
//! [`WizardBackend`] is the seam between the orchestrator and the wire; the
//! reqwest implementation speaks the multipart + JSON-envelope contract.
//! Tests mock the trait or run against a wiremock server.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use tracing::debug;
use url::Url;

use crate::client::errors::ClientError;
use crate::client::response::ServerReply;
use crate::wizard::FormSnapshot;

/// Request timeout for all wizard calls
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Network operations the orchestrator depends on
#[async_trait]
pub trait WizardBackend: Send + Sync {
    /// POST the generation form to `/generate`
    async fn generate(&self, snapshot: &FormSnapshot) -> Result<ServerReply, ClientError>;

    /// POST the deployment form to `/deploy`
    async fn deploy(&self, token: &str, html: Option<&str>) -> Result<ServerReply, ClientError>;

    /// GET the previously generated page from `/preview`
    async fn fetch_preview(&self) -> Result<String, ClientError>;
}

/// reqwest-backed implementation of [`WizardBackend`]
pub struct HttpWizardBackend {
    client: Client,
    base_url: Url,
}

impl HttpWizardBackend {
    pub fn new(base_url: Url) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, base_url }
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::Transport(format!("Invalid endpoint URL {path}: {e}")))
    }

    /// Read the JSON envelope, folding HTTP-level failure into it.
    ///
    /// A non-2xx status always reads as failure, whatever the body claims;
    /// a body that is not the envelope at all is a transport error.
    async fn read_reply(response: reqwest::Response) -> Result<ServerReply, ClientError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Transport(format!("Failed to read response body: {e}")))?;

        let mut reply: ServerReply = serde_json::from_str(&body).map_err(|_| {
            ClientError::Transport(format!("Non-JSON response (HTTP {status})"))
        })?;

        if !status.is_success() {
            reply.success = false;
            if reply.error.is_none() && reply.message.is_none() {
                reply.message = Some(format!("Server error (HTTP {status})"));
            }
        }
        Ok(reply)
    }
}

#[async_trait]
impl WizardBackend for HttpWizardBackend {
    async fn generate(&self, snapshot: &FormSnapshot) -> Result<ServerReply, ClientError> {
        let mut form = Form::new()
            .text("website_type", snapshot.website_type.clone())
            .text("content", snapshot.content.clone())
            .text("style", snapshot.style.clone())
            .text("api_token", snapshot.api_token.clone())
            .text("terms_accepted", snapshot.terms_accepted.to_string());

        if let Some(photo) = &snapshot.profile_image {
            let part = Part::bytes(photo.bytes().to_vec())
                .file_name(photo.file_name().to_string())
                .mime_str(photo.mime())
                .map_err(|e| ClientError::Transport(format!("Invalid photo part: {e}")))?;
            form = form.part("profile_image", part);
        }

        if let Some(palette) = &snapshot.color_palette {
            form = form.text("color_palette", palette.clone());
        }

        debug!(
            website_type = %snapshot.website_type,
            has_photo = snapshot.profile_image.is_some(),
            has_palette = snapshot.color_palette.is_some(),
            "Posting generation request"
        );

        let response = self
            .client
            .post(self.endpoint("/generate")?)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ClientError::Transport(format!("Failed to reach server: {e}")))?;

        Self::read_reply(response).await
    }

    async fn deploy(&self, token: &str, html: Option<&str>) -> Result<ServerReply, ClientError> {
        let mut form = Form::new().text("vercel_token", token.to_string());
        if let Some(html) = html {
            form = form.text("html_content", html.to_string());
        }

        let response = self
            .client
            .post(self.endpoint("/deploy")?)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ClientError::Transport(format!("Failed to reach server: {e}")))?;

        Self::read_reply(response).await
    }

    async fn fetch_preview(&self) -> Result<String, ClientError> {
        let response = self
            .client
            .get(self.endpoint("/preview")?)
            .send()
            .await
            .map_err(|e| ClientError::Transport(format!("Failed to reach server: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Rejected {
                message: format!("Server error (HTTP {status})"),
            });
        }
        response
            .text()
            .await
            .map_err(|e| ClientError::Transport(format!("Failed to read response body: {e}")))
    }
}
