//! Request orchestration for the generate and deploy calls
//!
//! One submission at a time: the orchestrator flips to Busy for the
//! duration of a call and is guaranteed back to Idle on every exit path by
//! a drop guard, success, rejection, or transport failure alike. Callers
//! watch [`is_busy`](RequestOrchestrator::is_busy) to disable the trigger.
//!
//! A reset while a request is in flight bumps the submission epoch; a
//! reply that lands under a stale epoch is discarded instead of being
//! applied to a wizard that has already moved on.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use tracing::{info, warn};

use crate::client::backend::WizardBackend;
use crate::client::errors::ClientError;
use crate::client::response::{DeploymentOutcome, GenerationOutcome, ServerReply};
use crate::wizard::{FormSnapshot, validate_deployment, validate_submission};

/// Coordinates submissions against the generation server
pub struct RequestOrchestrator {
    backend: Arc<dyn WizardBackend>,
    busy: AtomicBool,
    epoch: AtomicU64,
}

/// Clears the busy flag when dropped, whatever the exit path
struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

impl RequestOrchestrator {
    pub fn new(backend: Arc<dyn WizardBackend>) -> Self {
        Self {
            backend,
            busy: AtomicBool::new(false),
            epoch: AtomicU64::new(0),
        }
    }

    /// Whether a submission is in flight
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Invalidate in-flight submissions ("try again" while awaiting)
    pub fn reset(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
    }

    fn acquire_busy(&self) -> Result<BusyGuard<'_>, ClientError> {
        self.busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .map_err(|_| ClientError::Busy)?;
        Ok(BusyGuard { flag: &self.busy })
    }

    /// Validate and send the generation request.
    ///
    /// Client-side validation runs first and short-circuits without
    /// touching the network, enumerating every missing item in fixed
    /// order. The returned HTML is the caller's to hand to the preview
    /// surface.
    pub async fn submit_generation(
        &self,
        snapshot: &FormSnapshot,
    ) -> Result<GenerationOutcome, ClientError> {
        let validation = validate_submission(&snapshot.api_token, snapshot.terms_accepted);
        if !validation.is_valid {
            warn!(missing = ?validation.missing_items, "Generation blocked by validation");
            return Err(ClientError::Validation(validation));
        }

        let _guard = self.acquire_busy()?;
        let epoch = self.epoch.load(Ordering::SeqCst);

        info!(website_type = %snapshot.website_type, "Generating website");
        let result = self.backend.generate(snapshot).await;

        if self.epoch.load(Ordering::SeqCst) != epoch {
            info!("Discarding stale generation reply");
            return Ok(GenerationOutcome::Stale);
        }

        let reply = result?;
        let html = Self::accept(reply, ServerReply::take_html)?;
        info!(bytes = html.len(), "Website generated");
        Ok(GenerationOutcome::Generated { html })
    }

    /// Validate and send the deployment request, returning the deployed URL
    pub async fn submit_deployment(
        &self,
        token: &str,
        html: Option<&str>,
    ) -> Result<DeploymentOutcome, ClientError> {
        let validation = validate_deployment(token);
        if !validation.is_valid {
            warn!("Deployment blocked: token missing");
            return Err(ClientError::Validation(validation));
        }

        let _guard = self.acquire_busy()?;
        let epoch = self.epoch.load(Ordering::SeqCst);

        info!("Deploying website");
        let result = self.backend.deploy(token.trim(), html).await;

        if self.epoch.load(Ordering::SeqCst) != epoch {
            info!("Discarding stale deployment reply");
            return Ok(DeploymentOutcome::Stale);
        }

        let reply = result?;
        let url = Self::accept(reply, ServerReply::take_url)?;
        info!(url = %url, "Website deployed");
        Ok(DeploymentOutcome::Deployed { url })
    }

    /// Fetch the previously generated page for out-of-band preview
    pub async fn fetch_preview(&self) -> Result<String, ClientError> {
        self.backend.fetch_preview().await
    }

    /// Turn a reply into its success payload or a rejection
    fn accept(
        mut reply: ServerReply,
        payload: fn(&mut ServerReply) -> Option<String>,
    ) -> Result<String, ClientError> {
        if !reply.success {
            return Err(ClientError::Rejected {
                message: reply.failure_message(),
            });
        }
        payload(&mut reply).ok_or_else(|| ClientError::Rejected {
            message: reply.failure_message(),
        })
    }
}
