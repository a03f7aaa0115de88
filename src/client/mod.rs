//! Network layer: backend transport, request orchestration, and the
//! preview surface for generated pages.

pub mod backend;
pub mod errors;
pub mod orchestrator;
pub mod preview;
pub mod response;

pub use backend::{HttpWizardBackend, WizardBackend};
pub use errors::ClientError;
pub use orchestrator::RequestOrchestrator;
pub use preview::PreviewSurface;
pub use response::{DeploymentOutcome, GenerationOutcome, ServerReply};
