//! Application layer: request objects and the flows the CLI drives
//!
//! Each flow walks the wizard the way a user walks the form, with the
//! same gates in the same order, then routes the server's answer.

pub mod commands;
pub mod deploy_website;
pub mod errors;
pub mod generate_website;
pub mod session;

pub use commands::{DeployWebsiteRequest, GenerateWebsiteRequest};
pub use deploy_website::{DeploymentReport, deploy_website, run_deployment_flow};
pub use errors::{ApplicationError, ValidationError};
pub use generate_website::{GenerationReport, generate_website, run_generation_flow};
pub use session::WizardSession;
