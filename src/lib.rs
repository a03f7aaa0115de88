//! WebWizard client library
//!
//! The client-side half of the WebWizard website generator: a headless
//! five-step wizard (type, content, style, credentials, preview), field
//! validation, snapshot assembly, and the orchestration of the remote
//! generate/deploy/preview calls.
//!
//! The [`wizard`] module is pure state and validation; [`client`] owns the
//! network and the preview surface; [`application`] wires both into the
//! flows the CLI runs.
#![deny(unsafe_code)]

pub mod application;
pub mod client;
pub mod core;
pub mod wizard;

pub use crate::core::{Error, Result, Settings};
