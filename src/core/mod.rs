//! WebWizard core library
//!
//! Crate-wide error type and client settings shared by the wizard engine
//! and the network layer.

pub mod config;
pub mod error;

pub use config::Settings;
pub use error::{Error, Result};
