//! Configuration structures and loading utilities.
//!
//! This module contains all configuration structures used by the relay,
//! including environment variable loading and default values.

pub mod logging;
pub mod metrics;
pub mod relay;
pub mod server;
pub mod upstream_client;

pub use logging::*;
pub use metrics::*;
pub use relay::*;
pub use server::*;

/// Serialises tests that touch process environment variables
#[cfg(test)]
pub(crate) static ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());
