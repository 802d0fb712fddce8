//! Service layer.
//!
//! The relay itself, the upstream HTTP client it drives, and the Prometheus
//! registry shared by the whole process.

pub mod metrics;
pub mod relay;
pub mod upstream_client;

pub use metrics::*;
pub use relay::*;
pub use upstream_client::*;
