//! Custom middleware implementations for the API.
//!
//! Request IDs with request logging, HTTP metrics, and the cross-origin policy.

pub mod cors;
pub mod metrics;
pub mod request_id;

pub use cors::*;
pub use metrics::*;
pub use request_id::*;
