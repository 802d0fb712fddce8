//! Data models for the weather relay.
//!
//! Request/response bodies, the resolved location descriptor and the error
//! taxonomy of the weather endpoint.

pub mod api;
pub mod error;
pub mod location;

pub use api::*;
pub use error::*;
pub use location::*;
