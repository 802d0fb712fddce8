//! Cross-origin policy.

use super::REQUEST_ID_HEADER;
use actix_cors::Cors;

/// Preflight cache lifetime announced to browsers (in seconds)
pub const CORS_MAX_AGE: usize = 3600;

/// Any origin, method and header is accepted; responses carry
/// `Access-Control-Allow-Origin: *`. The request ID header is exposed to
/// browser clients.
pub fn permissive_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allow_any_method()
        .allow_any_header()
        .expose_headers([REQUEST_ID_HEADER])
        .max_age(CORS_MAX_AGE)
}
