//! Route label extraction.

use actix_web::HttpRequest;

/// Label used for requests that matched no registered resource
pub const UNMATCHED_ROUTE: &str = "/unmatched";

/// Route pattern of the resource that served `req`.
///
/// Unmatched paths share one label so that scanners probing random URLs do not
/// create a metric series per path.
pub fn extract_route_pattern(req: &HttpRequest) -> String {
    req.match_pattern()
        .unwrap_or_else(|| UNMATCHED_ROUTE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_unmatched_request_uses_shared_label() {
        let req = TestRequest::get().uri("/wp-login.php").to_http_request();
        assert_eq!(extract_route_pattern(&req), UNMATCHED_ROUTE);
    }
}
