//! CORS decoration module
//!
//! The test pages are loaded from this server but call the API server on a
//! different origin, so every response carries a permissive CORS header set.
//! Decoration is applied to the finished response at a single point in the
//! handler rather than inside each builder.

use hyper::header::HeaderValue;
use hyper::Response;

const ALLOW_ORIGIN: &str = "*";
const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
const ALLOW_HEADERS: &str = "Content-Type";

/// Insert the CORS header triple into a finished response.
///
/// Applied to every response the server produces, error responses included,
/// so browser pages can always read the outcome of a cross-origin call.
pub fn decorate<B>(response: &mut Response<B>) {
    let headers = response.headers_mut();
    headers.insert(
        "Access-Control-Allow-Origin",
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    headers.insert(
        "Access-Control-Allow-Methods",
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        "Access-Control-Allow-Headers",
        HeaderValue::from_static(ALLOW_HEADERS),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::Full;
    use hyper::body::Bytes;

    #[test]
    fn test_decorate_adds_all_three_headers() {
        let mut response = Response::new(Full::new(Bytes::from("ok")));
        decorate(&mut response);

        let headers = response.headers();
        assert_eq!(headers["Access-Control-Allow-Origin"], "*");
        assert_eq!(headers["Access-Control-Allow-Methods"], "GET, POST, OPTIONS");
        assert_eq!(headers["Access-Control-Allow-Headers"], "Content-Type");
    }

    #[test]
    fn test_decorate_overwrites_existing_values() {
        let mut response = Response::builder()
            .header("Access-Control-Allow-Origin", "https://example.com")
            .body(Full::new(Bytes::new()))
            .unwrap();
        decorate(&mut response);

        assert_eq!(response.headers()["Access-Control-Allow-Origin"], "*");
    }
}
