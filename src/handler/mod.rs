//! Request handler module
//!
//! Dispatches each request: OPTIONS short-circuits to the CORS preflight
//! response, GET/HEAD go through static file resolution, anything else is
//! rejected. Every response leaves through the same CORS decoration and
//! access logging choke point.

pub mod static_files;

use crate::config::Config;
use crate::http::{self, cors};
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

/// Main entry point for HTTP request handling.
///
/// Generic over the request body: nothing here reads it, and tests can then
/// drive the handler with constructed requests.
pub async fn handle_request<B>(
    req: Request<B>,
    peer_addr: SocketAddr,
    config: Arc<Config>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let version = req.version();
    let is_head = method == Method::HEAD;

    let mut response = match &method {
        // CORS preflight short-circuit: success without file resolution
        &Method::OPTIONS => http::build_options_response(),
        &Method::GET | &Method::HEAD => {
            static_files::serve(&config.server.root_dir, &path, is_head).await
        }
        other => {
            logger::log_warning(&format!("Method not allowed: {other}"));
            http::build_405_response()
        }
    };

    cors::decorate(&mut response);

    if config.logging.access_log {
        logger::log_access(&AccessLogEntry::new(
            peer_addr.ip().to_string(),
            method.to_string(),
            path,
            version,
            response.status().as_u16(),
            declared_body_bytes(&response),
        ));
    }

    Ok(response)
}

/// Body size as declared by the response headers.
///
/// HEAD responses carry the full-file length with an empty body, and the log
/// reports the declared length, matching what a GET would have transferred.
fn declared_body_bytes<B>(response: &Response<B>) -> usize {
    response
        .headers()
        .get(hyper::header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LoggingConfig, ServerConfig};
    use http_body_util::{BodyExt, Empty};
    use std::fs;

    fn test_config(root_dir: &str) -> Arc<Config> {
        Arc::new(Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
                root_dir: root_dir.to_string(),
            },
            logging: LoggingConfig { access_log: false },
        })
    }

    fn request(method: Method, path: &str) -> Request<Empty<Bytes>> {
        Request::builder()
            .method(method)
            .uri(path)
            .body(Empty::new())
            .unwrap()
    }

    fn peer() -> SocketAddr {
        "127.0.0.1:54321".parse().unwrap()
    }

    fn assert_cors_headers<B>(response: &Response<B>) {
        let headers = response.headers();
        assert_eq!(headers["Access-Control-Allow-Origin"], "*");
        assert_eq!(headers["Access-Control-Allow-Methods"], "GET, POST, OPTIONS");
        assert_eq!(headers["Access-Control-Allow-Headers"], "Content-Type");
    }

    async fn body_of(response: Response<Full<Bytes>>) -> Bytes {
        response.into_body().collect().await.unwrap().to_bytes()
    }

    #[tokio::test]
    async fn test_options_any_path_is_empty_200_with_cors() {
        let response = handle_request(request(Method::OPTIONS, "/anything"), peer(), test_config("."))
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        assert_cors_headers(&response);
        assert!(body_of(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_get_existing_file_carries_cors_headers() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<h1>hi</h1>").unwrap();

        let config = test_config(dir.path().to_str().unwrap());
        let response = handle_request(request(Method::GET, "/index.html"), peer(), config)
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(response.headers()["Content-Type"], "text/html; charset=utf-8");
        assert_cors_headers(&response);
        assert_eq!(body_of(response).await, "<h1>hi</h1>");
    }

    #[tokio::test]
    async fn test_missing_file_is_404_with_cors() {
        let dir = tempfile::tempdir().unwrap();

        let config = test_config(dir.path().to_str().unwrap());
        let response = handle_request(request(Method::GET, "/no-such-page.html"), peer(), config)
            .await
            .unwrap();

        assert_eq!(response.status(), 404);
        assert_cors_headers(&response);
    }

    #[tokio::test]
    async fn test_head_has_empty_body_and_full_length() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "0123456789").unwrap();

        let config = test_config(dir.path().to_str().unwrap());
        let response = handle_request(request(Method::HEAD, "/index.html"), peer(), config)
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(response.headers()["Content-Length"], "10");
        assert!(body_of(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_post_is_rejected_with_cors() {
        let response = handle_request(request(Method::POST, "/index.html"), peer(), test_config("."))
            .await
            .unwrap();

        assert_eq!(response.status(), 405);
        assert_eq!(response.headers()["Allow"], "GET, HEAD, OPTIONS");
        assert_cors_headers(&response);
    }
}
