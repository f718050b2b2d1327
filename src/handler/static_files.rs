//! Static file serving module
//!
//! Resolves request paths against the serving root and loads the file.
//! The root is served wholesale; only the four test pages are checked for
//! at startup.

use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Path, PathBuf};
use tokio::fs;

const INDEX_FILE: &str = "index.html";

/// Serve a file from the root directory, or 404.
pub async fn serve(root_dir: &str, request_path: &str, is_head: bool) -> Response<Full<Bytes>> {
    match load(root_dir, request_path).await {
        Some((content, content_type)) => http::build_file_response(content, content_type, is_head),
        None => http::build_404_response(),
    }
}

async fn load(root_dir: &str, request_path: &str) -> Option<(Vec<u8>, &'static str)> {
    let file_path = resolve(root_dir, request_path)?;

    let content = match fs::read(&file_path).await {
        Ok(content) => content,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {e}",
                file_path.display()
            ));
            return None;
        }
    };

    let content_type = mime::content_type_for(file_path.extension().and_then(|e| e.to_str()));
    Some((content, content_type))
}

/// Resolve a request path to a regular file inside the serving root.
///
/// Directory paths (including `/`) fall back to their index page. The
/// canonical-path containment check is the traversal guard; the `..`
/// stripping beforehand only keeps the join well-formed.
fn resolve(root_dir: &str, request_path: &str) -> Option<PathBuf> {
    let clean_path = request_path.trim_start_matches('/').replace("..", "");

    let mut file_path = Path::new(root_dir).join(&clean_path);
    if clean_path.is_empty() || file_path.is_dir() {
        file_path = file_path.join(INDEX_FILE);
    }

    let root_canonical = match Path::new(root_dir).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!("Serving root not accessible '{root_dir}': {e}"));
            return None;
        }
    };

    // A file that fails to canonicalize does not exist: the common 404 case
    let file_canonical = file_path.canonicalize().ok()?;
    if !file_canonical.starts_with(&root_canonical) {
        logger::log_warning(&format!("Path traversal attempt blocked: {request_path}"));
        return None;
    }
    if !file_canonical.is_file() {
        return None;
    }

    Some(file_canonical)
}
