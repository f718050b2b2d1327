//! Logger module
//!
//! Console-only logging: startup banner, per-request access lines, and
//! error/warning diagnostics. Nothing here affects response content or
//! control flow.

mod format;

pub use format::AccessLogEntry;

use crate::config::Config;
use crate::preflight;
use std::net::SocketAddr;
use std::path::Path;

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    let port = config.server.port;
    let root = Path::new(&config.server.root_dir)
        .canonicalize()
        .map_or_else(|_| config.server.root_dir.clone(), |p| p.display().to_string());

    println!("======================================");
    println!("reCAPTCHA test server started");
    println!("Listening on: http://{addr}");
    println!("Serving directory: {root}");
    println!("Main page: http://localhost:{port}/");
    println!("Test pages:");
    println!("  - v2 test:     http://localhost:{port}/recaptcha-v2-test.html");
    println!("  - v3 test:     http://localhost:{port}/recaptcha-v3-test.html");
    println!("  - status test: http://localhost:{port}/recaptcha-status-test.html");
    println!("Usage:");
    println!("  1. Open one of the URLs above in a browser");
    println!("  2. Enter your reCAPTCHA site key");
    println!("  3. Check the API server URL (default: http://localhost:8080)");
    println!("  4. Run the v2/v3 tests");
    println!("Stop the server with Ctrl+C");
    println!("======================================\n");
}

/// Report the missing required pages and how to fix the situation.
pub fn log_missing_pages(missing: &[String]) {
    eprintln!("[ERROR] The following HTML files could not be found:");
    for file in missing {
        eprintln!("   - {file}");
    }
    eprintln!("Place all {} test pages in the serving directory.", preflight::REQUIRED_PAGES.len());
}

pub fn log_port_in_use(port: u16) {
    eprintln!("[ERROR] Port {port} is already in use.");
    eprintln!("        Stop the other process or configure a different port.");
}

pub fn log_bind_error(addr: &SocketAddr, err: &std::io::Error) {
    eprintln!("[ERROR] Failed to bind {addr}: {err}");
}

pub fn log_shutdown() {
    println!("\nServer stopped.");
}

pub fn log_access(entry: &AccessLogEntry) {
    println!("{}", entry.format());
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}
