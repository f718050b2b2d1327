//! Access log format module
//!
//! One line per handled request:
//! `[08/Aug/2026 14:30:00] 127.0.0.1 "GET /index.html HTTP/1.1" 200 1234`

use chrono::{DateTime, Local};
use hyper::Version;

/// Access log entry for a single handled request
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    /// Client IP address
    pub remote_addr: String,
    /// Request timestamp
    pub time: DateTime<Local>,
    /// HTTP method (GET, OPTIONS, ...)
    pub method: String,
    /// Request URI path
    pub path: String,
    /// HTTP version label (HTTP/1.1, ...)
    pub http_version: &'static str,
    /// Response status code
    pub status: u16,
    /// Response body size in bytes
    pub body_bytes: usize,
}

impl AccessLogEntry {
    /// Create an entry stamped with the current local time.
    pub fn new(
        remote_addr: String,
        method: String,
        path: String,
        version: Version,
        status: u16,
        body_bytes: usize,
    ) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method,
            path,
            http_version: version_label(version),
            status,
            body_bytes,
        }
    }

    /// Format the entry as a single access log line.
    pub fn format(&self) -> String {
        format!(
            "[{}] {} \"{} {} {}\" {} {}",
            self.time.format("%d/%b/%Y %H:%M:%S"),
            self.remote_addr,
            self.method,
            self.path,
            self.http_version,
            self.status,
            self.body_bytes,
        )
    }
}

fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "HTTP/0.9",
        Version::HTTP_10 => "HTTP/1.0",
        Version::HTTP_2 => "HTTP/2",
        Version::HTTP_3 => "HTTP/3",
        _ => "HTTP/1.1",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_entry() -> AccessLogEntry {
        AccessLogEntry::new(
            "192.168.1.1".to_string(),
            "GET".to_string(),
            "/recaptcha-v2-test.html".to_string(),
            Version::HTTP_11,
            200,
            1234,
        )
    }

    #[test]
    fn test_format_contains_request_line() {
        let line = create_test_entry().format();
        assert!(line.contains("192.168.1.1"));
        assert!(line.contains("\"GET /recaptcha-v2-test.html HTTP/1.1\""));
        assert!(line.ends_with("200 1234"));
    }

    #[test]
    fn test_format_starts_with_bracketed_timestamp() {
        let line = create_test_entry().format();
        assert!(line.starts_with('['));
        // [dd/Mon/yyyy HH:MM:SS] is 22 characters
        assert_eq!(line.chars().nth(21), Some(']'));
    }

    #[test]
    fn test_version_labels() {
        assert_eq!(version_label(Version::HTTP_10), "HTTP/1.0");
        assert_eq!(version_label(Version::HTTP_11), "HTTP/1.1");
        assert_eq!(version_label(Version::HTTP_2), "HTTP/2");
    }
}
