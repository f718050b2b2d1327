//! Startup preflight check
//!
//! The test pages cannot be generated, so the server refuses to start when
//! any of them is absent from the serving root. Checked once at startup,
//! before the listener is bound.

use std::path::Path;

/// HTML pages that must exist in the serving root before startup.
pub const REQUIRED_PAGES: [&str; 4] = [
    "index.html",
    "recaptcha-v2-test.html",
    "recaptcha-v3-test.html",
    "recaptcha-status-test.html",
];

/// Verify every required page is a regular file directly under `root`.
///
/// Returns the missing filenames in manifest order, so the operator report
/// matches exactly the set of absent pages.
pub fn check_required_pages(root: &Path) -> Result<(), Vec<String>> {
    let missing: Vec<String> = REQUIRED_PAGES
        .iter()
        .filter(|page| !root.join(page).is_file())
        .map(ToString::to_string)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(missing)
    }
}
