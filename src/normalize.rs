//! Raw listing lines come straight from scraped repository pages, so a
//! line is usually a clean top-level name (`src/`, `README.md`) but can
//! also be a nested path when the scraper followed a link too far.
//! Normalization collapses every line down to its top-level token.

/// Normalize one raw listing line.
///
/// Returns `None` for blank lines. A nested path (more than one `/`)
/// collapses to its first segment with a trailing `/`, since only a
/// directory can contain further path segments. Already-normalized
/// tokens pass through unchanged, so applying this twice is a no-op.
pub fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.matches('/').count() > 1 {
        let first = trimmed.split('/').next().unwrap_or("");
        return Some(format!("{}/", first));
    }
    Some(trimmed.to_string())
}
