/// Filename sanitizer for user-supplied workflow names
///
/// Saved documents are keyed on disk by sanitized name, so the sanitizer is
/// the only thing standing between arbitrary user input and the filesystem.
/// Both functions are total: any input string, including empty input, yields
/// a valid result.

use chrono::{DateTime, Utc};

/// Reduce a workflow name to a filesystem-safe identifier
///
/// Retains only ASCII alphanumerics, spaces, hyphens, and underscores,
/// strips trailing whitespace, then replaces interior spaces with
/// underscores. May return an empty string when nothing survives.
pub fn sanitize(name: &str) -> String {
    let kept: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();
    kept.trim_end().replace(' ', "_")
}

/// Sanitize a name, synthesizing a timestamped fallback if nothing survives
///
/// The clock instant is passed in, so the result is deterministic for a
/// fixed `now`. Fallback form: `Workflow_YYYYMMDD_HHMMSS`.
pub fn sanitize_or_fallback(name: &str, now: DateTime<Utc>) -> String {
    let sanitized = sanitize(name);
    if sanitized.is_empty() {
        format!("Workflow_{}", now.format("%Y%m%d_%H%M%S"))
    } else {
        sanitized
    }
}
