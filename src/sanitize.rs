//! Filename sanitiser for artist and track names.
//!
//! Episode files are named from user-facing metadata (artist, track) that can
//! contain anything Spotify allows. Each component is reduced to the portable
//! set `[A-Za-z0-9_.-]` before it is allowed anywhere near a path.

use once_cell::sync::Lazy;
use regex::Regex;

/// Runs of characters outside the allowed set collapse to a single `_`.
static UNSAFE_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_.-]+").expect("valid regex"));

/// Sanitise one filename component.
///
/// Every run of characters outside `[A-Za-z0-9_.-]` becomes a single `_`,
/// then leading and trailing `_`, `.` and `-` are trimmed. Idempotent:
/// sanitising an already-sanitised string returns it unchanged.
pub fn sanitize_component(part: &str) -> String {
    UNSAFE_CHARS
        .replace_all(part, "_")
        .trim_matches(['_', '.', '-'])
        .to_string()
}
