//! Entry name normalization.
//!
//! Dashboard entries are named freely ("Plex Server", "Living Room Router").
//! Matching works on a canonical token: lowercase, trailing location/role word
//! removed, spaces turned into hyphens, anything outside `[a-z0-9-]` dropped.

use regex::Regex;
use std::sync::OnceLock;

/// Trailing words that describe where or what role a host plays rather than
/// what it runs. Only stripped when another word precedes them.
pub const TRAILING_SUFFIXES: [&str; 10] = [
    "router",
    "server",
    "main",
    "conservatory",
    "living room",
    "snug",
    "study",
    "bedroom",
    "kitchen",
    "office",
];

fn suffix_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        let alternation = TRAILING_SUFFIXES
            .iter()
            .map(|s| regex::escape(s))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(r"(?i)\s+(?:{})$", alternation)).expect("Invalid suffix pattern")
    })
}

/// Canonicalize a display name into a matchable token. Never fails; the
/// result may be empty.
pub fn normalize(raw: &str) -> String {
    let lower = raw.to_lowercase();
    let stripped = suffix_pattern().replace(&lower, "");

    stripped
        .replace(' ', "-")
        .chars()
        .filter(|c| matches!(c, 'a'..='z' | '0'..='9' | '-'))
        .collect()
}
