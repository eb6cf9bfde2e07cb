//! Identifier-exact category overrides.
//!
//! Applied after rule-based classification and always authoritative. Lookup
//! is exact: no case folding, no variant stripping.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::category::CategoryId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Override {
    pub identifier: String,
    pub category: CategoryId,
}

impl Override {
    pub fn new(identifier: impl Into<String>, category: CategoryId) -> Self {
        Self {
            identifier: identifier.into(),
            category,
        }
    }
}

/// Ordered override list. When an identifier is listed twice the later
/// listing wins.
#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
    entries: Vec<Override>,
    index: HashMap<String, CategoryId>,
}

/// Base identifiers; each one also covers its `-light` and `-dark` variants.
const BUILTIN_OVERRIDES: [(CategoryId, &[&str]); 6] = [
    (
        CategoryId::Communication,
        &[
            "facebook", "instagram", "twitter", "tiktok", "snapchat", "pinterest", "linkedin",
            "reddit", "tumblr", "mastodon", "bluesky", "threads", "eitaa", "weibo", "patreon",
            "ko-fi", "medium", "lemmy", "peertube", "pleroma", "misskey", "friendica", "line",
        ],
    ),
    (
        CategoryId::Media,
        &[
            "tvheadend", "tunarr", "thelounge", "memories", "photoview", "recalbox", "arcane",
            "pterodactyl", "music-assistant", "mpd", "snapcast", "volumio", "hifiberry",
            "lyrion", "youtube-music", "pocket-casts", "castopod", "amp", "roon", "librespot",
            "moode", "mopidy", "batocera", "lakka", "gamevault", "pegasus", "crafty",
        ],
    ),
    (
        CategoryId::Hardware,
        &[
            "alexa", "google-home", "netatmo", "elgato", "logitech", "octoprint", "fluidd",
            "mainsail", "klipper", "obico", "prusa", "willow", "wled", "hyperion", "pikvm",
            "bambulab", "bambu-lab", "philips-hue", "streamdeck", "stream-deck",
            "elgato-wave-link", "corsair", "razer", "creality", "anycubic", "elegoo", "tidbyt",
            "divoom", "ulanzi",
        ],
    ),
    (
        CategoryId::Downloads,
        &[
            "cleanuperr", "maintainerr", "unpackerr", "upgradinatorr", "notifiarr", "traktarr",
            "recyclarr", "whisparr", "decluttarr", "wizarr", "byparr", "eraserr", "excludarr",
            "invitarr",
        ],
    ),
    (
        CategoryId::Monitoring,
        &[
            "price-buddy", "changedetection", "changedetection-io", "renovate", "scrutiny",
            "diun", "whatsupdocker", "whats-up-docker",
        ],
    ),
    (
        CategoryId::Storage,
        &[
            "documenso", "stirling-pdf", "docspell", "double-commander", "karakeep", "feedlynx",
            "wallabag", "linkace", "hoarder", "shiori", "archivebox", "linkwarden",
        ],
    ),
];

impl OverrideTable {
    pub fn new(entries: Vec<Override>) -> Self {
        let mut table = Self::default();
        table.extend(entries);
        table
    }

    pub fn builtin() -> Self {
        let entries = BUILTIN_OVERRIDES
            .iter()
            .flat_map(|(category, ids)| {
                ids.iter().flat_map(move |id| {
                    with_variants(id)
                        .into_iter()
                        .map(move |variant| Override::new(variant, *category))
                })
            })
            .collect();
        Self::new(entries)
    }

    /// Append entries; they take precedence over earlier listings.
    pub fn extend(&mut self, extra: impl IntoIterator<Item = Override>) {
        for entry in extra {
            self.index.insert(entry.identifier.clone(), entry.category);
            self.entries.push(entry);
        }
    }

    pub fn get(&self, identifier: &str) -> Option<CategoryId> {
        self.index.get(identifier).copied()
    }

    /// Final category for `identifier` given whatever was computed or stored.
    pub fn resolve(&self, identifier: &str, current: CategoryId) -> CategoryId {
        self.get(identifier).unwrap_or(current)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Override> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn with_variants(id: &str) -> [String; 3] {
    [
        id.to_string(),
        format!("{}-light", id),
        format!("{}-dark", id),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_variants() {
        let table = OverrideTable::builtin();
        assert_eq!(table.get("facebook"), Some(CategoryId::Communication));
        assert_eq!(table.get("facebook-dark"), Some(CategoryId::Communication));
        assert_eq!(table.get("wled-light"), Some(CategoryId::Hardware));
        assert_eq!(table.len() % 3, 0);
    }

    #[test]
    fn override_beats_computed_category() {
        let table = OverrideTable::builtin();
        assert_eq!(
            table.resolve("facebook-dark", CategoryId::Development),
            CategoryId::Communication
        );
    }

    #[test]
    fn missing_override_keeps_current() {
        let table = OverrideTable::builtin();
        assert_eq!(table.resolve("grafana", CategoryId::Monitoring), CategoryId::Monitoring);
    }

    #[test]
    fn lookup_is_exact() {
        let table = OverrideTable::builtin();
        assert_eq!(table.get("Facebook"), None);
        assert_eq!(table.get("facebook.svg"), None);
    }

    #[test]
    fn resolve_is_idempotent() {
        let table = OverrideTable::builtin();
        for (id, current) in [
            ("facebook-dark", CategoryId::Development),
            ("grafana", CategoryId::Monitoring),
            ("amp", CategoryId::Media),
        ] {
            let once = table.resolve(id, current);
            assert_eq!(table.resolve(id, once), once);
        }
    }

    #[test]
    fn later_listing_wins() {
        let mut table = OverrideTable::builtin();
        table.extend(vec![Override::new("renovate", CategoryId::Development)]);
        assert_eq!(table.get("renovate"), Some(CategoryId::Development));
        assert_eq!(table.get("renovate-dark"), Some(CategoryId::Monitoring));
    }
}
