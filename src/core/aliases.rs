//! Informal name variants mapped to canonical icon identifiers.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasEntry {
    pub alias: String,
    pub canonical_token: String,
}

impl AliasEntry {
    pub fn new(alias: impl Into<String>, canonical_token: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            canonical_token: canonical_token.into(),
        }
    }
}

/// Ordered alias list. Several aliases may point at the same token; the
/// declared order decides which alias wins when more than one applies.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AliasTable {
    entries: Vec<AliasEntry>,
}

const BUILTIN_ALIASES: [(&str, &str); 17] = [
    ("pihole", "pi-hole"),
    ("pi-hole", "pi-hole"),
    ("tplink", "tp-link"),
    ("tp-link", "tp-link"),
    ("tp link", "tp-link"),
    ("homeassistant", "home-assistant"),
    ("home assistant", "home-assistant"),
    ("hass", "home-assistant"),
    ("proxmox", "proxmox"),
    ("jellyfin", "jellyfin"),
    ("plex", "plex"),
    ("qnap", "qnap"),
    ("cloudflare", "cloudflare"),
    ("postgres", "postgresql"),
    ("postgresql", "postgresql"),
    ("google", "google"),
    ("audiobookshelf", "audiobookshelf"),
];

impl AliasTable {
    pub fn new(entries: Vec<AliasEntry>) -> Self {
        Self { entries }
    }

    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_ALIASES
                .iter()
                .map(|(alias, target)| AliasEntry::new(*alias, *target))
                .collect(),
        )
    }

    /// Append entries after the existing ones (lower precedence).
    pub fn extend(&mut self, extra: impl IntoIterator<Item = AliasEntry>) {
        self.entries.extend(extra);
    }

    pub fn iter(&self) -> impl Iterator<Item = &AliasEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_keeps_declared_order() {
        let table = AliasTable::builtin();
        let first: Vec<&str> = table.iter().take(3).map(|e| e.alias.as_str()).collect();
        assert_eq!(first, vec!["pihole", "pi-hole", "tplink"]);
        assert_eq!(table.len(), 17);
    }

    #[test]
    fn extend_appends_after_builtins() {
        let mut table = AliasTable::builtin();
        table.extend(vec![AliasEntry::new("ha", "home-assistant")]);
        let last = table.iter().last().unwrap();
        assert_eq!(last.alias, "ha");
    }
}
