//! Resolve a dashboard entry name to an available icon.
//!
//! Strategies are tried in order and the first hit wins:
//! exact token lookup, a scan over icon keys of at least four characters,
//! then the alias table in declared order. A miss is a normal outcome.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::aliases::AliasTable;
use crate::normalize::normalize;

/// Normalized icon identifier -> icon reference (URL or path).
pub type IconIndex = BTreeMap<String, String>;

/// Tokens shorter than this never match anything.
pub const MIN_TOKEN_LEN: usize = 3;

/// Icon keys shorter than this are skipped by the scan pass.
pub const MIN_SCAN_KEY_LEN: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "strategy")]
pub enum MatchStrategy {
    Exact,
    Scan,
    Alias { alias: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IconMatch {
    /// Normalized entry name.
    pub token: String,
    /// Index key that produced the hit.
    pub icon_key: String,
    pub icon_ref: String,
    #[serde(flatten)]
    pub strategy: MatchStrategy,
}

#[derive(Debug, Clone)]
pub struct IconMatcher {
    aliases: AliasTable,
}

impl Default for IconMatcher {
    fn default() -> Self {
        Self::new(AliasTable::builtin())
    }
}

impl IconMatcher {
    pub fn new(aliases: AliasTable) -> Self {
        Self { aliases }
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Best icon reference for `entry_name`, or `None`.
    pub fn match_icon<'a>(&self, entry_name: &str, icons: &'a IconIndex) -> Option<&'a str> {
        self.lookup(&normalize(entry_name), icons)
            .map(|(_, icon_ref, _)| icon_ref)
    }

    /// Same as [`match_icon`](Self::match_icon) but reports how the hit was found.
    pub fn explain(&self, entry_name: &str, icons: &IconIndex) -> Option<IconMatch> {
        let token = normalize(entry_name);
        self.lookup(&token, icons)
            .map(|(icon_key, icon_ref, strategy)| IconMatch {
                token: token.clone(),
                icon_key: icon_key.to_string(),
                icon_ref: icon_ref.to_string(),
                strategy,
            })
    }

    fn lookup<'a>(
        &self,
        token: &str,
        icons: &'a IconIndex,
    ) -> Option<(&'a str, &'a str, MatchStrategy)> {
        if token.chars().count() < MIN_TOKEN_LEN {
            return None;
        }

        if let Some((key, icon_ref)) = icons.get_key_value(token) {
            return Some((key.as_str(), icon_ref.as_str(), MatchStrategy::Exact));
        }

        // Redundant with the exact lookup while index keys are unique; kept as
        // its own pass so the short-key floor stays explicit.
        for (key, icon_ref) in icons {
            if key.chars().count() < MIN_SCAN_KEY_LEN {
                continue;
            }
            if key == token {
                return Some((key.as_str(), icon_ref.as_str(), MatchStrategy::Scan));
            }
        }

        for entry in self.aliases.iter() {
            if !token.contains(entry.alias.as_str()) {
                continue;
            }
            if let Some((key, icon_ref)) = icons.get_key_value(entry.canonical_token.as_str()) {
                return Some((
                    key.as_str(),
                    icon_ref.as_str(),
                    MatchStrategy::Alias {
                        alias: entry.alias.clone(),
                    },
                ));
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aliases::AliasEntry;

    fn index(keys: &[&str]) -> IconIndex {
        keys.iter()
            .map(|k| (k.to_string(), format!("/api/icons/dashboard/{}.svg", k)))
            .collect()
    }

    #[test]
    fn exact_hit_after_normalization() {
        let icons = index(&["home-assistant"]);
        let matcher = IconMatcher::default();
        assert_eq!(
            matcher.match_icon("Home Assistant", &icons),
            Some("/api/icons/dashboard/home-assistant.svg")
        );
    }

    #[test]
    fn suffix_is_stripped_before_lookup() {
        let icons = index(&["plex"]);
        let hit = IconMatcher::default().explain("Plex Server", &icons).unwrap();
        assert_eq!(hit.icon_key, "plex");
        assert_eq!(hit.strategy, MatchStrategy::Exact);
    }

    #[test]
    fn short_tokens_never_match() {
        let icons = index(&["hp", "tv", "ha"]);
        let matcher = IconMatcher::default();
        assert_eq!(matcher.match_icon("HP", &icons), None);
        assert_eq!(matcher.match_icon("T.V.", &icons), None);
        assert_eq!(matcher.match_icon("", &icons), None);
    }

    // MIN_SCAN_KEY_LEN has no observable effect: any key the scan pass could
    // return is already returned by the exact lookup, so a three-char key
    // still hits, always as Exact.
    #[test]
    fn three_char_token_can_hit_exactly() {
        let icons = index(&["n8n"]);
        let hit = IconMatcher::default().explain("N8N", &icons).unwrap();
        assert_eq!(hit.icon_key, "n8n");
        assert_eq!(hit.strategy, MatchStrategy::Exact);
    }

    #[test]
    fn alias_resolves_to_canonical_icon() {
        let icons = index(&["pi-hole"]);
        let hit = IconMatcher::default().explain("Pihole Primary", &icons).unwrap();
        assert_eq!(hit.icon_key, "pi-hole");
        assert_eq!(
            hit.strategy,
            MatchStrategy::Alias {
                alias: "pihole".to_string()
            }
        );
    }

    #[test]
    fn alias_needs_target_in_index() {
        let icons = index(&["jellyfin"]);
        assert_eq!(IconMatcher::default().match_icon("Postgres DB", &icons), None);
    }

    #[test]
    fn alias_order_breaks_ties() {
        let icons = index(&["plex", "jellyfin"]);
        // "jellyfin" precedes "plex" in the table.
        let hit = IconMatcher::default()
            .explain("Jellyfin Plex Bridge", &icons)
            .unwrap();
        assert_eq!(hit.icon_key, "jellyfin");
    }

    #[test]
    fn custom_alias_table_is_used() {
        let matcher = IconMatcher::new(AliasTable::new(vec![AliasEntry::new("ha", "home-assistant")]));
        let icons = index(&["home-assistant"]);
        assert!(matcher.match_icon("HA Kiosk", &icons).is_some());
    }

    #[test]
    fn no_substring_matching_on_icon_keys() {
        let icons = index(&["grafana"]);
        assert_eq!(IconMatcher::default().match_icon("Grafana Cloud", &icons), None);
    }

    #[test]
    fn miss_returns_none() {
        let icons = index(&["sonarr"]);
        assert_eq!(IconMatcher::default().match_icon("My Toaster", &icons), None);
    }
}
