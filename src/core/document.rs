//! Dashboard configuration document and the entry-icon pass.
//!
//! The document nests `dashboards -> tabs -> groups -> entries`. It is kept
//! as the parsed JSON object and edited in place: the icon pass only ever
//! writes `iconUrl` and `icon` on the entries it assigns, so every other key
//! keeps its value, its position and any explicit `null`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::matcher::IconIndex;
use crate::utils::io;

const NAME: &str = "name";
const ICON: &str = "icon";
const ICON_URL: &str = "iconUrl";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigDocument {
    root: Map<String, Value>,
}

/// Position of an entry inside the document (all indices zero-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryLocation {
    pub dashboard: usize,
    pub tab: usize,
    pub group: usize,
    pub entry: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IconAssignment {
    pub location: EntryLocation,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_icon: Option<String>,
    pub icon_key: String,
    pub new_icon_url: String,
    pub cleared_icon: bool,
}

fn str_field<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    object.get(key).and_then(Value::as_str)
}

/// Objects under `key`, with their array index. Non-object items are skipped.
fn children<'a>(
    object: &'a Map<String, Value>,
    key: &str,
) -> impl Iterator<Item = (usize, &'a Map<String, Value>)> {
    object
        .get(key)
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .enumerate()
        .filter_map(|(i, item)| item.as_object().map(|o| (i, o)))
}

fn child<'a>(object: &'a Map<String, Value>, key: &str, index: usize) -> Option<&'a Map<String, Value>> {
    object.get(key)?.as_array()?.get(index)?.as_object()
}

fn children_mut<'a>(
    object: &'a mut Map<String, Value>,
    key: &str,
) -> impl Iterator<Item = (usize, &'a mut Map<String, Value>)> {
    object
        .get_mut(key)
        .and_then(Value::as_array_mut)
        .into_iter()
        .flatten()
        .enumerate()
        .filter_map(|(i, item)| item.as_object_mut().map(|o| (i, o)))
}

impl ConfigDocument {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| {
            Error::validation_invalid_json(
                e,
                Some("parse dashboard configuration".to_string()),
                Some(raw.chars().take(200).collect()),
            )
        })
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            Error::internal_json(e.to_string(), Some("serialize dashboard configuration".to_string()))
        })
    }

    pub fn load_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::document_not_found(path.display().to_string()));
        }
        let raw = io::read_file(path, &format!("read {}", path.display()))?;
        Self::from_json(&raw)
    }

    pub fn save_file(&self, path: &Path) -> Result<()> {
        let content = self.to_json_pretty()?;
        io::write_file_atomic(path, &content, &format!("write {}", path.display()))
    }

    /// Top-level value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// The entry object at `location`, if there is one.
    pub fn entry(&self, location: EntryLocation) -> Option<&Map<String, Value>> {
        let dashboard = child(&self.root, "dashboards", location.dashboard)?;
        let tab = child(dashboard, "tabs", location.tab)?;
        let group = child(tab, "groups", location.group)?;
        child(group, "entries", location.entry)
    }

    pub fn entry_count(&self) -> usize {
        children(&self.root, "dashboards")
            .flat_map(|(_, d)| children(d, "tabs"))
            .flat_map(|(_, t)| children(t, "groups"))
            .map(|(_, g)| children(g, "entries").count())
            .sum()
    }
}

/// `true` when the entry already carries a non-empty `iconUrl`.
pub fn has_icon_url(entry: &Map<String, Value>) -> bool {
    str_field(entry, ICON_URL).is_some_and(|url| !url.is_empty())
}

/// Give every entry without an `iconUrl` the best matching icon.
///
/// Entries that already carry a non-empty `iconUrl` are never touched, so a
/// second run over the result assigns nothing. When an entry gets an icon and
/// its legacy `icon` is one of `generic_codes`, that code is cleared.
pub fn assign_entry_icons(
    doc: &mut ConfigDocument,
    engine: &Engine,
    icons: &IconIndex,
    generic_codes: &[String],
) -> Vec<IconAssignment> {
    let mut assignments = Vec::new();

    for (d, dashboard) in children_mut(&mut doc.root, "dashboards") {
        for (t, tab) in children_mut(dashboard, "tabs") {
            for (g, group) in children_mut(tab, "groups") {
                for (e, entry) in children_mut(group, "entries") {
                    if has_icon_url(entry) {
                        continue;
                    }

                    let name = str_field(entry, NAME).unwrap_or_default().to_string();
                    let Some(hit) = engine.explain_match(&name, icons) else {
                        continue;
                    };

                    let old_icon = str_field(entry, ICON).map(str::to_string);
                    let cleared_icon = old_icon
                        .as_deref()
                        .is_some_and(|code| generic_codes.iter().any(|g| g == code));

                    entry.insert(ICON_URL.to_string(), Value::String(hit.icon_ref.clone()));
                    if cleared_icon {
                        entry.insert(ICON.to_string(), Value::String(String::new()));
                    }

                    assignments.push(IconAssignment {
                        location: EntryLocation {
                            dashboard: d,
                            tab: t,
                            group: g,
                            entry: e,
                        },
                        name,
                        old_icon,
                        icon_key: hit.icon_key,
                        new_icon_url: hit.icon_ref,
                        cleared_icon,
                    });
                }
            }
        }
    }

    assignments
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const DOC: &str = r#"{
        "dashboards": [{
            "id": "home",
            "name": "Home",
            "tabs": [{
                "id": "main",
                "groups": [{
                    "id": "infra",
                    "collapsed": false,
                    "entries": [
                        {"id": "1", "name": "Plex Server", "url": "http://plex", "icon": "mdi:application"},
                        {"id": "2", "name": "Pihole", "icon": "mdi:pi-hole"},
                        {"id": "3", "name": "Home Assistant", "iconUrl": "/x.svg", "icon": "mdi:router"},
                        {"id": "4", "name": "Toaster", "icon": null, "iconUrl": null},
                        {"id": "5", "name": "Jellyfin", "iconUrl": ""}
                    ]
                }]
            }]
        }],
        "theme": {"mode": "dark"},
        "settings": {"searchHotkey": "/"}
    }"#;

    fn icons() -> IconIndex {
        ["plex", "pi-hole", "home-assistant", "jellyfin"]
            .iter()
            .map(|k| (k.to_string(), format!("/api/icons/dashboard/{}.svg", k)))
            .collect()
    }

    fn generic() -> Vec<String> {
        vec!["mdi:application".to_string(), "mdi:router".to_string()]
    }

    fn at(entry: usize) -> EntryLocation {
        EntryLocation {
            dashboard: 0,
            tab: 0,
            group: 0,
            entry,
        }
    }

    #[test]
    fn assigns_matches_and_clears_generic_codes() {
        let mut doc = ConfigDocument::from_json(DOC).unwrap();
        let changes = assign_entry_icons(&mut doc, &Engine::builtin(), &icons(), &generic());

        let names: Vec<&str> = changes.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Plex Server", "Pihole", "Jellyfin"]);

        let plex = doc.entry(at(0)).unwrap();
        assert_eq!(plex["iconUrl"], "/api/icons/dashboard/plex.svg");
        assert_eq!(plex["icon"], "");
        assert!(changes[0].cleared_icon);

        // Non-generic legacy code is kept as a fallback.
        assert_eq!(doc.entry(at(1)).unwrap()["icon"], "mdi:pi-hole");
        assert!(!changes[1].cleared_icon);
        assert_eq!(changes[1].location.entry, 1);
    }

    #[test]
    fn existing_icon_url_is_never_clobbered() {
        let mut doc = ConfigDocument::from_json(DOC).unwrap();
        assign_entry_icons(&mut doc, &Engine::builtin(), &icons(), &generic());

        let entry = doc.entry(at(2)).unwrap();
        assert_eq!(entry["iconUrl"], "/x.svg");
        assert_eq!(entry["icon"], "mdi:router");
    }

    #[test]
    fn second_pass_assigns_nothing() {
        let mut doc = ConfigDocument::from_json(DOC).unwrap();
        let engine = Engine::builtin();
        assert!(!assign_entry_icons(&mut doc, &engine, &icons(), &generic()).is_empty());

        let snapshot = doc.clone();
        assert!(assign_entry_icons(&mut doc, &engine, &icons(), &generic()).is_empty());
        assert_eq!(doc, snapshot);
    }

    #[test]
    fn unknown_fields_survive_round_trip() {
        let mut doc = ConfigDocument::from_json(DOC).unwrap();
        assign_entry_icons(&mut doc, &Engine::builtin(), &icons(), &generic());
        let value: Value = serde_json::from_str(&doc.to_json_pretty().unwrap()).unwrap();

        assert_eq!(value["theme"]["mode"], "dark");
        assert_eq!(value["dashboards"][0]["name"], "Home");
        assert_eq!(value["dashboards"][0]["tabs"][0]["groups"][0]["collapsed"], false);
    }

    #[test]
    fn explicit_nulls_are_kept() {
        let mut doc = ConfigDocument::from_json(DOC).unwrap();
        assign_entry_icons(&mut doc, &Engine::builtin(), &icons(), &generic());
        let value: Value = serde_json::from_str(&doc.to_json_pretty().unwrap()).unwrap();

        let toaster = value["dashboards"][0]["tabs"][0]["groups"][0]["entries"][3]
            .as_object()
            .unwrap();
        assert_eq!(toaster.get("icon"), Some(&Value::Null));
        assert_eq!(toaster.get("iconUrl"), Some(&Value::Null));
    }

    #[test]
    fn key_order_is_preserved() {
        let raw = r#"{"version":2,"dashboards":[{"tabs":[{"groups":[{"entries":[{"url":"http://plex","name":"Plex","icon":"mdi:application","id":"1"}]}]}],"name":"Home"}],"theme":"dark"}"#;
        let mut doc = ConfigDocument::from_json(raw).unwrap();
        assign_entry_icons(&mut doc, &Engine::builtin(), &icons(), &generic());

        let out = serde_json::to_string(&doc).unwrap();
        assert!(out.starts_with(r#"{"version":2,"dashboards":"#));
        assert!(out.contains(
            r#"{"url":"http://plex","name":"Plex","icon":"","id":"1","iconUrl":"/api/icons/dashboard/plex.svg"}"#
        ));
        assert!(out.ends_with(r#""name":"Home"}],"theme":"dark"}"#));
    }

    #[test]
    fn malformed_levels_are_skipped() {
        let mut doc = ConfigDocument::from_json(
            r#"{"dashboards":[3,{"tabs":[{"groups":[{"entries":["x",{"name":"Plex"}]}]}]}]}"#,
        )
        .unwrap();
        let changes = assign_entry_icons(&mut doc, &Engine::builtin(), &icons(), &generic());
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].location.dashboard, 1);
        assert_eq!(changes[0].location.entry, 1);
        assert_eq!(doc.entry_count(), 1);
    }

    #[test]
    fn counts_entries() {
        let doc = ConfigDocument::from_json(DOC).unwrap();
        assert_eq!(doc.entry_count(), 5);
    }

    #[test]
    fn invalid_json_is_validation_error() {
        let err = ConfigDocument::from_json("{\"dashboards\": [").unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_json");
        let err = ConfigDocument::from_json("[1, 2]").unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_json");
    }

    #[test]
    fn file_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, DOC).unwrap();

        let mut doc = ConfigDocument::load_file(&path).unwrap();
        assign_entry_icons(&mut doc, &Engine::builtin(), &icons(), &generic());
        doc.save_file(&path).unwrap();

        let reloaded = ConfigDocument::load_file(&path).unwrap();
        assert_eq!(reloaded, doc);
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = ConfigDocument::load_file(Path::new("/nonexistent/config.json")).unwrap_err();
        assert_eq!(err.code.as_str(), "document.not_found");
    }
}
