//! Icon records built from a directory of SVG assets.
//!
//! Every `*.svg` file becomes an [`IconRecord`]; light/dark variants are
//! recorded too but kept out of the matching index so entries resolve to the
//! base artwork.

use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;

use crate::category::CategoryId;
use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::matcher::IconIndex;

const SVG_EXTENSION: &str = ".svg";

const ACRONYMS: [&str; 35] = [
    "AI", "ML", "API", "UI", "UX", "DB", "SQL", "AWS", "GCP", "DNS", "VPN", "SSH", "FTP", "NFS",
    "SMB", "HTTP", "HTTPS", "TCP", "UDP", "IP", "NAS", "VPS", "VM", "OS", "TV", "PC", "IT", "ID",
    "LLM", "GPU", "CPU", "RAM", "SSD", "HDD", "USB",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IconRecord {
    pub identifier: String,
    pub display_name: String,
    pub category: CategoryId,
    pub image_ref: String,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<IconRecord>,
    index: IconIndex,
}

/// Lowercase base name of an `.svg` file; `None` for anything else.
pub fn identifier_from_filename(filename: &str) -> Option<String> {
    filename
        .strip_suffix(SVG_EXTENSION)
        .filter(|base| !base.is_empty())
        .map(str::to_lowercase)
}

/// `true` for `-light.` / `-dark.` artwork variants.
pub fn is_variant(filename: &str) -> bool {
    filename.contains("-dark.") || filename.contains("-light.")
}

pub fn image_ref(prefix: &str, filename: &str) -> String {
    format!("{}{}", prefix, filename)
}

/// "uptime-kuma-dark.svg" -> "Uptime Kuma", "nas-api.svg" -> "NAS API".
pub fn format_display_name(filename: &str) -> String {
    let base = filename.strip_suffix(SVG_EXTENSION).unwrap_or(filename);
    let base = base
        .strip_suffix("-light")
        .or_else(|| base.strip_suffix("-dark"))
        .unwrap_or(base);

    base.split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(format_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_word(word: &str) -> String {
    let upper = word.to_uppercase();
    if ACRONYMS.contains(&upper.as_str()) {
        return upper;
    }

    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
    }
}

impl Catalog {
    /// Build records and the matching index from bare file names.
    pub fn from_filenames<I, S>(filenames: I, prefix: &str, engine: &Engine) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names: Vec<String> = filenames
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect();
        names.sort();

        let mut seen = HashSet::new();
        let mut catalog = Catalog::default();

        for filename in names {
            let Some(identifier) = identifier_from_filename(&filename) else {
                continue;
            };
            if !seen.insert(identifier.clone()) {
                continue;
            }

            let image = image_ref(prefix, &filename);
            if !is_variant(&filename) {
                catalog.index.insert(identifier.clone(), image.clone());
            }

            catalog.records.push(IconRecord {
                category: engine.categorize(&identifier),
                display_name: format_display_name(&filename),
                identifier,
                image_ref: image,
            });
        }

        catalog
    }

    /// Scan `dir` for `*.svg` assets. A missing directory yields an empty catalog.
    pub fn scan_dir(dir: &Path, prefix: &str, engine: &Engine) -> Result<Self> {
        if !dir.is_dir() {
            crate::log_status!("icons", "Icon directory not found: {}", dir.display());
            return Ok(Self::default());
        }

        let pattern = format!(
            "{}/*{}",
            glob::Pattern::escape(&dir.to_string_lossy()),
            SVG_EXTENSION
        );
        let paths = glob::glob(&pattern).map_err(|e| {
            Error::config_invalid_value("icons_dir", Some(dir.display().to_string()), e.to_string())
        })?;

        let filenames: Vec<String> = paths
            .filter_map(|entry| entry.ok())
            .filter(|path| path.is_file())
            .filter_map(|path| path.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect();

        crate::log_status!(
            "icons",
            "Found {} SVG files in {}",
            filenames.len(),
            dir.display()
        );

        Ok(Self::from_filenames(filenames, prefix, engine))
    }

    pub fn records(&self) -> &[IconRecord] {
        &self.records
    }

    /// Identifier -> image reference, variants excluded.
    pub fn index(&self) -> &IconIndex {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const PREFIX: &str = "/api/icons/dashboard/";

    #[test]
    fn identifier_requires_svg() {
        assert_eq!(identifier_from_filename("Plex.svg").as_deref(), Some("plex"));
        assert_eq!(identifier_from_filename("plex.png"), None);
        assert_eq!(identifier_from_filename(".svg"), None);
    }

    #[test]
    fn display_names() {
        assert_eq!(format_display_name("uptime-kuma-dark.svg"), "Uptime Kuma");
        assert_eq!(format_display_name("nas_api.svg"), "NAS API");
        assert_eq!(format_display_name("home-assistant.svg"), "Home Assistant");
        assert_eq!(format_display_name("TrueNAS.svg"), "Truenas");
    }

    #[test]
    fn variants_are_recorded_but_not_indexed() {
        let catalog = Catalog::from_filenames(
            ["grafana.svg", "grafana-dark.svg", "grafana-light.svg", "readme.md"],
            PREFIX,
            &Engine::builtin(),
        );

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.index().len(), 1);
        assert_eq!(
            catalog.index().get("grafana").map(String::as_str),
            Some("/api/icons/dashboard/grafana.svg")
        );
        assert!(catalog
            .records()
            .iter()
            .all(|r| r.category == CategoryId::Monitoring));
    }

    #[test]
    fn records_use_final_category() {
        let catalog = Catalog::from_filenames(
            ["facebook.svg", "facebook-dark.svg"],
            PREFIX,
            &Engine::builtin(),
        );
        assert!(catalog
            .records()
            .iter()
            .all(|r| r.category == CategoryId::Communication));
    }

    #[test]
    fn duplicate_identifiers_keep_first() {
        let catalog =
            Catalog::from_filenames(["Plex.svg", "plex.svg"], PREFIX, &Engine::builtin());
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.records()[0].image_ref, "/api/icons/dashboard/Plex.svg");
    }

    #[test]
    fn scan_dir_reads_svg_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("sonarr.svg"), "<svg/>").unwrap();
        fs::write(dir.path().join("sonarr-light.svg"), "<svg/>").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::create_dir(dir.path().join("nested.svg")).unwrap();

        let catalog = Catalog::scan_dir(dir.path(), PREFIX, &Engine::builtin()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.index().contains_key("sonarr"));
        assert!(!catalog.index().contains_key("sonarr-light"));
    }

    #[test]
    fn missing_dir_is_empty_catalog() {
        let catalog = Catalog::scan_dir(
            Path::new("/nonexistent/dashboard-icons"),
            PREFIX,
            &Engine::builtin(),
        )
        .unwrap();
        assert!(catalog.is_empty());
    }
}
