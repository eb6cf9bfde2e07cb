//! SQLite-backed icon table and dashboard configuration row.
//!
//! ## Tables
//!
//! - `icon_categories` - the taxonomy, seeded from [`CategoryId::ALL`]
//! - `icons` - icon records (`image_url` is empty for glyph-only presets)
//! - `config` - single row (`id = 1`) holding the dashboard document as JSON

use rusqlite::{params, Connection, OptionalExtension};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::catalog::IconRecord;
use crate::category::CategoryId;
use crate::document::ConfigDocument;
use crate::error::{Error, Result};
use crate::matcher::IconIndex;
use crate::recategorize::{sorted_counts, CategoryCount, CategoryWriter};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS icon_categories (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    icon TEXT NOT NULL DEFAULT '',
    order_num INTEGER NOT NULL DEFAULT 0,
    is_preset INTEGER NOT NULL DEFAULT 0,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS icons (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    icon TEXT NOT NULL DEFAULT '',
    category_id TEXT NOT NULL,
    color TEXT NOT NULL DEFAULT '',
    is_preset INTEGER NOT NULL DEFAULT 0,
    image_url TEXT NOT NULL DEFAULT '',
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS config (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    data TEXT NOT NULL,
    updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
);

CREATE INDEX IF NOT EXISTS idx_icons_category ON icons(category_id);
"#;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub total: usize,
    pub imported: usize,
    pub skipped: usize,
    pub by_category: Vec<CategoryCount>,
}

pub struct SqliteStore {
    conn: Connection,
    path: Option<PathBuf>,
}

fn is_variant_id(identifier: &str) -> bool {
    identifier.ends_with("-light") || identifier.ends_with("-dark")
}

fn parse_category(raw: &str) -> CategoryId {
    raw.parse().unwrap_or(CategoryId::FALLBACK)
}

impl SqliteStore {
    /// Open (or create) the database file and make sure the schema exists.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.is_dir() {
                return Err(Error::store_open(
                    format!("Directory does not exist: {}", parent.display()),
                    path.display().to_string(),
                ));
            }
        }

        let conn = Connection::open(path)
            .map_err(|e| Error::store_open(e.to_string(), path.display().to_string()))?;

        let store = Self {
            conn,
            path: Some(path.to_path_buf()),
        };
        store.init_schema()?;
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| Error::store_open(e.to_string(), ":memory:"))?;

        let store = Self { conn, path: None };
        store.init_schema()?;
        Ok(store)
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn init_schema(&self) -> Result<()> {
        self.conn
            .execute_batch(SCHEMA)
            .map_err(|e| Error::store_query(e.to_string(), Some("create schema".to_string())))?;
        self.seed_categories()
    }

    fn seed_categories(&self) -> Result<()> {
        let mut stmt = self.conn.prepare(
            "INSERT OR IGNORE INTO icon_categories (id, name, icon, order_num, is_preset)
             VALUES (?1, ?2, ?3, ?4, 1)",
        )?;
        for category in CategoryId::ALL {
            stmt.execute(params![
                category.as_str(),
                category.label(),
                category.glyph(),
                category.order() as i64,
            ])?;
        }
        Ok(())
    }

    /// Identifier -> image URL for every icon with an image, variants excluded.
    pub fn icon_index(&self) -> Result<IconIndex> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, image_url FROM icons WHERE image_url != '' ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut index = IconIndex::new();
        for row in rows {
            let (id, url) = row?;
            if !is_variant_id(&id) {
                index.insert(id.to_lowercase(), url);
            }
        }
        Ok(index)
    }

    /// `(identifier, stored category)` for every icon with an image. The
    /// category is `None` when the stored value is not a known id.
    pub fn icon_categories(&self) -> Result<Vec<(String, Option<CategoryId>)>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, category_id FROM icons WHERE image_url != '' ORDER BY id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        rows.map(|row| row.map(|(id, raw)| (id, raw.parse().ok())).map_err(Error::from))
            .collect()
    }

    pub fn set_category(&self, identifier: &str, category: CategoryId) -> Result<bool> {
        let changed = self.conn.execute(
            "UPDATE icons SET category_id = ?1 WHERE id = ?2",
            params![category.as_str(), identifier],
        )?;
        Ok(changed > 0)
    }

    /// Insert catalog records in one transaction; existing identifiers are skipped.
    pub fn insert_icons(&mut self, records: &[IconRecord]) -> Result<ImportSummary> {
        let mut summary = ImportSummary {
            total: records.len(),
            ..ImportSummary::default()
        };
        let mut tally: BTreeMap<CategoryId, usize> = BTreeMap::new();

        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT OR IGNORE INTO icons (id, name, icon, category_id, color, is_preset, image_url)
                 VALUES (?1, ?2, '', ?3, '', 1, ?4)",
            )?;
            for record in records {
                let inserted = stmt.execute(params![
                    record.identifier,
                    record.display_name,
                    record.category.as_str(),
                    record.image_ref,
                ])?;
                if inserted > 0 {
                    summary.imported += 1;
                    *tally.entry(record.category).or_insert(0) += 1;
                } else {
                    summary.skipped += 1;
                }
            }
        }
        tx.commit()?;

        summary.by_category = sorted_counts(tally);
        crate::log_status!(
            "import",
            "Imported {} icons, skipped {} existing",
            summary.imported,
            summary.skipped
        );
        Ok(summary)
    }

    /// Icons per category across the whole table, largest first.
    pub fn category_counts(&self) -> Result<Vec<CategoryCount>> {
        let mut stmt = self
            .conn
            .prepare("SELECT category_id, COUNT(*) FROM icons GROUP BY category_id")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
        })?;

        let mut tally: BTreeMap<CategoryId, usize> = BTreeMap::new();
        for row in rows {
            let (raw, count) = row?;
            *tally.entry(parse_category(&raw)).or_insert(0) += count as usize;
        }
        Ok(sorted_counts(tally))
    }

    pub fn load_document(&self) -> Result<ConfigDocument> {
        let data: Option<String> = self
            .conn
            .query_row("SELECT data FROM config WHERE id = 1", [], |row| row.get(0))
            .optional()?;

        match data {
            Some(raw) => ConfigDocument::from_json(&raw),
            None => Err(Error::document_not_found(self.location())),
        }
    }

    pub fn save_document(&self, doc: &ConfigDocument) -> Result<()> {
        let data = serde_json::to_string(doc).map_err(|e| {
            Error::internal_json(e.to_string(), Some("serialize dashboard configuration".to_string()))
        })?;
        self.conn.execute(
            "INSERT OR REPLACE INTO config (id, data, updated_at) VALUES (1, ?1, datetime('now'))",
            params![data],
        )?;
        crate::log_status!("entries", "Saved dashboard configuration to {}", self.location());
        Ok(())
    }

    fn location(&self) -> String {
        match &self.path {
            Some(path) => format!("{} (config id=1)", path.display()),
            None => ":memory: (config id=1)".to_string(),
        }
    }
}

impl CategoryWriter for SqliteStore {
    fn set_category(&mut self, identifier: &str, category: CategoryId) -> Result<bool> {
        SqliteStore::set_category(self, identifier, category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::document::assign_entry_icons;
    use crate::engine::Engine;
    use crate::recategorize;
    use tempfile::TempDir;

    const PREFIX: &str = "/api/icons/dashboard/";

    fn seeded() -> SqliteStore {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let catalog = Catalog::from_filenames(
            ["plex.svg", "pi-hole.svg", "facebook.svg", "facebook-dark.svg"],
            PREFIX,
            &Engine::builtin(),
        );
        store.insert_icons(catalog.records()).unwrap();
        store
            .conn
            .execute(
                "INSERT INTO icons (id, name, icon, category_id) VALUES ('media-generic', 'Media', 'mdi:filmstrip', 'media')",
                [],
            )
            .unwrap();
        store
    }

    #[test]
    fn categories_are_seeded_once() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.init_schema().unwrap();
        let count: i64 = store
            .conn
            .query_row("SELECT COUNT(*) FROM icon_categories", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 15);
    }

    #[test]
    fn import_skips_existing_ids() {
        let mut store = seeded();
        let catalog =
            Catalog::from_filenames(["plex.svg", "sonarr.svg"], PREFIX, &Engine::builtin());

        let summary = store.insert_icons(catalog.records()).unwrap();
        assert_eq!(summary.total, 2);
        assert_eq!(summary.imported, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.by_category.len(), 1);
        let sonarr: i64 = store
            .conn
            .query_row("SELECT COUNT(*) FROM icons WHERE id = 'sonarr'", [], |r| r.get(0))
            .unwrap();
        assert_eq!(sonarr, 1);
    }

    #[test]
    fn index_excludes_variants_and_glyph_presets() {
        let index = seeded().icon_index().unwrap();
        let keys: Vec<&str> = index.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["facebook", "pi-hole", "plex"]);
        assert_eq!(index["plex"], "/api/icons/dashboard/plex.svg");
    }

    #[test]
    fn unknown_stored_category_reads_as_none() {
        let store = seeded();
        store
            .conn
            .execute("UPDATE icons SET category_id = 'games' WHERE id = 'plex'", [])
            .unwrap();

        let rows = store.icon_categories().unwrap();
        let plex = rows.iter().find(|(id, _)| id == "plex").unwrap();
        assert_eq!(plex.1, None);
    }

    #[test]
    fn unknown_stored_category_is_rewritten_even_when_it_matches_fallback() {
        let mut store = seeded();
        store
            .conn
            .execute(
                "INSERT INTO icons (id, name, icon, category_id, image_url) VALUES ('zzz-unknown', 'Zzz', '', 'games', '/z.svg')",
                [],
            )
            .unwrap();

        let engine = Engine::builtin();
        let plan = recategorize::plan(&engine, &store.icon_categories().unwrap());
        let change = plan
            .changes
            .iter()
            .find(|c| c.identifier == "zzz-unknown")
            .unwrap();
        assert_eq!(change.from, None);
        assert_eq!(change.to, CategoryId::Development);

        recategorize::apply(&mut store, &plan).unwrap();
        let stored: String = store
            .conn
            .query_row("SELECT category_id FROM icons WHERE id = 'zzz-unknown'", [], |r| r.get(0))
            .unwrap();
        assert_eq!(stored, "development");
        assert!(recategorize::plan(&engine, &store.icon_categories().unwrap()).is_empty());
    }

    #[test]
    fn recategorize_round_trip() {
        let mut store = seeded();
        store.set_category("pi-hole", CategoryId::Networking).unwrap();
        assert!(!store.set_category("missing", CategoryId::Media).unwrap());

        let engine = Engine::builtin();
        let plan = recategorize::plan(&engine, &store.icon_categories().unwrap());
        assert_eq!(plan.changes.len(), 1);
        assert_eq!(plan.changes[0].identifier, "pi-hole");

        recategorize::apply(&mut store, &plan).unwrap();
        assert!(recategorize::plan(&engine, &store.icon_categories().unwrap()).is_empty());

        // Glyph-only presets are never reclassified.
        let generic: String = store
            .conn
            .query_row("SELECT category_id FROM icons WHERE id = 'media-generic'", [], |r| r.get(0))
            .unwrap();
        assert_eq!(generic, "media");
    }

    #[test]
    fn counts_cover_whole_table() {
        let counts = seeded().category_counts().unwrap();
        // media and communication tie at two; display order breaks the tie.
        assert_eq!(counts[0].category, CategoryId::Media);
        assert_eq!(counts[0].count, 2);
        assert_eq!(counts[1].category, CategoryId::Communication);
        assert_eq!(counts.iter().map(|c| c.count).sum::<usize>(), 5);
    }

    #[test]
    fn document_row_round_trip() {
        let store = seeded();
        assert_eq!(
            store.load_document().unwrap_err().code.as_str(),
            "document.not_found"
        );

        let mut doc = ConfigDocument::from_json(
            r#"{"dashboards":[{"tabs":[{"groups":[{"entries":[{"name":"Plex","icon":"mdi:application"}]}]}]}],"theme":"dark"}"#,
        )
        .unwrap();
        store.save_document(&doc).unwrap();

        let index = store.icon_index().unwrap();
        let changes = assign_entry_icons(
            &mut doc,
            &Engine::builtin(),
            &index,
            &["mdi:application".to_string()],
        );
        assert_eq!(changes.len(), 1);
        store.save_document(&doc).unwrap();

        let reloaded = store.load_document().unwrap();
        assert_eq!(reloaded, doc);
        assert_eq!(reloaded.get("theme"), Some(&serde_json::json!("dark")));
    }

    #[test]
    fn open_creates_file_database() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hops.db");
        {
            let mut store = SqliteStore::open(&path).unwrap();
            let catalog = Catalog::from_filenames(["plex.svg"], PREFIX, &Engine::builtin());
            store.insert_icons(catalog.records()).unwrap();
        }

        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(store.path(), Some(path.as_path()));
        assert_eq!(store.icon_index().unwrap().len(), 1);
    }

    #[test]
    fn open_in_missing_dir_fails() {
        let err = SqliteStore::open(Path::new("/nonexistent/dir/hops.db"))
            .err()
            .unwrap();
        assert_eq!(err.code.as_str(), "store.open_failed");
    }
}
