use std::path::PathBuf;

use dashicon::catalog::Catalog;
use dashicon::defaults::{self, Defaults};
use dashicon::matcher::IconIndex;
use dashicon::store::SqliteStore;
use dashicon::Engine;

pub type CmdResult<T> = dashicon::Result<(T, i32)>;

pub(crate) struct GlobalArgs {}

/// Effective settings for one command run: config file defaults plus the
/// engine built from its taxonomy section.
pub(crate) struct Context {
    pub defaults: Defaults,
    pub engine: Engine,
}

impl Context {
    pub fn load() -> Self {
        let defaults = defaults::load_defaults();
        let engine = Engine::from_config(&defaults.taxonomy);
        Self { defaults, engine }
    }

    pub fn database_path(&self, flag: Option<&str>) -> dashicon::Result<PathBuf> {
        match flag {
            Some(raw) => defaults::expand_path("db", raw),
            None => self.defaults.database_path(),
        }
    }

    pub fn icons_dir(&self, flag: Option<&str>) -> dashicon::Result<PathBuf> {
        match flag {
            Some(raw) => defaults::expand_path("icons_dir", raw),
            None => self.defaults.icons_dir(),
        }
    }

    pub fn open_store(&self, flag: Option<&str>) -> dashicon::Result<SqliteStore> {
        SqliteStore::open(&self.database_path(flag)?)
    }

    pub fn scan_icons(&self, flag: Option<&str>) -> dashicon::Result<Catalog> {
        Catalog::scan_dir(
            &self.icons_dir(flag)?,
            &self.defaults.image_url_prefix,
            &self.engine,
        )
    }

    /// Matching index from the database when `--db` is given, otherwise from
    /// the icons directory.
    pub fn icon_index(
        &self,
        icons_dir: Option<&str>,
        db: Option<&str>,
    ) -> dashicon::Result<(IconIndex, String)> {
        match db {
            Some(_) => {
                let store = self.open_store(db)?;
                Ok((store.icon_index()?, "database".to_string()))
            }
            None => {
                let catalog = self.scan_icons(icons_dir)?;
                Ok((catalog.index().clone(), "icons_dir".to_string()))
            }
        }
    }
}

pub mod classify;
pub mod config;
pub mod entries;
pub mod icon_match;
pub mod icons;
pub mod normalize;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run_json($args))
    };
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (dashicon::Result<serde_json::Value>, i32) {
    match command {
        // Pure commands, no store or filesystem access
        crate::Commands::Normalize(args) => dispatch!(args, normalize),
        crate::Commands::Classify(args) => dispatch!(args, classify),

        crate::Commands::Match(args) => dispatch!(args, global, icon_match),
        crate::Commands::Icons(args) => {
            crate::tty::status("dashicon is working...");
            dispatch!(args, global, icons)
        }
        crate::Commands::Entries(args) => dispatch!(args, global, entries),
        crate::Commands::Config(args) => dispatch!(args, global, config),
    }
}
