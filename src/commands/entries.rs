use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use dashicon::document::{assign_entry_icons, ConfigDocument, IconAssignment};
use dashicon::store::SqliteStore;
use dashicon::Error;

use super::{CmdResult, Context, GlobalArgs};

#[derive(Args)]
pub struct EntriesArgs {
    #[command(subcommand)]
    command: EntriesCommand,
}

#[derive(Subcommand)]
enum EntriesCommand {
    /// Give dashboard entries without an iconUrl a matching icon
    Fix {
        /// Database holding the dashboard configuration (defaults to database_path)
        #[arg(long, value_name = "PATH", conflicts_with = "file")]
        db: Option<String>,
        /// Rewrite a dashboard configuration JSON file instead
        #[arg(long, value_name = "PATH")]
        file: Option<String>,
        /// Icon directory to match against (defaults to icons_dir)
        #[arg(long, value_name = "DIR")]
        icons_dir: Option<String>,
        /// Apply without asking for confirmation
        #[arg(short, long)]
        yes: bool,
        /// Report changes without writing them
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntriesOutput {
    command: String,
    target: String,
    entry_count: usize,
    icon_count: usize,
    changes: Vec<IconAssignment>,
    applied: bool,
    dry_run: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    cancelled: bool,
}

enum Target {
    Store(SqliteStore),
    File(PathBuf),
}

impl Target {
    fn describe(&self) -> String {
        match self {
            Target::Store(store) => store
                .path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| ":memory:".to_string()),
            Target::File(path) => path.display().to_string(),
        }
    }

    fn load(&self) -> dashicon::Result<ConfigDocument> {
        match self {
            Target::Store(store) => store.load_document(),
            Target::File(path) => ConfigDocument::load_file(path),
        }
    }

    fn save(&self, doc: &ConfigDocument) -> dashicon::Result<()> {
        match self {
            Target::Store(store) => store.save_document(doc),
            Target::File(path) => {
                doc.save_file(path)?;
                dashicon::log_status!("entries", "Rewrote {}", path.display());
                Ok(())
            }
        }
    }
}

pub fn run(args: EntriesArgs, _global: &GlobalArgs) -> CmdResult<EntriesOutput> {
    let ctx = Context::load();

    match args.command {
        EntriesCommand::Fix {
            db,
            file,
            icons_dir,
            yes,
            dry_run,
        } => {
            let target = match file {
                Some(raw) => Target::File(dashicon::defaults::expand_path("file", &raw)?),
                None => Target::Store(ctx.open_store(db.as_deref())?),
            };
            fix(&ctx, target, icons_dir.as_deref(), yes, dry_run)
        }
    }
}

fn fix(
    ctx: &Context,
    target: Target,
    icons_dir: Option<&str>,
    yes: bool,
    dry_run: bool,
) -> CmdResult<EntriesOutput> {
    let mut doc = target.load()?;
    let index = ctx.scan_icons(icons_dir)?.index().clone();
    let changes = assign_entry_icons(
        &mut doc,
        &ctx.engine,
        &index,
        &ctx.defaults.generic_icon_codes,
    );

    let mut output = EntriesOutput {
        command: "entries.fix".to_string(),
        target: target.describe(),
        entry_count: doc.entry_count(),
        icon_count: index.len(),
        changes,
        applied: false,
        dry_run,
        cancelled: false,
    };

    if output.changes.is_empty() || dry_run {
        return Ok((output, 0));
    }

    if !yes {
        if !crate::tty::require_tty_for_interactive() {
            return Err(Error::validation_invalid_argument(
                "yes",
                "Confirmation required; pass --yes to apply without a terminal",
                None,
                None,
            ));
        }

        for change in &output.changes {
            eprintln!(
                "  - {}: {} -> {}",
                change.name,
                change.old_icon.as_deref().unwrap_or(""),
                change.new_icon_url
            );
        }
        let question = format!("Apply {} icon changes?", output.changes.len());
        if !crate::tty::confirm(&question)? {
            output.cancelled = true;
            return Ok((output, 0));
        }
    }

    target.save(&doc)?;
    output.applied = true;
    Ok((output, 0))
}
