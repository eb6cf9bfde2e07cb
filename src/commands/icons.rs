use clap::{Args, Subcommand};
use serde::Serialize;

use dashicon::recategorize::{self, ApplySummary, CategoryCount, RecategorizePlan};
use dashicon::store::ImportSummary;

use super::{CmdResult, Context, GlobalArgs};

#[derive(Args)]
pub struct IconsArgs {
    #[command(subcommand)]
    command: IconsCommand,
}

#[derive(Subcommand)]
enum IconsCommand {
    /// Import SVG assets from the icons directory into the database
    Import {
        /// Icon directory (defaults to icons_dir)
        #[arg(long, value_name = "DIR")]
        icons_dir: Option<String>,
        /// Database path (defaults to database_path)
        #[arg(long, value_name = "PATH")]
        db: Option<String>,
    },
    /// Re-run classification over stored icons and apply overrides
    Recategorize {
        #[arg(long, value_name = "PATH")]
        db: Option<String>,
        /// Report changes without writing them
        #[arg(long)]
        dry_run: bool,
    },
    /// Show icon counts per category
    Categories {
        #[arg(long, value_name = "PATH")]
        db: Option<String>,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRow {
    pub id: String,
    pub label: &'static str,
    pub count: usize,
}

impl From<&CategoryCount> for CategoryRow {
    fn from(count: &CategoryCount) -> Self {
        Self {
            id: count.category.as_str().to_string(),
            label: count.category.label(),
            count: count.count,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IconsOutput {
    command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    import: Option<ImportSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    plan: Option<RecategorizePlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    applied: Option<ApplySummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dry_run: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    categories: Option<Vec<CategoryRow>>,
}

impl IconsOutput {
    fn new(command: &str, database: String) -> Self {
        Self {
            command: command.to_string(),
            database: Some(database),
            import: None,
            plan: None,
            applied: None,
            dry_run: None,
            categories: None,
        }
    }
}

pub fn run(args: IconsArgs, _global: &GlobalArgs) -> CmdResult<IconsOutput> {
    let ctx = Context::load();

    match args.command {
        IconsCommand::Import { icons_dir, db } => import(&ctx, icons_dir.as_deref(), db.as_deref()),
        IconsCommand::Recategorize { db, dry_run } => recategorize(&ctx, db.as_deref(), dry_run),
        IconsCommand::Categories { db } => categories(&ctx, db.as_deref()),
    }
}

fn import(ctx: &Context, icons_dir: Option<&str>, db: Option<&str>) -> CmdResult<IconsOutput> {
    let catalog = ctx.scan_icons(icons_dir)?;
    let mut store = ctx.open_store(db)?;
    let summary = store.insert_icons(catalog.records())?;

    let mut output = IconsOutput::new("icons.import", ctx.database_path(db)?.display().to_string());
    output.import = Some(summary);
    Ok((output, 0))
}

fn recategorize(ctx: &Context, db: Option<&str>, dry_run: bool) -> CmdResult<IconsOutput> {
    let mut store = ctx.open_store(db)?;
    let plan = recategorize::plan(&ctx.engine, &store.icon_categories()?);

    let applied = if dry_run {
        None
    } else {
        Some(recategorize::apply(&mut store, &plan)?)
    };

    let mut output = IconsOutput::new(
        "icons.recategorize",
        ctx.database_path(db)?.display().to_string(),
    );
    output.plan = Some(plan);
    output.applied = applied;
    output.dry_run = Some(dry_run);
    Ok((output, 0))
}

fn categories(ctx: &Context, db: Option<&str>) -> CmdResult<IconsOutput> {
    let store = ctx.open_store(db)?;
    let rows = store.category_counts()?.iter().map(CategoryRow::from).collect();

    let mut output = IconsOutput::new(
        "icons.categories",
        ctx.database_path(db)?.display().to_string(),
    );
    output.categories = Some(rows);
    Ok((output, 0))
}
