use clap::Args;
use serde::Serialize;

use dashicon::matcher::IconMatch;

use super::{CmdResult, Context, GlobalArgs};

#[derive(Args)]
pub struct MatchArgs {
    /// Dashboard entry names to resolve
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Icon directory to match against (defaults to icons_dir)
    #[arg(long, value_name = "DIR", conflicts_with = "db")]
    pub icons_dir: Option<String>,

    /// Match against icons stored in this database instead
    #[arg(long, value_name = "PATH")]
    pub db: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MatchResult {
    pub name: String,
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    pub hit: Option<IconMatch>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchOutput {
    pub command: String,
    pub source: String,
    pub icon_count: usize,
    pub matched: usize,
    pub results: Vec<MatchResult>,
}

pub fn run(args: MatchArgs, _global: &GlobalArgs) -> CmdResult<MatchOutput> {
    let ctx = Context::load();
    let (index, source) = ctx.icon_index(args.icons_dir.as_deref(), args.db.as_deref())?;

    let results: Vec<MatchResult> = args
        .names
        .into_iter()
        .map(|name| MatchResult {
            hit: ctx.engine.explain_match(&name, &index),
            name,
        })
        .collect();
    let matched = results.iter().filter(|r| r.hit.is_some()).count();

    Ok((
        MatchOutput {
            command: "match".to_string(),
            source,
            icon_count: index.len(),
            matched,
            results,
        },
        0,
    ))
}
