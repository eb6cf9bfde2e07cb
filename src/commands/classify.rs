use clap::Args;
use serde::Serialize;

use dashicon::engine::CategoryDecision;

use super::{CmdResult, Context};

#[derive(Args)]
pub struct ClassifyArgs {
    /// Icon identifiers or file names (e.g. pi-hole, facebook-dark.svg)
    #[arg(required = true)]
    pub identifiers: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ClassifiedIcon {
    pub label: &'static str,
    #[serde(flatten)]
    pub decision: CategoryDecision,
}

#[derive(Debug, Serialize)]
pub struct ClassifyOutput {
    pub command: String,
    pub results: Vec<ClassifiedIcon>,
}

pub fn run_json(args: ClassifyArgs) -> CmdResult<ClassifyOutput> {
    let ctx = Context::load();

    let results = args
        .identifiers
        .iter()
        .map(|raw| {
            let identifier = raw.to_lowercase();
            let decision = ctx.engine.explain_category(&identifier);
            ClassifiedIcon {
                label: decision.category.label(),
                decision,
            }
        })
        .collect();

    Ok((
        ClassifyOutput {
            command: "classify".to_string(),
            results,
        },
        0,
    ))
}
