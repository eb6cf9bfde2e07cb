use clap::Args;
use serde::Serialize;

use dashicon::matcher::MIN_TOKEN_LEN;
use dashicon::normalize::normalize;

use super::CmdResult;

#[derive(Args)]
pub struct NormalizeArgs {
    /// Display names to normalize
    #[arg(required = true)]
    pub names: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedName {
    pub input: String,
    pub token: String,
    /// Token is below the matcher's minimum length and can never match.
    pub too_short: bool,
}

#[derive(Debug, Serialize)]
pub struct NormalizeOutput {
    pub command: String,
    pub results: Vec<NormalizedName>,
}

pub fn run_json(args: NormalizeArgs) -> CmdResult<NormalizeOutput> {
    let results = args
        .names
        .into_iter()
        .map(|input| {
            let token = normalize(&input);
            NormalizedName {
                too_short: token.chars().count() < MIN_TOKEN_LEN,
                input,
                token,
            }
        })
        .collect();

    Ok((
        NormalizeOutput {
            command: "normalize".to_string(),
            results,
        },
        0,
    ))
}
