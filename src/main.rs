use clap::{Parser, Subcommand};

use commands::GlobalArgs;

mod commands;
mod output;
mod tty;

use commands::{classify, config, entries, icon_match, icons, normalize};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "dashicon")]
#[command(version = VERSION)]
#[command(about = "Match dashboard entries to icons and categorize the icon library")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the canonical token for display names
    Normalize(normalize::NormalizeArgs),
    /// Resolve entry names to the best available icon
    Match(icon_match::MatchArgs),
    /// Categorize icon identifiers and explain the decision
    Classify(classify::ClassifyArgs),
    /// Import, recategorize and count stored icons
    Icons(icons::IconsArgs),
    /// Assign icons to dashboard entries
    Entries(entries::EntriesArgs),
    /// Manage global dashicon configuration
    Config(config::ConfigArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let global = GlobalArgs {};

    let (json_result, exit_code) = commands::run_json(cli.command, &global);

    if let Err(err) = output::print_json_result(json_result) {
        eprintln!("{}", err);
        return std::process::ExitCode::from(exit_code_to_u8(1));
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
