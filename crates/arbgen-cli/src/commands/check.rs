//! Implementation of the `arbgen check` command.

use arbgen_generator::Generator;
use clap::Args;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::output::{caution, generate_report, success};
use crate::settings::SettingsArgs;

/// Arguments for the check command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with non-zero code if there are warnings
    #[arg(long)]
    pub strict: bool,
}

/// JSON output format for check results.
#[derive(Debug, Serialize)]
struct CheckJson {
    locales: Vec<String>,
    messages: usize,
    warnings: Vec<String>,
}

/// Run the check command.
///
/// Runs the whole pipeline without writing any files.
pub fn run_check(args: CheckArgs) -> Result<i32> {
    let settings = args.settings.resolve();
    let generated = Generator::new(settings).build().map_err(generate_report)?;

    let locales: Vec<String> = generated
        .localizations
        .supported_locales()
        .iter()
        .map(ToString::to_string)
        .collect();
    let message_count = generated.localizations.messages().len();
    let warnings: Vec<String> = generated.warnings.iter().map(ToString::to_string).collect();

    if args.json {
        let json = CheckJson {
            locales,
            messages: message_count,
            warnings: warnings.clone(),
        };
        println!("{}", serde_json::to_string_pretty(&json).into_diagnostic()?);
    } else {
        for warning in &warnings {
            println!("{} {warning}", caution("warning:"));
        }
        println!(
            "{} {message_count} messages in {} locales",
            success("OK"),
            locales.len()
        );
    }

    if args.strict && !warnings.is_empty() {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
