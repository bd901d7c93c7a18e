//! Implementation of the `arbgen generate` command.

use std::collections::BTreeMap;

use arbgen_generator::Generator;
use clap::Args;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use tracing::debug;

use crate::output::{caution, generate_report, success};
use crate::settings::SettingsArgs;

/// Arguments for the generate command.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Output a summary as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON summary of a generation run.
#[derive(Debug, Serialize)]
struct GenerateJson {
    output: String,
    locales: Vec<String>,
    messages: usize,
    warnings: Vec<String>,
    untranslated: BTreeMap<String, Vec<String>>,
}

/// Run the generate command.
pub fn run_generate(args: GenerateArgs) -> Result<i32> {
    let settings = args.settings.resolve();
    debug!(arb_dir = %settings.arb_dir.display(), "generating localizations");

    let report = Generator::new(settings).run().map_err(generate_report)?;

    if args.json {
        let json = GenerateJson {
            output: report.output_path.display().to_string(),
            locales: report.locales.clone(),
            messages: report.messages.len(),
            warnings: report.warnings.iter().map(ToString::to_string).collect(),
            untranslated: report
                .untranslated
                .iter()
                .map(|(locale, keys)| (locale.to_string(), keys.to_vec()))
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&json).into_diagnostic()?);
    } else {
        println!(
            "{} {} ({} messages, {} locales: {})",
            success("Generated"),
            report.output_path.display(),
            report.messages.len(),
            report.locales.len(),
            report.locales.join(", ")
        );
        let missing = report.untranslated.count();
        if missing > 0 {
            println!(
                "{} {missing} untranslated message(s); run `arbgen coverage` for details",
                caution("note:")
            );
        }
    }

    Ok(exitcode::OK)
}
