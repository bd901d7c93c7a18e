//! Coverage command implementation.

use arbgen_generator::Generator;
use clap::Args;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::output::generate_report;
use crate::output::table::{format_coverage_table, LocaleCoverage};
use crate::settings::SettingsArgs;

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Exit with non-zero code if any translation is incomplete.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for coverage data.
#[derive(Debug, Serialize)]
struct CoverageJson {
    locale: String,
    translated: usize,
    total: usize,
    missing: Vec<String>,
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    let settings = args.settings.resolve();
    let generated = Generator::new(settings).build().map_err(generate_report)?;

    let total = generated.localizations.messages().len();
    let template_locale = generated.localizations.template_locale();

    // The template defines every message, so it is always complete.
    let coverage_data: Vec<LocaleCoverage> = generated
        .localizations
        .supported_locales()
        .iter()
        .filter(|locale| *locale != template_locale)
        .map(|locale| {
            let missing = generated.untranslated.for_locale(locale.as_str()).to_vec();
            LocaleCoverage {
                locale: locale.to_string(),
                translated: total - missing.len(),
                missing,
            }
        })
        .collect();

    let any_incomplete = !coverage_data.iter().all(LocaleCoverage::is_complete);

    if args.json {
        let json_data: Vec<CoverageJson> = coverage_data
            .iter()
            .map(|c| CoverageJson {
                locale: c.locale.clone(),
                translated: c.translated,
                total,
                missing: c.missing.clone(),
            })
            .collect();

        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{json_output}");
    } else {
        let table = format_coverage_table(total, &coverage_data);
        println!("{table}");

        for locale_coverage in &coverage_data {
            if !locale_coverage.is_complete() {
                println!("\nMissing in {}:", locale_coverage.locale);
                for key in &locale_coverage.missing {
                    println!("  - {key}");
                }
            }
        }
    }

    if args.strict && any_incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
