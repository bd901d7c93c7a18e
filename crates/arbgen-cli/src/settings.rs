//! Command-line overrides for generator settings.

use std::path::PathBuf;

use arbgen_generator::{Settings, CONFIG_FILE_NAME};
use clap::Args;

/// Settings flags shared by every command.
///
/// Flags override values from the configuration file.
#[derive(Debug, Clone, Args)]
pub struct SettingsArgs {
    /// Project root; relative paths are resolved against it
    #[arg(long, default_value = ".")]
    pub project_dir: PathBuf,

    /// Configuration file [default: <project-dir>/l10n.json]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory containing the .arb files
    #[arg(long)]
    pub arb_dir: Option<PathBuf>,

    /// Template .arb file name, relative to the ARB directory
    #[arg(long)]
    pub template_arb_file: Option<PathBuf>,

    /// Generated file name, relative to the ARB directory
    #[arg(long)]
    pub output_localization_file: Option<PathBuf>,

    /// Name of the generated trait
    #[arg(long)]
    pub output_class: Option<String>,

    /// Locales listed first in SUPPORTED_LOCALES (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub preferred_supported_locales: Vec<String>,

    /// Text prepended to the generated file
    #[arg(long)]
    pub header: Option<String>,

    /// File whose contents are prepended to the generated file
    #[arg(long)]
    pub header_file: Option<PathBuf>,

    /// Write a JSON report of untranslated messages to this file
    #[arg(long)]
    pub untranslated_messages_file: Option<PathBuf>,

    /// Treat braces that cannot start an expression as literal text
    #[arg(long)]
    pub relaxed_syntax: bool,

    /// Recognize apostrophe escapes in messages
    #[arg(long)]
    pub use_escaping: bool,

    /// Do not print warnings
    #[arg(long)]
    pub suppress_warnings: bool,

    /// Run rustfmt over the generated file
    #[arg(long)]
    pub format: bool,

    /// Require an @key metadata entry for every message
    #[arg(long)]
    pub required_resource_attributes: bool,
}

impl SettingsArgs {
    /// Configuration file values with flags applied, rooted at the project.
    pub fn resolve(&self) -> Settings {
        let config = self
            .config
            .clone()
            .unwrap_or_else(|| self.project_dir.join(CONFIG_FILE_NAME));
        let mut settings = if config.exists() {
            Settings::load(&config)
        } else {
            Settings::default()
        };

        if let Some(arb_dir) = &self.arb_dir {
            settings.arb_dir = arb_dir.clone();
        }
        if let Some(template) = &self.template_arb_file {
            settings.template_arb_file = template.clone();
        }
        if let Some(output) = &self.output_localization_file {
            settings.output_localization_file = output.clone();
        }
        if let Some(output_class) = &self.output_class {
            settings.output_class = output_class.clone();
        }
        if !self.preferred_supported_locales.is_empty() {
            settings.preferred_supported_locales = self.preferred_supported_locales.clone();
        }
        if let Some(header) = &self.header {
            settings.header = Some(header.clone());
        }
        if let Some(header_file) = &self.header_file {
            settings.header_file = Some(header_file.clone());
        }
        if let Some(report) = &self.untranslated_messages_file {
            settings.untranslated_messages_file = Some(report.clone());
        }
        settings.relaxed_syntax |= self.relaxed_syntax;
        settings.use_escaping |= self.use_escaping;
        settings.suppress_warnings |= self.suppress_warnings;
        settings.format |= self.format;
        settings.required_resource_attributes |= self.required_resource_attributes;

        settings.rooted_at(&self.project_dir)
    }
}
