//! The generation driver: settings in, Rust source out.

use std::fs;
use std::path::Path;
use std::process::Command;

use tracing::subscriber::{self, NoSubscriber};
use tracing::{debug, info, warn};

use crate::bundle::LoadOptions;
use crate::codegen::{self, Localizations};
use crate::collection::ResourceBundleCollection;
use crate::error::{GenerateError, GenerationWarning};
use crate::locale::LocaleId;
use crate::message::Message;
use crate::parser::ParseOptions;
use crate::report::{GenerationReport, UntranslatedMessages};
use crate::settings::Settings;

/// Everything a generation run produces before anything is written.
#[derive(Debug, Clone)]
pub struct Generated {
    pub localizations: Localizations,
    pub collection: ResourceBundleCollection,
    pub warnings: Vec<GenerationWarning>,
    pub untranslated: UntranslatedMessages,
}

impl Generated {
    pub fn render(&self) -> String {
        codegen::render(&self.localizations)
    }
}

/// Runs the pipeline for one [`Settings`].
#[derive(Debug, Clone)]
pub struct Generator {
    settings: Settings,
}

impl Generator {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Load, validate and model every message without writing any files.
    pub fn build(&self) -> Result<Generated, GenerateError> {
        if self.settings.suppress_warnings {
            subscriber::with_default(NoSubscriber::default(), || self.build_inner())
        } else {
            self.build_inner()
        }
    }

    /// Generate and write the output file and the untranslated report.
    pub fn run(&self) -> Result<GenerationReport, GenerateError> {
        let generated = self.build()?;
        let mut warnings = generated.warnings.clone();

        let output_path = self.settings.output_path();
        write_file(&output_path, &generated.render())?;
        info!(path = %output_path.display(), "wrote localizations");

        if self.settings.format {
            if let Err(message) = format_file(&output_path) {
                let warning = GenerationWarning::FormatFailed { message };
                self.warn(&warning);
                warnings.push(warning);
            }
        }

        match &self.settings.untranslated_messages_file {
            Some(path) => {
                write_file(path, &generated.untranslated.to_json())?;
                debug!(path = %path.display(), "wrote untranslated messages report");
            }
            None if !generated.untranslated.is_empty() && !self.settings.suppress_warnings => {
                warn!(
                    count = generated.untranslated.count(),
                    "some messages are untranslated; set untranslated_messages_file for the full list"
                );
            }
            None => {}
        }

        Ok(GenerationReport {
            output_path,
            locales: generated
                .localizations
                .supported_locales()
                .iter()
                .map(ToString::to_string)
                .collect(),
            messages: generated
                .localizations
                .messages()
                .iter()
                .map(|message| message.key.clone())
                .collect(),
            warnings,
            untranslated: generated.untranslated,
        })
    }

    fn build_inner(&self) -> Result<Generated, GenerateError> {
        let settings = &self.settings;
        let mut warnings: Vec<GenerationWarning> = settings
            .ineffective_settings()
            .into_iter()
            .map(|name| GenerationWarning::IneffectiveSetting { name })
            .collect();
        for warning in &warnings {
            self.warn(warning);
        }

        let load_options = LoadOptions::builder()
            .require_resource_attributes(settings.required_resource_attributes)
            .build();
        let collection = ResourceBundleCollection::load(&settings.arb_dir, &load_options)?;

        let template_path = settings.template_path();
        let template = collection
            .bundle_at(&template_path)
            .ok_or(GenerateError::TemplateNotFound {
                path: template_path,
            })?;
        let template_locale = template.locale().clone();
        debug!(locale = %template_locale, bundles = collection.bundles().len(), "loaded bundles");

        let supported_locales = self.supported_locales(&collection)?;

        let parse_options = ParseOptions::builder()
            .use_escaping(settings.use_escaping)
            .relaxed_syntax(settings.relaxed_syntax)
            .build();
        let messages = template
            .message_keys()
            .map(|key| Message::new(key, &collection, &template_locale, &parse_options))
            .collect::<Result<Vec<_>, _>>()?;
        warnings.extend(messages.iter().flat_map(|message| message.warnings.iter().cloned()));

        for bundle in collection.bundles() {
            if bundle.locale() == &template_locale {
                continue;
            }
            for key in bundle.message_keys().filter(|key| !template.contains(key)) {
                let warning = GenerationWarning::UnknownMessage {
                    locale: bundle.locale().to_string(),
                    key: key.to_string(),
                };
                self.warn(&warning);
                warnings.push(warning);
            }
        }

        let mut untranslated = UntranslatedMessages::default();
        for locale in supported_locales.iter().filter(|locale| **locale != template_locale) {
            for message in messages.iter().filter(|message| !message.is_translated(locale)) {
                untranslated.record(locale.as_str(), &message.key);
            }
        }

        let localizations = Localizations::new(
            settings.output_class.clone(),
            self.header()?,
            template_locale,
            supported_locales,
            messages,
        )?;

        Ok(Generated {
            localizations,
            collection,
            warnings,
            untranslated,
        })
    }

    /// Preferred locales first, then every other locale in bundle order.
    fn supported_locales(
        &self,
        collection: &ResourceBundleCollection,
    ) -> Result<Vec<LocaleId>, GenerateError> {
        let mut locales = Vec::new();
        for tag in &self.settings.preferred_supported_locales {
            let locale = LocaleId::parse(tag)?;
            if collection.bundle_for(&locale).is_none() {
                return Err(GenerateError::UnknownPreferredLocale {
                    locale: locale.to_string(),
                });
            }
            if !locales.contains(&locale) {
                locales.push(locale);
            }
        }
        for locale in collection.locales() {
            if !locales.contains(locale) {
                locales.push(locale.clone());
            }
        }
        Ok(locales)
    }

    /// The `header` setting, or the contents of `header_file`.
    fn header(&self) -> Result<Option<String>, GenerateError> {
        if let Some(header) = &self.settings.header {
            return Ok(Some(header.clone()));
        }
        let Some(path) = &self.settings.header_file else {
            return Ok(None);
        };
        fs::read_to_string(path)
            .map(Some)
            .map_err(|source| GenerateError::Io {
                path: path.clone(),
                source,
            })
    }

    fn warn(&self, warning: &GenerationWarning) {
        if !self.settings.suppress_warnings {
            warn!("{warning}");
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<(), GenerateError> {
    let io_error = |source| GenerateError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    fs::write(path, content).map_err(io_error)
}

/// Run `rustfmt` over a generated file.
fn format_file(path: &Path) -> Result<(), String> {
    let output = Command::new("rustfmt")
        .args(["--edition", "2024"])
        .arg(path)
        .output()
        .map_err(|e| format!("could not run rustfmt: {e}"))?;
    if output.status.success() {
        Ok(())
    } else {
        Err(String::from_utf8_lossy(&output.stderr).trim().to_string())
    }
}

/// Resolve settings for a project directory: `<root>/l10n.json` if present,
/// with relative paths resolved against `root`.
pub fn settings_for_project(root: &Path) -> Settings {
    Settings::discover(root).rooted_at(root)
}
