//! Generator settings and the optional `l10n.json` configuration file.

use std::fs;
use std::path::{Path, PathBuf};

use bon::Builder;
use serde::Deserialize;
use tracing::warn;

/// Everything that controls a generation run.
///
/// Keys in `l10n.json` use the field names below. Missing keys take their
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Builder)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Directory holding the `*.arb` files.
    #[builder(default = PathBuf::from("lib/l10n"), into)]
    pub arb_dir: PathBuf,
    /// File name (relative to `arb_dir`) of the template bundle.
    #[builder(default = PathBuf::from("app_en.arb"), into)]
    pub template_arb_file: PathBuf,
    /// Output path (relative to `arb_dir` unless absolute).
    #[builder(default = PathBuf::from("app_localizations.rs"), into)]
    pub output_localization_file: PathBuf,
    /// Name of the generated trait.
    #[builder(default = "AppLocalizations".to_string(), into)]
    pub output_class: String,
    /// Locales listed first in `SUPPORTED_LOCALES`, in this order.
    #[builder(default)]
    pub preferred_supported_locales: Vec<String>,
    /// Text prepended to the generated file.
    pub header: Option<String>,
    /// File whose contents are prepended to the generated file.
    pub header_file: Option<PathBuf>,
    #[builder(default)]
    pub use_deferred_loading: bool,
    /// Treat braces that cannot start an expression as literal text.
    #[builder(default)]
    pub relaxed_syntax: bool,
    /// Recognize apostrophe escapes in messages.
    #[builder(default)]
    pub use_escaping: bool,
    #[builder(default)]
    pub synthetic_package: bool,
    /// Do not log warnings.
    #[builder(default)]
    pub suppress_warnings: bool,
    #[builder(default)]
    pub use_named_parameters: bool,
    #[builder(default)]
    pub nullable_getter: bool,
    /// Run rustfmt over the output.
    #[builder(default)]
    pub format: bool,
    /// Every message must have an `@key` metadata entry.
    #[builder(default)]
    pub required_resource_attributes: bool,
    /// Where to write the JSON report of untranslated messages.
    pub untranslated_messages_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Name of the configuration file looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "l10n.json";

impl Settings {
    /// Read settings from a JSON configuration file.
    ///
    /// A missing, unreadable or invalid file logs a warning and yields the
    /// defaults.
    pub fn load(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not read configuration, using defaults");
                return Self::default();
            }
        };
        match serde_json::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "invalid configuration, using defaults");
                Self::default()
            }
        }
    }

    /// Settings from `<root>/l10n.json` if it exists, else the defaults.
    pub fn discover(root: &Path) -> Self {
        let path = root.join(CONFIG_FILE_NAME);
        if path.exists() {
            Self::load(&path)
        } else {
            Self::default()
        }
    }

    /// Resolve relative paths against `root`.
    #[must_use]
    pub fn rooted_at(mut self, root: &Path) -> Self {
        self.arb_dir = root.join(&self.arb_dir);
        if let Some(header_file) = &self.header_file {
            self.header_file = Some(self.arb_dir.join(header_file));
        }
        if let Some(report) = &self.untranslated_messages_file {
            self.untranslated_messages_file = Some(root.join(report));
        }
        self
    }

    /// Path of the template bundle.
    pub fn template_path(&self) -> PathBuf {
        self.arb_dir.join(&self.template_arb_file)
    }

    /// Path of the generated file.
    pub fn output_path(&self) -> PathBuf {
        self.arb_dir.join(&self.output_localization_file)
    }

    /// Settings that are accepted for compatibility but do nothing here.
    pub fn ineffective_settings(&self) -> Vec<&'static str> {
        [
            ("use_deferred_loading", self.use_deferred_loading),
            ("synthetic_package", self.synthetic_package),
            ("use_named_parameters", self.use_named_parameters),
            ("nullable_getter", self.nullable_getter),
        ]
        .into_iter()
        .filter(|(_, enabled)| *enabled)
        .map(|(name, _)| name)
        .collect()
    }
}
