//! Configuration types for iblint.
//!
//! The configuration is decoded from `.iblinter.yml`. Every list-valued key
//! tolerates being absent or `null` and decodes to an empty list; every
//! single-valued rule section decodes to `None` when absent or `null`.

use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration for a lint run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Rule identifiers that never run, even when enabled elsewhere.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub disabled_rules: Vec<String>,

    /// Opt-in rule identifiers.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub enabled_rules: Vec<String>,

    /// Glob patterns (relative to the work directory) excluded from linting.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub excluded: Vec<String>,

    /// Glob patterns (relative to the work directory) to lint. Empty means everything.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub included: Vec<String>,

    /// Custom module checks, one entry per module.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub custom_module_rule: Vec<CustomModuleConfig>,

    /// Base class checks, one entry per element class.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub use_base_class_rule: Vec<UseBaseClassConfig>,

    /// Device the documents must be previewed as.
    #[serde(default)]
    pub view_as_device_rule: Option<ViewAsDeviceConfig>,

    /// Trait collection usage settings.
    #[serde(default)]
    pub use_trait_collections_rule: Option<UseTraitCollectionsConfig>,

    /// Theme file used by the `color_theme` rule.
    #[serde(default)]
    pub color_theme_rule: Option<ColorThemeConfig>,

    /// Strings file used by the `localization` rule.
    #[serde(default)]
    pub localization_rule: Option<LocalizationConfig>,

    /// Reporter name (`xcode`, `json`, `text`).
    #[serde(default = "default_reporter")]
    pub reporter: String,

    /// Skip the run when invoked from an Interface Builder designables build.
    #[serde(default = "default_true")]
    pub disable_while_building_for_ib: bool,

    /// Bypass cached results.
    #[serde(default)]
    pub ignore_cache: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            disabled_rules: Vec::new(),
            enabled_rules: Vec::new(),
            excluded: Vec::new(),
            included: Vec::new(),
            custom_module_rule: Vec::new(),
            use_base_class_rule: Vec::new(),
            view_as_device_rule: None,
            use_trait_collections_rule: None,
            color_theme_rule: None,
            localization_rule: None,
            reporter: default_reporter(),
            disable_while_building_for_ib: true,
            ignore_cache: false,
        }
    }
}

impl Config {
    /// Default configuration file name looked up in the project directory.
    pub const FILE_NAME: &'static str = ".iblinter.yml";

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Loads `.iblinter.yml` from the given directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_directory(dir: &Path) -> Result<Self, ConfigError> {
        Self::from_file(&dir.join(Self::FILE_NAME))
    }

    /// Parses configuration from a YAML string.
    ///
    /// An empty document yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid or a known key has the wrong type.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str::<Option<Self>>(content)
            .map(Option::unwrap_or_default)
            .map_err(|e| ConfigError::Parse {
                message: e.to_string(),
            })
    }

    /// Decides whether a rule runs.
    ///
    /// Default rules run unless disabled; opt-in rules run only when listed in
    /// `enabled_rules`. `disabled_rules` always wins.
    #[must_use]
    pub fn is_rule_selected(&self, identifier: &str, default_enabled: bool) -> bool {
        let enabled = default_enabled || self.enabled_rules.iter().any(|r| r == identifier);
        enabled && !self.disabled_rules.iter().any(|r| r == identifier)
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn default_reporter() -> String {
    "xcode".to_string()
}

fn default_true() -> bool {
    true
}

/// Settings for the `color_theme` rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorThemeConfig {
    /// Theme file path, relative to the work directory.
    pub path: String,

    /// Also flag hard-coded colour properties.
    #[serde(default, rename = "enforce_component_theming")]
    pub enforce: bool,
}

/// Settings for the `localization` rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizationConfig {
    /// Strings file path, relative to the work directory.
    pub path: String,

    /// Check every `locKey*` attribute of a view instead of stopping at the first failure.
    #[serde(default)]
    pub check_all_keys: bool,
}

/// Module that custom classes are expected to live in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomModuleConfig {
    /// Module name.
    pub module: String,
    /// Paths of sources belonging to the module.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub included: Vec<String>,
    /// Paths excluded from the module.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub excluded: Vec<String>,
}

/// Base classes allowed for an element class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UseBaseClassConfig {
    /// Element class, e.g. `UILabel`.
    pub element_class: String,
    /// Allowed custom classes.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub base_classes: Vec<String>,
}

/// Device the documents are expected to be previewed as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewAsDeviceConfig {
    /// Interface builder device identifier.
    pub device_id: String,
}

/// Trait collection usage settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UseTraitCollectionsConfig {
    /// Whether documents must use trait variations.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    #[diagnostic(code(iblint::config::io))]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    #[diagnostic(
        code(iblint::config::parse),
        help("lists must be sequences of strings and rule sections must be mappings")
    )]
    Parse {
        /// Parse error message.
        message: String,
    },
}
