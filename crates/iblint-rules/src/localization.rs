//! Rule checking localization keys against a strings file.
//!
//! Keys are extracted from lines shaped like `"key" = "value";`. The key
//! pattern is greedy, so a value containing both a quote and an `=` yields
//! a key spanning into the value. Existing strings files rely on this exact
//! behaviour, so the pattern is kept as is.
//!
//! An empty key set disables the checks.
//!
//! Only the first failing `locKey*` attribute of a view is reported unless
//! `check_all_keys` is set.

use iblint_core::text::capture_matches;
use iblint_core::{
    ConfigurableRule, Context, InterfaceBuilderFile, Rule, RuleSetup, SetupDiagnostic, ViewNode,
    Violation,
};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// Rule identifier for localization.
pub const IDENTIFIER: &str = "localization";

/// Pattern whose first group is a declared key.
pub const KEY_PATTERN: &str = r#""(.*)".*=.*"#;

const KEY_PATH_PREFIX: &str = "locKey";

/// Errors while loading a strings file.
#[derive(Debug, thiserror::Error)]
pub enum StringsError {
    /// IO error reading the strings file.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The key pattern failed to compile.
    #[error("{0}")]
    Pattern(#[from] regex::Error),
}

/// Extracts declared keys from strings file content.
///
/// # Errors
///
/// Returns an error if the key pattern cannot be compiled.
pub fn parse_keys(content: &str) -> Result<HashSet<String>, StringsError> {
    Ok(capture_matches(content, KEY_PATTERN)?.into_iter().collect())
}

/// Reads a strings file and extracts its keys.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_keys(path: &Path) -> Result<HashSet<String>, StringsError> {
    let content = std::fs::read_to_string(path)?;
    parse_keys(&content)
}

/// Checks `locKey*` attributes against the keys of a strings file.
#[derive(Debug, Clone, Default)]
pub struct LocalizationRule {
    strings: HashSet<String>,
    check_all_keys: bool,
}

impl LocalizationRule {
    /// Creates the rule from a key set.
    #[must_use]
    pub fn new(strings: HashSet<String>) -> Self {
        Self {
            strings,
            check_all_keys: false,
        }
    }

    /// Reports every failing attribute of a view instead of the first one.
    #[must_use]
    pub fn check_all_keys(mut self, check_all: bool) -> Self {
        self.check_all_keys = check_all;
        self
    }
}

impl Rule for LocalizationRule {
    fn identifier(&self) -> &'static str {
        IDENTIFIER
    }

    fn description(&self) -> &'static str {
        "Display error when localization string attribute does not correspond to an existing string of Localizable.strings file"
    }

    fn check_view(&self, view: &ViewNode, file: &dyn InterfaceBuilderFile) -> Vec<Violation> {
        if self.strings.is_empty() {
            return Vec::new();
        }

        let path = file.path_string();
        let view_name = view.display_name();
        let mut violations = Vec::new();

        for attribute in &view.user_defined_runtime_attributes {
            if !attribute.key_path.starts_with(KEY_PATH_PREFIX) {
                continue;
            }
            let violation = match attribute.string_value() {
                Some(value) if self.strings.contains(value) => continue,
                Some(value) => Violation::error(
                    path,
                    format!("{view_name} unknown localization key: {value}"),
                ),
                None => Violation::error(path, format!("{view_name} invalid localization key")),
            };
            violations.push(violation);
            if !self.check_all_keys {
                break;
            }
        }

        violations
    }
}

impl ConfigurableRule for LocalizationRule {
    const IDENTIFIER: &'static str = IDENTIFIER;

    fn from_context(context: &Context) -> RuleSetup<Self> {
        let Some(config) = context.config.localization_rule.as_ref() else {
            return RuleSetup::ready(Self::default());
        };

        let path = context.resolve(&config.path);
        match load_keys(&path) {
            Ok(strings) => {
                debug!("Loaded {} keys from {}", strings.len(), path.display());
                RuleSetup::ready(Self::new(strings).check_all_keys(config.check_all_keys))
            }
            Err(e) => RuleSetup::degraded(
                Self::default().check_all_keys(config.check_all_keys),
                SetupDiagnostic {
                    rule: IDENTIFIER,
                    path,
                    reason: e.to_string(),
                },
            ),
        }
    }
}
