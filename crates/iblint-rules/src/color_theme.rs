//! Rule checking colour and theme attributes against a theme file.
//!
//! # Theme file
//!
//! A YAML mapping with four sections. Only keys are read; they are
//! authored in snake_case and normalised to camelCase because the view
//! attributes under test are camelCase.
//!
//! ```yaml
//! application_theme:
//!   primary_brand: "#D0021B"
//! groups:
//!   dark: {}
//! controllers:
//!   settings: {}
//! components:
//!   label:
//!     title_large: {}
//!   large_button:
//!     primary_filled: {}
//! ```
//!
//! # Checked attributes
//!
//! - `*ColorName`: must name an `application_theme` colour; dotted values
//!   are the legacy format.
//! - `themeParent`: must name a group or a controller.
//! - `themeStyle`: must name a style of the component mapped to the view's
//!   custom class in [`STYLE_POLICIES`].
//!
//! With `enforce_component_theming`, populated colour properties are also
//! reported as hard-coded.

use iblint_core::text::snake_to_camel_case;
use iblint_core::{
    ConfigurableRule, Context, InterfaceBuilderFile, Rule, RuleSetup, SetupDiagnostic,
    UserDefinedRuntimeAttribute, ViewNode, Violation,
};
use serde_yaml::Value;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::debug;

/// Rule identifier for color-theme.
pub const IDENTIFIER: &str = "color_theme";

const APPLICATION_THEME: &str = "application_theme";
const GROUPS: &str = "groups";
const CONTROLLERS: &str = "controllers";
const COMPONENTS: &str = "components";

/// How a `themeStyle` value is compared with a component's styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleMatch {
    /// The value must equal a style name.
    Exact,
    /// The value must be contained in a style name, ignoring case.
    CaseInsensitiveContains,
}

impl StyleMatch {
    /// Whether `value` is accepted by any of `styles`.
    #[must_use]
    pub fn accepts(self, styles: &HashSet<String>, value: &str) -> bool {
        match self {
            Self::Exact => styles.contains(value),
            Self::CaseInsensitiveContains => {
                let needle = value.to_lowercase();
                styles.iter().any(|s| s.to_lowercase().contains(&needle))
            }
        }
    }
}

/// Maps a custom view class to the theme component its styles come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StylePolicy {
    /// Custom class as written in the document.
    pub custom_class: &'static str,
    /// Component key in the theme file, after camelCase normalisation.
    pub component: &'static str,
    /// Comparison strategy.
    pub matching: StyleMatch,
}

/// Themed components whose `themeStyle` can be checked.
///
/// A view with a `themeStyle` and a custom class missing from this table is
/// reported, so new themed components must be added here explicitly.
pub const STYLE_POLICIES: &[StylePolicy] = &[
    StylePolicy {
        custom_class: "CustomLabel",
        component: "label",
        matching: StyleMatch::Exact,
    },
    StylePolicy {
        custom_class: "LargeButton",
        component: "largeButton",
        matching: StyleMatch::CaseInsensitiveContains,
    },
];

/// Returns the style policy for a custom class.
#[must_use]
pub fn style_policy(custom_class: &str) -> Option<&'static StylePolicy> {
    STYLE_POLICIES.iter().find(|p| p.custom_class == custom_class)
}

/// Errors while loading a theme file.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// IO error reading the theme file.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The theme file is not valid YAML.
    #[error("{0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The top level of the theme file is not a mapping.
    #[error("theme root is not a mapping")]
    NotAMapping,
}

/// Lookup tables built from a theme file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeTables {
    /// Colour names from `application_theme`.
    pub application_colors: HashSet<String>,
    /// Names from `groups`.
    pub groups: HashSet<String>,
    /// Names from `controllers`.
    pub controllers: HashSet<String>,
    /// Style names per component, from `components`.
    pub component_styles: HashMap<String, HashSet<String>>,
}

impl ThemeTables {
    /// Reads and parses a theme file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ThemeError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses theme YAML.
    ///
    /// Missing sections yield empty tables. The `components` section is
    /// ignored as a whole if any component is not a mapping of styles.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid or its root is not a mapping.
    pub fn parse(content: &str) -> Result<Self, ThemeError> {
        let root: Value = serde_yaml::from_str(content)?;
        if !root.is_mapping() {
            return Err(ThemeError::NotAMapping);
        }

        Ok(Self {
            application_colors: section_keys(root.get(APPLICATION_THEME)),
            groups: section_keys(root.get(GROUPS)),
            controllers: section_keys(root.get(CONTROLLERS)),
            component_styles: component_styles(root.get(COMPONENTS)),
        })
    }

    /// Whether `name` is a known group or controller.
    #[must_use]
    pub fn is_parent_theme(&self, name: &str) -> bool {
        self.groups.contains(name) || self.controllers.contains(name)
    }

    /// Styles of a component, empty if the component is unknown.
    #[must_use]
    pub fn styles(&self, component: &str) -> Option<&HashSet<String>> {
        self.component_styles.get(component)
    }
}

fn normalized_keys(mapping: &serde_yaml::Mapping) -> HashSet<String> {
    mapping
        .keys()
        .filter_map(Value::as_str)
        .map(snake_to_camel_case)
        .collect()
}

fn section_keys(section: Option<&Value>) -> HashSet<String> {
    section
        .and_then(Value::as_mapping)
        .map(normalized_keys)
        .unwrap_or_default()
}

fn component_styles(section: Option<&Value>) -> HashMap<String, HashSet<String>> {
    let Some(components) = section.and_then(Value::as_mapping) else {
        return HashMap::new();
    };

    let mut styles = HashMap::new();
    for (name, entries) in components {
        let (Some(name), Some(entries)) = (name.as_str(), entries.as_mapping()) else {
            return HashMap::new();
        };
        styles.insert(snake_to_camel_case(name), normalized_keys(entries));
    }
    styles
}

/// Checks colour and theme attributes against a theme file.
#[derive(Debug, Clone, Default)]
pub struct ColorThemeRule {
    enforce_component_theming: bool,
    tables: ThemeTables,
}

impl ColorThemeRule {
    /// Creates the rule from prebuilt tables.
    #[must_use]
    pub fn new(tables: ThemeTables, enforce_component_theming: bool) -> Self {
        Self {
            enforce_component_theming,
            tables,
        }
    }

    fn check_color_name(
        &self,
        view_name: &str,
        attribute: &UserDefinedRuntimeAttribute,
        path: &str,
    ) -> Option<Violation> {
        let Some(value) = attribute.string_value() else {
            return Some(Violation::error(path, format!("{view_name} invalid color key")));
        };
        if value.contains('.') {
            Some(Violation::error(
                path,
                format!("{view_name} legacy color format: {value}"),
            ))
        } else if self.tables.application_colors.contains(value) {
            None
        } else {
            Some(Violation::error(
                path,
                format!("{view_name} unknown color: {value}"),
            ))
        }
    }

    fn check_theme_parent(
        &self,
        view_name: &str,
        attribute: &UserDefinedRuntimeAttribute,
        path: &str,
    ) -> Option<Violation> {
        match attribute.string_value() {
            Some(value) if self.tables.is_parent_theme(value) => None,
            Some(value) => Some(Violation::error(
                path,
                format!("{view_name} unknown parent theme: {value}"),
            )),
            None => Some(Violation::error(
                path,
                format!("{view_name} invalid parent theme"),
            )),
        }
    }

    fn check_theme_style(
        &self,
        view: &ViewNode,
        attribute: &UserDefinedRuntimeAttribute,
        path: &str,
    ) -> Option<Violation> {
        let view_name = view.display_name();
        let Some(value) = attribute.string_value() else {
            // Same message as themeParent.
            return Some(Violation::error(
                path,
                format!("{view_name} invalid parent theme"),
            ));
        };
        let custom_class = view.custom_class.as_deref()?;

        let Some(policy) = style_policy(custom_class) else {
            return Some(Violation::error(
                path,
                format!("Theme style check not implemented for class: {custom_class}"),
            ));
        };

        let accepted = self
            .tables
            .styles(policy.component)
            .is_some_and(|styles| policy.matching.accepts(styles, value));
        if accepted {
            None
        } else {
            Some(Violation::error(
                path,
                format!("{view_name} unknown theme style: {value}"),
            ))
        }
    }
}

impl Rule for ColorThemeRule {
    fn identifier(&self) -> &'static str {
        IDENTIFIER
    }

    fn description(&self) -> &'static str {
        "Display error when color attribute does not correspond to a Theme file color"
    }

    fn check_view(&self, view: &ViewNode, file: &dyn InterfaceBuilderFile) -> Vec<Violation> {
        if self.tables.component_styles.is_empty() {
            return Vec::new();
        }

        let path = file.path_string();
        let view_name = view.display_name();
        let mut violations = Vec::new();

        if self.enforce_component_theming {
            for (property, _) in view.direct_colors() {
                violations.push(Violation::warning(
                    path,
                    format!("{view_name} {property} is hard-coded"),
                ));
            }
        }

        for attribute in &view.user_defined_runtime_attributes {
            let key_path = attribute.key_path.as_str();
            let violation = if key_path.ends_with("ColorName") {
                self.check_color_name(view_name, attribute, path)
            } else if key_path == "themeParent" {
                self.check_theme_parent(view_name, attribute, path)
            } else if key_path == "themeStyle" {
                self.check_theme_style(view, attribute, path)
            } else {
                None
            };
            violations.extend(violation);
        }

        violations
    }
}

impl ConfigurableRule for ColorThemeRule {
    const IDENTIFIER: &'static str = IDENTIFIER;

    fn from_context(context: &Context) -> RuleSetup<Self> {
        let Some(config) = context.config.color_theme_rule.as_ref() else {
            return RuleSetup::ready(Self::default());
        };

        let path = context.resolve(&config.path);
        match ThemeTables::load(&path) {
            Ok(tables) => {
                debug!(
                    "Loaded theme {}: {} colors, {} components",
                    path.display(),
                    tables.application_colors.len(),
                    tables.component_styles.len()
                );
                RuleSetup::ready(Self::new(tables, config.enforce))
            }
            Err(e) => RuleSetup::degraded(
                Self::new(ThemeTables::default(), config.enforce),
                SetupDiagnostic {
                    rule: IDENTIFIER,
                    path,
                    reason: e.to_string(),
                },
            ),
        }
    }
}
