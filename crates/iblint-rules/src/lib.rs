//! # iblint-rules
//!
//! Built-in lint rules for iblint.
//!
//! ## Available Rules
//!
//! | Identifier | Checks |
//! |------------|--------|
//! | `color_theme` | `*ColorName`, `themeParent` and `themeStyle` attributes against a theme file |
//! | `localization` | `locKey*` attributes against a strings file |
//!
//! Both rules are opt-in: list them under `enabled_rules` in `.iblinter.yml`.
//!
//! ## Usage
//!
//! ```ignore
//! use iblint_core::{Config, Context, Linter};
//! use iblint_rules::rules_for;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! let context = Context::new(Config::from_directory(Path::new("."))?, ".");
//! let linter = Linter::builder()
//!     .root(".")
//!     .config(Arc::clone(&context.config))
//!     .rules(rules_for(&context))
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod color_theme;
pub mod localization;
mod registry;

pub use color_theme::{
    ColorThemeRule, StyleMatch, StylePolicy, ThemeError, ThemeTables, STYLE_POLICIES,
};
pub use localization::{LocalizationRule, StringsError};
pub use registry::{all_rule_ids, all_rules, rules_for};

/// Re-export core types for convenience.
pub use iblint_core::{Rule, Severity, Violation};
