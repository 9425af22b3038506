//! # iblint-core
//!
//! Core framework for linting interface-builder documents (xib and
//! storyboard view hierarchies).
//!
//! This crate provides the foundational traits and types for building
//! interface-builder linters. It includes:
//!
//! - [`Config`] decoded from `.iblinter.yml`
//! - [`Rule`] trait and the [`RuleSetup`] construction outcome
//! - [`walk`] for the shared pre-order traversal of view trees
//! - [`Linter`] for orchestrating lint execution
//! - [`Violation`] for representing lint findings
//!
//! ## Example
//!
//! ```ignore
//! use iblint_core::{Config, Linter};
//!
//! let linter = Linter::builder()
//!     .root(".")
//!     .config(Config::default())
//!     .rule(MyRule)
//!     .build()?;
//!
//! let result = linter.lint()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod context;
mod decoder;
mod document;
mod linter;
mod rule;
mod types;

pub mod text;
pub mod walk;

pub use config::{
    ColorThemeConfig, Config, ConfigError, CustomModuleConfig, LocalizationConfig,
    UseBaseClassConfig, UseTraitCollectionsConfig, ViewAsDeviceConfig,
};
pub use context::Context;
pub use decoder::{DecodeError, DocumentDecoder, SnapshotDecoder};
pub use document::{
    AttributeValue, Color, Document, DocumentKind, InterfaceBuilderFile, Scene,
    StoryboardDocument, UserDefinedRuntimeAttribute, ViewController, ViewKind, ViewNode,
    XibDocument,
};
pub use linter::{should_skip_for_interface_builder, Linter, LinterBuilder, LinterError};
pub use rule::{ConfigurableRule, Rule, RuleBox, RuleSetup, SetupDiagnostic};
pub use types::{LintResult, Severity, Violation};
