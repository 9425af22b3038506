//! Linter orchestrating document discovery and rule execution.

use crate::config::Config;
use crate::decoder::{DocumentDecoder, SnapshotDecoder};
use crate::document::{Document, InterfaceBuilderFile};
use crate::rule::{Rule, RuleBox};
use crate::types::{LintResult, Violation};

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Environment variable Xcode sets to the build products root.
pub const BUILD_ROOT_ENV: &str = "BUILD_ROOT";

/// Errors that can occur while setting up or running the linter.
#[derive(Debug, Error)]
pub enum LinterError {
    /// IO error resolving the work directory.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),
}

/// Builder for configuring a [`Linter`].
#[derive(Default)]
pub struct LinterBuilder {
    root: Option<PathBuf>,
    rules: Vec<RuleBox>,
    config: Option<Arc<Config>>,
    decoder: Option<Box<dyn DocumentDecoder>>,
    exclude_patterns: Vec<String>,
}

impl LinterBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the work directory documents are discovered in.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Adds a rule.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds several boxed rules, keeping their order.
    #[must_use]
    pub fn rules(mut self, rules: impl IntoIterator<Item = RuleBox>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: impl Into<Arc<Config>>) -> Self {
        self.config = Some(config.into());
        self
    }

    /// Replaces the default [`SnapshotDecoder`].
    #[must_use]
    pub fn decoder(mut self, decoder: Box<dyn DocumentDecoder>) -> Self {
        self.decoder = Some(decoder);
        self
    }

    /// Adds an exclude pattern on top of the configured ones.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Builds the linter.
    ///
    /// Rules not selected by the configuration are dropped here.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be resolved.
    pub fn build(self) -> Result<Linter, LinterError> {
        let root = self.root.unwrap_or_else(|| PathBuf::from("."));
        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        let config = self.config.unwrap_or_default();

        let mut exclude_patterns = self.exclude_patterns;
        exclude_patterns.extend(config.excluded.iter().cloned());

        let rules = self
            .rules
            .into_iter()
            .filter(|rule| {
                let selected =
                    config.is_rule_selected(rule.identifier(), rule.is_default_enabled());
                if !selected {
                    debug!("Skipping disabled rule: {}", rule.identifier());
                }
                selected
            })
            .collect();

        Ok(Linter {
            root,
            rules,
            config,
            decoder: self
                .decoder
                .unwrap_or_else(|| Box::new(SnapshotDecoder::new())),
            exclude_patterns,
        })
    }
}

/// The main linter.
///
/// Use [`Linter::builder()`] to construct an instance.
pub struct Linter {
    root: PathBuf,
    rules: Vec<RuleBox>,
    config: Arc<Config>,
    decoder: Box<dyn DocumentDecoder>,
    exclude_patterns: Vec<String>,
}

impl Linter {
    /// Creates a new builder for configuring a linter.
    #[must_use]
    pub fn builder() -> LinterBuilder {
        LinterBuilder::new()
    }

    /// Returns the work directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the number of active rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Identifiers of the active rules, in execution order.
    #[must_use]
    pub fn rule_identifiers(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.identifier()).collect()
    }

    /// Discovers and lints every document under the work directory.
    ///
    /// Documents are processed in parallel; violations are grouped per
    /// document in discovery order, and within a document follow rule order
    /// then tree pre-order. Documents that fail to decode are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if document discovery fails.
    pub fn lint(&self) -> Result<LintResult, LinterError> {
        let build_root = std::env::var(BUILD_ROOT_ENV).ok();
        if should_skip_for_interface_builder(&self.config, build_root.as_deref()) {
            info!("Building for Interface Builder, skipping lint");
            return Ok(LintResult::new());
        }

        info!("Starting lint at {:?}", self.root);
        let paths = self.discover_documents()?;
        info!("Found {} documents to lint", paths.len());

        let outcomes: Vec<LintResult> = paths
            .par_iter()
            .map(|path| match self.decoder.decode(path) {
                Ok(document) => LintResult {
                    violations: self.lint_document(&document),
                    files_checked: 1,
                    skipped: 0,
                },
                Err(e) => {
                    warn!("Skipping {}: {}", path.display(), e);
                    LintResult {
                        skipped: 1,
                        ..LintResult::new()
                    }
                }
            })
            .collect();

        let mut result = LintResult::new();
        for outcome in outcomes {
            result.extend(outcome);
        }

        info!(
            "Lint complete: {} violations in {} documents",
            result.violations.len(),
            result.files_checked
        );

        Ok(result)
    }

    /// Lints one decoded document with every active rule.
    #[must_use]
    pub fn lint_document(&self, document: &Document) -> Vec<Violation> {
        debug!("Linting: {}", document.path_string());
        let mut violations = Vec::new();
        for rule in &self.rules {
            violations.extend(rule.validate(document));
        }
        violations
    }

    /// Lists document paths to lint, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if an include pattern is invalid. Unreadable paths
    /// are logged and skipped.
    pub fn discover_documents(&self) -> Result<Vec<PathBuf>, LinterError> {
        let root = glob::Pattern::escape(&self.root.to_string_lossy());
        let patterns: Vec<String> = if self.config.included.is_empty() {
            vec![format!("{root}/**/*")]
        } else {
            self.config
                .included
                .iter()
                .map(|included| {
                    if self.root.join(included).is_dir() {
                        format!("{root}/{}/**/*", included.trim_end_matches('/'))
                    } else {
                        format!("{root}/{included}")
                    }
                })
                .collect()
        };

        let mut files = Vec::new();
        for pattern in &patterns {
            for entry in glob::glob(pattern)? {
                let path = match entry {
                    Ok(path) => path,
                    Err(e) => {
                        warn!("Skipping unreadable path {}: {}", e.path().display(), e);
                        continue;
                    }
                };
                if !path.is_file() || !self.decoder.accepts(&path) {
                    continue;
                }
                if self.should_exclude(&path) {
                    debug!("Excluding: {}", path.display());
                    continue;
                }
                files.push(path);
            }
        }

        files.sort();
        files.dedup();
        Ok(files)
    }

    /// Checks if a path matches an exclude pattern.
    ///
    /// Patterns are matched against the path relative to the work directory,
    /// either as a glob or as a leading directory.
    fn should_exclude(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        let relative_str = relative.to_string_lossy();

        self.exclude_patterns.iter().any(|pattern| {
            let glob_match = glob::Pattern::new(pattern)
                .map(|p| p.matches(&relative_str))
                .unwrap_or(false);
            glob_match || relative.starts_with(pattern.trim_end_matches('/'))
        })
    }
}

/// Whether a run should be skipped because Xcode is building designables.
#[must_use]
pub fn should_skip_for_interface_builder(config: &Config, build_root: Option<&str>) -> bool {
    config.disable_while_building_for_ib
        && build_root.is_some_and(|root| root.contains("IBDesignables"))
}
