//! Lint command implementation.

use anyhow::{anyhow, Context as _, Result};
use clap::ValueEnum;
use iblint_core::{Config, Context, Linter};
use iblint_rules::rules_for;
use std::path::Path;
use std::sync::Arc;

use crate::config_resolver::ConfigSource;
use crate::ReporterKind;

/// Exit code when an error-level violation was found.
const ERROR_EXIT_CODE: i32 = 2;

/// Runs the lint command.
pub fn run(
    path: &Path,
    reporter: Option<ReporterKind>,
    exclude: Vec<String>,
    source: &ConfigSource,
) -> Result<()> {
    let config = load_config(source)?;
    let reporter = reporter.unwrap_or_else(|| configured_reporter(&config));

    let context = Context::new(config, path);
    let rules = rules_for(&context);

    let mut builder = Linter::builder()
        .root(path)
        .config(Arc::clone(&context.config))
        .rules(rules);

    for pattern in exclude {
        builder = builder.exclude(pattern);
    }

    let linter = builder.build().context("Failed to build linter")?;

    tracing::info!(
        "Linting {:?} with rules: {:?}",
        path,
        linter.rule_identifiers()
    );

    let result = linter.lint().context("Lint failed")?;

    super::output::print(&result, reporter)?;

    if result.has_errors() {
        std::process::exit(ERROR_EXIT_CODE);
    }

    Ok(())
}

fn load_config(source: &ConfigSource) -> Result<Config> {
    let Some(path) = source.path() else {
        tracing::debug!("No config found, using defaults");
        return Ok(Config::default());
    };

    Config::from_file(path).map_err(|e| {
        let report = miette::Report::new(e);
        anyhow!("{report:?}").context(format!("Failed to load config: {}", path.display()))
    })
}

fn configured_reporter(config: &Config) -> ReporterKind {
    ReporterKind::from_str(&config.reporter, true).unwrap_or_else(|_| {
        tracing::warn!(
            "Unknown reporter '{}' in config, using xcode",
            config.reporter
        );
        ReporterKind::Xcode
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn reporter_from_config() {
        let config = Config::parse("reporter: json").unwrap();
        assert_eq!(configured_reporter(&config), ReporterKind::Json);

        let config = Config::parse("reporter: Text").unwrap();
        assert_eq!(configured_reporter(&config), ReporterKind::Text);

        assert_eq!(configured_reporter(&Config::default()), ReporterKind::Xcode);
    }

    #[test]
    fn unknown_reporter_falls_back_to_xcode() {
        let config = Config::parse("reporter: checkstyle").unwrap();
        assert_eq!(configured_reporter(&config), ReporterKind::Xcode);
    }

    #[test]
    fn default_source_loads_default_config() {
        let config = load_config(&ConfigSource::Default).unwrap();
        assert!(config.enabled_rules.is_empty());
    }

    #[test]
    fn project_source_is_read() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(".iblinter.yml");
        fs::write(&path, "enabled_rules: [localization]").unwrap();

        let config = load_config(&ConfigSource::Project(path)).unwrap();
        assert_eq!(config.enabled_rules, vec!["localization".to_string()]);
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let source = ConfigSource::Explicit("/nonexistent/.iblinter.yml".into());
        let err = load_config(&source).unwrap_err();
        assert!(err.to_string().contains("Failed to load config"));
    }
}
