//! Init command implementation.

use anyhow::{bail, Result};
use iblint_core::Config;
use std::path::Path;

const DEFAULT_CONFIG: &str = r"# iblint configuration

# Rules to run. Every built-in rule is opt-in.
enabled_rules:
  - color_theme
  - localization

# Rules to turn off, even if enabled above.
disabled_rules: []

# Paths to lint, relative to the work directory (default: everything).
# included:
#   - App

# Paths to skip.
excluded:
  - Pods
  - Carthage

# Reporter: xcode, json or text.
reporter: xcode

# Skip linting while Xcode builds designables.
disable_while_building_for_ib: true

color_theme_rule:
  path: Resources/theme.yml
  # Report hard-coded colour properties.
  enforce_component_theming: false

localization_rule:
  path: Resources/Localizable.strings
  # Report every failing locKey attribute of a view, not just the first.
  check_all_keys: false
";

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new(Config::FILE_NAME);

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created {}", Config::FILE_NAME);
    println!("\nNext steps:");
    println!("  1. Point color_theme_rule and localization_rule at your files");
    println!("  2. Run: iblint lint");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_is_a_valid_config() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.enabled_rules, vec!["color_theme", "localization"]);
        assert_eq!(config.excluded, vec!["Pods", "Carthage"]);
        assert_eq!(config.reporter, "xcode");
        assert!(config.disable_while_building_for_ib);

        let theme = config.color_theme_rule.unwrap();
        assert_eq!(theme.path, "Resources/theme.yml");
        assert!(!theme.enforce);

        let localization = config.localization_rule.unwrap();
        assert!(!localization.check_all_keys);
    }
}
