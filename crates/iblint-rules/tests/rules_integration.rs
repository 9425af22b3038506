//! End-to-end tests: configuration on disk, rules built from it, documents
//! decoded from snapshots and linted.

use iblint_core::{Config, Context, Linter, Severity, Violation};
use iblint_rules::rules_for;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

const THEME: &str = r##"
application_theme:
  primary_brand: "#D0021B"
  text_secondary: "#4A4A4A"
groups:
  dark: {}
controllers:
  settings: {}
components:
  label:
    titleLarge: {}
  large_button:
    Primary_Filled: {}
"##;

const STRINGS: &str = r#"
"welcome_title" = "Welcome";
"settings.title" = "Settings";
"#;

const CONFIG: &str = r#"
enabled_rules:
  - color_theme
  - localization
excluded:
  - Pods
color_theme_rule:
  path: Resources/theme.yml
localization_rule:
  path: Resources/Localizable.strings
"#;

const ONBOARDING_XIB: &str = r#"{
  "views": [
    {
      "element": "view",
      "subviews": [
        {
          "element": "label",
          "customClass": "CustomLabel",
          "userDefinedRuntimeAttributes": [
            {"keyPath": "textColorName", "value": "primaryBrand"},
            {"keyPath": "themeStyle", "value": "titleLarge"},
            {"keyPath": "locKey", "value": "welcome_title"}
          ]
        },
        {
          "element": "button",
          "customClass": "LargeButton",
          "userDefinedRuntimeAttributes": [
            {"keyPath": "backgroundColorName", "value": "brand.primary"},
            {"keyPath": "themeStyle", "value": "primary"},
            {"keyPath": "locKeyTitle", "value": "missing_title"}
          ]
        }
      ]
    }
  ]
}"#;

const MAIN_STORYBOARD: &str = r#"{
  "scenes": [
    {
      "id": "s1",
      "viewController": {
        "element": "viewController",
        "rootView": {
          "element": "view",
          "userDefinedRuntimeAttributes": [
            {"keyPath": "themeParent", "value": "light"}
          ],
          "subviews": [
            {
              "element": "switch",
              "userDefinedRuntimeAttributes": [
                {"keyPath": "onTintColorName", "value": "accent"}
              ]
            }
          ]
        }
      }
    },
    {"id": "s2"}
  ]
}"#;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    write(root, ".iblinter.yml", CONFIG);
    write(root, "Resources/theme.yml", THEME);
    write(root, "Resources/Localizable.strings", STRINGS);
    write(root, "App/Onboarding.xib.json", ONBOARDING_XIB);
    write(root, "App/Main.storyboard.json", MAIN_STORYBOARD);
    write(root, "Pods/Vendor/Vendor.xib.json", ONBOARDING_XIB);
    tmp
}

fn lint(root: &Path) -> Vec<Violation> {
    let config = Config::from_directory(root).unwrap();
    let context = Context::new(config, root);
    let linter = Linter::builder()
        .root(root)
        .config(Arc::clone(&context.config))
        .rules(rules_for(&context))
        .build()
        .unwrap();
    linter.lint().unwrap().violations
}

fn messages(violations: &[Violation]) -> Vec<String> {
    violations.iter().map(|v| v.message.clone()).collect()
}

#[test]
fn lints_project_in_discovery_and_rule_order() {
    let tmp = project();
    let root = tmp.path();
    let violations = lint(root);

    assert_eq!(
        messages(&violations),
        vec![
            // App/Main.storyboard.json: color_theme, then localization (nothing)
            "UIView unknown parent theme: light",
            "UISwitch unknown color: accent",
            // App/Onboarding.xib.json: color_theme
            "LargeButton legacy color format: brand.primary",
            // App/Onboarding.xib.json: localization
            "LargeButton unknown localization key: missing_title",
        ]
    );
    assert!(violations.iter().all(|v| v.level == Severity::Error));

    let storyboard = root.join("App/Main.storyboard.json");
    assert_eq!(violations[0].path_string, storyboard.to_string_lossy());
}

#[test]
fn missing_auxiliary_files_degrade_to_no_op() {
    let tmp = project();
    let root = tmp.path();
    fs::remove_file(root.join("Resources/theme.yml")).unwrap();
    fs::remove_file(root.join("Resources/Localizable.strings")).unwrap();

    let config = Config::from_directory(root).unwrap();
    let context = Context::new(config, root);
    let rules = rules_for(&context);
    assert_eq!(rules.len(), 2);

    assert!(lint(root).is_empty());
}

#[test]
fn unselected_rules_report_nothing() {
    let tmp = project();
    let root = tmp.path();
    write(
        root,
        ".iblinter.yml",
        &CONFIG.replace("  - localization\n", ""),
    );

    let violations = lint(root);
    assert!(!violations.is_empty());
    assert!(violations
        .iter()
        .all(|v| !v.message.contains("localization key")));
}

#[test]
fn unconfigured_rules_are_no_ops() {
    let tmp = project();
    let root = tmp.path();
    write(
        root,
        ".iblinter.yml",
        "enabled_rules: [color_theme, localization]\n",
    );

    assert!(lint(root).is_empty());
}

#[test]
fn enforcement_reports_hard_coded_colors() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    write(root, "theme.yml", THEME);
    write(
        root,
        ".iblinter.yml",
        "enabled_rules: [color_theme]\ncolor_theme_rule:\n  path: theme.yml\n  enforce_component_theming: true\n",
    );
    write(
        root,
        "Card.xib.json",
        r#"{"views": [{"element": "label", "textColor": {"systemColor": "labelColor"}}]}"#,
    );

    let violations = lint(root);
    assert_eq!(messages(&violations), vec!["UILabel textColor is hard-coded"]);
    assert_eq!(violations[0].level, Severity::Warning);
}
