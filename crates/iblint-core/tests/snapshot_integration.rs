//! Integration test: snapshot fixtures decoded and walked through the Linter.
//!
//! Uses fixture files under `tests/fixtures/snapshots/`.

use iblint_core::{
    walk, Color, Config, Document, DocumentDecoder, InterfaceBuilderFile, Linter, Rule,
    SnapshotDecoder, ViewKind, ViewNode, Violation,
};
use std::path::PathBuf;

fn fixture_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/snapshots")
}

/// Reports the id of every view it visits.
struct VisitOrder;

impl Rule for VisitOrder {
    fn identifier(&self) -> &'static str {
        "visit_order"
    }

    fn is_default_enabled(&self) -> bool {
        true
    }

    fn check_view(&self, view: &ViewNode, file: &dyn InterfaceBuilderFile) -> Vec<Violation> {
        let id = view.id.as_deref().unwrap_or("?");
        vec![Violation::warning(file.path_string(), id)]
    }
}

fn ids(violations: &[Violation]) -> Vec<&str> {
    violations.iter().map(|v| v.message.as_str()).collect()
}

#[test]
fn decodes_xib_fixture() {
    let decoder = SnapshotDecoder::new();
    let path = fixture_root().join("Profile.xib.json");
    let Document::Xib(doc) = decoder.decode(&path).expect("fixture should decode") else {
        panic!("expected a xib document");
    };

    assert_eq!(doc.path_string(), path.to_string_lossy());
    let roots: Vec<&ViewNode> = walk::xib_roots(&doc).collect();
    assert_eq!(roots.len(), 2);
    assert_eq!(roots[1].kind, ViewKind::Other);

    let name = &roots[0].subviews[1].subviews[0];
    assert_eq!(name.display_name(), "CustomLabel");
    assert_eq!(
        name.direct_colors(),
        vec![(
            "textColor",
            &Color::Named {
                name: "primaryText".to_string()
            }
        )]
    );
}

#[test]
fn lints_fixtures_in_pre_order() {
    let linter = Linter::builder()
        .root(fixture_root())
        .config(Config::default())
        .rule(VisitOrder)
        .build()
        .expect("linter should build");

    let result = linter.lint().expect("lint should succeed");

    assert_eq!(result.files_checked, 2);
    assert_eq!(result.skipped, 1);
    assert_eq!(
        ids(&result.violations),
        vec![
            // Nested/Main.storyboard.json
            "login-root",
            "email",
            "submit",
            "settings-table",
            // Profile.xib.json
            "root",
            "avatar",
            "details",
            "name",
            "notifications",
            "standalone",
        ]
    );
}

#[test]
fn excluded_directories_are_not_linted() {
    let config = Config::parse("excluded:\n  - Nested\n").expect("config should parse");
    let linter = Linter::builder()
        .root(fixture_root())
        .config(config)
        .rule(VisitOrder)
        .build()
        .expect("linter should build");

    let documents = linter.discover_documents().expect("discovery should succeed");
    assert_eq!(
        documents,
        vec![
            fixture_root().join("Broken.xib.json"),
            fixture_root().join("Profile.xib.json"),
        ]
    );
}
