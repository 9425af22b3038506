//! Rule traits for defining lint rules.

use crate::context::Context;
use crate::document::{Document, InterfaceBuilderFile, StoryboardDocument, ViewNode, XibDocument};
use crate::types::Violation;
use crate::walk;
use std::path::PathBuf;
use tracing::warn;

/// A lint rule over interface-builder documents.
///
/// Structural rules only implement [`Rule::check_view`], which reports the
/// violations of a single node; the provided `validate_*` methods walk the
/// document in pre-order and concatenate the results. Validation must be
/// pure: the same document always yields the same violations in the same
/// order.
///
/// # Example
///
/// ```ignore
/// use iblint_core::{InterfaceBuilderFile, Rule, ViewNode, Violation};
///
/// pub struct NoCustomClass;
///
/// impl Rule for NoCustomClass {
///     fn identifier(&self) -> &'static str { "no_custom_class" }
///     fn description(&self) -> &'static str { "Forbids custom classes" }
///
///     fn check_view(&self, view: &ViewNode, file: &dyn InterfaceBuilderFile) -> Vec<Violation> {
///         view.custom_class
///             .iter()
///             .map(|c| Violation::error(file.path_string(), format!("custom class {c}")))
///             .collect()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the stable snake_case identifier (e.g., "color_theme").
    fn identifier(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Whether the rule runs without being listed in `enabled_rules`.
    fn is_default_enabled(&self) -> bool {
        false
    }

    /// Returns the violations of `view` itself, ignoring its subviews.
    fn check_view(&self, view: &ViewNode, file: &dyn InterfaceBuilderFile) -> Vec<Violation>;

    /// Validates a xib document.
    fn validate_xib(&self, xib: &XibDocument) -> Vec<Violation> {
        walk::walk_xib(xib, &mut |view: &ViewNode| self.check_view(view, xib))
    }

    /// Validates a storyboard document.
    fn validate_storyboard(&self, storyboard: &StoryboardDocument) -> Vec<Violation> {
        walk::walk_storyboard(storyboard, &mut |view: &ViewNode| {
            self.check_view(view, storyboard)
        })
    }

    /// Validates any document.
    fn validate(&self, document: &Document) -> Vec<Violation> {
        walk::walk_document(document, &mut |view: &ViewNode| {
            self.check_view(view, document)
        })
    }
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

/// Why a rule fell back to doing nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{rule}: cannot read file at path {}: {reason}", .path.display())]
pub struct SetupDiagnostic {
    /// Identifier of the degraded rule.
    pub rule: &'static str,
    /// Auxiliary file that failed to load.
    pub path: PathBuf,
    /// Failure description.
    pub reason: String,
}

/// Outcome of constructing a rule from a [`Context`].
///
/// Loading auxiliary data never aborts a run: a rule that cannot load it is
/// still returned, with empty tables, alongside a diagnostic.
#[derive(Debug)]
pub struct RuleSetup<R> {
    /// The constructed, possibly degraded, rule.
    pub rule: R,
    /// Set when the rule could not load its auxiliary data.
    pub diagnostic: Option<SetupDiagnostic>,
}

impl<R> RuleSetup<R> {
    /// A rule that loaded everything it needs.
    #[must_use]
    pub fn ready(rule: R) -> Self {
        Self {
            rule,
            diagnostic: None,
        }
    }

    /// A rule that fell back to empty tables.
    #[must_use]
    pub fn degraded(rule: R, diagnostic: SetupDiagnostic) -> Self {
        Self {
            rule,
            diagnostic: Some(diagnostic),
        }
    }

    /// Returns true if the rule fell back to empty tables.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.diagnostic.is_some()
    }
}

impl<R: Rule + 'static> RuleSetup<R> {
    /// Reports the diagnostic, if any, and boxes the rule.
    #[must_use]
    pub fn into_boxed(self) -> RuleBox {
        if let Some(diagnostic) = &self.diagnostic {
            warn!("{diagnostic}");
        }
        Box::new(self.rule)
    }
}

/// A rule built from the shared run [`Context`].
///
/// All one-time setup (reading auxiliary files, building lookup tables)
/// happens here, never per document.
pub trait ConfigurableRule: Rule + Sized {
    /// Identifier available without an instance.
    const IDENTIFIER: &'static str;

    /// Builds the rule.
    fn from_context(context: &Context) -> RuleSetup<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::document::ViewKind;

    struct CustomClassRule;

    impl Rule for CustomClassRule {
        fn identifier(&self) -> &'static str {
            "custom_class"
        }

        fn check_view(&self, view: &ViewNode, file: &dyn InterfaceBuilderFile) -> Vec<Violation> {
            view.custom_class
                .iter()
                .map(|c| Violation::error(file.path_string(), c.clone()))
                .collect()
        }
    }

    impl ConfigurableRule for CustomClassRule {
        const IDENTIFIER: &'static str = "custom_class";

        fn from_context(context: &Context) -> RuleSetup<Self> {
            if context.config.enabled_rules.is_empty() {
                RuleSetup::degraded(
                    Self,
                    SetupDiagnostic {
                        rule: Self::IDENTIFIER,
                        path: context.resolve("missing.yml"),
                        reason: "not found".to_string(),
                    },
                )
            } else {
                RuleSetup::ready(Self)
            }
        }
    }

    fn tree() -> ViewNode {
        ViewNode::new(ViewKind::View)
            .with_custom_class("Root")
            .with_subview(ViewNode::new(ViewKind::Button).with_custom_class("Child"))
    }

    #[test]
    fn test_rule_defaults() {
        let rule = CustomClassRule;
        assert_eq!(rule.identifier(), "custom_class");
        assert_eq!(rule.description(), "");
        assert!(!rule.is_default_enabled());
    }

    #[test]
    fn validate_walks_both_document_kinds() {
        let rule = CustomClassRule;

        let xib = XibDocument::new("a.xib", vec![tree()]);
        let out = rule.validate_xib(&xib);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].message, "Root");
        assert_eq!(out[1].message, "Child");
        assert_eq!(out[0].path_string, "a.xib");
        assert_eq!(rule.validate(&Document::Xib(xib)), out);

        let storyboard = StoryboardDocument::with_root_views("Main.storyboard", vec![tree()]);
        let out = rule.validate(&Document::Storyboard(storyboard));
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].path_string, "Main.storyboard");
    }

    #[test]
    fn setup_outcomes() {
        let degraded = CustomClassRule::from_context(&Context::new(Config::default(), "/p"));
        assert!(degraded.is_degraded());
        let diagnostic = degraded.diagnostic.clone().unwrap();
        assert_eq!(
            diagnostic.to_string(),
            "custom_class: cannot read file at path /p/missing.yml: not found"
        );
        let boxed = degraded.into_boxed();
        assert_eq!(boxed.identifier(), "custom_class");

        let config = Config {
            enabled_rules: vec!["custom_class".to_string()],
            ..Config::default()
        };
        assert!(!CustomClassRule::from_context(&Context::new(config, "/p")).is_degraded());
    }
}
