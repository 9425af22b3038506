//! Core types for lint violations and results.

use serde::{Deserialize, Serialize};

/// Severity level for lint violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A lint violation found in an interface-builder document.
///
/// Violations carry no identity beyond their fields; two equal violations
/// reported for the same document are both kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    /// Path of the document the violation was found in.
    pub path_string: String,
    /// Human-readable message.
    pub message: String,
    /// Severity of this violation.
    pub level: Severity,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(path_string: impl Into<String>, message: impl Into<String>, level: Severity) -> Self {
        Self {
            path_string: path_string.into(),
            message: message.into(),
            level,
        }
    }

    /// Creates a warning-level violation.
    #[must_use]
    pub fn warning(path_string: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(path_string, message, Severity::Warning)
    }

    /// Creates an error-level violation.
    #[must_use]
    pub fn error(path_string: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(path_string, message, Severity::Error)
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}: {}", self.path_string, self.level, self.message)
    }
}

/// Result of a lint run.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All violations found, grouped per document in discovery order.
    pub violations: Vec<Violation>,
    /// Number of documents checked.
    pub files_checked: usize,
    /// Number of documents that could not be decoded.
    pub skipped: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.violations.iter().any(|v| v.level == Severity::Error)
    }

    /// Counts violations as `(errors, warnings)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize) {
        let errors = self
            .violations
            .iter()
            .filter(|v| v.level == Severity::Error)
            .count();
        (errors, self.violations.len() - errors)
    }

    /// Adds violations from another result.
    pub fn extend(&mut self, other: Self) {
        self.violations.extend(other.violations);
        self.files_checked += other.files_checked;
        self.skipped += other.skipped;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_xcode_like_layout() {
        let v = Violation::error("Main.storyboard", "UILabel unknown color: red");
        assert_eq!(
            v.to_string(),
            "Main.storyboard: error: UILabel unknown color: red"
        );
    }

    #[test]
    fn severity_orders_warning_below_error() {
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn count_by_severity_splits_levels() {
        let mut result = LintResult::new();
        result.violations.push(Violation::warning("a.xib", "w"));
        result.violations.push(Violation::error("a.xib", "e"));
        result.violations.push(Violation::error("a.xib", "e"));
        assert_eq!(result.count_by_severity(), (2, 1));
        assert!(result.has_errors());
    }

    #[test]
    fn duplicates_are_kept() {
        let mut result = LintResult::new();
        let v = Violation::error("a.xib", "same");
        result.violations.push(v.clone());
        result.violations.push(v);
        assert_eq!(result.violations.len(), 2);
    }

    #[test]
    fn extend_accumulates_counters() {
        let mut a = LintResult {
            violations: vec![Violation::warning("a.xib", "w")],
            files_checked: 1,
            skipped: 0,
        };
        let b = LintResult {
            violations: vec![Violation::error("b.xib", "e")],
            files_checked: 2,
            skipped: 1,
        };
        a.extend(b);
        assert_eq!(a.violations.len(), 2);
        assert_eq!(a.files_checked, 3);
        assert_eq!(a.skipped, 1);
        assert!(a.has_errors());
    }

    #[test]
    fn serializes_camel_case_fields() {
        let v = Violation::warning("a.xib", "hard-coded");
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(
            json,
            r#"{"pathString":"a.xib","message":"hard-coded","level":"warning"}"#
        );
    }
}
