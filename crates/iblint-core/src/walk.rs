//! Depth-first traversal of view hierarchies.
//!
//! Every structural rule walks documents the same way: a node's own
//! violations come first, then each subview in document order, recursively.

use crate::document::{Document, StoryboardDocument, ViewNode, XibDocument};
use crate::types::Violation;

/// Walks `view` in pre-order, collecting what `visit` reports for each node.
pub fn walk_view<F>(view: &ViewNode, visit: &mut F) -> Vec<Violation>
where
    F: FnMut(&ViewNode) -> Vec<Violation>,
{
    let mut violations = Vec::new();
    walk_into(view, visit, &mut violations);
    violations
}

fn walk_into<F>(view: &ViewNode, visit: &mut F, out: &mut Vec<Violation>)
where
    F: FnMut(&ViewNode) -> Vec<Violation>,
{
    out.extend(visit(view));
    for subview in &view.subviews {
        walk_into(subview, visit, out);
    }
}

/// Top-level views of a xib document.
pub fn xib_roots(doc: &XibDocument) -> impl Iterator<Item = &ViewNode> {
    doc.views.iter().flatten()
}

/// Root views of every storyboard scene that has a view controller with a root view.
pub fn storyboard_roots(doc: &StoryboardDocument) -> impl Iterator<Item = &ViewNode> {
    doc.scenes
        .iter()
        .flatten()
        .filter_map(|scene| scene.view_controller.as_ref())
        .filter_map(|controller| controller.root_view.as_ref())
}

/// Walks every top-level view of a xib document.
pub fn walk_xib<F>(doc: &XibDocument, visit: &mut F) -> Vec<Violation>
where
    F: FnMut(&ViewNode) -> Vec<Violation>,
{
    let mut violations = Vec::new();
    for root in xib_roots(doc) {
        violations.extend(walk_view(root, visit));
    }
    violations
}

/// Walks the root view of every storyboard scene.
pub fn walk_storyboard<F>(doc: &StoryboardDocument, visit: &mut F) -> Vec<Violation>
where
    F: FnMut(&ViewNode) -> Vec<Violation>,
{
    let mut violations = Vec::new();
    for root in storyboard_roots(doc) {
        violations.extend(walk_view(root, visit));
    }
    violations
}

/// Walks any document.
pub fn walk_document<F>(doc: &Document, visit: &mut F) -> Vec<Violation>
where
    F: FnMut(&ViewNode) -> Vec<Violation>,
{
    match doc {
        Document::Xib(xib) => walk_xib(xib, visit),
        Document::Storyboard(storyboard) => walk_storyboard(storyboard, visit),
    }
}
