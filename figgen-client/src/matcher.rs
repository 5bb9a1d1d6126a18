//! Depth-first node search.
//!
//! Both lookups share one post-order walker: children are visited before
//! their parent, so the deepest match along the first branch is found first.

use std::ops::ControlFlow;

use crate::document::{Node, NodeKind};

/// How many matches a search collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Stop at the first match.
    First,
    /// Collect every match.
    All,
}

/// Visit `node` and all of its descendants in post-order.
///
/// The walk stops as soon as `visit` returns [`ControlFlow::Break`].
pub fn walk_post_order<'a, F>(node: &'a Node, visit: &mut F) -> ControlFlow<()>
where
    F: FnMut(&'a Node) -> ControlFlow<()>,
{
    for child in &node.children {
        walk_post_order(child, visit)?;
    }
    visit(node)
}

/// Search each root tree (roots included) for nodes satisfying `predicate`.
pub fn search<'a, I, P>(roots: I, predicate: P, strategy: Strategy) -> Vec<&'a Node>
where
    I: IntoIterator<Item = &'a Node>,
    P: Fn(&Node) -> bool,
{
    let mut found = Vec::new();
    let mut visit = |node: &'a Node| {
        if predicate(node) {
            found.push(node);
            if strategy == Strategy::First {
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    };

    for root in roots {
        if walk_post_order(root, &mut visit).is_break() {
            break;
        }
    }
    found
}

/// First descendant of `node` whose type tag or name equals `kind_or_name`.
///
/// `node` itself is never a candidate.
pub fn find_first<'a>(node: &'a Node, kind_or_name: &str) -> Option<&'a Node> {
    search(
        &node.children,
        |candidate| candidate.is_kind_or_named(kind_or_name),
        Strategy::First,
    )
    .into_iter()
    .next()
}

/// Every node of `kind` under the given roots, in traversal order.
pub fn find_all<'a, I>(roots: I, kind: &NodeKind) -> Vec<&'a Node>
where
    I: IntoIterator<Item = &'a Node>,
{
    search(roots, |candidate| candidate.kind == *kind, Strategy::All)
}
