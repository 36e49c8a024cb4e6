//! # Tree Operations
//!
//! Pure edits over a page forest (`&[Arc<Node>]`).
//!
//! ## Design
//!
//! - Every operation returns a new forest and leaves its input untouched
//! - Only the nodes on the path from the root to the edited node are rebuilt;
//!   every other subtree is shared with the input by `Arc`
//! - Missing ids are soft failures: the input comes back unchanged
//!
//! ## Example
//!
//! ```rust,ignore
//! let tree = insert(&[], None, button);
//! let tree = replace(&tree, &button_id, &NodePatch::name("Buy now"));
//! let (tree, removed) = delete(&tree, &button_id);
//! ```

use pagewright_model::{
    format_number, split_dimension, IdGenerator, Layout, Node, NodePatch, StyleProperty,
    REFERENCE_VIEWPORT,
};
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Distance a cloned node is moved right and down, in pixels
pub const CLONE_OFFSET: f64 = 20.0;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TreeError {
    #[error("Parent not found: {0}")]
    ParentNotFound(String),
}

/// Where a node sits in a forest
#[derive(Debug, Clone, Copy)]
pub struct Located<'a> {
    pub node: &'a Arc<Node>,
    /// The list holding the node (the root list or the parent's children)
    pub siblings: &'a [Arc<Node>],
    pub index: usize,
    /// `None` for root-level nodes
    pub parent: Option<&'a Arc<Node>>,
}

/// Find a node along with its siblings and parent
pub fn locate<'a>(tree: &'a [Arc<Node>], id: &str) -> Option<Located<'a>> {
    locate_in(tree, id, None)
}

fn locate_in<'a>(
    siblings: &'a [Arc<Node>],
    id: &str,
    parent: Option<&'a Arc<Node>>,
) -> Option<Located<'a>> {
    for (index, node) in siblings.iter().enumerate() {
        if node.id == id {
            return Some(Located {
                node,
                siblings,
                index,
                parent,
            });
        }
        if let Some(found) = locate_in(&node.children, id, Some(node)) {
            return Some(found);
        }
    }
    None
}

pub fn find<'a>(tree: &'a [Arc<Node>], id: &str) -> Option<&'a Arc<Node>> {
    locate(tree, id).map(|located| located.node)
}

/// Every id in the forest, pre-order
pub fn collect_ids(tree: &[Arc<Node>]) -> HashSet<String> {
    tree.iter()
        .flat_map(|node| node.subtree_ids())
        .map(str::to_string)
        .collect()
}

/// Shallow-merge `patch` into the node with `id`
pub fn replace(tree: &[Arc<Node>], id: &str, patch: &NodePatch) -> Layout {
    match map_node(tree, id, &mut |node: &Node| patch.apply_to(node)) {
        Some(next) => next,
        None => {
            debug!(node_id = id, "Replace target not found");
            tree.to_vec()
        }
    }
}

/// Append `node` to the children of `parent_id`, or to the root list.
///
/// An unknown parent leaves the tree unchanged; use [`try_insert`] to find
/// out when that happens.
pub fn insert(
    tree: &[Arc<Node>],
    parent_id: Option<&str>,
    node: impl Into<Arc<Node>>,
) -> Layout {
    match try_insert(tree, parent_id, node) {
        Ok(next) => next,
        Err(err) => {
            debug!(error = %err, "Insert skipped");
            tree.to_vec()
        }
    }
}

pub fn try_insert(
    tree: &[Arc<Node>],
    parent_id: Option<&str>,
    node: impl Into<Arc<Node>>,
) -> Result<Layout, TreeError> {
    let node = node.into();
    let Some(parent_id) = parent_id else {
        let mut next = tree.to_vec();
        next.push(node);
        return Ok(next);
    };

    map_node(tree, parent_id, &mut |parent: &Node| {
        let mut parent = parent.clone();
        parent.children.push(node.clone());
        parent
    })
    .ok_or_else(|| TreeError::ParentNotFound(parent_id.to_string()))
}

/// Remove the node with `id` and its whole subtree.
///
/// Returns the new forest and the removed subtree (`None` if `id` is absent).
pub fn delete(tree: &[Arc<Node>], id: &str) -> (Layout, Option<Arc<Node>>) {
    match remove_in(tree, id) {
        Some((next, removed)) => (next, Some(removed)),
        None => (tree.to_vec(), None),
    }
}

fn remove_in(tree: &[Arc<Node>], id: &str) -> Option<(Layout, Arc<Node>)> {
    if let Some(index) = tree.iter().position(|node| node.id == id) {
        let mut next = tree.to_vec();
        let removed = next.remove(index);
        return Some((next, removed));
    }

    for (index, node) in tree.iter().enumerate() {
        if let Some((children, removed)) = remove_in(&node.children, id) {
            let mut next = tree.to_vec();
            next[index] = Arc::new(with_children(node, children));
            return Some((next, removed));
        }
    }
    None
}

/// Deep-copy a node, giving it and every descendant a fresh id.
///
/// Each copy's Desktop `top`/`left` is moved by [`CLONE_OFFSET`] so the
/// clone does not sit exactly on top of its source.
pub fn clone_node(node: &Node, ids: &mut IdGenerator) -> Node {
    let mut copy = node.clone();
    copy.id = ids.new_id(node.kind);

    let desktop = copy
        .styles_by_viewport
        .entry(REFERENCE_VIEWPORT.to_string())
        .or_default();
    for property in [StyleProperty::Top, StyleProperty::Left] {
        if let Some(moved) = offset(desktop.base.get(property)) {
            desktop.base.set(property, moved);
        }
    }

    copy.children = node
        .children
        .iter()
        .map(|child| Arc::new(clone_node(child, ids)))
        .collect();
    copy
}

/// `None` when the value is not a length and should stay as it is
fn offset(value: Option<&str>) -> Option<String> {
    let Some(value) = value else {
        return Some(format!("{}px", format_number(CLONE_OFFSET)));
    };
    let (number, unit) = split_dimension(value)?;
    let unit = if unit.is_empty() { "px" } else { unit };
    Some(format!("{}{}", format_number(number + CLONE_OFFSET), unit))
}

/// Rebuild the path to `id`, replacing the node with `f(node)`
fn map_node(
    tree: &[Arc<Node>],
    id: &str,
    f: &mut dyn FnMut(&Node) -> Node,
) -> Option<Layout> {
    for (index, node) in tree.iter().enumerate() {
        let replacement = if node.id == id {
            f(node)
        } else if let Some(children) = map_node(&node.children, id, f) {
            with_children(node, children)
        } else {
            continue;
        };
        let mut next = tree.to_vec();
        next[index] = Arc::new(replacement);
        return Some(next);
    }
    None
}

fn with_children(node: &Node, children: Layout) -> Node {
    Node {
        id: node.id.clone(),
        kind: node.kind,
        name: node.name.clone(),
        styles_by_viewport: node.styles_by_viewport.clone(),
        content: node.content.clone(),
        children,
        link: node.link.clone(),
        events: node.events.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagewright_model::{NodeKind, StyleLayer};

    fn text(id: &str) -> Node {
        Node::new(id, NodeKind::Text, "Text")
    }

    fn sample() -> Layout {
        let container = Node::new("c1", NodeKind::Container, "Container")
            .with_child(text("t1"))
            .with_child(
                Node::new("c2", NodeKind::Card, "Card").with_child(text("t2")),
            );
        vec![Arc::new(container), Arc::new(text("t3"))]
    }

    #[test]
    fn test_locate_reports_parent_and_index() {
        let tree = sample();

        let located = locate(&tree, "t2").unwrap();
        assert_eq!(located.node.id, "t2");
        assert_eq!(located.parent.unwrap().id, "c2");
        assert_eq!(located.index, 0);

        let root = locate(&tree, "t3").unwrap();
        assert!(root.parent.is_none());
        assert_eq!(root.index, 1);
        assert_eq!(root.siblings.len(), 2);

        assert!(locate(&tree, "missing").is_none());
        assert!(locate(&[], "t1").is_none());
    }

    #[test]
    fn test_replace_shares_untouched_subtrees() {
        let tree = sample();
        let next = replace(&tree, "t2", &NodePatch::name("Renamed"));

        assert_eq!(find(&next, "t2").unwrap().name, "Renamed");
        assert_eq!(find(&tree, "t2").unwrap().name, "Text");
        assert!(Arc::ptr_eq(&tree[1], &next[1]));
        assert!(Arc::ptr_eq(&tree[0].children[0], &next[0].children[0]));
    }

    #[test]
    fn test_replace_merges_styles_per_viewport() {
        let desktop = StyleLayer::new().with(StyleProperty::Top, "10px");
        let mobile = StyleLayer::new().with(StyleProperty::Top, "4px");
        let tree = vec![Arc::new(text("t").with_base(desktop.clone()))];

        let patch = NodePatch::styles("Mobile", pagewright_model::ViewportStyles::new(mobile));
        let next = replace(&tree, "t", &patch);

        let styles = &next[0].styles_by_viewport;
        assert_eq!(styles["Desktop"].base, desktop);
        assert_eq!(styles["Mobile"].base.get(StyleProperty::Top), Some("4px"));
    }

    #[test]
    fn test_replace_missing_id_is_unchanged() {
        let tree = sample();
        assert_eq!(replace(&tree, "nope", &NodePatch::name("x")), tree);
    }

    #[test]
    fn test_insert_at_root_and_into_parent() {
        let tree = sample();

        let rooted = insert(&tree, None, text("new"));
        assert_eq!(rooted.last().unwrap().id, "new");

        let nested = insert(&tree, Some("c2"), text("new"));
        let parent = find(&nested, "c2").unwrap();
        assert_eq!(parent.children.last().unwrap().id, "new");
        assert_eq!(locate(&nested, "new").unwrap().parent.unwrap().id, "c2");
    }

    #[test]
    fn test_insert_into_unknown_parent() {
        let tree = sample();
        assert_eq!(insert(&tree, Some("ghost"), text("new")), tree);
        assert_eq!(
            try_insert(&tree, Some("ghost"), text("new")),
            Err(TreeError::ParentNotFound("ghost".to_string()))
        );
    }

    #[test]
    fn test_delete_removes_subtree() {
        let tree = sample();
        let (next, removed) = delete(&tree, "c2");

        assert_eq!(removed.unwrap().id, "c2");
        assert!(find(&next, "c2").is_none());
        assert!(find(&next, "t2").is_none());
        assert!(find(&next, "t1").is_some());

        let (same, none) = delete(&next, "c2");
        assert!(none.is_none());
        assert_eq!(same, next);
    }

    #[test]
    fn test_clone_offsets_and_renews_ids() {
        let mut ids = IdGenerator::new("clone");
        let source = Node::new("c1", NodeKind::Container, "Container")
            .with_base(
                StyleLayer::new()
                    .with(StyleProperty::Top, "100px")
                    .with(StyleProperty::Left, "2rem")
                    .with(StyleProperty::Width, "w-full"),
            )
            .with_child(text("t1"));

        let copy = clone_node(&source, &mut ids);

        assert_ne!(copy.id, source.id);
        assert_ne!(copy.children[0].id, "t1");
        assert_eq!(copy.name, source.name);

        let base = &copy.styles_by_viewport[REFERENCE_VIEWPORT].base;
        assert_eq!(base.get(StyleProperty::Top), Some("120px"));
        assert_eq!(base.get(StyleProperty::Left), Some("22rem"));
        assert_eq!(base.get(StyleProperty::Width), Some("w-full"));

        // Children without Desktop styles get the bare offset
        let child_base = &copy.children[0].styles_by_viewport[REFERENCE_VIEWPORT].base;
        assert_eq!(child_base.get(StyleProperty::Top), Some("20px"));
        assert_eq!(child_base.get(StyleProperty::Left), Some("20px"));
    }

    #[test]
    fn test_collect_ids() {
        let ids = collect_ids(&sample());
        assert_eq!(ids.len(), 5);
        assert!(ids.contains("t2"));
    }
}
