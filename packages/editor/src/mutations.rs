//! # Document Mutations
//!
//! Semantic edits on a [`Document`], applied purely.
//!
//! ## Mutation Semantics
//!
//! ### Node mutations
//! - Target the active page's layout
//! - Missing node ids are no-ops (the document comes back unchanged)
//! - Inserts into a missing parent fail with `ParentNotFound`
//! - Any mutation that would leave two nodes sharing an id fails
//!
//! ### Page mutations
//! - Unknown page ids fail with `PageNotFound`
//! - The last page can never be deleted

use crate::tree;
use pagewright_model::{Document, IdGenerator, ModelError, Node, NodePatch, Page, PagePatch};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Semantic mutations (intent-preserving operations)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Append a node to a parent's children, or to the page roots
    InsertNode {
        parent_id: Option<String>,
        node: Node,
    },

    /// Shallow-merge properties into a node
    UpdateNode {
        node_id: String,
        patch: NodePatch,
    },

    /// Remove a node and its subtree
    RemoveNode {
        node_id: String,
    },

    /// Clone a node (fresh ids, offset position) next to the original
    DuplicateNode {
        node_id: String,
    },

    /// Remove every node from a page
    ClearPage {
        page_id: String,
    },

    /// Swap a page's whole layout
    ReplaceLayout {
        page_id: String,
        nodes: Vec<Node>,
    },

    AddPage {
        page: Page,
    },

    UpdatePage {
        page_id: String,
        patch: PagePatch,
    },

    DeletePage {
        page_id: String,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Page not found: {0}")]
    PageNotFound(String),

    #[error("Parent not found: {0}")]
    ParentNotFound(String),

    #[error("Cannot delete the last page")]
    LastPage,

    #[error("Duplicate node id: {0}")]
    DuplicateId(String),

    #[error("Duplicate page id: {0}")]
    DuplicatePage(String),
}

pub type MutationResult<T> = Result<T, MutationError>;

impl From<ModelError> for MutationError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::DuplicateId(id) => MutationError::DuplicateId(id),
            ModelError::PageNotFound(id) => MutationError::PageNotFound(id),
            ModelError::DuplicatePage(id) => MutationError::DuplicatePage(id),
            ModelError::LastPage | ModelError::NoPages => MutationError::LastPage,
        }
    }
}

impl From<tree::TreeError> for MutationError {
    fn from(err: tree::TreeError) -> Self {
        match err {
            tree::TreeError::ParentNotFound(id) => MutationError::ParentNotFound(id),
        }
    }
}

impl Mutation {
    /// Apply the mutation, returning the edited document.
    ///
    /// `ids` supplies fresh ids for mutations that create nodes.
    pub fn apply(&self, doc: &Document, ids: &mut IdGenerator) -> MutationResult<Document> {
        let next = match self {
            Mutation::InsertNode { parent_id, node } => {
                Self::apply_insert(doc, parent_id.as_deref(), node)?
            }

            Mutation::UpdateNode { node_id, patch } => {
                let layout = tree::replace(doc.active_layout(), node_id, patch);
                doc.with_layout(doc.active_page_id(), layout)?
            }

            Mutation::RemoveNode { node_id } => {
                let (layout, _) = tree::delete(doc.active_layout(), node_id);
                doc.with_layout(doc.active_page_id(), layout)?
            }

            Mutation::DuplicateNode { node_id } => Self::apply_duplicate(doc, node_id, ids)?,

            Mutation::ClearPage { page_id } => doc.with_layout(page_id, Vec::new())?,

            Mutation::ReplaceLayout { page_id, nodes } => {
                let layout = nodes.iter().cloned().map(Arc::new).collect();
                doc.with_layout(page_id, layout)?
            }

            Mutation::AddPage { page } => doc.with_page_added(page.clone())?,

            Mutation::UpdatePage { page_id, patch } => doc.with_page_updated(page_id, patch)?,

            Mutation::DeletePage { page_id } => doc.with_page_removed(page_id)?,
        };

        next.validate()?;
        Ok(next)
    }

    fn apply_insert(
        doc: &Document,
        parent_id: Option<&str>,
        node: &Node,
    ) -> MutationResult<Document> {
        let layout = tree::try_insert(doc.active_layout(), parent_id, node.clone())?;
        Ok(doc.with_layout(doc.active_page_id(), layout)?)
    }

    fn apply_duplicate(
        doc: &Document,
        node_id: &str,
        ids: &mut IdGenerator,
    ) -> MutationResult<Document> {
        let Some(located) = tree::locate(doc.active_layout(), node_id) else {
            return Ok(doc.clone());
        };

        let copy = with_copy_names(tree::clone_node(located.node, ids));
        let parent_id = located.parent.map(|parent| parent.id.as_str());

        let layout = tree::try_insert(doc.active_layout(), parent_id, copy)?;
        Ok(doc.with_layout(doc.active_page_id(), layout)?)
    }

    /// Short name for log output
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::InsertNode { .. } => "InsertNode",
            Mutation::UpdateNode { .. } => "UpdateNode",
            Mutation::RemoveNode { .. } => "RemoveNode",
            Mutation::DuplicateNode { .. } => "DuplicateNode",
            Mutation::ClearPage { .. } => "ClearPage",
            Mutation::ReplaceLayout { .. } => "ReplaceLayout",
            Mutation::AddPage { .. } => "AddPage",
            Mutation::UpdatePage { .. } => "UpdatePage",
            Mutation::DeletePage { .. } => "DeletePage",
        }
    }
}

/// Append " Copy" to the name of `node` and every descendant
fn with_copy_names(mut node: Node) -> Node {
    node.name = format!("{} Copy", node.name);
    node.children = node
        .children
        .iter()
        .map(|child| Arc::new(with_copy_names(Node::clone(child))))
        .collect();
    node
}
