//! # Pagewright Editor
//!
//! Editing engine for Pagewright documents.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ host: palette, properties panel, AI prompt  │
//! └─────────────────────────────────────────────┘
//!                     ↓ Mutation
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditorState                         │
//! │  - Apply mutations through tree operations  │
//! │  - Record snapshots in linear history       │
//! │  - Track selection, viewport, theme         │
//! └─────────────────────────────────────────────┘
//!                     ↓ Document
//! ┌─────────────────────────────────────────────┐
//! │ compilers: Document → HTML / CSS / JS       │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Snapshots, not inverses**: history stores whole documents, shared
//!    structurally through `Arc`
//! 2. **Pure edits**: tree operations never modify their input
//! 3. **Soft failures**: missing nodes are no-ops, never panics
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pagewright_editor::{EditorState, Mutation};
//! use pagewright_model::{Document, NodeKind, NodePatch, Page};
//!
//! let mut state = EditorState::new(Document::new(Page::titled("home", "Home")));
//!
//! let id = state.add_node(NodeKind::Button, None)?;
//! state.apply(Mutation::UpdateNode {
//!     node_id: id,
//!     patch: NodePatch::name("Buy now"),
//! })?;
//!
//! state.undo();
//! ```

mod errors;
mod generation;
mod history;
mod mutations;
mod state;
pub mod tree;

pub use errors::EditorError;
pub use generation::{parse_generated_layout, GenerationError};
pub use history::History;
pub use mutations::{Mutation, MutationError, MutationResult};
pub use state::EditorState;
pub use tree::{Located, TreeError, CLONE_OFFSET};
