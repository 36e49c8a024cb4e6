//! # Pagewright Model
//!
//! The layout data model shared by every Pagewright crate.
//!
//! ```text
//! Document
//!  ├── pages: [Page]                 ordered, never empty
//!  ├── layouts: page id → [Node]     one forest per page
//!  └── active_page_id
//!
//! Node
//!  ├── id / kind / name
//!  ├── styles_by_viewport: name → { base, hover? }
//!  ├── content                      kind-specific payload
//!  ├── children: [Arc<Node>]         exclusively owned
//!  ├── link?                         external URL or page reference
//!  └── events                        event name → handler code
//! ```
//!
//! Nodes are shared through `Arc` so that edits can rebuild only the path
//! from the root to the changed node and reuse every other subtree.

mod dimension;
mod document;
mod error;
mod id_generator;
mod lenient;
mod node;
pub mod palette;
mod style;
mod viewport;

pub use dimension::{format_number, split_dimension};
pub use document::{Document, Page, PagePatch, ProjectSettings, Theme};
pub use error::{ModelError, ModelResult};
pub use id_generator::{get_seed, slugify, IdGenerator};
pub use node::{
    AccordionItem, AlertType, CarouselImage, Content, DropdownOption, FormMethod, Layout, Link,
    ListType, NavLink, Node, NodeKind, NodePatch, SocialLink, SocialNetwork, Tab,
};
pub use style::{StyleLayer, StyleProperty, ViewportStyles};
pub use viewport::{Viewport, REFERENCE_VIEWPORT};
