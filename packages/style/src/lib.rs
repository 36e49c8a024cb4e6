//! # Pagewright Style
//!
//! Computes the effective style of a node for a viewport, and maps the
//! editor's symbolic design tokens (`bg-blue-500`, `p-4`, `shadow-md`, ...)
//! to CSS literals.
//!
//! Resolution is a derived, read-only view: it is recomputed on demand and
//! never written back into the document.

mod resolve;
pub mod tokens;

pub use resolve::{resolve, scale_value};
pub use tokens::{css_property_name, is_literal, lookup, theme_color, TokenValue};
