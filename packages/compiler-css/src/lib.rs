//! Stylesheet emission for Pagewright layouts.
//!
//! Each node with styles becomes one `#id { ... }` rule per viewport entry,
//! plus a `#id:hover { ... }` rule when a hover layer is present. Rules for
//! the reference viewport are unconditional; every other known viewport is
//! wrapped in `@media (max-width: <breakpoint>px)`.

mod base;
mod rules;

pub use base::compile_base_css;
pub use rules::{compile_layout_css, declarations};
