//! # Pagewright HTML Compiler
//!
//! Turns a document into static markup. Each node kind maps to exactly one
//! element shape; composite widgets (tabs, accordion, carousel, dropdown)
//! carry the structural markup the shared runtime script expects.
//!
//! ## Export modes
//!
//! - **Project**: `styles.css`, `script.js` and one HTML file per page.
//!   Internal links resolve to the target page's filename.
//! - **Single page**: one document with inline `<style>` and `<script>`.
//!   Internal links are inert.
//!
//! Output is byte-identical for identical inputs.

mod compiler;
mod export;
mod icons;
mod script;

pub use compiler::{compile_layout_html, escape_html, CompileOptions, LinkMode, INERT_HREF};
pub use export::{
    generate_project_files, generate_project_files_with_viewports,
    generate_single_page_document, generate_single_page_document_with_viewports,
    page_filenames, ENTRY_FILE, SCRIPT_FILE, STYLESHEET_FILE,
};
pub use script::{compile_page_script, compile_shared_script};

#[cfg(test)]
mod tests;
