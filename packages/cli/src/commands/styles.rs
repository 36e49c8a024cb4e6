use crate::config::Config;
use crate::project::{ProjectFile, DEFAULT_PROJECT_NAME};
use anyhow::{anyhow, Result};
use clap::Args;
use pagewright_editor::tree;
use pagewright_model::{Document, Node, ViewportStyles};
use pagewright_style::resolve;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Args)]
pub struct StylesArgs {
    /// Node to inspect
    pub node_id: String,

    /// Viewport to resolve for (defaults to config)
    #[arg(short, long)]
    pub viewport: Option<String>,

    /// Project file
    #[arg(short, long, default_value = DEFAULT_PROJECT_NAME)]
    pub project: PathBuf,
}

/// Print a node's effective styles for one viewport as JSON
pub fn styles(args: StylesArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let project = ProjectFile::load(&cwd.join(&args.project))?;
    let resolved = resolve_node(&project.document, &config, &args)?;
    println!("{}", serde_json::to_string_pretty(&resolved)?);
    Ok(())
}

fn resolve_node(document: &Document, config: &Config, args: &StylesArgs) -> Result<ViewportStyles> {
    let node = find_node(document, &args.node_id)
        .ok_or_else(|| anyhow!("Node not found: {}", args.node_id))?;
    let viewport = config.viewport(args.viewport.as_deref())?;
    Ok(resolve(node, viewport, &config.viewports))
}

/// Search every page, in page order
fn find_node<'a>(document: &'a Document, node_id: &str) -> Option<&'a Arc<Node>> {
    document
        .pages()
        .iter()
        .find_map(|page| tree::find(document.layout(&page.id), node_id))
}
