use crate::config::{Config, DEFAULT_CONFIG_NAME};
use crate::project::{ProjectFile, DEFAULT_PROJECT_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagewright_model::{
    palette, Content, Document, IdGenerator, NodeKind, NodePatch, Page, ProjectSettings,
    StyleLayer, StyleProperty, Theme, ViewportStyles, REFERENCE_VIEWPORT,
};
use std::fs;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Site name, used for the first page and id seed
    #[arg(default_value = "My Site")]
    pub name: String,

    /// Force overwrite existing files
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &Path) -> Result<()> {
    let config_path = cwd.join(DEFAULT_CONFIG_NAME);
    let project_path = cwd.join(DEFAULT_PROJECT_NAME);

    if (config_path.exists() || project_path.exists()) && !args.force {
        println!(
            "{} {} already initialized",
            "⚠️".yellow(),
            cwd.display().to_string().bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!(
        "{}",
        "📝 Initializing Pagewright project...".bright_blue().bold()
    );

    let config_json = serde_json::to_string_pretty(&Config::default())?;
    fs::write(&config_path, config_json)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    starter_project(&args.name)?.save(&project_path)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_PROJECT_NAME);

    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Edit {}", DEFAULT_PROJECT_NAME);
    println!("  2. Run: pagewright export");
    println!("  3. Check output in dist/");

    Ok(())
}

/// One page with a navbar and a heading
fn starter_project(name: &str) -> Result<ProjectFile> {
    let mut ids = IdGenerator::new(name);
    let page = Page::titled(ids.new_page_id("Home"), "Home");
    let page_id = page.id.clone();

    let navbar = palette::create_node(NodeKind::Navbar, &mut ids);
    let heading = palette::create_node(NodeKind::Text, &mut ids);
    let heading = NodePatch::content(Content {
        text: Some(format!("Welcome to {}", name)),
        ..Default::default()
    })
    .apply_to(&heading);
    let heading = NodePatch::styles(
        REFERENCE_VIEWPORT,
        ViewportStyles::new(
            StyleLayer::new()
                .with(StyleProperty::Top, "120px")
                .with(StyleProperty::Left, "40px")
                .with(StyleProperty::FontSize, "text-4xl")
                .with(StyleProperty::FontWeight, "font-bold"),
        ),
    )
    .apply_to(&heading);

    let document = Document::new(page)
        .with_layout(&page_id, vec![Arc::new(navbar), Arc::new(heading)])?;

    Ok(ProjectFile {
        document,
        theme: Theme::default(),
        settings: ProjectSettings::default(),
    })
}
