use crate::config::Config;
use crate::project::{ProjectFile, DEFAULT_PROJECT_NAME};
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use pagewright_compiler_html::{
    generate_project_files_with_viewports, generate_single_page_document_with_viewports,
    page_filenames,
};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Project file to export
    #[arg(default_value = DEFAULT_PROJECT_NAME)]
    pub project: PathBuf,

    /// Export a single self-contained page instead of the whole project
    #[arg(short, long)]
    pub page: Option<String>,

    /// Viewport that sizes a single-page export (defaults to config)
    #[arg(short, long)]
    pub viewport: Option<String>,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,
}

pub fn export(args: ExportArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let project = ProjectFile::load(&cwd.join(&args.project))?;
    let files = render(&args, &config, &project)?;

    if args.stdout {
        for (name, content) in &files {
            if files.len() > 1 {
                println!("==> {} <==", name);
            }
            print!("{}", content);
        }
        return Ok(());
    }

    println!("{}", "🔨 Exporting Pagewright project...".bright_blue().bold());

    let out_dir = match &args.out_dir {
        Some(dir) => cwd.join(dir),
        None => config.get_out_dir(cwd),
    };
    fs::create_dir_all(&out_dir)?;

    for (name, content) in &files {
        let path = out_dir.join(name);
        fs::write(&path, content)?;
        println!("  {} {}", "✓".green(), path.display());
    }

    info!(files = files.len(), out_dir = %out_dir.display(), "Export written");
    println!();
    println!("{} Exported {} files", "✅".green(), files.len());
    Ok(())
}

/// Output files keyed by filename
fn render(
    args: &ExportArgs,
    config: &Config,
    project: &ProjectFile,
) -> Result<BTreeMap<String, String>> {
    let document = &project.document;

    let Some(page_id) = &args.page else {
        return Ok(generate_project_files_with_viewports(
            document,
            &project.theme,
            &project.settings,
            &config.viewports,
        ));
    };

    if document.page(page_id).is_none() {
        return Err(anyhow!("Page not found: {}", page_id));
    }
    let viewport = config.viewport(args.viewport.as_deref())?;
    let filename = page_filenames(document.pages())
        .remove(page_id)
        .ok_or_else(|| anyhow!("Page not found: {}", page_id))?;

    let html = generate_single_page_document_with_viewports(
        document,
        &project.theme,
        viewport,
        page_id,
        &project.settings,
        &config.viewports,
    );

    let mut files = BTreeMap::new();
    files.insert(filename, html);
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{init, InitArgs};

    fn initialized() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        init(
            InitArgs {
                name: "Acme".to_string(),
                force: false,
            },
            dir.path(),
        )
        .unwrap();
        dir
    }

    fn args() -> ExportArgs {
        ExportArgs {
            project: PathBuf::from(DEFAULT_PROJECT_NAME),
            page: None,
            viewport: None,
            out_dir: None,
            stdout: false,
        }
    }

    #[test]
    fn test_export_writes_project_files() {
        let dir = initialized();
        export(args(), dir.path()).unwrap();

        let dist = dir.path().join("dist");
        for name in ["index.html", "styles.css", "script.js"] {
            assert!(dist.join(name).exists(), "missing {}", name);
        }
        let html = fs::read_to_string(dist.join("index.html")).unwrap();
        assert!(html.contains("Welcome to Acme"));
    }

    #[test]
    fn test_export_single_page() {
        let dir = initialized();
        let project = ProjectFile::load(&dir.path().join(DEFAULT_PROJECT_NAME)).unwrap();
        let page_id = project.document.pages()[0].id.clone();

        export(
            ExportArgs {
                page: Some(page_id),
                viewport: Some("Mobile".to_string()),
                out_dir: Some("single".to_string()),
                ..args()
            },
            dir.path(),
        )
        .unwrap();

        let single = dir.path().join("single");
        let html = fs::read_to_string(single.join("index.html")).unwrap();
        assert!(html.contains("<style>"));
        assert!(html.contains("max-width: 375px;"));
        assert!(!single.join("styles.css").exists());
    }

    #[test]
    fn test_export_unknown_page_fails() {
        let dir = initialized();
        let result = export(
            ExportArgs {
                page: Some("nowhere".to_string()),
                ..args()
            },
            dir.path(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_export_missing_project_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(export(args(), dir.path()).is_err());
    }
}
