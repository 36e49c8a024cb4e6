//! Whole-document export.
//!
//! Project export writes `styles.css`, `script.js` and one HTML file per page,
//! the first page becoming `index.html`. Single-page export inlines the
//! stylesheet and script into one self-contained document.

use crate::compiler::{compile_layout_html, escape_html, CompileOptions, LinkMode, INERT_HREF};
use crate::script::{compile_page_script, compile_shared_script};
use pagewright_compiler_css::{compile_base_css, compile_layout_css};
use pagewright_model::{slugify, Document, Page, ProjectSettings, Theme, Viewport};
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, info, instrument};

pub const STYLESHEET_FILE: &str = "styles.css";
pub const SCRIPT_FILE: &str = "script.js";
pub const ENTRY_FILE: &str = "index.html";

/// Depth of the layout inside `<main><div id="page-frame">`
const LAYOUT_DEPTH: usize = 3;

/// Export every page using the default viewports
pub fn generate_project_files(
    document: &Document,
    theme: &Theme,
    settings: &ProjectSettings,
) -> BTreeMap<String, String> {
    generate_project_files_with_viewports(document, theme, settings, &Viewport::defaults())
}

/// Export every page; `viewports[0]` sizes the page frame
#[instrument(skip_all, fields(pages = document.pages().len()))]
pub fn generate_project_files_with_viewports(
    document: &Document,
    theme: &Theme,
    settings: &ProjectSettings,
    viewports: &[Viewport],
) -> BTreeMap<String, String> {
    let frame = viewports.first().cloned().unwrap_or_else(Viewport::desktop);
    let filenames = page_filenames(document.pages());

    let mut css = compile_base_css(theme, &frame);
    for page in document.pages() {
        css.push_str(&compile_layout_css(document.layout(&page.id), viewports));
    }

    let mut files = BTreeMap::new();
    files.insert(STYLESHEET_FILE.to_string(), css);
    files.insert(SCRIPT_FILE.to_string(), compile_shared_script(settings));

    for page in document.pages() {
        let Some(filename) = filenames.get(&page.id) else {
            continue;
        };
        let nav = document
            .pages()
            .iter()
            .filter_map(|other| {
                filenames.get(&other.id).map(|file| NavEntry {
                    href: format!("./{}", file),
                    label: &other.name,
                    active: other.id == page.id,
                })
            })
            .collect();

        let shell = PageShell {
            page,
            settings,
            nav,
            stylesheet: format!("<link rel=\"stylesheet\" href=\"{}\">", STYLESHEET_FILE),
            scripts: project_scripts(page),
            layout: compile_layout_html(
                document.layout(&page.id),
                LinkMode::Project(&filenames),
                layout_options(),
            ),
        };
        debug!(page_id = %page.id, file = %filename, "Rendered page");
        files.insert(filename.clone(), shell.render());
    }

    info!(files = files.len(), "Generated project files");
    files
}

/// Render one page as a self-contained document using the default viewports
pub fn generate_single_page_document(
    document: &Document,
    theme: &Theme,
    viewport: &Viewport,
    page_id: &str,
    settings: &ProjectSettings,
) -> String {
    generate_single_page_document_with_viewports(
        document,
        theme,
        viewport,
        page_id,
        settings,
        &Viewport::defaults(),
    )
}

/// Render one page with inline style and script.
///
/// `viewport` sizes the page frame. Internal links are inert since no other
/// page exists in the output. An unknown `page_id` yields a placeholder
/// document.
#[instrument(skip_all, fields(page_id = %page_id, viewport = %viewport.name))]
pub fn generate_single_page_document_with_viewports(
    document: &Document,
    theme: &Theme,
    viewport: &Viewport,
    page_id: &str,
    settings: &ProjectSettings,
    viewports: &[Viewport],
) -> String {
    let Some(page) = document.page(page_id) else {
        info!("Page not found, emitting placeholder document");
        return format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"UTF-8\">\n  <title>Page not found</title>\n</head>\n<body>\n  <!-- Page not found: {} -->\n</body>\n</html>\n",
            page_id.replace("--", "- -").replace('>', "&gt;")
        );
    };

    let layout = document.layout(page_id);
    let mut css = compile_base_css(theme, viewport);
    css.push_str(&compile_layout_css(layout, viewports));

    let nav = document
        .pages()
        .iter()
        .map(|other| NavEntry {
            href: INERT_HREF.to_string(),
            label: &other.name,
            active: other.id == page.id,
        })
        .collect();

    let shell = PageShell {
        page,
        settings,
        nav,
        stylesheet: format!("<style>\n{}</style>", css),
        scripts: vec![format!(
            "<script>\n{}</script>",
            compile_page_script(settings, page)
        )],
        layout: compile_layout_html(layout, LinkMode::SinglePage, layout_options()),
    };
    shell.render()
}

/// Output filename for every page, keyed by page id.
///
/// The first page is `index.html`; the others use their slugified name,
/// with a numeric suffix when two pages slugify the same.
pub fn page_filenames(pages: &[Page]) -> BTreeMap<String, String> {
    let mut taken = HashSet::new();
    let mut filenames = BTreeMap::new();

    for (index, page) in pages.iter().enumerate() {
        let stem = if index == 0 {
            "index".to_string()
        } else {
            let slug: String = slugify(&page.name)
                .chars()
                .filter(|ch| ch.is_ascii_alphanumeric() || *ch == '-')
                .collect();
            if slug.is_empty() {
                "page".to_string()
            } else {
                slug
            }
        };

        let mut filename = format!("{}.html", stem);
        let mut suffix = 2;
        while !taken.insert(filename.clone()) {
            filename = format!("{}-{}.html", stem, suffix);
            suffix += 1;
        }
        filenames.insert(page.id.clone(), filename);
    }
    filenames
}

fn layout_options() -> CompileOptions {
    CompileOptions {
        depth: LAYOUT_DEPTH,
        ..CompileOptions::default()
    }
}

fn project_scripts(page: &Page) -> Vec<String> {
    let mut scripts = vec![format!("<script src=\"{}\"></script>", SCRIPT_FILE)];
    if let Some(custom) = page.custom_js.as_deref().filter(|js| !js.is_empty()) {
        scripts.push(format!("<script>\n{}\n</script>", custom));
    }
    scripts
}

struct NavEntry<'a> {
    href: String,
    label: &'a str,
    active: bool,
}

/// Everything around the layout markup
struct PageShell<'a> {
    page: &'a Page,
    settings: &'a ProjectSettings,
    nav: Vec<NavEntry<'a>>,
    stylesheet: String,
    scripts: Vec<String>,
    layout: String,
}

impl PageShell<'_> {
    fn render(&self) -> String {
        let mut html = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("  <meta charset=\"UTF-8\">\n");
        html.push_str(
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        html.push_str(&format!("  <title>{}</title>\n", escape_html(self.page.title())));
        if let Some(description) = &self.page.seo_description {
            html.push_str(&format!(
                "  <meta name=\"description\" content=\"{}\">\n",
                escape_html(description)
            ));
        }
        html.push_str(&format!("  {}\n", self.stylesheet));
        for head in [
            &self.settings.global_head_content,
            &self.page.custom_head_content,
        ]
        .into_iter()
        .flatten()
        {
            html.push_str(head);
            html.push('\n');
        }
        html.push_str("</head>\n<body>\n");

        html.push_str("  <header>\n    <nav class=\"main-nav\">\n      <ul>\n");
        for entry in &self.nav {
            let class = if entry.active {
                "nav-link active"
            } else {
                "nav-link"
            };
            html.push_str(&format!(
                "        <li><a href=\"{}\" class=\"{}\">{}</a></li>\n",
                escape_html(&entry.href),
                class,
                escape_html(entry.label)
            ));
        }
        html.push_str("      </ul>\n    </nav>\n  </header>\n");

        html.push_str("  <main>\n    <div id=\"page-frame\">\n");
        html.push_str(&self.layout);
        html.push_str("    </div>\n  </main>\n");

        for script in &self.scripts {
            html.push_str("  ");
            html.push_str(script);
            html.push('\n');
        }
        html.push_str("</body>\n</html>\n");
        html
    }
}
