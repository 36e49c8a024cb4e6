use crate::icons::{icon, svg};
use pagewright_model::{Link, ListType, Node, NodeKind, SocialNetwork};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// `href` used for internal links in single-page documents
pub const INERT_HREF: &str = "javascript:void(0)";

const DEFAULT_IMAGE: &str = "https://picsum.photos/200";
const DEFAULT_MAX_RATING: u32 = 5;
const MAX_RATING_LIMIT: u32 = 10;
const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed/v1/place?key=YOUR_API_KEY&q=";

/// How internal page links are written
#[derive(Debug, Clone, Copy)]
pub enum LinkMode<'a> {
    /// Multi-page export; maps page ids to output filenames
    Project(&'a BTreeMap<String, String>),
    /// Single-page export; internal links lead nowhere
    SinglePage,
}

/// Options for HTML compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
    /// Indentation level of the outermost nodes
    pub depth: usize,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
            depth: 0,
        }
    }
}

struct Context<'a> {
    options: CompileOptions,
    depth: usize,
    buffer: String,
    links: LinkMode<'a>,
}

impl<'a> Context<'a> {
    fn new(options: CompileOptions, links: LinkMode<'a>) -> Self {
        Self {
            depth: options.depth,
            options,
            buffer: String::new(),
            links,
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        let indent = self.options.indent.clone();
        for _ in 0..self.depth {
            self.add(&indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }

    fn href(&self, link: &Link) -> String {
        match (link, self.links) {
            (Link::External(url), _) => url.clone(),
            (Link::Page(page_id), LinkMode::Project(files)) => files
                .get(page_id)
                .cloned()
                .unwrap_or_else(|| "#".to_string()),
            (Link::Page(_), LinkMode::SinglePage) => INERT_HREF.to_string(),
        }
    }

    /// `<tag attrs>`, children, `</tag>` on separate lines
    fn wrap(&mut self, open: &str, close: &str, body: impl FnOnce(&mut Self)) {
        self.add_line(open);
        self.indent();
        body(self);
        self.dedent();
        self.add_line(close);
    }

    fn children(&mut self, node: &Node) {
        for child in &node.children {
            compile_node(child, self);
        }
    }
}

/// Compile a page forest to HTML markup (no document wrapper)
pub fn compile_layout_html(
    layout: &[Arc<Node>],
    links: LinkMode<'_>,
    options: CompileOptions,
) -> String {
    let mut ctx = Context::new(options, links);
    for node in layout {
        compile_node(node, &mut ctx);
    }
    ctx.get_output()
}

type Renderer = fn(&Node, &str, &mut Context<'_>);

/// One renderer per kind; `None` for kinds without markup
fn renderer(kind: NodeKind) -> Option<Renderer> {
    let render: Renderer = match kind {
        NodeKind::Container | NodeKind::Card => render_container,
        NodeKind::Form => render_form,
        NodeKind::Fieldset => render_fieldset,
        NodeKind::Text => render_text,
        NodeKind::Button => render_button,
        NodeKind::Image => render_image,
        NodeKind::Input => render_input,
        NodeKind::Textarea => render_textarea,
        NodeKind::Video => render_video,
        NodeKind::Divider => render_divider,
        NodeKind::Icon => render_icon,
        NodeKind::Alert => render_alert,
        NodeKind::ProgressBar => render_progress_bar,
        NodeKind::Dropdown => render_dropdown,
        NodeKind::Accordion => render_accordion,
        NodeKind::Tabs => render_tabs,
        NodeKind::Navbar | NodeKind::Footer => render_nav,
        NodeKind::Label => render_label,
        NodeKind::Checkbox => render_checkbox,
        NodeKind::Radio => render_radio,
        NodeKind::Select => render_select,
        NodeKind::Map => render_map,
        NodeKind::SocialIcons => render_social_icons,
        NodeKind::Table => render_table,
        NodeKind::List => render_list,
        NodeKind::Blockquote => render_blockquote,
        NodeKind::Spinner => render_spinner,
        NodeKind::Rating => render_rating,
        NodeKind::Carousel => render_carousel,
        NodeKind::Unknown => return None,
    };
    Some(render)
}

fn compile_node(node: &Node, ctx: &mut Context<'_>) {
    let href = node.link.as_ref().map(|link| ctx.href(link));
    if let Some(href) = &href {
        ctx.add_line(&format!("<a href=\"{}\">", escape_html(href)));
        ctx.indent();
    }

    match renderer(node.kind) {
        Some(render) => render(node, &attributes(node), ctx),
        None => {
            debug!(node_id = %node.id, "No renderer for node kind");
            ctx.add_line(&format!(
                "<!-- Unknown: {} -->",
                escape_comment(node.kind.as_str())
            ));
        }
    }

    if href.is_some() {
        ctx.dedent();
        ctx.add_line("</a>");
    }
}

/// ` id="..."` followed by event handlers and form-control attributes
fn attributes(node: &Node) -> String {
    let mut attrs = format!(" id=\"{}\"", escape_html(&node.id));

    for (event, code) in &node.events {
        if code.is_empty() || !event.chars().all(|ch| ch.is_ascii_alphanumeric()) {
            continue;
        }
        attrs.push_str(&format!(" {}=\"{}\"", event, escape_html(code)));
    }

    let content = &node.content;
    if let Some(name) = &content.input_name {
        attrs.push_str(&format!(" name=\"{}\"", escape_html(name)));
    }
    if content.is_required == Some(true) {
        attrs.push_str(" required");
    }
    if let Some(autocomplete) = &content.autocomplete {
        attrs.push_str(&format!(" autocomplete=\"{}\"", escape_html(autocomplete)));
    }
    attrs
}

fn text(value: &Option<String>) -> String {
    escape_html(value.as_deref().unwrap_or(""))
}

fn render_container(node: &Node, attrs: &str, ctx: &mut Context<'_>) {
    ctx.wrap(&format!("<div{}>", attrs), "</div>", |ctx| ctx.children(node));
}

fn render_form(node: &Node, attrs: &str, ctx: &mut Context<'_>) {
    let content = &node.content;
    let mut open = format!(
        "<form{} action=\"{}\" method=\"{}\"",
        attrs,
        escape_html(content.form_action.as_deref().unwrap_or("#")),
        content.form_method.unwrap_or_default().as_str()
    );
    if let Some(enctype) = &content.form_enctype {
        open.push_str(&format!(" enctype=\"{}\"", escape_html(enctype)));
    }
    open.push('>');
    ctx.wrap(&open, "</form>", |ctx| ctx.children(node));
}

fn render_fieldset(node: &Node, attrs: &str, ctx: &mut Context<'_>) {
    ctx.wrap(&format!("<fieldset{}>", attrs), "</fieldset>", |ctx| {
        ctx.add_line(&format!("<legend>{}</legend>", text(&node.content.legend_text)));
        ctx.children(node);
    });
}

fn render_text(node: &Node, attrs: &str, ctx: &mut Context<'_>) {
    ctx.add_line(&format!("<p{}>{}</p>", attrs, text(&node.content.text)));
}

fn render_button(node: &Node, attrs: &str, ctx: &mut Context<'_>) {
    ctx.add_line(&format!(
        "<button{}>{}</button>",
        attrs,
        text(&node.content.button_text)
    ));
}

fn render_image(node: &Node, attrs: &str, ctx: &mut Context<'_>) {
    let src = node.content.image_url.as_deref().unwrap_or(DEFAULT_IMAGE);
    ctx.add_line(&format!(
        "<img{} src=\"{}\" alt=\"{}\" />",
        attrs,
        escape_html(src),
        escape_html(&node.name)
    ));
}

fn render_input(node: &Node, attrs: &str, ctx: &mut Context<'_>) {
    ctx.add_line(&format!(
        "<input{} type=\"{}\" placeholder=\"{}\" />",
        attrs,
        escape_html(node.content.input_type.as_deref().unwrap_or("text")),
        text(&node.content.placeholder)
    ));
}

fn render_textarea(node: &Node, attrs: &str, ctx: &mut Context<'_>) {
    ctx.add_line(&format!(
        "<textarea{} placeholder=\"{}\"></textarea>",
        attrs,
        text(&node.content.placeholder)
    ));
}

fn render_video(node: &Node, attrs: &str, ctx: &mut Context<'_>) {
    ctx.add_line(&format!(
        "<iframe{} src=\"{}\" frameborder=\"0\" allow=\"accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture\" allowfullscreen></iframe>",
        attrs,
        text(&node.content.video_url)
    ));
}

fn render_divider(_node: &Node, attrs: &str, ctx: &mut Context<'_>) {
    ctx.add_line(&format!("<hr{} />", attrs));
}

fn render_icon(node: &Node, attrs: &str, ctx: &mut Context<'_>) {
    let name = node.content.icon_name.as_deref().unwrap_or("");
    match icon(name) {
        Some(found) => ctx.add_line(&format!("<div{}>{}</div>", attrs, svg(found, 24, ""))),
        None => ctx.add_line(&format!("<!-- Icon not found: {} -->", escape_comment(name))),
    }
}

fn render_alert(node: &Node, attrs: &str, ctx: &mut Context<'_>) {
    let glyph = match node.content.alert_type.unwrap_or_default().icon_name() {
        Some(name) => icon(name)
            .map(|found| svg(found, 24, " style=\"flex-shrink: 0;\""))
            .unwrap_or_default(),
        None => "<!-- Unknown alert type -->".to_string(),
    };
    ctx.add_line(&format!(
        "<div{}>{}<span>{}</span></div>",
        attrs,
        glyph,
        text(&node.content.alert_text)
    ));
}

fn render_progress_bar(_node: &Node, attrs: &str, ctx: &mut Context<'_>) {
    ctx.add_line(&format!(
        "<div{}><div class=\"progress-bar-inner\"></div></div>",
        attrs
    ));
}

fn render_dropdown(node: &Node, attrs: &str, ctx: &mut Context<'_>) {
    let label = node.content.button_text.as_deref().unwrap_or("Dropdown");
    ctx.wrap(
        &format!("<div{} class=\"dropdown-container\">", attrs),
        "</div>",
        |ctx| {
            ctx.add_line(&format!(
                "<button class=\"dropdown-button\">{} &#9662;</button>",
                escape_html(label)
            ));
            ctx.wrap("<ul class=\"dropdown-content\">", "</ul>", |ctx| {
                for option in node.content.dropdown_options.iter().flatten() {
                    ctx.add_line(&format!(
                        "<li><a href=\"{}\">{}</a></li>",
                        escape_html(&option.url),
                        escape_html(&option.label)
                    ));
                }
            });
        },
    );
}

fn render_accordion(node: &Node, attrs: &str, ctx: &mut Context<'_>) {
    ctx.wrap(
        &format!("<div{} class=\"accordion-container\">", attrs),
        "</div>",
        |ctx| {
            for item in node.content.accordion_items.iter().flatten() {
                ctx.wrap("<div class=\"accordion-item\">", "</div>", |ctx| {
                    ctx.add_line(&format!(
                        "<button class=\"accordion-title\"><span>{}</span><span class=\"accordion-icon\">&plus;</span></button>",
                        escape_html(&item.title)
                    ));
                    ctx.add_line(&format!(
                        "<div class=\"accordion-content\"><p>{}</p></div>",
                        escape_html(&item.content)
                    ));
                });
            }
        },
    );
}

/// Tab buttons from the tab list; one panel per child node
fn render_tabs(node: &Node, attrs: &str, ctx: &mut Context<'_>) {
    let active = node.content.active_tab.unwrap_or(0);
    let state = |index: usize| if index == active { " active" } else { "" };

    ctx.wrap(
        &format!("<div{} class=\"tabs-container\">", attrs),
        "</div>",
        |ctx| {
            ctx.wrap("<div class=\"tabs-nav\">", "</div>", |ctx| {
                for (index, tab) in node.content.tabs.iter().flatten().enumerate() {
                    ctx.add_line(&format!(
                        "<button class=\"tab-button{}\" data-tab-index=\"{}\">{}</button>",
                        state(index),
                        index,
                        escape_html(&tab.title)
                    ));
                }
            });
            ctx.wrap("<div class=\"tabs-content-wrapper\">", "</div>", |ctx| {
                for (index, child) in node.children.iter().enumerate() {
                    ctx.wrap(
                        &format!(
                            "<div class=\"tab-content{}\" data-tab-content=\"{}\">",
                            state(index),
                            index
                        ),
                        "</div>",
                        |ctx| compile_node(child, ctx),
                    );
                }
            });
        },
    );
}

fn render_nav(node: &Node, attrs: &str, ctx: &mut Context<'_>) {
    ctx.wrap(&format!("<nav{}>", attrs), "</nav>", |ctx| {
        for link in node.content.nav_links.iter().flatten() {
            ctx.add_line(&format!(
                "<a href=\"{}\">{}</a>",
                escape_html(&link.url),
                escape_html(&link.text)
            ));
        }
    });
}

fn render_label(node: &Node, attrs: &str, ctx: &mut Context<'_>) {
    ctx.add_line(&format!(
        "<label{} for=\"{}\">{}</label>",
        attrs,
        text(&node.content.html_for),
        text(&node.content.text)
    ));
}

fn render_checkbox(node: &Node, attrs: &str, ctx: &mut Context<'_>) {
    render_toggle(node, attrs, "checkbox", ctx);
}

fn render_radio(node: &Node, attrs: &str, ctx: &mut Context<'_>) {
    render_toggle(node, attrs, "radio", ctx);
}

fn render_toggle(node: &Node, attrs: &str, input_type: &str, ctx: &mut Context<'_>) {
    let checked = if node.content.checked == Some(true) {
        " checked"
    } else {
        ""
    };
    ctx.add_line(&format!(
        "<input{} type=\"{}\"{} />",
        attrs, input_type, checked
    ));
}

fn render_select(node: &Node, attrs: &str, ctx: &mut Context<'_>) {
    ctx.wrap(&format!("<select{}>", attrs), "</select>", |ctx| {
        let options = node.content.select_options.as_deref().unwrap_or("");
        for option in options.split(',').map(str::trim).filter(|opt| !opt.is_empty()) {
            ctx.add_line(&format!("<option>{}</option>", escape_html(option)));
        }
    });
}

fn render_map(node: &Node, attrs: &str, ctx: &mut Context<'_>) {
    let query = node.content.map_query.as_deref().unwrap_or("");
    let src = format!(
        "{}{}",
        MAP_EMBED_URL,
        utf8_percent_encode(query, NON_ALPHANUMERIC)
    );
    ctx.add_line(&format!(
        "<iframe{} loading=\"lazy\" allowfullscreen src=\"{}\"></iframe>",
        attrs,
        escape_html(&src)
    ));
}

fn render_social_icons(node: &Node, attrs: &str, ctx: &mut Context<'_>) {
    ctx.wrap(&format!("<div{}>", attrs), "</div>", |ctx| {
        for link in node.content.social_links.iter().flatten() {
            if link.network == SocialNetwork::Unknown {
                ctx.add_line("<!-- Unknown social network -->");
                continue;
            }
            let glyph = icon(link.network.as_str())
                .map(|found| svg(found, 24, ""))
                .unwrap_or_default();
            ctx.add_line(&format!(
                "<a href=\"{}\" aria-label=\"{}\">{}</a>",
                escape_html(&link.url),
                link.network.as_str(),
                glyph
            ));
        }
    });
}

fn render_table(node: &Node, attrs: &str, ctx: &mut Context<'_>) {
    let data = node.content.table_data.as_deref().unwrap_or("");
    ctx.wrap(&format!("<table{}>", attrs), "</table>", |ctx| {
        for (row_index, row) in data.lines().enumerate() {
            let cell_tag = if row_index == 0 { "th" } else { "td" };
            let cells: String = row
                .split(',')
                .map(|cell| format!("<{0}>{1}</{0}>", cell_tag, escape_html(cell.trim())))
                .collect();
            ctx.add_line(&format!("<tr>{}</tr>", cells));
        }
    });
}

fn render_list(node: &Node, attrs: &str, ctx: &mut Context<'_>) {
    let tag = match node.content.list_type.unwrap_or_default() {
        ListType::Ordered => "ol",
        ListType::Unordered => "ul",
    };
    let items = node.content.list_items.as_deref().unwrap_or("");
    ctx.wrap(&format!("<{}{}>", tag, attrs), &format!("</{}>", tag), |ctx| {
        for item in items.lines() {
            ctx.add_line(&format!("<li>{}</li>", escape_html(item)));
        }
    });
}

fn render_blockquote(node: &Node, attrs: &str, ctx: &mut Context<'_>) {
    ctx.wrap(&format!("<blockquote{}>", attrs), "</blockquote>", |ctx| {
        ctx.add_line(&format!("<p>{}</p>", text(&node.content.quote)));
        ctx.add_line(&format!("<footer>- {}</footer>", text(&node.content.cite)));
    });
}

fn render_spinner(_node: &Node, attrs: &str, ctx: &mut Context<'_>) {
    ctx.add_line(&format!("<div{}></div>", attrs));
}

fn render_rating(node: &Node, attrs: &str, ctx: &mut Context<'_>) {
    let max = node
        .content
        .max_rating
        .unwrap_or(DEFAULT_MAX_RATING)
        .min(MAX_RATING_LIMIT);
    let rating = node.content.rating.unwrap_or(0);
    let stars: String = (0..max)
        .map(|index| {
            if index < rating {
                "<span class=\"filled\">&#9733;</span>"
            } else {
                "<span>&#9733;</span>"
            }
        })
        .collect();
    ctx.add_line(&format!("<div{} class=\"rating\">{}</div>", attrs, stars));
}

fn render_carousel(node: &Node, attrs: &str, ctx: &mut Context<'_>) {
    ctx.wrap(
        &format!("<div{} class=\"carousel-container\">", attrs),
        "</div>",
        |ctx| {
            ctx.wrap("<div class=\"carousel-track\">", "</div>", |ctx| {
                for image in node.content.carousel_images.iter().flatten() {
                    ctx.add_line(&format!(
                        "<div class=\"carousel-slide\"><img src=\"{}\" alt=\"{}\" /></div>",
                        escape_html(&image.src),
                        escape_html(&image.alt)
                    ));
                }
            });
            ctx.add_line("<button class=\"carousel-prev\">&#8249;</button>");
            ctx.add_line("<button class=\"carousel-next\">&#8250;</button>");
        },
    );
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Make text safe to place inside `<!-- -->`
fn escape_comment(text: &str) -> String {
    text.replace("--", "- -").replace('>', "&gt;")
}
