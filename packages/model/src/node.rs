use crate::lenient;
use crate::style::{StyleLayer, ViewportStyles};
use crate::viewport::REFERENCE_VIEWPORT;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// A page's root-level forest
pub type Layout = Vec<Arc<Node>>;

/// Every kind of element the editor can place on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Container,
    Text,
    Button,
    Image,
    Dropdown,
    Input,
    Textarea,
    Video,
    Divider,
    Card,
    Icon,
    ProgressBar,
    Alert,
    Accordion,
    Tabs,
    Navbar,
    Footer,
    Form,
    Label,
    Checkbox,
    Radio,
    Select,
    Map,
    SocialIcons,
    Table,
    List,
    Blockquote,
    Spinner,
    Rating,
    Carousel,
    Fieldset,
    /// Kind names this version does not recognize
    #[serde(other)]
    Unknown,
}

impl NodeKind {
    pub const PALETTE: [NodeKind; 31] = [
        NodeKind::Container,
        NodeKind::Text,
        NodeKind::Button,
        NodeKind::Image,
        NodeKind::Dropdown,
        NodeKind::Input,
        NodeKind::Textarea,
        NodeKind::Video,
        NodeKind::Divider,
        NodeKind::Card,
        NodeKind::Icon,
        NodeKind::ProgressBar,
        NodeKind::Alert,
        NodeKind::Accordion,
        NodeKind::Tabs,
        NodeKind::Navbar,
        NodeKind::Footer,
        NodeKind::Form,
        NodeKind::Label,
        NodeKind::Checkbox,
        NodeKind::Radio,
        NodeKind::Select,
        NodeKind::Map,
        NodeKind::SocialIcons,
        NodeKind::Table,
        NodeKind::List,
        NodeKind::Blockquote,
        NodeKind::Spinner,
        NodeKind::Rating,
        NodeKind::Carousel,
        NodeKind::Fieldset,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Container => "Container",
            NodeKind::Text => "Text",
            NodeKind::Button => "Button",
            NodeKind::Image => "Image",
            NodeKind::Dropdown => "Dropdown",
            NodeKind::Input => "Input",
            NodeKind::Textarea => "Textarea",
            NodeKind::Video => "Video",
            NodeKind::Divider => "Divider",
            NodeKind::Card => "Card",
            NodeKind::Icon => "Icon",
            NodeKind::ProgressBar => "ProgressBar",
            NodeKind::Alert => "Alert",
            NodeKind::Accordion => "Accordion",
            NodeKind::Tabs => "Tabs",
            NodeKind::Navbar => "Navbar",
            NodeKind::Footer => "Footer",
            NodeKind::Form => "Form",
            NodeKind::Label => "Label",
            NodeKind::Checkbox => "Checkbox",
            NodeKind::Radio => "Radio",
            NodeKind::Select => "Select",
            NodeKind::Map => "Map",
            NodeKind::SocialIcons => "SocialIcons",
            NodeKind::Table => "Table",
            NodeKind::List => "List",
            NodeKind::Blockquote => "Blockquote",
            NodeKind::Spinner => "Spinner",
            NodeKind::Rating => "Rating",
            NodeKind::Carousel => "Carousel",
            NodeKind::Fieldset => "Fieldset",
            NodeKind::Unknown => "Unknown",
        }
    }

    /// Lowercase, hyphenated form used as the id prefix
    pub fn slug(self) -> String {
        let mut slug = String::new();
        for (i, ch) in self.as_str().chars().enumerate() {
            if ch.is_ascii_uppercase() {
                if i > 0 {
                    slug.push('-');
                }
                slug.push(ch.to_ascii_lowercase());
            } else {
                slug.push(ch);
            }
        }
        slug
    }

    /// Kinds that accept arbitrary child nodes
    pub fn is_container(self) -> bool {
        matches!(
            self,
            NodeKind::Container | NodeKind::Card | NodeKind::Form | NodeKind::Fieldset
        )
    }

    /// Interactive kinds whose children or items are panes/slides
    pub fn is_composite(self) -> bool {
        matches!(self, NodeKind::Tabs | NodeKind::Accordion | NodeKind::Carousel)
    }

    pub fn accepts_children(self) -> bool {
        self.is_container() || self.is_composite()
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outbound link attached to a node.
///
/// Internal links are serialized as `page:<page id>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Link {
    External(String),
    Page(String),
}

const PAGE_LINK_PREFIX: &str = "page:";

impl From<String> for Link {
    fn from(value: String) -> Self {
        match value.strip_prefix(PAGE_LINK_PREFIX) {
            Some(page_id) => Link::Page(page_id.to_string()),
            None => Link::External(value),
        }
    }
}

impl From<Link> for String {
    fn from(link: Link) -> Self {
        match link {
            Link::External(url) => url,
            Link::Page(page_id) => format!("{}{}", PAGE_LINK_PREFIX, page_id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub id: String,
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccordionItem {
    pub id: String,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub id: String,
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialNetwork {
    Facebook,
    Twitter,
    Instagram,
    Linkedin,
    Github,
    #[serde(other)]
    Unknown,
}

impl SocialNetwork {
    pub fn as_str(self) -> &'static str {
        match self {
            SocialNetwork::Facebook => "facebook",
            SocialNetwork::Twitter => "twitter",
            SocialNetwork::Instagram => "instagram",
            SocialNetwork::Linkedin => "linkedin",
            SocialNetwork::Github => "github",
            SocialNetwork::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub id: String,
    pub network: SocialNetwork,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselImage {
    pub id: String,
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertType {
    #[default]
    #[serde(alias = "info")]
    Info,
    #[serde(alias = "success")]
    Success,
    #[serde(alias = "warning")]
    Warning,
    #[serde(alias = "error")]
    Error,
    #[serde(other)]
    Unknown,
}

impl AlertType {
    /// Name of the icon shown next to the alert text
    pub fn icon_name(self) -> Option<&'static str> {
        match self {
            AlertType::Info => Some("info"),
            AlertType::Success => Some("success"),
            AlertType::Warning => Some("warning"),
            AlertType::Error => Some("error"),
            AlertType::Unknown => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    Ordered,
    #[default]
    Unordered,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FormMethod {
    Get,
    #[default]
    Post,
}

impl FormMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            FormMethod::Get => "GET",
            FormMethod::Post => "POST",
        }
    }
}

/// Kind-specific payload of a node.
///
/// Every field is optional; each kind reads the fields it understands and
/// ignores the rest. Non-text fields holding a value of the wrong shape
/// load as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_for: Option<String>,
    #[serde(
        deserialize_with = "lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub checked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dropdown_options: Option<Vec<DropdownOption>>,
    /// Comma-separated option labels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select_options: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_name: Option<String>,
    #[serde(
        deserialize_with = "lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub progress: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_text: Option<String>,
    #[serde(
        deserialize_with = "lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub alert_type: Option<AlertType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accordion_items: Option<Vec<AccordionItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tabs: Option<Vec<Tab>>,
    #[serde(
        deserialize_with = "lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub active_tab: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nav_links: Option<Vec<NavLink>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_links: Option<Vec<SocialLink>>,
    /// CSV, first row is the header
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_data: Option<String>,
    /// Newline-separated items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_items: Option<String>,
    #[serde(
        deserialize_with = "lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub list_type: Option<ListType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cite: Option<String>,
    #[serde(
        deserialize_with = "lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub rating: Option<u32>,
    #[serde(
        deserialize_with = "lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_rating: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carousel_images: Option<Vec<CarouselImage>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_action: Option<String>,
    #[serde(
        deserialize_with = "lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub form_method: Option<FormMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_enctype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_name: Option<String>,
    #[serde(
        deserialize_with = "lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autocomplete: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend_text: Option<String>,
}

/// One element of the layout tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub name: String,
    #[serde(default)]
    pub styles_by_viewport: BTreeMap<String, ViewportStyles>,
    #[serde(default)]
    pub content: Content,
    #[serde(default)]
    pub children: Vec<Arc<Node>>,
    #[serde(default, rename = "linkUrl", skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub events: BTreeMap<String, String>,
}

impl Node {
    pub fn new(id: impl Into<String>, kind: NodeKind, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            name: name.into(),
            styles_by_viewport: BTreeMap::new(),
            content: Content::default(),
            children: Vec::new(),
            link: None,
            events: BTreeMap::new(),
        }
    }

    pub fn with_styles(mut self, viewport: impl Into<String>, styles: ViewportStyles) -> Self {
        self.styles_by_viewport.insert(viewport.into(), styles);
        self
    }

    /// Set the reference viewport's base layer
    pub fn with_base(self, base: StyleLayer) -> Self {
        self.with_styles(REFERENCE_VIEWPORT, ViewportStyles::new(base))
    }

    pub fn with_content(mut self, content: Content) -> Self {
        self.content = content;
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(Arc::new(child));
        self
    }

    pub fn with_link(mut self, link: Link) -> Self {
        self.link = Some(link);
        self
    }

    pub fn with_event(mut self, event: impl Into<String>, code: impl Into<String>) -> Self {
        self.events.insert(event.into(), code.into());
        self
    }

    /// Styles of the reference viewport, if any
    pub fn reference_styles(&self) -> Option<&ViewportStyles> {
        self.styles_by_viewport.get(REFERENCE_VIEWPORT)
    }

    /// Ids of this node and every descendant, pre-order
    pub fn subtree_ids(&self) -> Vec<&str> {
        let mut ids = vec![self.id.as_str()];
        for child in &self.children {
            ids.extend(child.subtree_ids());
        }
        ids
    }
}

/// Partial node properties for a shallow merge.
///
/// `styles_by_viewport` is merged per viewport; every other present field
/// replaces the node's value wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NodePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<NodeKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles_by_viewport: Option<BTreeMap<String, ViewportStyles>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Arc<Node>>>,
    /// `Some(None)` clears the link; `"linkUrl": null` in JSON
    #[serde(
        rename = "linkUrl",
        deserialize_with = "lenient::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub link: Option<Option<Link>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<BTreeMap<String, String>>,
}

impl NodePatch {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn content(content: Content) -> Self {
        Self {
            content: Some(content),
            ..Default::default()
        }
    }

    pub fn styles(viewport: impl Into<String>, styles: ViewportStyles) -> Self {
        let mut map = BTreeMap::new();
        map.insert(viewport.into(), styles);
        Self {
            styles_by_viewport: Some(map),
            ..Default::default()
        }
    }

    pub fn link(link: Option<Link>) -> Self {
        Self {
            link: Some(link),
            ..Default::default()
        }
    }

    /// Shallow-merge this patch into `node`
    pub fn apply_to(&self, node: &Node) -> Node {
        let mut merged = node.clone();
        if let Some(name) = &self.name {
            merged.name = name.clone();
        }
        if let Some(kind) = self.kind {
            merged.kind = kind;
        }
        if let Some(content) = &self.content {
            merged.content = content.clone();
        }
        if let Some(styles) = &self.styles_by_viewport {
            for (viewport, entry) in styles {
                merged.styles_by_viewport.insert(viewport.clone(), entry.clone());
            }
        }
        if let Some(children) = &self.children {
            merged.children = children.clone();
        }
        if let Some(link) = &self.link {
            merged.link = link.clone();
        }
        if let Some(events) = &self.events {
            merged.events = events.clone();
        }
        merged
    }
}
