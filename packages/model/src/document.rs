//! Pages, the multi-page document, and document-wide settings.

use crate::error::{ModelError, ModelResult};
use crate::node::{Layout, Node};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_js: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_head_content: Option<String>,
}

impl Page {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            seo_title: None,
            seo_description: None,
            custom_js: None,
            custom_head_content: None,
        }
    }

    /// A page whose SEO fields are filled in from its name
    pub fn titled(id: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            seo_title: Some(name.clone()),
            seo_description: Some(format!("This is the {} page.", name)),
            ..Self::new(id, name)
        }
    }

    /// Title shown in the browser tab
    pub fn title(&self) -> &str {
        self.seo_title.as_deref().unwrap_or(&self.name)
    }
}

/// Partial page properties; present fields replace the page's values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PagePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_js: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_head_content: Option<String>,
}

impl PagePatch {
    pub fn apply_to(&self, page: &Page) -> Page {
        let mut merged = page.clone();
        if let Some(name) = &self.name {
            merged.name = name.clone();
        }
        if let Some(seo_title) = &self.seo_title {
            merged.seo_title = Some(seo_title.clone());
        }
        if let Some(seo_description) = &self.seo_description {
            merged.seo_description = Some(seo_description.clone());
        }
        if let Some(custom_js) = &self.custom_js {
            merged.custom_js = Some(custom_js.clone());
        }
        if let Some(head) = &self.custom_head_content {
            merged.custom_head_content = Some(head.clone());
        }
        merged
    }
}

/// Document-wide typography and colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub font_family: String,
    /// Hex value or a `bg-*` token
    pub body_background: String,
    /// Hex value or a `text-*` token
    pub body_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            font_family: "Inter, sans-serif".to_string(),
            body_background: "bg-white".to_string(),
            body_color: "text-gray-900".to_string(),
        }
    }
}

/// Author-supplied text injected into every exported page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_js: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_head_content: Option<String>,
}

/// The multi-page layout document.
///
/// Always holds at least one page, and every page has a layout entry.
/// All edits return a new `Document`; layouts share unchanged nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawDocument")]
pub struct Document {
    pages: Vec<Page>,
    #[serde(rename = "pageLayouts")]
    layouts: BTreeMap<String, Layout>,
    active_page_id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDocument {
    pages: Vec<Page>,
    #[serde(default, rename = "pageLayouts")]
    layouts: BTreeMap<String, Layout>,
    #[serde(default)]
    active_page_id: Option<String>,
}

impl TryFrom<RawDocument> for Document {
    type Error = ModelError;

    fn try_from(raw: RawDocument) -> Result<Self, Self::Error> {
        let first = raw.pages.first().ok_or(ModelError::NoPages)?.id.clone();
        let mut layouts = raw.layouts;
        let mut seen = HashSet::new();
        for page in &raw.pages {
            if !seen.insert(page.id.as_str()) {
                return Err(ModelError::DuplicatePage(page.id.clone()));
            }
            layouts.entry(page.id.clone()).or_default();
        }
        layouts.retain(|page_id, _| seen.contains(page_id.as_str()));

        let active_page_id = raw
            .active_page_id
            .filter(|id| seen.contains(id.as_str()))
            .unwrap_or(first);

        let document = Self {
            pages: raw.pages,
            layouts,
            active_page_id,
        };
        document.validate()?;
        Ok(document)
    }
}

impl Document {
    /// Create a document holding a single, empty page
    pub fn new(page: Page) -> Self {
        let mut layouts = BTreeMap::new();
        layouts.insert(page.id.clone(), Vec::new());
        Self {
            active_page_id: page.id.clone(),
            pages: vec![page],
            layouts,
        }
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page(&self, page_id: &str) -> Option<&Page> {
        self.pages.iter().find(|page| page.id == page_id)
    }

    /// Position of a page in the page order
    pub fn page_index(&self, page_id: &str) -> Option<usize> {
        self.pages.iter().position(|page| page.id == page_id)
    }

    pub fn active_page_id(&self) -> &str {
        &self.active_page_id
    }

    pub fn active_page(&self) -> &Page {
        self.page(&self.active_page_id)
            .unwrap_or(&self.pages[0])
    }

    /// Root nodes of a page; empty for unknown pages
    pub fn layout(&self, page_id: &str) -> &[Arc<Node>] {
        self.layouts.get(page_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn active_layout(&self) -> &[Arc<Node>] {
        self.layout(&self.active_page_id)
    }

    pub fn layouts(&self) -> &BTreeMap<String, Layout> {
        &self.layouts
    }

    /// Replace one page's layout
    pub fn with_layout(&self, page_id: &str, layout: Layout) -> ModelResult<Document> {
        if self.page(page_id).is_none() {
            return Err(ModelError::PageNotFound(page_id.to_string()));
        }
        let mut next = self.clone();
        next.layouts.insert(page_id.to_string(), layout);
        Ok(next)
    }

    /// Append a page with an empty layout and make it active
    pub fn with_page_added(&self, page: Page) -> ModelResult<Document> {
        if self.page(&page.id).is_some() {
            return Err(ModelError::DuplicatePage(page.id));
        }
        let mut next = self.clone();
        next.layouts.insert(page.id.clone(), Vec::new());
        next.active_page_id = page.id.clone();
        next.pages.push(page);
        Ok(next)
    }

    pub fn with_page_updated(&self, page_id: &str, patch: &PagePatch) -> ModelResult<Document> {
        let index = self
            .page_index(page_id)
            .ok_or_else(|| ModelError::PageNotFound(page_id.to_string()))?;
        let mut next = self.clone();
        next.pages[index] = patch.apply_to(&self.pages[index]);
        Ok(next)
    }

    /// Remove a page together with its layout.
    ///
    /// The last remaining page can never be removed. When the active page is
    /// removed the first remaining page becomes active.
    pub fn with_page_removed(&self, page_id: &str) -> ModelResult<Document> {
        let index = self
            .page_index(page_id)
            .ok_or_else(|| ModelError::PageNotFound(page_id.to_string()))?;
        if self.pages.len() <= 1 {
            return Err(ModelError::LastPage);
        }
        let mut next = self.clone();
        next.pages.remove(index);
        next.layouts.remove(page_id);
        if next.active_page_id == page_id {
            next.active_page_id = next.pages[0].id.clone();
        }
        Ok(next)
    }

    pub fn with_active_page(&self, page_id: &str) -> ModelResult<Document> {
        if self.page(page_id).is_none() {
            return Err(ModelError::PageNotFound(page_id.to_string()));
        }
        let mut next = self.clone();
        next.active_page_id = page_id.to_string();
        Ok(next)
    }

    /// Every node id in every page, pre-order per page
    pub fn node_ids(&self) -> Vec<&str> {
        self.pages
            .iter()
            .flat_map(|page| self.layout(&page.id))
            .flat_map(|node| node.subtree_ids())
            .collect()
    }

    /// Check that node ids are unique across the whole document
    pub fn validate(&self) -> ModelResult<()> {
        let mut seen = HashSet::new();
        for id in self.node_ids() {
            if !seen.insert(id) {
                return Err(ModelError::DuplicateId(id.to_string()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeKind;

    fn two_page_document() -> Document {
        Document::new(Page::titled("home", "Home"))
            .with_page_added(Page::titled("about", "About"))
            .unwrap()
    }

    #[test]
    fn test_new_document_has_one_active_page() {
        let doc = Document::new(Page::new("home", "Home"));
        assert_eq!(doc.pages().len(), 1);
        assert_eq!(doc.active_page_id(), "home");
        assert!(doc.active_layout().is_empty());
    }

    #[test]
    fn test_last_page_cannot_be_removed() {
        let doc = Document::new(Page::new("home", "Home"));
        assert_eq!(doc.with_page_removed("home"), Err(ModelError::LastPage));
    }

    #[test]
    fn test_removing_active_page_activates_first() {
        let doc = two_page_document();
        assert_eq!(doc.active_page_id(), "about");

        let next = doc.with_page_removed("about").unwrap();
        assert_eq!(next.active_page_id(), "home");
        assert!(next.layouts().get("about").is_none());
    }

    #[test]
    fn test_validate_rejects_ids_shared_across_pages() {
        let node = Arc::new(Node::new("dup", NodeKind::Text, "Text"));
        let doc = two_page_document()
            .with_layout("home", vec![node.clone()])
            .unwrap()
            .with_layout("about", vec![node])
            .unwrap();

        assert_eq!(doc.validate(), Err(ModelError::DuplicateId("dup".to_string())));
    }

    #[test]
    fn test_deserialize_fills_missing_layouts_and_active_page() {
        let json = r#"{"pages":[{"id":"home","name":"Home"},{"id":"blog","name":"Blog"}]}"#;
        let doc: Document = serde_json::from_str(json).unwrap();

        assert_eq!(doc.active_page_id(), "home");
        assert_eq!(doc.layouts().len(), 2);
    }

    #[test]
    fn test_malformed_content_does_not_reject_document() {
        let json = r#"{
            "pages": [{ "id": "home", "name": "Home" }],
            "pageLayouts": {
                "home": [
                    { "id": "r-1", "type": "Rating", "name": "Rating", "content": { "rating": "4" } },
                    { "id": "t-1", "type": "Text", "name": "Text", "content": { "text": "Hi" } }
                ]
            }
        }"#;
        let doc: Document = serde_json::from_str(json).unwrap();

        assert_eq!(doc.node_ids(), vec!["r-1", "t-1"]);
        assert_eq!(doc.layout("home")[0].content.rating, None);
    }

    #[test]
    fn test_deserialize_rejects_empty_document() {
        let json = r#"{"pages":[]}"#;
        assert!(serde_json::from_str::<Document>(json).is_err());
    }

    #[test]
    fn test_page_title_falls_back_to_name() {
        assert_eq!(Page::new("p", "Pricing").title(), "Pricing");
        assert_eq!(Page::titled("p", "Pricing").title(), "Pricing");
    }
}
