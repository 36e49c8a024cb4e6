//! # Editor State
//!
//! The host-facing editing session: the document history plus everything
//! that is not part of undo (theme, settings, viewport, selection).
//!
//! Every successful [`EditorState::apply`] records exactly one history entry;
//! a failed or no-op mutation records nothing.

use crate::errors::EditorError;
use crate::generation::GenerationError;
use crate::history::History;
use crate::mutations::Mutation;
use crate::tree;
use pagewright_model::{
    palette, Document, IdGenerator, Node, NodeKind, Page, ProjectSettings, Theme, Viewport,
};
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct EditorState {
    history: History<Document>,
    theme: Theme,
    settings: ProjectSettings,
    viewports: Vec<Viewport>,
    active_viewport: String,
    selection: Option<String>,
    ids: IdGenerator,
}

impl EditorState {
    /// Start editing `document` with a clock-seeded id generator
    pub fn new(document: Document) -> Self {
        Self::with_id_generator(document, IdGenerator::from_clock())
    }

    pub fn with_id_generator(document: Document, mut ids: IdGenerator) -> Self {
        ids.reserve(document.node_ids());
        let viewports = Viewport::defaults();
        let active_viewport = viewports
            .first()
            .map(|viewport| viewport.name.clone())
            .unwrap_or_default();
        Self {
            history: History::new(document),
            theme: Theme::default(),
            settings: ProjectSettings::default(),
            viewports,
            active_viewport,
            selection: None,
            ids,
        }
    }

    /// Use a custom viewport list; the first entry becomes the reference
    pub fn with_viewports(mut self, viewports: Vec<Viewport>) -> Self {
        if let Some(first) = viewports.first() {
            self.active_viewport = first.name.clone();
        }
        self.viewports = viewports;
        self
    }

    pub fn document(&self) -> &Document {
        self.history.present()
    }

    pub fn history(&self) -> &History<Document> {
        &self.history
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn settings(&self) -> &ProjectSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: ProjectSettings) {
        self.settings = settings;
    }

    pub fn viewports(&self) -> &[Viewport] {
        &self.viewports
    }

    pub fn active_viewport(&self) -> Option<&Viewport> {
        Viewport::find(&self.viewports, &self.active_viewport)
    }

    pub fn set_active_viewport(&mut self, name: &str) -> Result<(), EditorError> {
        if Viewport::find(&self.viewports, name).is_none() {
            return Err(EditorError::UnknownViewport(name.to_string()));
        }
        self.active_viewport = name.to_string();
        Ok(())
    }

    pub fn ids_mut(&mut self) -> &mut IdGenerator {
        &mut self.ids
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    /// Select a node on the active page, or clear the selection
    pub fn select(&mut self, node_id: Option<&str>) {
        self.selection = node_id
            .filter(|id| tree::find(self.document().active_layout(), id).is_some())
            .map(str::to_string);
    }

    pub fn selected_node(&self) -> Option<&Arc<Node>> {
        let id = self.selection.as_deref()?;
        tree::find(self.document().active_layout(), id)
    }

    /// Apply a mutation and record it in history.
    ///
    /// Returns `Ok(false)` when the mutation left the document unchanged.
    pub fn apply(&mut self, mutation: Mutation) -> Result<bool, EditorError> {
        let next = match mutation.apply(self.history.present(), &mut self.ids) {
            Ok(next) => next,
            Err(err) => {
                warn!(mutation = mutation.name(), error = %err, "Mutation rejected");
                return Err(err.into());
            }
        };
        let committed = self.history.commit(next);
        debug!(mutation = mutation.name(), committed, "Applied mutation");
        self.prune_selection();
        Ok(committed)
    }

    pub fn undo(&mut self) -> bool {
        let changed = self.history.undo();
        self.prune_selection();
        changed
    }

    pub fn redo(&mut self) -> bool {
        let changed = self.history.redo();
        self.prune_selection();
        changed
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Switch the active page. Switching to another page starts a fresh
    /// history; selecting the page already active changes nothing.
    pub fn select_page(&mut self, page_id: &str) -> Result<(), EditorError> {
        if page_id == self.document().active_page_id() {
            return Ok(());
        }
        let next = self.document().with_active_page(page_id)?;
        self.history.reset(next);
        self.selection = None;
        Ok(())
    }

    /// Insert a palette node and select it; returns its id
    pub fn add_node(
        &mut self,
        kind: NodeKind,
        parent_id: Option<&str>,
    ) -> Result<String, EditorError> {
        let node = palette::create_node(kind, &mut self.ids);
        let id = node.id.clone();
        self.apply(Mutation::InsertNode {
            parent_id: parent_id.map(str::to_string),
            node,
        })?;
        self.selection = Some(id.clone());
        Ok(id)
    }

    /// Add a page and make it active; returns its id.
    ///
    /// Without a name the page is called `Untitled`, `Untitled 2`, ...
    pub fn add_page(&mut self, name: Option<&str>) -> Result<String, EditorError> {
        let name = match name {
            Some(name) => name.to_string(),
            None => self.next_untitled_name(),
        };
        let id = self.ids.new_page_id(&name);
        self.apply(Mutation::AddPage {
            page: Page::titled(id.clone(), name),
        })?;
        self.selection = None;
        Ok(id)
    }

    /// Replace the active page's layout with generated nodes.
    ///
    /// Failures leave the editor untouched.
    pub fn apply_generated(
        &mut self,
        generated: Result<Vec<Node>, GenerationError>,
    ) -> Result<bool, EditorError> {
        let nodes = match generated {
            Ok(nodes) => nodes,
            Err(err) => {
                warn!(error = %err, "Discarding generated layout");
                return Err(err.into());
            }
        };
        let page_id = self.document().active_page_id().to_string();
        self.apply(Mutation::ReplaceLayout { page_id, nodes })
    }

    fn next_untitled_name(&self) -> String {
        let taken = |name: &str| self.document().pages().iter().any(|page| page.name == name);
        if !taken("Untitled") {
            return "Untitled".to_string();
        }
        (2..)
            .map(|n| format!("Untitled {}", n))
            .find(|name| !taken(name))
            .unwrap_or_else(|| "Untitled".to_string())
    }

    fn prune_selection(&mut self) {
        if self.selection.is_some() && self.selected_node().is_none() {
            self.selection = None;
        }
    }
}
