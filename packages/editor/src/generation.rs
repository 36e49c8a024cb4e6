//! Boundary for layouts produced by a text generator.
//!
//! The generator answers with a JSON array of node drafts, optionally wrapped
//! in a ```` ```json ```` fence. Drafts carry no trustworthy ids, so every
//! node gets a fresh one from the editor's [`IdGenerator`].

use pagewright_model::{Content, IdGenerator, Link, Node, NodeKind, ViewportStyles};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Generated layout is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Generated layout is not an array of nodes")]
    NotAnArray,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NodeDraft {
    #[serde(rename = "type")]
    kind: NodeKind,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    styles_by_viewport: BTreeMap<String, ViewportStyles>,
    #[serde(default)]
    content: Content,
    #[serde(default)]
    children: Vec<NodeDraft>,
    #[serde(default, rename = "linkUrl")]
    link: Option<Link>,
    #[serde(default)]
    events: BTreeMap<String, String>,
}

impl NodeDraft {
    fn into_node(self, ids: &mut IdGenerator) -> Node {
        let id = ids.new_id(self.kind);
        let children = self
            .children
            .into_iter()
            .map(|child| Arc::new(child.into_node(ids)))
            .collect();
        Node {
            id,
            kind: self.kind,
            name: self.name.unwrap_or_else(|| self.kind.as_str().to_string()),
            styles_by_viewport: self.styles_by_viewport,
            content: self.content,
            children,
            link: self.link,
            events: self.events,
        }
    }
}

/// Parse a generator response into root nodes with fresh ids
pub fn parse_generated_layout(
    response: &str,
    ids: &mut IdGenerator,
) -> Result<Vec<Node>, GenerationError> {
    let value: serde_json::Value = serde_json::from_str(strip_fence(response))?;
    if !value.is_array() {
        return Err(GenerationError::NotAnArray);
    }
    let drafts: Vec<NodeDraft> = serde_json::from_value(value)?;
    Ok(drafts.into_iter().map(|draft| draft.into_node(ids)).collect())
}

fn strip_fence(response: &str) -> &str {
    let trimmed = response.trim();
    let Some(body) = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
    else {
        return trimmed;
    };
    body.strip_suffix("```").unwrap_or(body).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagewright_model::{SocialNetwork, StyleProperty};

    #[test]
    fn test_fenced_response_is_accepted() {
        let mut ids = IdGenerator::new("ai");
        let response = "```json\n[{\"type\":\"Text\",\"name\":\"Title\",\"content\":{\"text\":\"Hi\"}}]\n```";

        let nodes = parse_generated_layout(response, &mut ids).unwrap();

        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].kind, NodeKind::Text);
        assert_eq!(nodes[0].content.text.as_deref(), Some("Hi"));
    }

    #[test]
    fn test_every_node_gets_a_fresh_id() {
        let mut ids = IdGenerator::new("ai");
        let response = r#"[
            {"id": "x", "type": "Container", "name": "Hero",
             "stylesByViewport": {"Desktop": {"base": {"top": "10px"}}},
             "children": [{"id": "x", "type": "Button", "name": "CTA"}]}
        ]"#;

        let nodes = parse_generated_layout(response, &mut ids).unwrap();
        let root = &nodes[0];

        assert_ne!(root.id, "x");
        assert_ne!(root.children[0].id, "x");
        assert_ne!(root.id, root.children[0].id);
        assert_eq!(
            root.styles_by_viewport["Desktop"].base.get(StyleProperty::Top),
            Some("10px")
        );
    }

    #[test]
    fn test_malformed_content_keeps_the_layout() {
        let mut ids = IdGenerator::new("ai");
        let response = r#"[
            {"type": "SocialIcons", "content": {"socialLinks": [
                {"id": "s", "network": "youtube", "url": "https://youtube.com"}
            ]}},
            {"type": "Rating", "content": {"rating": "4", "maxRating": 5}},
            {"type": "Text", "content": {"text": "Hi"}}
        ]"#;

        let nodes = parse_generated_layout(response, &mut ids).unwrap();

        assert_eq!(nodes.len(), 3);
        let links = nodes[0].content.social_links.as_ref().unwrap();
        assert_eq!(links[0].network, SocialNetwork::Unknown);
        assert_eq!(nodes[1].content.rating, None);
        assert_eq!(nodes[1].content.max_rating, Some(5));
        assert_eq!(nodes[2].content.text.as_deref(), Some("Hi"));
    }

    #[test]
    fn test_object_response_is_rejected() {
        let mut ids = IdGenerator::new("ai");
        assert!(matches!(
            parse_generated_layout(r#"{"type":"Text"}"#, &mut ids),
            Err(GenerationError::NotAnArray)
        ));
        assert!(matches!(
            parse_generated_layout("not json", &mut ids),
            Err(GenerationError::Json(_))
        ));
    }
}
