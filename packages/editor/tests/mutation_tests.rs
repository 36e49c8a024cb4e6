//! Tree and document mutation tests

use pagewright_editor::{tree, EditorState, Mutation, MutationError};
use pagewright_model::{
    Document, IdGenerator, Node, NodeKind, NodePatch, Page, StyleLayer, StyleProperty,
    REFERENCE_VIEWPORT,
};
use std::sync::Arc;

fn positioned(id: &str, kind: NodeKind, top: &str, left: &str) -> Node {
    Node::new(id, kind, kind.as_str()).with_base(
        StyleLayer::new()
            .with(StyleProperty::Top, top)
            .with(StyleProperty::Left, left),
    )
}

fn sample_tree() -> Vec<Arc<Node>> {
    let hero = positioned("hero", NodeKind::Container, "0px", "0px")
        .with_child(positioned("title", NodeKind::Text, "10px", "20px"))
        .with_child(positioned("cta", NodeKind::Button, "60px", "20px"));
    vec![
        Arc::new(hero),
        Arc::new(positioned("footer", NodeKind::Footer, "600px", "0px")),
    ]
}

fn state_with(nodes: Vec<Node>) -> EditorState {
    let doc = Document::new(Page::titled("home", "Home"));
    let mut state = EditorState::with_id_generator(doc, IdGenerator::new("mutation-tests"));
    state
        .apply(Mutation::ReplaceLayout {
            page_id: "home".to_string(),
            nodes,
        })
        .unwrap();
    state
}

#[test]
fn test_absent_id_leaves_tree_unchanged() {
    let tree = sample_tree();

    assert_eq!(tree::replace(&tree, "absent", &NodePatch::name("x")), tree);
    assert_eq!(tree::delete(&tree, "absent").0, tree);
    assert_eq!(
        tree::insert(&tree, Some("absent"), Node::new("n", NodeKind::Text, "Text")),
        tree
    );
}

#[test]
fn test_clone_ids_are_disjoint_and_offset() {
    let tree = sample_tree();
    let mut ids = IdGenerator::new("clone");
    let source = tree::find(&tree, "hero").unwrap();

    let copy = tree::clone_node(source, &mut ids);

    let existing = tree::collect_ids(&tree);
    for id in copy.subtree_ids() {
        assert!(!existing.contains(id), "clone reused id {}", id);
    }

    let base = &copy.children[0].styles_by_viewport[REFERENCE_VIEWPORT].base;
    assert_eq!(base.get(StyleProperty::Top), Some("30px"));
    assert_eq!(base.get(StyleProperty::Left), Some("40px"));
}

#[test]
fn test_deleting_container_removes_children() {
    let tree = sample_tree();
    let (next, removed) = tree::delete(&tree, "hero");

    let removed = removed.unwrap();
    assert_eq!(removed.subtree_ids(), vec!["hero", "title", "cta"]);

    let remaining = tree::collect_ids(&next);
    for id in ["hero", "title", "cta"] {
        assert!(!remaining.contains(id));
    }
    assert!(remaining.contains("footer"));
}

#[test]
fn test_insert_node_into_missing_parent_is_reported() {
    let mut state = state_with(vec![]);

    let result = state.apply(Mutation::InsertNode {
        parent_id: Some("gone".to_string()),
        node: Node::new("n1", NodeKind::Text, "Text"),
    });

    assert!(result.is_err());
    assert!(state.document().active_layout().is_empty());
}

#[test]
fn test_duplicate_node_lands_next_to_original() {
    let mut state = state_with(vec![positioned("card", NodeKind::Card, "100px", "100px")
        .with_child(positioned("label", NodeKind::Text, "0px", "0px"))]);

    state
        .apply(Mutation::DuplicateNode {
            node_id: "label".to_string(),
        })
        .unwrap();

    let card = tree::find(state.document().active_layout(), "card").unwrap();
    assert_eq!(card.children.len(), 2);

    let copy = &card.children[1];
    assert_eq!(copy.name, "Text Copy");
    assert_ne!(copy.id, "label");
    assert_eq!(
        copy.styles_by_viewport[REFERENCE_VIEWPORT]
            .base
            .get(StyleProperty::Top),
        Some("20px")
    );
}

#[test]
fn test_duplicate_renames_whole_subtree() {
    let mut state = state_with(sample_tree().iter().map(|node| Node::clone(node)).collect());

    state
        .apply(Mutation::DuplicateNode {
            node_id: "hero".to_string(),
        })
        .unwrap();

    let layout = state.document().active_layout();
    assert_eq!(layout.len(), 3);
    let copy = &layout[2];
    assert_eq!(copy.name, "Container Copy");
    let names: Vec<_> = copy.children.iter().map(|child| child.name.as_str()).collect();
    assert_eq!(names, vec!["Text Copy", "Button Copy"]);
    assert_eq!(tree::find(layout, "title").unwrap().name, "Text");
}

#[test]
fn test_update_node_merges_patch() {
    let mut state = state_with(vec![positioned("t", NodeKind::Text, "0px", "0px")]);

    let mut content = pagewright_model::Content::default();
    content.text = Some("Hello".to_string());
    state
        .apply(Mutation::UpdateNode {
            node_id: "t".to_string(),
            patch: NodePatch::content(content),
        })
        .unwrap();

    let node = tree::find(state.document().active_layout(), "t").unwrap();
    assert_eq!(node.content.text.as_deref(), Some("Hello"));
    assert_eq!(node.name, "Text");
}

#[test]
fn test_page_mutations() {
    let mut state = state_with(vec![]);
    let about = state.add_page(Some("About Us")).unwrap();

    assert_eq!(state.document().active_page_id(), about);
    assert_eq!(state.document().pages().len(), 2);

    state
        .apply(Mutation::UpdatePage {
            page_id: about.clone(),
            patch: pagewright_model::PagePatch {
                seo_title: Some("About".to_string()),
                ..Default::default()
            },
        })
        .unwrap();
    assert_eq!(state.document().page(&about).unwrap().title(), "About");

    state
        .apply(Mutation::DeletePage { page_id: about })
        .unwrap();
    assert_eq!(state.document().active_page_id(), "home");

    let last = state.apply(Mutation::DeletePage {
        page_id: "home".to_string(),
    });
    assert!(matches!(
        last,
        Err(pagewright_editor::EditorError::Mutation(MutationError::LastPage))
    ));
}

#[test]
fn test_clear_unknown_page_fails() {
    let mut state = state_with(vec![]);
    assert!(state
        .apply(Mutation::ClearPage {
            page_id: "nowhere".to_string()
        })
        .is_err());
}

#[test]
fn test_generated_layout_is_applied_atomically() {
    let mut state = state_with(vec![positioned("old", NodeKind::Text, "0px", "0px")]);
    let levels = state.history().undo_levels();

    let generated = pagewright_editor::parse_generated_layout(
        r#"[{"type": "Text", "name": "Headline"}, {"type": "Button", "name": "Go"}]"#,
        state.ids_mut(),
    );
    assert!(state.apply_generated(generated).unwrap());

    let layout = state.document().active_layout();
    assert_eq!(layout.len(), 2);
    assert_eq!(state.history().undo_levels(), levels + 1);

    let broken = pagewright_editor::parse_generated_layout("{}", state.ids_mut());
    let before = state.document().clone();
    assert!(state.apply_generated(broken).is_err());
    assert_eq!(state.document(), &before);
    assert_eq!(state.history().undo_levels(), levels + 1);
}

#[test]
fn test_generated_layout_with_ids_from_other_page_is_rejected() {
    let mut state = state_with(vec![positioned("shared", NodeKind::Text, "0px", "0px")]);
    state.add_page(None).unwrap();

    let result = state.apply_generated(Ok(vec![Node::new("shared", NodeKind::Text, "Text")]));

    assert!(matches!(
        result,
        Err(pagewright_editor::EditorError::Mutation(
            MutationError::DuplicateId(_)
        ))
    ));
}
