//! History behavior through the editor state

use pagewright_editor::{EditorState, History, Mutation};
use pagewright_model::{Document, IdGenerator, NodeKind, NodePatch, Page};

fn state() -> EditorState {
    EditorState::with_id_generator(
        Document::new(Page::titled("home", "Home")),
        IdGenerator::new("history-tests"),
    )
}

#[test]
fn test_equal_commit_leaves_stacks_alone() {
    let mut history = History::new(Document::new(Page::new("home", "Home")));
    let with_page = Document::new(Page::new("home", "Home"))
        .with_page_added(Page::new("a", "A"))
        .unwrap();
    history.commit(with_page);
    history.undo();

    let (past, future) = (history.undo_levels(), history.redo_levels());
    let same = history.present().clone();
    assert!(!history.commit(same));
    assert_eq!(history.undo_levels(), past);
    assert_eq!(history.redo_levels(), future);
}

#[test]
fn test_undo_redo_round_trip() {
    let mut state = state();
    let button = state.add_node(NodeKind::Button, None).unwrap();
    state.add_node(NodeKind::Text, None).unwrap();
    state
        .apply(Mutation::UpdateNode {
            node_id: button,
            patch: NodePatch::name("Primary"),
        })
        .unwrap();

    for _ in 0..3 {
        let before = state.document().clone();
        assert!(state.undo());
        assert!(state.redo());
        assert_eq!(state.document(), &before);
        state.undo();
    }
    assert!(!state.can_undo());
    assert_eq!(state.history().redo_levels(), 3);
}

#[test]
fn test_noop_mutation_is_not_recorded() {
    let mut state = state();
    state.add_node(NodeKind::Text, None).unwrap();

    let committed = state
        .apply(Mutation::RemoveNode {
            node_id: "missing".to_string(),
        })
        .unwrap();

    assert!(!committed);
    assert_eq!(state.history().undo_levels(), 1);
}

#[test]
fn test_switching_pages_resets_history() {
    let mut state = state();
    state.add_node(NodeKind::Text, None).unwrap();
    state.add_page(None).unwrap();
    assert!(state.can_undo());

    state.select_page("home").unwrap();

    assert!(!state.can_undo());
    assert!(!state.can_redo());
    assert_eq!(state.document().active_page_id(), "home");
    assert_eq!(state.document().active_layout().len(), 1);
}

#[test]
fn test_reselecting_active_page_keeps_history() {
    let mut state = state();
    state.add_node(NodeKind::Text, None).unwrap();
    state.add_node(NodeKind::Image, None).unwrap();
    state.undo();

    state.select_page("home").unwrap();

    assert!(state.can_undo());
    assert!(state.can_redo());
    assert_eq!(state.document().active_layout().len(), 1);
}

#[test]
fn test_new_edit_after_undo_drops_redo() {
    let mut state = state();
    state.add_node(NodeKind::Text, None).unwrap();
    state.undo();
    assert!(state.can_redo());

    state.add_node(NodeKind::Image, None).unwrap();
    assert!(!state.can_redo());
}
