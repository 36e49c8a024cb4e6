use crate::{compile_layout_html, CompileOptions, LinkMode, INERT_HREF};
use pagewright_model::{
    AlertType, Content, Link, Node, NodeKind, SocialLink, SocialNetwork, Tab,
};
use std::collections::BTreeMap;
use std::sync::Arc;

fn compile(nodes: Vec<Node>) -> String {
    compile_with(nodes, LinkMode::SinglePage)
}

fn compile_with(nodes: Vec<Node>, links: LinkMode<'_>) -> String {
    let layout: Vec<Arc<Node>> = nodes.into_iter().map(Arc::new).collect();
    compile_layout_html(&layout, links, CompileOptions::default())
}

fn text(id: &str, value: &str) -> Node {
    Node::new(id, NodeKind::Text, "Text").with_content(Content {
        text: Some(value.to_string()),
        ..Default::default()
    })
}

#[test]
fn test_compile_text() {
    let html = compile(vec![text("t1", "Hi")]);
    assert_eq!(html, "<p id=\"t1\">Hi</p>\n");
}

#[test]
fn test_text_is_escaped() {
    let html = compile(vec![text("t1", "<b>Fish & \"Chips\"</b>")]);
    assert!(html.contains("&lt;b&gt;Fish &amp; &quot;Chips&quot;&lt;/b&gt;"));
    assert!(!html.contains("<b>"));
}

#[test]
fn test_children_are_nested_and_indented() {
    let container = Node::new("c1", NodeKind::Container, "Container")
        .with_child(text("t1", "One"))
        .with_child(text("t2", "Two"));

    let html = compile(vec![container]);

    assert_eq!(
        html,
        "<div id=\"c1\">\n  <p id=\"t1\">One</p>\n  <p id=\"t2\">Two</p>\n</div>\n"
    );
}

#[test]
fn test_compact_output() {
    let container = Node::new("c1", NodeKind::Card, "Card").with_child(text("t1", "One"));
    let layout = vec![Arc::new(container)];
    let options = CompileOptions {
        pretty: false,
        ..CompileOptions::default()
    };

    let html = compile_layout_html(&layout, LinkMode::SinglePage, options);
    assert_eq!(html, "<div id=\"c1\"><p id=\"t1\">One</p></div>");
}

#[test]
fn test_internal_link_resolves_to_filename_in_project_mode() {
    let mut files = BTreeMap::new();
    files.insert("about".to_string(), "about.html".to_string());

    let html = compile_with(
        vec![
            text("t1", "About").with_link(Link::Page("about".to_string())),
            text("t2", "Gone").with_link(Link::Page("deleted".to_string())),
        ],
        LinkMode::Project(&files),
    );

    assert!(html.contains("<a href=\"about.html\">\n  <p id=\"t1\">About</p>\n</a>"));
    assert!(html.contains("<a href=\"#\">\n  <p id=\"t2\">Gone</p>\n</a>"));
}

#[test]
fn test_internal_link_is_inert_in_single_page_mode() {
    let html = compile(vec![
        text("t1", "About").with_link(Link::Page("about".to_string()))
    ]);
    assert!(html.contains(&format!("<a href=\"{}\">", INERT_HREF)));
}

#[test]
fn test_external_link_is_escaped() {
    let html = compile(vec![text("t1", "Search").with_link(Link::External(
        "https://example.com/?a=1&b=\"2\"".to_string(),
    ))]);
    assert!(html.contains("<a href=\"https://example.com/?a=1&amp;b=&quot;2&quot;\">"));
}

#[test]
fn test_event_handlers_become_attributes() {
    let button = Node::new("b1", NodeKind::Button, "Button")
        .with_content(Content {
            button_text: Some("Go".to_string()),
            ..Default::default()
        })
        .with_event("onclick", "alert('hi')")
        .with_event("on click", "ignored()")
        .with_event("onmouseover", "");

    let html = compile(vec![button]);

    assert_eq!(
        html,
        "<button id=\"b1\" onclick=\"alert(&#39;hi&#39;)\">Go</button>\n"
    );
}

#[test]
fn test_unknown_kind_degrades_to_comment() {
    let html = compile(vec![Node::new("u1", NodeKind::Unknown, "Mystery")]);
    assert_eq!(html, "<!-- Unknown: Unknown -->\n");
}

#[test]
fn test_missing_icon_degrades_to_comment() {
    let icon = Node::new("i1", NodeKind::Icon, "Icon").with_content(Content {
        icon_name: Some("unicorn".to_string()),
        ..Default::default()
    });
    assert_eq!(compile(vec![icon]), "<!-- Icon not found: unicorn -->\n");

    let star = Node::new("i2", NodeKind::Icon, "Icon").with_content(Content {
        icon_name: Some("star".to_string()),
        ..Default::default()
    });
    let html = compile(vec![star]);
    assert!(html.starts_with("<div id=\"i2\"><svg"));
    assert!(html.contains("width=\"24\""));
}

#[test]
fn test_tabs_render_nav_and_panels() {
    let tabs = Node::new("tabs1", NodeKind::Tabs, "Tabs")
        .with_content(Content {
            tabs: Some(vec![
                Tab {
                    id: "a".to_string(),
                    title: "First".to_string(),
                },
                Tab {
                    id: "b".to_string(),
                    title: "Second".to_string(),
                },
            ]),
            active_tab: Some(1),
            ..Default::default()
        })
        .with_child(text("p1", "Pane one"))
        .with_child(text("p2", "Pane two"));

    let html = compile(vec![tabs]);

    assert!(html.contains("class=\"tabs-container\""));
    assert!(html.contains("<button class=\"tab-button\" data-tab-index=\"0\">First</button>"));
    assert!(html.contains(
        "<button class=\"tab-button active\" data-tab-index=\"1\">Second</button>"
    ));
    assert!(html.contains("<div class=\"tab-content\" data-tab-content=\"0\">"));
    assert!(html.contains("<div class=\"tab-content active\" data-tab-content=\"1\">"));
    assert!(html.contains("<p id=\"p2\">Pane two</p>"));
}

#[test]
fn test_rating_fills_leading_stars() {
    let rating = Node::new("r1", NodeKind::Rating, "Rating").with_content(Content {
        rating: Some(2),
        max_rating: Some(4),
        ..Default::default()
    });

    let html = compile(vec![rating]);

    assert_eq!(html.matches("<span class=\"filled\">").count(), 2);
    assert_eq!(html.matches("&#9733;").count(), 4);
}

#[test]
fn test_rating_star_count_is_capped() {
    let rating = Node::new("r1", NodeKind::Rating, "Rating").with_content(Content {
        rating: Some(3),
        max_rating: Some(u32::MAX),
        ..Default::default()
    });

    let html = compile(vec![rating]);

    assert_eq!(html.matches("&#9733;").count(), 10);
    assert_eq!(html.matches("<span class=\"filled\">").count(), 3);
}

#[test]
fn test_unknown_social_network_degrades_to_comment() {
    let social = Node::new("s1", NodeKind::SocialIcons, "Social").with_content(Content {
        social_links: Some(vec![
            SocialLink {
                id: "a".to_string(),
                network: SocialNetwork::Unknown,
                url: "https://y".to_string(),
            },
            SocialLink {
                id: "b".to_string(),
                network: SocialNetwork::Github,
                url: "https://github.com".to_string(),
            },
        ]),
        ..Default::default()
    });

    let html = compile(vec![social]);

    assert!(html.contains("<!-- Unknown social network -->"));
    assert!(!html.contains("https://y"));
    assert!(html.contains("<a href=\"https://github.com\" aria-label=\"github\"><svg"));
}

#[test]
fn test_unknown_alert_type_keeps_text() {
    let alert = Node::new("a1", NodeKind::Alert, "Alert").with_content(Content {
        alert_type: Some(AlertType::Unknown),
        alert_text: Some("Heads up".to_string()),
        ..Default::default()
    });

    let html = compile(vec![alert]);

    assert_eq!(
        html,
        "<div id=\"a1\"><!-- Unknown alert type --><span>Heads up</span></div>\n"
    );
}

#[test]
fn test_table_first_row_is_header() {
    let table = Node::new("tb", NodeKind::Table, "Table").with_content(Content {
        table_data: Some("Name, Role\nAda, Engineer".to_string()),
        ..Default::default()
    });

    let html = compile(vec![table]);

    assert!(html.contains("<tr><th>Name</th><th>Role</th></tr>"));
    assert!(html.contains("<tr><td>Ada</td><td>Engineer</td></tr>"));
}

#[test]
fn test_map_query_is_percent_encoded() {
    let map = Node::new("m1", NodeKind::Map, "Map").with_content(Content {
        map_query: Some("Eiffel Tower, Paris".to_string()),
        ..Default::default()
    });

    let html = compile(vec![map]);

    assert!(html.contains("key=YOUR_API_KEY&amp;q=Eiffel%20Tower%2C%20Paris\""));
}

#[test]
fn test_select_splits_options() {
    let select = Node::new("s1", NodeKind::Select, "Select").with_content(Content {
        select_options: Some("Red, Green,,Blue".to_string()),
        input_name: Some("color".to_string()),
        is_required: Some(true),
        ..Default::default()
    });

    let html = compile(vec![select]);

    assert!(html.starts_with("<select id=\"s1\" name=\"color\" required>"));
    assert_eq!(html.matches("<option>").count(), 3);
    assert!(html.contains("<option>Green</option>"));
}

#[test]
fn test_every_palette_kind_renders_its_id() {
    let mut ids = pagewright_model::IdGenerator::new("render");
    for kind in NodeKind::PALETTE {
        let node = pagewright_model::palette::create_node(kind, &mut ids);
        let id = node.id.clone();
        let html = compile(vec![node]);
        assert!(
            html.contains(&format!("id=\"{}\"", id)),
            "{} did not render its id:\n{}",
            kind,
            html
        );
    }
}
