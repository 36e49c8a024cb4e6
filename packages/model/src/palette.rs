//! Default nodes for palette insertion.
//!
//! Every node created here receives a fresh id and a Desktop base layer with
//! kind-appropriate sizing. Composite kinds come with their item lists
//! (tabs, accordion items, slides) already populated.

use crate::id_generator::IdGenerator;
use crate::node::{
    AccordionItem, AlertType, CarouselImage, Content, DropdownOption, ListType, NavLink, Node,
    NodeKind, SocialLink, SocialNetwork, Tab,
};
use crate::style::{StyleLayer, StyleProperty};

/// Create a new node of `kind` with default content and styles
pub fn create_node(kind: NodeKind, ids: &mut IdGenerator) -> Node {
    let id = ids.new_id(kind);
    let mut sub_id = {
        let mut n = 0;
        let id = id.clone();
        move |prefix: &str| {
            n += 1;
            format!("{}-{}-{}", id, prefix, n)
        }
    };

    let (width, height) = default_size(kind);
    let mut base = StyleLayer::new()
        .with(StyleProperty::Top, "0px")
        .with(StyleProperty::Left, "0px")
        .with(StyleProperty::Width, width)
        .with(StyleProperty::Height, height);

    let mut content = Content::default();
    match kind {
        NodeKind::Container | NodeKind::Card => {
            base.set(StyleProperty::BackgroundColor, "bg-gray-100");
            base.set(StyleProperty::Padding, "p-4");
            if kind == NodeKind::Card {
                base.set(StyleProperty::BorderRadius, "rounded-lg");
                base.set(StyleProperty::BoxShadow, "shadow-md");
                base.set(StyleProperty::BackgroundColor, "bg-white");
            }
        }
        NodeKind::Text => {
            content.text = Some("Edit this text".to_string());
            base.set(StyleProperty::FontSize, "text-base");
            base.set(StyleProperty::TextColor, "text-gray-900");
        }
        NodeKind::Button => {
            content.button_text = Some("Click me".to_string());
            base.set(StyleProperty::BackgroundColor, "bg-blue-600");
            base.set(StyleProperty::TextColor, "text-white");
            base.set(StyleProperty::BorderRadius, "rounded-md");
            base.set(StyleProperty::FontWeight, "font-semibold");
        }
        NodeKind::Image => {
            content.image_url = Some("https://picsum.photos/400/300".to_string());
        }
        NodeKind::Dropdown => {
            content.dropdown_options = Some(vec![
                DropdownOption {
                    id: sub_id("option"),
                    label: "Option 1".to_string(),
                    url: "#".to_string(),
                },
                DropdownOption {
                    id: sub_id("option"),
                    label: "Option 2".to_string(),
                    url: "#".to_string(),
                },
            ]);
            base.set(StyleProperty::BackgroundColor, "bg-gray-200");
        }
        NodeKind::Input | NodeKind::Textarea => {
            content.placeholder = Some("Type here...".to_string());
            base.set(StyleProperty::Border, "border");
            base.set(StyleProperty::BorderColor, "border-gray-300");
            base.set(StyleProperty::Padding, "p-2");
            if kind == NodeKind::Input {
                content.input_type = Some("text".to_string());
            }
        }
        NodeKind::Video => {
            content.video_url = Some("https://www.youtube.com/embed/dQw4w9WgXcQ".to_string());
        }
        NodeKind::Divider => {
            base.set(StyleProperty::BackgroundColor, "bg-gray-300");
        }
        NodeKind::Icon => {
            content.icon_name = Some("star".to_string());
            base.set(StyleProperty::TextColor, "text-yellow-400");
        }
        NodeKind::ProgressBar => {
            content.progress = Some(50.0);
            base.set(StyleProperty::BackgroundColor, "bg-gray-200");
            base.set(StyleProperty::BarColor, "bg-blue-600");
            base.set(StyleProperty::BorderRadius, "rounded-full");
        }
        NodeKind::Alert => {
            content.alert_text = Some("This is an informational alert.".to_string());
            content.alert_type = Some(AlertType::Info);
            base.set(StyleProperty::BackgroundColor, "bg-blue-500");
            base.set(StyleProperty::TextColor, "text-white");
            base.set(StyleProperty::Padding, "p-4");
            base.set(StyleProperty::BorderRadius, "rounded-md");
        }
        NodeKind::Accordion => {
            content.accordion_items = Some(vec![
                AccordionItem {
                    id: sub_id("item"),
                    title: "Section 1".to_string(),
                    content: "Content for section 1.".to_string(),
                },
                AccordionItem {
                    id: sub_id("item"),
                    title: "Section 2".to_string(),
                    content: "Content for section 2.".to_string(),
                },
            ]);
        }
        NodeKind::Tabs => {
            content.tabs = Some(vec![
                Tab {
                    id: sub_id("tab"),
                    title: "Tab 1".to_string(),
                },
                Tab {
                    id: sub_id("tab"),
                    title: "Tab 2".to_string(),
                },
            ]);
            content.active_tab = Some(0);
        }
        NodeKind::Navbar | NodeKind::Footer => {
            content.nav_links = Some(vec![
                NavLink {
                    id: sub_id("link"),
                    text: "Home".to_string(),
                    url: "#".to_string(),
                },
                NavLink {
                    id: sub_id("link"),
                    text: "About".to_string(),
                    url: "#".to_string(),
                },
            ]);
            base.set(StyleProperty::BackgroundColor, "bg-gray-800");
            base.set(StyleProperty::TextColor, "text-white");
            base.set(StyleProperty::Padding, "p-4");
        }
        NodeKind::Form => {
            content.form_action = Some("#".to_string());
            content.form_method = Some(Default::default());
        }
        NodeKind::Label => {
            content.text = Some("Label".to_string());
        }
        NodeKind::Checkbox | NodeKind::Radio => {
            content.checked = Some(false);
        }
        NodeKind::Select => {
            content.select_options = Some("Option 1, Option 2, Option 3".to_string());
            base.set(StyleProperty::Border, "border");
        }
        NodeKind::Map => {
            content.map_query = Some("Eiffel Tower, Paris".to_string());
        }
        NodeKind::SocialIcons => {
            content.social_links = Some(vec![
                SocialLink {
                    id: sub_id("social"),
                    network: SocialNetwork::Twitter,
                    url: "https://twitter.com".to_string(),
                },
                SocialLink {
                    id: sub_id("social"),
                    network: SocialNetwork::Github,
                    url: "https://github.com".to_string(),
                },
            ]);
        }
        NodeKind::Table => {
            content.table_data = Some("Name,Role\nAda,Engineer\nGrace,Admiral".to_string());
        }
        NodeKind::List => {
            content.list_items = Some("First item\nSecond item\nThird item".to_string());
            content.list_type = Some(ListType::Unordered);
        }
        NodeKind::Blockquote => {
            content.quote = Some("Simplicity is prerequisite for reliability.".to_string());
            content.cite = Some("Edsger W. Dijkstra".to_string());
        }
        NodeKind::Rating => {
            content.rating = Some(4);
            content.max_rating = Some(5);
            base.set(StyleProperty::TextColor, "text-yellow-400");
        }
        NodeKind::Carousel => {
            content.carousel_images = Some(
                (1..=3)
                    .map(|n| CarouselImage {
                        id: sub_id("slide"),
                        src: format!("https://picsum.photos/seed/{}/800/400", n),
                        alt: format!("Slide {}", n),
                    })
                    .collect(),
            );
        }
        NodeKind::Fieldset => {
            content.legend_text = Some("Details".to_string());
            base.set(StyleProperty::Border, "border");
            base.set(StyleProperty::Padding, "p-4");
        }
        NodeKind::Spinner | NodeKind::Unknown => {}
    }

    Node::new(id, kind, kind.as_str())
        .with_base(base)
        .with_content(content)
}

fn default_size(kind: NodeKind) -> (&'static str, &'static str) {
    match kind {
        NodeKind::Container | NodeKind::Form | NodeKind::Fieldset => ("400px", "300px"),
        NodeKind::Card => ("300px", "200px"),
        NodeKind::Text | NodeKind::Label => ("200px", "40px"),
        NodeKind::Button | NodeKind::Dropdown => ("140px", "44px"),
        NodeKind::Image => ("300px", "200px"),
        NodeKind::Input | NodeKind::Select => ("240px", "40px"),
        NodeKind::Textarea => ("300px", "120px"),
        NodeKind::Video | NodeKind::Map => ("480px", "270px"),
        NodeKind::Divider => ("300px", "2px"),
        NodeKind::Icon | NodeKind::Checkbox | NodeKind::Radio => ("24px", "24px"),
        NodeKind::ProgressBar => ("300px", "16px"),
        NodeKind::Alert => ("400px", "60px"),
        NodeKind::Accordion | NodeKind::Tabs => ("400px", "240px"),
        NodeKind::Navbar | NodeKind::Footer => ("1280px", "64px"),
        NodeKind::SocialIcons | NodeKind::Rating => ("160px", "32px"),
        NodeKind::Table | NodeKind::List | NodeKind::Blockquote => ("320px", "160px"),
        NodeKind::Spinner => ("48px", "48px"),
        NodeKind::Carousel => ("800px", "400px"),
        NodeKind::Unknown => ("100px", "100px"),
    }
}
