use pagewright_model::{format_number, Node, NodeKind, StyleLayer, StyleProperty, Viewport};
use pagewright_style::{css_property_name, is_literal, lookup, TokenValue};
use std::sync::Arc;
use tracing::trace;

const DEFAULT_BORDER_COLOR: &str = "#6b7280";

const SPIN_KEYFRAMES: &str = "@keyframes spin { to { transform: rotate(360deg); } }";

/// Compile the rules for a page forest.
///
/// `viewports` is the list of known viewports; the first entry is the
/// reference viewport. Style entries for unknown viewport names are skipped.
pub fn compile_layout_css(layout: &[Arc<Node>], viewports: &[Viewport]) -> String {
    let mut css = String::new();
    let mut has_spinner = false;
    for node in layout {
        compile_node(node, viewports, &mut css, &mut has_spinner);
    }
    if has_spinner {
        css.push_str(SPIN_KEYFRAMES);
        css.push('\n');
    }
    css
}

fn compile_node(node: &Node, viewports: &[Viewport], css: &mut String, has_spinner: &mut bool) {
    for (index, viewport) in viewports.iter().enumerate() {
        let Some(styles) = node.styles_by_viewport.get(&viewport.name) else {
            continue;
        };

        let mut block = String::new();
        let base = declarations(&styles.base);
        if !base.is_empty() {
            block.push_str(&rule(&format!("#{}", node.id), "position: absolute; ", &base));
        }
        if let Some(hover) = &styles.hover {
            let hover = declarations(hover);
            if !hover.is_empty() {
                block.push_str(&rule(&format!("#{}:hover", node.id), "", &hover));
            }
        }
        if block.is_empty() {
            continue;
        }

        if index == 0 {
            css.push_str(&block);
        } else {
            css.push_str(&format!(
                "@media (max-width: {}px) {{\n{}}}\n",
                viewport.breakpoint, block
            ));
        }
    }

    for name in node.styles_by_viewport.keys() {
        if !viewports.iter().any(|viewport| &viewport.name == name) {
            trace!(node_id = %node.id, viewport = %name, "Skipping styles for unknown viewport");
        }
    }

    compile_kind_rules(node, css, has_spinner);

    for child in &node.children {
        compile_node(child, viewports, css, has_spinner);
    }
}

/// Rules every node of a kind needs regardless of its styles
fn compile_kind_rules(node: &Node, css: &mut String, has_spinner: &mut bool) {
    match node.kind {
        NodeKind::ProgressBar => {
            let progress = node.content.progress.unwrap_or(0.0).clamp(0.0, 100.0);
            css.push_str(&format!(
                "#{} .progress-bar-inner {{ width: {}%; height: 100%; background-color: var(--bar-color, #2563eb); border-radius: inherit; transition: width 0.3s ease; }}\n",
                node.id,
                format_number(progress)
            ));
        }
        NodeKind::Alert => {
            css.push_str(&format!(
                "#{} {{ display: flex; align-items: flex-start; gap: 0.75rem; }}\n",
                node.id
            ));
        }
        NodeKind::Spinner => {
            *has_spinner = true;
            css.push_str(&format!(
                "#{} {{ border: 4px solid #4b5563; border-top-color: #3b82f6; border-radius: 50%; animation: spin 1s linear infinite; }}\n",
                node.id
            ));
        }
        _ => {}
    }
}

fn rule(selector: &str, prefix: &str, declarations: &[(String, String)]) -> String {
    let mut body = String::from(prefix);
    for (property, value) in declarations {
        body.push_str(&format!("{}: {}; ", property, value));
    }
    format!("{} {{ {}}}\n", selector, body)
}

/// Translate a style layer into CSS declarations, in property order.
///
/// Literal values pass through, tokens are looked up, and unrecognized
/// tokens are dropped. `border` expands using the layer's `borderColor`.
pub fn declarations(layer: &StyleLayer) -> Vec<(String, String)> {
    let mut out = Vec::new();
    for (property, value) in layer.iter() {
        let value = value.trim();
        if value.is_empty() || property == StyleProperty::BorderColor {
            continue;
        }

        if property == StyleProperty::Border {
            out.extend(border_declarations(value, layer.get(StyleProperty::BorderColor)));
            continue;
        }

        let name = css_property_name(property);
        if is_literal(value) {
            out.push((name.to_string(), value.to_string()));
            continue;
        }
        match lookup(property, value) {
            Some(TokenValue::Value(literal)) => out.push((name.to_string(), literal.to_string())),
            Some(TokenValue::Declaration(other, literal)) => {
                out.push((other.to_string(), literal.to_string()))
            }
            None => trace!(property = name, token = value, "Dropping unrecognized token"),
        }
    }
    out
}

fn border_declarations(value: &str, color: Option<&str>) -> Vec<(String, String)> {
    if value == "none" || value == "border-none" {
        return vec![("border".to_string(), "none".to_string())];
    }

    let color = color
        .and_then(|color| {
            if is_literal(color) {
                Some(color.to_string())
            } else {
                match lookup(StyleProperty::BorderColor, color) {
                    Some(TokenValue::Value(literal)) => Some(literal.to_string()),
                    _ => None,
                }
            }
        })
        .unwrap_or_else(|| DEFAULT_BORDER_COLOR.to_string());

    let mut out = vec![("border".to_string(), format!("1px solid {}", color))];
    if value.contains("dashed") {
        out.push(("border-style".to_string(), "dashed".to_string()));
    }
    out
}
