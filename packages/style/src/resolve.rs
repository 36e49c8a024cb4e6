use pagewright_model::{
    format_number, split_dimension, Node, StyleLayer, Viewport, ViewportStyles, REFERENCE_VIEWPORT,
};
use tracing::trace;

/// Compute a node's effective styles for `target`.
///
/// `viewports` is the ordered list of known viewports; its first entry is the
/// reference viewport.
///
/// 1. An explicit entry for `target` is merged over the reference layers.
/// 2. The reference viewport without an override resolves to its own layers.
/// 3. Any other viewport without an entry gets the reference base layer with
///    `top`, `left`, `width`, `height` and `fontSize` scaled by
///    `target.width / reference.width`. Hover layers are copied unscaled.
pub fn resolve(node: &Node, target: &Viewport, viewports: &[Viewport]) -> ViewportStyles {
    let reference = viewports.first();
    let reference_name = reference.map_or(REFERENCE_VIEWPORT, |viewport| viewport.name.as_str());
    let reference_styles = node
        .styles_by_viewport
        .get(reference_name)
        .cloned()
        .unwrap_or_default();

    if let Some(explicit) = node.styles_by_viewport.get(&target.name) {
        let hover = match (&explicit.hover, &reference_styles.hover) {
            (Some(own), Some(fallback)) => Some(own.merged_over(fallback)),
            (Some(own), None) => Some(own.clone()),
            (None, fallback) => fallback.clone(),
        };
        return ViewportStyles {
            base: explicit.base.merged_over(&reference_styles.base),
            hover,
        };
    }

    if target.name == reference_name {
        return reference_styles;
    }

    let reference_width = reference.map_or(target.width, |viewport| viewport.width);
    if reference_width == 0 {
        return reference_styles;
    }
    let scale = f64::from(target.width) / f64::from(reference_width);
    trace!(node_id = %node.id, viewport = %target.name, scale, "Scaling reference styles");

    ViewportStyles {
        base: scale_layer(&reference_styles.base, scale),
        hover: reference_styles.hover,
    }
}

fn scale_layer(layer: &StyleLayer, scale: f64) -> StyleLayer {
    layer
        .iter()
        .map(|(property, value)| {
            let value = if property.is_scalable() {
                scale_value(value, scale).unwrap_or_else(|| value.to_string())
            } else {
                value.to_string()
            };
            (property, value)
        })
        .collect()
}

/// Scale a `<number><unit>` value, keeping the unit.
///
/// Returns `None` for anything else (tokens, keywords, bare numbers).
pub fn scale_value(value: &str, scale: f64) -> Option<String> {
    let (number, unit) = split_dimension(value)?;
    if unit.is_empty() {
        return None;
    }
    Some(format!("{}{}", format_number(number * scale), unit))
}
