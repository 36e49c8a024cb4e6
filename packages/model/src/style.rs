use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Visual properties a node can carry in a style layer.
///
/// Declaration order is the emission order of generated CSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleProperty {
    Top,
    Left,
    ZIndex,
    Padding,
    Margin,
    Width,
    Height,
    MinHeight,
    BackgroundColor,
    TextColor,
    BarColor,
    FontSize,
    FontWeight,
    TextDecoration,
    Border,
    BorderColor,
    BorderRadius,
    BoxShadow,
}

impl StyleProperty {
    pub const ALL: [StyleProperty; 18] = [
        StyleProperty::Top,
        StyleProperty::Left,
        StyleProperty::ZIndex,
        StyleProperty::Padding,
        StyleProperty::Margin,
        StyleProperty::Width,
        StyleProperty::Height,
        StyleProperty::MinHeight,
        StyleProperty::BackgroundColor,
        StyleProperty::TextColor,
        StyleProperty::BarColor,
        StyleProperty::FontSize,
        StyleProperty::FontWeight,
        StyleProperty::TextDecoration,
        StyleProperty::Border,
        StyleProperty::BorderColor,
        StyleProperty::BorderRadius,
        StyleProperty::BoxShadow,
    ];

    /// Properties that are scaled proportionally for narrower viewports
    pub fn is_scalable(self) -> bool {
        matches!(
            self,
            StyleProperty::Top
                | StyleProperty::Left
                | StyleProperty::Width
                | StyleProperty::Height
                | StyleProperty::FontSize
        )
    }
}

/// A partial bag of visual properties for one interaction state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleLayer(BTreeMap<StyleProperty, String>);

impl StyleLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, property: StyleProperty, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    pub fn set(&mut self, property: StyleProperty, value: impl Into<String>) {
        self.0.insert(property, value.into());
    }

    pub fn remove(&mut self, property: StyleProperty) -> Option<String> {
        self.0.remove(&property)
    }

    pub fn get(&self, property: StyleProperty) -> Option<&str> {
        self.0.get(&property).map(String::as_str)
    }

    pub fn contains(&self, property: StyleProperty) -> bool {
        self.0.contains_key(&property)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate properties in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (StyleProperty, &str)> {
        self.0.iter().map(|(property, value)| (*property, value.as_str()))
    }

    /// Per-property merge: values in `self` win, missing ones come from `fallback`.
    pub fn merged_over(&self, fallback: &StyleLayer) -> StyleLayer {
        let mut merged = fallback.clone();
        merged
            .0
            .extend(self.0.iter().map(|(property, value)| (*property, value.clone())));
        merged
    }
}

impl FromIterator<(StyleProperty, String)> for StyleLayer {
    fn from_iter<I: IntoIterator<Item = (StyleProperty, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The style layers a node carries for one viewport.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportStyles {
    #[serde(default)]
    pub base: StyleLayer,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover: Option<StyleLayer>,
}

impl ViewportStyles {
    pub fn new(base: StyleLayer) -> Self {
        Self { base, hover: None }
    }

    pub fn with_hover(mut self, hover: StyleLayer) -> Self {
        self.hover = Some(hover);
        self
    }
}
