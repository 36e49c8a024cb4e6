use serde::{Deserialize, Serialize};

/// Name of the viewport every other viewport is derived from
pub const REFERENCE_VIEWPORT: &str = "Desktop";

/// A named target rendering size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub name: String,
    pub width: u32,
    pub height: u32,
    /// Styles for this viewport apply at or below this width
    pub breakpoint: u32,
}

impl Viewport {
    pub fn new(name: impl Into<String>, width: u32, height: u32, breakpoint: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            breakpoint,
        }
    }

    pub fn desktop() -> Self {
        Self::new(REFERENCE_VIEWPORT, 1280, 720, 1280)
    }

    pub fn tablet() -> Self {
        Self::new("Tablet", 768, 1024, 1024)
    }

    pub fn mobile() -> Self {
        Self::new("Mobile", 375, 667, 767)
    }

    /// Built-in viewports, reference viewport first
    pub fn defaults() -> Vec<Viewport> {
        vec![Self::desktop(), Self::tablet(), Self::mobile()]
    }

    pub fn find<'a>(viewports: &'a [Viewport], name: &str) -> Option<&'a Viewport> {
        viewports.iter().find(|viewport| viewport.name == name)
    }
}
