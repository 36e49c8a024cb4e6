//! Symbolic design tokens and their CSS literals.
//!
//! The editor stores Tailwind-like tokens in style layers. Generated CSS uses
//! the literal values from these tables; literals (hex colors, numbers with
//! units, CSS functions, global keywords) are used as-is.

use pagewright_model::StyleProperty;

/// What a token expands to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenValue {
    /// A value for the property the token was set on
    Value(&'static str),
    /// A full declaration for a different property (`mt-8` → `margin-top`)
    Declaration(&'static str, &'static str),
}

const COLORS: &[(&str, &str)] = &[
    ("white", "#ffffff"),
    ("black", "#000000"),
    ("gray-100", "#f3f4f6"),
    ("gray-200", "#e5e7eb"),
    ("gray-300", "#d1d5db"),
    ("gray-400", "#9ca3af"),
    ("gray-500", "#6b7280"),
    ("gray-600", "#4b5563"),
    ("gray-700", "#374151"),
    ("gray-800", "#1f2937"),
    ("gray-900", "#111827"),
    ("red-400", "#f87171"),
    ("orange-400", "#fb923c"),
    ("yellow-400", "#facc15"),
    ("green-400", "#4ade80"),
    ("teal-400", "#2dd4bf"),
    ("blue-400", "#60a5fa"),
    ("indigo-400", "#818cf8"),
    ("purple-400", "#a78bfa"),
    ("pink-400", "#f472b6"),
    ("red-500", "#ef4444"),
    ("orange-500", "#f97316"),
    ("yellow-500", "#eab308"),
    ("green-500", "#22c55e"),
    ("teal-500", "#14b8a6"),
    ("blue-500", "#3b82f6"),
    ("indigo-500", "#6366f1"),
    ("purple-500", "#8b5cf6"),
    ("pink-500", "#ec4899"),
    ("red-600", "#dc2626"),
    ("orange-600", "#ea580c"),
    ("yellow-600", "#ca8a04"),
    ("green-600", "#16a34a"),
    ("teal-600", "#0d9488"),
    ("blue-600", "#2563eb"),
    ("indigo-600", "#4f46e5"),
    ("purple-600", "#7c3aed"),
    ("pink-600", "#db2777"),
];

const PADDING: &[(&str, &str)] = &[
    ("p-0", "0"),
    ("p-1", "0.25rem"),
    ("p-2", "0.5rem"),
    ("p-4", "1rem"),
    ("p-6", "1.5rem"),
    ("p-8", "2rem"),
];

const MARGIN: &[(&str, &str)] = &[
    ("m-0", "0"),
    ("m-1", "0.25rem"),
    ("m-2", "0.5rem"),
    ("m-4", "1rem"),
    ("m-6", "1.5rem"),
    ("m-8", "2rem"),
];

const MARGIN_SIDES: &[(&str, &str, &str)] = &[
    ("mt-8", "margin-top", "2rem"),
    ("mb-8", "margin-bottom", "2rem"),
];

const WIDTH: &[(&str, &str)] = &[
    ("w-auto", "auto"),
    ("w-full", "100%"),
    ("w-1/2", "50%"),
    ("w-1/3", "33.333333%"),
    ("w-1/4", "25%"),
    ("w-screen", "100vw"),
];

const HEIGHT: &[(&str, &str)] = &[
    ("h-auto", "auto"),
    ("h-full", "100%"),
    ("h-1/2", "50%"),
    ("h-1/3", "33.333333%"),
    ("h-1/4", "25%"),
    ("h-screen", "100vh"),
    ("h-96", "24rem"),
];

const FONT_SIZE: &[(&str, &str)] = &[
    ("text-xs", "0.75rem"),
    ("text-sm", "0.875rem"),
    ("text-base", "1rem"),
    ("text-lg", "1.125rem"),
    ("text-xl", "1.25rem"),
    ("text-2xl", "1.5rem"),
    ("text-4xl", "2.25rem"),
];

const FONT_WEIGHT: &[(&str, &str)] = &[
    ("font-light", "300"),
    ("font-normal", "400"),
    ("font-medium", "500"),
    ("font-semibold", "600"),
    ("font-bold", "700"),
];

const TEXT_DECORATION: &[(&str, &str)] = &[
    ("none", "none"),
    ("underline", "underline"),
    ("line-through", "line-through"),
    ("overline", "overline"),
];

const BORDER_RADIUS: &[(&str, &str)] = &[
    ("rounded-none", "0px"),
    ("rounded-sm", "0.125rem"),
    ("rounded", "0.25rem"),
    ("rounded-md", "0.375rem"),
    ("rounded-lg", "0.5rem"),
    ("rounded-full", "9999px"),
];

const BOX_SHADOW: &[(&str, &str)] = &[
    ("shadow-none", "0 0 #0000"),
    ("shadow-sm", "0 1px 2px 0 rgb(0 0 0 / 0.05)"),
    (
        "shadow-md",
        "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)",
    ),
    (
        "shadow-lg",
        "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)",
    ),
    (
        "shadow-xl",
        "0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1)",
    ),
    ("shadow-2xl", "0 25px 50px -12px rgb(0 0 0 / 0.25)"),
    ("shadow-inner", "inset 0 2px 4px 0 rgb(0 0 0 / 0.05)"),
];

const KEYWORDS: &[&str] = &[
    "auto",
    "none",
    "inherit",
    "initial",
    "unset",
    "transparent",
    "currentColor",
];

fn find(table: &[(&'static str, &'static str)], token: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| *key == token)
        .map(|(_, value)| *value)
}

fn palette(name: &str) -> Option<&'static str> {
    find(COLORS, name)
}

/// CSS property a style property is written to
pub fn css_property_name(property: StyleProperty) -> &'static str {
    match property {
        StyleProperty::Top => "top",
        StyleProperty::Left => "left",
        StyleProperty::ZIndex => "z-index",
        StyleProperty::Padding => "padding",
        StyleProperty::Margin => "margin",
        StyleProperty::Width => "width",
        StyleProperty::Height => "height",
        StyleProperty::MinHeight => "min-height",
        StyleProperty::BackgroundColor => "background-color",
        StyleProperty::TextColor => "color",
        StyleProperty::BarColor => "--bar-color",
        StyleProperty::FontSize => "font-size",
        StyleProperty::FontWeight => "font-weight",
        StyleProperty::TextDecoration => "text-decoration",
        StyleProperty::Border => "border",
        StyleProperty::BorderColor => "border-color",
        StyleProperty::BorderRadius => "border-radius",
        StyleProperty::BoxShadow => "box-shadow",
    }
}

/// Whether `value` is already a CSS literal and passes through verbatim.
///
/// Values that could end the declaration or the rule are never literals.
pub fn is_literal(value: &str) -> bool {
    let value = value.trim();
    if value.contains([';', '{', '}']) {
        return false;
    }
    let mut chars = value.chars();
    match chars.next() {
        None => false,
        Some('#') => true,
        Some(ch) if ch.is_ascii_digit() || ch == '.' => true,
        Some('-') => matches!(chars.next(), Some(ch) if ch.is_ascii_digit() || ch == '.'),
        _ => (value.ends_with(')') && value.contains('(')) || KEYWORDS.contains(&value),
    }
}

/// Look up a design token for a property
pub fn lookup(property: StyleProperty, token: &str) -> Option<TokenValue> {
    let value = match property {
        StyleProperty::Padding => find(PADDING, token),
        StyleProperty::Margin => {
            if let Some(&(_, name, value)) =
                MARGIN_SIDES.iter().find(|(key, _, _)| *key == token)
            {
                return Some(TokenValue::Declaration(name, value));
            }
            find(MARGIN, token)
        }
        StyleProperty::Width => find(WIDTH, token),
        StyleProperty::Height | StyleProperty::MinHeight => find(HEIGHT, token),
        StyleProperty::BackgroundColor | StyleProperty::BarColor => match token {
            "bg-transparent" => Some("transparent"),
            _ => token.strip_prefix("bg-").and_then(palette),
        },
        StyleProperty::TextColor => match token {
            "text-inherit" => Some("inherit"),
            _ => token.strip_prefix("text-").and_then(palette),
        },
        StyleProperty::BorderColor => token.strip_prefix("border-").and_then(palette),
        StyleProperty::FontSize => find(FONT_SIZE, token),
        StyleProperty::FontWeight => find(FONT_WEIGHT, token),
        StyleProperty::TextDecoration => find(TEXT_DECORATION, token),
        StyleProperty::BorderRadius => find(BORDER_RADIUS, token),
        StyleProperty::BoxShadow => find(BOX_SHADOW, token),
        StyleProperty::Top
        | StyleProperty::Left
        | StyleProperty::ZIndex
        | StyleProperty::Border => None,
    };
    value.map(TokenValue::Value)
}

/// Resolve a theme color given as hex or as a `bg-*`/`text-*`/`border-*` token
pub fn theme_color(value: &str, fallback: &'static str) -> String {
    if value.starts_with('#') {
        return value.to_string();
    }
    let name = ["bg-", "text-", "border-"]
        .iter()
        .find_map(|prefix| value.strip_prefix(prefix))
        .unwrap_or(value);
    palette(name)
        .or(match name {
            "transparent" => Some("transparent"),
            "inherit" => Some("inherit"),
            _ => None,
        })
        .unwrap_or(fallback)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literals() {
        assert!(is_literal("#3366ff"));
        assert!(is_literal("10px"));
        assert!(is_literal("-4px"));
        assert!(is_literal(".5rem"));
        assert!(is_literal("rgb(0 0 0 / 0.5)"));
        assert!(is_literal("auto"));
        assert!(!is_literal("bg-blue-500"));
        assert!(!is_literal("w-full"));
        assert!(!is_literal(""));
    }

    #[test]
    fn test_values_breaking_out_of_declaration_are_not_literals() {
        assert!(!is_literal("1px; } body { display: none"));
        assert!(!is_literal("calc(1px) }"));
        assert!(!is_literal("#fff;"));
        assert!(!is_literal("{"));
    }

    #[test]
    fn test_color_tokens() {
        assert_eq!(
            lookup(StyleProperty::BackgroundColor, "bg-blue-500"),
            Some(TokenValue::Value("#3b82f6"))
        );
        assert_eq!(
            lookup(StyleProperty::TextColor, "text-white"),
            Some(TokenValue::Value("#ffffff"))
        );
        assert_eq!(
            lookup(StyleProperty::BorderColor, "border-gray-500"),
            Some(TokenValue::Value("#6b7280"))
        );
        assert_eq!(lookup(StyleProperty::BackgroundColor, "bg-chartreuse"), None);
    }

    #[test]
    fn test_side_margin_expands_to_declaration() {
        assert_eq!(
            lookup(StyleProperty::Margin, "mt-8"),
            Some(TokenValue::Declaration("margin-top", "2rem"))
        );
        assert_eq!(lookup(StyleProperty::Margin, "m-4"), Some(TokenValue::Value("1rem")));
    }

    #[test]
    fn test_theme_color() {
        assert_eq!(theme_color("#123456", "#ffffff"), "#123456");
        assert_eq!(theme_color("bg-gray-800", "#ffffff"), "#1f2937");
        assert_eq!(theme_color("text-gray-900", "#000000"), "#111827");
        assert_eq!(theme_color("mystery", "#000000"), "#000000");
    }
}
