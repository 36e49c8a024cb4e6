/// Split a CSS length such as `12.5px` into its number and unit.
///
/// The unit may be empty (`"40"`). Returns `None` when the value does not
/// start with a number or the remainder is not a plain unit.
pub fn split_dimension(value: &str) -> Option<(f64, &str)> {
    let value = value.trim();
    let split = value
        .char_indices()
        .find(|(i, ch)| {
            !(ch.is_ascii_digit() || *ch == '.' || (*i == 0 && (*ch == '-' || *ch == '+')))
        })
        .map_or(value.len(), |(i, _)| i);
    let (number, unit) = value.split_at(split);
    if !unit.chars().all(|ch| ch.is_ascii_alphabetic() || ch == '%') {
        return None;
    }
    let number: f64 = number.parse().ok()?;
    Some((number, unit))
}

/// Format a computed length with at most four decimals and no trailing zeros
pub fn format_number(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    let text = format!("{:.4}", rounded);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
