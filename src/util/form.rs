//! Parsing for free-text form inputs.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Parse a numeric text field. Blank or invalid input yields `None`.
pub fn parse_number_input(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parse an integer id field such as a user or playlist id.
pub fn parse_integer_input(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}

/// Trimmed text, or `None` when blank.
pub fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}

/// Split a comma-separated id list, dropping blanks.
pub fn split_id_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
