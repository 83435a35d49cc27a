/// Joins filter expressions with `or`, wrapping each one in parentheses.
/// Returns `None` for an absent or empty list.
pub fn join_filters(filters: Option<&[String]>) -> Option<String> {
    let filters = filters.filter(|f| !f.is_empty())?;
    let joined = filters
        .iter()
        .map(|f| format!("({f})"))
        .collect::<Vec<_>>()
        .join(" or ");
    Some(joined)
}

/// Wraps a joined filter in literal double quotes, the form tshark receives it in.
pub fn quoted(expr: &str) -> String {
    format!("\"{expr}\"")
}
