// Splitting of the raw text fields into node labels and edge tokens.
//
// - Node field: comma separated, pieces trimmed, empty pieces dropped
// - Edge field: one `u-v` token per line, lines trimmed, blank lines dropped

/// Split the node field on `,`.
pub fn split_nodes(text: &str) -> Vec<&str> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split the edge field into lines.
pub fn split_edges(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split an edge token on its first `-` and trim both sides.
/// Returns None when there is no separator.
pub fn split_edge_token(token: &str) -> Option<(&str, &str)> {
    let (u, v) = token.split_once('-')?;
    Some((u.trim(), v.trim()))
}
