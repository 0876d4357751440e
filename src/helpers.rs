/// Split off the fragment (#hash) from a URI string.
/// Returns (`uri_without_fragment`, `fragment_without_hash`).
/// Fragment is returned WITHOUT the leading '#'.
/// Optimization: Uses SIMD-accelerated memchr for fast '#' search
pub fn prune_fragment(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'#', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Split off the query (?search) from a fragment-free URI string.
/// Returns (`uri_without_query`, `query_without_question_mark`).
pub fn prune_query(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'?', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Split a query- and fragment-free URI into origin and path.
/// The path keeps its leading '/'; a URI with no path yields ("origin", "").
/// The "://" scheme marker is skipped so the authority's slashes are not
/// mistaken for the path start.
pub fn split_origin_path(input: &str) -> (&str, &str) {
    let authority_start = input.find("://").map_or(0, |pos| pos + 3);
    match memchr::memchr(b'/', input[authority_start..].as_bytes()) {
        Some(pos) => input.split_at(authority_start + pos),
        None => (input, ""),
    }
}
