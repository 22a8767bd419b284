//! Order-preserving deduplication.
//!
//! URL order carries meaning for a remote (the first URL is the fetch URL,
//! later ones are extra push targets), so duplicates are removed without ever
//! moving a value away from its first position.

/// Returns the distinct values of `items` in order of first appearance.
///
/// Only `PartialEq` is required of the element type; membership is checked
/// against the values kept so far.
///
/// ```
/// use origin_sync::dedup::dedup;
///
/// let urls = dedup(vec!["a", "b", "a", "c", "b"]);
/// assert_eq!(urls, vec!["a", "b", "c"]);
/// ```
pub fn dedup<T, I>(items: I) -> Vec<T>
where
    T: PartialEq,
    I: IntoIterator<Item = T>,
{
    let mut kept: Vec<T> = Vec::new();
    for item in items {
        if !kept.contains(&item) {
            kept.push(item);
        }
    }
    kept
}
